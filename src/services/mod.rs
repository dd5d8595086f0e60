pub mod extract_client;
pub mod link_opener;
pub mod local_data_fetcher;
