pub mod action;
pub mod local_data_item;
pub mod notice;
pub mod results;
pub mod state;
pub mod tracked_file;
pub mod transfer_state;
