use std::path::PathBuf;

use clap::Parser;

use crate::utils::version;

#[derive(Parser, Debug)]
#[command(author, version = version(), about)]
pub struct Cli {
    /// Base address files are PUT to, overrides config/environment
    #[arg(long)]
    pub upload_url: Option<String>,

    /// Address the result list is fetched from, overrides config/environment
    #[arg(long)]
    pub download_url: Option<String>,

    /// Read endpoints from this file instead of the config directory
    #[arg(long)]
    pub endpoints_file: Option<PathBuf>,
}
