//! Terminal client for the ExtractGen service: browse local files, upload
//! PDFs, and open the generated result links in the browser.

#![forbid(unsafe_code)]

pub mod cli;
pub mod components;
pub mod model;
pub mod services;
pub mod settings;
pub mod state_store;
pub mod termination;
pub mod ui_manager;
pub mod utils;
