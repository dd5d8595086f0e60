#![forbid(unsafe_code)]

use clap::Parser;
use color_eyre::eyre;

use extractgen_tui::cli::Cli;
use extractgen_tui::settings::endpoints::{endpoints_file_path, load_endpoints};
use extractgen_tui::state_store::StateStore;
use extractgen_tui::termination::{create_termination, Interrupted};
use extractgen_tui::ui_manager::UiManager;
use extractgen_tui::utils::{initialize_logging, initialize_panic_handler};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    initialize_logging()?;
    initialize_panic_handler()?;
    let args = Cli::parse();
    let (terminator, mut interrupt_rx) = create_termination();
    let (state_store, state_rx) = StateStore::new();
    let (ui_manager, action_rx) = UiManager::new();

    match load_endpoints(args.endpoints_file, args.upload_url, args.download_url) {
        Ok(endpoints) => {
            tokio::try_join!(
                state_store.main_loop(terminator, action_rx, interrupt_rx.resubscribe(), endpoints),
                ui_manager.main_loop(state_rx, interrupt_rx.resubscribe()),
            )?;
        }
        Err(err) => {
            eprintln!(
                "Could not resolve the upload/download endpoints: {err}\n\
                 Put upload_base_url/download_url entries into {:?} or pass --upload-url/--download-url.",
                endpoints_file_path()
            );
            return Ok(());
        }
    }

    if let Ok(reason) = interrupt_rx.recv().await {
        match reason {
            Interrupted::UserInt => tracing::info!("exited per user request"),
            Interrupted::OsSigInt => tracing::info!("exited because of an os sig int"),
        }
    } else {
        tracing::error!("exited because of an unexpected error");
    }

    Ok(())
}
