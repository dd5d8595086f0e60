//! Owns the canonical application state and reacts to UI actions.
//! Uploads and the results fetch run as independent spawned tasks; their
//! outcomes come back over channels and are folded into the state here.

use color_eyre::eyre;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};
use tokio::sync::{broadcast, mpsc};

use crate::model::action::Action;
use crate::model::local_data_item::LocalDataItem;
use crate::model::notice::Notice;
use crate::model::results::{DownloadError, ResultsPayload};
use crate::model::state::State;
use crate::model::tracked_file::{TrackedFile, UploadOutcome};
use crate::services::extract_client::ExtractClient;
use crate::services::link_opener::BrowserOpener;
use crate::services::local_data_fetcher::LocalDataFetcher;
use crate::settings::endpoints::Endpoints;
use crate::termination::{Interrupted, Terminator};

type DirListing = (String, Vec<LocalDataItem>);
type ResultsFetch = Result<ResultsPayload, DownloadError>;

pub struct StateStore {
    state_tx: UnboundedSender<State>,
}

impl StateStore {
    pub fn new() -> (Self, UnboundedReceiver<State>) {
        let (state_tx, state_rx) = mpsc::unbounded_channel::<State>();

        (StateStore { state_tx }, state_rx)
    }
}

impl StateStore {
    fn fetch_local_data(
        &self,
        fetcher: LocalDataFetcher,
        path: Option<String>,
        local_tx: UnboundedSender<DirListing>,
    ) {
        tokio::spawn(async move {
            match fetcher.read_directory(path).await {
                Ok(data) => {
                    let dir = fetcher.get_current_dir().await;
                    let _ = local_tx.send((dir, data));
                }
                Err(e) => {
                    tracing::error!("failed to list local directory: {}", e);
                }
            }
        });
    }

    fn fetch_parent_local_data(
        &self,
        fetcher: LocalDataFetcher,
        local_tx: UnboundedSender<DirListing>,
    ) {
        tokio::spawn(async move {
            match fetcher.read_parent_directory().await {
                Ok(data) => {
                    let dir = fetcher.get_current_dir().await;
                    let _ = local_tx.send((dir, data));
                }
                Err(e) => {
                    tracing::error!("failed to list parent directory: {}", e);
                }
            }
        });
    }

    /// Each upload is its own task: no queue, no concurrency limit, no
    /// cancellation. The outcome is reported back by file name.
    fn spawn_upload(
        &self,
        client: ExtractClient,
        item: LocalDataItem,
        upload_tx: UnboundedSender<UploadOutcome>,
    ) {
        tokio::spawn(async move {
            let outcome = match client.upload_file(&item.path, &item.name).await {
                Ok(url) => UploadOutcome::completed(item.name, url),
                Err(e) => UploadOutcome::failed(item.name, e.to_string()),
            };
            let _ = upload_tx.send(outcome);
        });
    }

    fn spawn_results_fetch(&self, client: ExtractClient, results_tx: UnboundedSender<ResultsFetch>) {
        tokio::spawn(async move {
            let _ = results_tx.send(client.fetch_results().await);
        });
    }

    pub async fn main_loop(
        self,
        mut terminator: Terminator,
        mut action_rx: UnboundedReceiver<Action>,
        mut interrupt_rx: broadcast::Receiver<Interrupted>,
        endpoints: Endpoints,
    ) -> eyre::Result<Interrupted> {
        let client = ExtractClient::new(endpoints);
        let local_data_fetcher = LocalDataFetcher::new();
        let opener = BrowserOpener;
        let mut state = State::new();

        let (local_tx, mut local_rx) = mpsc::unbounded_channel::<DirListing>();
        let (upload_tx, mut upload_rx) = mpsc::unbounded_channel::<UploadOutcome>();
        let (results_tx, mut results_rx) = mpsc::unbounded_channel::<ResultsFetch>();
        self.fetch_local_data(local_data_fetcher.clone(), None, local_tx.clone());

        // the initial state once
        self.state_tx.send(state.clone())?;

        let result = loop {
            tokio::select! {
                Some((path, files)) = local_rx.recv() => {
                    state.update_files(path, files);
                    self.state_tx.send(state.clone())?;
                },
                Some(outcome) = upload_rx.recv() => {
                    state.record_upload_outcome(outcome);
                    self.state_tx.send(state.clone())?;
                },
                Some(fetched) = results_rx.recv() => {
                    match fetched {
                        Ok(payload) => {
                            state.apply_results_payload(payload, |url| opener.open_link(url));
                        }
                        Err(err) => state.record_download_error(&err),
                    }
                    self.state_tx.send(state.clone())?;
                },
                Some(action) = action_rx.recv() => match action {
                    Action::Exit => {
                        let _ = terminator.terminate(Interrupted::UserInt);

                        break Interrupted::UserInt;
                    },
                    Action::Navigate { page } => {
                        state.set_active_page(page);
                        self.state_tx.send(state.clone())?;
                    },
                    Action::FetchLocalData { path } => {
                        self.fetch_local_data(local_data_fetcher.clone(), Some(path), local_tx.clone());
                    },
                    Action::MoveBackLocal => {
                        self.fetch_parent_local_data(local_data_fetcher.clone(), local_tx.clone());
                    },
                    Action::UploadFile { item } => {
                        if item.is_directory {
                            state.set_notice(Notice::error(format!(
                                "{} is a directory, select a file to upload",
                                item.name
                            )));
                        } else {
                            state.track_files(vec![TrackedFile::new(item.name.clone(), item.path.clone())]);
                            state.mark_upload_started(&item.name);
                            self.spawn_upload(client.clone(), item, upload_tx.clone());
                        }
                        self.state_tx.send(state.clone())?;
                    },
                    Action::FetchResults => {
                        // the UI stays enabled while a fetch is pending, so
                        // repeated requests may run concurrently
                        if state.has_tracked_files() {
                            self.spawn_results_fetch(client.clone(), results_tx.clone());
                        }
                    },
                    Action::ClearNotice => {
                        state.clear_notice();
                        self.state_tx.send(state.clone())?;
                    },
                },
                // Catch and handle interrupt signal to gracefully shutdown
                Ok(interrupted) = interrupt_rx.recv() => {
                    break interrupted;
                }
            }
        };

        Ok(result)
    }
}
