use crate::model::transfer_state::TransferState;

/// Keeps the information about one selected file which is later displayed
/// on the uploads pane
#[derive(Debug, Clone, PartialEq)]
pub struct TrackedFile {
    pub name: String,
    pub path: String,
    pub transfer_state: TransferState,
    /// Retrievable address returned by the upload endpoint, if any.
    /// Only ever populated from a successful upload response.
    pub result_url: Option<String>,
}

impl TrackedFile {
    pub fn new(name: String, path: String) -> TrackedFile {
        TrackedFile {
            name,
            path,
            transfer_state: TransferState::default(),
            result_url: None,
        }
    }

    pub fn to_columns(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.transfer_state.to_string(),
            self.result_url.clone().unwrap_or_else(|| "-".to_string()),
        ]
    }
}

/// Result of one finished upload task, reported back to the state store
#[derive(Debug, Clone, PartialEq)]
pub struct UploadOutcome {
    pub file_name: String,
    pub result_url: Option<String>,
    pub error: Option<String>,
}

impl UploadOutcome {
    pub fn completed(file_name: String, result_url: Option<String>) -> Self {
        UploadOutcome {
            file_name,
            result_url,
            error: None,
        }
    }

    pub fn failed(file_name: String, error: String) -> Self {
        UploadOutcome {
            file_name,
            result_url: None,
            error: Some(error),
        }
    }
}
