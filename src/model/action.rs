//! This module provides the list of all possible actions which can be executed on the UI
use crate::model::local_data_item::LocalDataItem;
use crate::model::state::ActivePage;

/// List of all possible actions a user can execute
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Navigate {
        page: ActivePage,
    },
    FetchLocalData {
        path: String,
    },
    MoveBackLocal,
    /// Start a direct PUT upload of the given file
    UploadFile {
        item: LocalDataItem,
    },
    /// Fetch the result URL list and open every entry in the browser
    FetchResults,
    ClearNotice,
    Exit,
}
