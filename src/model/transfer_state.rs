//! Lifecycle states for a tracked upload
//!
//! Using an enum instead of separate boolean/option fields ensures
//! only valid state combinations are possible at compile time.

use std::fmt;

/// Represents the lifecycle state of one upload.
///
/// There is no numeric progress: an upload is either still on the wire
/// or it has finished one way or the other.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TransferState {
    /// Upload has not been dispatched yet
    #[default]
    Pending,
    /// Upload request is on the wire
    InProgress,
    /// Upload completed successfully
    Done,
    /// Upload failed with an error message
    Failed(String),
}

impl TransferState {
    /// Returns true if the upload has completed successfully
    pub fn is_done(&self) -> bool {
        matches!(self, TransferState::Done)
    }

    /// Returns true if the upload has failed
    pub fn is_failed(&self) -> bool {
        matches!(self, TransferState::Failed(_))
    }

    /// Returns true if the upload has not been dispatched yet
    pub fn is_pending(&self) -> bool {
        matches!(self, TransferState::Pending)
    }

    /// Returns true if the upload request is still on the wire
    pub fn is_in_progress(&self) -> bool {
        matches!(self, TransferState::InProgress)
    }

    /// Returns true if the upload is finished (done or failed)
    pub fn is_finished(&self) -> bool {
        self.is_done() || self.is_failed()
    }

    /// Returns the error message if the upload failed
    pub fn error(&self) -> Option<&str> {
        match self {
            TransferState::Failed(msg) => Some(msg),
            _ => None,
        }
    }

    /// Transition to failed state with given error
    pub fn fail(error: impl Into<String>) -> Self {
        TransferState::Failed(error.into())
    }
}

impl fmt::Display for TransferState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransferState::Pending => write!(f, "Pending"),
            TransferState::InProgress => write!(f, "Uploading"),
            TransferState::Done => write!(f, "Done"),
            TransferState::Failed(msg) => write!(f, "Failed: {}", msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_pending() {
        let state = TransferState::default();
        assert!(state.is_pending());
        assert!(!state.is_finished());
    }

    #[test]
    fn test_in_progress_state() {
        let state = TransferState::InProgress;
        assert!(state.is_in_progress());
        assert!(!state.is_finished());
    }

    #[test]
    fn test_done_state() {
        let state = TransferState::Done;
        assert!(state.is_done());
        assert!(state.is_finished());
        assert!(state.error().is_none());
    }

    #[test]
    fn test_failed_state() {
        let state = TransferState::fail("Network error");
        assert!(state.is_failed());
        assert!(state.is_finished());
        assert_eq!(state.error(), Some("Network error"));
    }

    #[test]
    fn test_display_formatting() {
        assert_eq!(format!("{}", TransferState::Pending), "Pending");
        assert_eq!(format!("{}", TransferState::InProgress), "Uploading");
        assert_eq!(format!("{}", TransferState::Done), "Done");
        assert_eq!(
            format!("{}", TransferState::Failed("Error".into())),
            "Failed: Error"
        );
    }
}
