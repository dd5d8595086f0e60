//! This module provides functionality for keeping the application state
use crate::model::local_data_item::LocalDataItem;
use crate::model::notice::Notice;
use crate::model::results::{DownloadError, ResultsPayload};
use crate::model::tracked_file::{TrackedFile, UploadOutcome};
use crate::model::transfer_state::TransferState;

/// Upper bound of the uploads pane; older entries are evicted first.
pub const MAX_TRACKED_FILES: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ActivePage {
    #[default]
    Panel,
    Help,
}

/// Represents the entire state of the application, each page transforms this
/// information into a suitable Props object
#[derive(Debug, Clone, Default)]
pub struct State {
    pub active_page: ActivePage,
    pub local_data: Vec<LocalDataItem>,
    pub current_local_path: String,
    pub tracked_files: Vec<TrackedFile>,
    pub notice: Option<Notice>,
}

impl State {
    pub fn new() -> State {
        State::default()
    }

    pub fn set_active_page(&mut self, page: ActivePage) {
        self.active_page = page;
    }

    pub fn update_files(&mut self, path: String, files: Vec<LocalDataItem>) {
        self.local_data = files;
        self.current_local_path = path;
    }

    /// Appends newly selected files and truncates the list to the most
    /// recent [`MAX_TRACKED_FILES`] entries, oldest dropped first. Eviction
    /// is a pure list operation: an evicted entry's transfer stays in flight.
    pub fn track_files(&mut self, files: Vec<TrackedFile>) {
        self.tracked_files.extend(files);
        if self.tracked_files.len() > MAX_TRACKED_FILES {
            let excess = self.tracked_files.len() - MAX_TRACKED_FILES;
            for evicted in self.tracked_files.drain(..excess) {
                tracing::debug!("evicting tracked upload entry: {}", evicted.name);
            }
        }
    }

    /// Marks the first pending entry with the given name as in progress
    pub fn mark_upload_started(&mut self, file_name: &str) {
        if let Some(entry) = self
            .tracked_files
            .iter_mut()
            .find(|it| it.name == file_name && it.transfer_state.is_pending())
        {
            entry.transfer_state = TransferState::InProgress;
        }
    }

    /// Attaches the upload result to the matching tracked entry.
    ///
    /// A result URL is only ever taken from a successful response; a success
    /// without a `url` field leaves the entry done with no URL. Outcomes for
    /// entries that were evicted in the meantime are dropped silently.
    pub fn record_upload_outcome(&mut self, outcome: UploadOutcome) {
        let entry = self
            .tracked_files
            .iter_mut()
            .find(|it| it.name == outcome.file_name && !it.transfer_state.is_finished());
        let Some(entry) = entry else {
            tracing::debug!("upload outcome for untracked file: {}", outcome.file_name);
            return;
        };
        match outcome.error {
            None => {
                entry.transfer_state = TransferState::Done;
                entry.result_url = outcome.result_url;
            }
            Some(error) => {
                entry.transfer_state = TransferState::fail(error);
            }
        }
    }

    /// Applies a successful download response.
    ///
    /// A list of links opens every entry through `open_link` and then resets
    /// the tracked list exactly once, as the terminal step of the download.
    /// Any other payload is surfaced as an informational notice and leaves
    /// the tracked list untouched.
    pub fn apply_results_payload(&mut self, payload: ResultsPayload, mut open_link: impl FnMut(&str)) {
        match payload {
            ResultsPayload::Links(urls) => {
                for url in &urls {
                    open_link(url);
                }
                self.tracked_files.clear();
                tracing::info!("opened {} result link(s)", urls.len());
            }
            ResultsPayload::Message(message) => {
                self.notice = Some(Notice::info(message));
            }
        }
    }

    /// Surfaces a failed download as a single error notice; the tracked
    /// list stays as it was.
    pub fn record_download_error(&mut self, error: &DownloadError) {
        self.notice = Some(Notice::error(format!("download failed: {}", error)));
    }

    pub fn set_notice(&mut self, notice: Notice) {
        self.notice = Some(notice);
    }

    pub fn clear_notice(&mut self) {
        self.notice = None;
    }

    pub fn has_tracked_files(&self) -> bool {
        !self.tracked_files.is_empty()
    }

    pub fn any_upload_in_progress(&self) -> bool {
        self.tracked_files
            .iter()
            .any(|it| it.transfer_state.is_in_progress())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracked(name: &str) -> TrackedFile {
        TrackedFile::new(name.to_string(), format!("/tmp/{}", name))
    }

    #[test]
    fn default_active_page_is_panel() {
        let state = State::default();
        assert_eq!(state.active_page, ActivePage::Panel);
    }

    #[test]
    fn set_active_page_changes_page_correctly() {
        let mut state = State::default();
        state.set_active_page(ActivePage::Help);
        assert_eq!(state.active_page, ActivePage::Help);
    }

    #[test]
    fn track_files_never_exceeds_limit() {
        let mut state = State::default();
        for i in 0..8 {
            state.track_files(vec![tracked(&format!("file{}.pdf", i))]);
            assert!(state.tracked_files.len() <= MAX_TRACKED_FILES);
        }
        assert_eq!(state.tracked_files.len(), MAX_TRACKED_FILES);
    }

    #[test]
    fn track_files_keeps_most_recent_entries_in_order() {
        let mut state = State::default();
        let batch: Vec<TrackedFile> = (0..7).map(|i| tracked(&format!("f{}.pdf", i))).collect();
        state.track_files(batch);
        let names: Vec<&str> = state.tracked_files.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["f2.pdf", "f3.pdf", "f4.pdf", "f5.pdf", "f6.pdf"]);
    }

    #[test]
    fn record_upload_outcome_attaches_url_on_success() {
        let mut state = State::default();
        state.track_files(vec![tracked("report.pdf")]);
        state.mark_upload_started("report.pdf");
        state.record_upload_outcome(UploadOutcome::completed(
            "report.pdf".into(),
            Some("https://bucket/report.csv".into()),
        ));
        assert!(state.tracked_files[0].transfer_state.is_done());
        assert_eq!(
            state.tracked_files[0].result_url.as_deref(),
            Some("https://bucket/report.csv")
        );
    }

    #[test]
    fn record_upload_outcome_without_url_leaves_entry_done_without_url() {
        let mut state = State::default();
        state.track_files(vec![tracked("report.pdf")]);
        state.record_upload_outcome(UploadOutcome::completed("report.pdf".into(), None));
        assert!(state.tracked_files[0].transfer_state.is_done());
        assert!(state.tracked_files[0].result_url.is_none());
    }

    #[test]
    fn record_upload_outcome_failure_keeps_url_empty() {
        let mut state = State::default();
        state.track_files(vec![tracked("report.pdf")]);
        state.record_upload_outcome(UploadOutcome::failed(
            "report.pdf".into(),
            "connection refused".into(),
        ));
        assert!(state.tracked_files[0].transfer_state.is_failed());
        assert!(state.tracked_files[0].result_url.is_none());
    }

    #[test]
    fn record_upload_outcome_for_evicted_entry_is_ignored() {
        let mut state = State::default();
        state.track_files(vec![tracked("old.pdf")]);
        let batch: Vec<TrackedFile> = (0..5).map(|i| tracked(&format!("f{}.pdf", i))).collect();
        state.track_files(batch);
        state.record_upload_outcome(UploadOutcome::completed(
            "old.pdf".into(),
            Some("https://bucket/old.csv".into()),
        ));
        assert!(state.tracked_files.iter().all(|f| f.result_url.is_none()));
    }

    #[test]
    fn duplicate_names_resolve_to_first_unfinished_entry() {
        let mut state = State::default();
        state.track_files(vec![tracked("same.pdf"), tracked("same.pdf")]);
        state.record_upload_outcome(UploadOutcome::completed("same.pdf".into(), None));
        assert!(state.tracked_files[0].transfer_state.is_done());
        assert!(!state.tracked_files[1].transfer_state.is_finished());
    }

    #[test]
    fn links_payload_opens_each_url_and_resets_list_once() {
        let mut state = State::default();
        state.track_files(vec![tracked("a.pdf"), tracked("b.pdf")]);
        let mut opened = Vec::new();
        state.apply_results_payload(
            ResultsPayload::Links(vec!["http://a".into(), "http://b".into()]),
            |url| opened.push(url.to_string()),
        );
        assert_eq!(opened, vec!["http://a", "http://b"]);
        assert!(state.tracked_files.is_empty());
    }

    #[test]
    fn message_payload_sets_info_notice_and_keeps_list() {
        let mut state = State::default();
        state.track_files(vec![tracked("a.pdf")]);
        let mut opened = 0;
        state.apply_results_payload(ResultsPayload::Message("no files yet".into()), |_| {
            opened += 1
        });
        assert_eq!(opened, 0);
        assert_eq!(state.tracked_files.len(), 1);
        let notice = state.notice.expect("notice should be set");
        assert!(!notice.is_error());
        assert_eq!(notice.text, "no files yet");
    }

    #[test]
    fn download_error_sets_error_notice_and_keeps_list() {
        let mut state = State::default();
        state.track_files(vec![tracked("a.pdf")]);
        state.record_download_error(&DownloadError::Http(500));
        assert_eq!(state.tracked_files.len(), 1);
        let notice = state.notice.expect("notice should be set");
        assert!(notice.is_error());
        assert!(notice.text.contains("500"));
    }

    #[test]
    fn any_upload_in_progress_reflects_entry_states() {
        let mut state = State::default();
        state.track_files(vec![tracked("a.pdf")]);
        assert!(!state.any_upload_in_progress());
        state.mark_upload_started("a.pdf");
        assert!(state.any_upload_in_progress());
    }
}
