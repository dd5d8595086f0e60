//! Property-based tests for the uploads pane
//!
//! These tests use proptest to verify invariants hold across random inputs.
//!
//! Run with: cargo test --test panel_properties

use proptest::prelude::*;

use extractgen_tui::model::results::ResultsPayload;
use extractgen_tui::model::state::{State, MAX_TRACKED_FILES};
use extractgen_tui::model::tracked_file::{TrackedFile, UploadOutcome};

/// Strategy to generate plausible file names
fn file_name_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 _.-]{1,30}".prop_map(|name| format!("{}.pdf", name.trim().replace('.', "_")))
}

/// Strategy to generate batches of tracked files, fed to the state one by one
fn file_batches_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(file_name_strategy(), 0..25)
}

fn track_all(state: &mut State, names: &[String]) {
    for name in names {
        state.track_files(vec![TrackedFile::new(
            name.clone(),
            format!("/tmp/{}", name),
        )]);
    }
}

proptest! {
    /// The pane never holds more than the cap, and exactly
    /// min(cap, total) entries once uploads start arriving
    #[test]
    fn tracked_list_is_capped(names in file_batches_strategy()) {
        let mut state = State::default();
        track_all(&mut state, &names);
        prop_assert_eq!(
            state.tracked_files.len(),
            names.len().min(MAX_TRACKED_FILES)
        );
    }

    /// The surviving entries are always the most recent ones, oldest first
    #[test]
    fn tracked_list_keeps_most_recent_in_order(names in file_batches_strategy()) {
        let mut state = State::default();
        track_all(&mut state, &names);
        let expected: Vec<&str> = names
            .iter()
            .skip(names.len().saturating_sub(MAX_TRACKED_FILES))
            .map(|s| s.as_str())
            .collect();
        let actual: Vec<&str> = state
            .tracked_files
            .iter()
            .map(|f| f.name.as_str())
            .collect();
        prop_assert_eq!(actual, expected);
    }

    /// A result URL only ever comes from a successful outcome
    #[test]
    fn result_url_implies_success(
        name in file_name_strategy(),
        succeeded in any::<bool>(),
        url in proptest::option::of("https://[a-z]{3,10}\\.example/[a-z]{1,10}\\.csv"),
    ) {
        let mut state = State::default();
        state.track_files(vec![TrackedFile::new(name.clone(), format!("/tmp/{}", name))]);
        let outcome = if succeeded {
            UploadOutcome::completed(name, url)
        } else {
            UploadOutcome::failed(name, "boom".to_string())
        };
        state.record_upload_outcome(outcome);
        let entry = &state.tracked_files[0];
        if entry.result_url.is_some() {
            prop_assert!(entry.transfer_state.is_done());
        }
        if entry.transfer_state.is_failed() {
            prop_assert!(entry.result_url.is_none());
        }
    }

    /// A link payload empties the pane in one step, whatever was in it
    #[test]
    fn links_payload_always_resets_list(
        names in file_batches_strategy(),
        links in prop::collection::vec("https://[a-z]{3,10}\\.example/[a-z]{1,10}", 0..6),
    ) {
        let mut state = State::default();
        track_all(&mut state, &names);
        let mut opened = Vec::new();
        state.apply_results_payload(ResultsPayload::Links(links.clone()), |url| {
            opened.push(url.to_string())
        });
        prop_assert_eq!(opened, links);
        prop_assert!(state.tracked_files.is_empty());
    }

    /// A message payload never touches the tracked list or opens anything
    #[test]
    fn message_payload_never_resets_list(
        names in file_batches_strategy(),
        message in ".{0,60}",
    ) {
        let mut state = State::default();
        track_all(&mut state, &names);
        let before = state.tracked_files.clone();
        let mut opens = 0usize;
        state.apply_results_payload(ResultsPayload::Message(message), |_| opens += 1);
        prop_assert_eq!(opens, 0);
        prop_assert_eq!(state.tracked_files, before);
    }
}
