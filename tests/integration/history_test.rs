//! Bounded history persistence tests.

use crate::support::{FakeExtractor, FakeSummarizer, Harness};

use smartsum::storage::{FileHistoryBacking, HistoryStore, MemoryHistoryBacking};
use smartsum_core::{Granularity, InputMode, SubmissionRequest};

fn text_request(content: &str) -> SubmissionRequest {
    SubmissionRequest::new(content, InputMode::Text, Granularity::Standard)
}

#[tokio::test]
async fn test_eleven_submissions_retain_the_ten_most_recent() {
    // Scenario: capacity is 10; the 1st entry is evicted, the 11th leads
    let h = Harness::new(
        FakeExtractor::returning(Ok("unused".to_string())),
        FakeSummarizer::echoing(),
    );

    for i in 1..=11 {
        h.orchestrator
            .submit(text_request(&format!("input {}", i)))
            .await;
    }

    let entries = h.history.entries();
    assert_eq!(entries.len(), 10);
    assert_eq!(entries[0].original_input, "input 11");
    assert_eq!(entries[9].original_input, "input 2");
    assert!(entries.iter().all(|e| e.original_input != "input 1"));
}

#[tokio::test]
async fn test_persisted_slot_holds_exactly_the_ten_most_recent() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("history.json");
    let h = Harness::with_backing(
        FakeExtractor::returning(Ok("unused".to_string())),
        FakeSummarizer::echoing(),
        Box::new(FileHistoryBacking::at_path(path.clone())),
    );

    for i in 1..=12 {
        h.orchestrator
            .submit(text_request(&format!("input {}", i)))
            .await;
    }

    let persisted: Vec<smartsum::HistoryEntry> =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(persisted.len(), 10);
    assert_eq!(persisted[0].original_input, "input 12");
    assert_eq!(persisted, h.history.entries());
}

#[tokio::test]
async fn test_history_survives_a_reload() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("history.json");

    {
        let h = Harness::with_backing(
            FakeExtractor::returning(Ok("unused".to_string())),
            FakeSummarizer::echoing(),
            Box::new(FileHistoryBacking::at_path(path.clone())),
        );
        h.orchestrator.submit(text_request("kept")).await;
    }

    let reloaded = HistoryStore::new(Box::new(FileHistoryBacking::at_path(path)));
    assert_eq!(reloaded.len(), 1);
    assert_eq!(reloaded.entries()[0].original_input, "kept");
}

#[tokio::test]
async fn test_clear_then_load_yields_an_empty_sequence() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("history.json");
    let store = HistoryStore::new(Box::new(FileHistoryBacking::at_path(path.clone())));

    let request = text_request("about to vanish");
    store
        .insert(smartsum::HistoryEntry::new(&request, "gone"))
        .unwrap();
    store.clear().unwrap();

    // The slot is removed entirely, not rewritten as an empty array
    assert!(!path.exists());
    let reloaded = HistoryStore::new(Box::new(FileHistoryBacking::at_path(path)));
    assert!(reloaded.entries().is_empty());
}

#[tokio::test]
async fn test_deleting_by_id_leaves_the_rest_in_order() {
    let h = Harness::new(
        FakeExtractor::returning(Ok("unused".to_string())),
        FakeSummarizer::echoing(),
    );
    for name in ["a", "b", "c"] {
        h.orchestrator.submit(text_request(name)).await;
    }

    let middle = h.history.entries()[1].id;
    assert!(h.history.delete(&middle).unwrap());

    let remaining: Vec<String> = h
        .history
        .entries()
        .iter()
        .map(|e| e.original_input.clone())
        .collect();
    assert_eq!(remaining, vec!["c", "a"]);
}

#[tokio::test]
async fn test_malformed_slot_does_not_break_startup() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("history.json");
    std::fs::write(&path, "{{ definitely not json").unwrap();

    let store = HistoryStore::new(Box::new(FileHistoryBacking::at_path(path)));
    assert!(store.is_empty());
}

#[tokio::test]
async fn test_memory_backing_tracks_slot_presence() {
    use smartsum::storage::HistoryBacking;

    let backing = MemoryHistoryBacking::new();
    assert!(!backing.has_slot());

    let request = text_request("x");
    backing
        .save(&[smartsum::HistoryEntry::new(&request, "y")])
        .unwrap();
    assert!(backing.has_slot());

    backing.clear().unwrap();
    assert!(!backing.has_slot());
    assert!(backing.load().is_none());
}
