//! Submission lifecycle tests over fake invokers.

use crate::support::{FakeExtractor, FakeSummarizer, Harness};

use smartsum::services::orchestrator::{SubmitOutcome, SubmitPhase};
use smartsum_api::{ApiError, TokenProvider};
use smartsum_core::{ErrorCategory, Granularity, InputMode, RemedyAction, SubmissionRequest};

fn text_request(content: &str) -> SubmissionRequest {
    SubmissionRequest::new(content, InputMode::Text, Granularity::Standard)
}

fn url_request(content: &str) -> SubmissionRequest {
    SubmissionRequest::new(content, InputMode::Url, Granularity::Standard)
}

#[tokio::test]
async fn test_text_submission_summarizes_raw_text_directly() {
    // Scenario: plain text in, summary out, one history entry
    let h = Harness::new(
        FakeExtractor::returning(Ok("unused".to_string())),
        FakeSummarizer::returning(Ok("Hi.".to_string())),
    );

    let outcome = h.orchestrator.submit(text_request("Hello world")).await;

    match outcome {
        SubmitOutcome::Success(entry) => {
            assert_eq!(entry.summary_text, "Hi.");
            assert_eq!(entry.original_input, "Hello world");
        }
        other => panic!("expected Success, got {:?}", other),
    }
    assert_eq!(h.extractor.calls(), 0, "text mode must skip resolution");
    assert_eq!(h.summarizer.calls(), 1);
    assert_eq!(h.history.len(), 1);
}

#[tokio::test]
async fn test_empty_input_is_rejected_before_any_network_call() {
    let h = Harness::new(
        FakeExtractor::returning(Ok("unused".to_string())),
        FakeSummarizer::echoing(),
    );

    let outcome = h.orchestrator.submit(text_request("   ")).await;

    match outcome {
        SubmitOutcome::Failed(err) => {
            assert_eq!(err.category, ErrorCategory::Validation);
            assert!(err.actions.contains(&RemedyAction::TrySampleText));
        }
        other => panic!("expected Failed, got {:?}", other),
    }
    assert_eq!(h.extractor.calls(), 0);
    assert_eq!(h.summarizer.calls(), 0);
}

#[tokio::test]
async fn test_syntactically_invalid_url_never_reaches_the_network() {
    let h = Harness::new(
        FakeExtractor::returning(Ok("unused".to_string())),
        FakeSummarizer::echoing(),
    );

    let outcome = h.orchestrator.submit(url_request("not-a-url")).await;

    match outcome {
        SubmitOutcome::Failed(err) => {
            assert_eq!(err.category, ErrorCategory::Validation);
            assert!(err.actions.contains(&RemedyAction::SwitchToTextInput));
        }
        other => panic!("expected Failed, got {:?}", other),
    }
    assert_eq!(h.extractor.calls(), 0);
    assert_eq!(h.summarizer.calls(), 0);
    assert!(h.history.is_empty());
}

#[tokio::test]
async fn test_url_submission_resolves_content_then_summarizes() {
    let h = Harness::new(
        FakeExtractor::returning(Ok("Extracted article text.".to_string())),
        FakeSummarizer::echoing(),
    );

    let outcome = h.orchestrator.submit(url_request("https://example.com")).await;

    match outcome {
        SubmitOutcome::Success(entry) => {
            assert_eq!(entry.summary_text, "summary of Extracted article text.");
            assert_eq!(entry.input_mode, InputMode::Url);
        }
        other => panic!("expected Success, got {:?}", other),
    }
    assert_eq!(h.extractor.calls(), 1);
    assert_eq!(h.summarizer.calls(), 1);
}

#[tokio::test]
async fn test_resolver_timeout_fails_without_invoking_summarizer() {
    // Scenario: the page times out; the summarizer must never run
    let h = Harness::new(
        FakeExtractor::returning(Err(ApiError::Timeout {
            message: "slow".to_string(),
        })),
        FakeSummarizer::echoing(),
    );

    let outcome = h.orchestrator.submit(url_request("https://example.com")).await;

    match outcome {
        SubmitOutcome::Failed(err) => assert_eq!(err.category, ErrorCategory::NetworkTimeout),
        other => panic!("expected Failed, got {:?}", other),
    }
    assert_eq!(h.summarizer.calls(), 0);
    assert!(h.history.is_empty());
}

#[tokio::test]
async fn test_empty_extracted_content_is_a_failure_not_an_empty_success() {
    let h = Harness::new(
        FakeExtractor::returning(Err(ApiError::EmptyContent)),
        FakeSummarizer::echoing(),
    );

    let outcome = h.orchestrator.submit(url_request("https://example.com")).await;

    match outcome {
        SubmitOutcome::Failed(err) => {
            assert_eq!(err.category, ErrorCategory::ServiceRejected);
            assert!(err.message.contains("No summarizable content"));
        }
        other => panic!("expected Failed, got {:?}", other),
    }
    assert_eq!(h.summarizer.calls(), 0);
}

#[tokio::test]
async fn test_summarizer_auth_rejection_destroys_session_and_signals_redirect() {
    // Scenario: 401 from the summarizer
    let h = Harness::new(
        FakeExtractor::returning(Ok("unused".to_string())),
        FakeSummarizer::returning(Err(ApiError::AuthenticationRejected {
            message: "expired".to_string(),
        })),
    );

    let outcome = h.orchestrator.submit(text_request("Hello")).await;

    match outcome {
        SubmitOutcome::Failed(err) => {
            assert_eq!(err.category, ErrorCategory::Auth);
            assert_eq!(err.actions, vec![RemedyAction::GoToLogin]);
        }
        other => panic!("expected Failed, got {:?}", other),
    }
    assert!(h.tokens.get_token().is_none(), "session must be destroyed");
    assert!(h.navigator.redirected(), "redirect must be signaled");
    assert!(h.history.is_empty(), "no history entry on failure");
}

#[tokio::test]
async fn test_resolver_auth_rejection_is_handled_identically() {
    let h = Harness::new(
        FakeExtractor::returning(Err(ApiError::AuthenticationRejected {
            message: "expired".to_string(),
        })),
        FakeSummarizer::echoing(),
    );

    let outcome = h.orchestrator.submit(url_request("https://example.com")).await;

    assert!(matches!(outcome, SubmitOutcome::Failed(_)));
    assert!(h.tokens.get_token().is_none());
    assert!(h.navigator.redirected());
    assert_eq!(h.summarizer.calls(), 0);
}

#[tokio::test]
async fn test_loading_indicators_derive_from_phase() {
    let h = Harness::new(
        FakeExtractor::returning(Ok("text".to_string())),
        FakeSummarizer::echoing(),
    );

    assert!(!h.orchestrator.is_loading().await);
    h.orchestrator.submit(text_request("Hello")).await;

    let phase = h.orchestrator.phase().await;
    assert!(matches!(phase, SubmitPhase::Success(_)));
    assert!(!phase.is_loading());
    assert!(!phase.is_fetching_remote());
}

#[tokio::test]
async fn test_success_clears_a_previous_error() {
    let h = Harness::new(
        FakeExtractor::returning(Ok("unused".to_string())),
        FakeSummarizer::echoing(),
    );

    h.orchestrator.submit(text_request("")).await;
    assert!(matches!(
        h.orchestrator.phase().await,
        SubmitPhase::Failed(_)
    ));

    h.orchestrator.submit(text_request("Hello")).await;
    assert!(matches!(
        h.orchestrator.phase().await,
        SubmitPhase::Success(_)
    ));
}

#[tokio::test]
async fn test_dismissing_and_retrying_reproduces_an_identical_error() {
    let h = Harness::new(
        FakeExtractor::returning(Ok("unused".to_string())),
        FakeSummarizer::returning(Err(ApiError::Timeout {
            message: "slow".to_string(),
        })),
    );

    let first = h.orchestrator.submit(text_request("Hello")).await;
    h.orchestrator.dismiss().await;
    assert!(matches!(h.orchestrator.phase().await, SubmitPhase::Idle));
    let second = h.orchestrator.submit(text_request("Hello")).await;

    match (first, second) {
        (SubmitOutcome::Failed(a), SubmitOutcome::Failed(b)) => {
            assert_eq!(a.category, b.category);
            assert_eq!(a.title, b.title);
            assert_eq!(a, b);
        }
        other => panic!("expected two failures, got {:?}", other),
    }
}

#[tokio::test]
async fn test_restoring_a_history_entry_is_a_read() {
    let h = Harness::new(
        FakeExtractor::returning(Ok("unused".to_string())),
        FakeSummarizer::echoing(),
    );
    h.orchestrator.submit(text_request("first")).await;
    h.orchestrator.submit(text_request("second")).await;

    let entries = h.history.entries();
    let oldest = entries.last().cloned().unwrap();
    h.orchestrator.restore(&oldest).await;

    // Order unchanged: restore does not promote the entry
    let after = h.history.entries();
    assert_eq!(after[0].original_input, "second");
    assert_eq!(after[1].original_input, "first");
    match h.orchestrator.phase().await {
        SubmitPhase::Success(view) => assert_eq!(view.original_input, "first"),
        other => panic!("expected Success phase, got {:?}", other),
    }
}

#[tokio::test]
async fn test_cancel_aborts_and_returns_to_idle() {
    let h = Harness::new(
        FakeExtractor::returning(Ok("unused".to_string())),
        FakeSummarizer::echoing(),
    );
    h.orchestrator.submit(text_request("Hello")).await;

    h.orchestrator.cancel().await;

    assert!(matches!(h.orchestrator.phase().await, SubmitPhase::Idle));
}
