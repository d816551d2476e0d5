//! Failure classification tests: the mapping is closed and stable.

use smartsum::services::classifier::{classify, clipboard_failure, empty_input, invalid_url};
use smartsum_api::ApiError;
use smartsum_core::{ErrorCategory, InputMode, RemedyAction, Stage};

fn all_api_errors() -> Vec<ApiError> {
    vec![
        ApiError::AuthenticationRejected {
            message: "m".to_string(),
        },
        ApiError::AccessDenied {
            message: "m".to_string(),
        },
        ApiError::InvalidRequest {
            message: "m".to_string(),
        },
        ApiError::NotFound {
            message: "m".to_string(),
        },
        ApiError::Timeout {
            message: "m".to_string(),
        },
        ApiError::Connection {
            message: "m".to_string(),
        },
        ApiError::ServerError {
            message: "m".to_string(),
            status: Some(503),
        },
        ApiError::EmptyContent,
        ApiError::EmptySummary,
        ApiError::Parse {
            message: "m".to_string(),
        },
        ApiError::Other {
            message: "m".to_string(),
        },
    ]
}

#[test]
fn test_every_failure_resolves_to_a_category_with_actions() {
    for stage in [Stage::Resolve, Stage::Summarize] {
        for error in all_api_errors() {
            let classified = classify(stage, &error);
            assert!(
                !classified.title.is_empty() && !classified.message.is_empty(),
                "missing copy for {:?} at {:?}",
                error,
                stage
            );
            assert!(
                !classified.actions.is_empty(),
                "no remedial actions for {:?} at {:?}",
                error,
                stage
            );
        }
    }
}

#[test]
fn test_auth_classification_is_stage_independent() {
    let error = ApiError::AuthenticationRejected {
        message: "expired".to_string(),
    };
    let from_resolve = classify(Stage::Resolve, &error);
    let from_summarize = classify(Stage::Summarize, &error);
    assert_eq!(from_resolve, from_summarize);
    assert_eq!(from_resolve.category, ErrorCategory::Auth);
    assert_eq!(from_resolve.actions, vec![RemedyAction::GoToLogin]);
}

#[test]
fn test_resolve_failures_offer_page_remedies() {
    let error = ApiError::NotFound {
        message: "missing".to_string(),
    };
    let classified = classify(Stage::Resolve, &error);
    assert_eq!(classified.category, ErrorCategory::ServiceRejected);
    assert!(classified.actions.contains(&RemedyAction::TryDifferentPage));
    assert!(classified
        .actions
        .contains(&RemedyAction::SwitchToTextInput));
}

#[test]
fn test_summarize_timeout_offers_retry_and_shorter_content() {
    let error = ApiError::Timeout {
        message: "slow".to_string(),
    };
    let classified = classify(Stage::Summarize, &error);
    assert_eq!(classified.category, ErrorCategory::NetworkTimeout);
    assert_eq!(
        classified.actions,
        vec![RemedyAction::Retry, RemedyAction::TryShorterContent]
    );
}

#[test]
fn test_connectivity_failure_tells_the_user_to_check_the_connection() {
    let error = ApiError::Connection {
        message: "refused".to_string(),
    };
    let classified = classify(Stage::Resolve, &error);
    assert_eq!(classified.category, ErrorCategory::NetworkTimeout);
    assert!(classified.message.to_lowercase().contains("connection"));
}

#[test]
fn test_validation_errors_are_local_constructions() {
    let url_empty = empty_input(InputMode::Url);
    assert_eq!(url_empty.category, ErrorCategory::Validation);
    assert_eq!(
        url_empty.actions,
        vec![RemedyAction::SwitchToTextInput, RemedyAction::TrySampleText]
    );

    let text_empty = empty_input(InputMode::Text);
    assert_eq!(text_empty.category, ErrorCategory::Validation);
    assert_ne!(text_empty.message, url_empty.message);

    assert_eq!(invalid_url().category, ErrorCategory::Validation);
}

#[test]
fn test_clipboard_failure_is_client_system_not_network() {
    let classified = clipboard_failure();
    assert_eq!(classified.category, ErrorCategory::ClientSystem);
    assert_ne!(classified.category, ErrorCategory::NetworkTimeout);
}

#[test]
fn test_classification_is_deterministic() {
    for stage in [Stage::Resolve, Stage::Summarize] {
        for error in all_api_errors() {
            assert_eq!(classify(stage, &error), classify(stage, &error));
        }
    }
}
