//! Error Classifier
//!
//! Pure mapping from raised failures to user-facing classified errors.
//! The mapping is closed: every failure resolves to exactly one category,
//! each with a fixed title and a fixed, stage-appropriate action set.
//! Actions are inert data; nothing here executes them.

use smartsum_api::ApiError;
use smartsum_core::{ClassifiedError, ErrorCategory, InputMode, RemedyAction, Stage};

/// Classify a failure raised by one of the network invokers
pub fn classify(stage: Stage, error: &ApiError) -> ClassifiedError {
    match error {
        ApiError::AuthenticationRejected { .. } => ClassifiedError::new(
            ErrorCategory::Auth,
            "Session expired",
            "Please log in again to continue.",
        )
        .with_actions(vec![RemedyAction::GoToLogin]),

        ApiError::Timeout { .. } | ApiError::Connection { .. } => {
            let message = match (error, stage) {
                (ApiError::Connection { .. }, _) => {
                    "Could not reach the server. Check your connection."
                }
                (_, Stage::Resolve) => "The page took too long to respond.",
                (_, Stage::Summarize) => "The summarizer took too long to respond.",
            };
            ClassifiedError::new(ErrorCategory::NetworkTimeout, "Network problem", message)
                .with_actions(network_actions(stage))
        }

        ApiError::AccessDenied { .. }
        | ApiError::InvalidRequest { .. }
        | ApiError::NotFound { .. }
        | ApiError::ServerError { .. }
        | ApiError::EmptyContent
        | ApiError::EmptySummary => service_rejected(stage, error),

        ApiError::Parse { .. } | ApiError::Other { .. } => ClassifiedError::new(
            ErrorCategory::Unknown,
            "Something went wrong",
            "An unexpected error occurred. Please try again later.",
        )
        .with_actions(vec![RemedyAction::TryAgainLater]),
    }
}

fn network_actions(stage: Stage) -> Vec<RemedyAction> {
    match stage {
        Stage::Resolve => vec![RemedyAction::Retry],
        Stage::Summarize => vec![RemedyAction::Retry, RemedyAction::TryShorterContent],
    }
}

fn service_rejected(stage: Stage, error: &ApiError) -> ClassifiedError {
    match stage {
        Stage::Resolve => {
            let message = match error {
                ApiError::AccessDenied { .. } => {
                    "Access to this page was denied. The site may block automated requests."
                }
                ApiError::InvalidRequest { .. } => "The server rejected this address as invalid.",
                ApiError::NotFound { .. } => "That page does not exist.",
                ApiError::EmptyContent => "No summarizable content was found on the page.",
                _ => "Could not access this page.",
            };
            ClassifiedError::new(
                ErrorCategory::ServiceRejected,
                "Could not read that page",
                message,
            )
            .with_actions(vec![
                RemedyAction::TryDifferentPage,
                RemedyAction::SwitchToTextInput,
            ])
        }
        Stage::Summarize => {
            let message = match error {
                ApiError::EmptySummary => "The summarizer returned an empty response.".to_string(),
                ApiError::InvalidRequest { message } => message.clone(),
                _ => "The summarization service could not process this content.".to_string(),
            };
            ClassifiedError::new(
                ErrorCategory::ServiceRejected,
                "Summarization failed",
                message,
            )
            .with_actions(vec![RemedyAction::TryDifferentContent, RemedyAction::Retry])
        }
    }
}

/// Nothing was submitted
pub fn empty_input(mode: InputMode) -> ClassifiedError {
    let (message, actions) = match mode {
        InputMode::Text => (
            "Enter some text to summarize.",
            vec![RemedyAction::TrySampleText],
        ),
        InputMode::Url => (
            "Enter a web address to summarize.",
            vec![RemedyAction::SwitchToTextInput, RemedyAction::TrySampleText],
        ),
    };
    ClassifiedError::new(ErrorCategory::Validation, "Nothing to summarize", message)
        .with_actions(actions)
}

/// URL-mode input that is not a syntactically valid http/https URL
pub fn invalid_url() -> ClassifiedError {
    ClassifiedError::new(
        ErrorCategory::Validation,
        "Invalid web address",
        "Enter a valid URL starting with http:// or https://.",
    )
    .with_actions(vec![
        RemedyAction::SwitchToTextInput,
        RemedyAction::TrySampleText,
    ])
}

/// Local clipboard write failure
pub fn clipboard_failure() -> ClassifiedError {
    ClassifiedError::new(
        ErrorCategory::ClientSystem,
        "Copy failed",
        "Could not copy the summary to the clipboard.",
    )
    .with_actions(vec![RemedyAction::Retry])
}
