//! Domain Types
//!
//! Submission inputs, summary granularities, and the classified error
//! taxonomy. Wire names follow the backend contract: granularities
//! serialize as `short`/`medium`/`long`.

use serde::{Deserialize, Serialize};

/// How the submitted content string should be interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputMode {
    /// Raw text pasted by the user
    Text,
    /// A web-page address to be resolved into text first
    Url,
}

impl InputMode {
    /// Human-readable label for display
    pub fn label(&self) -> &'static str {
        match self {
            InputMode::Text => "Text",
            InputMode::Url => "URL",
        }
    }
}

/// Requested summary length tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Granularity {
    /// 1-2 sentences
    #[serde(rename = "short")]
    Brief,
    /// 3-5 sentences
    #[serde(rename = "medium")]
    Standard,
    /// Full paragraph
    #[serde(rename = "long")]
    Detailed,
}

impl Granularity {
    /// Human-readable label for display
    pub fn label(&self) -> &'static str {
        match self {
            Granularity::Brief => "Brief",
            Granularity::Standard => "Standard",
            Granularity::Detailed => "Detailed",
        }
    }

    /// Expected summary length for display
    pub fn description(&self) -> &'static str {
        match self {
            Granularity::Brief => "1-2 sentences",
            Granularity::Standard => "3-5 sentences",
            Granularity::Detailed => "Full paragraph",
        }
    }

    /// The value sent to the summarization endpoint
    pub fn wire_name(&self) -> &'static str {
        match self {
            Granularity::Brief => "short",
            Granularity::Standard => "medium",
            Granularity::Detailed => "long",
        }
    }
}

impl Default for Granularity {
    fn default() -> Self {
        Granularity::Standard
    }
}

/// One user-initiated summarization request.
///
/// Constructed fresh per submission and immutable afterwards; persisted
/// only as part of a history entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionRequest {
    /// Raw text or a URL, depending on `input_mode`
    pub content: String,
    pub input_mode: InputMode,
    pub granularity: Granularity,
}

impl SubmissionRequest {
    pub fn new(content: impl Into<String>, input_mode: InputMode, granularity: Granularity) -> Self {
        Self {
            content: content.into(),
            input_mode,
            granularity,
        }
    }
}

/// The text produced by the summarization endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryResult {
    pub text: String,
}

impl SummaryResult {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Which network stage a failure originated from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Resolving a URL into plain text
    Resolve,
    /// Producing the summary
    Summarize,
}

/// User-facing failure categories. Closed set: every failure surfaced to
/// the user resolves to exactly one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    Validation,
    Auth,
    NetworkTimeout,
    ServiceRejected,
    ClientSystem,
    Unknown,
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ErrorCategory::Validation => "validation",
            ErrorCategory::Auth => "auth",
            ErrorCategory::NetworkTimeout => "network_timeout",
            ErrorCategory::ServiceRejected => "service_rejected",
            ErrorCategory::ClientSystem => "client_system",
            ErrorCategory::Unknown => "unknown",
        };
        write!(f, "{}", name)
    }
}

/// A remedial action offered alongside a classified error.
///
/// Actions are inert data: the display layer renders the label and
/// dispatches the selected variant back through the application. No
/// callbacks are embedded in error values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RemedyAction {
    SwitchToTextInput,
    TrySampleText,
    GoToLogin,
    Retry,
    TryShorterContent,
    TryDifferentContent,
    TryDifferentPage,
    TryAgainLater,
}

impl RemedyAction {
    /// Button label shown to the user
    pub fn label(&self) -> &'static str {
        match self {
            RemedyAction::SwitchToTextInput => "Switch to text input",
            RemedyAction::TrySampleText => "Try sample text",
            RemedyAction::GoToLogin => "Go to login",
            RemedyAction::Retry => "Try again",
            RemedyAction::TryShorterContent => "Try shorter content",
            RemedyAction::TryDifferentContent => "Try different content",
            RemedyAction::TryDifferentPage => "Try a different page",
            RemedyAction::TryAgainLater => "Try again later",
        }
    }
}

/// A normalized, category-tagged failure with user-facing remedial
/// actions. Transient: lives only for the duration of one error display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedError {
    pub title: String,
    pub message: String,
    pub category: ErrorCategory,
    pub actions: Vec<RemedyAction>,
}

impl ClassifiedError {
    pub fn new(
        category: ErrorCategory,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            category,
            actions: Vec::new(),
        }
    }

    /// Attach the remedial action set for this error
    pub fn with_actions(mut self, actions: Vec<RemedyAction>) -> Self {
        self.actions = actions;
        self
    }
}

impl std::fmt::Display for ClassifiedError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.title, self.message)
    }
}
