//! Summarization Request Orchestrator
//!
//! Owns the submission lifecycle: validate the input locally, resolve URL
//! content when needed, invoke the summarizer, and commit successful
//! results to the history store. Failures at any stage surface as exactly
//! one classified error.
//!
//! The lifecycle is an explicit tagged state machine; indicator flags are
//! derived from the current phase, so combinations like "fetching remote
//! content" outside the resolving phase cannot be represented.
//!
//! At most one traversal is live at a time: starting a submission cancels
//! any stale in-flight one, and a cancelled traversal writes no state, so
//! a late response can never overwrite fresher state.

use std::future::Future;
use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::models::history::HistoryEntry;
use crate::models::summary::SummaryView;
use crate::services::classifier;
use crate::storage::history::HistoryStore;
use smartsum_api::{validate_url, ApiError, ContentExtractor, Summarizer, TokenProvider};
use smartsum_core::{
    ClassifiedError, ErrorCategory, InputMode, Stage, SubmissionRequest, SummaryResult,
};

/// Signals that the user must be taken to the login surface
pub trait Navigator: Send + Sync {
    fn go_to_login(&self);
}

/// Where the current submission stands
#[derive(Debug, Clone)]
pub enum SubmitPhase {
    Idle,
    Validating,
    /// Resolving URL content; drives the "fetching remote content"
    /// sub-indicator
    ResolvingContent,
    Summarizing,
    /// Transient display state; returns to Idle on the next submission or
    /// an explicit dismissal
    Success(SummaryView),
    /// Transient display state holding the sole visible error
    Failed(ClassifiedError),
}

impl SubmitPhase {
    /// Whether a submission is in flight
    pub fn is_loading(&self) -> bool {
        matches!(
            self,
            SubmitPhase::Validating | SubmitPhase::ResolvingContent | SubmitPhase::Summarizing
        )
    }

    /// Whether remote content is being fetched right now
    pub fn is_fetching_remote(&self) -> bool {
        matches!(self, SubmitPhase::ResolvingContent)
    }
}

/// Outcome of one submission
#[derive(Debug, Clone)]
pub enum SubmitOutcome {
    Success(HistoryEntry),
    Failed(ClassifiedError),
    /// The traversal was cancelled by a newer submission or an explicit
    /// cancel; nothing was written
    Superseded,
}

enum StageRun<T> {
    Done(T),
    Cancelled,
}

/// Drives the submission state machine
pub struct SummarizeOrchestrator {
    extractor: Arc<dyn ContentExtractor>,
    summarizer: Arc<dyn Summarizer>,
    tokens: Arc<dyn TokenProvider>,
    navigator: Arc<dyn Navigator>,
    history: Arc<HistoryStore>,
    phase: RwLock<SubmitPhase>,
    in_flight: Mutex<Option<CancellationToken>>,
}

impl SummarizeOrchestrator {
    pub fn new(
        extractor: Arc<dyn ContentExtractor>,
        summarizer: Arc<dyn Summarizer>,
        tokens: Arc<dyn TokenProvider>,
        navigator: Arc<dyn Navigator>,
        history: Arc<HistoryStore>,
    ) -> Self {
        Self {
            extractor,
            summarizer,
            tokens,
            navigator,
            history,
            phase: RwLock::new(SubmitPhase::Idle),
            in_flight: Mutex::new(None),
        }
    }

    /// Run one submission through the state machine.
    ///
    /// Validation failures never reach the network. URL submissions resolve
    /// content first; the summarizer is not called when resolution fails.
    pub async fn submit(&self, request: SubmissionRequest) -> SubmitOutcome {
        let token = self.begin_flight().await;

        if !self.try_set_phase(&token, SubmitPhase::Validating).await {
            return SubmitOutcome::Superseded;
        }

        let content = request.content.trim().to_string();
        if content.is_empty() {
            return self
                .fail_with(&token, classifier::empty_input(request.input_mode))
                .await;
        }

        let resolved = match request.input_mode {
            InputMode::Text => content,
            InputMode::Url => {
                if validate_url(&content).is_err() {
                    return self.fail_with(&token, classifier::invalid_url()).await;
                }
                if !self
                    .try_set_phase(&token, SubmitPhase::ResolvingContent)
                    .await
                {
                    return SubmitOutcome::Superseded;
                }
                match self.run_stage(&token, self.extractor.extract(&content)).await {
                    StageRun::Done(Ok(text)) => text,
                    StageRun::Done(Err(err)) => {
                        return self.fail(&token, Stage::Resolve, &err).await
                    }
                    StageRun::Cancelled => return SubmitOutcome::Superseded,
                }
            }
        };

        if !self.try_set_phase(&token, SubmitPhase::Summarizing).await {
            return SubmitOutcome::Superseded;
        }
        let summary_text = match self
            .run_stage(
                &token,
                self.summarizer.summarize(&resolved, request.granularity),
            )
            .await
        {
            StageRun::Done(Ok(text)) => text,
            StageRun::Done(Err(err)) => return self.fail(&token, Stage::Summarize, &err).await,
            StageRun::Cancelled => return SubmitOutcome::Superseded,
        };

        let entry = HistoryEntry::new(&request, summary_text);
        let view = SummaryView::new(&request, SummaryResult::new(entry.summary_text.clone()));
        if !self.try_set_phase(&token, SubmitPhase::Success(view)).await {
            return SubmitOutcome::Superseded;
        }
        // History persistence failure does not fail the submission
        if let Err(e) = self.history.insert(entry.clone()) {
            warn!(error = %e, "failed to persist history entry");
        }
        debug!(id = %entry.id, "submission succeeded");
        SubmitOutcome::Success(entry)
    }

    /// Cancel any in-flight traversal and return to Idle
    pub async fn cancel(&self) {
        let mut guard = self.in_flight.lock().await;
        if let Some(token) = guard.take() {
            token.cancel();
        }
        drop(guard);
        *self.phase.write().await = SubmitPhase::Idle;
    }

    /// Dismiss a transient Success or Failed display state
    pub async fn dismiss(&self) {
        let mut phase = self.phase.write().await;
        if matches!(*phase, SubmitPhase::Success(_) | SubmitPhase::Failed(_)) {
            *phase = SubmitPhase::Idle;
        }
    }

    /// Re-populate the result view from a history entry.
    ///
    /// Selecting from history is a read; cache order is untouched.
    pub async fn restore(&self, entry: &HistoryEntry) {
        *self.phase.write().await = SubmitPhase::Success(SummaryView::from_entry(entry));
    }

    /// Snapshot of the current phase
    pub async fn phase(&self) -> SubmitPhase {
        self.phase.read().await.clone()
    }

    /// Whether a submission is in flight
    pub async fn is_loading(&self) -> bool {
        self.phase.read().await.is_loading()
    }

    async fn begin_flight(&self) -> CancellationToken {
        let mut guard = self.in_flight.lock().await;
        if let Some(stale) = guard.take() {
            stale.cancel();
        }
        let token = CancellationToken::new();
        *guard = Some(token.clone());
        token
    }

    /// Write a phase transition unless this traversal has been cancelled.
    /// The check happens under the phase lock so a stale traversal cannot
    /// overwrite a newer one's state.
    async fn try_set_phase(&self, token: &CancellationToken, phase: SubmitPhase) -> bool {
        let mut guard = self.phase.write().await;
        if token.is_cancelled() {
            return false;
        }
        *guard = phase;
        true
    }

    async fn run_stage<F, T>(&self, token: &CancellationToken, fut: F) -> StageRun<T>
    where
        F: Future<Output = T>,
    {
        tokio::select! {
            biased;
            _ = token.cancelled() => StageRun::Cancelled,
            out = fut => {
                if token.is_cancelled() {
                    StageRun::Cancelled
                } else {
                    StageRun::Done(out)
                }
            }
        }
    }

    async fn fail(
        &self,
        token: &CancellationToken,
        stage: Stage,
        error: &ApiError,
    ) -> SubmitOutcome {
        debug!(?stage, %error, "submission failed");
        self.fail_with(token, classifier::classify(stage, error)).await
    }

    async fn fail_with(
        &self,
        token: &CancellationToken,
        classified: ClassifiedError,
    ) -> SubmitOutcome {
        if token.is_cancelled() {
            return SubmitOutcome::Superseded;
        }
        if classified.category == ErrorCategory::Auth {
            // The session is destroyed and the redirect signaled exactly
            // once here, whichever invoker raised the rejection
            self.tokens.clear_token();
            self.navigator.go_to_login();
        }
        if !self
            .try_set_phase(token, SubmitPhase::Failed(classified.clone()))
            .await
        {
            return SubmitOutcome::Superseded;
        }
        SubmitOutcome::Failed(classified)
    }
}
