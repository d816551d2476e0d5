//! Integration Tests Module
//!
//! End-to-end coverage of the submission lifecycle over fake invokers:
//! state machine traversal, failure classification, session destruction,
//! and the bounded persisted history.


// Submission lifecycle tests
mod orchestrator_test;

// Bounded history persistence tests
mod history_test;

// Failure classification tests
mod classifier_test;
