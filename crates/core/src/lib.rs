//! SmartSum Core
//!
//! Dependency-light domain types shared across the SmartSum workspace:
//! input modes, summary granularities, submission records, and the
//! classified error taxonomy surfaced to the user.
//!
//! These types are kept free of heavy dependencies (only serde + thiserror)
//! so both the API layer and the application crate can build on them.

pub mod error;
pub mod types;

pub use error::{CoreError, CoreResult};
pub use types::*;
