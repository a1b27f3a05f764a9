//! Error types for store operations.
//!
//! # Design
//! A create can fail on a blank title, and a lookup on an absent id. Both
//! are caller errors. The only store-side failure is running out of ids,
//! which takes `i64::MAX` creates.

use thiserror::Error;

use crate::types::TodoId;

/// Errors returned by `TodoStore` operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The title was empty after trimming surrounding whitespace.
    #[error("title required")]
    TitleRequired,

    /// No todo with this id exists (never created, or already deleted).
    #[error("todo {0} not found")]
    NotFound(TodoId),

    /// Every positive `i64` id has been handed out.
    #[error("todo ids exhausted")]
    IdsExhausted,
}
