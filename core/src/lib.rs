//! Domain core for the todo service.
//!
//! # Overview
//! Owns the `Todo` record and the in-memory `TodoStore` that every HTTP
//! request reads from and writes to. Nothing here knows about HTTP or async
//! runtimes; the server crate wraps these operations in handlers.
//!
//! # Design
//! - `TodoStore` is a single mutex over the map and the id counter, so id
//!   assignment and insertion happen in one critical section.
//! - Ids come from the store, never from the client payload.
//! - `list` hands out an owned snapshot so callers encode JSON after the
//!   lock is released.

pub mod error;
pub mod store;
pub mod types;

pub use error::StoreError;
pub use store::TodoStore;
pub use types::{NewTodo, ParseTodoIdError, Todo, TodoId};
