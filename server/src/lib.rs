//! HTTP front end for the in-memory todo store.
//!
//! # Overview
//! Four operations over JSON: list and create on `/todos`, get and delete on
//! `/todos/{id}`. Errors come back as short plain-text bodies with the
//! matching status code.
//!
//! # Design
//! - The store is built once by the caller and injected as axum state; the
//!   router holds no state of its own.
//! - `run` serves until the listener fails; `run_until` also stops on a
//!   shutdown future and drains in-flight requests first.

use std::future::Future;
use std::sync::Arc;

use tokio::net::TcpListener;
use todo_core::TodoStore;

pub mod config;
pub mod error;
pub mod handlers;
pub mod json;
pub mod router;

pub use config::{ConfigError, ServerConfig};
pub use error::ApiError;
pub use json::PrettyJson;
pub use router::router;
pub use todo_core::{NewTodo, Todo, TodoId};

/// Store handle shared by every handler.
pub type SharedStore = Arc<TodoStore>;

/// Router over a fresh, empty store.
pub fn app() -> axum::Router {
    router(Arc::new(TodoStore::new()))
}

pub async fn run(listener: TcpListener, store: SharedStore) -> Result<(), std::io::Error> {
    axum::serve(listener, router(store)).await
}

pub async fn run_until<F>(
    listener: TcpListener,
    store: SharedStore,
    shutdown: F,
) -> Result<(), std::io::Error>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, router(store))
        .with_graceful_shutdown(shutdown)
        .await
}
