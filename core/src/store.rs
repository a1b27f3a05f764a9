//! In-memory todo store.
//!
//! # Design
//! One `Mutex` covers both the map and the id counter. Splitting them would
//! let two creates observe the same counter value, so every operation runs
//! as a single critical section. There is no reader/writer distinction.
//!
//! Guards are never returned to callers: each method copies what it needs
//! and drops the lock before returning, which keeps JSON encoding (and any
//! `.await` in the server) outside the critical section.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::error::StoreError;
use crate::types::{NewTodo, Todo, TodoId};

#[derive(Debug)]
struct Inner {
    todos: HashMap<TodoId, Todo>,
    next_id: TodoId,
}

/// Authoritative collection of todos, shared by all request handlers.
#[derive(Debug)]
pub struct TodoStore {
    inner: Mutex<Inner>,
}

impl Default for TodoStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TodoStore {
    pub fn new() -> Self {
        Self::starting_at(TodoId::new(1))
    }

    fn starting_at(next_id: TodoId) -> Self {
        Self {
            inner: Mutex::new(Inner {
                todos: HashMap::new(),
                next_id,
            }),
        }
    }

    // Every method leaves `Inner` consistent before it can panic, so a
    // poisoned lock still guards valid data.
    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Snapshot of every todo. Order is unspecified.
    pub fn list(&self) -> Vec<Todo> {
        self.lock().todos.values().cloned().collect()
    }

    /// Store a new todo under the next unused id and return it.
    ///
    /// A blank title is rejected before the lock is taken, so it never
    /// consumes an id.
    pub fn create(&self, input: NewTodo) -> Result<Todo, StoreError> {
        if !input.has_title() {
            return Err(StoreError::TitleRequired);
        }

        let mut inner = self.lock();
        let id = inner.next_id;
        // `i64::MAX` itself is never handed out; that keeps `next_id` valid.
        inner.next_id = id.next().ok_or(StoreError::IdsExhausted)?;
        let todo = Todo {
            id,
            title: input.title,
            completed: input.completed,
        };
        inner.todos.insert(id, todo.clone());
        Ok(todo)
    }

    pub fn get(&self, id: TodoId) -> Result<Todo, StoreError> {
        self.lock().todos.get(&id).cloned().ok_or(StoreError::NotFound(id))
    }

    /// Remove a todo. Deleting an id twice fails the second time.
    pub fn delete(&self, id: TodoId) -> Result<(), StoreError> {
        self.lock().todos.remove(&id).map(|_| ()).ok_or(StoreError::NotFound(id))
    }

    pub fn len(&self) -> usize {
        self.lock().todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
