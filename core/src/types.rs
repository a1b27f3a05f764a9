//! Domain types for the todo service.
//!
//! # Design
//! `TodoId` wraps the integer id so a raw count or index can't be passed
//! where an id is expected. It serializes as a bare JSON number.
//!
//! `NewTodo` is the create payload. `title` defaults to an empty string so a
//! body without one fails validation ("title required") instead of decoding.
//! There is no `id` field: serde drops unknown keys, so a client-supplied id
//! is silently ignored and the store assigns its own. An explicit `null`
//! for either field counts as absent.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Store-assigned identifier of a todo. The first id handed out is 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(i64);

impl TodoId {
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    pub const fn get(self) -> i64 {
        self.0
    }

    /// The id after this one, or `None` once `i64::MAX` is reached.
    pub(crate) const fn next(self) -> Option<Self> {
        match self.0.checked_add(1) {
            Some(raw) => Some(Self(raw)),
            None => None,
        }
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// The path segment is not a base-10 integer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid id")]
pub struct ParseTodoIdError(#[source] ParseIntError);

impl FromStr for TodoId {
    type Err = ParseTodoIdError;

    /// Accepts anything `i64` parses, including a leading sign. Ids that
    /// parse but were never assigned (0, negatives) are a lookup miss.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i64>().map(Self).map_err(ParseTodoIdError)
    }
}

/// A todo item as stored and returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: TodoId,
    pub title: String,
    pub completed: bool,
}

/// Request payload for creating a new todo.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewTodo {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub completed: bool,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl NewTodo {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            completed: false,
        }
    }

    /// True when the title has visible content once whitespace is trimmed.
    pub fn has_title(&self) -> bool {
        !self.title.trim().is_empty()
    }
}
