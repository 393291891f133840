/// ID types for task list entities
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Task identifier
///
/// Identifiers are milliseconds since the Unix epoch at creation time, which
/// makes them roughly ordered but not collision-proof across clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(i64);

impl TaskId {
    /// Create a task ID from a raw value
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Derive a task ID from a creation timestamp
    pub fn from_timestamp(ts: DateTime<Utc>) -> Self {
        Self(ts.timestamp_millis())
    }

    /// Get the raw value
    pub const fn get(self) -> i64 {
        self.0
    }

    /// The next identifier after this one, if there is one
    pub const fn checked_next(self) -> Option<Self> {
        match self.0.checked_add(1) {
            Some(next) => Some(Self(next)),
            None => None,
        }
    }

    /// Identifier for a new entry, given the ids already in use
    ///
    /// `candidate` when it is above every taken id, otherwise one past the
    /// largest. When the largest is `i64::MAX`, the first free id at or
    /// above `candidate`.
    pub fn fresh(candidate: Self, taken: &[Self]) -> Self {
        match taken.iter().max() {
            Some(&max) if max >= candidate => max.checked_next().unwrap_or_else(|| {
                let mut id = candidate;
                while taken.contains(&id) {
                    match id.checked_next() {
                        Some(next) => id = next,
                        None => break,
                    }
                }
                id
            }),
            _ => candidate,
        }
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TaskId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

impl From<i64> for TaskId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}
