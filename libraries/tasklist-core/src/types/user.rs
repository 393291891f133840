/// User domain type
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Login record
///
/// Credentials are stored and compared as plain strings. Any other fields
/// (such as an `id`) are opaque and kept in `extra`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub username: String,

    pub password: String,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl User {
    /// Create a user record
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            extra: Map::new(),
        }
    }

    /// Exact-string credential comparison
    pub fn matches_credentials(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password == password
    }
}
