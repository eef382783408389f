//! Recipe identifier newtype.
//!
//! Ids are opaque strings. Freshly generated ids are UUID v4 strings, but
//! seed data may carry ids in any format, so the inner value is a plain
//! `String` rather than a `Uuid`.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque, process-unique recipe identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecipeId(pub String);

impl RecipeId {
    /// Generates a new random identifier (UUID v4, hyphenated).
    pub fn generate() -> Self {
        RecipeId(Uuid::new_v4().to_string())
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True if the identifier is the empty string.
    ///
    /// Only seed data can produce an empty id; the store replaces it.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for RecipeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for RecipeId {
    fn from(s: String) -> Self {
        RecipeId(s)
    }
}

impl From<&str> for RecipeId {
    fn from(s: &str) -> Self {
        RecipeId(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_distinct_and_non_empty() {
        let a = RecipeId::generate();
        let b = RecipeId::generate();
        assert_ne!(a, b);
        assert!(!a.is_empty());
        assert_eq!(a.as_str().len(), 36);
    }

    #[test]
    fn serializes_as_bare_string() {
        let id = RecipeId::from("cd9ktl2f0bq1a5bsm2ug");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"cd9ktl2f0bq1a5bsm2ug\"");

        let back: RecipeId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
