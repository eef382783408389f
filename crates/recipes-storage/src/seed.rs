//! Loading the initial recipe collection from a JSON seed file.
//!
//! The seed file is a JSON array of recipe objects. Any field may be
//! missing; the store fills in ids and timestamps where needed. A missing or
//! broken seed file never stops the service, it just starts empty.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Deserialize;

use recipes_core::RecipeDraft;

use crate::error::StorageError;

/// One entry of the seed file, before the store admits it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedRecipe {
    /// Existing id. Empty means the store assigns one.
    #[serde(default)]
    pub id: String,
    #[serde(flatten)]
    pub content: RecipeDraft,
    /// Original publication time. Missing means "now".
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
}

/// Reads and decodes a seed file, reporting any problem as an error.
pub fn try_load_seed_file(path: &Path) -> Result<Vec<SeedRecipe>, StorageError> {
    let raw = fs::read_to_string(path).map_err(|e| StorageError::Seed {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    serde_json::from_str(&raw).map_err(|e| StorageError::Seed {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

/// Reads a seed file, falling back to an empty collection.
///
/// A missing file is logged at `info`, an unreadable or malformed one at
/// `warn`.
pub fn load_seed_file(path: &Path) -> Vec<SeedRecipe> {
    if !path.exists() {
        tracing::info!(path = %path.display(), "no seed file, starting with an empty collection");
        return Vec::new();
    }

    match try_load_seed_file(path) {
        Ok(records) => {
            tracing::debug!(path = %path.display(), count = records.len(), "read seed file");
            records
        }
        Err(err) => {
            tracing::warn!(error = %err, "ignoring seed file");
            Vec::new()
        }
    }
}
