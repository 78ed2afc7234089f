//! Content store persistence.

use crate::{ContentDocument, read_optional_json, write_json_atomic};
use newsroom_core::{StoryRecord, WriterRoster};
use newsroom_error::{NewsroomResult, StoreError, StoreErrorKind};
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Handle to the JSON content store document.
///
/// The store is stateless apart from its path: every [`load`](Self::load)
/// reads the file fresh and every [`save`](Self::save) replaces it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentStore {
    path: PathBuf,
}

impl ContentStore {
    /// Create a store handle for the document at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the document exists on disk.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Load the document.
    ///
    /// A missing document yields the seed state (arc `hard_rubbish_war`,
    /// day 1, no stories). Documents written as a bare array of stories are
    /// accepted and lifted into the canonical shape with the seed narrative
    /// state.
    ///
    /// # Errors
    ///
    /// Returns [`StoreErrorKind::Corrupt`] if the document exists but is not a
    /// JSON object or array of the expected shape. Callers must not fall back
    /// to the seed state in that case.
    #[tracing::instrument(skip(self), fields(path = %self.path.display()))]
    pub fn load(&self) -> NewsroomResult<ContentDocument> {
        let Some(raw) = read_optional_json::<Value>(&self.path)? else {
            tracing::warn!("Content store not found, starting from seed state");
            return Ok(ContentDocument::default());
        };

        let document = match raw {
            Value::Array(_) => {
                let stories: Vec<StoryRecord> = serde_json::from_value(raw).map_err(|e| {
                    StoreError::new(StoreErrorKind::Corrupt(format!(
                        "{}: {}",
                        self.path.display(),
                        e
                    )))
                })?;
                tracing::info!(
                    stories = stories.len(),
                    "Loaded legacy story list, narrative state seeded"
                );
                ContentDocument::from_stories(stories)
            }
            Value::Object(_) => serde_json::from_value(raw).map_err(|e| {
                StoreError::new(StoreErrorKind::Corrupt(format!(
                    "{}: {}",
                    self.path.display(),
                    e
                )))
            })?,
            other => {
                return Err(StoreError::new(StoreErrorKind::Corrupt(format!(
                    "{}: expected object or array, found {}",
                    self.path.display(),
                    json_kind(&other)
                )))
                .into());
            }
        };

        tracing::debug!(
            arc = %document.meta().current_arc(),
            day = document.meta().day(),
            stories = document.stories().len(),
            "Loaded content store"
        );
        Ok(document)
    }

    /// Persist the document in canonical shape.
    #[tracing::instrument(skip(self, document), fields(path = %self.path.display(), stories = document.stories().len()))]
    pub fn save(&self, document: &ContentDocument) -> NewsroomResult<()> {
        write_json_atomic(&self.path, document)?;
        tracing::debug!("Saved content store");
        Ok(())
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Load the writer roster.
///
/// A missing roster is an empty roster; every byline then falls back to staff.
///
/// # Errors
///
/// Returns [`StoreErrorKind::Corrupt`] if the roster exists but is malformed.
#[tracing::instrument(skip(path), fields(path = %path.display()))]
pub fn load_roster(path: &Path) -> NewsroomResult<WriterRoster> {
    match read_optional_json::<WriterRoster>(path)? {
        Some(roster) => {
            tracing::debug!(writers = roster.len(), "Loaded writer roster");
            Ok(roster)
        }
        None => {
            tracing::warn!("Writer roster not found, bylines fall back to staff");
            Ok(WriterRoster::default())
        }
    }
}
