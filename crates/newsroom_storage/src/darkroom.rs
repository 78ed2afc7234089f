//! Storage for approved story illustrations.

use derive_getters::Getters;
use newsroom_error::{NewsroomResult, StoreError, StoreErrorKind};
use sha2::{Digest, Sha256};
use std::path::PathBuf;

/// Characters of the headline kept in an illustration's file name.
const NAME_PREFIX_LEN: usize = 20;
/// Hex digits of the content hash kept in an illustration's file name.
const HASH_PREFIX_LEN: usize = 12;

/// Writes approved illustrations under the site's image directory.
///
/// Files are named `{headline prefix}_{hash prefix}.png`, where the headline
/// prefix is the first 20 alphanumeric characters of the headline and the hash
/// prefix comes from the SHA-256 of the image bytes. Identical bytes for the
/// same headline therefore land on the same file and are written once.
///
/// The path handed back is relative to the site root (for example
/// `images/CrocSpottedinLocal_3f9a0c1b22de.png`), ready to be stored on a
/// story and emitted verbatim into `src` attributes.
#[derive(Debug, Clone, Getters)]
pub struct ImageDarkroom {
    /// Directory the files are written to
    image_dir: PathBuf,
    /// Prefix used in the paths recorded on stories
    relative_prefix: String,
}

impl ImageDarkroom {
    /// Create a darkroom writing into `image_dir`, recording paths under
    /// `relative_prefix`.
    pub fn new(image_dir: impl Into<PathBuf>, relative_prefix: impl Into<String>) -> Self {
        Self {
            image_dir: image_dir.into(),
            relative_prefix: relative_prefix.into().trim_end_matches('/').to_string(),
        }
    }

    /// File name an illustration for `headline` with contents `data` is stored under.
    pub fn file_name(headline: &str, data: &[u8]) -> String {
        let mut prefix: String = headline
            .chars()
            .filter(|c| c.is_alphanumeric())
            .take(NAME_PREFIX_LEN)
            .collect();
        if prefix.is_empty() {
            prefix.push_str("story");
        }

        let mut hasher = Sha256::new();
        hasher.update(data);
        let hash = format!("{:x}", hasher.finalize());

        format!("{}_{}.png", prefix, &hash[..HASH_PREFIX_LEN])
    }

    /// Store an illustration and return its site-relative path.
    #[tracing::instrument(skip(self, data), fields(size = data.len()))]
    pub fn develop(&self, headline: &str, data: &[u8]) -> NewsroomResult<String> {
        let file_name = Self::file_name(headline, data);
        let path = self.image_dir.join(&file_name);
        let relative = if self.relative_prefix.is_empty() {
            file_name.clone()
        } else {
            format!("{}/{}", self.relative_prefix, file_name)
        };

        if path.exists() {
            tracing::debug!(path = %path.display(), "Illustration already stored");
            return Ok(relative);
        }

        std::fs::create_dir_all(&self.image_dir).map_err(|e| {
            StoreError::new(StoreErrorKind::DirectoryCreation(format!(
                "{}: {}",
                self.image_dir.display(),
                e
            )))
        })?;

        let temp_path = path.with_extension("tmp");
        std::fs::write(&temp_path, data).map_err(|e| {
            StoreError::new(StoreErrorKind::FileWrite(format!(
                "{}: {}",
                temp_path.display(),
                e
            )))
        })?;
        std::fs::rename(&temp_path, &path).map_err(|e| {
            StoreError::new(StoreErrorKind::FileWrite(format!(
                "rename {} to {}: {}",
                temp_path.display(),
                path.display(),
                e
            )))
        })?;

        tracing::info!(path = %path.display(), "Stored illustration");
        Ok(relative)
    }
}
