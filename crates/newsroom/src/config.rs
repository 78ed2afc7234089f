//! Layered configuration.
//!
//! Sources, lowest precedence first:
//! - Bundled defaults (include_str! from newsroom.toml)
//! - `~/.config/newsroom/newsroom.toml`
//! - `./newsroom.toml`
//! - An explicit file, such as the CLI's `--config`

use config::{Config, File, FileFormat};
use derive_getters::Getters;
use newsroom_desk::{DarkroomSettings, DeskSettings, HeadlineConfig};
use newsroom_error::{ConfigError, ConfigStage, NewsroomResult};
use newsroom_render::{SectionEntry, SectionRegistry, SiteStyle};
use newsroom_storage::{ContentStore, ImageDarkroom};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Bundled default configuration.
const DEFAULT_CONFIG: &str = include_str!("../../../newsroom.toml");

/// Where the pipeline reads and writes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Getters)]
#[serde(default)]
pub struct PathsConfig {
    /// Content store document
    content_store: PathBuf,
    /// Writer roster
    staff_roster: PathBuf,
    /// Directory the site is written to
    output_dir: PathBuf,
    /// Directory approved illustrations are written to
    image_dir: PathBuf,
    /// The day's headline budget
    headlines: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            content_store: PathBuf::from("data/stories.json"),
            staff_roster: PathBuf::from("data/staff.json"),
            output_dir: PathBuf::from("output"),
            image_dir: PathBuf::from("output/images"),
            headlines: PathBuf::from("data/current_headlines.json"),
        }
    }
}

/// Complete Newsroom configuration.
///
/// # Example
///
/// ```rust
/// use newsroom::NewsroomConfig;
///
/// let config = NewsroomConfig::bundled().unwrap();
/// assert_eq!(config.site().title(), "The Remy Digest");
/// assert!(config.registry().is_ok());
/// ```
#[derive(Debug, Clone, Default, Deserialize, Getters)]
pub struct NewsroomConfig {
    /// File locations
    #[serde(default)]
    paths: PathsConfig,
    /// Site identity
    #[serde(default)]
    site: SiteStyle,
    /// Section registry entries, in declaration order
    #[serde(default)]
    sections: Vec<SectionEntry>,
    /// Headline ranking rules
    #[serde(default)]
    headlines: HeadlineConfig,
    /// Prompt settings
    #[serde(default)]
    desk: DeskSettings,
    /// Illustration settings
    #[serde(default)]
    darkroom: DarkroomSettings,
}

impl NewsroomConfig {
    /// Load with the standard precedence: current dir > home dir > bundled defaults.
    pub fn load() -> NewsroomResult<Self> {
        Self::load_with(None)
    }

    /// Load with the standard precedence, then apply `explicit` on top.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the explicit file is missing or any source
    /// fails to parse.
    #[tracing::instrument(skip_all, fields(explicit = ?explicit))]
    pub fn load_with(explicit: Option<&Path>) -> NewsroomResult<Self> {
        debug!("Loading configuration with precedence: explicit > current dir > home dir > bundled defaults");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/newsroom/newsroom.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("newsroom").required(false));

        if let Some(path) = explicit {
            builder = builder.add_source(File::from(path).required(true));
        }

        Self::finish(builder)
    }

    /// The bundled defaults alone.
    pub fn bundled() -> NewsroomResult<Self> {
        Self::from_toml(DEFAULT_CONFIG)
    }

    /// Load a single file with no layering.
    pub fn from_file(path: impl AsRef<Path>) -> NewsroomResult<Self> {
        Self::finish(Config::builder().add_source(File::from(path.as_ref())))
    }

    /// Parse configuration from TOML text with no layering.
    pub fn from_toml(toml: &str) -> NewsroomResult<Self> {
        Self::finish(Config::builder().add_source(File::from_str(toml, FileFormat::Toml)))
    }

    fn finish(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> NewsroomResult<Self> {
        let config: Self = builder
            .build()
            .map_err(|e| ConfigError::at_stage(ConfigStage::Load, e.to_string()))?
            .try_deserialize()
            .map_err(|e| ConfigError::at_stage(ConfigStage::Parse, e.to_string()))?;

        if *config.darkroom.max_attempts() == 0 {
            return Err(ConfigError::new("darkroom.max_attempts must be at least 1").into());
        }
        Ok(config)
    }

    /// Build the validated section registry.
    pub fn registry(&self) -> NewsroomResult<SectionRegistry> {
        SectionRegistry::new(self.sections.clone())
    }

    /// Handle to the content store.
    pub fn content_store(&self) -> ContentStore {
        ContentStore::new(&self.paths.content_store)
    }

    /// Prompt settings, addressed to this site.
    pub fn desk_settings(&self) -> DeskSettings {
        self.desk.clone().with_site_title(self.site.title())
    }

    /// Illustration storage under the configured image directory.
    pub fn image_darkroom(&self) -> ImageDarkroom {
        ImageDarkroom::new(&self.paths.image_dir, self.darkroom.relative_image_path())
    }
}
