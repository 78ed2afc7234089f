//! Illustrating stories that have no image yet.

use derive_getters::Getters;
use newsroom_core::{StoryFormat, StoryRecord};
use newsroom_error::NewsroomResult;
use newsroom_interface::{ImageGenerator, ImageReview, ImageReviewer};
use newsroom_storage::{ContentStore, ImageDarkroom};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Prompt ingredients and limits for illustration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(default)]
pub struct DarkroomSettings {
    /// Art direction leading every prompt
    base_style: String,
    /// Things the image must not contain
    negative_prompt: String,
    /// Site-relative directory recorded on stories
    relative_image_path: String,
    /// Generator calls allowed per story
    max_attempts: u32,
}

impl Default for DarkroomSettings {
    fn default() -> Self {
        Self {
            base_style: "Style: Ligne Claire (Herge/Tintin), editorial cartoon, flat colors, clear lines.".to_string(),
            negative_prompt: "NO HUMANS, NO PEOPLE, NO MAN, NO WOMAN, NO CHILD, NO FACES, NO TEXT, NO WATERMARKS, NO SIGNATURES, NO BLUR, NO DISTORTION.".to_string(),
            relative_image_path: "images".to_string(),
            max_attempts: 5,
        }
    }
}

impl DarkroomSettings {
    /// Override the number of generator calls allowed per story.
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }
}

/// Composition line for a story format.
fn composition(format: StoryFormat) -> &'static str {
    match format {
        StoryFormat::Soliloquy => {
            "COMPOSITION: Theatrical spotlight on a single subject. Dark background."
        }
        StoryFormat::Meme => {
            "COMPOSITION: Subject centered, solid background, plenty of negative space at top and bottom."
        }
        StoryFormat::Standard | StoryFormat::Debate => {
            "COMPOSITION: Wide shot, establish the scene."
        }
    }
}

/// Build the image prompt for a story.
///
/// The subject is the story's visual prompt, or its headline when it has none.
pub fn image_prompt(story: &StoryRecord, settings: &DarkroomSettings) -> String {
    let subject = story
        .visual_prompt()
        .as_deref()
        .unwrap_or(story.headline().as_str());
    format!(
        "{}\nSUBJECT: {}\n{}\nIMPORTANT: {}",
        settings.base_style,
        subject,
        composition(*story.format()),
        settings.negative_prompt
    )
}

/// Tally of a darkroom session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters)]
pub struct DarkroomReport {
    /// Stories that received an image
    developed: usize,
    /// Stories left without one, by choice or after running out of attempts
    skipped: usize,
    /// Stories abandoned after a generator or write error
    failed: usize,
}

/// Generate, review and store illustrations for stories that lack one.
///
/// Stories that already have an image are never touched. For each remaining
/// story the generator is called until the reviewer accepts or skips a
/// candidate, or `max_attempts` calls have been made. A generator error or a
/// failed image write abandons that story only. The store is saved only if at
/// least one image was accepted.
#[tracing::instrument(skip_all, fields(model = generator.model_name(), store = %store.path().display()))]
pub async fn develop_images(
    generator: &dyn ImageGenerator,
    reviewer: &mut dyn ImageReviewer,
    darkroom: &ImageDarkroom,
    store: &ContentStore,
    settings: &DarkroomSettings,
) -> NewsroomResult<DarkroomReport> {
    let mut document = store.load()?;
    let mut report = DarkroomReport::default();

    for index in 0..document.stories().len() {
        let story = document.stories()[index].clone();
        if !story.needs_image() {
            debug!(headline = %story.headline(), "Image already assigned");
            continue;
        }

        let prompt = image_prompt(&story, settings);
        let mut attempts = 0;
        let accepted = loop {
            if attempts >= settings.max_attempts {
                warn!(headline = %story.headline(), attempts, "No usable image, leaving story bare");
                report.skipped += 1;
                break None;
            }
            attempts += 1;
            debug!(headline = %story.headline(), attempt = attempts, format = %story.format(), "Shooting");

            let candidate = match generator.generate_image(&prompt).await {
                Ok(Some(bytes)) => bytes,
                Ok(None) => {
                    warn!(headline = %story.headline(), "Model returned no image, retrying");
                    continue;
                }
                Err(e) => {
                    warn!(headline = %story.headline(), error = %e, "Image generation failed");
                    report.failed += 1;
                    break None;
                }
            };

            match reviewer.review(&story, candidate) {
                ImageReview::Accepted(bytes) => break Some(bytes),
                ImageReview::Skipped => {
                    report.skipped += 1;
                    break None;
                }
                ImageReview::RetryRequested => debug!("Retry requested"),
            }
        };

        if let Some(bytes) = accepted {
            match darkroom.develop(story.headline(), &bytes) {
                Ok(path) => {
                    info!(headline = %story.headline(), image = %path, "Image approved");
                    document.stories_mut()[index].set_image(path);
                    report.developed += 1;
                }
                Err(e) => {
                    warn!(headline = %story.headline(), error = %e, "Could not store approved image");
                    report.failed += 1;
                }
            }
        }
    }

    if report.developed > 0 {
        store.save(&document)?;
    }
    info!(
        developed = report.developed,
        skipped = report.skipped,
        failed = report.failed,
        "Darkroom closed"
    );
    Ok(report)
}
