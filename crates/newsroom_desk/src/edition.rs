//! Writing a day's edition.

use crate::{Cast, DeskSettings, HeadlineBudget, HeadlineFeed, build_prompt};
use derive_getters::Getters;
use newsroom_core::{ArticleDraft, SectionKey};
use newsroom_error::{GenerationError, GenerationErrorKind, NewsroomResult};
use newsroom_interface::TextGenerator;
use newsroom_narrative::{AdvanceOutcome, ArcDirector};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// One persona writing for one section.
#[derive(
    Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Getters, derive_builder::Builder,
)]
#[builder(setter(into), default)]
pub struct Assignment {
    /// Section key the story is filed under
    section: SectionKey,
    /// Desk name given to the writer in the prompt
    desk_title: String,
    /// Persona writing the story
    persona: String,
    /// Headlines handed to the writer
    #[serde(default)]
    feed: HeadlineFeed,
    /// Always promote the story to the front page
    #[serde(default)]
    featured: bool,
}

impl Assignment {
    /// Create an assignment.
    pub fn new(
        section: impl Into<SectionKey>,
        desk_title: impl Into<String>,
        persona: impl Into<String>,
        feed: HeadlineFeed,
    ) -> Self {
        Self {
            section: section.into(),
            desk_title: desk_title.into(),
            persona: persona.into(),
            feed,
            featured: false,
        }
    }

    /// Mark the story for the front page.
    pub fn on_front_page(mut self) -> Self {
        self.featured = true;
        self
    }
}

/// The standing list of daily assignments, in filing order.
pub fn default_assignments() -> Vec<Assignment> {
    use HeadlineFeed::*;
    vec![
        Assignment::new("masthead", "Front Page", "Remy", LocalNews).on_front_page(),
        Assignment::new("politics", "Capital Hill", "Mick_and_Scampy", NationalNews),
        Assignment::new("news", "Crime Watch", "Swoop", LocalNews),
        Assignment::new("arts", "Arts Review", "Binnsy", LocalNews),
        Assignment::new("property", "Property", "Sly", NoHeadlines),
        Assignment::new("sport", "Sport", "Buster", LocalNews),
        Assignment::new("youth_sport", "Youth Sport", "Zoomie", NoHeadlines),
        Assignment::new("lifestyle", "Lifestyle", "Coco", NoHeadlines),
        Assignment::new("horoscope", "Horoscope", "Madame_Mews", NoHeadlines),
        Assignment::new("backpage", "Troppo News", "Dazza", TroppoCorner),
        Assignment::new("tech", "Tech Support", "Webster", NoHeadlines),
    ]
}

/// Summary of a generation run.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct EditionReport {
    /// Stories written by the generator
    filed: usize,
    /// Stories replaced by the napping placeholder
    placeholders: usize,
    /// What happened to the story arc
    outcome: AdvanceOutcome,
}

/// Strip markdown fences and surrounding chatter from model output.
///
/// # Examples
///
/// ```
/// use newsroom_desk::clean_model_output;
///
/// let raw = "```json\n{\"headline\": \"h\"}\n```";
/// assert_eq!(clean_model_output(raw), "{\"headline\": \"h\"}");
/// assert_eq!(clean_model_output("Sure! {\"a\": 1} Enjoy."), "{\"a\": 1}");
/// ```
pub fn clean_model_output(raw: &str) -> &str {
    let text = raw.trim();
    let text = text
        .strip_prefix("```json")
        .or_else(|| text.strip_prefix("```"))
        .unwrap_or(text);
    let text = text.strip_suffix("```").unwrap_or(text).trim();

    match (text.find('{'), text.rfind('}')) {
        (Some(start), Some(end)) if start < end => &text[start..=end],
        _ => text,
    }
}

/// Parse model output into a draft.
///
/// # Errors
///
/// Returns [`GenerationErrorKind::MalformedResponse`] if the output is not a
/// JSON object in the draft schema or lacks a headline or body.
pub fn parse_draft(raw: &str) -> NewsroomResult<ArticleDraft> {
    let draft: ArticleDraft = serde_json::from_str(clean_model_output(raw)).map_err(|e| {
        GenerationError::new(GenerationErrorKind::MalformedResponse(e.to_string()))
    })?;
    if !draft.is_complete() {
        return Err(GenerationError::new(GenerationErrorKind::MalformedResponse(
            "draft is missing a headline or body".to_string(),
        ))
        .into());
    }
    Ok(draft)
}

/// Write every assignment, file the stories and advance the arc.
///
/// Each assignment gets the arc director's instruction for its persona. A
/// generator failure or unusable output is replaced by the persona's napping
/// placeholder so the gap shows on the page. The document is saved once, by
/// the arc advance at the end.
#[tracing::instrument(skip_all, fields(model = generator.model_name(), assignments = assignments.len(), arc = %director.arc_id(), day = director.day()))]
pub async fn generate_edition(
    generator: &dyn TextGenerator,
    director: &mut ArcDirector,
    cast: &Cast,
    budget: &HeadlineBudget,
    assignments: &[Assignment],
    settings: &DeskSettings,
) -> NewsroomResult<EditionReport> {
    let mut stories = Vec::with_capacity(assignments.len());
    let mut placeholders = 0;

    for assignment in assignments {
        let persona = cast.get(&assignment.persona);
        let direction = director.direction(&assignment.persona);
        let prompt = build_prompt(
            persona,
            &assignment.desk_title,
            budget.feed(assignment.feed),
            &direction,
            settings,
        )?;

        info!(persona = %assignment.persona, section = %assignment.section, "Writing assignment");
        let draft = match generator.generate(&prompt).await.and_then(|raw| parse_draft(&raw)) {
            Ok(draft) => draft,
            Err(e) => {
                warn!(persona = %assignment.persona, section = %assignment.section, error = %e, "Generation failed, filing placeholder");
                placeholders += 1;
                ArticleDraft::placeholder(&assignment.persona, persona.species())
            }
        };

        let mut story = draft.into_story(assignment.section.clone(), &assignment.persona);
        if assignment.featured {
            story.set_featured(true);
        }
        stories.push(story);
    }

    let filed = stories.len() - placeholders;
    director.document_mut().publish(stories);
    let outcome = director.advance()?;
    info!(filed, placeholders, %outcome, "Edition generated");

    Ok(EditionReport {
        filed,
        placeholders,
        outcome,
    })
}
