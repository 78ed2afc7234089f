//! Prompt assembly for the text generator.

use crate::Persona;
use derive_getters::Getters;
use newsroom_core::Headline;
use newsroom_error::{JsonError, NewsroomResult};
use serde::{Deserialize, Serialize};

/// An extra instruction added when a headline mentions one of its triggers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct TopicalRule {
    /// Case-sensitive substrings searched for in headline titles and sources
    triggers: Vec<String>,
    /// Text added to the prompt
    instruction: String,
}

impl TopicalRule {
    /// Create a rule.
    pub fn new(triggers: Vec<String>, instruction: impl Into<String>) -> Self {
        Self {
            triggers,
            instruction: instruction.into(),
        }
    }

    /// Whether any headline trips this rule.
    pub fn applies_to(&self, headlines: &[Headline]) -> bool {
        headlines.iter().any(|h| {
            self.triggers.iter().any(|t| {
                !t.is_empty() && (h.title().contains(t.as_str()) || h.source().contains(t.as_str()))
            })
        })
    }
}

/// Settings shared by every prompt in an edition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(default)]
pub struct DeskSettings {
    /// Publication name given to the writer
    site_title: String,
    /// Maximum article length in words
    word_limit: u32,
    /// House rules listed under CONSTRAINTS
    constraints: Vec<String>,
    /// Keyword-triggered extra instructions
    topical_rules: Vec<TopicalRule>,
}

impl Default for DeskSettings {
    fn default() -> Self {
        Self {
            site_title: "The Remy Digest".to_string(),
            word_limit: 250,
            constraints: vec![
                "Keep it satirical but grounded in the persona.".to_string(),
                "If this is Local News, strictly refer to Cromer/Northern Beaches. NO TROPICAL REFERENCES (unless you are Dazza).".to_string(),
                "If you are Dazza, you ONLY talk about Queensland/NT chaos.".to_string(),
                "If you are Mick/Scampy, contrast the rough bloke vs the polished doctor.".to_string(),
            ],
            topical_rules: vec![TopicalRule::new(
                vec!["Ley".to_string(), "Sussan".to_string()],
                "SPECIAL INSTRUCTION: Opposition Leader Sussan Ley is mentioned.\n- You MUST use sibilance in her quotes (elongate 's' sounds like 'thisss').\n- She must reference 'Numerology' or 'The Numbers' as the reason for her decisions.",
            )],
        }
    }
}

impl DeskSettings {
    /// Override the publication name.
    pub fn with_site_title(mut self, site_title: impl Into<String>) -> Self {
        self.site_title = site_title.into();
        self
    }
}

/// Build the prompt for one assignment.
///
/// `direction` is the arc director's wrapped instruction for the persona, or
/// empty when the arc has nothing for them today.
///
/// # Errors
///
/// Returns a [`JsonError`] if the headlines cannot be serialised.
pub fn build_prompt(
    persona: &Persona,
    desk_title: &str,
    headlines: &[Headline],
    direction: &str,
    settings: &DeskSettings,
) -> NewsroomResult<String> {
    let context = serde_json::to_string_pretty(headlines)
        .map_err(|e| JsonError::new("headline context", e.to_string()))?;

    let mut prompt = format!(
        "You are {} named {}.\nRole: {}\nPersonality: {}\n\n",
        persona.species(),
        persona.key(),
        persona.role(),
        persona.voice()
    );
    prompt.push_str(&format!(
        "TASK: Write a short article (max {} words) for the '{}' section of '{}'.\n\n",
        settings.word_limit, desk_title, settings.site_title
    ));
    prompt.push_str(&format!("CONTEXT / HEADLINES:\n{}\n", context));

    if !direction.is_empty() {
        prompt.push_str(direction);
        prompt.push('\n');
    }
    for rule in settings.topical_rules.iter().filter(|r| r.applies_to(headlines)) {
        prompt.push('\n');
        prompt.push_str(&rule.instruction);
        prompt.push('\n');
    }

    if !settings.constraints.is_empty() {
        prompt.push_str("\nCONSTRAINTS:\n");
        for constraint in &settings.constraints {
            prompt.push_str(&format!("- {}\n", constraint));
        }
    }

    prompt.push_str("\nOUTPUT FORMAT:\nReturn strictly valid JSON. Do not include markdown formatting.\n");
    prompt.push_str(&format!(
        "{{\n  \"headline\": \"The satirical headline\",\n  \"body\": \"The story text...\",\n  \"visual_prompt\": \"A description for the AI artist in {} style...\",\n  \"subtext\": \"Optional second line\",\n  \"format\": \"standard | soliloquy | meme\",\n  \"featured\": false\n}}\n",
        persona.style()
    ));

    Ok(prompt)
}
