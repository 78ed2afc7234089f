//! The newsroom's personas.

use derive_getters::Getters;
use newsroom_core::WriterEntry;
use serde::{Deserialize, Serialize};

/// Key of the persona used when an unknown one is requested.
pub const EDITOR: &str = "Remy";

/// A writing persona.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct Persona {
    /// Persona key, as used in assignments and arc scripts
    key: String,
    /// What kind of animal the persona is
    species: String,
    /// How the persona writes
    voice: String,
    /// Newsroom role
    role: String,
    /// Illustration style hint for image prompts
    style: String,
}

impl Persona {
    /// Create a persona.
    pub fn new(
        key: impl Into<String>,
        species: impl Into<String>,
        voice: impl Into<String>,
        role: impl Into<String>,
        style: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            species: species.into(),
            voice: voice.into(),
            role: role.into(),
            style: style.into(),
        }
    }

    /// Overlay roster metadata onto this persona, keeping existing values
    /// where the roster entry has none.
    pub fn with_roster_entry(mut self, entry: &WriterEntry) -> Self {
        if let Some(species) = entry.species().as_ref().filter(|s| !s.trim().is_empty()) {
            self.species = species.clone();
        }
        if let Some(voice) = entry.voice().as_ref().filter(|s| !s.trim().is_empty()) {
            self.voice = voice.clone();
        }
        if let Some(role) = entry.role().as_ref().filter(|s| !s.trim().is_empty()) {
            self.role = role.clone();
        }
        self
    }
}

/// Every persona on staff.
///
/// # Examples
///
/// ```
/// use newsroom_desk::Cast;
///
/// let cast = Cast::default();
/// assert_eq!(cast.get("Dazza").species(), "Cane Toad");
/// // Unknown personas are written by the editor.
/// assert_eq!(cast.get("Nobody").key(), "Remy");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cast {
    personas: Vec<Persona>,
    editor: usize,
}

impl Cast {
    /// Create a cast. The editor is added if missing.
    pub fn new(mut personas: Vec<Persona>) -> Self {
        let editor = match personas.iter().position(|p| p.key == EDITOR) {
            Some(index) => index,
            None => {
                personas.insert(0, default_editor());
                0
            }
        };
        Self { personas, editor }
    }

    /// Persona by key, matched exactly then case-insensitively.
    pub fn lookup(&self, key: &str) -> Option<&Persona> {
        self.personas
            .iter()
            .find(|p| p.key == key)
            .or_else(|| self.personas.iter().find(|p| p.key.eq_ignore_ascii_case(key)))
    }

    /// Persona by key, falling back to the editor.
    pub fn get(&self, key: &str) -> &Persona {
        match self.lookup(key) {
            Some(persona) => persona,
            None => {
                tracing::warn!(persona = key, "Unknown persona, the editor will write it");
                self.editor()
            }
        }
    }

    /// The editor.
    pub fn editor(&self) -> &Persona {
        &self.personas[self.editor]
    }

    /// All personas.
    pub fn personas(&self) -> &[Persona] {
        &self.personas
    }
}

fn default_editor() -> Persona {
    Persona::new(
        EDITOR,
        "Dachshund",
        "Dignified, weary, slightly aristocratic. Uses words like 'alas' and 'furthermore'.",
        "Editor-in-Chief",
        "engraving",
    )
}

impl Default for Cast {
    fn default() -> Self {
        let ligne = "ligne_claire";
        Self::new(vec![
            default_editor(),
            Persona::new(
                "Swoop",
                "Australian Magpie",
                "Paranoid, gossipy, fast-paced Noir detective. Starts sentences with 'I saw it!'. Obsessed with shiny things.",
                "Crime Reporter",
                ligne,
            ),
            Persona::new(
                "Bunty",
                "Standard Poodle",
                "Snobbish, uses incorrect French, obsessed with property values and 'curation'.",
                "Social Correspondent",
                ligne,
            ),
            Persona::new(
                "Binnsy",
                "Australian White Ibis (Bin Chicken)",
                "Pompous, academic, unbearable. Sees garbage as 'found art installations'.",
                "Arts Critic",
                ligne,
            ),
            Persona::new(
                "Sly",
                "Red Fox",
                "Slick, deceptive, fast-talking. Uses real estate buzzwords like 'STCA' and 'Renovator's Delight'.",
                "Real Estate Agent",
                ligne,
            ),
            Persona::new(
                "Mick_and_Scampy",
                "Mallard Drake (Mick) & Sugar Glider (Scampy)",
                "Mick is a bloke who loves utes and common sense. Scampy is a nervous, high-energy policy doctor using buzzwords. They bicker.",
                "Political Correspondents",
                ligne,
            ),
            Persona::new(
                "Buster",
                "British Bulldog",
                "Gruff, cliché-heavy ('Full credit to the boys', 'Gave 110%'). Loves meat pies.",
                "Sports Desk",
                ligne,
            ),
            Persona::new(
                "Madame_Mews",
                "Black Cat",
                "Cryptic, aloof, slightly insulting. Gives terrible, lazy advice.",
                "Agony Aunt / Mystic",
                ligne,
            ),
            Persona::new(
                "Dazza",
                "Cane Toad",
                "Chaotic, sweaty, slang-heavy. Hates 'Southerners'. Loves humidity and XXXX Gold.",
                "Northern Correspondent",
                ligne,
            ),
            Persona::new(
                "Zoomie",
                "Jack Russell Terrier",
                "Brainrot generation. 'No cap', 'fr fr', 'skibidi'. Hyperactive. Rides an E-bike.",
                "Youth Reporter",
                ligne,
            ),
            Persona::new(
                "Coco",
                "Persian Cat",
                "Influencer. Obsessed with selfies, lighting, and avocado toast. Vapid.",
                "Lifestyle Influencer",
                ligne,
            ),
            Persona::new(
                "Webster",
                "Huntsman Spider",
                "Highly anxious, types fast, terrified of shoes. Tech support lingo.",
                "Webmaster / IT",
                ligne,
            ),
        ])
    }
}
