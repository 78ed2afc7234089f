//! The content store document.

use derive_getters::Getters;
use newsroom_core::StoryRecord;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Arc used when no document exists yet.
pub const SEED_ARC_ID: &str = "hard_rubbish_war";

/// Whether the active arc still has scripted days ahead.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum ArcStatus {
    /// More scripted days remain
    #[default]
    #[display("active")]
    Active,
    /// Holding at the final scripted day
    #[display("complete")]
    Complete,
}

/// Narrative position: which arc is running and which day of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct NarrativeMeta {
    /// Key into the document's `arcs` table
    #[serde(default = "seed_arc_id")]
    current_arc: String,
    /// Current day within the arc, starting at 1
    #[serde(default = "first_day")]
    day: u32,
    /// Arc progress marker
    #[serde(default)]
    status: ArcStatus,
    /// Keys the pipeline does not manage
    #[serde(flatten)]
    extra: BTreeMap<String, serde_json::Value>,
}

fn seed_arc_id() -> String {
    SEED_ARC_ID.to_string()
}

fn first_day() -> u32 {
    1
}

impl Default for NarrativeMeta {
    fn default() -> Self {
        Self {
            current_arc: seed_arc_id(),
            day: first_day(),
            status: ArcStatus::Active,
            extra: BTreeMap::new(),
        }
    }
}

impl NarrativeMeta {
    /// Create a narrative position.
    pub fn new(current_arc: impl Into<String>, day: u32) -> Self {
        Self {
            current_arc: current_arc.into(),
            day,
            status: ArcStatus::Active,
            extra: BTreeMap::new(),
        }
    }

    /// Move to another day.
    pub fn set_day(&mut self, day: u32) {
        self.day = day;
    }

    /// Update the progress marker.
    pub fn set_status(&mut self, status: ArcStatus) {
        self.status = status;
    }
}

/// Instructions for one day: persona key to instruction text.
pub type DayScript = BTreeMap<String, String>;

/// A scripted multi-day arc.
///
/// Day keys are kept as the strings found in the document (`"1"`, `"2"`, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArcScript {
    /// Day number to that day's script
    #[serde(default)]
    days: BTreeMap<String, DayScript>,
    /// Hand-written arc fields such as a title, kept as found
    #[serde(flatten)]
    extra: BTreeMap<String, serde_json::Value>,
}

impl ArcScript {
    /// Script for a given day, if one exists.
    pub fn day(&self, day: u32) -> Option<&DayScript> {
        self.days.get(&day.to_string())
    }

    /// Whether a script exists for the given day.
    pub fn has_day(&self, day: u32) -> bool {
        self.day(day).is_some()
    }

    /// Add or replace a persona's instruction for a day.
    pub fn insert(&mut self, day: u32, persona: impl Into<String>, instruction: impl Into<String>) {
        self.days
            .entry(day.to_string())
            .or_default()
            .insert(persona.into(), instruction.into());
    }

    /// Number of scripted days.
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Whether the arc has no scripted days.
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Highest numbered day in the script.
    pub fn last_day(&self) -> Option<u32> {
        self.days.keys().filter_map(|k| k.trim().parse().ok()).max()
    }

    /// Arc fields other than `days`.
    pub fn extra(&self) -> &BTreeMap<String, serde_json::Value> {
        &self.extra
    }
}

/// Everything the content store persists.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Getters)]
pub struct ContentDocument {
    /// Narrative position
    #[serde(default)]
    meta: NarrativeMeta,
    /// Arc scripts by arc id
    #[serde(default)]
    arcs: BTreeMap<String, ArcScript>,
    /// Published stories in insertion order
    #[serde(default)]
    stories: Vec<StoryRecord>,
    /// Top-level keys written by other tools
    #[serde(flatten)]
    extra: BTreeMap<String, serde_json::Value>,
}

impl ContentDocument {
    /// Create a document from its parts.
    pub fn new(
        meta: NarrativeMeta,
        arcs: BTreeMap<String, ArcScript>,
        stories: Vec<StoryRecord>,
    ) -> Self {
        Self {
            meta,
            arcs,
            stories,
            extra: BTreeMap::new(),
        }
    }

    /// Document holding only stories, with the seed narrative state.
    pub fn from_stories(stories: Vec<StoryRecord>) -> Self {
        Self {
            stories,
            ..Self::default()
        }
    }

    /// Mutable narrative position.
    pub fn meta_mut(&mut self) -> &mut NarrativeMeta {
        &mut self.meta
    }

    /// The arc named by `meta.current_arc`, if it is scripted.
    pub fn active_arc(&self) -> Option<&ArcScript> {
        self.arcs.get(&self.meta.current_arc)
    }

    /// Add or replace an arc script.
    pub fn insert_arc(&mut self, id: impl Into<String>, arc: ArcScript) {
        self.arcs.insert(id.into(), arc);
    }

    /// Mutable story list.
    pub fn stories_mut(&mut self) -> &mut Vec<StoryRecord> {
        &mut self.stories
    }

    /// Append newly published stories.
    pub fn publish(&mut self, stories: impl IntoIterator<Item = StoryRecord>) {
        self.stories.extend(stories);
    }
}
