//! The arc director.

use crate::AdvanceOutcome;
use derive_getters::Getters;
use newsroom_error::{NarrativeError, NarrativeErrorKind, NewsroomResult};
use newsroom_storage::{ArcStatus, ContentDocument, ContentStore};
use tracing::{debug, info};

/// Rule closing a wrapped per-day instruction.
pub const DIRECTION_RULE: &str = "**************************************************";

/// Hands out scripted per-day plot instructions and advances the arc.
///
/// The director owns the loaded [`ContentDocument`] for the duration of a run.
/// Other steps of the run may append stories through
/// [`document_mut`](Self::document_mut); [`advance`](Self::advance) then
/// persists the whole document in one write.
#[derive(Debug, Getters)]
pub struct ArcDirector {
    /// Where the document is persisted
    store: ContentStore,
    /// The document being directed
    document: ContentDocument,
}

impl ArcDirector {
    /// Wrap an already loaded document.
    ///
    /// # Errors
    ///
    /// Returns [`NarrativeErrorKind::InvalidDay`] if the stored day is zero.
    pub fn new(store: ContentStore, document: ContentDocument) -> NewsroomResult<Self> {
        let day = *document.meta().day();
        if day == 0 {
            return Err(NarrativeError::new(NarrativeErrorKind::InvalidDay(day)).into());
        }
        Ok(Self { store, document })
    }

    /// Load the document from `store` and wrap it.
    ///
    /// A missing document starts from the seed state; an unparsable one is an
    /// error.
    pub fn open(store: ContentStore) -> NewsroomResult<Self> {
        let document = store.load()?;
        Self::new(store, document)
    }

    /// Id of the active arc.
    pub fn arc_id(&self) -> &str {
        self.document.meta().current_arc()
    }

    /// Current day of the active arc.
    pub fn day(&self) -> u32 {
        *self.document.meta().day()
    }

    /// Progress marker of the active arc.
    pub fn status(&self) -> ArcStatus {
        *self.document.meta().status()
    }

    /// Number of scripted days in the active arc.
    pub fn scripted_days(&self) -> usize {
        self.document.active_arc().map_or(0, |arc| arc.len())
    }

    /// Mutable access to the directed document.
    pub fn document_mut(&mut self) -> &mut ContentDocument {
        &mut self.document
    }

    /// Release the document.
    pub fn into_document(self) -> ContentDocument {
        self.document
    }

    /// Today's instruction for `persona`, wrapped for inclusion in a prompt.
    ///
    /// Returns an empty string when the arc, the day or the persona has no
    /// entry. Persona keys match exactly first, then case-insensitively.
    #[tracing::instrument(skip(self), fields(arc = %self.arc_id(), day = self.day()))]
    pub fn direction(&self, persona: &str) -> String {
        let Some(script) = self
            .document
            .active_arc()
            .and_then(|arc| arc.day(self.day()))
        else {
            debug!("No script for today");
            return String::new();
        };

        let instruction = script.get(persona).or_else(|| {
            script
                .iter()
                .find(|(key, _)| key.eq_ignore_ascii_case(persona))
                .map(|(_, text)| text)
        });

        match instruction.map(|text| text.trim()).filter(|text| !text.is_empty()) {
            Some(text) => {
                info!("Issuing plot instruction");
                format!(
                    "\n\n*** SPECIAL PLOT INSTRUCTION (STORY ARC {}, DAY {}) ***\n{}\n{}",
                    self.arc_id(),
                    self.day(),
                    text,
                    DIRECTION_RULE
                )
            }
            None => String::new(),
        }
    }

    /// Move to the next scripted day, or hold if there is none.
    ///
    /// The document is saved in either case.
    #[tracing::instrument(skip(self), fields(arc = %self.arc_id(), day = self.day()))]
    pub fn advance(&mut self) -> NewsroomResult<AdvanceOutcome> {
        let from = self.day();
        let next = from.saturating_add(1);
        let has_next = self
            .document
            .active_arc()
            .is_some_and(|arc| arc.has_day(next));

        let outcome = if has_next {
            let meta = self.document.meta_mut();
            meta.set_day(next);
            meta.set_status(ArcStatus::Active);
            info!(to = next, "Advanced story arc");
            AdvanceOutcome::Advanced { from, to: next }
        } else {
            self.document.meta_mut().set_status(ArcStatus::Complete);
            info!("Story arc complete, holding at final day");
            AdvanceOutcome::ArcComplete { day: from }
        };

        self.store.save(&self.document)?;
        Ok(outcome)
    }

    /// Save the document without touching the narrative position.
    pub fn persist(&self) -> NewsroomResult<()> {
        self.store.save(&self.document)
    }
}
