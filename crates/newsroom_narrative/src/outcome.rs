//! Result of advancing an arc.

/// What happened when the arc was asked to move to the next day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum AdvanceOutcome {
    /// The next day was scripted and is now current
    #[display("advanced from day {} to day {}", from, to)]
    Advanced {
        /// Day before advancing
        from: u32,
        /// Day after advancing
        to: u32,
    },
    /// No further day is scripted; the arc holds
    #[display("arc complete, holding at day {}", day)]
    ArcComplete {
        /// Day the arc is holding at
        day: u32,
    },
}

impl AdvanceOutcome {
    /// Current day after the advance attempt.
    pub fn day(&self) -> u32 {
        match self {
            Self::Advanced { to, .. } => *to,
            Self::ArcComplete { day } => *day,
        }
    }

    /// Whether the arc has run out of scripted days.
    pub fn is_complete(&self) -> bool {
        matches!(self, Self::ArcComplete { .. })
    }
}
