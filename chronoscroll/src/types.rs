/// Display order of the timeline, which also fixes the direction time moves while scrolling down.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Order {
    /// Oldest first: scrolling down moves time forward.
    #[cfg_attr(feature = "serde", serde(alias = "asc"))]
    Chronological,
    /// Newest first: scrolling down moves time backward.
    #[default]
    #[cfg_attr(feature = "serde", serde(alias = "desc"))]
    Reverse,
}

impl Order {
    pub fn toggled(self) -> Self {
        match self {
            Self::Chronological => Self::Reverse,
            Self::Reverse => Self::Chronological,
        }
    }

    pub fn is_chronological(self) -> bool {
        matches!(self, Self::Chronological)
    }
}

/// Sub-state of a revealed entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    /// The cursor lies within `[start, end)`; open-ended entries never end.
    Active,
    /// The cursor lies outside the entry's span.
    Past,
}

/// Per-entry reveal state.
///
/// `Upcoming -> Revealed(_)` happens at most once and is never undone. A revealed entry may move
/// between `Active` and `Past` freely.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RevealState {
    #[default]
    Upcoming,
    Revealed(Phase),
}

impl RevealState {
    pub fn is_revealed(self) -> bool {
        matches!(self, Self::Revealed(_))
    }

    pub fn is_active(self) -> bool {
        matches!(self, Self::Revealed(Phase::Active))
    }

    pub fn is_past(self) -> bool {
        matches!(self, Self::Revealed(Phase::Past))
    }
}
