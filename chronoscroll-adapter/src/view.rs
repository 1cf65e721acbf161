use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;

use chronoscroll::{Entry, EntryId, Order, Phase, RevealState, Timeline, format_month};

/// What the progress rail shows: the cursor month and how full the bar is.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RailView {
    pub label: String,
    /// Fraction in `[0, 1]`. Fills toward the newest end: eased progress in chronological order,
    /// its complement in reverse order.
    pub fill: f64,
}

impl RailView {
    pub fn from_timeline(t: &Timeline) -> Self {
        let progress = t.progress();
        let fill = match t.order() {
            Order::Chronological => progress,
            Order::Reverse => 1.0 - progress,
        };
        Self {
            label: t.cursor().month().to_string(),
            fill,
        }
    }

    /// CSS-style height, e.g. `37.5%`.
    pub fn fill_percent(&self) -> String {
        format!("{:.1}%", self.fill * 100.0)
    }
}

/// Class names for an entry card in a given state.
pub fn class_list(state: RevealState) -> &'static [&'static str] {
    match state {
        RevealState::Upcoming => &["entry"],
        RevealState::Revealed(Phase::Active) => &["entry", "revealed", "active"],
        RevealState::Revealed(Phase::Past) => &["entry", "revealed", "past"],
    }
}

/// Display text for one timeline card.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct EntryCard {
    pub id: EntryId,
    /// `Jan 2020 — Present · Berlin`
    pub meta: String,
    /// `Engineer · Acme`
    pub heading: String,
    pub summary: String,
    pub tags: Vec<String>,
    pub classes: Vec<&'static str>,
}

impl EntryCard {
    pub fn new(entry: &Entry, state: RevealState) -> Self {
        let mut meta = format!(
            "{} — {}",
            format_month(Some(entry.start)),
            format_month(entry.end)
        );
        if !entry.location.is_empty() {
            meta.push_str(" · ");
            meta.push_str(&entry.location);
        }

        let mut heading = entry.title.clone();
        if !entry.company.is_empty() {
            heading.push_str(" · ");
            heading.push_str(&entry.company);
        }

        Self {
            id: entry.id.clone(),
            meta,
            heading,
            summary: entry.summary.clone(),
            tags: entry.tags.clone(),
            classes: class_list(state).to_vec(),
        }
    }
}

/// Cards for the whole timeline in display order; used to (re)build after a reorder.
pub fn cards(t: &Timeline) -> Vec<EntryCard> {
    t.iter().map(|(e, s)| EntryCard::new(e, s)).collect()
}

/// The static card shown instead of a timeline when startup fails.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ErrorCard {
    pub title: String,
    pub message: String,
    pub hint: String,
}

impl ErrorCard {
    pub const TITLE: &'static str = "Couldn’t load your data";

    /// `paths` are the documents the page tried to load.
    pub fn new(error: impl fmt::Display, paths: &[&str]) -> Self {
        let listed: Vec<String> = paths.iter().map(|p| format!("/{p}")).collect();
        Self {
            title: Self::TITLE.to_string(),
            message: error.to_string(),
            hint: format!(
                "Check that {} exist, are valid JSON, and paths match.",
                listed.join(" and ")
            ),
        }
    }
}
