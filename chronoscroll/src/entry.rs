use alloc::collections::BTreeSet;
use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;

use crate::{YearMonth, parse_month};

/// Stable identity of an entry. Reveal memory follows ids across reorders and reloads.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct EntryId(String);

impl EntryId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EntryId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for EntryId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// An experience record as it appears in the source document, before validation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RawEntry {
    pub id: Option<String>,
    pub title: String,
    pub company: Option<String>,
    pub location: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
    pub summary: Option<String>,
    pub tags: Vec<String>,
}

/// A validated timeline entry.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Entry {
    pub id: EntryId,
    pub title: String,
    pub company: String,
    pub location: String,
    pub start: YearMonth,
    /// `None` means ongoing.
    pub end: Option<YearMonth>,
    pub summary: String,
    pub tags: Vec<String>,
}

impl Entry {
    /// Creates a minimal entry; the descriptive fields start empty.
    pub fn new(id: impl Into<EntryId>, start: YearMonth, end: Option<YearMonth>) -> Self {
        Self {
            id: id.into(),
            title: String::new(),
            company: String::new(),
            location: String::new(),
            start,
            end,
            summary: String::new(),
            tags: Vec::new(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_company(mut self, company: impl Into<String>) -> Self {
        self.company = company.into();
        self
    }

    /// Validates a raw record loaded at position `index`.
    ///
    /// Returns `None` when `start` is missing or unparsable. A missing `id` falls back to the
    /// load index; an unparsable `end` reads as ongoing.
    ///
    /// The index fallback can equal another record's explicit id. [`prepare_entries`] assigns
    /// fallback ids that are unique within the document.
    pub fn from_raw(raw: RawEntry, index: usize) -> Option<Self> {
        let start = raw.start.as_deref().and_then(parse_month)?;
        let end = raw.end.as_deref().and_then(parse_month);
        let id = match raw.id {
            Some(id) => EntryId(id),
            None => EntryId(index.to_string()),
        };
        Some(Self {
            id,
            title: raw.title,
            company: raw.company.unwrap_or_default(),
            location: raw.location.unwrap_or_default(),
            start,
            end,
            summary: raw.summary.unwrap_or_default(),
            tags: raw.tags,
        })
    }

    pub fn is_ongoing(&self) -> bool {
        self.end.is_none()
    }

    /// The end used for range computation: open entries run until `today`.
    pub fn end_or(&self, today: YearMonth) -> YearMonth {
        self.end.unwrap_or(today)
    }
}

/// Validates a whole document, silently dropping records without a usable start.
///
/// Records without an `id` get their load index, suffixed (`"3~1"`, `"3~2"`, ...) when that
/// string is already another record's id. Explicit ids are kept as written.
pub fn prepare_entries(raws: impl IntoIterator<Item = RawEntry>) -> Vec<Entry> {
    let raws: Vec<RawEntry> = raws.into_iter().collect();
    let mut taken: BTreeSet<String> = raws.iter().filter_map(|r| r.id.clone()).collect();

    let mut out = Vec::new();
    for (index, mut raw) in raws.into_iter().enumerate() {
        if raw.id.is_none() {
            raw.id = Some(fallback_id(index, &mut taken));
        }
        match Entry::from_raw(raw, index) {
            Some(entry) => out.push(entry),
            None => {
                cdebug!(index, "prepare_entries: dropping entry without a start date");
            }
        }
    }
    out
}

fn fallback_id(index: usize, taken: &mut BTreeSet<String>) -> String {
    let mut id = index.to_string();
    let mut n = 0;
    while taken.contains(&id) {
        n += 1;
        id = format!("{index}~{n}");
    }
    taken.insert(id.clone());
    id
}
