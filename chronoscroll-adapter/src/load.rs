use std::future::Future;

use chronoscroll::{Entry, RawEntry, YearMonth, prepare_entries};
use serde_json::Value;

use crate::{Controller, ControllerOptions, ErrorCard};

pub const EXPERIENCE_JSON: &str = "data/experience.json";
pub const SKILLS_JSON: &str = "data/skills.json";

/// A group in the skills grid. Passed through to the presentation layer untouched.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SkillGroup {
    pub title: String,
    pub items: Vec<String>,
}

/// Why the injected fetcher could not produce a document body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FetchError {
    /// The server answered with a non-success status.
    Status(u16),
    /// The request never completed.
    Transport(String),
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Failed to load {path}: {status}")]
    Fetch { path: String, status: u16 },

    #[error("Failed to load {path}: {message}")]
    Transport { path: String, message: String },

    #[error("Invalid JSON in {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

impl LoadError {
    fn from_fetch(path: &str, err: FetchError) -> Self {
        match err {
            FetchError::Status(status) => Self::Fetch {
                path: path.to_string(),
                status,
            },
            FetchError::Transport(message) => Self::Transport {
                path: path.to_string(),
                message,
            },
        }
    }

    pub fn path(&self) -> &str {
        match self {
            Self::Fetch { path, .. } | Self::Transport { path, .. } | Self::Json { path, .. } => {
                path
            }
        }
    }

    /// The static card to show instead of the timeline.
    pub fn error_card(&self) -> ErrorCard {
        ErrorCard::new(self, &[EXPERIENCE_JSON, SKILLS_JSON])
    }
}

/// Both startup documents, parsed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Documents {
    /// Entries with a usable start date, in document order.
    pub entries: Vec<Entry>,
    pub skills: Vec<SkillGroup>,
}

impl Documents {
    /// Parses the experience and skills documents. A `null` document reads as an empty list.
    ///
    /// The experience document is read record by record, so one malformed record never costs
    /// its siblings. Fields of the wrong type read as missing.
    pub fn from_json(experience: &str, skills: &str) -> Result<Self, LoadError> {
        let records: Option<Vec<Value>> =
            serde_json::from_str(experience).map_err(|source| LoadError::Json {
                path: EXPERIENCE_JSON.to_string(),
                source,
            })?;
        let skills: Option<Vec<SkillGroup>> =
            serde_json::from_str(skills).map_err(|source| LoadError::Json {
                path: SKILLS_JSON.to_string(),
                source,
            })?;

        let raws: Vec<RawEntry> = records
            .unwrap_or_default()
            .into_iter()
            .map(raw_entry)
            .collect();
        adebug!(records = raws.len(), "Documents::from_json: parsed experience");
        Ok(Self {
            entries: prepare_entries(raws),
            skills: skills.unwrap_or_default(),
        })
    }
}

/// Reads one experience record without ever failing.
///
/// - Anything that is not an object (e.g. `null`) becomes an empty record, which
///   [`prepare_entries`] drops for lacking a start while keeping its load index.
/// - `id` may be a string or a number.
/// - `start`, `end` and the text fields count only when they are strings.
/// - `tags` keeps the string elements of an array; anything else is no tags.
fn raw_entry(record: Value) -> RawEntry {
    let Value::Object(mut fields) = record else {
        return RawEntry::default();
    };
    let id = match fields.remove("id") {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    };
    let mut text = |key: &str| match fields.remove(key) {
        Some(Value::String(s)) => Some(s),
        _ => None,
    };
    let title = text("title").unwrap_or_default();
    let company = text("company");
    let location = text("location");
    let start = text("start");
    let end = text("end");
    let summary = text("summary");

    let tags = match fields.remove("tags") {
        Some(Value::Array(items)) => items
            .into_iter()
            .filter_map(|t| match t {
                Value::String(s) => Some(s),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    };

    RawEntry {
        id,
        title,
        company,
        location,
        start,
        end,
        summary,
        tags,
    }
}

/// Fetches both documents together and waits for both.
///
/// `fetch` receives a document path and resolves to its body. Either failure aborts the load;
/// there is no partial result.
pub async fn load_documents<F, Fut>(fetch: F) -> Result<Documents, LoadError>
where
    F: Fn(String) -> Fut,
    Fut: Future<Output = Result<String, FetchError>>,
{
    let (experience, skills) = tokio::join!(
        fetch(EXPERIENCE_JSON.to_string()),
        fetch(SKILLS_JSON.to_string())
    );
    let experience = experience.map_err(|e| LoadError::from_fetch(EXPERIENCE_JSON, e))?;
    let skills = skills.map_err(|e| LoadError::from_fetch(SKILLS_JSON, e))?;
    Documents::from_json(&experience, &skills)
}

/// The outcome of page startup.
#[derive(Debug)]
pub enum Boot {
    /// The controller has not been evaluated yet: every entry is `Upcoming` and the rail sits at
    /// progress 0. Send the first geometry through [`Controller::on_resize`] before drawing.
    Ready {
        controller: Controller,
        skills: Vec<SkillGroup>,
    },
    /// Startup failed; show this card and never build a timeline.
    Failed { error: LoadError, card: ErrorCard },
}

/// Loads both documents and builds a [`Controller`] over the entries.
pub async fn boot<F, Fut>(fetch: F, today: YearMonth, options: ControllerOptions) -> Boot
where
    F: Fn(String) -> Fut,
    Fut: Future<Output = Result<String, FetchError>>,
{
    match load_documents(fetch).await {
        Ok(docs) => Boot::Ready {
            controller: Controller::new(docs.entries, today, options),
            skills: docs.skills,
        },
        Err(error) => {
            awarn!(path = error.path(), %error, "boot: startup aborted");
            let card = error.error_card();
            Boot::Failed { error, card }
        }
    }
}
