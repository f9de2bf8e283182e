use std::fmt;
use std::str::FromStr;

use medgloss_types::{ImageResult, TermRecord};

use crate::export::build_export_text;
use crate::preprocess::normalize_query;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SearchPhase {
    #[default]
    Idle,
    Searching { search_id: u64 },
    Displaying,
}

/// Editable field of the displayed record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Term,
    Pronunciation,
    Meaning,
    Definition,
}

impl FromStr for Field {
    type Err = SessionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "term" => Ok(Field::Term),
            "pronunciation" | "pron" => Ok(Field::Pronunciation),
            "meaning" => Ok(Field::Meaning),
            "definition" | "def" => Ok(Field::Definition),
            other => Err(SessionError::UnknownField(other.to_string())),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Term => "term",
            Field::Pronunciation => "pronunciation",
            Field::Meaning => "meaning",
            Field::Definition => "definition",
        };
        f.write_str(name)
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("Nothing to search for")]
    EmptyQuery,

    #[error("A search is already running")]
    Busy,

    #[error("Unknown field: {0}")]
    UnknownField(String),
}

/// A search the UI has committed to, to be handed to the backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    pub search_id: u64,
    pub query: String,
}

/// Presentation state for one user.
///
/// Results are only accepted for the search currently in flight, so a clear
/// or a failure never gets overwritten by a late response.
#[derive(Debug, Default)]
pub struct Session {
    query: String,
    record: TermRecord,
    image: ImageResult,
    phase: SearchPhase,
    last_search_id: u64,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> SearchPhase {
        self.phase
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn record(&self) -> &TermRecord {
        &self.record
    }

    pub fn image(&self) -> &ImageResult {
        &self.image
    }

    pub fn is_searching(&self) -> bool {
        matches!(self.phase(), SearchPhase::Searching { .. })
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Move to Searching for the current query.
    ///
    /// Empty queries and submissions during a running search leave the
    /// session untouched.
    pub fn begin_search(&mut self) -> Result<SearchTicket, SessionError> {
        if self.is_searching() {
            return Err(SessionError::Busy);
        }

        let query = normalize_query(&self.query).ok_or(SessionError::EmptyQuery)?;

        self.last_search_id += 1;
        let search_id = self.last_search_id;
        self.phase = SearchPhase::Searching { search_id };

        Ok(SearchTicket { search_id, query })
    }

    fn is_current(&self, search_id: u64) -> bool {
        self.phase() == SearchPhase::Searching { search_id }
    }

    /// Replace the displayed fields with a fresh record. The image from the
    /// previous lookup is dropped since it belongs to another term.
    pub fn apply_record(&mut self, search_id: u64, record: TermRecord) -> bool {
        if !self.is_current(search_id) {
            return false;
        }

        self.record = record;
        self.image = ImageResult::none();
        true
    }

    /// Finish the search. Displaying is reached whatever the image outcome.
    pub fn apply_image(&mut self, search_id: u64, image: ImageResult) -> bool {
        if !self.is_current(search_id) {
            return false;
        }

        self.image = image;
        self.phase = SearchPhase::Displaying;
        true
    }

    /// Abort the search. Displayed fields stay as they were.
    pub fn fail_search(&mut self, search_id: u64) -> bool {
        if !self.is_current(search_id) {
            return false;
        }

        self.phase = SearchPhase::Idle;
        true
    }

    pub fn edit(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Term => self.record.term = value,
            Field::Pronunciation => self.record.pronunciation = value,
            Field::Meaning => self.record.meaning = value,
            Field::Definition => self.record.definition = value,
        }
    }

    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Term => &self.record.term,
            Field::Pronunciation => &self.record.pronunciation,
            Field::Meaning => &self.record.meaning,
            Field::Definition => &self.record.definition,
        }
    }

    /// Reset everything, including the query. Any running search becomes stale.
    pub fn clear(&mut self) {
        self.query.clear();
        self.record = TermRecord::default();
        self.image = ImageResult::none();
        self.phase = SearchPhase::Idle;
    }

    /// Export text for whatever is displayed right now, edits included
    pub fn export_text(&self) -> String {
        build_export_text(&self.record, &self.image)
    }
}
