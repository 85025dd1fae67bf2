//! Activity domain model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An activity (meetup, outing, talk) as exchanged with the backend.
///
/// The `date` is a date-only string once the entity has passed through the
/// store; raw wire values may carry an ISO-8601 time suffix. Descriptive
/// fields are opaque pass-through data.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub id: String,
    pub title: String,
    pub date: String,
    pub description: String,
    pub category: String,
    pub city: String,
    pub venue: String,
}

impl Activity {
    /// Build an activity from a create payload, assigning a fresh v4 id.
    pub fn from_draft(draft: ActivityDraft) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: draft.title,
            date: normalize_date(&draft.date),
            description: draft.description,
            category: draft.category,
            city: draft.city,
            venue: draft.venue,
        }
    }

    /// Consume the activity with its date truncated to the date-only prefix.
    pub fn normalized(mut self) -> Self {
        self.date = normalize_date(&self.date);
        self
    }

    /// The date parsed for ordering. `None` for unparseable dates.
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").ok()
    }
}

/// Create payload: every activity field except the id, which the store
/// generates. Callers never supply an identifier for a create.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ActivityDraft {
    pub title: String,
    pub date: String,
    pub description: String,
    pub category: String,
    pub city: String,
    pub venue: String,
}

/// Strip an ISO-8601 time suffix, keeping the date-only prefix.
pub fn normalize_date(raw: &str) -> String {
    match raw.split_once('T') {
        Some((day, _)) => day.to_string(),
        None => raw.to_string(),
    }
}
