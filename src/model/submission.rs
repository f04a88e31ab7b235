use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use super::draft::Draft;

/// An immutable, stamped copy of a [`Draft`] accepted after validation.
///
/// Created only by a successful submit, destroyed only by an explicit
/// delete-by-id, never mutated in between.
///
/// Serialized in camelCase so snapshots written by the original web form
/// (the `submittedForms` localStorage slot) load unchanged, and every field
/// defaults when missing so older snapshots with fewer keys still
/// deserialize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub age: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub message: String,
    /// Unique within the store; monotonically derived from creation time
    /// (milliseconds since the epoch).
    #[serde(default)]
    pub id: i64,
    /// Human-readable local timestamp taken at submission.
    #[serde(default)]
    pub submitted_at: String,
}

impl Submission {
    /// Stamps a draft into an immutable submission.
    pub fn stamp(draft: &Draft, id: i64, submitted_at: DateTime<Local>) -> Self {
        Self {
            name: draft.name.clone(),
            email: draft.email.clone(),
            age: draft.age.clone(),
            country: draft.country.clone(),
            interests: draft.interests.clone(),
            message: draft.message.clone(),
            id,
            submitted_at: submitted_at.format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }
}
