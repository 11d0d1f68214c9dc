//! Journal entry domain type and input validation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// Upper bound on entry length, counted in characters.
pub const MAX_ENTRY_CHARS: usize = 2000;

/// A persisted journal entry with its attached sentiment fields.
///
/// The sentiment columns are nullable because rows written before
/// classification existed carry no score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub id: i64,
    pub user_id: String,
    pub entry_text: String,
    pub mood_score: Option<i32>,
    pub primary_emotion: Option<String>,
    pub ai_analysis: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Check that `text` is a submittable journal entry.
///
/// # Errors
///
/// Returns [`ValidationError::EmptyEntry`] for empty or whitespace-only text
/// and [`ValidationError::EntryTooLong`] past [`MAX_ENTRY_CHARS`].
pub fn validate_entry_text(text: &str) -> Result<&str, ValidationError> {
    if text.trim().is_empty() {
        return Err(ValidationError::EmptyEntry);
    }
    let chars = text.chars().count();
    if chars > MAX_ENTRY_CHARS {
        return Err(ValidationError::EntryTooLong {
            max: MAX_ENTRY_CHARS,
            actual: chars,
        });
    }
    Ok(text)
}
