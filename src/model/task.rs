use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::util::unicode;

/// Maximum title length, counted in grapheme clusters.
pub const TITLE_MAX: usize = 30;

/// A single to-do item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Identity within a list; assigned once, never reused in a session
    pub id: u64,
    /// Display text, at most `TITLE_MAX` graphemes
    pub title: String,
    /// Completion flag
    pub completed: bool,
    /// Fixed at construction
    pub created_at: DateTime<Utc>,
    /// Refreshed on every mutation of this task
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Create a new incomplete task. The title is clipped to `TITLE_MAX`.
    pub fn new(id: u64, title: &str) -> Self {
        let now = Utc::now();
        Task {
            id,
            title: clip_title(title),
            completed: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Refresh `updated_at` after a mutation.
    pub(crate) fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// Trim surrounding whitespace and truncate to `TITLE_MAX` graphemes.
pub fn clip_title(raw: &str) -> String {
    unicode::truncate_graphemes(raw.trim(), TITLE_MAX)
}
