//! Life timeline shown as a sequence of milestone cards.

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub year: String,
    pub title: String,
    pub description: String,
}

fn entry(year: &str, title: &str, description: &str) -> TimelineEntry {
    TimelineEntry {
        year: year.to_string(),
        title: title.to_string(),
        description: description.to_string(),
    }
}

/// Milestones of the demo profile, oldest first.
pub fn standard_timeline() -> Vec<TimelineEntry> {
    vec![
        entry(
            "1948",
            "You Were Born",
            "Born on March 15, 1948, in Boston, Massachusetts. Your parents were overjoyed!",
        ),
        entry(
            "1972",
            "Wedding Day",
            "You married Robert (Bob) on June 22, 1972, at St. Mary's Church in Boston. Your first dance was to 'Moon River.'",
        ),
        entry(
            "1975",
            "Sarah Was Born",
            "Your daughter Sarah was born! She brought so much joy to your life and later became a wonderful teacher.",
        ),
        entry(
            "1978",
            "Michael Was Born",
            "Your son Michael was born! He grew up to be an engineer and made you so proud.",
        ),
        entry(
            "1980",
            "Moved to Cambridge",
            "You and Bob moved into your beautiful white house at 42 Maple Street with the big oak tree in the front yard.",
        ),
        entry(
            "1980s-2000s",
            "Librarian Career",
            "You worked as a librarian at Cambridge Public Library for 30 wonderful years, helping people find books and organizing reading programs.",
        ),
        entry(
            "1990s-2000s",
            "Cape Cod Summers",
            "Your family vacations to Cape Cod every summer! Swimming, sandcastles, and clam chowder with the whole family.",
        ),
        entry(
            "2010s",
            "Grandchildren",
            "Emma, Jack, and Lily were born! Being a grandmother has been one of your greatest joys.",
        ),
        entry(
            "Present",
            "Your Garden",
            "You love spending time in your beautiful rose garden with your golden retriever Sunny by your side.",
        ),
    ]
}

/// Position within a timeline. Moving past either end stays put.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineCursor {
    index: usize,
}

impl TimelineCursor {
    pub fn index(self) -> usize {
        self.index
    }

    pub fn current(self, entries: &[TimelineEntry]) -> Option<&TimelineEntry> {
        entries.get(self.index)
    }

    pub fn next(self, entries: &[TimelineEntry]) -> Self {
        if self.index + 1 < entries.len() {
            Self {
                index: self.index + 1,
            }
        } else {
            self
        }
    }

    pub fn previous(self) -> Self {
        Self {
            index: self.index.saturating_sub(1),
        }
    }

    pub fn has_next(self, entries: &[TimelineEntry]) -> bool {
        self.index + 1 < entries.len()
    }

    pub fn has_previous(self) -> bool {
        self.index > 0
    }
}

pub fn timeline_router(entries: Arc<Vec<TimelineEntry>>) -> Router {
    Router::new()
        .route("/api/v1/timeline", get(timeline_handler))
        .with_state(entries)
}

async fn timeline_handler(
    State(entries): State<Arc<Vec<TimelineEntry>>>,
) -> Json<Vec<TimelineEntry>> {
    Json(entries.as_ref().clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_clamps_at_both_ends() {
        let entries = standard_timeline();
        let cursor = TimelineCursor::default();
        assert!(!cursor.has_previous());
        assert_eq!(cursor.previous(), cursor);
        assert_eq!(
            cursor.current(&entries).map(|entry| entry.year.as_str()),
            Some("1948")
        );

        let mut cursor = cursor;
        for _ in 0..20 {
            cursor = cursor.next(&entries);
        }
        assert_eq!(cursor.index(), entries.len() - 1);
        assert!(!cursor.has_next(&entries));
        assert_eq!(
            cursor.current(&entries).map(|entry| entry.title.as_str()),
            Some("Your Garden")
        );
        assert_eq!(cursor.previous().index(), entries.len() - 2);
    }

    #[test]
    fn empty_timeline_never_moves() {
        let cursor = TimelineCursor::default().next(&[]);
        assert_eq!(cursor.index(), 0);
        assert!(cursor.current(&[]).is_none());
    }

    #[test]
    fn standard_timeline_has_nine_milestones() {
        assert_eq!(standard_timeline().len(), 9);
    }
}
