//! Free-text title lookup
//!
//! Exact case-insensitive match first, then the first title containing the
//! query as a substring. The lowest row wins within each phase, and an
//! exact title is never shadowed by an earlier substring hit.

use cinematch_core::Catalog;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct TitleResolver {
    lowered: Vec<String>,
}

impl TitleResolver {
    pub fn new(catalog: &Catalog) -> Self {
        Self {
            lowered: catalog.iter().map(|e| e.title().to_lowercase()).collect(),
        }
    }

    #[inline]
    pub fn normalize(query: &str) -> String {
        query.trim().to_lowercase()
    }

    /// Row index for `query`, or `None` for an empty or unknown title
    pub fn resolve(&self, query: &str) -> Option<usize> {
        let needle = Self::normalize(query);
        if needle.is_empty() {
            return None;
        }

        if let Some(row) = self.lowered.iter().position(|t| *t == needle) {
            return Some(row);
        }

        let row = self.lowered.iter().position(|t| t.contains(needle.as_str()));
        if let Some(row) = row {
            debug!("No exact title for {:?}, using partial match at row {}", needle, row);
        }
        row
    }
}
