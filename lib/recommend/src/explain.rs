//! Output structures for a recommendation query
//!
//! Wraps ranked results with the resolved query and summary statistics so
//! callers can render or serialize them directly.

use crate::rank::Recommendation;
use ahash::AHashMap;
use serde::Serialize;

/// Response for a single recommendation query
#[derive(Debug, Clone, Serialize)]
pub struct RecommendResponse {
    /// Query as typed by the caller
    pub query: String,
    /// Catalog title the query resolved to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolved_title: Option<String>,
    pub results: Vec<Recommendation>,
    pub stats: RecommendationStats,
}

impl RecommendResponse {
    pub fn new(
        query: impl Into<String>,
        resolved_title: Option<String>,
        results: Vec<Recommendation>,
        candidates_count: usize,
    ) -> Self {
        let stats = RecommendationStats::compute(&results, candidates_count);
        Self {
            query: query.into(),
            resolved_title,
            results,
            stats,
        }
    }

    #[inline]
    pub fn is_resolved(&self) -> bool {
        self.resolved_title.is_some()
    }
}

/// Summary statistics for a recommendation query
#[derive(Debug, Clone, Serialize)]
pub struct RecommendationStats {
    /// Number of entries the query was ranked against
    pub candidates_count: usize,
    pub results_count: usize,
    pub avg_score: f32,
    pub best_score: f32,
    /// Shared term appearing in the most results
    pub top_shared_term: Option<String>,
}

impl RecommendationStats {
    pub fn compute(results: &[Recommendation], candidates_count: usize) -> Self {
        if results.is_empty() {
            return Self {
                candidates_count,
                results_count: 0,
                avg_score: 0.0,
                best_score: 0.0,
                top_shared_term: None,
            };
        }

        let avg_score = results.iter().map(|r| r.score).sum::<f32>() / results.len() as f32;
        let best_score = results[0].score; // Results are sorted

        let mut counts: AHashMap<&str, usize> = AHashMap::new();
        for term in results.iter().flat_map(|r| r.shared_terms.iter()) {
            *counts.entry(term.as_str()).or_insert(0) += 1;
        }
        let top_shared_term = counts
            .into_iter()
            .max_by(|a, b| a.1.cmp(&b.1).then_with(|| b.0.cmp(&a.0)))
            .map(|(term, _)| term.to_string());

        Self {
            candidates_count,
            results_count: results.len(),
            avg_score,
            best_score,
            top_shared_term,
        }
    }
}
