//! Top-N ranking of similar entries
//!
//! Scores are ordered descending with ties broken by ascending row, and the
//! query row is never part of its own result.

use cinematch_core::{Catalog, SimilarityIndex, Vocabulary};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A recommended movie with its score and explanation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    #[serde(rename = "movie_id")]
    pub target_id: i64,
    pub title: String,
    #[serde(rename = "genres")]
    pub category_tags: String,
    pub description: String,
    pub score: f32,
    pub explanation: String,
    /// Vocabulary terms contributing most to the score
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub shared_terms: Vec<String>,
}

pub fn explanation_for(query_title: &str) -> String {
    format!(
        "Recommended because it is similar to '{}' in terms of genres and description.",
        query_title
    )
}

#[inline]
fn by_score_then_row(a: &(usize, f32), b: &(usize, f32)) -> Ordering {
    b.1.partial_cmp(&a.1)
        .unwrap_or(Ordering::Equal)
        .then_with(|| a.0.cmp(&b.0))
}

/// The `top_n` best `(row, score)` pairs from `scores`, skipping `exclude`
pub fn top_neighbors(scores: &[f32], exclude: usize, top_n: usize) -> Vec<(usize, f32)> {
    if top_n == 0 {
        return Vec::new();
    }

    let mut candidates: Vec<(usize, f32)> = scores
        .iter()
        .copied()
        .enumerate()
        .filter(|&(row, _)| row != exclude)
        .collect();

    if top_n < candidates.len() {
        candidates.select_nth_unstable_by(top_n - 1, by_score_then_row);
        candidates.truncate(top_n);
    }
    candidates.sort_by(by_score_then_row);
    candidates
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Ranker {
    explain_terms: usize,
}

impl Ranker {
    pub fn new(explain_terms: usize) -> Self {
        Self { explain_terms }
    }

    pub fn recommend(
        &self,
        catalog: &Catalog,
        index: &SimilarityIndex,
        vocabulary: &Vocabulary,
        row: usize,
        top_n: usize,
    ) -> Vec<Recommendation> {
        let (Some(query), Some(scores)) = (catalog.get(row), index.row_similarities(row)) else {
            return Vec::new();
        };
        let explanation = explanation_for(query.title());

        top_neighbors(&scores, row, top_n)
            .into_iter()
            .filter_map(|(target, score)| {
                let entry = catalog.get(target)?;
                Some(Recommendation {
                    target_id: entry.id(),
                    title: entry.title().to_string(),
                    category_tags: entry.category_tags().to_string(),
                    description: entry.description().to_string(),
                    score,
                    explanation: explanation.clone(),
                    shared_terms: self.shared_terms(index, vocabulary, row, target),
                })
            })
            .collect()
    }

    fn shared_terms(
        &self,
        index: &SimilarityIndex,
        vocabulary: &Vocabulary,
        row: usize,
        target: usize,
    ) -> Vec<String> {
        if self.explain_terms == 0 {
            return Vec::new();
        }
        let features = index.features();
        let (Some(a), Some(b)) = (features.row(row), features.row(target)) else {
            return Vec::new();
        };

        let mut contributions: Vec<(&str, f32)> = a
            .shared_contributions(b)
            .into_iter()
            .filter_map(|(col, weight)| vocabulary.term(col).map(|term| (term, weight)))
            .collect();
        contributions.sort_by(|x, y| {
            y.1.partial_cmp(&x.1)
                .unwrap_or(Ordering::Equal)
                .then_with(|| x.0.cmp(&y.0))
        });
        contributions
            .into_iter()
            .take(self.explain_terms)
            .map(|(term, _)| term.to_string())
            .collect()
    }
}
