//! Pairwise cosine similarity over the sparse feature matrix
//!
//! Scores are accumulated through a column-major posting index, so a row
//! only touches entries sharing at least one term with it. Contributions are
//! always added in ascending column order, which makes `sim(i, j)` and
//! `sim(j, i)` bit-identical.

use crate::features::FeatureMatrix;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::time::Instant;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SimilarityMode {
    /// Dense N x N matrix built once at startup
    #[default]
    Precomputed,
    /// Each row computed on demand per query
    Lazy,
}

impl std::str::FromStr for SimilarityMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "precomputed" | "dense" => Ok(SimilarityMode::Precomputed),
            "lazy" => Ok(SimilarityMode::Lazy),
            other => Err(format!("unknown similarity mode: {}", other)),
        }
    }
}

pub struct SimilarityIndex {
    features: FeatureMatrix,
    norms: Vec<f32>,
    // column -> (row, weight), rows ascending
    postings: Vec<Vec<(u32, f32)>>,
    dense: Option<Vec<f32>>,
    mode: SimilarityMode,
}

impl SimilarityIndex {
    pub fn build(features: FeatureMatrix, mode: SimilarityMode, parallel: bool) -> Self {
        let start = Instant::now();
        let norms: Vec<f32> = features.rows().iter().map(|r| r.norm()).collect();

        let mut postings: Vec<Vec<(u32, f32)>> = vec![Vec::new(); features.n_columns()];
        for (row, vector) in features.rows().iter().enumerate() {
            for (col, weight) in vector.iter() {
                postings[col as usize].push((row as u32, weight));
            }
        }

        let mut index = Self {
            features,
            norms,
            postings,
            dense: None,
            mode,
        };

        if mode == SimilarityMode::Precomputed {
            let n = index.len();
            let mut dense = vec![0.0f32; n * n];
            if parallel {
                dense
                    .par_chunks_mut(n.max(1))
                    .enumerate()
                    .for_each(|(row, out)| index.fill_row(row, out));
            } else {
                dense
                    .chunks_mut(n.max(1))
                    .enumerate()
                    .for_each(|(row, out)| index.fill_row(row, out));
            }
            index.dense = Some(dense);
        }

        info!(
            "Similarity index ready: {} rows, mode {:?}, built in {:?}",
            index.len(),
            mode,
            start.elapsed()
        );
        index
    }

    /// Cosine scores of `row` against every row; `out.len()` must equal `len()`
    fn fill_row(&self, row: usize, out: &mut [f32]) {
        out.iter_mut().for_each(|s| *s = 0.0);
        let norm_row = self.norms[row];
        if norm_row == 0.0 {
            return;
        }

        for (col, weight) in self.features.rows()[row].iter() {
            for &(other, other_weight) in &self.postings[col as usize] {
                out[other as usize] += weight * other_weight;
            }
        }

        for (other, score) in out.iter_mut().enumerate() {
            let norm_other = self.norms[other];
            *score = if norm_other == 0.0 {
                0.0
            } else {
                (*score / (norm_row * norm_other)).clamp(0.0, 1.0)
            };
        }
        out[row] = 1.0;
    }

    /// Scores of `row` against all rows (including itself), indexed by row
    pub fn row_similarities(&self, row: usize) -> Option<Cow<'_, [f32]>> {
        let n = self.len();
        if row >= n {
            return None;
        }
        match &self.dense {
            Some(dense) => Some(Cow::Borrowed(&dense[row * n..(row + 1) * n])),
            None => {
                let mut out = vec![0.0f32; n];
                self.fill_row(row, &mut out);
                Some(Cow::Owned(out))
            }
        }
    }

    pub fn similarity(&self, i: usize, j: usize) -> Option<f32> {
        let n = self.len();
        if i >= n || j >= n {
            return None;
        }
        match &self.dense {
            Some(dense) => Some(dense[i * n + j]),
            None => self.row_similarities(i).map(|row| row[j]),
        }
    }

    #[inline]
    pub fn features(&self) -> &FeatureMatrix {
        &self.features
    }

    #[inline]
    pub fn mode(&self) -> SimilarityMode {
        self.mode
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.features.n_rows()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
