//! TF-IDF feature space
//!
//! Every catalog entry becomes an L2-normalized sparse vector over a shared
//! vocabulary. Weight for (entry, term) is `count * idf` with the smoothed
//! inverse document frequency `ln((1 + n) / (1 + df)) + 1`.

use crate::sparse::SparseVector;
use crate::tokenizer::Tokenizer;
use crate::{Catalog, Error, Result};
use ahash::AHashMap;
use rayon::prelude::*;
use std::collections::BTreeSet;
use tracing::{debug, info};

/// Term to column mapping. Columns follow sorted term order.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    terms: Vec<String>,
    index: AHashMap<String, u32>,
}

impl Vocabulary {
    pub fn from_terms<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let sorted: BTreeSet<String> = terms.into_iter().map(Into::into).collect();
        let terms: Vec<String> = sorted.into_iter().collect();
        let index = terms
            .iter()
            .enumerate()
            .map(|(col, term)| (term.clone(), col as u32))
            .collect();
        Self { terms, index }
    }

    #[inline]
    pub fn column(&self, term: &str) -> Option<u32> {
        self.index.get(term).copied()
    }

    #[inline]
    pub fn term(&self, column: u32) -> Option<&str> {
        self.terms.get(column as usize).map(String::as_str)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }
}

/// One weighted row per catalog entry
#[derive(Debug, Clone)]
pub struct FeatureMatrix {
    rows: Vec<SparseVector>,
    idf: Vec<f32>,
}

impl FeatureMatrix {
    #[inline]
    pub fn row(&self, row: usize) -> Option<&SparseVector> {
        self.rows.get(row)
    }

    #[inline]
    pub fn rows(&self) -> &[SparseVector] {
        &self.rows
    }

    #[inline]
    #[must_use]
    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    #[must_use]
    pub fn n_columns(&self) -> usize {
        self.idf.len()
    }

    #[inline]
    pub fn idf(&self, column: u32) -> Option<f32> {
        self.idf.get(column as usize).copied()
    }

    /// Total stored (non-zero) cells
    pub fn nnz(&self) -> usize {
        self.rows.iter().map(SparseVector::nnz).sum()
    }
}

#[inline]
pub fn smooth_idf(n_docs: usize, df: usize) -> f32 {
    ((1.0 + n_docs as f64) / (1.0 + df as f64)).ln() as f32 + 1.0
}

#[derive(Debug, Clone, Default)]
pub struct FeatureBuilder {
    tokenizer: Tokenizer,
}

impl FeatureBuilder {
    pub fn new(tokenizer: Tokenizer) -> Self {
        Self { tokenizer }
    }

    pub fn build(&self, catalog: &Catalog) -> Result<(FeatureMatrix, Vocabulary)> {
        if catalog.is_empty() {
            return Err(Error::EmptyCorpus("catalog has no entries".to_string()));
        }

        let documents: Vec<Vec<String>> = catalog
            .entries()
            .par_iter()
            .map(|entry| self.tokenizer.tokenize(entry.combined_text()))
            .collect();

        let vocabulary = Vocabulary::from_terms(documents.iter().flatten().cloned());
        if vocabulary.is_empty() {
            return Err(Error::EmptyCorpus(
                "no terms left after tokenization and stop-word removal".to_string(),
            ));
        }
        debug!("Vocabulary built with {} terms", vocabulary.len());

        let counts: Vec<AHashMap<u32, u32>> = documents
            .par_iter()
            .map(|tokens| {
                let mut tf: AHashMap<u32, u32> = AHashMap::new();
                for token in tokens {
                    if let Some(col) = vocabulary.column(token) {
                        *tf.entry(col).or_insert(0) += 1;
                    }
                }
                tf
            })
            .collect();

        let mut df = vec![0usize; vocabulary.len()];
        for tf in &counts {
            for &col in tf.keys() {
                df[col as usize] += 1;
            }
        }

        let n_docs = catalog.len();
        let idf: Vec<f32> = df.iter().map(|&d| smooth_idf(n_docs, d)).collect();

        let rows: Vec<SparseVector> = counts
            .into_par_iter()
            .map(|tf| {
                let pairs = tf
                    .into_iter()
                    .map(|(col, count)| (col, count as f32 * idf[col as usize]))
                    .collect();
                let mut row = SparseVector::from_pairs(pairs);
                row.normalize();
                row
            })
            .collect();

        let matrix = FeatureMatrix { rows, idf };
        info!(
            "Feature matrix built: {} rows x {} terms, {} non-zero cells",
            matrix.n_rows(),
            matrix.n_columns(),
            matrix.nnz()
        );
        Ok((matrix, vocabulary))
    }
}
