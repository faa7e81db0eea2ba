//! # cinematch Core
//!
//! Core library for the cinematch recommender.
//!
//! This crate provides the data structures and numeric algorithms:
//!
//! - [`Catalog`] - Ordered movie entries loaded from CSV, JSON or memory
//! - [`Tokenizer`] - Lowercasing, stop-word aware tokenizer
//! - [`FeatureBuilder`] - TF-IDF weighting into a [`FeatureMatrix`] and [`Vocabulary`]
//! - [`SparseVector`] - Sorted sparse vectors with dot product and cosine
//! - [`SimilarityIndex`] - All-pairs cosine similarity, precomputed or lazy
//!
//! ## Example
//!
//! ```rust
//! use cinematch_core::{Catalog, CatalogEntry, FeatureBuilder, SimilarityIndex, SimilarityMode};
//!
//! let catalog = Catalog::new(vec![
//!     CatalogEntry::new(1, "Heat", "Crime", "A thief and a detective"),
//!     CatalogEntry::new(2, "Ronin", "Crime Action", "A thief for hire"),
//! ]);
//! let (features, _vocabulary) = FeatureBuilder::default().build(&catalog).unwrap();
//! let index = SimilarityIndex::build(features, SimilarityMode::Precomputed, true);
//!
//! assert!(index.similarity(0, 1).unwrap() > 0.0);
//! ```

pub mod catalog;
pub mod error;
pub mod features;
pub mod similarity;
pub mod sparse;
pub mod tokenizer;

pub use catalog::{Catalog, CatalogEntry, CorpusSource};
pub use error::{Error, Result};
pub use features::{FeatureBuilder, FeatureMatrix, Vocabulary};
pub use similarity::{SimilarityIndex, SimilarityMode};
pub use sparse::SparseVector;
pub use tokenizer::{Tokenizer, TokenizerConfig};
