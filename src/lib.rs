//! # cinematch
//!
//! Content-based movie recommendations from plain text metadata.
//!
//! Titles, genres and descriptions are combined into a TF-IDF feature space,
//! every pair of movies is scored by cosine similarity, and a free-text
//! title query returns the most similar movies with a short explanation.
//!
//! ## Quick Start
//!
//! ### From the command line
//!
//! ```bash
//! cinematch --data data/movies.csv "the matrix"
//! cinematch --data data/movies.csv --top-n 3 --json inception
//! ```
//!
//! ### As a Library
//!
//! ```rust,no_run
//! use cinematch::prelude::*;
//!
//! let engine = Engine::build(
//!     CorpusSource::from_path("data/movies.csv"),
//!     EngineConfig::default(),
//! ).unwrap();
//!
//! for rec in engine.recommend("the matrix", 5) {
//!     println!("{} ({:.3}) - {}", rec.title, rec.score, rec.explanation);
//! }
//! ```
//!
//! ## Crate Structure
//!
//! - `cinematch-core` - Catalog loading, tokenizer, TF-IDF features, similarity index
//! - `cinematch-recommend` - Title resolver, ranker, explanations, engine

// Re-export core types
pub use cinematch_core::{
    Catalog, CatalogEntry, CorpusSource,
    FeatureBuilder, FeatureMatrix, Vocabulary,
    SimilarityIndex, SimilarityMode, SparseVector,
    Tokenizer, TokenizerConfig,
    Error, Result,
};

// Re-export query side
pub use cinematch_recommend::{
    Engine, EngineConfig, Ranker, Recommendation,
    RecommendResponse, RecommendationStats, TitleResolver,
    DEFAULT_EXPLAIN_TERMS, DEFAULT_TOP_N,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        Catalog, CatalogEntry, CorpusSource,
        Engine, EngineConfig, Recommendation, RecommendResponse,
        SimilarityMode, TokenizerConfig,
        Error, Result,
    };
}
