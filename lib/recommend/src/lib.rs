//! # cinematch Recommend
//!
//! Query side of the cinematch recommender: resolves a free-text title to a
//! catalog row and ranks every other entry by cosine similarity.
//!
//! ## Example
//!
//! ```rust
//! use cinematch_core::{Catalog, CatalogEntry};
//! use cinematch_recommend::{Engine, EngineConfig};
//!
//! let catalog = Catalog::new(vec![
//!     CatalogEntry::new(1, "The Matrix", "Sci-Fi Action", "A hacker discovers reality is simulated"),
//!     CatalogEntry::new(2, "Matrix Reloaded", "Sci-Fi Action", "The hacker fights machines"),
//!     CatalogEntry::new(3, "Romance in Paris", "Romance", "Two lovers meet in Paris"),
//! ]);
//! let engine = Engine::from_catalog(catalog, EngineConfig::default()).unwrap();
//!
//! let results = engine.recommend("the matrix", 2);
//! assert_eq!(results[0].title, "Matrix Reloaded");
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Catalog   │────>│  Features   │────>│ Similarity  │
//! │  (loader)   │     │  (TF-IDF)   │     │   Index     │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!                                                │
//! ┌─────────────┐     ┌─────────────┐            │
//! │   query     │────>│  Resolver   │────> row ──┤
//! └─────────────┘     └─────────────┘            │
//!                                         ┌─────────────┐
//!                                         │   Ranker    │
//!                                         │ (+ explain) │
//!                                         └─────────────┘
//! ```

pub mod engine;
pub mod explain;
pub mod rank;
pub mod resolver;

pub use engine::{Engine, EngineConfig, DEFAULT_EXPLAIN_TERMS, DEFAULT_TOP_N};
pub use explain::{RecommendResponse, RecommendationStats};
pub use rank::{explanation_for, top_neighbors, Ranker, Recommendation};
pub use resolver::TitleResolver;
