//! Long-lived recommendation engine
//!
//! Built once from a corpus, then read-only. All query methods take `&self`
//! and the engine is `Send + Sync`, so a single instance can serve any number
//! of concurrent callers behind an `Arc`.

use crate::explain::RecommendResponse;
use crate::rank::{Ranker, Recommendation};
use crate::resolver::TitleResolver;
use cinematch_core::{
    Catalog, CatalogEntry, CorpusSource, Error, FeatureBuilder, Result, SimilarityIndex,
    SimilarityMode, Tokenizer, TokenizerConfig, Vocabulary,
};
use std::time::Instant;
use tracing::{debug, info};

pub const DEFAULT_TOP_N: usize = 5;
pub const DEFAULT_EXPLAIN_TERMS: usize = 3;

/// Configuration for building an engine
#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub similarity: SimilarityMode,
    pub tokenizer: TokenizerConfig,
    /// Build precomputed similarity rows with rayon
    pub parallel: bool,
    /// Shared terms attached to each recommendation, 0 disables
    pub explain_terms: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            similarity: SimilarityMode::Precomputed,
            tokenizer: TokenizerConfig::default(),
            parallel: true,
            explain_terms: DEFAULT_EXPLAIN_TERMS,
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> Result<()> {
        if self.tokenizer.min_token_len == 0 {
            return Err(Error::InvalidConfig(
                "min_token_len must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

pub struct Engine {
    config: EngineConfig,
    catalog: Catalog,
    vocabulary: Vocabulary,
    index: SimilarityIndex,
    resolver: TitleResolver,
    ranker: Ranker,
}

impl Engine {
    /// Load the corpus and build features and the similarity index
    pub fn build(source: CorpusSource, config: EngineConfig) -> Result<Self> {
        let catalog = Catalog::load(source)?;
        Self::from_catalog(catalog, config)
    }

    pub fn from_catalog(catalog: Catalog, config: EngineConfig) -> Result<Self> {
        config.validate()?;
        let start = Instant::now();

        let builder = FeatureBuilder::new(Tokenizer::new(config.tokenizer));
        let (features, vocabulary) = builder.build(&catalog)?;
        let index = SimilarityIndex::build(features, config.similarity, config.parallel);
        let resolver = TitleResolver::new(&catalog);
        let ranker = Ranker::new(config.explain_terms);

        info!(
            "Engine built: {} entries, {} terms in {:?}",
            catalog.len(),
            vocabulary.len(),
            start.elapsed()
        );

        Ok(Self {
            config,
            catalog,
            vocabulary,
            index,
            resolver,
            ranker,
        })
    }

    /// Up to `top_n` entries most similar to the title matching `query`.
    /// Empty for an empty or unknown query and for `top_n == 0`.
    pub fn recommend(&self, query: &str, top_n: usize) -> Vec<Recommendation> {
        match self.resolve(query) {
            Some(row) => self.recommend_row(row, top_n),
            None => {
                debug!("No title matches {:?}", query);
                Vec::new()
            }
        }
    }

    pub fn recommend_row(&self, row: usize, top_n: usize) -> Vec<Recommendation> {
        self.ranker
            .recommend(&self.catalog, &self.index, &self.vocabulary, row, top_n)
    }

    /// Resolve and rank, wrapped with the resolved title and stats
    pub fn query(&self, query: &str, top_n: usize) -> RecommendResponse {
        let row = self.resolve(query);
        let resolved_title = row
            .and_then(|r| self.catalog.get(r))
            .map(|e| e.title().to_string());
        let results = row
            .map(|r| self.recommend_row(r, top_n))
            .unwrap_or_default();
        let candidates = if row.is_some() { self.len() - 1 } else { 0 };
        RecommendResponse::new(query, resolved_title, results, candidates)
    }

    #[inline]
    pub fn resolve(&self, query: &str) -> Option<usize> {
        self.resolver.resolve(query)
    }

    /// Titles in catalog order
    pub fn all_titles(&self) -> Vec<&str> {
        self.catalog.titles()
    }

    #[inline]
    pub fn entry(&self, row: usize) -> Option<&CatalogEntry> {
        self.catalog.get(row)
    }

    #[inline]
    pub fn similarity(&self, i: usize, j: usize) -> Option<f32> {
        self.index.similarity(i, j)
    }

    #[inline]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[inline]
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    #[inline]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.catalog.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.catalog.is_empty()
    }
}
