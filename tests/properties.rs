use cinematch::prelude::*;
use proptest::prelude::*;

const WORDS: &[&str] = &[
    "space", "heist", "romance", "paris", "alien", "robot", "detective", "crime", "comedy",
    "drama", "war", "ship", "love", "the", "of", "night", "city", "x",
];

fn text() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(WORDS), 0..8).prop_map(|w| w.join(" "))
}

fn catalog() -> impl Strategy<Value = Vec<(String, String, String)>> {
    prop::collection::vec((text(), text(), text()), 2..12)
}

fn build(rows: &[(String, String, String)], mode: SimilarityMode) -> Option<Engine> {
    let entries = rows
        .iter()
        .enumerate()
        .map(|(i, (t, g, d))| CatalogEntry::new(i as i64, t.clone(), g.clone(), d.clone()))
        .collect();
    let config = EngineConfig {
        similarity: mode,
        ..EngineConfig::default()
    };
    // Corpora made only of stop words are rejected at build time
    Engine::from_catalog(Catalog::new(entries), config).ok()
}

proptest! {
    #[test]
    fn similarity_is_symmetric(rows in catalog()) {
        if let Some(engine) = build(&rows, SimilarityMode::Precomputed) {
            for i in 0..engine.len() {
                for j in 0..engine.len() {
                    let a = engine.similarity(i, j).unwrap();
                    let b = engine.similarity(j, i).unwrap();
                    prop_assert_eq!(a, b);
                    prop_assert!((0.0..=1.0).contains(&a));
                }
            }
        }
    }

    #[test]
    fn never_recommends_itself(rows in catalog(), top_n in 0usize..15) {
        if let Some(engine) = build(&rows, SimilarityMode::Lazy) {
            for row in 0..engine.len() {
                let id = engine.entry(row).unwrap().id();
                let results = engine.recommend_row(row, top_n);
                prop_assert!(results.len() <= top_n);
                prop_assert_eq!(results.len(), top_n.min(engine.len() - 1));
                prop_assert!(results.iter().all(|r| r.target_id != id));
            }
        }
    }

    #[test]
    fn ranking_is_ordered_and_deterministic(rows in catalog(), top_n in 1usize..15) {
        if let Some(engine) = build(&rows, SimilarityMode::Precomputed) {
            for row in 0..engine.len() {
                let first = engine.recommend_row(row, top_n);
                let second = engine.recommend_row(row, top_n);
                prop_assert_eq!(&first, &second);

                // ids equal row indices here, so ties must ascend by id
                for pair in first.windows(2) {
                    prop_assert!(pair[0].score >= pair[1].score);
                    if pair[0].score == pair[1].score {
                        prop_assert!(pair[0].target_id < pair[1].target_id);
                    }
                }
            }
        }
    }

    #[test]
    fn modes_produce_identical_rankings(rows in catalog(), top_n in 1usize..15) {
        let dense = build(&rows, SimilarityMode::Precomputed);
        let lazy = build(&rows, SimilarityMode::Lazy);
        if let (Some(dense), Some(lazy)) = (dense, lazy) {
            for row in 0..dense.len() {
                prop_assert_eq!(dense.recommend_row(row, top_n), lazy.recommend_row(row, top_n));
            }
        }
    }
}
