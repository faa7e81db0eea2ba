// Integration tests for cinematch
use cinematch::prelude::*;
use std::io::Write;
use std::path::PathBuf;

fn scenario_catalog() -> Catalog {
    Catalog::new(vec![
        CatalogEntry::new(1, "The Matrix", "Sci-Fi Action", "A hacker discovers reality is simulated"),
        CatalogEntry::new(2, "Matrix Reloaded", "Sci-Fi Action", "The hacker fights machines"),
        CatalogEntry::new(3, "Romance in Paris", "Romance", "Two lovers meet in Paris"),
    ])
}

fn sample_data() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data").join("movies.csv")
}

#[test]
fn test_scenario_from_csv_file() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("movies.csv");
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "movie_id,title,genres,description").unwrap();
    writeln!(file, "1,The Matrix,Sci-Fi Action,A hacker discovers reality is simulated").unwrap();
    writeln!(file, "2,Matrix Reloaded,Sci-Fi Action,The hacker fights machines").unwrap();
    writeln!(file, "3,Romance in Paris,Romance,Two lovers meet in Paris").unwrap();
    drop(file);

    let engine = Engine::build(CorpusSource::from_path(&path), EngineConfig::default()).unwrap();
    let results = engine.recommend("matrix", 2);

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].target_id, 2);
    assert_eq!(results[0].title, "Matrix Reloaded");
    assert_eq!(results[1].title, "Romance in Paris");
    assert!(results[0].score > results[1].score);
}

#[test]
fn test_exact_title_beats_earlier_substring() {
    let catalog = Catalog::new(vec![
        CatalogEntry::new(10, "The Matrix Revisited", "Documentary", "Making of the matrix"),
        CatalogEntry::new(11, "The Matrix", "Sci-Fi Action", "A hacker discovers reality is simulated"),
        CatalogEntry::new(12, "Matrix Reloaded", "Sci-Fi Action", "The hacker fights machines"),
    ]);
    let engine = Engine::from_catalog(catalog, EngineConfig::default()).unwrap();

    assert_eq!(engine.resolve("the matrix"), Some(1));
    let results = engine.recommend("The Matrix", 5);
    assert!(results.iter().all(|r| r.target_id != 11));
    assert!(results[0].explanation.contains("'The Matrix'"));
}

#[test]
fn test_unresolvable_and_degenerate_queries() {
    let engine = Engine::from_catalog(scenario_catalog(), EngineConfig::default()).unwrap();

    assert!(engine.recommend("nonexistent title xyz", 3).is_empty());
    for n in [0, 1, 5, 100] {
        assert!(engine.recommend("", n).is_empty());
        assert!(engine.recommend("   ", n).is_empty());
    }
    assert!(engine.recommend("matrix", 0).is_empty());
}

#[test]
fn test_zero_similarity_neighborhood() {
    let catalog = Catalog::new(vec![
        CatalogEntry::new(1, "Heat", "Crime", "A detective and a thief"),
        CatalogEntry::new(2, "", "", ""),
        CatalogEntry::new(3, "Amelie", "Romance", "Waitress in Paris"),
        CatalogEntry::new(4, "Ronin", "Crime", "Mercenaries and a briefcase"),
    ]);
    let engine = Engine::from_catalog(catalog, EngineConfig::default()).unwrap();

    // Amelie shares nothing with anyone: zero scores in row order
    let results = engine.recommend("amelie", 2);
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].target_id, 1);
    assert_eq!(results[1].target_id, 2);
    assert!(results.iter().all(|r| r.score == 0.0));
}

#[test]
fn test_modes_agree_on_sample_corpus() {
    let precomputed = Engine::build(
        CorpusSource::from_path(sample_data()),
        EngineConfig::default(),
    )
    .unwrap();
    let lazy = Engine::build(
        CorpusSource::from_path(sample_data()),
        EngineConfig {
            similarity: SimilarityMode::Lazy,
            parallel: false,
            ..EngineConfig::default()
        },
    )
    .unwrap();

    for title in precomputed.all_titles() {
        assert_eq!(precomputed.recommend(title, 5), lazy.recommend(title, 5));
    }
}

#[test]
fn test_sample_corpus_recommendations() {
    let engine = Engine::build(CorpusSource::from_path(sample_data()), EngineConfig::default()).unwrap();

    assert_eq!(engine.len(), 20);
    assert_eq!(engine.all_titles()[0], "The Matrix");

    let results = engine.recommend("alien", 3);
    let titles: Vec<&str> = results.iter().map(|r| r.title.as_str()).collect();
    assert!(titles.contains(&"Aliens"));

    let response = engine.query("Paris", 3);
    assert_eq!(response.resolved_title.as_deref(), Some("Midnight in Paris"));
    assert_eq!(response.results[0].title, "Amelie");
}

#[test]
fn test_construction_errors() {
    let missing = Engine::build(
        CorpusSource::Csv(PathBuf::from("/definitely/not/here.csv")),
        EngineConfig::default(),
    );
    assert!(missing.err().unwrap().is_load_error());

    let empty = Engine::build(CorpusSource::Records(Vec::new()), EngineConfig::default());
    assert!(empty.err().unwrap().is_empty_corpus());

    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("bad.csv");
    std::fs::write(&path, "id,name\n1,Heat\n").unwrap();
    let bad = Engine::build(CorpusSource::from_path(&path), EngineConfig::default());
    assert!(matches!(bad.err().unwrap(), Error::MissingColumn(_)));
}

#[test]
fn test_shared_engine_across_threads() {
    let engine = std::sync::Arc::new(
        Engine::from_catalog(scenario_catalog(), EngineConfig::default()).unwrap(),
    );
    let expected = engine.recommend("matrix", 2);

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let engine = engine.clone();
            std::thread::spawn(move || engine.recommend("matrix", 2))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn test_json_response_field_names() {
    let engine = Engine::from_catalog(scenario_catalog(), EngineConfig::default()).unwrap();
    let json = serde_json::to_value(engine.query("matrix", 1)).unwrap();

    let first = &json["results"][0];
    assert_eq!(first["movie_id"], 2);
    assert_eq!(first["genres"], "Sci-Fi Action");
    assert!(first["score"].as_f64().unwrap() > 0.0);
    assert_eq!(json["resolved_title"], "The Matrix");
}
