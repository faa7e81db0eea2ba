// Construction and query benchmarks over synthetic corpora
use cinematch::{Catalog, CatalogEntry, Engine, EngineConfig, SimilarityMode};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::prelude::*;
use rand::rngs::StdRng;

const GENRES: &[&str] = &[
    "Action", "Comedy", "Drama", "Horror", "Romance", "Sci-Fi", "Thriller", "Animation",
];

fn generate_word(rng: &mut StdRng) -> String {
    let len = rng.random_range(3..9);
    (0..len)
        .map(|_| (b'a' + rng.random_range(0..26u8)) as char)
        .collect()
}

fn generate_catalog(size: usize, vocabulary: usize) -> Catalog {
    let mut rng = StdRng::seed_from_u64(42);
    let words: Vec<String> = (0..vocabulary).map(|_| generate_word(&mut rng)).collect();

    let entries = (0..size)
        .map(|i| {
            let genres = (0..2)
                .map(|_| GENRES[rng.random_range(0..GENRES.len())])
                .collect::<Vec<_>>()
                .join(" ");
            let description = (0..20)
                .map(|_| words[rng.random_range(0..words.len())].as_str())
                .collect::<Vec<_>>()
                .join(" ");
            CatalogEntry::new(i as i64, format!("Movie {}", i), genres, description)
        })
        .collect();
    Catalog::new(entries)
}

fn benchmark_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");
    group.sample_size(10);

    for size in [100, 1000, 3000].iter() {
        let catalog = generate_catalog(*size, 2000);
        for mode in [SimilarityMode::Precomputed, SimilarityMode::Lazy] {
            let id = BenchmarkId::new(format!("{:?}", mode).to_lowercase(), size);
            group.bench_with_input(id, &catalog, |b, catalog| {
                b.iter(|| {
                    let config = EngineConfig {
                        similarity: mode,
                        ..EngineConfig::default()
                    };
                    black_box(Engine::from_catalog(catalog.clone(), config).unwrap())
                });
            });
        }
    }

    group.finish();
}

fn benchmark_recommend(c: &mut Criterion) {
    let mut group = c.benchmark_group("recommend");
    let catalog = generate_catalog(3000, 2000);

    for mode in [SimilarityMode::Precomputed, SimilarityMode::Lazy] {
        let config = EngineConfig {
            similarity: mode,
            ..EngineConfig::default()
        };
        let engine = Engine::from_catalog(catalog.clone(), config).unwrap();

        group.bench_function(format!("{:?}", mode).to_lowercase(), |b| {
            b.iter(|| black_box(engine.recommend(black_box("movie 1500"), 10)));
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_build, benchmark_recommend);
criterion_main!(benches);
