use clap::Parser;
use cinematch::{
    CorpusSource, Engine, EngineConfig, SimilarityMode, TokenizerConfig, DEFAULT_EXPLAIN_TERMS,
    DEFAULT_TOP_N,
};
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

const EMPTY_QUERY_MESSAGE: &str = "Please enter a movie title to get recommendations.";
const NO_MATCH_MESSAGE: &str =
    "No close matches were found for that title. Try a different or simpler movie name.";

/// Recommend movies similar to a title
#[derive(Parser, Debug)]
#[command(name = "cinematch")]
#[command(about = "Content-based movie recommendations", long_about = None)]
struct Args {
    /// Movie title to search for (words are joined with spaces)
    query: Vec<String>,

    /// Path to the corpus (.csv or .json)
    #[arg(short, long, default_value = "./data/movies.csv")]
    data: PathBuf,

    /// Number of recommendations; zero or negative gives none
    #[arg(short = 'n', long, default_value_t = DEFAULT_TOP_N as i64, allow_hyphen_values = true)]
    top_n: i64,

    /// Similarity index mode: precomputed or lazy
    #[arg(long, default_value = "precomputed")]
    similarity: SimilarityMode,

    /// Build the similarity index on a single thread
    #[arg(long)]
    sequential: bool,

    /// Shared terms listed per recommendation
    #[arg(long, default_value_t = DEFAULT_EXPLAIN_TERMS)]
    explain_terms: usize,

    /// Minimum token length kept by the tokenizer
    #[arg(long, default_value_t = 2)]
    min_token_len: usize,

    /// Print the response as JSON
    #[arg(long)]
    json: bool,

    /// Print all catalog titles and exit
    #[arg(long)]
    list_titles: bool,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn clamp_top_n(top_n: i64) -> usize {
    usize::try_from(top_n).unwrap_or(0)
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting cinematch v{}", env!("CARGO_PKG_VERSION"));
    info!("Corpus: {:?}", args.data);

    let config = EngineConfig {
        similarity: args.similarity,
        tokenizer: TokenizerConfig {
            min_token_len: args.min_token_len,
            ..TokenizerConfig::default()
        },
        parallel: !args.sequential,
        explain_terms: args.explain_terms,
    };
    let engine = Engine::build(CorpusSource::from_path(&args.data), config)?;

    if args.list_titles {
        for title in engine.all_titles() {
            println!("{}", title);
        }
        return Ok(());
    }

    let query = args.query.join(" ");
    if query.trim().is_empty() {
        println!("{}", EMPTY_QUERY_MESSAGE);
        return Ok(());
    }

    let response = engine.query(&query, clamp_top_n(args.top_n));
    if args.json {
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    match &response.resolved_title {
        Some(title) if !response.results.is_empty() => {
            println!("Movies similar to '{}':", title);
            for (rank, rec) in response.results.iter().enumerate() {
                println!();
                println!("{}. {} [{}] (score {:.3})", rank + 1, rec.title, rec.category_tags, rec.score);
                if !rec.description.is_empty() {
                    println!("   {}", rec.description);
                }
                println!("   {}", rec.explanation);
                if !rec.shared_terms.is_empty() {
                    println!("   Shared terms: {}", rec.shared_terms.join(", "));
                }
            }
        }
        _ => println!("{}", NO_MATCH_MESSAGE),
    }

    Ok(())
}
