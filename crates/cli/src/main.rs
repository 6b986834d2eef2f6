use anyhow::{Context, Result, anyhow, bail};
use clap::{Parser, Subcommand};
use colored::Colorize;
use data_loader::{DataIndex, MovieLink, UserId};
use properties::{PropertyStore, PropertyTable};
use recommender::{EngineConfig, MovieRecommendation, RecommendationEngine};
use similarity::SimilarityMode;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::warn;

/// lod-recs - Linked-data movie recommendations
#[derive(Parser)]
#[command(name = "lod-recs")]
#[command(about = "Top-N movie recommendations from implicit feedback and the DBpedia graph", long_about = None)]
struct Cli {
    /// Directory holding trainingset.tsv and mappingLinkedData.tsv
    #[arg(short, long, default_value = "data/facebook_movies")]
    data_dir: PathBuf,

    /// Optional TOML file with engine settings
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// SPARQL endpoint queried when properties are rebuilt
    #[arg(long, global = true)]
    endpoint: Option<String>,

    /// Similarity matrix file, overriding the per-mode default
    #[arg(long, global = true)]
    similarity_file: Option<PathBuf>,

    /// Property cache file, overriding the default
    #[arg(long, global = true)]
    properties_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Get movie recommendations for a user
    Recommend {
        /// User ID to get recommendations for
        #[arg(long)]
        user_id: UserId,

        /// Neighbour count k
        #[arg(long)]
        neighbours: Option<usize>,

        /// Number of recommendations to return
        #[arg(long)]
        limit: Option<usize>,

        /// Similarity mode: jaccard or cosine
        #[arg(long)]
        mode: Option<SimilarityMode>,

        /// Recompute the similarity matrix instead of loading it
        #[arg(long)]
        rebuild_similarity: bool,

        /// Query the knowledge graph instead of loading the property cache
        #[arg(long)]
        rebuild_properties: bool,

        /// Explain each recommendation
        #[arg(long)]
        explain: bool,
    },

    /// Rebuild and persist the similarity matrix
    Similarity {
        /// Similarity mode: jaccard or cosine
        #[arg(long)]
        mode: Option<SimilarityMode>,

        /// Query the knowledge graph instead of loading the property cache
        #[arg(long)]
        rebuild_properties: bool,
    },

    /// Show a user's profile
    User {
        /// User ID to display
        #[arg(long)]
        user_id: UserId,
    },

    /// Time recommendation requests for random users
    Benchmark {
        /// Number of requests to make
        #[arg(long, default_value = "100")]
        requests: usize,
    },
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let mut config = load_config(cli.config.as_deref())?;
    if let Some(endpoint) = cli.endpoint {
        config = config.with_sparql_endpoint(endpoint);
    }
    if let Some(path) = cli.similarity_file {
        config = config.with_similarity_path(path);
    }
    if let Some(path) = cli.properties_file {
        config = config.with_properties_path(path);
    }

    println!("Loading dataset from {}...", cli.data_dir.display());
    let start = Instant::now();
    let data_index = Arc::new(
        DataIndex::load_from_files(&cli.data_dir).context("Failed to load dataset")?,
    );
    let (users, movies, interactions) = data_index.counts();
    println!(
        "{} Loaded {} users, {} movies, {} interactions in {:?}",
        "✓".green(),
        users,
        movies,
        interactions,
        start.elapsed()
    );

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Recommend {
            user_id,
            neighbours,
            limit,
            mode,
            rebuild_similarity,
            rebuild_properties,
            explain,
        } => {
            // Flags can only switch behaviour on, never off what the file set
            let rebuild_similarity = config.rebuild_similarity || rebuild_similarity;
            let rebuild_properties = config.rebuild_properties || rebuild_properties;
            let explain = config.explain || explain;
            let mut config = config
                .with_rebuild_similarity(rebuild_similarity)
                .with_rebuild_properties(rebuild_properties)
                .with_explain(explain);
            if let Some(k) = neighbours {
                config = config.with_neighbours(k);
            }
            if let Some(n) = limit {
                config = config.with_top_n(n);
            }
            if let Some(mode) = mode {
                config = config.with_mode(mode);
            }
            handle_recommend(data_index, config, user_id)?
        }
        Commands::Similarity {
            mode,
            rebuild_properties,
        } => {
            let mode = mode.unwrap_or(config.mode);
            let rebuild_properties = config.rebuild_properties || rebuild_properties;
            let config = config
                .with_mode(mode)
                .with_rebuild_similarity(true)
                .with_rebuild_properties(rebuild_properties)
                .with_explain(false);
            handle_similarity(data_index, config)?
        }
        Commands::User { user_id } => handle_user(&data_index, &config, user_id)?,
        Commands::Benchmark { requests } => handle_benchmark(data_index, config, requests)?,
    }

    Ok(())
}

/// Read the config file if one was given, defaults otherwise
fn load_config(path: Option<&Path>) -> Result<EngineConfig> {
    match path {
        Some(path) => EngineConfig::from_toml_file(path)
            .with_context(|| format!("Failed to load config {}", path.display())),
        None => Ok(EngineConfig::default()),
    }
}

/// Handle the 'recommend' command
fn handle_recommend(data_index: Arc<DataIndex>, config: EngineConfig, user_id: UserId) -> Result<()> {
    if data_index.interactions_of(user_id).is_none() {
        println!(
            "{} User {} has no interactions; every score will be 0",
            "!".yellow(),
            user_id
        );
    }

    let engine = RecommendationEngine::new(data_index, config)?;
    let profile = engine.profile(user_id);

    println!(
        "{}",
        format!("Profile of user {} ({} movies):", user_id, profile.len())
            .bold()
            .blue()
    );
    for movie_id in profile.items() {
        println!("  - {} [{}]", engine.title(movie_id), movie_id);
    }

    let recommendations = engine.recommend_for(&profile);
    print_recommendations(&recommendations, engine.config().explain);
    Ok(())
}

/// Handle the 'similarity' command
fn handle_similarity(data_index: Arc<DataIndex>, config: EngineConfig) -> Result<()> {
    let path = config.similarity_file();
    let start = Instant::now();
    let engine = RecommendationEngine::new(data_index, config)?;
    let matrix = engine.matrix();

    println!(
        "{} Built {} similarity matrix ({}x{}) in {:?}",
        "✓".green(),
        engine.config().mode,
        matrix.len(),
        matrix.len(),
        start.elapsed()
    );
    println!("  Written to {}", path.display());
    Ok(())
}

/// Handle the 'user' command
fn handle_user(data_index: &DataIndex, config: &EngineConfig, user_id: UserId) -> Result<()> {
    let items = data_index
        .interactions_of(user_id)
        .ok_or_else(|| anyhow!("User {} not found", user_id))?;

    let catalog: Vec<MovieLink> = data_index.movies().cloned().collect();
    let path = config.properties_file();
    let names = PropertyTable::load(&path, &catalog).unwrap_or_else(|e| {
        warn!("No property cache at {:?} ({}), using resource names", path, e);
        PropertyTable::from_rows(&catalog, std::iter::empty())
    });

    println!("{}", format!("User ID: {}", user_id).bold().blue());
    println!("{}Interactions: {}", "• ".cyan(), items.len());
    println!("Profile:");
    for &movie_id in items {
        let uri = data_index.get_movie_uri(movie_id).unwrap_or("?");
        println!("  - {} [{}] {}", names.get_name(movie_id), movie_id, uri.dimmed());
    }
    Ok(())
}

/// Handle the 'benchmark' command
fn handle_benchmark(data_index: Arc<DataIndex>, config: EngineConfig, requests: usize) -> Result<()> {
    let user_ids = data_index.all_user_ids();
    if user_ids.is_empty() || requests == 0 {
        bail!("Nothing to benchmark: {} users, {} requests", user_ids.len(), requests);
    }

    let engine = RecommendationEngine::new(data_index, config)?;

    // Pick random users with at least one interaction
    let sample: Vec<UserId> = (0..requests)
        .map(|_| user_ids[rand::random::<u32>() as usize % user_ids.len()])
        .collect();

    let mut timings: Vec<Duration> = Vec::with_capacity(requests);
    for user in sample {
        let start = Instant::now();
        engine.recommend(user);
        timings.push(start.elapsed());
    }

    let total_time: Duration = timings.iter().sum();
    let avg_latency = total_time / timings.len() as u32;
    timings.sort();
    let percentile = |p: f32| timings[((timings.len() as f32 * p) as usize).min(timings.len() - 1)];
    let throughput = requests as f32 / total_time.as_secs_f32();

    println!("Benchmark results:");
    println!("Total time: {:?}", total_time);
    println!("Average latency: {:?}", avg_latency);
    println!("P50 latency: {:?}", percentile(0.50));
    println!("P95 latency: {:?}", percentile(0.95));
    println!("P99 latency: {:?}", percentile(0.99));
    println!("Throughput: {:.2} requests/second", throughput);

    Ok(())
}

/// Helper function to format and print recommendations
fn print_recommendations(recommendations: &[MovieRecommendation], explain: bool) {
    println!("{}", "Movie Recommendations:".bold().blue());
    if recommendations.is_empty() {
        println!("  (nothing left to recommend)");
    }

    for (i, rec) in recommendations.iter().enumerate() {
        println!(
            "{}. {} [{}] - Score: {:.4}",
            (i + 1).to_string().green(),
            rec.title,
            rec.movie_id,
            rec.score
        );
        if explain {
            match &rec.explanation {
                Some(sentence) => println!("   {}", sentence.italic()),
                None => println!("   {}", "No shared characteristics with the profile".dimmed()),
            }
        }
    }
}
