//! Time the dataset load and summarise the User-Item Matrix.
//!
//! Run with: cargo run --release --example benchmark_load -- data/facebook_movies

use data_loader::DataIndex;
use std::path::PathBuf;
use std::time::Instant;

fn main() {
    let data_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("data/facebook_movies"));

    println!("Loading dataset from {}...\n", data_dir.display());

    let start = Instant::now();
    let index = DataIndex::load_from_files(&data_dir).expect("Failed to load dataset");
    let elapsed = start.elapsed();

    let (users, movies, interactions) = index.counts();
    let density = interactions as f64 / (users.max(1) * movies.max(1)) as f64;

    // Profile sizes, sorted for the percentiles below
    let mut profile_sizes: Vec<usize> = index
        .all_user_ids()
        .into_iter()
        .filter_map(|user| index.interactions_of(user).map(|items| items.len()))
        .collect();
    profile_sizes.sort_unstable();

    let cold_movies = index
        .sorted_movie_ids()
        .into_iter()
        .filter(|&movie| index.users_of(movie).is_none())
        .count();

    println!("=== Load Complete ===");
    println!("Time taken: {:?}", elapsed);
    println!("Users: {}", users);
    println!("Catalog movies: {} ({} without interactions)", movies, cold_movies);
    println!("Interactions: {} (density {:.5})", interactions, density);
    if let (Some(min), Some(max)) = (profile_sizes.first(), profile_sizes.last()) {
        println!(
            "Profile size: min {}, median {}, max {}",
            min,
            profile_sizes[profile_sizes.len() / 2],
            max
        );
    }
    println!(
        "\nPerformance: {:.0} interactions/second",
        interactions as f64 / elapsed.as_secs_f64()
    );
}
