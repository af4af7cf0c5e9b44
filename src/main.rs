use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use bkd_geo_index::bkdforest::BKDForest;
use bkd_geo_index::ingest::{read_points, read_queries};
use bkd_geo_index::SpatialIndex;

/// Build a BKD forest over a points file and run every query from a queries file against it.
#[derive(Parser)]
struct Cli {
    /// Path to the points file: one `id latitude longitude` record per line.
    points_file: PathBuf,

    /// Path to the queries file: one `minLat maxLat minLon maxLon` record per line.
    queries_file: PathBuf,

    /// Maximum number of points per leaf node.
    #[arg(default_value_t = 1024, value_parser = clap::value_parser!(usize).range(2..))]
    max_docs_per_leaf: usize,
}

const MAX_PRINTED_HITS: usize = 25;

fn main() -> ExitCode {
    colog::init();
    let cli = Cli::parse();

    let points = match read_points(&cli.points_file) {
        Ok(points) => points,
        Err(e) => {
            log::error!("{e}");
            return ExitCode::FAILURE;
        }
    };
    log::info!("loaded {} points from {}", points.len(), cli.points_file.display());

    let queries = match read_queries(&cli.queries_file) {
        Ok(queries) => queries,
        Err(e) => {
            log::error!("{e}");
            return ExitCode::FAILURE;
        }
    };
    log::info!("loaded {} queries from {}", queries.len(), cli.queries_file.display());

    let forest = match BKDForest::build(points, cli.max_docs_per_leaf) {
        Ok(forest) => forest,
        Err(e) => {
            log::error!("{e}");
            return ExitCode::FAILURE;
        }
    };
    log::info!(
        "built a forest of {} trees over {} points",
        forest.num_trees(),
        forest.num_points()
    );

    let mut total_hits = 0usize;
    let overall_start = Instant::now();

    for (i, query) in queries.iter().enumerate() {
        let start = Instant::now();
        let mut hits = Vec::new();
        forest.contains(query, &mut hits);
        let elapsed = start.elapsed();

        total_hits += hits.len();
        println!(
            "query {i}: upper=({}, {}) lower=({}, {}) -> {} hits in {:?}",
            query.upper.lon,
            query.upper.lat,
            query.lower.lon,
            query.lower.lat,
            hits.len(),
            elapsed
        );
        for id in hits.iter().take(MAX_PRINTED_HITS) {
            println!("  {id}");
        }
        if hits.len() > MAX_PRINTED_HITS {
            println!("  ... ({} more)", hits.len() - MAX_PRINTED_HITS);
        }
        log::debug!("query {i}: {} hits in {:?}", hits.len(), elapsed);
    }

    let overall_elapsed = overall_start.elapsed();
    let qps = if overall_elapsed.as_secs_f64() > 0.0 {
        queries.len() as f64 / overall_elapsed.as_secs_f64()
    } else {
        f64::INFINITY
    };
    log::info!(
        "ran {} queries in {:?} ({:.1} q/s), {} total hits",
        queries.len(),
        overall_elapsed,
        qps,
        total_hits
    );

    ExitCode::SUCCESS
}
