use anyhow::Result;
use clap::Parser;

use percolate::stats::PercolationStats;

/// percolate - Monte Carlo estimation of the percolation threshold
///
/// Repeatedly opens uniformly random sites on an n-by-n grid until an open
/// path connects the top row to the bottom row, then reports the mean,
/// standard deviation, and 95% confidence interval of the open-site
/// fraction at the moment of percolation across all trials.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Grid side length (the grid has n*n sites)
    n: usize,

    /// Number of independent trials
    trials: usize,

    /// Seed for the random site sequence; a fixed seed reproduces a run
    #[clap(long = "seed", default_value = "42")]
    seed: u64,

    /// Number of threads for parallel trials (0 = one per core)
    #[clap(short = 't', long = "threads", default_value = "0")]
    threads: usize,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(args.threads)
            .build_global()?;
    }

    let stats = PercolationStats::run(args.n, args.trials, args.seed)?;

    println!("mean                    = {:.6}", stats.mean());
    println!("stddev                  = {:.6}", stats.stddev());
    println!(
        "95% confidence interval = [{:.6}, {:.6}]",
        stats.confidence_lo(),
        stats.confidence_hi()
    );

    Ok(())
}
