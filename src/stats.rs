//! Monte Carlo estimation of the percolation threshold.

use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

use crate::error::PercolationError;
use crate::grid::Percolation;

/// Multiplier for a 95% confidence interval under a normal sampling
/// distribution.
const CONFIDENCE_95: f64 = 1.96;

/// Percolation-threshold samples aggregated over independent random trials.
///
/// Each trial opens uniformly random sites on a fresh grid until it
/// percolates and records the fraction of open sites at that moment.
#[derive(Debug)]
pub struct PercolationStats {
    samples: Vec<f64>,
}

impl PercolationStats {
    /// Perform `trials` independent trials on n-by-n grids.
    ///
    /// Trials run in parallel on the current rayon pool. Each trial owns a
    /// fresh grid and its own RNG derived from `seed` and the trial index,
    /// so a fixed seed reproduces the same samples regardless of how the
    /// trials are scheduled.
    pub fn run(n: usize, trials: usize, seed: u64) -> Result<Self, PercolationError> {
        if n == 0 || trials == 0 {
            return Err(PercolationError::InvalidGridSize {
                n,
                trials: Some(trials),
            });
        }

        let samples = (0..trials)
            .into_par_iter()
            .map(|trial| {
                let mut rng = StdRng::seed_from_u64(seed.wrapping_add(trial as u64));
                let threshold = run_trial(n, &mut rng)?;
                debug!("trial {trial}: percolated at open fraction {threshold:.4}");
                Ok(threshold)
            })
            .collect::<Result<Vec<f64>, PercolationError>>()?;

        info!("{trials} trials on a {n}x{n} grid complete");
        Ok(PercolationStats { samples })
    }

    /// Sample mean of the percolation threshold.
    pub fn mean(&self) -> f64 {
        self.samples.iter().sum::<f64>() / self.samples.len() as f64
    }

    /// Sample standard deviation of the percolation threshold.
    ///
    /// Uses the n - 1 denominator; NaN for a single trial.
    pub fn stddev(&self) -> f64 {
        let mean = self.mean();
        let squared_deviations: f64 = self.samples.iter().map(|x| (x - mean).powi(2)).sum();
        (squared_deviations / (self.samples.len() - 1) as f64).sqrt()
    }

    /// Low endpoint of the 95% confidence interval.
    pub fn confidence_lo(&self) -> f64 {
        self.mean() - CONFIDENCE_95 * self.stddev() / (self.samples.len() as f64).sqrt()
    }

    /// High endpoint of the 95% confidence interval.
    pub fn confidence_hi(&self) -> f64 {
        self.mean() + CONFIDENCE_95 * self.stddev() / (self.samples.len() as f64).sqrt()
    }

    /// Number of trials performed.
    pub fn trials(&self) -> usize {
        self.samples.len()
    }

    /// Per-trial open fractions, in trial order.
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }
}

/// Open uniformly random sites on a fresh grid until it percolates,
/// returning the open fraction at that point.
///
/// Draws are uniform over `[1, n]` per coordinate and re-opening an open
/// site is a no-op, so the loop is bounded by the open-site count: a fully
/// open grid always percolates.
fn run_trial(n: usize, rng: &mut StdRng) -> Result<f64, PercolationError> {
    let mut grid = Percolation::new(n)?;
    let total_sites = n * n;

    while !grid.percolates() && grid.number_of_open_sites() < total_sites {
        let row = rng.gen_range(1..=n);
        let col = rng.gen_range(1..=n);
        grid.open(row, col)?;
    }

    Ok(grid.number_of_open_sites() as f64 / total_sites as f64)
}
