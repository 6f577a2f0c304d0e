use std::time::Instant;

use hurricane_shared::config::{EngineConfig, SimulationRequest, ZoneParameters};
use hurricane_shared::error::SimulationError;
use hurricane_sim::run_simulation;
use tracing::{debug, error, info};

use crate::output;

pub fn run(
    zones: Vec<ZoneParameters>,
    num_samples: i64,
    workers: usize,
    batch_size: usize,
    seed: Option<u64>,
    verbose: bool,
) -> anyhow::Result<()> {
    // Negative counts are reported as zero, which validation rejects.
    let num_samples = u64::try_from(num_samples).unwrap_or(0);
    let request = SimulationRequest::new(zones, num_samples).inspect_err(log_rejection)?;
    let config = EngineConfig {
        batch_size,
        n_workers: (workers != 0).then_some(workers),
        seed,
    };
    config.validate().inspect_err(log_rejection)?;

    info!("Starting hurricane loss calculation...");
    debug!(
        samples = request.num_samples(),
        zones = request.zones().len(),
        batch_size = config.batch_size,
        workers = ?config.n_workers,
        seed = ?config.seed,
        "engine configuration"
    );

    let start = Instant::now();
    let estimate = run_simulation(&request, &config).inspect_err(|e| {
        error!("Error during hurricane loss calculation: {}", e);
    })?;
    let elapsed = start.elapsed();

    info!(
        workers = estimate.n_workers(),
        elapsed_ms = elapsed.as_millis() as u64,
        "Hurricane loss calculation complete."
    );

    output::print_result(&estimate, elapsed, verbose);
    Ok(())
}

fn log_rejection(err: &SimulationError) {
    match err {
        SimulationError::InvalidParameter { name, value } => {
            error!("Invalid input for {}: {}", name, value);
        }
        SimulationError::InvalidSampleCount { name, value } => {
            error!("Invalid input for {}: {}", name, value);
        }
        other => error!("Invalid input: {}", other),
    }
}
