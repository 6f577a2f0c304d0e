use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use rand_pcg::Pcg64;
use rayon::prelude::*;

use hurricane_shared::config::{EngineConfig, SimulationRequest, ZoneParameters};
use hurricane_shared::error::SimulationError;
use hurricane_shared::result::{LossEstimate, PartialResult};

use crate::partition::partition_samples;
use crate::rng::{entropy_seed, worker_rng};
use crate::sampler::ZoneSampler;
use crate::worker::run_worker;

/// Runs the full Monte Carlo estimate for a validated request.
///
/// Work is partitioned across a fresh rayon pool, one partition per worker,
/// each with its own `Pcg64` stream. The pool is joined before reduction and
/// any worker failure aborts the whole computation.
pub fn run_simulation(
    request: &SimulationRequest,
    config: &EngineConfig,
) -> Result<LossEstimate, SimulationError> {
    config.validate()?;
    let samplers = request
        .zones()
        .iter()
        .map(ZoneSampler::new)
        .collect::<Result<Vec<_>, _>>()?;

    let num_samples = request.num_samples();
    let n_workers = worker_count(config.n_workers, num_samples);
    let partitions = partition_samples(num_samples, n_workers);
    let base_seed = config.seed.unwrap_or_else(entropy_seed);

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(n_workers)
        .build()
        .map_err(|e| SimulationError::WorkerPool(e.to_string()))?;

    let partials = pool.install(|| {
        dispatch(&partitions, base_seed, |worker, assigned, rng| {
            run_worker(worker, &samplers, assigned, config.batch_size, rng)
        })
    })?;

    Ok(LossEstimate::from_partials(partials, num_samples))
}

/// Mean annual loss over `num_samples` simulated years with default engine
/// settings. Inputs are validated before any worker is started.
pub fn compute_expected_loss(
    zones: &[ZoneParameters],
    num_samples: u64,
) -> Result<f64, SimulationError> {
    let request = SimulationRequest::new(zones.to_vec(), num_samples)?;
    Ok(run_simulation(&request, &EngineConfig::default())?.expected_loss())
}

/// Requested (or available) workers, never more than there are samples.
fn worker_count(requested: Option<usize>, num_samples: u64) -> usize {
    let available = requested
        .filter(|&n| n > 0)
        .unwrap_or_else(rayon::current_num_threads);
    let cap = usize::try_from(num_samples).unwrap_or(usize::MAX);
    available.min(cap).max(1)
}

/// Runs `work` once per partition in the current pool and collects the
/// partial results in partition order. A panicking worker is reported as
/// `WorkerFailure` for its partition.
pub(crate) fn dispatch<F>(
    partitions: &[u64],
    base_seed: u64,
    work: F,
) -> Result<Vec<PartialResult>, SimulationError>
where
    F: Fn(usize, u64, &mut Pcg64) -> PartialResult + Sync,
{
    partitions
        .par_iter()
        .enumerate()
        .map(|(worker, &assigned)| {
            panic::catch_unwind(AssertUnwindSafe(|| {
                let mut rng = worker_rng(base_seed, worker);
                work(worker, assigned, &mut rng)
            }))
            .map_err(|payload| SimulationError::WorkerFailure {
                worker,
                samples: assigned,
                reason: panic_message(payload.as_ref()),
            })
        })
        .collect()
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        (*msg).to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "worker panicked".to_string()
    }
}
