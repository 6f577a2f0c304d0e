use rand::Rng;

use hurricane_shared::result::PartialResult;

use crate::sampler::ZoneSampler;

/// Simulates `assigned` years in batches of at most `batch_size`.
///
/// Each batch reuses one per-year buffer: every zone adds its losses into it
/// and the buffer total is folded into the worker's running sum. Peak memory
/// is bounded by `batch_size` regardless of `assigned`.
pub fn run_worker<R: Rng + ?Sized>(
    worker: usize,
    samplers: &[ZoneSampler],
    assigned: u64,
    batch_size: usize,
    rng: &mut R,
) -> PartialResult {
    let batch_size = batch_size.max(1);
    let capacity = usize::try_from(assigned).unwrap_or(usize::MAX).min(batch_size);
    let mut years: Vec<f64> = Vec::with_capacity(capacity);

    let mut sum_of_losses = 0.0_f64;
    let mut remaining = assigned;
    while remaining > 0 {
        let batch = remaining.min(batch_size as u64) as usize;
        years.clear();
        years.resize(batch, 0.0);
        for sampler in samplers {
            sampler.accumulate(&mut years, rng);
        }
        sum_of_losses += years.iter().sum::<f64>();
        remaining -= batch as u64;
    }

    PartialResult {
        worker,
        sum_of_losses,
        samples_covered: assigned,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use hurricane_shared::config::ZoneParameters;
    use rand::SeedableRng;
    use rand_pcg::Pcg64;

    fn sampler(rate: f64) -> ZoneSampler {
        ZoneSampler::new(&ZoneParameters::new("Gulf", rate, 2.0, 1.0)).unwrap()
    }

    #[test]
    fn test_covers_all_assigned_samples() {
        let samplers = vec![sampler(1.0), sampler(1.0)];
        let mut rng = Pcg64::seed_from_u64(1);
        let result = run_worker(2, &samplers, 2_500, 1_000, &mut rng);
        assert_eq!(result.worker, 2);
        assert_eq!(result.samples_covered, 2_500);
        assert!(result.sum_of_losses > 0.0);
    }

    #[test]
    fn test_nothing_assigned() {
        let samplers = vec![sampler(1.0)];
        let mut rng = Pcg64::seed_from_u64(1);
        let result = run_worker(0, &samplers, 0, 1_000, &mut rng);
        assert_eq!(result.samples_covered, 0);
        assert_eq!(result.sum_of_losses, 0.0);
    }

    #[test]
    fn test_zero_rate_zones_sum_to_zero() {
        let samplers = vec![sampler(0.0), sampler(0.0)];
        let mut rng = Pcg64::seed_from_u64(1);
        let result = run_worker(0, &samplers, 10_000, 3_333, &mut rng);
        assert_eq!(result.sum_of_losses, 0.0);
    }

    /// For a single zone the draw sequence is independent of batch size.
    #[test]
    fn test_single_zone_batch_size_is_transparent() {
        let samplers = vec![sampler(1.0)];
        let whole = run_worker(0, &samplers, 50_000, 50_000, &mut Pcg64::seed_from_u64(5));
        for batch_size in [1, 7, 1_000, 49_999] {
            let batched = run_worker(0, &samplers, 50_000, batch_size, &mut Pcg64::seed_from_u64(5));
            assert_relative_eq!(whole.sum_of_losses, batched.sum_of_losses, max_relative = 1e-10);
        }
    }
}
