use rand::Rng;
use rand_distr::{Distribution, LogNormal, Poisson};

use hurricane_shared::config::ZoneParameters;
use hurricane_shared::error::SimulationError;

/// Per-zone annual loss sampler: Poisson landfall count, then one lognormal
/// severity per landfall, summed per year.
#[derive(Debug, Clone)]
pub struct ZoneSampler {
    /// `None` when the zone's rate is zero; such a zone never has a landfall.
    frequency: Option<Poisson<f64>>,
    severity: LogNormal<f64>,
}

impl ZoneSampler {
    pub fn new(zone: &ZoneParameters) -> Result<Self, SimulationError> {
        let frequency = if zone.rate > 0.0 {
            let poisson = Poisson::new(zone.rate).map_err(|e| SimulationError::InvalidDistribution {
                zone: zone.name.clone(),
                distribution: "Poisson",
                reason: e.to_string(),
            })?;
            Some(poisson)
        } else {
            None
        };
        let severity =
            LogNormal::new(zone.mean, zone.stddev).map_err(|e| SimulationError::InvalidDistribution {
                zone: zone.name.clone(),
                distribution: "LogNormal",
                reason: e.to_string(),
            })?;
        Ok(Self {
            frequency,
            severity,
        })
    }

    #[inline]
    pub fn sample_year<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        let Some(frequency) = &self.frequency else {
            return 0.0;
        };
        let landfalls = frequency.sample(rng) as u64;
        if landfalls == 0 {
            return 0.0;
        }
        (0..landfalls).map(|_| self.severity.sample(rng)).sum()
    }

    /// Adds this zone's loss for each simulated year into `years`, so that
    /// several zones can share one per-year buffer.
    pub fn accumulate<R: Rng + ?Sized>(&self, years: &mut [f64], rng: &mut R) {
        if self.frequency.is_none() {
            return;
        }
        for year in years.iter_mut() {
            *year += self.sample_year(rng);
        }
    }

    pub fn sample_zone_losses<R: Rng + ?Sized>(&self, batch_size: usize, rng: &mut R) -> Vec<f64> {
        let mut losses = vec![0.0; batch_size];
        self.accumulate(&mut losses, rng);
        losses
    }
}

/// One aggregate loss per simulated year for a single zone.
pub fn sample_zone_losses<R: Rng + ?Sized>(
    zone: &ZoneParameters,
    batch_size: usize,
    rng: &mut R,
) -> Result<Vec<f64>, SimulationError> {
    Ok(ZoneSampler::new(zone)?.sample_zone_losses(batch_size, rng))
}
