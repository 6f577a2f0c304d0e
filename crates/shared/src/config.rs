use crate::error::{check_input, check_samples, SimulationError};

// Baseline engine parameters
pub const DEFAULT_BATCH_SIZE: usize = 1_000_000;
pub const DEFAULT_SAMPLES: u64 = 1_000;
pub const REFERENCE_RATE: f64 = 1.0;
pub const REFERENCE_MEAN: f64 = 2.0;
pub const REFERENCE_STDDEV: f64 = 1.0;

/// Frequency and severity of one geographic zone.
///
/// `rate` is the Poisson λ (expected landfalls per year); `mean` and `stddev`
/// parameterise the lognormal severity in log-space, so a single event has
/// E[X] = exp(mean + stddev²/2).
#[derive(Debug, Clone, PartialEq)]
pub struct ZoneParameters {
    pub name: String,
    pub rate: f64,
    pub mean: f64,
    pub stddev: f64,
}

impl ZoneParameters {
    pub fn new(name: impl Into<String>, rate: f64, mean: f64, stddev: f64) -> Self {
        Self {
            name: name.into(),
            rate,
            mean,
            stddev,
        }
    }

    /// Theoretical mean annual loss of the compound Poisson–lognormal process.
    pub fn expected_annual_loss(&self) -> f64 {
        self.rate * (self.mean + 0.5 * self.stddev * self.stddev).exp()
    }

    pub fn validate(&self) -> Result<(), SimulationError> {
        check_input(self.rate, &format!("{} landfall rate", self.name))?;
        check_input(self.mean, &format!("{} mean", self.name))?;
        check_input(self.stddev, &format!("{} stddev", self.name))?;
        Ok(())
    }
}

/// A validated description of one computation.
#[derive(Debug, Clone)]
pub struct SimulationRequest {
    zones: Vec<ZoneParameters>,
    num_samples: u64,
}

impl SimulationRequest {
    pub fn new(zones: Vec<ZoneParameters>, num_samples: u64) -> Result<Self, SimulationError> {
        for zone in &zones {
            zone.validate()?;
        }
        check_samples(num_samples, "Number of Monte Carlo samples")?;
        Ok(Self { zones, num_samples })
    }

    #[inline]
    pub fn zones(&self) -> &[ZoneParameters] {
        &self.zones
    }

    #[inline]
    pub fn num_samples(&self) -> u64 {
        self.num_samples
    }

    pub fn expected_annual_loss(&self) -> f64 {
        self.zones.iter().map(ZoneParameters::expected_annual_loss).sum()
    }
}

#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Simulated years per vectorised sampling call.
    pub batch_size: usize,
    /// Parallel workers; `None` uses every available processing unit.
    pub n_workers: Option<usize>,
    /// Base seed for the per-worker streams; `None` draws a fresh one.
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            n_workers: None,
            seed: None,
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> Result<(), SimulationError> {
        if self.batch_size == 0 {
            return Err(SimulationError::InvalidBatchSize);
        }
        Ok(())
    }
}

/// The Florida / Gulf reference scenario.
pub fn default_zones() -> Vec<ZoneParameters> {
    vec![
        ZoneParameters::new("Florida", REFERENCE_RATE, REFERENCE_MEAN, REFERENCE_STDDEV),
        ZoneParameters::new("Gulf", REFERENCE_RATE, REFERENCE_MEAN, REFERENCE_STDDEV),
    ]
}
