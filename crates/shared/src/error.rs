#[derive(Debug, thiserror::Error)]
pub enum SimulationError {
    #[error("{name} should be a positive number")]
    InvalidParameter { name: String, value: f64 },
    #[error("{name} should be a positive number")]
    InvalidSampleCount { name: String, value: u64 },
    #[error("Batch size should be a positive number")]
    InvalidBatchSize,
    #[error("Invalid {distribution} parameters for zone {zone}: {reason}")]
    InvalidDistribution {
        zone: String,
        distribution: &'static str,
        reason: String,
    },
    #[error("Worker pool creation failed: {0}")]
    WorkerPool(String),
    #[error("Worker {worker} failed on a partition of {samples} samples: {reason}")]
    WorkerFailure {
        worker: usize,
        samples: u64,
        reason: String,
    },
}

/// Rejects negative or non-finite inputs. Zero is a valid value.
pub fn check_input(value: f64, name: &str) -> Result<(), SimulationError> {
    if value < 0.0 || !value.is_finite() {
        return Err(SimulationError::InvalidParameter {
            name: name.to_string(),
            value,
        });
    }
    Ok(())
}

/// Rejects sample counts below one.
pub fn check_samples(value: u64, name: &str) -> Result<(), SimulationError> {
    if value < 1 {
        return Err(SimulationError::InvalidSampleCount {
            name: name.to_string(),
            value,
        });
    }
    Ok(())
}
