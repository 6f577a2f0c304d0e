/// One worker's contribution: the summed loss over its slice of years.
#[derive(Debug, Clone)]
pub struct PartialResult {
    pub worker: usize,
    pub sum_of_losses: f64,
    pub samples_covered: u64,
}

#[derive(Debug, Clone)]
pub struct LossEstimate {
    pub partials: Vec<PartialResult>,
    pub num_samples: u64,
    pub total_loss: f64,
}

impl LossEstimate {
    pub fn from_partials(partials: Vec<PartialResult>, num_samples: u64) -> Self {
        let total_loss = partials.iter().map(|p| p.sum_of_losses).sum();
        Self {
            partials,
            num_samples,
            total_loss,
        }
    }

    pub fn n_workers(&self) -> usize {
        self.partials.len()
    }

    pub fn samples_covered(&self) -> u64 {
        self.partials.iter().map(|p| p.samples_covered).sum()
    }

    /// Mean annual loss, divided by the requested sample count.
    pub fn expected_loss(&self) -> f64 {
        if self.num_samples == 0 {
            0.0
        } else {
            self.total_loss / self.num_samples as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_estimate_reduces_partials() {
        let partials = vec![
            PartialResult { worker: 0, sum_of_losses: 30.0, samples_covered: 3 },
            PartialResult { worker: 1, sum_of_losses: 20.0, samples_covered: 2 },
        ];
        let estimate = LossEstimate::from_partials(partials, 5);
        assert_eq!(estimate.n_workers(), 2);
        assert_eq!(estimate.samples_covered(), 5);
        assert_eq!(estimate.total_loss, 50.0);
        assert_eq!(estimate.expected_loss(), 10.0);
    }
}
