pub mod partition;
pub mod rng;
pub mod runner;
pub mod sampler;
pub mod worker;

pub use runner::{compute_expected_loss, run_simulation};
