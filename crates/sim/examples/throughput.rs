use hurricane_shared::config::{default_zones, EngineConfig, SimulationRequest};
use hurricane_sim::run_simulation;
use std::time::Instant;

fn main() {
    let num_samples = 5_000_000;
    let request = SimulationRequest::new(default_zones(), num_samples).expect("valid reference scenario");
    let available = rayon::current_num_threads();

    println!("Reference scenario, {} simulated years", num_samples);
    println!("  Theoretical mean: {:.4}", request.expected_annual_loss());
    println!("========================================");

    let mut counts = vec![1, 2, 4, available];
    counts.sort_unstable();
    counts.dedup();

    for n_workers in counts {
        let config = EngineConfig {
            n_workers: Some(n_workers),
            seed: Some(42),
            ..EngineConfig::default()
        };
        let start = Instant::now();
        let estimate = run_simulation(&request, &config).expect("simulation failed");
        let elapsed = start.elapsed();
        println!(
            "  Workers: {:>3}  Time: {:>7.3}s  Mean: {:.4}",
            estimate.n_workers(),
            elapsed.as_secs_f64(),
            estimate.expected_loss(),
        );
    }
    println!("========================================");
}
