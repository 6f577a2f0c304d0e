use hurricane_shared::result::LossEstimate;
use std::time::Duration;

pub fn format_loss(expected_loss: f64) -> String {
    format!("Expected annual economic loss: ${:.4} billion", expected_loss)
}

pub fn print_result(estimate: &LossEstimate, elapsed: Duration, verbose: bool) {
    if verbose {
        println!("========================================");
        println!("  Samples:     {}", estimate.num_samples);
        println!("  Workers:     {}", estimate.n_workers());
        println!("  Time:        {:.2}s", elapsed.as_secs_f64());
        for partial in &estimate.partials {
            println!(
                "  Worker {:>3}: {:>12} years  total loss {:.4}",
                partial.worker, partial.samples_covered, partial.sum_of_losses
            );
        }
        println!("========================================");
    }
    println!("{}", format_loss(estimate.expected_loss()));
}
