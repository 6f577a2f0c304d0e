mod logging;
mod output;
mod run;

use clap::Parser;

use hurricane_shared::config::{ZoneParameters, DEFAULT_BATCH_SIZE};

#[derive(Parser, Debug)]
#[command(
    name = "gethurricaneloss",
    about = "Calculates the average annual hurricane loss in $Billions for a simple hurricane model.",
    allow_negative_numbers = true
)]
struct Cli {
    /// Expected number of Florida landfalls per year
    florida_landfall_rate: f64,
    /// Log-space mean of a single Florida landfall loss
    florida_mean: f64,
    /// Log-space standard deviation of a single Florida landfall loss
    florida_stddev: f64,
    /// Expected number of Gulf states landfalls per year
    gulf_landfall_rate: f64,
    /// Log-space mean of a single Gulf states landfall loss
    gulf_mean: f64,
    /// Log-space standard deviation of a single Gulf states landfall loss
    gulf_stddev: f64,
    /// Number of simulated years
    #[arg(short = 'n', long = "num_monte_carlo_samples", default_value = "1000")]
    num_monte_carlo_samples: i64,
    /// Number of parallel workers (0 = auto)
    #[arg(long, default_value = "0")]
    workers: usize,
    /// Simulated years per sampling batch
    #[arg(long, default_value_t = DEFAULT_BATCH_SIZE)]
    batch_size: usize,
    /// Base seed for reproducible runs
    #[arg(long)]
    seed: Option<u64>,
    /// File receiving the run log
    #[arg(long, default_value = "logs.log")]
    log_file: String,
    /// Print the per-worker breakdown
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn zones(&self) -> Vec<ZoneParameters> {
        vec![
            ZoneParameters::new(
                "Florida",
                self.florida_landfall_rate,
                self.florida_mean,
                self.florida_stddev,
            ),
            ZoneParameters::new("Gulf", self.gulf_landfall_rate, self.gulf_mean, self.gulf_stddev),
        ]
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(&cli.log_file)?;

    run::run(
        cli.zones(),
        cli.num_monte_carlo_samples,
        cli.workers,
        cli.batch_size,
        cli.seed,
        cli.verbose,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_command_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["gethurricaneloss", "1", "2", "1", "1", "2", "1"]).unwrap();
        assert_eq!(cli.num_monte_carlo_samples, 1000);
        assert_eq!(cli.workers, 0);
        assert_eq!(cli.batch_size, DEFAULT_BATCH_SIZE);
        assert_eq!(cli.seed, None);
        assert_eq!(cli.log_file, "logs.log");

        let zones = cli.zones();
        assert_eq!(zones.len(), 2);
        assert_eq!(zones[0], ZoneParameters::new("Florida", 1.0, 2.0, 1.0));
        assert_eq!(zones[1].name, "Gulf");
    }

    #[test]
    fn test_negative_values_reach_validation() {
        let cli = Cli::try_parse_from([
            "gethurricaneloss", "-1", "2", "1", "1", "2", "1", "-n", "-5",
        ])
        .unwrap();
        assert_eq!(cli.florida_landfall_rate, -1.0);
        assert_eq!(cli.num_monte_carlo_samples, -5);
    }

    #[test]
    fn test_sample_count_flag() {
        let cli = Cli::try_parse_from([
            "gethurricaneloss",
            "1",
            "2",
            "1",
            "1",
            "2",
            "1",
            "--num_monte_carlo_samples",
            "250000",
            "--seed",
            "7",
        ])
        .unwrap();
        assert_eq!(cli.num_monte_carlo_samples, 250_000);
        assert_eq!(cli.seed, Some(7));
    }

    #[test]
    fn test_missing_positional_rejected() {
        assert!(Cli::try_parse_from(["gethurricaneloss", "1", "2", "1"]).is_err());
    }
}
