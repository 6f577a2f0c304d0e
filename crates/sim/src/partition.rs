/// Splits `num_samples` across `n_workers`.
///
/// Every worker gets `num_samples / n_workers` years and the first
/// `num_samples % n_workers` workers get one extra, so the counts always sum
/// to `num_samples` and differ by at most one.
pub fn partition_samples(num_samples: u64, n_workers: usize) -> Vec<u64> {
    let n_workers = n_workers.max(1) as u64;
    let base = num_samples / n_workers;
    let remainder = num_samples % n_workers;
    (0..n_workers)
        .map(|worker| base + u64::from(worker < remainder))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_remainder_goes_to_leading_workers() {
        assert_eq!(partition_samples(7, 3), vec![3, 2, 2]);
        assert_eq!(partition_samples(8, 3), vec![3, 3, 2]);
        assert_eq!(partition_samples(9, 3), vec![3, 3, 3]);
    }

    #[test]
    fn test_fewer_samples_than_workers() {
        assert_eq!(partition_samples(2, 4), vec![1, 1, 0, 0]);
    }

    #[test]
    fn test_zero_workers_treated_as_one() {
        assert_eq!(partition_samples(5, 0), vec![5]);
    }

    proptest! {
        #[test]
        fn prop_partition_reconciles(num_samples in 0u64..10_000_000, n_workers in 1usize..256) {
            let parts = partition_samples(num_samples, n_workers);
            prop_assert_eq!(parts.len(), n_workers);
            prop_assert_eq!(parts.iter().sum::<u64>(), num_samples);
            let max = *parts.iter().max().unwrap();
            let min = *parts.iter().min().unwrap();
            prop_assert!(max - min <= 1);
        }
    }
}
