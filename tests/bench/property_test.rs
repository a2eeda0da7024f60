/*!
 * Property Tests
 * Size-independent guarantees of the copy benchmark
 */

use copy_bench::{
    measure_copy_duration, BenchError, CopyBenchmark, ManualClock, Region, COPY_ITERATIONS,
};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn duration_is_non_negative(size in 0i64..64 * 1024) {
        let duration = measure_copy_duration(size).unwrap();
        prop_assert!(duration >= 0.0);
    }

    #[test]
    fn negative_sizes_rejected(size in i64::MIN..0) {
        prop_assert_eq!(measure_copy_duration(size), Err(BenchError::InvalidSize { size }));
    }

    #[test]
    fn manual_clock_duration_is_exact(step in 1u64..1_000_000, size in 0usize..4096) {
        let bench = CopyBenchmark::new().with_clock(ManualClock::new(step).with_rate(1_000));
        let measurement = bench.measure(size).unwrap();

        prop_assert_eq!(measurement.iterations, COPY_ITERATIONS);
        prop_assert!((measurement.duration_ms - step as f64).abs() < 1e-6);
    }

    #[test]
    fn copy_round_trips_fill_byte(size in 1usize..8192, byte in any::<u8>()) {
        let mut src = Region::allocate(size).unwrap();
        src.fill(byte);
        let mut dst = Region::allocate(size).unwrap();

        prop_assert_eq!(dst.copy_from(&src).unwrap(), size);
        prop_assert!(dst.as_slice().unwrap().iter().all(|&b| b == byte));
    }
}
