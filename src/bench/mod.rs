/*!
 * Benchmarks
 * Timed memory operations
 */

pub mod copy;

pub use copy::{measure_copy_duration, ticks_to_millis, CopyBenchmark, CopyMeasurement};
