/*!
 * Core Types
 * Common types used across the benchmark
 */

/// Byte count for memory operations
pub type Size = usize;

/// Opaque clock sample, only meaningful as a difference
pub type Ticks = u64;

/// Elapsed time in milliseconds
pub type Millis = f64;
