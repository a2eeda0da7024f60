/*!
 * Benchmark Limits and Constants
 *
 * Centralized location for the fixed numbers the benchmark depends on.
 */

use super::types::Size;

// =============================================================================
// COPY BENCHMARK
// =============================================================================

/// Full-region copies performed per measurement
/// Fixed; not exposed as a knob
pub const COPY_ITERATIONS: usize = 100;

/// Alignment of every benchmark region (machine word)
pub const REGION_ALIGNMENT: usize = std::mem::align_of::<usize>();

// =============================================================================
// TIMING
// =============================================================================

/// Nanosecond resolution used by the processor-time clock
pub const NANOS_PER_SECOND: u64 = 1_000_000_000;

/// Milliseconds per second, for tick -> ms conversion
pub const MILLIS_PER_SECOND: f64 = 1000.0;

// =============================================================================
// SWEEP DEFAULTS
// =============================================================================

/// Sizes measured by the binary when COPY_BENCH_SIZES is unset
/// 1KB, 64KB, 1MB, 16MB
pub const DEFAULT_SWEEP_SIZES: [Size; 4] = [1024, 64 * 1024, 1024 * 1024, 16 * 1024 * 1024];
