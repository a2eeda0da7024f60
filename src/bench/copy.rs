/*!
 * Copy Benchmark
 *
 * Times a fixed number of full-region copies between two freshly allocated
 * regions and reports the processor time they consumed.
 */

use crate::core::errors::{BenchError, BenchResult};
use crate::core::limits::{COPY_ITERATIONS, MILLIS_PER_SECOND};
use crate::core::types::{Millis, Size, Ticks};
use crate::memory::{CopyPrimitive, MemoryError, Region, SystemCopy};
use crate::monitoring::{Clock, ProcessClock};
use serde::{Deserialize, Serialize};
use std::hint::black_box;
use tracing::trace;

/// Result of one benchmark run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CopyMeasurement {
    /// Bytes per region
    pub size: Size,
    /// Copies performed
    pub iterations: usize,
    /// Processor time across all copies
    pub duration_ms: Millis,
}

impl CopyMeasurement {
    /// Total bytes moved across all iterations
    pub fn bytes_copied(&self) -> u128 {
        self.size as u128 * self.iterations as u128
    }

    /// Mean time of a single copy
    pub fn per_copy_ms(&self) -> Millis {
        if self.iterations == 0 {
            return 0.0;
        }
        self.duration_ms / self.iterations as f64
    }
}

/// Timed bulk-copy benchmark
///
/// Each call to [`CopyBenchmark::measure`] owns its own pair of regions, so a
/// shared benchmark can be measured from several threads at once.
#[derive(Debug, Clone)]
pub struct CopyBenchmark<C = ProcessClock, P = SystemCopy> {
    clock: C,
    copier: P,
}

impl CopyBenchmark {
    /// Benchmark using the process CPU clock and platform memcpy
    pub fn new() -> Self {
        Self::with_parts(ProcessClock::new(), SystemCopy)
    }
}

impl Default for CopyBenchmark {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock, P: CopyPrimitive> CopyBenchmark<C, P> {
    pub fn with_parts(clock: C, copier: P) -> Self {
        Self { clock, copier }
    }

    /// Replace the time source
    pub fn with_clock<C2: Clock>(self, clock: C2) -> CopyBenchmark<C2, P> {
        CopyBenchmark {
            clock,
            copier: self.copier,
        }
    }

    /// Replace the copy primitive
    pub fn with_copier<P2: CopyPrimitive>(self, copier: P2) -> CopyBenchmark<C, P2> {
        CopyBenchmark {
            clock: self.clock,
            copier,
        }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn copier(&self) -> &P {
        &self.copier
    }

    /// Copy `size` bytes [`COPY_ITERATIONS`] times and time it
    ///
    /// Both regions are released on every exit path, including a failed
    /// second allocation.
    pub fn measure(&self, size: Size) -> BenchResult<CopyMeasurement> {
        let src = Region::allocate(size)?;
        let mut dst = Region::allocate(size)?;

        let start = self.clock.now()?;
        for _ in 0..COPY_ITERATIONS {
            self.copier.copy(&mut dst, &src).map_err(BenchError::Copy)?;
            // Keep the optimizer from dropping stores to a region nobody reads
            black_box(dst.as_mut_ptr());
        }
        let stop = self.clock.now()?;

        let duration_ms = ticks_to_millis(stop.saturating_sub(start), self.clock.ticks_per_second());

        trace!(
            size,
            iterations = COPY_ITERATIONS,
            duration_ms,
            "Copy benchmark complete"
        );

        Ok(CopyMeasurement {
            size,
            iterations: COPY_ITERATIONS,
            duration_ms,
        })
    }
}

/// Convert a tick difference to milliseconds; a zero rate yields 0.0
#[inline]
pub fn ticks_to_millis(elapsed: Ticks, ticks_per_second: u64) -> Millis {
    if ticks_per_second == 0 {
        return 0.0;
    }
    elapsed as f64 / ticks_per_second as f64 * MILLIS_PER_SECOND
}

/// Time 100 copies of a `size`-byte region with the default benchmark
///
/// Negative sizes are rejected with [`BenchError::InvalidSize`] rather than
/// being reinterpreted as huge unsigned counts.
pub fn measure_copy_duration(size: i64) -> BenchResult<Millis> {
    if size < 0 {
        return Err(BenchError::InvalidSize { size });
    }

    // Only reachable where usize is narrower than i64
    let size = Size::try_from(size).map_err(|_| MemoryError::AllocationFailed {
        requested: Size::MAX,
    })?;

    CopyBenchmark::new().measure(size).map(|m| m.duration_ms)
}
