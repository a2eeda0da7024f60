/*!
 * Processor-Time Clocks
 *
 * Clock abstraction used to time benchmark runs. Samples are opaque ticks;
 * only the difference between two samples of the same clock is meaningful.
 */

use crate::core::limits::NANOS_PER_SECOND;
use crate::core::types::Ticks;
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use thiserror::Error;

/// Clock operation result
pub type ClockResult<T> = Result<T, ClockError>;

/// Clock errors
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum ClockError {
    #[error("Processor-time clock unavailable: {reason}")]
    #[diagnostic(
        code(clock::unavailable),
        help("The host refused a CPU-time sample. Check that the platform exposes a per-process CPU clock.")
    )]
    Unavailable { reason: String },
}

/// Time source for benchmark measurements
#[cfg_attr(test, mockall::automock)]
pub trait Clock: Send + Sync {
    /// Take a sample
    fn now(&self) -> ClockResult<Ticks>;

    /// Tick rate used to convert sample differences to seconds
    fn ticks_per_second(&self) -> u64;
}

impl<C: Clock + ?Sized> Clock for &C {
    #[inline]
    fn now(&self) -> ClockResult<Ticks> {
        (**self).now()
    }

    #[inline]
    fn ticks_per_second(&self) -> u64 {
        (**self).ticks_per_second()
    }
}

/// CPU time consumed by the current process
///
/// Reads `CLOCK_PROCESS_CPUTIME_ID` on unix targets. Other targets fall back
/// to a monotonic wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessClock;

impl ProcessClock {
    pub fn new() -> Self {
        Self
    }
}

#[cfg(unix)]
impl Clock for ProcessClock {
    fn now(&self) -> ClockResult<Ticks> {
        use nix::time::{clock_gettime, ClockId};

        let ts = clock_gettime(ClockId::CLOCK_PROCESS_CPUTIME_ID).map_err(|errno| {
            ClockError::Unavailable {
                reason: errno.desc().to_string(),
            }
        })?;

        Ok((ts.tv_sec() as u64) * NANOS_PER_SECOND + ts.tv_nsec() as u64)
    }

    #[inline]
    fn ticks_per_second(&self) -> u64 {
        NANOS_PER_SECOND
    }
}

#[cfg(not(unix))]
impl Clock for ProcessClock {
    fn now(&self) -> ClockResult<Ticks> {
        use std::sync::OnceLock;
        use std::time::Instant;

        static ORIGIN: OnceLock<Instant> = OnceLock::new();
        let origin = ORIGIN.get_or_init(Instant::now);
        Ok(origin.elapsed().as_nanos() as Ticks)
    }

    #[inline]
    fn ticks_per_second(&self) -> u64 {
        NANOS_PER_SECOND
    }
}

/// Deterministic clock that advances a fixed step per sample
///
/// Sample `n` (starting at 0) reads `n * step`.
#[derive(Debug)]
pub struct ManualClock {
    current: AtomicU64,
    step: Ticks,
    rate: u64,
    samples: AtomicU64,
}

impl ManualClock {
    /// Clock stepping `step` ticks per sample, at one billion ticks per second
    pub fn new(step: Ticks) -> Self {
        Self {
            current: AtomicU64::new(0),
            step,
            rate: NANOS_PER_SECOND,
            samples: AtomicU64::new(0),
        }
    }

    pub fn with_rate(mut self, ticks_per_second: u64) -> Self {
        self.rate = ticks_per_second;
        self
    }

    /// Move the clock forward without taking a sample
    pub fn advance(&self, ticks: Ticks) {
        self.current.fetch_add(ticks, Ordering::Relaxed);
    }

    /// Number of samples taken so far
    pub fn samples(&self) -> u64 {
        self.samples.load(Ordering::Relaxed)
    }
}

impl Clock for ManualClock {
    fn now(&self) -> ClockResult<Ticks> {
        self.samples.fetch_add(1, Ordering::Relaxed);
        Ok(self.current.fetch_add(self.step, Ordering::Relaxed))
    }

    #[inline]
    fn ticks_per_second(&self) -> u64 {
        self.rate
    }
}
