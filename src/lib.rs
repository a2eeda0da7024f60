/*!
 * Copy Bench Library
 * Timed bulk-copy micro-benchmark exposed as a library
 */

pub mod bench;
pub mod core;
pub mod memory;
pub mod monitoring;

// Re-exports
pub use bench::{measure_copy_duration, CopyBenchmark, CopyMeasurement};
pub use crate::core::config::BenchConfig;
pub use crate::core::errors::{BenchError, BenchResult};
pub use crate::core::limits::COPY_ITERATIONS;
pub use memory::{CopyPrimitive, MemoryError, Region, SystemCopy};
pub use monitoring::{init_tracing, Clock, ClockError, ManualClock, ProcessClock};
