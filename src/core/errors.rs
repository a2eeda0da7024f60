/*!
 * Error Types
 * Centralized error handling with thiserror, miette, and serde support
 */

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// Re-export MemoryError from memory module
pub use crate::memory::MemoryError;

// Re-export ClockError from monitoring module
pub use crate::monitoring::ClockError;

/// Benchmark operation result
pub type BenchResult<T> = Result<T, BenchError>;

/// Benchmark errors with serialization support
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum BenchError {
    #[error("Invalid size: {size} bytes")]
    #[diagnostic(
        code(bench::invalid_size),
        help("Region sizes are byte counts and must be zero or positive.")
    )]
    InvalidSize { size: i64 },

    #[error("Region allocation failed")]
    #[diagnostic(code(bench::allocation_failed))]
    Allocation(
        #[from]
        #[diagnostic_source]
        MemoryError,
    ),

    #[error("Region copy failed")]
    #[diagnostic(code(bench::copy_failed))]
    Copy(
        #[source]
        #[diagnostic_source]
        MemoryError,
    ),

    #[error("Clock sample failed")]
    #[diagnostic(code(bench::clock_failed))]
    Clock(
        #[from]
        #[diagnostic_source]
        ClockError,
    ),
}

impl BenchError {
    /// Whether this error came from the allocator
    pub fn is_allocation(&self) -> bool {
        matches!(self, BenchError::Allocation(_))
    }
}
