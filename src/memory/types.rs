/*!
 * Memory Types
 * Common types for region allocation and copying
 */

use crate::core::types::Size;
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Memory operation result
pub type MemoryResult<T> = Result<T, MemoryError>;

/// Memory errors
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum MemoryError {
    #[error("Allocation failed: requested {requested} bytes")]
    #[diagnostic(
        code(memory::allocation_failed),
        help("The allocator returned no memory. Try a smaller size or free memory on the host.")
    )]
    AllocationFailed { requested: Size },

    #[error("Invalid layout: {size} bytes at alignment {alignment}")]
    #[diagnostic(
        code(memory::invalid_layout),
        help("Sizes above isize::MAX cannot be described to the allocator.")
    )]
    InvalidLayout { size: Size, alignment: Size },

    #[error("Region size mismatch: destination {dst} bytes, source {src} bytes")]
    #[diagnostic(code(memory::size_mismatch))]
    SizeMismatch { dst: Size, src: Size },
}
