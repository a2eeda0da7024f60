/*!
 * Memory Module
 * Region allocation and copy primitives
 */

pub mod copy;
pub mod region;
pub mod types;

// Re-export for convenience
pub use copy::{CopyPrimitive, SystemCopy};
pub use region::Region;
pub use types::*;
