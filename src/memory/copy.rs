/*!
 * Copy Primitives
 * The byte-copy operation timed by the benchmark
 */

use super::region::Region;
use super::types::MemoryResult;

/// Full-region copy interface
///
/// The benchmark calls this once per iteration; swapping the implementation
/// lets tests count or observe calls.
#[cfg_attr(test, mockall::automock)]
pub trait CopyPrimitive: Send + Sync {
    /// Copy all of `src` into `dst`
    fn copy(&self, dst: &mut Region, src: &Region) -> MemoryResult<()>;
}

/// Platform memcpy
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemCopy;

impl CopyPrimitive for SystemCopy {
    #[inline]
    fn copy(&self, dst: &mut Region, src: &Region) -> MemoryResult<()> {
        dst.copy_from(src).map(|_| ())
    }
}

impl<P: CopyPrimitive + ?Sized> CopyPrimitive for &P {
    #[inline]
    fn copy(&self, dst: &mut Region, src: &Region) -> MemoryResult<()> {
        (**self).copy(dst, src)
    }
}
