/*!
 * Memory Regions
 *
 * RAII ownership of raw allocations with automatic release
 */

use super::types::{MemoryError, MemoryResult};
use crate::core::limits::REGION_ALIGNMENT;
use crate::core::types::Size;
use std::alloc::{self, Layout};
use std::ptr::{self, NonNull};

/// Scoped raw memory block, freed on drop
///
/// Freshly allocated regions are uninitialized. Bytes can only be read back
/// through [`Region::as_slice`] once the region has been zeroed, filled, or
/// copied from an initialized region.
///
/// # Example
///
/// ```
/// use copy_bench::memory::Region;
///
/// let mut src = Region::allocate(64).unwrap();
/// src.fill(0xAB);
/// let mut dst = Region::allocate(64).unwrap();
/// dst.copy_from(&src).unwrap();
/// assert_eq!(dst.as_slice(), Some(&[0xAB; 64][..]));
/// // Both freed on drop
/// ```
pub struct Region {
    ptr: NonNull<u8>,
    layout: Layout,
    initialized: bool,
}

// SAFETY: a Region is the sole owner of its allocation
unsafe impl Send for Region {}

impl Region {
    /// Allocate an uninitialized region of `size` bytes
    pub fn allocate(size: Size) -> MemoryResult<Self> {
        Self::acquire(size, false)
    }

    /// Allocate a region of `size` zero bytes
    pub fn allocate_zeroed(size: Size) -> MemoryResult<Self> {
        Self::acquire(size, true)
    }

    fn acquire(size: Size, zeroed: bool) -> MemoryResult<Self> {
        let layout =
            Layout::from_size_align(size, REGION_ALIGNMENT).map_err(|_| MemoryError::InvalidLayout {
                size,
                alignment: REGION_ALIGNMENT,
            })?;

        if size == 0 {
            // Zero-sized layouts must not reach the allocator
            return Ok(Self {
                ptr: NonNull::<usize>::dangling().cast(),
                layout,
                initialized: true,
            });
        }

        // SAFETY: layout has non-zero size
        let raw = unsafe {
            if zeroed {
                alloc::alloc_zeroed(layout)
            } else {
                alloc::alloc(layout)
            }
        };

        let ptr = NonNull::new(raw).ok_or(MemoryError::AllocationFailed { requested: size })?;

        Ok(Self {
            ptr,
            layout,
            initialized: zeroed,
        })
    }

    /// Length in bytes
    #[inline]
    pub fn len(&self) -> Size {
        self.layout.size()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.layout.size() == 0
    }

    /// Alignment of the start address
    #[inline]
    pub fn alignment(&self) -> Size {
        self.layout.align()
    }

    #[inline]
    pub fn as_ptr(&self) -> *const u8 {
        self.ptr.as_ptr()
    }

    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut u8 {
        self.ptr.as_ptr()
    }

    /// Whether every byte has a defined value
    #[inline]
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Set every byte to `value`
    pub fn fill(&mut self, value: u8) {
        // SAFETY: ptr is valid for len() writes
        unsafe { ptr::write_bytes(self.ptr.as_ptr(), value, self.len()) };
        self.initialized = true;
    }

    /// Read the region's bytes, `None` while uninitialized
    pub fn as_slice(&self) -> Option<&[u8]> {
        if !self.initialized {
            return None;
        }
        // SAFETY: ptr is valid for len() reads and every byte is initialized
        Some(unsafe { std::slice::from_raw_parts(self.ptr.as_ptr(), self.len()) })
    }

    /// Copy every byte of `src` into this region
    ///
    /// Both regions must have the same length. Returns bytes copied.
    pub fn copy_from(&mut self, src: &Region) -> MemoryResult<Size> {
        if self.len() != src.len() {
            return Err(MemoryError::SizeMismatch {
                dst: self.len(),
                src: src.len(),
            });
        }

        // SAFETY: both pointers are valid for len() bytes, and distinct owned
        // regions (`&mut self` vs `&src`) never overlap
        unsafe { ptr::copy_nonoverlapping(src.as_ptr(), self.ptr.as_ptr(), self.len()) };
        self.initialized = src.initialized;
        Ok(self.len())
    }
}

impl std::fmt::Debug for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Region")
            .field("address", &format_args!("{:p}", self.ptr))
            .field("len", &self.len())
            .field("initialized", &self.initialized)
            .finish()
    }
}

impl Drop for Region {
    #[inline]
    fn drop(&mut self) {
        if self.layout.size() != 0 {
            // SAFETY: ptr came from the global allocator with this layout
            unsafe { alloc::dealloc(self.ptr.as_ptr(), self.layout) };
        }
    }
}
