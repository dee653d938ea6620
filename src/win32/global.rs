//! Global memory for clipboard data.
//!
//! See: https://docs.microsoft.com/en-us/windows/win32/memory/global-and-local-functions

use crate::clipboard::{Allocator, MemoryBlock};
use crate::error::*;
use crate::win32::last_error_message;
use std::ptr;
use winapi::shared::minwindef as win;
use winapi::um::winbase;

/// Allocates movable, zero initialized global memory (`GHND`).
pub struct GlobalAllocator;

impl Allocator for GlobalAllocator {
    type Block = GlobalBlock;

    fn alloc(&self, size: usize) -> Result<GlobalBlock, Error> {
        let handle = unsafe { winbase::GlobalAlloc(winbase::GHND, size) };
        if handle.is_null() {
            return Err(Error::AllocationFailed(last_error_message()));
        }
        log::debug!("Allocated {} bytes of global memory", size);
        Ok(GlobalBlock {
            handle,
            size,
            owned: true,
        })
    }
}

/// Global memory handle, freed on drop unless given away.
pub struct GlobalBlock {
    handle: win::HGLOBAL,
    size: usize,
    owned: bool,
}

impl GlobalBlock {
    pub fn handle(&self) -> win::HGLOBAL {
        self.handle
    }

    /// Give up ownership, eg. when the system took the handle over.
    pub fn disown(mut self) {
        self.owned = false;
    }
}

impl MemoryBlock for GlobalBlock {
    fn size(&self) -> usize {
        self.size
    }

    fn write(&mut self, data: &[u8]) -> Result<(), Error> {
        if data.len() > self.size {
            return Err(Error::LogicError("Data does not fit in memory block."));
        }
        let ptr = unsafe { winbase::GlobalLock(self.handle) };
        if ptr.is_null() {
            return Err(Error::LockFailed(last_error_message()));
        }
        unsafe {
            ptr::copy_nonoverlapping(data.as_ptr(), ptr as *mut u8, data.len());
            winbase::GlobalUnlock(self.handle);
        }
        Ok(())
    }
}

impl Drop for GlobalBlock {
    fn drop(&mut self) {
        if !self.owned {
            return;
        }
        log::debug!("Releasing global memory");
        let rv = unsafe { winbase::GlobalFree(self.handle) };
        if !rv.is_null() {
            log::debug!("GlobalFree failed: {}", last_error_message());
        }
    }
}
