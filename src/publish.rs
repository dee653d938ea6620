use crate::clipboard::*;
use crate::dropfiles::{self, CF_HDROP};
use crate::error::*;
use std::fs;
use std::path::{Path, PathBuf};
use widestring::U16CString;

/// Places a file on the clipboard the way a file manager's copy does.
pub struct Publisher<A, C> {
    allocator: A,
    clipboard: C,
}

#[cfg(windows)]
impl Publisher<crate::win32::GlobalAllocator, crate::win32::SystemClipboard> {
    /// Publisher for the system clipboard.
    pub fn system() -> Self {
        Self::new(crate::win32::GlobalAllocator, crate::win32::SystemClipboard)
    }
}

impl<A, C> Publisher<A, C>
where
    A: Allocator,
    C: Clipboard<Block = A::Block>,
{
    pub fn new(allocator: A, clipboard: C) -> Self {
        Self {
            allocator,
            clipboard,
        }
    }

    /// Replace clipboard content with a file drop of `path`.
    ///
    /// Returns the absolute path that was placed on the clipboard.
    /// Nothing on the clipboard is touched unless the path exists and the
    /// payload was fully prepared.
    pub fn publish(&mut self, path: &Path) -> Result<PathBuf, Error> {
        let path = resolve(path)?;
        let wide = U16CString::from_os_str(path.as_os_str())?;
        let payload = dropfiles::serialize(&wide);
        // block is released on any early return until the clipboard takes it
        let mut block = self.allocator.alloc(payload.len())?;
        block.write(&payload)?;
        log::debug!("Wrote {} byte payload", block.size());
        let mut session = ClipboardSession::open(&mut self.clipboard)?;
        if let Err(e) = session.empty() {
            log::warn!("Failed to empty clipboard: {}", e);
        }
        session.set_data(CF_HDROP, block)?;
        log::debug!("Published {}", path.to_string_lossy());
        Ok(path)
    }

    #[cfg(test)]
    pub(crate) fn clipboard(&self) -> &C {
        &self.clipboard
    }
}

/// Ensure the path exists and make it absolute.
///
/// Directories are accepted, symlinks are not followed.
fn resolve(path: &Path) -> Result<PathBuf, Error> {
    // a nul can't be put on the clipboard, and would fail the query below
    U16CString::from_os_str(path.as_os_str())?;
    if let Err(e) = fs::symlink_metadata(path) {
        log::debug!("Failed to query {}: {}", path.to_string_lossy(), e);
        return Err(Error::PathNotFound(path.to_owned()));
    }
    Ok(std::path::absolute(path)?)
}
