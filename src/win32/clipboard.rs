//! See: https://docs.microsoft.com/en-us/windows/win32/dataxchg/using-the-clipboard

use crate::clipboard::Clipboard;
use crate::error::*;
use crate::win32::last_error_message;
use crate::win32::GlobalBlock;
use std::ptr::null_mut;
use winapi::um::winuser;

/// The system clipboard, opened without an owner window.
#[derive(Default)]
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    type Block = GlobalBlock;

    fn open(&mut self) -> Result<(), Error> {
        if unsafe { winuser::OpenClipboard(null_mut()) } == 0 {
            return Err(Error::ClipboardUnavailable(last_error_message()));
        }
        Ok(())
    }

    fn empty(&mut self) -> Result<(), Error> {
        if unsafe { winuser::EmptyClipboard() } == 0 {
            return Err(Error::PublishFailed(last_error_message()));
        }
        Ok(())
    }

    fn set_data(&mut self, format: u32, block: GlobalBlock) -> Result<(), Error> {
        let rv = unsafe { winuser::SetClipboardData(format, block.handle()) };
        if rv.is_null() {
            // block is released on return
            return Err(Error::PublishFailed(last_error_message()));
        }
        // system owns the memory now
        block.disown();
        Ok(())
    }

    fn close(&mut self) {
        if unsafe { winuser::CloseClipboard() } == 0 {
            log::debug!("CloseClipboard failed: {}", last_error_message());
        }
    }
}
