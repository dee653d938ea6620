mod clipboard;
mod global;

pub use self::clipboard::SystemClipboard;
pub use self::global::{GlobalAllocator, GlobalBlock};

use std::ptr::null_mut;
use widestring::U16CStr;
use winapi::shared::minwindef as win;
use winapi::um::winnt;

/// Get the last WinAPI error as a message.
pub fn last_error_message() -> String {
    use winapi::um::winbase::*;
    let mut buf: winnt::LPWSTR = null_mut();
    let errno = unsafe { winapi::um::errhandlingapi::GetLastError() };
    let res = unsafe {
        FormatMessageW(
            FORMAT_MESSAGE_FROM_SYSTEM
                | FORMAT_MESSAGE_IGNORE_INSERTS
                | FORMAT_MESSAGE_ALLOCATE_BUFFER,
            null_mut(),
            errno,
            win::DWORD::from(winnt::MAKELANGID(
                winnt::LANG_NEUTRAL,
                winnt::SUBLANG_DEFAULT,
            )),
            &mut buf as *mut winnt::LPWSTR as _,
            0,
            null_mut(),
        )
    };
    if res == 0 {
        format!("Error code {}", errno)
    } else {
        let s = unsafe { U16CStr::from_ptr_str(buf).to_string_lossy() };
        unsafe { LocalFree(buf as _) };
        // messages end with a line break
        s.trim_end().to_string()
    }
}
