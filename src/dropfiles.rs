//! `CF_HDROP` clipboard payload.
//!
//! The payload is a `DROPFILES` header immediately followed by a list of nul
//! terminated paths, the list itself being terminated by an empty string.
//!
//! See: https://docs.microsoft.com/en-us/windows/win32/shell/clipboard#cf_hdrop

use std::mem;
use widestring::U16CStr;

/// Standard clipboard format for a list of dropped files.
pub const CF_HDROP: u32 = 15;

/// Size of a UTF-16 code unit in bytes.
const WCHAR_SIZE: usize = mem::size_of::<u16>();

/// https://docs.microsoft.com/en-us/windows/win32/api/windef/ns-windef-point
#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct POINT {
    pub x: i32,
    pub y: i32,
}

/// https://docs.microsoft.com/en-us/windows/win32/api/shlobj_core/ns-shlobj_core-dropfiles
#[repr(C)]
#[allow(non_snake_case)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DROPFILES {
    /// The offset of the file list from the beginning of this structure, in bytes.
    pub pFiles: u32,
    pub pt: POINT,
    /// Whether `pt` is in non-client coordinates, unused here.
    pub fNC: i32,
    /// Nonzero when the file list holds UTF-16 rather than ANSI paths.
    pub fWide: i32,
}

/// Size of the `DROPFILES` header in bytes.
pub const DROPFILES_SIZE: usize = mem::size_of::<DROPFILES>();

impl DROPFILES {
    /// Header for a wide character file list placed right after the header.
    pub fn wide() -> Self {
        Self {
            pFiles: DROPFILES_SIZE as u32,
            pt: POINT::default(),
            fNC: 0,
            fWide: 1,
        }
    }

    /// Append the header in its native little-endian layout.
    fn write_to(&self, buf: &mut Vec<u8>) {
        buf.extend_from_slice(&self.pFiles.to_le_bytes());
        buf.extend_from_slice(&self.pt.x.to_le_bytes());
        buf.extend_from_slice(&self.pt.y.to_le_bytes());
        buf.extend_from_slice(&self.fNC.to_le_bytes());
        buf.extend_from_slice(&self.fWide.to_le_bytes());
    }

    #[cfg(test)]
    fn read_from(buf: &[u8]) -> Option<Self> {
        let field = |n: usize| -> Option<[u8; 4]> { buf.get(n * 4..n * 4 + 4)?.try_into().ok() };
        Some(Self {
            pFiles: u32::from_le_bytes(field(0)?),
            pt: POINT {
                x: i32::from_le_bytes(field(1)?),
                y: i32::from_le_bytes(field(2)?),
            },
            fNC: i32::from_le_bytes(field(3)?),
            fWide: i32::from_le_bytes(field(4)?),
        })
    }
}

/// Exact payload size for a single path of `path_len` code units.
///
/// Header, the path with its terminator and the empty string ending the list.
pub fn payload_size(path_len: usize) -> usize {
    DROPFILES_SIZE + (path_len + 1) * WCHAR_SIZE + WCHAR_SIZE
}

/// Serialize a single path into a `CF_HDROP` payload.
pub fn serialize(path: &U16CStr) -> Vec<u8> {
    let size = payload_size(path.len());
    let mut buf = Vec::with_capacity(size);
    DROPFILES::wide().write_to(&mut buf);
    path.as_slice_with_nul()
        .iter()
        .chain(std::iter::once(&0))
        .for_each(|c| buf.extend_from_slice(&c.to_le_bytes()));
    debug_assert_eq!(buf.len(), size);
    buf
}

/// Parse a `CF_HDROP` payload back to its header and list of paths.
///
/// Returns `None` for narrow (ANSI) payloads and malformed data.
#[cfg(test)]
pub(crate) fn parse(buf: &[u8]) -> Option<(DROPFILES, Vec<widestring::U16String>)> {
    let header = DROPFILES::read_from(buf)?;
    if header.fWide == 0 {
        return None;
    }
    let units: Vec<u16> = buf
        .get(header.pFiles as usize..)?
        .chunks(WCHAR_SIZE)
        .map(|c| c.try_into().map(u16::from_le_bytes))
        .collect::<Result<_, _>>()
        .ok()?;
    let mut paths = Vec::new();
    let mut rest = units.as_slice();
    loop {
        let end = rest.iter().position(|&c| c == 0)?;
        if end == 0 {
            break;
        }
        paths.push(widestring::U16String::from_vec(&rest[..end]));
        rest = &rest[end + 1..];
    }
    Some((header, paths))
}
