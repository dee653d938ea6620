use crate::error::*;
use clap::error::ErrorKind;
use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

/// Copy a file or folder to the clipboard, ready to be pasted in Explorer.
#[derive(Debug, Parser)]
#[command(name = "filedrop", version, about)]
pub struct Args {
    /// Path to the file or folder
    pub path: PathBuf,
}

/// Parse command line arguments, first one being the program name.
///
/// Help and version requests print and exit the process.
pub fn parse<I, T>(args: I) -> Result<Args, Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Args::try_parse_from(args).map_err(|e| match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
        _ => Error::InvalidArguments(e.render().to_string()),
    })
}
