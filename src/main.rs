// the clipboard backend only exists on Windows
#![cfg_attr(not(windows), allow(dead_code))]

use error::*;
use std::env;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

mod cli;
mod clipboard;
mod dropfiles;
mod error;
mod publish;
#[cfg(windows)]
mod win32;

fn main() -> ExitCode {
    match run_app() {
        Ok(path) => {
            println!("Copied {} to the clipboard.", path.to_string_lossy());
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{}", e);
            eprintln!("{}", e.to_string().trim_end());
            ExitCode::from(e.exit_code())
        }
    }
}

fn run_app() -> Result<PathBuf, Error> {
    // set up logging
    #[cfg(feature = "debug")]
    if let Ok(mut exe) = env::current_exe() {
        let stem = exe.file_stem().map_or_else(
            || "debug".to_string(),
            |s| s.to_string_lossy().into_owned(),
        );
        exe.pop();
        exe.push(format!("{}.log", stem));
        simple_logging::log_to_file(exe, log::LevelFilter::Debug)?;
    }
    // log command line arguments
    #[cfg(feature = "debug")]
    env::args_os()
        .enumerate()
        .for_each(|(n, arg)| log::debug!("Arg {}: {}", n, arg.to_string_lossy()));
    let args = cli::parse(env::args_os())?;
    copy_to_clipboard(&args.path)
}

#[cfg(windows)]
fn copy_to_clipboard(path: &Path) -> Result<PathBuf, Error> {
    publish::Publisher::system().publish(path)
}

#[cfg(not(windows))]
fn copy_to_clipboard(path: &Path) -> Result<PathBuf, Error> {
    log::debug!("Not publishing {}", path.to_string_lossy());
    Err(Error::UnsupportedPlatform)
}
