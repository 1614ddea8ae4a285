// Copyright 2023-5 Seth Pendergrass. See LICENSE.

//! Program setup functions.

use std::{
  fs,
  io::Write,
  path::{Path, PathBuf},
};

use env_logger::Builder;
use log::LevelFilter;
use metadata_1a::EXIFTOOL;

/// Sets up `env_logger` with the format "LEVEL message" (e.g. "WARN something
/// went wrong").
///
/// Log levels:
/// Error: Program errors.
/// Warn: Files whose metadata could not be read.
/// Info: General program flow.
/// Debug: Dependency checks, missing and unsupported keys.
/// Trace: `ExifTool` output.
pub fn configure_logging(verbosity: u8) {
  let level = match verbosity {
    0 => LevelFilter::Info,
    1 => LevelFilter::Debug,
    _ => LevelFilter::Trace,
  };

  Builder::new()
    .filter_level(level)
    .format(|buf, record| {
      let style = buf.default_level_style(record.level());
      writeln!(
        buf,
        "{style}{}{style:#}\t{}",
        record.level(),
        record.args()
      )
    })
    .init();
}

/// Get `ExifTool` path from provided arg, if present, and write to
/// `XDG_CONFIG_HOME/metadata_1a`. Else, read it from there, defaulting to
/// `exiftool` on `PATH` if never set. A bare name in `path` is looked up in
/// `PATH` when run.
#[cfg_attr(feature = "native", allow(dead_code))]
pub fn get_or_update_exiftool(path: Option<PathBuf>) -> Result<PathBuf, &'static str> {
  let xdg_dirs = xdg::BaseDirectories::with_prefix(env!("CARGO_PKG_NAME"));

  match path {
    Some(path) => {
      check_exiftool_path(&path)?;
      let config_path = xdg_dirs
        .place_config_file("exiftool")
        .map_err(|_| "Failed to create config directory.")?;
      fs::write(config_path, path.to_str().ok_or("Invalid ExifTool path.")?)
        .map_err(|_| "Failed to write ExifTool path.")?;
      Ok(path)
    }
    None => match xdg_dirs.find_config_file("exiftool") {
      Some(config_path) => Ok(PathBuf::from(
        fs::read_to_string(config_path)
          .map_err(|_| "Failed to read ExifTool path.")?
          .trim(),
      )),
      None => Ok(PathBuf::from(EXIFTOOL)),
    },
  }
}

/// Checks that `path` is a file, unless it is a bare name.
#[cfg_attr(feature = "native", allow(dead_code))]
fn check_exiftool_path(path: &Path) -> Result<(), &'static str> {
  let is_bare_name = path.parent().is_some_and(|p| p.as_os_str().is_empty());
  if !is_bare_name && !path.is_file() {
    return Err("ExifTool path is not a file.");
  }
  Ok(())
}
