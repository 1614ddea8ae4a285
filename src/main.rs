//! Prints descriptive metadata for media files.
//!
//! Copyright 2023-5 Seth Pendergrass. See LICENSE.

use std::path::PathBuf;

use clap::{ArgAction, Parser};
use metadata_1a::{DefaultProvider, Key, Metadata, MetadataProvider};
use serde_json::{Map, Value};

mod setup;

#[derive(Parser)]
struct Args {
  /// Path to `ExifTool`, or a name to look up in `PATH`. Updates default in
  /// `XDG_CONFIG_HOME`.
  #[arg(short)]
  exiftool: Option<PathBuf>,

  /// Verbosity level. Max: 2.
  #[arg(short, action = ArgAction::Count)]
  verbose: u8,

  /// Key to print. Repeatable. Default: all but Artwork.
  #[arg(short, long = "key", value_enum)]
  keys: Vec<Key>,

  /// Print as a JSON array, one object per file.
  #[arg(long)]
  json: bool,

  /// Media files to read.
  #[arg(required = true)]
  paths: Vec<PathBuf>,
}

fn main() {
  let args = Args::parse();
  setup::configure_logging(args.verbose);

  let provider = match make_provider(args.exiftool) {
    Ok(provider) => provider,
    Err(e) => {
      log::error!("{e}");
      std::process::exit(1);
    }
  };
  if let Err(e) = provider.check_dependencies() {
    log::error!("{e}");
    std::process::exit(1);
  }

  let keys = if args.keys.is_empty() {
    Key::ALL
      .into_iter()
      .filter(|k| *k != Key::Artwork)
      .collect()
  } else {
    args.keys
  };

  let mut reports = Vec::new();
  for path in &args.paths {
    let metadata = match Metadata::with_provider(path, provider.clone()) {
      Ok(metadata) => metadata,
      Err(e) => {
        log::error!("{e}");
        std::process::exit(1);
      }
    };

    if args.json {
      reports.push(Value::Object(to_json(&metadata, &keys)));
    } else {
      if args.paths.len() > 1 {
        println!("======== {}", path.display());
      }
      for key in &keys {
        if let Some(value) = value_of(&metadata, *key) {
          println!("{key}\t{value}");
        }
      }
    }
  }

  if args.json {
    match serde_json::to_string_pretty(&reports) {
      Ok(json) => println!("{json}"),
      Err(e) => {
        log::error!("Failed to serialize metadata ({e}).");
        std::process::exit(1);
      }
    }
  }
}

#[cfg(not(feature = "native"))]
fn make_provider(exiftool: Option<PathBuf>) -> Result<DefaultProvider, &'static str> {
  let provider = DefaultProvider::new(setup::get_or_update_exiftool(exiftool)?);
  log::debug!("Using ExifTool at {}.", provider.program().display());
  Ok(provider)
}

#[cfg(feature = "native")]
fn make_provider(exiftool: Option<PathBuf>) -> Result<DefaultProvider, &'static str> {
  if exiftool.is_some() {
    log::warn!("Built with the native provider. Ignoring ExifTool path.");
  }
  Ok(DefaultProvider::default())
}

fn to_json(metadata: &Metadata<DefaultProvider>, keys: &[Key]) -> Map<String, Value> {
  let mut object = Map::new();
  object.insert(
    "SourceFile".to_string(),
    Value::from(metadata.path().display().to_string()),
  );
  for key in keys {
    if let Some(value) = value_of(metadata, *key) {
      object.insert(key.to_string(), Value::from(value));
    }
  }
  object
}

/// Value of `key` for printing. Dates in the expected format are printed in
/// RFC 3339 UTC, others as found.
fn value_of(metadata: &Metadata<DefaultProvider>, key: Key) -> Option<String> {
  if key.is_date() {
    if let Some(date) = metadata.get_date(key) {
      return Some(date.to_rfc3339());
    }
  }
  metadata.get(key)
}
