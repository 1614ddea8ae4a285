// Copyright 2023-5 Seth Pendergrass. See LICENSE.

//! Reads descriptive metadata (title, artist, dates, format, ...) from media
//! files, either in-process or via `ExifTool`.

mod conv;
mod diagnostics;
mod error;
mod key;
mod metadata;
mod provider;

pub use conv::parse_date;
pub use diagnostics::{DiagnosticSink, LogSink};
pub use error::MetadataError;
pub use key::Key;
pub use metadata::{FetchState, Metadata};
pub use provider::{
  AssetItem, DefaultProvider, EXIFTOOL, ExifToolProvider, MetadataProvider, NativeProvider,
};

#[cfg(test)]
mod testing;
