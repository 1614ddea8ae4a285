// Copyright 2023-5 Seth Pendergrass. See LICENSE.

//! Reporting of non-fatal metadata errors.

use std::path::Path;

use crate::MetadataError;

/// Receives errors that getters absorb instead of returning. Each handle
/// reports a fetch failure at most once.
pub trait DiagnosticSink: Send + Sync {
  fn fetch_failed(&self, path: &Path, error: &MetadataError);
}

/// Forwards diagnostics to the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
  fn fetch_failed(&self, path: &Path, error: &MetadataError) {
    log::warn!("{}: Failed to get file metadata ({error}).", path.display());
  }
}
