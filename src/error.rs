// Copyright 2023-5 Seth Pendergrass. See LICENSE.

//! Errors shared by all metadata providers.

use thiserror::Error;

use crate::Key;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MetadataError {
  /// A tool the provider needs at runtime could not be found. Raised when the
  /// handle is constructed.
  #[error("Missing dependency `{dependency}`. {help_text}")]
  DependencyMissing {
    dependency: String,
    help_text:  String,
  },

  /// The provider could not produce any metadata for the file.
  #[error("Could not get metadata: {0}")]
  FetchFailed(String),

  /// Metadata was read, but it does not contain the key.
  #[error("Missing metadata key `{0}`")]
  KeyMissing(String),

  /// The provider has no mapping for this key.
  #[error("`{key}` is not supported by the {provider} provider")]
  Unsupported { key: Key, provider: &'static str },
}
