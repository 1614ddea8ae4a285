// Copyright 2023-5 Seth Pendergrass. See LICENSE.

//! Backends that read the raw metadata for a file.

mod exiftool;
mod native;

use std::path::Path;

pub use exiftool::*;
pub use native::*;

use crate::{Key, MetadataError};

/// Provider used by `Metadata::new`, chosen at build time by the `native`
/// feature.
#[cfg(feature = "native")]
pub type DefaultProvider = NativeProvider;

/// Provider used by `Metadata::new`, chosen at build time by the `native`
/// feature.
#[cfg(not(feature = "native"))]
pub type DefaultProvider = ExifToolProvider;

/// Fetches all metadata for a file once, then answers key lookups against it.
pub trait MetadataProvider {
  /// Everything the provider extracted from one file.
  type Payload;

  /// Name used in errors and logs.
  const NAME: &'static str;

  /// Checks that anything needed at runtime is installed.
  ///
  /// # Errors
  ///
  /// `MetadataError::DependencyMissing` if not.
  fn check_dependencies(&self) -> Result<(), MetadataError>;

  /// Reads all metadata for `path`.
  ///
  /// # Errors
  ///
  /// `MetadataError::FetchFailed` if no metadata could be read.
  fn fetch_payload(&self, path: &Path) -> Result<Self::Payload, MetadataError>;

  /// Gets the value for `key` from `payload`. `Ok(None)` means the key is
  /// present but has no string value.
  ///
  /// # Errors
  ///
  /// `MetadataError::KeyMissing` if `payload` lacks `key`, or
  /// `MetadataError::Unsupported` if this provider has no mapping for it.
  fn lookup(&self, payload: &Self::Payload, key: Key) -> Result<Option<String>, MetadataError>;

  /// Whether this provider can ever return a value for `key`.
  fn supports(&self, key: Key) -> bool;

  /// Error for lookups of keys this provider doesn't map.
  fn unsupported(&self, key: Key) -> MetadataError {
    MetadataError::Unsupported {
      key,
      provider: Self::NAME,
    }
  }
}
