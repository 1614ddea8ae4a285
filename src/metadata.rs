// Copyright 2023-5 Seth Pendergrass. See LICENSE.

//! Per-file metadata handle.

use std::{
  path::{Path, PathBuf},
  sync::{Arc, OnceLock},
};

use chrono::{DateTime, Utc};

use crate::{
  DefaultProvider, DiagnosticSink, Key, LogSink, MetadataError, MetadataProvider, conv,
};

/// Where a handle is in fetching its payload. A fetch in progress on another
/// thread reports as `Unfetched`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchState {
  Unfetched,
  Fetched,
  Failed,
}

/// Metadata for one file.
///
/// All metadata is read from the provider on the first getter call, then
/// cached for the life of the handle. If that read fails, it is reported once
/// to the diagnostics sink, and every getter returns `None` from then on.
/// Getters never fail.
pub struct Metadata<P: MetadataProvider = DefaultProvider> {
  path:     PathBuf,
  provider: P,
  sink:     Arc<dyn DiagnosticSink>,
  payload:  OnceLock<Result<P::Payload, MetadataError>>,
}

impl Metadata<DefaultProvider> {
  /// Creates a handle for `path` with the provider chosen at build time.
  ///
  /// # Errors
  ///
  /// `MetadataError::DependencyMissing` if the provider's runtime dependency
  /// is not installed.
  pub fn new(path: impl AsRef<Path>) -> Result<Self, MetadataError> {
    Self::with_provider(path, DefaultProvider::default())
  }
}

impl<P: MetadataProvider> Metadata<P> {
  /// Creates a handle for `path`, read with `provider`. Nothing is read until
  /// the first getter call.
  ///
  /// # Errors
  ///
  /// `MetadataError::DependencyMissing` if `provider`'s runtime dependency is
  /// not installed.
  pub fn with_provider(path: impl AsRef<Path>, provider: P) -> Result<Self, MetadataError> {
    provider.check_dependencies()?;

    Ok(Self {
      path: path.as_ref().to_owned(),
      provider,
      sink: Arc::new(LogSink),
      payload: OnceLock::new(),
    })
  }

  /// Reports fetch failures to `sink` instead of the log.
  #[must_use]
  pub fn with_sink(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
    self.sink = sink;
    self
  }

  pub fn path(&self) -> &Path {
    &self.path
  }

  pub fn fetch_state(&self) -> FetchState {
    match self.payload.get() {
      None => FetchState::Unfetched,
      Some(Ok(_)) => FetchState::Fetched,
      Some(Err(_)) => FetchState::Failed,
    }
  }

  /// The error the fetch failed with, if it has failed.
  pub fn fetch_error(&self) -> Option<&MetadataError> {
    self.payload.get().and_then(|p| p.as_ref().err())
  }

  /// Gets the string value of `key`, or `None` if it isn't available.
  pub fn get(&self, key: Key) -> Option<String> {
    if !self.provider.supports(key) {
      log::debug!(
        "{}: {key} is not supported by the {} provider.",
        self.path.display(),
        P::NAME
      );
      return None;
    }

    let payload = self.payload()?;

    match self.provider.lookup(payload, key) {
      Ok(value) => value,
      Err(e) => {
        log::debug!("{}: {e}.", self.path.display());
        None
      }
    }
  }

  /// Gets the value of `key` as a date & time, or `None` if it isn't available
  /// or isn't in `yyyy-MM-dd'T'HH:mm:ssZ` format.
  pub fn get_date(&self, key: Key) -> Option<DateTime<Utc>> {
    let date = self.get(key)?;

    conv::parse_date(&date)
      .inspect_err(|e| log::debug!("{}: {e}", self.path.display()))
      .ok()
  }

  pub fn title(&self) -> Option<String> {
    self.get(Key::Title)
  }

  pub fn creator(&self) -> Option<String> {
    self.get(Key::Creator)
  }

  pub fn subject(&self) -> Option<String> {
    self.get(Key::Subject)
  }

  pub fn description(&self) -> Option<String> {
    self.get(Key::Description)
  }

  pub fn publisher(&self) -> Option<String> {
    self.get(Key::Publisher)
  }

  pub fn contributor(&self) -> Option<String> {
    self.get(Key::Contributor)
  }

  pub fn creation_date(&self) -> Option<DateTime<Utc>> {
    self.get_date(Key::CreationDate)
  }

  /// Creation date, unparsed.
  pub fn creation_date_string(&self) -> Option<String> {
    self.get(Key::CreationDate)
  }

  pub fn last_modified_date(&self) -> Option<DateTime<Utc>> {
    self.get_date(Key::LastModifiedDate)
  }

  /// Last modified date, unparsed.
  pub fn last_modified_date_string(&self) -> Option<String> {
    self.get(Key::LastModifiedDate)
  }

  /// Kind of file (e.g. `JPEG`).
  pub fn file_type(&self) -> Option<String> {
    self.get(Key::Type)
  }

  /// MIME type.
  pub fn format(&self) -> Option<String> {
    self.get(Key::Format)
  }

  pub fn identifier(&self) -> Option<String> {
    self.get(Key::Identifier)
  }

  pub fn source(&self) -> Option<String> {
    self.get(Key::Source)
  }

  pub fn language(&self) -> Option<String> {
    self.get(Key::Language)
  }

  pub fn relation(&self) -> Option<String> {
    self.get(Key::Relation)
  }

  pub fn location(&self) -> Option<String> {
    self.get(Key::Location)
  }

  pub fn copyrights(&self) -> Option<String> {
    self.get(Key::Copyrights)
  }

  pub fn album(&self) -> Option<String> {
    self.get(Key::AlbumName)
  }

  pub fn author(&self) -> Option<String> {
    self.get(Key::Author)
  }

  pub fn artist(&self) -> Option<String> {
    self.get(Key::Artist)
  }

  /// Embedded picture. With `ExifTool` this is `base64:`-prefixed.
  pub fn artwork(&self) -> Option<String> {
    self.get(Key::Artwork)
  }

  pub fn make(&self) -> Option<String> {
    self.get(Key::Make)
  }

  pub fn model(&self) -> Option<String> {
    self.get(Key::Model)
  }

  pub fn software(&self) -> Option<String> {
    self.get(Key::Software)
  }

  /// Fetches the payload on first call. Concurrent callers wait for the one
  /// fetch in progress.
  fn payload(&self) -> Option<&P::Payload> {
    self
      .payload
      .get_or_init(|| {
        let payload = self.provider.fetch_payload(&self.path);
        if let Err(e) = &payload {
          self.sink.fetch_failed(&self.path, e);
        }
        payload
      })
      .as_ref()
      .ok()
  }
}
