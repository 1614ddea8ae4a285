// Copyright 2023-5 Seth Pendergrass. See LICENSE.

//! Stand-ins for providers, sinks and `ExifTool`.

#[cfg(unix)]
use std::path::PathBuf;
use std::{
  collections::HashMap,
  path::Path,
  sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
  },
  thread,
  time::Duration,
};

#[cfg(unix)]
use super::TestDir;
use crate::{DiagnosticSink, Key, MetadataError, MetadataProvider};

/// Number of times a `FakeProvider` has fetched.
#[derive(Clone, Default)]
pub struct FetchCounter(Arc<AtomicUsize>);

impl FetchCounter {
  pub fn get(&self) -> usize {
    self.0.load(Ordering::SeqCst)
  }
}

/// Provider answering from a fixed set of tags, counting fetches.
pub struct FakeProvider {
  fetches:    FetchCounter,
  payload:    Result<HashMap<Key, String>, MetadataError>,
  delay:      Duration,
  dependency: bool,
}

impl FakeProvider {
  /// The one key this provider never supports.
  pub const UNSUPPORTED: Key = Key::Make;

  pub fn with_tags<const N: usize>(tags: [(Key, &str); N]) -> Self {
    Self {
      fetches:    FetchCounter::default(),
      payload:    Ok(tags.map(|(k, v)| (k, v.to_string())).into()),
      delay:      Duration::ZERO,
      dependency: true,
    }
  }

  pub fn failing(error: &str) -> Self {
    Self {
      payload: Err(MetadataError::FetchFailed(error.to_string())),
      ..Self::with_tags([])
    }
  }

  pub fn missing_dependency(self) -> Self {
    Self {
      dependency: false,
      ..self
    }
  }

  pub fn slow(self, delay: Duration) -> Self {
    Self { delay, ..self }
  }

  pub fn fetches(&self) -> FetchCounter {
    self.fetches.clone()
  }
}

impl MetadataProvider for FakeProvider {
  type Payload = HashMap<Key, String>;

  const NAME: &'static str = "fake";

  fn check_dependencies(&self) -> Result<(), MetadataError> {
    if self.dependency {
      Ok(())
    } else {
      Err(MetadataError::DependencyMissing {
        dependency: "fake".to_string(),
        help_text:  "Install it.".to_string(),
      })
    }
  }

  fn fetch_payload(&self, _path: &Path) -> Result<Self::Payload, MetadataError> {
    self.fetches.0.fetch_add(1, Ordering::SeqCst);
    thread::sleep(self.delay);
    self.payload.clone()
  }

  fn lookup(&self, payload: &Self::Payload, key: Key) -> Result<Option<String>, MetadataError> {
    if !self.supports(key) {
      return Err(self.unsupported(key));
    }
    payload
      .get(&key)
      .cloned()
      .map(Some)
      .ok_or_else(|| MetadataError::KeyMissing(key.to_string()))
  }

  fn supports(&self, key: Key) -> bool {
    key != Self::UNSUPPORTED
  }
}

/// Keeps every reported error.
#[derive(Default)]
pub struct MemorySink {
  errors: Mutex<Vec<MetadataError>>,
}

impl MemorySink {
  pub fn errors(&self) -> Vec<MetadataError> {
    self.errors.lock().unwrap().clone()
  }
}

impl DiagnosticSink for MemorySink {
  fn fetch_failed(&self, _path: &Path, error: &MetadataError) {
    self.errors.lock().unwrap().push(error.clone());
  }
}

/// Writes a stand-in `ExifTool` under `dir` that passes the version check and
/// otherwise runs `body`.
#[cfg(unix)]
pub fn fake_exiftool(dir: &TestDir, body: &str) -> PathBuf {
  dir.script(
    "exiftool",
    &format!("if [ \"$1\" = \"-ver\" ]; then echo 13.29; exit 0; fi\n{body}"),
  )
}
