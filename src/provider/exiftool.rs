// Copyright 2023-5 Seth Pendergrass. See LICENSE.

//! Provider backed by the `ExifTool` executable.

use std::{
  collections::HashMap,
  path::{self, Path, PathBuf},
  process::Command,
  sync::{Arc, OnceLock},
};

use serde_json::{Map, Value};

use super::MetadataProvider;
use crate::{Key, MetadataError};

/// Default `ExifTool` executable, resolved through `PATH`.
pub const EXIFTOOL: &str = "exiftool";

/// Extract all tags, including binary ones, as a JSON array with one object per
/// file.
const READ_ARGS: [&str; 3] = ["-b", "-All", "-j"];

// Tag name, compact JSON tag name, required.
const TAGS: [(&str, &str, bool); 8] = [
  ("Title", "Title", true),
  ("MIME Type", "MIMEType", true),
  ("Copyright", "Copyright", false),
  ("Date/Time Original", "DateTimeOriginal", false),
  ("File Type", "FileType", false),
  ("Album", "Album", false),
  ("Artist", "Artist", false),
  ("Picture", "Picture", false),
];

#[cfg(target_os = "linux")]
const INSTALL_HELP: &str =
  "On Ubuntu systems, try installing the 'libimage-exiftool-perl' package.";
#[cfg(target_os = "macos")]
const INSTALL_HELP: &str = "Try installing it with `brew install exiftool`.";
#[cfg(not(any(target_os = "linux", target_os = "macos")))]
const INSTALL_HELP: &str = "Download it from <https://exiftool.org/> and add it to PATH.";

/// Reads metadata by running `exiftool -b -All -j <file>`.
///
/// The dependency check runs once, and its result is shared by all clones.
#[derive(Debug, Clone)]
pub struct ExifToolProvider {
  program: PathBuf,
  checked: Arc<OnceLock<Result<(), MetadataError>>>,
}

impl ExifToolProvider {
  /// Uses the `ExifTool` at `program`, which is looked up in `PATH` if it is
  /// a bare name.
  pub fn new(program: impl Into<PathBuf>) -> Self {
    Self {
      program: program.into(),
      checked: Arc::default(),
    }
  }

  pub fn program(&self) -> &Path {
    &self.program
  }

  /// Run `ExifTool` on `file`, returning stdout.
  fn run(&self, file: &Path) -> Result<Vec<u8>, MetadataError> {
    let mut cmd = Command::new(&self.program);
    cmd.args(READ_ARGS).arg(file);

    log::debug!("{}: Reading metadata with ExifTool.", file.display());

    // Drains stdout and stderr together, then waits for exit.
    let output = cmd
      .output()
      .map_err(|e| MetadataError::FetchFailed(format!("ExifTool failed to run ({e}).")))?;
    log::trace!(
      "ExifTool output:\n{}",
      String::from_utf8_lossy(&output.stdout)
    );

    if !output.status.success() {
      let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
      return Err(MetadataError::FetchFailed(if stderr.is_empty() {
        format!("ExifTool did not run successfully ({}).", output.status)
      } else {
        stderr
      }));
    }

    if output.stdout.iter().all(u8::is_ascii_whitespace) {
      return Err(MetadataError::FetchFailed(
        "File does not contain any metadata".to_string(),
      ));
    }

    Ok(output.stdout)
  }

  /// Runs `ExifTool -ver`.
  fn check_version(&self) -> Result<(), MetadataError> {
    let missing = || MetadataError::DependencyMissing {
      dependency: EXIFTOOL.to_string(),
      help_text:  INSTALL_HELP.to_string(),
    };

    let output = Command::new(&self.program)
      .arg("-ver")
      .output()
      .map_err(|e| {
        log::debug!("{}: Failed to run ({e}).", self.program.display());
        missing()
      })?;

    if !output.status.success() {
      log::debug!(
        "{}: Version check exited with {}.",
        self.program.display(),
        output.status
      );
      return Err(missing());
    }

    log::debug!(
      "Found ExifTool {} at {}.",
      String::from_utf8_lossy(&output.stdout).trim(),
      self.program.display()
    );
    Ok(())
  }
}

impl Default for ExifToolProvider {
  fn default() -> Self {
    Self::new(EXIFTOOL)
  }
}

impl MetadataProvider for ExifToolProvider {
  type Payload = HashMap<String, String>;

  const NAME: &'static str = "ExifTool";

  fn check_dependencies(&self) -> Result<(), MetadataError> {
    self.checked.get_or_init(|| self.check_version()).clone()
  }

  fn fetch_payload(&self, path: &Path) -> Result<Self::Payload, MetadataError> {
    let file = path::absolute(path).map_err(|e| {
      MetadataError::FetchFailed(format!("{}: Path failed to resolve ({e}).", path.display()))
    })?;

    parse_output(self.run(&file)?)
  }

  fn lookup(&self, payload: &Self::Payload, key: Key) -> Result<Option<String>, MetadataError> {
    let tag = tag_for(key).ok_or_else(|| self.unsupported(key))?;

    payload
      .get(tag)
      .cloned()
      .map(Some)
      .ok_or_else(|| MetadataError::KeyMissing(tag.to_string()))
  }

  fn supports(&self, key: Key) -> bool {
    tag_for(key).is_some()
  }
}

/// Parses `ExifTool`'s JSON output into the tags backing supported keys.
///
/// # Errors
///
/// `MetadataError::FetchFailed` if the output isn't a JSON array of objects,
/// is empty, or lacks a required tag.
pub fn parse_output(stdout: impl AsRef<[u8]>) -> Result<HashMap<String, String>, MetadataError> {
  let mut files = serde_json::from_slice::<Vec<Map<String, Value>>>(stdout.as_ref())
    .map_err(|e| MetadataError::FetchFailed(format!("Failed to parse ExifTool output ({e}).")))?;

  if files.is_empty() {
    return Err(MetadataError::FetchFailed(
      "ExifTool output did not contain any files.".to_string(),
    ));
  }
  // Only ever one file per run.
  let file = files.swap_remove(0);

  let mut tags = HashMap::new();
  for (name, compact_name, required) in TAGS {
    let value = file
      .get(name)
      .or_else(|| file.get(compact_name))
      .and_then(value_to_string);

    match value {
      Some(value) => {
        tags.insert(name.to_string(), value);
      }
      None if required => {
        return Err(MetadataError::FetchFailed(format!(
          "ExifTool output is missing required tag `{name}`."
        )));
      }
      None => {}
    }
  }

  Ok(tags)
}

/// `ExifTool` tag backing `key`, if any.
fn tag_for(key: Key) -> Option<&'static str> {
  match key {
    Key::Title => Some("Title"),
    Key::Publisher | Key::Copyrights => Some("Copyright"),
    Key::CreationDate => Some("Date/Time Original"),
    Key::Type => Some("File Type"),
    Key::Format => Some("MIME Type"),
    Key::AlbumName => Some("Album"),
    Key::Artist => Some("Artist"),
    Key::Artwork => Some("Picture"),
    Key::Creator
    | Key::Subject
    | Key::Description
    | Key::Contributor
    | Key::LastModifiedDate
    | Key::Identifier
    | Key::Source
    | Key::Language
    | Key::Relation
    | Key::Location
    | Key::Author
    | Key::Make
    | Key::Model
    | Key::Software => None,
  }
}

fn value_to_string(value: &Value) -> Option<String> {
  match value {
    // Lists, e.g. multiple artists.
    Value::Array(values) if !values.is_empty() => values
      .iter()
      .map(scalar_to_string)
      .collect::<Option<Vec<_>>>()
      .map(|v| v.join(", ")),
    value => scalar_to_string(value),
  }
}

fn scalar_to_string(value: &Value) -> Option<String> {
  match value {
    Value::String(s) => Some(s.clone()),
    Value::Number(_) | Value::Bool(_) => Some(value.to_string()),
    Value::Null | Value::Array(_) | Value::Object(_) => None,
  }
}
