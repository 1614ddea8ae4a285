// Copyright 2023-5 Seth Pendergrass. See LICENSE.

//! Helper for setting up test directories.

use std::{
  env, fs,
  path::{Path, PathBuf},
  sync::LazyLock,
};

static TEST_ROOT: LazyLock<PathBuf> =
  LazyLock::new(|| env::temp_dir().join(format!("{}_tests", env!("CARGO_PKG_NAME"))));

/// Empty directory per test, for tests needing actual files. Note: Prefer
/// using `test_dir!()` macro.
pub struct TestDir {
  root: PathBuf,
}

impl TestDir {
  pub fn new(test_path: PathBuf) -> Self {
    let root_rel = TEST_ROOT.join(test_path);
    if root_rel.exists() {
      fs::remove_dir_all(&root_rel).unwrap();
    }
    fs::create_dir_all(&root_rel).unwrap();

    Self {
      root: root_rel.canonicalize().unwrap(),
    }
  }

  pub fn get_path(&self, file: impl AsRef<Path>) -> PathBuf {
    self.root.join(file)
  }

  /// Writes an executable shell script named `name` running `body`.
  #[cfg(unix)]
  pub fn script(&self, name: &str, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = self.get_path(name);
    fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
  }
}

#[macro_export]
macro_rules! test_path {
  () => {{
    // HACK: Get module hierarchy for caller.
    let mut function = $crate::testing::type_of(|| ()).rsplit("::");
    // 0th element is `{closure}`.
    let case = function.nth(1).unwrap();
    let suite = function.next().unwrap();
    let module = function.next().unwrap();

    std::path::PathBuf::from(format!("{module}/{suite}/{case}"))
  }};
}

#[macro_export]
macro_rules! test_dir {
  () => {{ TestDir::new(test_path!()) }};
}
