// Copyright 2023-5 Seth Pendergrass. See LICENSE.

//! Test-only utilities.

mod fakes;
mod test_dir;

use std::{fs, path::Path};

pub use fakes::*;
pub use test_dir::*;

pub use crate::{exif_json, test_dir, test_path};

/// Counts lines in `path`.
pub fn read_lines(path: impl AsRef<Path>) -> usize {
  fs::read_to_string(path).unwrap().lines().count()
}

pub fn type_of<T>(_: T) -> &'static str {
  std::any::type_name::<T>()
}

/// A WAV file with one empty data chunk, and no tags.
pub fn wav_without_tags() -> Vec<u8> {
  wav_with_info(&[])
}

/// A WAV file with one empty data chunk and a `LIST/INFO` chunk holding
/// `items` (e.g. `("INAM", "Title")`), in order. No `LIST` chunk if `items` is
/// empty.
pub fn wav_with_info(items: &[(&str, &str)]) -> Vec<u8> {
  let mut info = Vec::new();
  for (id, value) in items {
    assert_eq!(id.len(), 4);
    info.extend(id.as_bytes());
    info.extend(u32::try_from(value.len()).unwrap().to_le_bytes());
    info.extend(value.as_bytes());
    if value.len() % 2 == 1 {
      info.push(0); // Pad.
    }
  }

  let mut list = Vec::new();
  if !info.is_empty() {
    list.extend(b"LIST");
    list.extend(u32::try_from(info.len() + 4).unwrap().to_le_bytes());
    list.extend(b"INFO");
    list.extend(info);
  }

  let mut wav = Vec::new();
  wav.extend(b"RIFF");
  wav.extend(u32::try_from(36 + list.len()).unwrap().to_le_bytes());
  wav.extend(b"WAVE");

  wav.extend(b"fmt ");
  wav.extend(16_u32.to_le_bytes());
  wav.extend(1_u16.to_le_bytes()); // PCM.
  wav.extend(1_u16.to_le_bytes()); // Channels.
  wav.extend(8000_u32.to_le_bytes()); // Sample rate.
  wav.extend(16000_u32.to_le_bytes()); // Byte rate.
  wav.extend(2_u16.to_le_bytes()); // Block align.
  wav.extend(16_u16.to_le_bytes()); // Bits per sample.

  wav.extend(list);

  wav.extend(b"data");
  wav.extend(0_u32.to_le_bytes());
  wav
}

/// Builds `ExifTool` `-j` output for a single file.
#[macro_export]
macro_rules! exif_json {
  ($($key:literal: $value:tt),* $(,)?) => {
    serde_json::to_vec(&serde_json::json!([{
      "SourceFile": "-",
      $(
        $key: $value,
      )*
    }]))
    .unwrap()
  }
}
