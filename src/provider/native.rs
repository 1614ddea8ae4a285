// Copyright 2023-5 Seth Pendergrass. See LICENSE.

//! Provider that reads tags in-process with `lofty`.

use std::path::Path;

use lofty::{
  config::ParseOptions,
  file::TaggedFileExt,
  probe::Probe,
  tag::{ItemKey, ItemValue},
};

use super::MetadataProvider;
use crate::{Key, MetadataError};

/// One metadata item read from a file's tags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetItem {
  pub key:   ItemKey,
  /// `None` for binary values.
  pub value: Option<String>,
}

impl AssetItem {
  pub fn new(key: ItemKey, value: Option<&str>) -> Self {
    Self {
      key,
      value: value.map(str::to_string),
    }
  }
}

/// Reads the tags embedded in the file itself. Needs nothing installed.
#[derive(Debug, Default, Clone, Copy)]
pub struct NativeProvider;

impl MetadataProvider for NativeProvider {
  type Payload = Vec<AssetItem>;

  const NAME: &'static str = "native";

  fn check_dependencies(&self) -> Result<(), MetadataError> {
    Ok(())
  }

  fn fetch_payload(&self, path: &Path) -> Result<Self::Payload, MetadataError> {
    log::debug!("{}: Reading tags.", path.display());

    let failed =
      |e: lofty::error::LoftyError| MetadataError::FetchFailed(format!("{}: {e}", path.display()));

    let tagged_file = Probe::open(path)
      .map_err(failed)?
      .options(ParseOptions::new().read_properties(false))
      .read()
      .map_err(failed)?;

    // Items from every tag type, in file order.
    let items = tagged_file
      .tags()
      .iter()
      .flat_map(|tag| tag.items())
      .map(|item| {
        let value = match item.value() {
          ItemValue::Text(text) | ItemValue::Locator(text) => Some(text.clone()),
          ItemValue::Binary(_) => None,
        };
        AssetItem {
          key: item.key().clone(),
          value,
        }
      })
      .collect::<Vec<_>>();

    if items.is_empty() {
      return Err(MetadataError::FetchFailed(format!(
        "{}: File has no common metadata.",
        path.display()
      )));
    }

    Ok(items)
  }

  fn lookup(&self, payload: &Self::Payload, key: Key) -> Result<Option<String>, MetadataError> {
    let item_key = item_key_for(key).ok_or_else(|| self.unsupported(key))?;

    payload
      .iter()
      .find(|item| item.key == item_key)
      .map(|item| item.value.clone())
      .ok_or_else(|| MetadataError::KeyMissing(format!("{item_key:?}")))
  }

  fn supports(&self, key: Key) -> bool {
    item_key_for(key).is_some()
  }
}

/// `lofty` item key backing `key`, if any.
fn item_key_for(key: Key) -> Option<ItemKey> {
  match key {
    Key::Title => Some(ItemKey::TrackTitle),
    Key::Creator => Some(ItemKey::Composer),
    Key::Subject => Some(ItemKey::Genre),
    Key::Description => Some(ItemKey::Description),
    Key::Publisher => Some(ItemKey::Publisher),
    Key::Contributor => Some(ItemKey::Performer),
    Key::CreationDate => Some(ItemKey::RecordingDate),
    Key::Identifier => Some(ItemKey::Isrc),
    Key::Language => Some(ItemKey::Language),
    Key::Copyrights => Some(ItemKey::CopyrightMessage),
    Key::AlbumName => Some(ItemKey::AlbumTitle),
    Key::Author => Some(ItemKey::Writer),
    Key::Artist => Some(ItemKey::TrackArtist),
    Key::Software => Some(ItemKey::EncoderSoftware),
    Key::LastModifiedDate
    | Key::Type
    | Key::Format
    | Key::Source
    | Key::Relation
    | Key::Location
    | Key::Artwork
    | Key::Make
    | Key::Model => None,
  }
}
