// Copyright 2023-5 Seth Pendergrass. See LICENSE.

//! Backend-independent metadata keys.

use std::fmt::{self, Display, Formatter};

use clap::ValueEnum;
use serde::Serialize;

/// Common metadata keys, shared by every provider. Each provider maps these to
/// its own key space (see `MetadataProvider::supports`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, ValueEnum)]
#[serde(rename_all = "PascalCase")]
pub enum Key {
  Title,
  Creator,
  Subject,
  Description,
  Publisher,
  Contributor,
  CreationDate,
  LastModifiedDate,
  Type,
  Format,
  Identifier,
  Source,
  Language,
  Relation,
  Location,
  Copyrights,
  AlbumName,
  Author,
  Artist,
  Artwork,
  Make,
  Model,
  Software,
}

impl Key {
  pub const ALL: [Key; 23] = [
    Key::Title,
    Key::Creator,
    Key::Subject,
    Key::Description,
    Key::Publisher,
    Key::Contributor,
    Key::CreationDate,
    Key::LastModifiedDate,
    Key::Type,
    Key::Format,
    Key::Identifier,
    Key::Source,
    Key::Language,
    Key::Relation,
    Key::Location,
    Key::Copyrights,
    Key::AlbumName,
    Key::Author,
    Key::Artist,
    Key::Artwork,
    Key::Make,
    Key::Model,
    Key::Software,
  ];

  pub fn name(self) -> &'static str {
    match self {
      Key::Title => "Title",
      Key::Creator => "Creator",
      Key::Subject => "Subject",
      Key::Description => "Description",
      Key::Publisher => "Publisher",
      Key::Contributor => "Contributor",
      Key::CreationDate => "CreationDate",
      Key::LastModifiedDate => "LastModifiedDate",
      Key::Type => "Type",
      Key::Format => "Format",
      Key::Identifier => "Identifier",
      Key::Source => "Source",
      Key::Language => "Language",
      Key::Relation => "Relation",
      Key::Location => "Location",
      Key::Copyrights => "Copyrights",
      Key::AlbumName => "AlbumName",
      Key::Author => "Author",
      Key::Artist => "Artist",
      Key::Artwork => "Artwork",
      Key::Make => "Make",
      Key::Model => "Model",
      Key::Software => "Software",
    }
  }

  /// Whether this key holds a date & time string.
  pub fn is_date(self) -> bool {
    matches!(self, Key::CreationDate | Key::LastModifiedDate)
  }
}

impl Display for Key {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    write!(f, "{}", self.name())
  }
}
