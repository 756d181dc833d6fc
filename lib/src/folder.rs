// sample-vcs - a sample version control provider
// Copyright (C) 2016, 2017 Matthias Beyer <mail@beyermatthias.de>
// Copyright (C) 2016, 2017 Julian Ganz <neither@nut.email>
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//

//! Folders
//!
//! Folders are identified by URI-like keys, e.g. `test://Server/Root/Design`.
//! A folder's name as well as the folder containing a file are derived from
//! the path segments of such a key.
//!

use std::fmt::{self, Display, Formatter};
use url::{Position, Url};

use error::ErrorKind as EK;
use error::*;

/// Key of the folder containing everything
///
pub const ROOT_KEY: &'static str = "test://";

/// Name of the folder containing everything
///
pub const ROOT_NAME: &'static str = "Root Folder";


/// Folder representation
///
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Folder {
    pub key: String,
    pub name: String,
}

impl Folder {
    pub fn new<K, N>(key: K, name: N) -> Self
        where K: Into<String>,
              N: Into<String>
    {
        Folder { key: key.into(), name: name.into() }
    }

    /// The root folder
    ///
    pub fn root() -> Self {
        Folder::new(ROOT_KEY, ROOT_NAME)
    }

    /// Construct a folder from its key
    ///
    /// The name of the folder is the last segment of the key's path.
    ///
    pub fn from_key(key: &str) -> Result<Self> {
        let not_found = || EK::ArtifactNotFound("folder", key.to_owned());

        let url = Url::parse(key).chain_err(&not_found)?;
        let name = segments(url.path())
            .last()
            .map(|segment| segment.trim_end_matches('/'))
            .filter(|segment| !segment.is_empty())
            .ok_or_else(|| Error::from_kind(not_found()))?
            .to_owned();

        Ok(Folder { key: key.to_owned(), name: name })
    }

    /// Construct the folder containing a file
    ///
    /// The key of the folder is the key of the file without the last path
    /// segment, but including the trailing separator. For keys with less than
    /// two path segments the root folder is returned.
    ///
    pub fn containing(file_key: &str) -> Result<Self> {
        let url = Url::parse(file_key)
            .chain_err(|| EK::ArtifactNotFound("file", file_key.to_owned()))?;
        let segments = segments(url.path());

        if segments.len() < 2 {
            return Ok(Folder::root());
        }

        let parents = &segments[..segments.len() - 1];
        let name = parents[parents.len() - 1].trim_matches('/');
        let key = parents
            .iter()
            .fold(String::from(&url[..Position::BeforePath]), |key, segment| key + *segment);

        Ok(Folder::new(key, name))
    }
}

impl Display for Folder {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.key)
    }
}


/// Split a path into segments
///
/// Every segment but the last retains its trailing separator, e.g. the path
/// `/Root/Files/a.ext` is split into `/`, `Root/`, `Files/` and `a.ext`.
///
fn segments(path: &str) -> Vec<&str> {
    path.split_inclusive('/').collect()
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_segments() {
        assert_eq!(segments("/Root/Files/a.ext"), vec!["/", "Root/", "Files/", "a.ext"]);
        assert_eq!(segments("/Root/Files/"), vec!["/", "Root/", "Files/"]);
        assert!(segments("").is_empty());
    }

    #[test]
    fn folder_from_key() {
        let folder = Folder::from_key("test://Server/Root/Design").expect("Could not parse key");
        assert_eq!(folder.name, "Design");
        assert_eq!(folder.key, "test://Server/Root/Design");
    }

    #[test]
    fn folder_from_key_with_separator() {
        let folder = Folder::from_key("test://Server/Root/Files/").expect("Could not parse key");
        assert_eq!(folder.name, "Files");
    }

    #[test]
    fn folder_from_malformed_key() {
        for key in &["Design", "", "test://Server"] {
            let err = Folder::from_key(key).expect_err("Malformed key was accepted");
            assert!(err.is_not_found());
        }
    }

    #[test]
    fn folder_containing_file() {
        let folder = Folder::containing("test://Server/Root/Files/Filename1.ext")
            .expect("Could not parse key");
        assert_eq!(folder.name, "Files");
        assert_eq!(folder.key, "test://Server/Root/Files/");
    }

    #[test]
    fn folder_containing_top_level_file() {
        assert_eq!(Folder::containing("test://Server").expect("Could not parse key"), Folder::root());
    }

    #[test]
    fn folder_containing_malformed_key() {
        assert!(Folder::containing("Filename1.ext").is_err());
    }
}
