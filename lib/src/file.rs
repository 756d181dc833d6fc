// sample-vcs - a sample version control provider
// Copyright (C) 2016, 2017 Matthias Beyer <mail@beyermatthias.de>
// Copyright (C) 2016, 2017 Julian Ganz <neither@nut.email>
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//

//! Files and file contents
//!

use chrono::{DateTime, Utc};
use std::cmp::Ordering;
use std::fmt::{self, Display, Formatter};
use std::io::{self, Cursor, Read};
use std::path::PathBuf;

use filter::{self, DateRange, Filter};
use sort::{Keyed, SortField};


/// Action performed on a file in its latest revision
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Action {
    Added,
    Modified,
    Deleted,
    Replaced,
    Other,
    Undefined,
}

impl Action {
    pub fn name(&self) -> &'static str {
        match *self {
            Action::Added     => "Added",
            Action::Modified  => "Modified",
            Action::Deleted   => "Deleted",
            Action::Replaced  => "Replaced",
            Action::Other     => "Other",
            Action::Undefined => "Undefined",
        }
    }
}

impl Display for Action {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}


/// File representation
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    pub key: String,
    pub name: String,
    pub size: u64,
    pub author: String,
    pub revision_key: String,
    pub revision: String,
    pub last_updated: DateTime<Utc>,
    pub action: Action,
}

impl Keyed for File {
    fn key(&self) -> &str {
        &self.key
    }
}


/// Fields by which file listings may be sorted
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileField {
    Name,
    Author,
    Revision,
    Size,
    LastUpdated,
    Action,
}

sort_field_names!(FileField {
    Name        => "Name",
    Author      => "Author",
    Revision    => "Revision",
    Size        => "Size",
    LastUpdated => "LastUpdated",
    Action      => "Action",
});

impl SortField for FileField {
    type Item = File;

    fn comparator(self) -> fn(&File, &File) -> Ordering {
        match self {
            FileField::Name        => |a, b| a.name.cmp(&b.name),
            FileField::Author      => |a, b| a.author.cmp(&b.author),
            FileField::Revision    => |a, b| a.revision.cmp(&b.revision),
            FileField::Size        => |a, b| a.size.cmp(&b.size),
            FileField::LastUpdated => |a, b| a.last_updated.cmp(&b.last_updated),
            FileField::Action      => |a, b| a.action.cmp(&b.action),
        }
    }
}


/// Filter specification for file listings
///
/// The `action` constraint matches against the name of the action, e.g.
/// `"ed"` matches `Added`, `Modified`, `Deleted` and `Replaced`.
///
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileFilter {
    pub name: Option<String>,
    pub size: Option<u64>,
    pub author: Option<String>,
    pub revision: Option<String>,
    pub action: Option<String>,
    pub last_updated: Option<DateRange>,
}

impl Filter<File> for FileFilter {
    fn matches(&self, file: &File) -> bool {
        filter::contains(&self.name, &file.name) &&
            filter::equals(&self.size, &file.size) &&
            filter::contains(&self.author, &file.author) &&
            filter::contains(&self.revision, &file.revision) &&
            filter::contains(&self.action, file.action.name()) &&
            self.last_updated.map(|range| range.contains(&file.last_updated)).unwrap_or(true)
    }
}


/// Contents of a file
///
/// A stream is obtained from a provider's `open_file()` and must be handed
/// back via the provider's `close_file()` instead of just being dropped, so
/// that a provider may release resources associated with it.
///
pub struct FileStream {
    pub file_key: String,
    pub revision_key: Option<String>,
    /// Path of a local copy, for hosts preferring filesystem access
    pub local_path: Option<PathBuf>,
    data: Box<Read + Send>,
}

impl FileStream {
    /// Create a stream serving the contents of a buffer
    ///
    pub fn from_memory(file_key: &str, revision_key: Option<&str>, data: Vec<u8>) -> Self {
        FileStream {
            file_key: file_key.to_owned(),
            revision_key: revision_key.map(String::from),
            local_path: None,
            data: Box::new(Cursor::new(data)),
        }
    }
}

impl Read for FileStream {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.data.read(buf)
    }
}

impl fmt::Debug for FileStream {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_struct("FileStream")
            .field("file_key", &self.file_key)
            .field("revision_key", &self.revision_key)
            .field("local_path", &self.local_path)
            .finish()
    }
}
