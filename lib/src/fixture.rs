// sample-vcs - a sample version control provider
// Copyright (C) 2016, 2017 Matthias Beyer <mail@beyermatthias.de>
// Copyright (C) 2016, 2017 Julian Ganz <neither@nut.email>
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//

//! Fixture data
//!
//! The sample provider does not talk to any actual repository. Instead, it
//! serves the fixed set of folders, files and revisions defined here. The
//! tables are constructed once and never modified. Queries operate on copies.
//!

use chrono::{DateTime, TimeZone, Utc};

use file::{Action, File};
use folder::Folder;
use revision::Revision;

const AUTHOR: &'static str = "Fred Bloggs";


/// Folder hierarchy as `(parent key, key, name)`
///
/// Top level folders have an empty parent key.
///
const FOLDERS: &'static [(&'static str, &'static str, &'static str)] = &[
    ("", "test://Server/Root/Design",        "Design"),
    ("", "test://Server/Root/Development",   "Development"),
    ("", "test://Server/Root/Test",          "Test"),
    ("", "test://Server/Root/Documentation", "Documentation"),
    ("", "test://Server/Root/Training",      "Training"),
    ("test://Server/Root/Design", "test://Server/Root/Design/Business",  "Business Design"),
    ("test://Server/Root/Design", "test://Server/Root/Design/Technical", "Technical Design"),
    ("test://Server/Root/Documentation", "test://Server/Root/Documentation/EndUser",   "End User"),
    ("test://Server/Root/Documentation", "test://Server/Root/Documentation/Technical", "Technical"),
    ("test://Server/Root/Documentation/EndUser", "test://Server/Root/Documentation/EndUser/Presentations", "Presentations"),
    ("test://Server/Root/Documentation/EndUser", "test://Server/Root/Documentation/EndUser/Manuals",       "Manuals"),
];

/// Revisions as `(key, day of April 2017, hour, message, content changed,
/// properties changed)`
///
const REVISIONS: &'static [(&'static str, u32, u32, &'static str, bool, bool)] = &[
    ("0001",  3,  9, "Initial import of the data access component [RQ:1]", true, true),
    ("0002",  3, 15, "Added connection pooling to the data access component [RQ:2] [TK:4]", true, false),
    ("0003",  4, 10, "The artifact was changed in this version to fix the issue with the data access component", false, false),
    ("0004",  4, 16, "Fixed the null reference in the data access component [BG:007] [IN:42]", true, false),
    ("0005",  5, 11, "Updated the build scripts", false, false),
    ("0006",  6,  9, "Reworked the layout of the login page [RQ:12]", true, false),
    ("0007",  6, 17, "Fixed the login timeout [BG:8] [bg:9]", true, true),
    ("0008",  7, 10, "Added unit tests for the login page [TC:3]", true, true),
    ("0009", 10, 14, "Merged the reporting branch [RQ:15] [RQ:16]", true, true),
    ("0010", 11,  9, "Fixed the sorting of the report columns [BG:7]", true, true),
    ("0011", 11, 13, "Refactored the report generator", true, false),
    ("0012", 12, 10, "Translated the user manual [TK:10]", true, false),
    ("0013", 13, 11, "Set the ignore list of the build folder", false, true),
    ("0014", 13, 12, "Set line ending properties on the source files", false, true),
    ("0015", 14, 15, "Fixed the crash when exporting empty reports [BG:0010] [IN:43]", true, false),
    ("0016", 18,  9, "Release 1.0 [RL:1]", true, false),
];

/// Files as `(key, name, size, revision key, action)`
///
const FILES: &'static [(&'static str, &'static str, u64, &'static str, Action)] = &[
    ("test://Server/Root/Files/Filename1.ext",  "Document Filename1.doc",   100,  "0001", Action::Added),
    ("test://Server/Root/Files/Filename2.ext",  "Document Filename2.xls",   150,  "0002", Action::Added),
    ("test://Server/Root/Files/Filename3.ext",  "Document Filename3.docx",  180,  "0001", Action::Added),
    ("test://Server/Root/Files/Filename4.ext",  "Document Filename4.xlsx",  100,  "0004", Action::Deleted),
    ("test://Server/Root/Files/Filename5.ext",  "Document Filename5.ppt",   125,  "0001", Action::Other),
    ("test://Server/Root/Files/Filename6.ext",  "Document Filename6.txt",   20,   "0002", Action::Modified),
    ("test://Server/Root/Files/Filename7.ext",  "Document Filename7.ai",    1005, "0001", Action::Deleted),
    ("test://Server/Root/Files/Filename8.ext",  "Document Filename8.pdf",   87,   "0003", Action::Other),
    ("test://Server/Root/Files/Filename9.ext",  "Document Filename9.vsd",   100,  "0001", Action::Modified),
    ("test://Server/Root/Files/Filename10.ext", "Document Filename10.pptx", 105,  "0005", Action::Deleted),
    ("test://Server/Root/Files/Filename11.ext", "Document Filename11.htm",  75,   "0006", Action::Replaced),
    ("test://Server/Root/Files/Filename21.ext", "Document Filename21.cs",   100,  "0001", Action::Undefined),
    ("test://Server/Root/Files/Filename22.ext", "Document Filename22.vb",   150,  "0002", Action::Deleted),
    ("test://Server/Root/Files/Filename23.ext", "Document Filename23.cpp",  180,  "0001", Action::Undefined),
    ("test://Server/Root/Files/Filename24.ext", "Document Filename24.java", 100,  "0004", Action::Replaced),
    ("test://Server/Root/Files/Filename25.ext", "Document Filename25.pl",   125,  "0001", Action::Replaced),
    ("test://Server/Root/Files/Filename26.ext", "Document Filename26.php",  20,   "0002", Action::Replaced),
    ("test://Server/Root/Files/Filename27.ext", "Document Filename27.exe",  1005, "0001", Action::Modified),
    ("test://Server/Root/Files/Filename28.ext", "Document Filename28.rb",   87,   "0003", Action::Added),
    ("test://Server/Root/Files/Filename29.ext", "Document Filename29.aspx", 100,  "0001", Action::Modified),
    ("test://Server/Root/Files/Filename30.ext", "Document Filename30.asp",  105,  "0005", Action::Modified),
    ("test://Server/Root/Files/Filename31.ext", "Document Filename31.py",   75,   "0006", Action::Added),
];


fn timestamp(day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2017, 4, day, hour, 0, 0)
        .single()
        .expect("Fixture contains an invalid date")
}

lazy_static! {
    static ref REVISION_TABLE: Vec<Revision> = REVISIONS
        .iter()
        .map(|&(key, day, hour, message, content, properties)| Revision {
            key: key.to_owned(),
            name: format!("rev{}", key),
            author: AUTHOR.to_owned(),
            message: message.to_owned(),
            update_date: timestamp(day, hour),
            content_changed: content,
            properties_changed: properties,
        })
        .collect();

    static ref FILE_TABLE: Vec<File> = FILES
        .iter()
        .map(|&(key, name, size, revision_key, action)| {
            let revision = REVISION_TABLE
                .iter()
                .find(|revision| revision.key == revision_key)
                .expect("Fixture file refers to an unknown revision");
            File {
                key: key.to_owned(),
                name: name.to_owned(),
                size: size,
                author: AUTHOR.to_owned(),
                revision_key: revision.key.clone(),
                revision: revision.name.clone(),
                last_updated: revision.update_date,
                action: action,
            }
        })
        .collect();
}


/// All fixture revisions, ordered by key
///
pub fn revisions() -> Vec<Revision> {
    REVISION_TABLE.clone()
}

/// All fixture files, in fixture order
///
pub fn files() -> Vec<File> {
    FILE_TABLE.clone()
}

/// Folders directly below the given parent
///
/// An empty key denotes the top level. Unknown keys yield no folders.
///
pub fn child_folders(parent_key: &str) -> Vec<Folder> {
    FOLDERS
        .iter()
        .filter(|&&(parent, _, _)| parent == parent_key)
        .map(|&(_, key, name)| Folder::new(key, name))
        .collect()
}

/// Key of the folder containing the given folder
///
/// Returns `None` for unknown folders.
/// For top level folders, the empty string is returned.
///
pub fn parent_key(folder_key: &str) -> Option<&'static str> {
    FOLDERS
        .iter()
        .find(|&&(_, key, _)| key == folder_key)
        .map(|&(parent, _, _)| parent)
}


#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn revision_keys_are_unique() {
        let keys: HashSet<_> = revisions().into_iter().map(|r| r.key).collect();
        assert_eq!(keys.len(), 16);
    }

    #[test]
    fn file_keys_are_unique() {
        let keys: HashSet<_> = files().into_iter().map(|f| f.key).collect();
        assert_eq!(keys.len(), 22);
    }

    #[test]
    fn revisions_are_ordered_by_key() {
        let keys: Vec<_> = revisions().into_iter().map(|r| r.key).collect();
        let mut sorted = keys.clone();
        sorted.sort();
        assert_eq!(keys, sorted);
    }

    #[test]
    fn files_refer_to_revisions() {
        let revisions = revisions();
        for file in files() {
            let revision = revisions
                .iter()
                .find(|r| r.key == file.revision_key)
                .expect("Unknown revision");
            assert_eq!(file.revision, revision.name);
            assert_eq!(file.last_updated, revision.update_date);
        }
    }

    #[test]
    fn folders_are_consistent() {
        for &(parent, key, _) in FOLDERS {
            assert_eq!(parent_key(key), Some(parent));
            assert!(child_folders(parent).iter().any(|f| f.key == key));
        }
    }

    #[test]
    fn copies_are_independent() {
        let mut copy = revisions();
        copy[0].message.clear();
        assert!(!revisions()[0].message.is_empty());
    }
}
