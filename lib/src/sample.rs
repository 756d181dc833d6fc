// sample-vcs - a sample version control provider
// Copyright (C) 2016, 2017 Matthias Beyer <mail@beyermatthias.de>
// Copyright (C) 2016, 2017 Julian Ganz <neither@nut.email>
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//

//! The sample provider
//!
//! `SampleProvider` serves the fixture data. It illustrates the shape of a
//! provider rather than the behaviour of a real one: listings ignore the
//! folder or revision they are asked for, and the revisions of a file are
//! just a slightly altered list of all revisions.
//!

use fixture;
use file::{File, FileField, FileFilter, FileStream};
use filter::Filter;
use folder::Folder;
use provider::VersionControlProvider;
use revision::{Revision, RevisionField, RevisionFilter};
use session::{Credentials, Parameters, Session};
use sort::SortOrder;

use error::ErrorKind as EK;
use error::*;

/// Contents served for the latest revision of any file
///
pub const LATEST_CONTENTS: &'static str = "Latest Revision";

/// Contents served for a specific revision of any file
///
pub const SPECIFIC_CONTENTS: &'static str = "Specific Revision";


/// Provider serving fixture data
///
#[derive(Debug, Default, Clone, Copy)]
pub struct SampleProvider;

impl SampleProvider {
    pub fn new() -> Self {
        SampleProvider
    }
}

impl VersionControlProvider for SampleProvider {
    fn initialize(&self,
                  connection: &str,
                  credentials: &Credentials,
                  parameters: &Parameters
    ) -> Result<Session> {
        debug!("Connecting to '{}' as '{}'", connection, credentials.user);
        for (key, value) in parameters.values.iter() {
            debug!("Ignoring parameter {}={}", key, value);
        }
        for (num, value) in parameters.custom.iter().enumerate() {
            if let Some(ref value) = *value {
                debug!("Ignoring custom field {}: {}", num + 1, value);
            }
        }
        Session::authenticate(connection, credentials)
    }

    fn folder(&self, session: &Session, folder_key: &str) -> Result<Folder> {
        session.verify()?;
        Folder::from_key(folder_key)
    }

    fn folder_by_file(&self, session: &Session, file_key: &str) -> Result<Folder> {
        session.verify()?;
        Folder::containing(file_key)
    }

    fn folders(&self, session: &Session, parent_key: Option<&str>) -> Result<Vec<Folder>> {
        session.verify()?;
        Ok(fixture::child_folders(parent_key.unwrap_or("")))
    }

    fn parent_folder_key(&self, session: &Session, folder_key: &str) -> Result<String> {
        session.verify()?;
        let parent = fixture::parent_key(folder_key).unwrap_or_else(|| {
            debug!("Unknown folder '{}' has no parent", folder_key);
            ""
        });
        Ok(parent.to_owned())
    }

    fn file(&self, session: &Session, file_key: &str) -> Result<File> {
        self.files_by_folder(session, "", SortOrder::Natural, None)?
            .into_iter()
            .find(|file| file.key == file_key)
            .ok_or_else(|| Error::from_kind(EK::ArtifactNotFound("file", file_key.to_owned())))
    }

    fn files_by_folder(&self,
                       session: &Session,
                       folder_key: &str,
                       order: SortOrder<FileField>,
                       filter: Option<&FileFilter>
    ) -> Result<Vec<File>> {
        session.verify()?;
        debug!("Listing files in folder '{}'", folder_key);

        let mut files = filter.cloned().apply(fixture::files());
        order.sort(&mut files);
        Ok(files)
    }

    fn files_for_revision(&self,
                          session: &Session,
                          revision_key: &str,
                          order: SortOrder<FileField>,
                          filter: Option<&FileFilter>
    ) -> Result<Vec<File>> {
        debug!("Listing files of revision '{}'", revision_key);
        self.files_by_folder(session, "", order, filter)
    }

    fn open_file(&self,
                 session: &Session,
                 file_key: &str,
                 revision_key: Option<&str>
    ) -> Result<FileStream> {
        session.verify()?;

        let revision_key = revision_key.and_then(|key| if key.is_empty() { None } else { Some(key) });
        let contents = match revision_key {
            None    => LATEST_CONTENTS,
            Some(_) => SPECIFIC_CONTENTS,
        };
        Ok(FileStream::from_memory(file_key, revision_key, contents.as_bytes().to_vec()))
    }

    fn revision(&self, session: &Session, revision_key: &str) -> Result<Revision> {
        self.revisions(session, SortOrder::Natural, None)?
            .into_iter()
            .find(|revision| revision.key == revision_key)
            .ok_or_else(|| Error::from_kind(EK::ArtifactNotFound("revision", revision_key.to_owned())))
    }

    fn revisions(&self,
                 session: &Session,
                 order: SortOrder<RevisionField>,
                 filter: Option<&RevisionFilter>
    ) -> Result<Vec<Revision>> {
        session.verify()?;

        let mut revisions = filter.cloned().apply(fixture::revisions());
        order.sort(&mut revisions);
        Ok(revisions)
    }

    fn revisions_for_file(&self,
                          session: &Session,
                          file_key: &str,
                          order: SortOrder<RevisionField>,
                          filter: Option<&RevisionFilter>
    ) -> Result<Vec<Revision>> {
        debug!("Listing revisions of file '{}'", file_key);
        let mut revisions = self.revisions(session, order, filter)?;

        // Drop two entries so the result is distinguishable from a plain
        // revision listing. The second index refers to the shortened list.
        if revisions.len() >= 1 {
            revisions.remove(0);
        }
        if revisions.len() >= 11 {
            revisions.remove(10);
        }
        Ok(revisions)
    }
}
