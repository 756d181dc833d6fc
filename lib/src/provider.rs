// sample-vcs - a sample version control provider
// Copyright (C) 2016, 2017 Matthias Beyer <mail@beyermatthias.de>
// Copyright (C) 2016, 2017 Julian Ganz <neither@nut.email>
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//

//! Provider contract
//!
//! This module provides the `VersionControlProvider` trait, the set of
//! operations a host expects from a version control provider. All queries are
//! read-only and take the session returned by `initialize()`.
//!

use association::{ArtifactRef, Association};
use file::{File, FileField, FileFilter, FileStream};
use folder::Folder;
use revision::{Revision, RevisionField, RevisionFilter};
use session::{Credentials, Parameters, Session};
use sort::SortOrder;

use error::*;


/// Version control provider
///
pub trait VersionControlProvider {
    /// Connect and authenticate
    ///
    /// Returns the session to pass to all subsequent calls. Fails with an
    /// `AuthenticationError` if the credentials are rejected and with a
    /// `GeneralAccessError` if the connection is unusable.
    ///
    fn initialize(&self,
                  connection: &str,
                  credentials: &Credentials,
                  parameters: &Parameters
    ) -> Result<Session>;

    /// Retrieve a folder by its key
    ///
    fn folder(&self, session: &Session, folder_key: &str) -> Result<Folder>;

    /// Retrieve the folder containing a file
    ///
    fn folder_by_file(&self, session: &Session, file_key: &str) -> Result<Folder>;

    /// Retrieve the folders directly below a parent folder
    ///
    /// If no parent is given, the top level folders are returned.
    ///
    fn folders(&self, session: &Session, parent_key: Option<&str>) -> Result<Vec<Folder>>;

    /// Retrieve the key of a folder's parent
    ///
    /// The empty string denotes the absence of a parent.
    ///
    fn parent_folder_key(&self, session: &Session, folder_key: &str) -> Result<String>;

    /// Retrieve a file by its key
    ///
    fn file(&self, session: &Session, file_key: &str) -> Result<File>;

    /// Retrieve the files in a folder
    ///
    fn files_by_folder(&self,
                       session: &Session,
                       folder_key: &str,
                       order: SortOrder<FileField>,
                       filter: Option<&FileFilter>
    ) -> Result<Vec<File>>;

    /// Retrieve the files touched by a revision
    ///
    fn files_for_revision(&self,
                          session: &Session,
                          revision_key: &str,
                          order: SortOrder<FileField>,
                          filter: Option<&FileFilter>
    ) -> Result<Vec<File>>;

    /// Open the contents of a file
    ///
    /// If no revision is given, the contents of the latest revision are
    /// returned.
    ///
    fn open_file(&self,
                 session: &Session,
                 file_key: &str,
                 revision_key: Option<&str>
    ) -> Result<FileStream>;

    /// Close a stream obtained via `open_file()`
    ///
    fn close_file(&self, stream: FileStream) -> Result<()> {
        debug!("Closing file '{}'", stream.file_key);
        Ok(())
    }

    /// Retrieve a revision by its key
    ///
    fn revision(&self, session: &Session, revision_key: &str) -> Result<Revision>;

    /// Retrieve revisions
    ///
    fn revisions(&self,
                 session: &Session,
                 order: SortOrder<RevisionField>,
                 filter: Option<&RevisionFilter>
    ) -> Result<Vec<Revision>>;

    /// Retrieve the revisions of a file
    ///
    fn revisions_for_file(&self,
                          session: &Session,
                          file_key: &str,
                          order: SortOrder<RevisionField>,
                          filter: Option<&RevisionFilter>
    ) -> Result<Vec<Revision>>;

    /// Retrieve the revisions referencing an artifact
    ///
    /// This default implementation scans the messages of all revisions, in
    /// natural order, for tokens referencing the artifact.
    ///
    fn revisions_for_artifact(&self,
                              session: &Session,
                              prefix: &str,
                              id: u32
    ) -> Result<Vec<Revision>> {
        let mentions = ArtifactRef::mentions(prefix, id)?;
        self.revisions(session, SortOrder::Natural, None)
            .map(|revisions| revisions
                .into_iter()
                .filter(|revision| mentions.is_match(&revision.message))
                .collect())
    }

    /// Retrieve the artifact associations of a revision
    ///
    /// This default implementation derives the associations from the tokens
    /// in the revision's message. If the revision does not exist, `None` is
    /// returned rather than an error.
    ///
    fn associations_for_revision(&self,
                                 session: &Session,
                                 revision_key: &str
    ) -> Result<Option<Vec<Association>>> {
        match self.revision(session, revision_key) {
            Ok(revision) => Ok(Some(Association::for_revision(&revision))),
            Err(ref err) if err.is_not_found() => {
                debug!("No associations for unknown revision '{}'", revision_key);
                Ok(None)
            },
            Err(err) => Err(err),
        }
    }
}
