// sample-vcs - a sample version control provider
// Copyright (C) 2016, 2017 Matthias Beyer <mail@beyermatthias.de>
// Copyright (C) 2016, 2017 Julian Ganz <neither@nut.email>
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//

//! Errors reported to the plugin host
//!
//! A host distinguishes three kinds of failure: rejected credentials,
//! an unusable connection and a lookup which did not yield an artifact.
//!

error_chain! {
    foreign_links {
        Regex(::regex::Error);
    }

    errors {
        AuthenticationError(user: String) {
            description("Unable to login to version control provider")
            display("Unable to login to version control provider as '{}'", user)
        }

        GeneralAccessError(connection: String) {
            description("Unable to access version control provider")
            display("Unable to access version control provider with connection '{}'", connection)
        }

        ArtifactNotFound(artifact: &'static str, key: String) {
            description("Could not find artifact")
            display("Could not find {} '{}'", artifact, key)
        }
    }
}


impl Error {
    /// Check whether this error signals a failed lookup
    ///
    pub fn is_not_found(&self) -> bool {
        is_match!(self.kind(), &ErrorKind::ArtifactNotFound(..))
    }
}

