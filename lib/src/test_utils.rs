// sample-vcs - a sample version control provider
// Copyright (C) 2017 Matthias Beyer <mail@beyermatthias.de>
// Copyright (C) 2017 Julian Ganz <neither@nut.email>
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//

//! Testing utils
//!
//! This module provides some utility functionality exclusively for testing
//! purposes.
//!

use provider::VersionControlProvider;
use sample::SampleProvider;
use session::{Credentials, Parameters, Session};
use sort::Keyed;


/// Testing provider
///
/// This type provides a sample provider along with an established session.
///
pub struct TestingProvider {
    pub provider: SampleProvider,
    pub session: Session,
}

impl TestingProvider {
    /// Create a testing provider
    ///
    pub fn new() -> Self {
        let provider = SampleProvider::new();
        let session = provider
            .initialize("test://Server/Root", &Credentials::new("fredbloggs", ""), &Parameters::default())
            .expect("Could not initialize provider");
        TestingProvider { provider: provider, session: session }
    }
}


/// Extract the keys of a list of records
///
pub fn keys<T: Keyed>(items: &[T]) -> Vec<String> {
    items.iter().map(|item| item.key().to_owned()).collect()
}
