#![recursion_limit = "1024"]
// sample-vcs - a sample version control provider
// Copyright (C) 2016, 2017 Matthias Beyer <mail@beyermatthias.de>
// Copyright (C) 2016, 2017 Julian Ganz <neither@nut.email>
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//

//! The sample version control provider library
//!
//! This library illustrates how a version control provider for a plugin host
//! is structured. The operations a host expects are defined by the
//! `VersionControlProvider` trait. `SampleProvider` implements that trait on
//! top of a fixed set of folders, files and revisions instead of an actual
//! repository.
//!
//!
//! # Sessions
//!
//! A host obtains a `Session` by calling `initialize()` with a connection
//! string and credentials. The session is passed to every query. The sample
//! provider accepts the users "fredbloggs" and "joesmith" on connections
//! starting with `test://`.
//!
//! # Queries
//!
//! Listings of files and revisions may be narrowed down via a filter
//! specification and ordered via a `SortOrder`. Hosts name the field to sort
//! by, an unknown name leaves the listing unsorted.
//!
//! # Artifacts
//!
//! Revision messages may reference artifacts of the host via tokens like
//! `[BG:42]`. The `association` module extracts those references.
//!

#[macro_use] extern crate error_chain;
#[macro_use] extern crate is_match;
#[macro_use] extern crate lazy_static;
#[macro_use] extern crate log;
extern crate chrono;
extern crate regex;
extern crate url;

pub mod error;
#[macro_use] pub mod sort;
pub mod association;
pub mod file;
pub mod filter;
pub mod folder;
pub mod provider;
pub mod revision;
pub mod sample;
pub mod session;

mod fixture;

#[cfg(test)]
mod test_utils;

pub use provider::VersionControlProvider;
pub use sample::SampleProvider;
pub use session::{Credentials, Parameters, Session};
