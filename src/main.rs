//   sample-vcs - a sample version control provider
//   Copyright (C) 2016 Matthias Beyer <mail@beyermatthias.de>
//   Copyright (C) 2016 Julian Ganz <neither@nut.email>
//
//   This program is free software; you can redistribute it and/or modify
//   it under the terms of the GNU General Public License version 2 as
//   published by the Free Software Foundation.
//

#![recursion_limit = "1024"]

#[macro_use] extern crate clap;
#[macro_use] extern crate error_chain;
#[macro_use] extern crate log;
extern crate chrono;
extern crate libsamplevcs;

mod display;
mod error;
mod system;
mod util;

use clap::{App, ArgMatches};
use libsamplevcs::{SampleProvider, Session, VersionControlProvider};
use std::io::{self, Read, Write};
use std::str::FromStr;

use error::ErrorKind as EK;
use error::*;
use system::{Abortable, Logger, WriteExt};
use util::{file_filter, revision_filter, sort_order};


/// folders subcommand implementation
///
fn folders<P: VersionControlProvider>(provider: &P, session: &Session, matches: &ArgMatches) -> Result<()> {
    let folders = provider.folders(session, matches.value_of("parent"))?;
    io::stdout().write_rows(folders).map_err(Error::from)
}


/// folder subcommand implementation
///
fn folder<P: VersionControlProvider>(provider: &P, session: &Session, matches: &ArgMatches) -> Result<()> {
    // note: key is always present since it is a required parameter
    let folder = provider.folder(session, matches.value_of("key").unwrap_or_default())?;
    io::stdout().write_rows(Some(folder)).map_err(Error::from)
}


/// folder-of subcommand implementation
///
fn folder_of<P: VersionControlProvider>(provider: &P, session: &Session, matches: &ArgMatches) -> Result<()> {
    let folder = provider.folder_by_file(session, matches.value_of("file").unwrap_or_default())?;
    io::stdout().write_rows(Some(folder)).map_err(Error::from)
}


/// parent subcommand implementation
///
fn parent<P: VersionControlProvider>(provider: &P, session: &Session, matches: &ArgMatches) -> Result<()> {
    let key = provider.parent_folder_key(session, matches.value_of("key").unwrap_or_default())?;
    io::stdout().write_rows(Some(key)).map_err(Error::from)
}


/// files subcommand implementation
///
fn files<P: VersionControlProvider>(provider: &P, session: &Session, matches: &ArgMatches) -> Result<()> {
    let filter = file_filter(matches)?;
    let order = sort_order(matches);

    let files = match matches.value_of("revision") {
        Some(revision) => provider.files_for_revision(session, revision, order, Some(&filter))?,
        None => provider.files_by_folder(session, matches.value_of("folder").unwrap_or_default(), order, Some(&filter))?,
    };
    io::stdout().write_rows(files).map_err(Error::from)
}


/// file subcommand implementation
///
fn file<P: VersionControlProvider>(provider: &P, session: &Session, matches: &ArgMatches) -> Result<()> {
    let file = provider.file(session, matches.value_of("key").unwrap_or_default())?;
    io::stdout().write_rows(Some(file)).map_err(Error::from)
}


/// cat subcommand implementation
///
fn cat<P: VersionControlProvider>(provider: &P, session: &Session, matches: &ArgMatches) -> Result<()> {
    let mut stream = provider.open_file(session,
                                        matches.value_of("file").unwrap_or_default(),
                                        matches.value_of("revision"))?;

    let mut contents = Vec::new();
    let read = stream.read_to_end(&mut contents);
    provider.close_file(stream)?;
    read?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    out.write_all(&contents)?;
    out.write_all(b"\n").map_err(Error::from)
}


/// revisions subcommand implementation
///
fn revisions<P: VersionControlProvider>(provider: &P, session: &Session, matches: &ArgMatches) -> Result<()> {
    let filter = revision_filter(matches)?;
    let order = sort_order(matches);

    let revisions = match matches.value_of("file") {
        Some(file) => provider.revisions_for_file(session, file, order, Some(&filter))?,
        None => provider.revisions(session, order, Some(&filter))?,
    };
    io::stdout().write_rows(revisions).map_err(Error::from)
}


/// revision subcommand implementation
///
fn revision<P: VersionControlProvider>(provider: &P, session: &Session, matches: &ArgMatches) -> Result<()> {
    let revision = provider.revision(session, matches.value_of("key").unwrap_or_default())?;
    io::stdout().write_rows(Some(revision)).map_err(Error::from)
}


/// artifact-revisions subcommand implementation
///
fn artifact_revisions<P: VersionControlProvider>(provider: &P, session: &Session, matches: &ArgMatches) -> Result<()> {
    let prefix = matches.value_of("prefix").unwrap_or_default();
    let id = matches.value_of("id").unwrap_or_default();
    let id = u32::from_str(id).chain_err(|| EK::MalformedValue("artifact id", id.to_owned()))?;

    let revisions = provider.revisions_for_artifact(session, prefix, id)?;
    io::stdout().write_rows(revisions).map_err(Error::from)
}


/// associations subcommand implementation
///
fn associations<P: VersionControlProvider>(provider: &P, session: &Session, matches: &ArgMatches) -> Result<()> {
    let revision = matches.value_of("revision").unwrap_or_default();
    match provider.associations_for_revision(session, revision)? {
        Some(associations) => io::stdout().write_rows(associations).map_err(Error::from),
        None => {
            warn!("Revision '{}' not found, no associations", revision);
            Ok(())
        },
    }
}


fn main() {
    let yaml    = load_yaml!("cli.yaml");
    let matches = App::from_yaml(yaml).get_matches();

    Logger::init(Logger::level_for_verbosity(matches.occurrences_of("verbose"))).unwrap_or_abort();

    let provider = SampleProvider::new();
    let session = util::open_session(&provider, &matches).unwrap_or_abort();

    let result = match matches.subcommand() {
        ("folders",             Some(sub_matches)) => folders(&provider, &session, sub_matches),
        ("folder",              Some(sub_matches)) => folder(&provider, &session, sub_matches),
        ("folder-of",           Some(sub_matches)) => folder_of(&provider, &session, sub_matches),
        ("parent",              Some(sub_matches)) => parent(&provider, &session, sub_matches),
        ("files",               Some(sub_matches)) => files(&provider, &session, sub_matches),
        ("file",                Some(sub_matches)) => file(&provider, &session, sub_matches),
        ("cat",                 Some(sub_matches)) => cat(&provider, &session, sub_matches),
        ("revisions",           Some(sub_matches)) => revisions(&provider, &session, sub_matches),
        ("revision",            Some(sub_matches)) => revision(&provider, &session, sub_matches),
        ("artifact-revisions",  Some(sub_matches)) => artifact_revisions(&provider, &session, sub_matches),
        ("associations",        Some(sub_matches)) => associations(&provider, &session, sub_matches),
        (name, _) => Err(Error::from(format!("Unknown subcommand '{}'", name))),
    };
    result.unwrap_or_abort()
}
