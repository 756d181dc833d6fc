//   sample-vcs - a sample version control provider
//   Copyright (C) 2017 Matthias Beyer <mail@beyermatthias.de>
//   Copyright (C) 2017 Julian Ganz <neither@nut.email>
//
//   This program is free software; you can redistribute it and/or modify
//   it under the terms of the GNU General Public License version 2 as
//   published by the Free Software Foundation.
//

use chrono::NaiveDate;
use clap::ArgMatches;
use std::env;
use std::str::FromStr;

use libsamplevcs::file::FileFilter;
use libsamplevcs::filter::{DateRange, Flag};
use libsamplevcs::revision::RevisionFilter;
use libsamplevcs::session::CUSTOM_FIELDS;
use libsamplevcs::sort::SortOrder;
use libsamplevcs::{Credentials, Parameters, Session, VersionControlProvider};

use error::ErrorKind as EK;
use error::*;

/// Format of dates accepted on the command line
///
const DATE_FORMAT: &'static str = "%Y-%m-%d";


/// Retrieve a setting from the command line or the environment
///
/// The value of the option `name` takes precedence over the environment
/// variable `var`.
///
fn setting(matches: &ArgMatches, name: &str, var: &str) -> Option<String> {
    matches
        .value_of(name)
        .map(String::from)
        .or_else(|| env::var(var).ok())
}


/// Assemble the parameters for the provider
///
pub fn parameters(matches: &ArgMatches) -> Result<Parameters> {
    let mut retval = Parameters::default();

    for param in matches.values_of("param").into_iter().flat_map(|v| v) {
        let mut parts = param.splitn(2, '=');
        match (parts.next(), parts.next()) {
            (Some(key), Some(value)) if !key.is_empty() => {
                retval.values.insert(key.to_owned(), value.to_owned());
            },
            _ => return Err(Error::from_kind(EK::MalformedParameter(param.to_owned()))),
        }
    }

    for (num, value) in matches.values_of("custom").into_iter().flat_map(|v| v).enumerate() {
        if !retval.set_custom(num, value.to_owned()) {
            return Err(Error::from_kind(EK::TooManyCustomFields(CUSTOM_FIELDS)));
        }
    }

    Ok(retval)
}


/// Initialize a session with the provider
///
/// Connection and credentials are taken from the command line, falling back
/// to the environment.
///
pub fn open_session<P>(provider: &P, matches: &ArgMatches) -> Result<Session>
    where P: VersionControlProvider
{
    let connection = setting(matches, "connection", "SAMPLE_VCS_CONNECTION")
        .ok_or_else(|| Error::from_kind(EK::MissingSetting("connection")))?;
    let user = setting(matches, "user", "SAMPLE_VCS_USER")
        .ok_or_else(|| Error::from_kind(EK::MissingSetting("user")))?;
    let password = setting(matches, "password", "SAMPLE_VCS_PASSWORD").unwrap_or_default();

    let credentials = Credentials::new(user, password);
    provider
        .initialize(&connection, &credentials, &parameters(matches)?)
        .map_err(Error::from)
}


/// Get the sort order specified via the `sort` and `desc` options
///
pub fn sort_order<F: FromStr>(matches: &ArgMatches) -> SortOrder<F> {
    SortOrder::from_name(matches.value_of("sort").unwrap_or(""), !matches.is_present("desc"))
}


fn date(matches: &ArgMatches, name: &str) -> Result<Option<NaiveDate>> {
    match matches.value_of(name) {
        Some(value) => Ok(Some(NaiveDate::parse_from_str(value, DATE_FORMAT)?)),
        None => Ok(None),
    }
}

/// Get the date range specified via the `since` and `until` options
///
pub fn date_range(matches: &ArgMatches) -> Result<Option<DateRange>> {
    let start = date(matches, "since")?;
    let end = date(matches, "until")?;
    Ok(if start.is_some() || end.is_some() { Some(DateRange::new(start, end)) } else { None })
}


fn flag(matches: &ArgMatches, name: &str) -> Result<Option<Flag>> {
    match matches.value_of(name) {
        Some(value) => Ok(Some(value.parse()?)),
        None => Ok(None),
    }
}

fn text(matches: &ArgMatches, name: &str) -> Option<String> {
    matches.value_of(name).map(String::from)
}


/// Assemble a file filter from the command line options
///
pub fn file_filter(matches: &ArgMatches) -> Result<FileFilter> {
    let size = match matches.value_of("size") {
        Some(value) => Some(u64::from_str(value)
            .chain_err(|| EK::MalformedValue("size", value.to_owned()))?),
        None => None,
    };

    Ok(FileFilter {
        name: text(matches, "name"),
        size: size,
        author: text(matches, "author"),
        revision: text(matches, "rev-name"),
        action: text(matches, "action"),
        last_updated: date_range(matches)?,
    })
}

/// Assemble a revision filter from the command line options
///
pub fn revision_filter(matches: &ArgMatches) -> Result<RevisionFilter> {
    Ok(RevisionFilter {
        name: text(matches, "name"),
        author: text(matches, "author"),
        message: text(matches, "message"),
        update_date: date_range(matches)?,
        content_changed: flag(matches, "content-changed")?,
        properties_changed: flag(matches, "properties-changed")?,
    })
}


#[cfg(test)]
mod tests {
    use super::*;
    use clap::App;

    fn with_matches<F, T>(args: &[&str], f: F) -> T
        where F: FnOnce(&ArgMatches) -> T
    {
        let yaml = load_yaml!("cli.yaml");
        let mut argv = vec!["sample-vcs"];
        argv.extend_from_slice(args);
        argv.push("folders");
        f(&App::from_yaml(yaml).get_matches_from(argv))
    }

    #[test]
    fn parameters_from_options() {
        let params = with_matches(&["-P", "depth=2", "--param", "mode=a=b", "--custom", "x"], parameters)
            .expect("Could not assemble parameters");
        assert_eq!(params.values.get("depth").map(String::as_str), Some("2"));
        assert_eq!(params.values.get("mode").map(String::as_str), Some("a=b"));
        assert_eq!(params.custom[0], Some(String::from("x")));
        assert_eq!(params.custom[1], None);
    }

    #[test]
    fn malformed_parameter() {
        for param in &["depth", "=2"] {
            let err = with_matches(&["--param", *param], parameters)
                .expect_err("Malformed parameter accepted");
            match err.kind() {
                &EK::MalformedParameter(ref value) => assert_eq!(value, *param),
                kind => panic!("Unexpected error kind: {}", kind),
            }
        }
    }

    #[test]
    fn five_custom_fields_at_most() {
        let five = ["--custom", "1", "--custom", "2", "--custom", "3", "--custom", "4", "--custom", "5"];
        let params = with_matches(&five, parameters).expect("Could not assemble parameters");
        assert_eq!(params.custom[4], Some(String::from("5")));

        let mut six = five.to_vec();
        six.extend_from_slice(&["--custom", "6"]);
        let err = with_matches(&six, parameters).expect_err("Sixth custom field accepted");
        match err.kind() {
            &EK::TooManyCustomFields(max) => assert_eq!(max, CUSTOM_FIELDS),
            kind => panic!("Unexpected error kind: {}", kind),
        }
    }

    #[test]
    fn option_takes_precedence_over_environment() {
        // variable names are unique to this test since tests share the environment
        let var = "SAMPLE_VCS_UTIL_TEST_USER";
        env::set_var(var, "joesmith");

        assert_eq!(with_matches(&["--user", "fredbloggs"], |m| setting(m, "user", var)),
                   Some(String::from("fredbloggs")));
        assert_eq!(with_matches(&[], |m| setting(m, "user", var)), Some(String::from("joesmith")));
        assert_eq!(with_matches(&[], |m| setting(m, "user", "SAMPLE_VCS_UTIL_TEST_UNSET")), None);

        env::remove_var(var);
    }
}
