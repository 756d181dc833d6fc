//   sample-vcs - a sample version control provider
//   Copyright (C) 2016, 2017 Matthias Beyer <mail@beyermatthias.de>
//   Copyright (C) 2016, 2017 Julian Ganz <neither@nut.email>
//
//   This program is free software; you can redistribute it and/or modify
//   it under the terms of the GNU General Public License version 2 as
//   published by the Free Software Foundation.
//

//! Output formatting
//!
//! Query results are printed as one line per record with tab separated
//! columns, which keeps the output digestible for tools like `cut` or `awk`.
//!

use chrono::{DateTime, Utc};
use libsamplevcs::association::Association;
use libsamplevcs::file::File;
use libsamplevcs::folder::Folder;
use libsamplevcs::revision::Revision;

/// Format used for timestamps
///
pub const DATE_FORMAT: &'static str = "%Y-%m-%d %H:%M";


/// Records which may be displayed as a row of columns
///
pub trait Tabular {
    fn columns(&self) -> Vec<String>;
}

impl<'a, T> Tabular for &'a T
    where T: Tabular
{
    fn columns(&self) -> Vec<String> {
        (*self).columns()
    }
}

impl Tabular for String {
    fn columns(&self) -> Vec<String> {
        vec![self.clone()]
    }
}

impl Tabular for Folder {
    fn columns(&self) -> Vec<String> {
        vec![self.key.clone(), self.name.clone()]
    }
}

impl Tabular for File {
    fn columns(&self) -> Vec<String> {
        vec![
            self.key.clone(),
            self.name.clone(),
            self.size.to_string(),
            self.revision.clone(),
            self.action.to_string(),
            format_date(&self.last_updated),
            self.author.clone(),
        ]
    }
}

impl Tabular for Revision {
    fn columns(&self) -> Vec<String> {
        let flags = format!("{}{}",
                            if self.content_changed { 'C' } else { '-' },
                            if self.properties_changed { 'P' } else { '-' });
        vec![
            self.key.clone(),
            self.name.clone(),
            format_date(&self.update_date),
            flags,
            self.author.clone(),
            self.message.clone(),
        ]
    }
}

impl Tabular for Association {
    fn columns(&self) -> Vec<String> {
        vec![
            self.revision_key.clone(),
            self.artifact.to_string(),
            format_date(&self.date),
        ]
    }
}


fn format_date(date: &DateTime<Utc>) -> String {
    date.format(DATE_FORMAT).to_string()
}


#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn revision_columns() {
        let revision = Revision {
            key: String::from("0003"),
            name: String::from("rev0003"),
            author: String::from("Fred Bloggs"),
            message: String::from("Updated the build scripts"),
            update_date: Utc.with_ymd_and_hms(2017, 4, 4, 10, 0, 0).single().expect("Invalid date"),
            content_changed: false,
            properties_changed: true,
        };
        assert_eq!(revision.columns(), vec![
            "0003", "rev0003", "2017-04-04 10:00", "-P", "Fred Bloggs", "Updated the build scripts",
        ]);
    }
}
