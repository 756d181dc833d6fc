// sample-vcs - a sample version control provider
// Copyright (C) 2016, 2017 Matthias Beyer <mail@beyermatthias.de>
// Copyright (C) 2016, 2017 Julian Ganz <neither@nut.email>
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//

//! Record filtering
//!
//! Queries listing files or revisions accept a filter specification. Each
//! specification is a struct with one optional constraint per field. An
//! absent constraint does not filter out anything, present constraints are
//! combined: a record passes only if it satisfies all of them.
//!

use chrono::{DateTime, NaiveDate, Utc};
use std::str::FromStr;

use error::*;


/// Filter over records of type `T`
///
pub trait Filter<T> {
    /// Check whether a record passes the filter
    ///
    fn matches(&self, item: &T) -> bool;

    /// Retain only the records passing the filter
    ///
    fn apply(&self, items: Vec<T>) -> Vec<T> {
        items.into_iter().filter(|item| self.matches(item)).collect()
    }
}

impl<T, F> Filter<T> for Option<F>
    where F: Filter<T>
{
    fn matches(&self, item: &T) -> bool {
        self.as_ref().map(|filter| filter.matches(item)).unwrap_or(true)
    }
}


/// Check an optional substring constraint
///
/// Matching is case sensitive.
///
pub fn contains(constraint: &Option<String>, value: &str) -> bool {
    constraint.as_ref().map(|needle| value.contains(needle.as_str())).unwrap_or(true)
}

/// Check an optional equality constraint
///
pub fn equals<V: PartialEq>(constraint: &Option<V>, value: &V) -> bool {
    constraint.as_ref().map(|expected| expected == value).unwrap_or(true)
}


/// Range of calendar dates
///
/// Both bounds are inclusive and may be absent.
///
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        DateRange { start: start, end: end }
    }

    /// Check whether a timestamp falls on a date within the range
    ///
    /// Only the date of the timestamp is compared. A record from late in the
    /// day of the end bound is therefore still in range, rather than being
    /// cut off at midnight.
    ///
    pub fn contains(&self, timestamp: &DateTime<Utc>) -> bool {
        let date = timestamp.date_naive();
        self.start.map(|start| start <= date).unwrap_or(true) &&
            self.end.map(|end| date <= end).unwrap_or(true)
    }
}


/// Yes/no flag constraint
///
/// Hosts transmit flag constraints as `Y` or `N`.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flag {
    Yes,
    No,
}

impl Flag {
    pub fn matches(&self, value: bool) -> bool {
        match *self {
            Flag::Yes => value,
            Flag::No  => !value,
        }
    }
}

impl From<bool> for Flag {
    fn from(value: bool) -> Self {
        if value { Flag::Yes } else { Flag::No }
    }
}

impl FromStr for Flag {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "Y" | "y" => Ok(Flag::Yes),
            "N" | "n" => Ok(Flag::No),
            _ => Err(Error::from(format!("Invalid flag '{}', expected Y or N", s))),
        }
    }
}

/// Check an optional flag constraint
///
pub fn flag(constraint: &Option<Flag>, value: bool) -> bool {
    constraint.map(|flag| flag.matches(value)).unwrap_or(true)
}


#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(year: i32, month: u32, day: u32, hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(year, month, day, hour, 0, 0).single().expect("Invalid date")
    }

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("Invalid date")
    }

    #[test]
    fn unbounded_range() {
        assert!(DateRange::default().contains(&at(1999, 12, 31, 23)));
    }

    #[test]
    fn range_bounds_are_inclusive() {
        let range = DateRange::new(Some(date(2017, 4, 3)), Some(date(2017, 4, 5)));
        assert!(range.contains(&at(2017, 4, 3, 0)));
        assert!(range.contains(&at(2017, 4, 5, 23)));
        assert!(!range.contains(&at(2017, 4, 2, 23)));
        assert!(!range.contains(&at(2017, 4, 6, 0)));
    }

    #[test]
    fn end_bound_covers_whole_day() {
        let range = DateRange::new(None, Some(date(2017, 4, 5)));
        let late = Utc.with_ymd_and_hms(2017, 4, 5, 23, 59, 59).single().expect("Invalid date");
        assert!(range.contains(&late));
    }

    #[test]
    fn half_open_ranges() {
        let since = DateRange::new(Some(date(2017, 4, 3)), None);
        assert!(since.contains(&at(2030, 1, 1, 0)));
        assert!(!since.contains(&at(2017, 4, 2, 12)));

        let until = DateRange::new(None, Some(date(2017, 4, 3)));
        assert!(until.contains(&at(1970, 1, 1, 0)));
        assert!(!until.contains(&at(2017, 4, 4, 12)));
    }

    #[test]
    fn text_constraints() {
        assert!(contains(&None, "anything"));
        assert!(contains(&Some(String::from("Blog")), "Fred Bloggs"));
        assert!(!contains(&Some(String::from("blog")), "Fred Bloggs"));
    }

    #[test]
    fn flag_constraints() {
        assert!(flag(&None, false));
        assert!(flag(&Some(Flag::Yes), true));
        assert!(!flag(&Some(Flag::Yes), false));
        assert!(flag(&Some(Flag::No), false));
        assert!(!flag(&Some(Flag::No), true));
    }

    #[test]
    fn parse_flags() {
        assert_eq!("Y".parse::<Flag>().expect("Could not parse flag"), Flag::Yes);
        assert_eq!("n".parse::<Flag>().expect("Could not parse flag"), Flag::No);
        assert!("yes".parse::<Flag>().is_err());
    }
}
