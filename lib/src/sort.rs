// sample-vcs - a sample version control provider
// Copyright (C) 2016, 2017 Matthias Beyer <mail@beyermatthias.de>
// Copyright (C) 2016, 2017 Julian Ganz <neither@nut.email>
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//

//! Record sorting
//!
//! Hosts request an ordering by naming a field. Each record type comes with a
//! closed set of sortable fields, each of which maps to a comparison function.
//!

use std::cmp::Ordering;
use std::str::FromStr;


/// Records identified by a unique key
///
/// The key defines the natural order of records.
///
pub trait Keyed {
    fn key(&self) -> &str;
}


/// Field by which records of type `Item` may be sorted
///
pub trait SortField: Copy {
    type Item;

    /// Comparison function for the field, yielding ascending order
    ///
    fn comparator(self) -> fn(&Self::Item, &Self::Item) -> Ordering;
}


/// Direction of a sort
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

impl From<bool> for Direction {
    fn from(ascending: bool) -> Self {
        if ascending { Direction::Ascending } else { Direction::Descending }
    }
}


/// Requested order of a listing
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder<F> {
    /// Order by key, regardless of direction
    Natural,
    /// Order by a specific field
    Field(F, Direction),
    /// Keep the order in which records were produced
    Unsorted,
}

impl<F> SortOrder<F>
    where F: FromStr
{
    /// Interpret a field name supplied by the host
    ///
    /// An empty name selects the natural order. A name not denoting any
    /// known field leaves the listing unsorted.
    ///
    pub fn from_name(name: &str, ascending: bool) -> Self {
        if name.is_empty() {
            return SortOrder::Natural;
        }

        match F::from_str(name) {
            Ok(field) => SortOrder::Field(field, Direction::from(ascending)),
            Err(_) => {
                debug!("Ignoring unknown sort field '{}'", name);
                SortOrder::Unsorted
            },
        }
    }
}

impl<F> Default for SortOrder<F> {
    fn default() -> Self {
        SortOrder::Natural
    }
}

impl<F> SortOrder<F>
    where F: SortField,
          F::Item: Keyed
{
    /// Sort records in place
    ///
    /// The sort is stable: records comparing equal keep their relative order.
    ///
    pub fn sort(&self, items: &mut Vec<F::Item>) {
        match *self {
            SortOrder::Natural => items.sort_by(|a, b| a.key().cmp(b.key())),
            SortOrder::Field(field, Direction::Ascending) => items.sort_by(field.comparator()),
            SortOrder::Field(field, Direction::Descending) => {
                let cmp = field.comparator();
                items.sort_by(|a, b| cmp(b, a))
            },
            SortOrder::Unsorted => {},
        }
    }
}


/// Generate `FromStr` and `Display` for a closed set of sort fields
///
/// The names are the ones hosts use to request an order.
///
macro_rules! sort_field_names {
    ($field:ident { $($variant:ident => $name:tt),* $(,)* }) => {
        impl ::std::str::FromStr for $field {
            type Err = ::error::Error;

            fn from_str(s: &str) -> ::error::Result<Self> {
                match s {
                    $($name => Ok($field::$variant),)*
                    _ => Err(::error::Error::from(format!("Unknown sort field '{}'", s))),
                }
            }
        }

        impl ::std::fmt::Display for $field {
            fn fmt(&self, f: &mut ::std::fmt::Formatter) -> ::std::fmt::Result {
                f.write_str(match *self {
                    $($field::$variant => $name,)*
                })
            }
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Item(&'static str, u32);

    impl Keyed for Item {
        fn key(&self) -> &str {
            self.0
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum ItemField {
        Weight,
    }

    sort_field_names!(ItemField { Weight => "Weight" });

    impl SortField for ItemField {
        type Item = Item;

        fn comparator(self) -> fn(&Item, &Item) -> Ordering {
            match self {
                ItemField::Weight => |a, b| a.1.cmp(&b.1),
            }
        }
    }

    fn items() -> Vec<Item> {
        vec![Item("b", 2), Item("c", 1), Item("a", 2)]
    }

    fn keys(items: &[Item]) -> Vec<&'static str> {
        items.iter().map(|i| i.0).collect()
    }

    #[test]
    fn natural_order_ignores_direction() {
        let mut list = items();
        SortOrder::<ItemField>::from_name("", false).sort(&mut list);
        assert_eq!(keys(&list), vec!["a", "b", "c"]);
    }

    #[test]
    fn ascending_is_stable() {
        let mut list = items();
        SortOrder::<ItemField>::from_name("Weight", true).sort(&mut list);
        assert_eq!(keys(&list), vec!["c", "b", "a"]);
    }

    #[test]
    fn descending_is_stable() {
        let mut list = items();
        SortOrder::<ItemField>::from_name("Weight", false).sort(&mut list);
        assert_eq!(keys(&list), vec!["b", "a", "c"]);
    }

    #[test]
    fn unknown_field_keeps_order() {
        let mut list = items();
        let order = SortOrder::<ItemField>::from_name("Colour", true);
        assert_eq!(order, SortOrder::Unsorted);
        order.sort(&mut list);
        assert_eq!(keys(&list), vec!["b", "c", "a"]);
    }

    #[test]
    fn display_field_name() {
        assert_eq!(ItemField::Weight.to_string(), "Weight");
    }
}
