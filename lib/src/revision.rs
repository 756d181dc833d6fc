// sample-vcs - a sample version control provider
// Copyright (C) 2016, 2017 Matthias Beyer <mail@beyermatthias.de>
// Copyright (C) 2016, 2017 Julian Ganz <neither@nut.email>
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//

//! Revisions
//!

use chrono::{DateTime, Utc};
use std::cmp::Ordering;

use association::ArtifactRefs;
use filter::{self, DateRange, Filter, Flag};
use sort::{Keyed, SortField};


/// Revision representation
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Revision {
    pub key: String,
    pub name: String,
    pub author: String,
    pub message: String,
    pub update_date: DateTime<Utc>,
    pub content_changed: bool,
    pub properties_changed: bool,
}

impl Revision {
    /// Artifact references contained in the message
    ///
    pub fn artifact_refs(&self) -> ArtifactRefs {
        ArtifactRefs::from(self.message.as_str())
    }
}

impl Keyed for Revision {
    fn key(&self) -> &str {
        &self.key
    }
}


/// Fields by which revision listings may be sorted
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevisionField {
    Name,
    Author,
    Message,
    UpdateDate,
    ContentChanged,
    PropertiesChanged,
}

sort_field_names!(RevisionField {
    Name              => "Name",
    Author            => "Author",
    Message           => "Message",
    UpdateDate        => "UpdateDate",
    ContentChanged    => "ContentChanged",
    PropertiesChanged => "PropertiesChanged",
});

impl SortField for RevisionField {
    type Item = Revision;

    fn comparator(self) -> fn(&Revision, &Revision) -> Ordering {
        match self {
            RevisionField::Name              => |a, b| a.name.cmp(&b.name),
            RevisionField::Author            => |a, b| a.author.cmp(&b.author),
            RevisionField::Message           => |a, b| a.message.cmp(&b.message),
            RevisionField::UpdateDate        => |a, b| a.update_date.cmp(&b.update_date),
            RevisionField::ContentChanged    => |a, b| a.content_changed.cmp(&b.content_changed),
            RevisionField::PropertiesChanged => |a, b| a.properties_changed.cmp(&b.properties_changed),
        }
    }
}


/// Filter specification for revision listings
///
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RevisionFilter {
    pub name: Option<String>,
    pub author: Option<String>,
    pub message: Option<String>,
    pub update_date: Option<DateRange>,
    pub content_changed: Option<Flag>,
    pub properties_changed: Option<Flag>,
}

impl Filter<Revision> for RevisionFilter {
    fn matches(&self, revision: &Revision) -> bool {
        filter::contains(&self.name, &revision.name) &&
            filter::contains(&self.author, &revision.author) &&
            filter::contains(&self.message, &revision.message) &&
            self.update_date.map(|range| range.contains(&revision.update_date)).unwrap_or(true) &&
            filter::flag(&self.content_changed, revision.content_changed) &&
            filter::flag(&self.properties_changed, revision.properties_changed)
    }
}
