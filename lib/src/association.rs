// sample-vcs - a sample version control provider
// Copyright (C) 2016, 2017 Matthias Beyer <mail@beyermatthias.de>
// Copyright (C) 2016, 2017 Julian Ganz <neither@nut.email>
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//

//! Artifact references and associations
//!
//! Revision messages may reference artifacts tracked by the host, e.g. bugs or
//! requirements, by embedding tokens of the form
//!
//! ```ignore
//! Fixed the crash on startup [BG:0042]
//!                            ^^^^^^^^^
//!                            # artifact type "BG", artifact id 42
//! ```
//!
//! The prefix consists of at least two letters and is matched regardless of
//! case. Leading zeros of the id are not significant.
//!

use chrono::{DateTime, Utc};
use regex::{self, CaptureMatches, Captures, Regex};
use std::fmt::{self, Display, Formatter};
use std::result::Result as RResult;
use std::str::FromStr;

use revision::Revision;

use error::*;


lazy_static! {
    // regex matching an artifact token anywhere in a text
    static ref TOKEN: Regex = Regex::new(r"\[([A-Za-z]{2,}):([0-9]+)\]").unwrap();

    // regex matching a text consisting of a single artifact token
    static ref SINGLE_TOKEN: Regex = Regex::new(r"^\[([A-Za-z]{2,}):([0-9]+)\]$").unwrap();
}


/// Reference to an artifact
///
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArtifactRef {
    pub prefix: String,
    pub id: u32,
}

impl ArtifactRef {
    pub fn new<P: Into<String>>(prefix: P, id: u32) -> Self {
        ArtifactRef { prefix: prefix.into(), id: id }
    }

    /// Construct a reference from the captures of a token regex
    ///
    /// Returns `None` if the id does not fit into an `u32`.
    ///
    fn from_captures(captures: &Captures) -> Option<Self> {
        let prefix = captures.get(1)?.as_str();
        let digits = captures.get(2)?.as_str();
        match u32::from_str(digits) {
            Ok(id) => Some(ArtifactRef::new(prefix, id)),
            Err(err) => {
                warn!("Ignoring artifact token with id '{}': {}", digits, err);
                None
            },
        }
    }

    /// Build a regex matching tokens referencing an artifact
    ///
    /// The prefix is matched verbatim, e.g. case sensitive, while the id may
    /// be prefixed with any number of zeros.
    ///
    pub fn mentions(prefix: &str, id: u32) -> Result<Regex> {
        Regex::new(&format!(r"\[{}:0*{}\]", regex::escape(prefix), id)).map_err(Error::from)
    }
}

impl Display for ArtifactRef {
    fn fmt(&self, f: &mut Formatter) -> RResult<(), fmt::Error> {
        write!(f, "[{}:{}]", self.prefix, self.id)
    }
}

impl FromStr for ArtifactRef {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        SINGLE_TOKEN
            .captures(s)
            .and_then(|captures| ArtifactRef::from_captures(&captures))
            .ok_or_else(|| Error::from(format!("Malformed artifact token: {}", s)))
    }
}


/// Iterator over the artifact references contained in a text
///
/// Tokens are reported in the order in which they appear. Tokens whose id
/// does not fit into an `u32` are skipped.
///
pub struct ArtifactRefs<'t>(CaptureMatches<'static, 't>);

impl<'t> From<&'t str> for ArtifactRefs<'t> {
    fn from(text: &'t str) -> Self {
        ArtifactRefs(TOKEN.captures_iter(text))
    }
}

impl<'t> Iterator for ArtifactRefs<'t> {
    type Item = ArtifactRef;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.0.next() {
                None => return None,
                Some(captures) => match ArtifactRef::from_captures(&captures) {
                    Some(artifact) => return Some(artifact),
                    None => continue,
                },
            }
        }
    }
}


/// Association between a revision and an artifact
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Association {
    pub artifact: ArtifactRef,
    pub revision_key: String,
    pub date: DateTime<Utc>,
    pub comment: Option<String>,
}

impl Association {
    /// Derive associations from the tokens in a revision's message
    ///
    pub fn for_revision(revision: &Revision) -> Vec<Self> {
        revision
            .artifact_refs()
            .map(|artifact| Association {
                artifact: artifact,
                revision_key: revision.key.clone(),
                date: revision.update_date,
                comment: None,
            })
            .collect()
    }
}

impl Display for Association {
    fn fmt(&self, f: &mut Formatter) -> RResult<(), fmt::Error> {
        write!(f, "{} {}", self.revision_key, self.artifact)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn refs(text: &str) -> Vec<ArtifactRef> {
        ArtifactRefs::from(text).collect()
    }

    #[test]
    fn no_tokens() {
        assert!(refs("").is_empty());
        assert!(refs("Fixed the build, see [B:1] and [BG:] and [BG:x1]").is_empty());
    }

    #[test]
    fn tokens_in_order() {
        assert_eq!(refs("Fix [BG:007] reported in [IN:42]."), vec![
            ArtifactRef::new("BG", 7),
            ArtifactRef::new("IN", 42),
        ]);
    }

    #[test]
    fn prefix_case_is_kept() {
        assert_eq!(refs("[rq:12][TestCase:3]"), vec![
            ArtifactRef::new("rq", 12),
            ArtifactRef::new("TestCase", 3),
        ]);
    }

    #[test]
    fn prefix_is_ascii_only() {
        // kelvin sign and long s fold to ASCII letters in unicode case folding
        assert_eq!(refs("[\u{212A}B:1] [\u{17F}T:2] [KB:3]"), vec![ArtifactRef::new("KB", 3)]);
        assert!("[\u{212A}B:1]".parse::<ArtifactRef>().is_err());
    }

    #[test]
    fn overflowing_ids_are_skipped() {
        assert_eq!(refs("[BG:99999999999] [BG:1]"), vec![ArtifactRef::new("BG", 1)]);
    }

    #[test]
    fn parse_single_token() {
        assert_eq!("[TK:0010]".parse::<ArtifactRef>().expect("Could not parse token"),
                   ArtifactRef::new("TK", 10));
        assert!("see [TK:10]".parse::<ArtifactRef>().is_err());
        assert!("[T:10]".parse::<ArtifactRef>().is_err());
    }

    #[test]
    fn display_token() {
        assert_eq!(ArtifactRef::new("BG", 7).to_string(), "[BG:7]");
    }

    #[test]
    fn mentions_allow_leading_zeros() {
        let re = ArtifactRef::mentions("BG", 7).expect("Could not build regex");
        assert!(re.is_match("Fix [BG:7]"));
        assert!(re.is_match("Fix [BG:007]"));
        assert!(!re.is_match("Fix [BG:70]"));
        assert!(!re.is_match("Fix [BG:17]"));
        assert!(!re.is_match("Fix [bg:7]"));
    }

    #[test]
    fn mentions_escape_prefix() {
        let re = ArtifactRef::mentions("B.", 1).expect("Could not build regex");
        assert!(re.is_match("[B.:1]"));
        assert!(!re.is_match("[BG:1]"));
    }

    #[test]
    fn associations_carry_revision_data() {
        let revision = Revision {
            key: String::from("0042"),
            name: String::from("rev0042"),
            author: String::from("Fred Bloggs"),
            message: String::from("Fixed [BG:007] and [IN:42]"),
            update_date: Utc.with_ymd_and_hms(2017, 4, 4, 10, 0, 0).single().expect("Invalid date"),
            content_changed: true,
            properties_changed: false,
        };

        let associations = Association::for_revision(&revision);
        assert_eq!(associations.len(), 2);
        assert_eq!(associations[0].artifact, ArtifactRef::new("BG", 7));
        assert_eq!(associations[1].artifact, ArtifactRef::new("IN", 42));
        for association in &associations {
            assert_eq!(association.revision_key, "0042");
            assert_eq!(association.date, revision.update_date);
            assert_eq!(association.comment, None);
        }
    }
}
