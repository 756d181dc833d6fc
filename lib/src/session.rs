// sample-vcs - a sample version control provider
// Copyright (C) 2016, 2017 Matthias Beyer <mail@beyermatthias.de>
// Copyright (C) 2016, 2017 Julian Ganz <neither@nut.email>
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//

//! Sessions
//!
//! A session is created by a provider's `initialize()` and passed along with
//! every query afterwards. It is never persisted: dropping it ends the
//! session.
//!

use std::collections::HashMap;

use error::ErrorKind as EK;
use error::*;

/// Scheme prefix every connection of the sample provider has to carry
///
pub const SCHEME_PREFIX: &'static str = "test://";

/// Users accepted by the sample provider
///
pub const KNOWN_USERS: [&'static str; 2] = ["fredbloggs", "joesmith"];

/// Number of provider specific custom fields a host may pass
///
pub const CUSTOM_FIELDS: usize = 5;


/// Username and password pair supplied by the host
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub user: String,
    pub password: String,
}

impl Credentials {
    pub fn new<U, P>(user: U, password: P) -> Self
        where U: Into<String>,
              P: Into<String>
    {
        Credentials { user: user.into(), password: password.into() }
    }
}


/// Additional connection parameters supplied by the host
///
/// Hosts pass a free-form key-value map as well as up to five custom fields
/// whose meaning is specific to the provider.
///
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Parameters {
    pub values: HashMap<String, String>,
    pub custom: [Option<String>; CUSTOM_FIELDS],
}

impl Parameters {
    /// Set the custom field with the given (zero based) index
    ///
    /// Returns `false` if the index is out of range.
    ///
    pub fn set_custom(&mut self, index: usize, value: String) -> bool {
        match self.custom.get_mut(index) {
            Some(field) => { *field = Some(value); true },
            None => false,
        }
    }
}


/// Session token
///
/// The token echoes the connection and credentials it was created from.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    connection: String,
    credentials: Credentials,
}

impl Session {
    /// Authenticate against the sample provider
    ///
    /// The username is checked against a closed list of known users before
    /// the connection string is checked for the `test://` prefix.
    ///
    pub fn authenticate(connection: &str, credentials: &Credentials) -> Result<Self> {
        if !KNOWN_USERS.contains(&credentials.user.as_str()) {
            return Err(Error::from_kind(EK::AuthenticationError(credentials.user.clone())));
        }

        let retval = Session {
            connection: connection.to_owned(),
            credentials: credentials.clone(),
        };
        retval.verify()?;
        Ok(retval)
    }

    /// Rebuild a session from a token kept by the host
    ///
    /// Nothing is checked here. A restored session is validated by `verify()`
    /// on its first use.
    ///
    pub fn restore<C>(connection: C, credentials: Credentials) -> Self
        where C: Into<String>
    {
        Session { connection: connection.into(), credentials: credentials }
    }

    /// Make sure the session refers to a connection we can serve
    ///
    pub fn verify(&self) -> Result<()> {
        if self.connection.starts_with(SCHEME_PREFIX) {
            Ok(())
        } else {
            Err(Error::from_kind(EK::GeneralAccessError(self.connection.clone())))
        }
    }

    pub fn connection(&self) -> &str {
        &self.connection
    }

    pub fn user(&self) -> &str {
        &self.credentials.user
    }

    pub fn password(&self) -> &str {
        &self.credentials.password
    }
}
