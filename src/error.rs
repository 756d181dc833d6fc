//   sample-vcs - a sample version control provider
//   Copyright (C) 2016, 2017 Matthias Beyer <mail@beyermatthias.de>
//   Copyright (C) 2016, 2017 Julian Ganz <neither@nut.email>
//
//   This program is free software; you can redistribute it and/or modify
//   it under the terms of the GNU General Public License version 2 as
//   published by the Free Software Foundation.
//

use std::error::Error as StdError;

error_chain! {
    links {
        Provider(::libsamplevcs::error::Error, ::libsamplevcs::error::ErrorKind);
    }

    foreign_links {
        Io(::std::io::Error);
        DateFormat(::chrono::ParseError);
    }

    errors {
        MissingSetting(name: &'static str) {
            description("A required setting is missing")
            display("No {} configured", name)
        }

        MalformedParameter(param: String) {
            description("Malformed provider parameter")
            display("Malformed parameter '{}', expected key=value", param)
        }

        TooManyCustomFields(max: usize) {
            description("Too many custom fields")
            display("At most {} custom fields may be supplied", max)
        }

        MalformedValue(name: &'static str, value: String) {
            description("Malformed option value")
            display("Malformed value for {}: '{}'", name, value)
        }
    }
}


/// Convenience trait for logging error types
///
/// Logs all layers of an error using the `error!` macro.
///
pub trait LoggableError {
    fn log(&self);
}

impl<E> LoggableError for E
    where E: StdError
{
    fn log(&self) {
        let mut current = Some(self as &StdError);
        while let Some(err) = current {
            error!("{}", err);
            current = err.source();
        }
    }
}

