//   sample-vcs - a sample version control provider
//   Copyright (C) 2016, 2017 Matthias Beyer <mail@beyermatthias.de>
//   Copyright (C) 2016, 2017 Julian Ganz <neither@nut.email>
//
//   This program is free software; you can redistribute it and/or modify
//   it under the terms of the GNU General Public License version 2 as
//   published by the Free Software Foundation.
//

use log;
use std::io::{stderr, Write};
use std::result::Result as RResult;


/// Basic logger
///
/// This logger will log to stderr
///
pub struct Logger;

impl Logger {
    /// Initialize the basic logger
    ///
    /// Instantiate a basic logger and make it the main logger.
    ///
    pub fn init(level: log::Level) -> RResult<(), log::SetLoggerError> {
        log::set_logger(&Logger)?;
        log::set_max_level(level.to_level_filter());
        Ok(())
    }

    /// Map a number of `-v` flags to a log level
    ///
    pub fn level_for_verbosity(occurrences: u64) -> log::Level {
        match occurrences {
            0 => log::Level::Warn,
            1 => log::Level::Info,
            2 => log::Level::Debug,
            _ => log::Level::Trace,
        }
    }
}

impl log::Log for Logger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= ::log::max_level()
    }

    fn log(&self, record: &log::Record) {
        if self.enabled(record.metadata()) {
            writeln!(stderr(), "{}: {}", record.level(), record.args()).ok();
        }
    }

    fn flush(&self) {
        /* implementation not needed as we do not cache */
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_levels() {
        assert_eq!(Logger::level_for_verbosity(0), log::Level::Warn);
        assert_eq!(Logger::level_for_verbosity(1), log::Level::Info);
        assert_eq!(Logger::level_for_verbosity(2), log::Level::Debug);
        assert_eq!(Logger::level_for_verbosity(7), log::Level::Trace);
    }
}

