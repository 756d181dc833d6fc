//   sample-vcs - a sample version control provider
//   Copyright (C) 2017 Matthias Beyer <mail@beyermatthias.de>
//   Copyright (C) 2017 Julian Ganz <neither@nut.email>
//
//   This program is free software; you can redistribute it and/or modify
//   it under the terms of the GNU General Public License version 2 as
//   published by the Free Software Foundation.
//

//! System level utilities
//!
//! Logging, output and program abortion.
//!

mod abort;
mod logger;
mod write;

pub use self::abort::Abortable;
pub use self::logger::Logger;
pub use self::write::WriteExt;
