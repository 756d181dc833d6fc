//   sample-vcs - a sample version control provider
//   Copyright (C) 2016, 2017 Matthias Beyer <mail@beyermatthias.de>
//   Copyright (C) 2016, 2017 Julian Ganz <neither@nut.email>
//
//   This program is free software; you can redistribute it and/or modify
//   it under the terms of the GNU General Public License version 2 as
//   published by the Free Software Foundation.
//

use std::io::{Result as RResult, Write};

use display::Tabular;

pub trait WriteExt {
    /// Write one line of tab separated columns per row
    ///
    fn write_rows<I, T>(&mut self, rows: I) -> RResult<()>
        where I: IntoIterator<Item = T>,
              T: Tabular;
}

impl<W> WriteExt for W
    where W: Write
{
    fn write_rows<I, T>(&mut self, rows: I) -> RResult<()>
        where I: IntoIterator<Item = T>,
              T: Tabular
    {
        for row in rows {
            write!(self, "{}\n", row.columns().join("\t"))?;
        }
        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use libsamplevcs::folder::Folder;

    #[test]
    fn rows_are_tab_separated() {
        let mut out = Vec::new();
        out.write_rows(vec![Folder::new("test://Server/Root/Test", "Test"),
                            Folder::new("test://Server/Root/Training", "Training")])
            .expect("Could not write rows");
        assert_eq!(String::from_utf8(out).expect("Invalid UTF-8"),
                   "test://Server/Root/Test\tTest\ntest://Server/Root/Training\tTraining\n");
    }
}
