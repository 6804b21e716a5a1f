use std::fs::File;
use std::io;
use std::io::Write;

use crate::errors::*;

pub fn open_file_or_stdout(file: &Option<String>) -> Result<Box<dyn Write>> {
    if let Some(path) = file {
        let handle =
            File::create(path).chain_err(|| format!("could not create output file {:?}", path))?;
        let writer = io::BufWriter::new(handle);

        Ok(Box::new(writer))
    } else {
        Ok(Box::new(io::stdout()))
    }
}

pub fn open_file(path: &str) -> Result<Box<dyn Write>> {
    open_file_or_stdout(&Some(path.to_owned()))
}
