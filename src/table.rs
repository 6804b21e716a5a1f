use std::fmt::Debug;
use std::fs::File;
use std::io::prelude::*;
use std::io::BufReader;
use std::path::Path;

use crate::constants::TABLE_HEADER;
use crate::errors::*;
use crate::scan::Site;

/// Reads a tab-separated table, skipping blank lines.
pub fn read<P: AsRef<Path> + Debug>(path: &P) -> Result<Vec<Vec<String>>> {
    let file = File::open(path).chain_err(|| format!("failed to open table {:?}", path))?;
    let reader = BufReader::new(file);

    let mut table: Vec<Vec<String>> = Vec::new();
    for line in reader.lines() {
        let line = line.chain_err(|| "error reading line from table")?;
        if !line.trim().is_empty() {
            table.push(line.split('\t').map(|v| v.to_string()).collect());
        }
    }

    Ok(table)
}

/// Writes the CSV header; a leading `Name` column is added when sites from
/// more than one sequence share the table.
pub fn write_header(out: &mut dyn Write, with_name: bool) -> Result<()> {
    if with_name {
        write!(out, "Name,").chain_err(|| "failed to write output header")?;
    }

    writeln!(out, "{}", TABLE_HEADER.join(",")).chain_err(|| "failed to write output header")
}

pub fn write_sites(out: &mut dyn Write, name: Option<&str>, sites: &[Site]) -> Result<()> {
    for site in sites {
        if let Some(name) = name {
            write!(out, "{},", name).chain_err(|| "failed to write output row")?;
        }

        writeln!(
            out,
            "{},{},{},{},{},{},{}",
            site.position(),
            site.strand_symbol(),
            site.pam(),
            site.spacer(),
            site.score(),
            site.grna_start(),
            site.grna_end(),
        )
        .chain_err(|| "failed to write output row")?;
    }

    Ok(())
}
