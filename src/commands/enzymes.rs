use std::io::{self, Write};

use crate::enzyme::Enzyme;
use crate::errors::*;

pub fn main() -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    writeln!(out, "Name\tPAM\tSpacer\tPAM position").chain_err(|| "failed to write header")?;
    for enzyme in Enzyme::all() {
        writeln!(
            out,
            "{}\t{}\t{}\t{}",
            enzyme.name,
            enzyme.pam.to_string(),
            enzyme.grna_len,
            enzyme.pam.position().name()
        )
        .chain_err(|| "failed to write output row")?;
    }

    Ok(())
}
