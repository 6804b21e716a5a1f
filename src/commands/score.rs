use std::io::Write;

use rayon::prelude::*;

use crate::args::ScoreArgs;
use crate::common::open_file_or_stdout;
use crate::enzyme::Enzyme;
use crate::errors::*;
use crate::iupac::Motif;
use crate::progress;
use crate::score::calculate_score;
use crate::table;

fn is_dna(value: &[u8]) -> bool {
    !value.is_empty()
        && value.iter().all(|nuc| match nuc {
            b'A' | b'C' | b'G' | b'T' => true,
            _ => false,
        })
}

/// Score for the first column of a row; a PAM matching `motif` is removed
/// from full-length targets before the spacer is scored.
pub fn score_value(enzyme: &Enzyme, motif: &Motif, value: &str) -> Option<u32> {
    let value = value.trim().to_ascii_uppercase();
    if !is_dna(value.as_bytes()) {
        return None;
    }

    let spacer = if value.len() == enzyme.grna_len + enzyme.pam.len() {
        enzyme.pam.spacer_of(motif, value.as_bytes()).unwrap_or(value.as_bytes())
    } else {
        value.as_bytes()
    };

    Some(calculate_score(spacer))
}

fn build_row(enzyme: &Enzyme, motif: &Motif, idx: usize, row: &mut Vec<String>) {
    let score = row.first().and_then(|value| score_value(enzyme, motif, value));

    match score {
        Some(score) => row.push(score.to_string()),
        // Not a gRNA sequence; either a header or (presumably) DNA containing Ns
        None if idx == 0 => row.push("Score".into()),
        None => row.push("NA".into()),
    }
}

pub fn main(args: &ScoreArgs) -> Result<()> {
    let motif = args.enzyme.pam.motif()?;

    eprintln!("\nReading gRNA sequences from {:?}", args.table);
    let mut table =
        table::read(&args.table).chain_err(|| "failed to read table of gRNA sequences")?;
    eprintln!("  read {} rows from table.", table.len());

    let progress = progress::sequences(table.len());
    table.par_iter_mut().enumerate().for_each(|(idx, row)| {
        build_row(&args.enzyme, &motif, idx, row);

        progress.inc(1);
    });

    progress.finish();

    let mut out = open_file_or_stdout(&args.output)?;
    for row in table {
        writeln!(out, "{}", row.join("\t")).chain_err(|| "failed to write output row")?;
    }

    out.flush().chain_err(|| "failed to write output")
}
