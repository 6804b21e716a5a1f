use std::io::Write;

use crate::args::DesignArgs;
use crate::commands::write_debug_log;
use crate::common::{open_file, open_file_or_stdout};
use crate::design::Design;
use crate::errors::*;
use crate::messages::{Level, MessageLog};
use crate::sequence::{sanitize, Sequence};

fn design_sequence(args: &DesignArgs, log: &mut MessageLog) -> Result<()> {
    let sanitized = sanitize(args.sequence.as_bytes());
    if sanitized.len() != args.sequence.len() {
        log.verbose(format!(
            "ignored {} non-nucleotide characters",
            args.sequence.len() - sanitized.len()
        ));
    }

    let sequence = Sequence::new(&sanitized)?;
    let design = Design::with_enzyme(&sequence, &args.enzyme, &args.name)?;
    log.info(design.summarize());

    let mut out = open_file_or_stdout(&args.output)?;
    design.write_table(&mut *out)?;
    out.flush().chain_err(|| "failed to write output")?;

    if let Some(path) = &args.annotation {
        let mut annotation = open_file(path)?;
        annotation
            .write_all(design.annotation().as_bytes())
            .and_then(|_| annotation.flush())
            .chain_err(|| format!("failed to write annotation {:?}", path))?;
    }

    Ok(())
}

pub fn main(args: &DesignArgs) -> Result<()> {
    let mut log = MessageLog::default();
    let result = design_sequence(args, &mut log);
    if let Err(e) = &result {
        log.push(Level::Error, e.to_string());
    }

    write_debug_log(&args.debug_log, &log)?;

    result
}
