use std::io::Write;

use bio::io::fasta;

use crate::args::FindArgs;
use crate::commands::write_debug_log;
use crate::common::{open_file, open_file_or_stdout};
use crate::design::Design;
use crate::errors::*;
use crate::messages::{Level, MessageLog};
use crate::progress;
use crate::sequence::{sanitize, Sequence};
use crate::table;

fn read_records(args: &FindArgs) -> Result<Vec<fasta::Record>> {
    let reader = fasta::Reader::from_file(&args.fasta)
        .chain_err(|| format!("failed to open FASTA file {:?}", args.fasta))?;

    let mut records = Vec::new();
    for record in reader.records() {
        let record = record.chain_err(|| "failed to read sequence")?;
        record.check().map_err(|v| ErrorKind::Msg(v.into()))?;

        records.push(record);
    }

    Ok(records)
}

fn design_record(args: &FindArgs, record: &fasta::Record) -> Result<Design> {
    let sequence = Sequence::new(&sanitize(record.seq()))
        .chain_err(|| format!("invalid sequence {:?}", record.id()))?;

    Design::with_enzyme(&sequence, &args.enzyme, record.id())
}

fn collect_all_targets(args: &FindArgs, log: &mut MessageLog) -> Result<()> {
    log.info(format!("\nReading sequences from {:?}", args.fasta));
    let records = read_records(args)?;
    log.info(format!("  read {} sequences", records.len()));

    let mut out = open_file_or_stdout(&args.output)?;
    let mut annotation = match &args.annotation {
        Some(path) => Some(open_file(path)?),
        None => None,
    };

    // Names are only needed to tell multiple sequences apart
    let with_name = records.len() > 1;
    table::write_header(&mut *out, with_name)?;

    log.info(format!(
        "Finding {} target sites (PAM {})",
        args.enzyme.name,
        args.enzyme.pam.to_string()
    ));

    let mut summaries = Vec::with_capacity(records.len());
    let progress = progress::sequences(records.len());
    for record in &records {
        progress.set_message(record.id());

        let design = design_record(args, record)?;
        let name = if with_name { Some(design.label()) } else { None };
        table::write_sites(&mut *out, name, design.sites())?;

        if let Some(annotation) = &mut annotation {
            annotation
                .write_all(design.annotation().as_bytes())
                .chain_err(|| "failed to write annotation")?;
        }

        summaries.push(design.summarize());
        progress.inc(1);
    }

    progress.finish();

    for summary in summaries {
        log.info(format!("  {}", summary));
    }

    out.flush().chain_err(|| "failed to write output")?;
    if let Some(mut annotation) = annotation {
        annotation
            .flush()
            .chain_err(|| "failed to write annotation")?;
    }

    Ok(())
}

pub fn main(args: &FindArgs) -> Result<()> {
    ::rayon::ThreadPoolBuilder::new()
        .num_threads(args.threads)
        .build_global()
        .chain_err(|| "failed to build thread pool")?;

    let mut log = MessageLog::default();
    let result = collect_all_targets(args, &mut log);
    if let Err(e) = &result {
        log.push(Level::Error, e.to_string());
    }

    write_debug_log(&args.debug_log, &log)?;

    result
}
