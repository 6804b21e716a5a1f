use clap::{App, Arg, ArgMatches, SubCommand};

use crate::constants::DEFAULT_LABEL;
use crate::enzyme::Enzyme;
use crate::errors::*;
use crate::pam::Position;

#[derive(Debug)]
pub struct FindArgs {
    pub fasta: String,
    pub output: Option<String>,
    pub annotation: Option<String>,
    pub enzyme: Enzyme,
    pub threads: usize,
    pub debug_log: Option<String>,
}

#[derive(Debug)]
pub struct DesignArgs {
    pub sequence: String,
    pub name: String,
    pub output: Option<String>,
    pub annotation: Option<String>,
    pub enzyme: Enzyme,
    pub debug_log: Option<String>,
}

#[derive(Debug)]
pub struct ScoreArgs {
    pub table: String,
    pub output: Option<String>,
    pub enzyme: Enzyme,
}

pub enum Args {
    Find(FindArgs),
    Design(DesignArgs),
    Score(ScoreArgs),
    Enzymes,
    None,
}

fn enzyme_args<'a, 'b>(command: App<'a, 'b>) -> App<'a, 'b> {
    command
        .arg(
            Arg::with_name("enzyme")
                .long("enzyme")
                .takes_value(true)
                .default_value("SpCas9")
                .help("Nuclease profile; see the 'enzymes' command for available profiles."),
        )
        .arg(
            Arg::with_name("pam")
                .long("pam")
                .takes_value(true)
                .requires("grna-len")
                .help("Custom PAM motif using IUPAC codes; overrides --enzyme."),
        )
        .arg(
            Arg::with_name("grna-len")
                .long("grna-len")
                .takes_value(true)
                .requires("pam")
                .help("Spacer length for a custom PAM."),
        )
        .arg(
            Arg::with_name("pam-position")
                .long("pam-position")
                .takes_value(true)
                .possible_values(&["head", "tail"])
                .default_value("tail")
                .help("Placement of a custom PAM relative to the spacer."),
        )
}

fn output_args<'a, 'b>(command: App<'a, 'b>) -> App<'a, 'b> {
    command
        .arg(
            Arg::with_name("output")
                .long("output")
                .takes_value(true)
                .help("Write CSV table of target sites to this file instead of STDOUT."),
        )
        .arg(
            Arg::with_name("annotation")
                .long("annotation")
                .takes_value(true)
                .help("Write LWGV annotation of target sites to this file."),
        )
        .arg(
            Arg::with_name("debug-log")
                .long("debug-log")
                .takes_value(true)
                .help("Write the most recent diagnostic messages to this file."),
        )
}

fn find_command<'a, 'b>() -> App<'a, 'b> {
    let command = SubCommand::with_name("find")
        .about("Find and score gRNA targets in FASTA sequence(s)")
        .arg(
            Arg::with_name("fasta")
                .help("FASTA file containing one or more sequences.")
                .required(true),
        )
        .arg(
            Arg::with_name("threads")
                .long("threads")
                .takes_value(true)
                .allow_hyphen_values(true)
                .number_of_values(1)
                .default_value("0")
                .help("Number of threads used for computation (0 for automatic)."),
        );

    output_args(enzyme_args(command))
}

fn design_command<'a, 'b>() -> App<'a, 'b> {
    let command = SubCommand::with_name("design")
        .about("Find and score gRNA targets in a sequence given on the command-line")
        .arg(
            Arg::with_name("sequence")
                .help("Nucleotide sequence; characters other than ACGTN are ignored.")
                .required(true),
        )
        .arg(
            Arg::with_name("name")
                .long("name")
                .takes_value(true)
                .default_value(DEFAULT_LABEL)
                .help("Sequence name used in the annotation."),
        );

    output_args(enzyme_args(command))
}

fn score_command<'a, 'b>() -> App<'a, 'b> {
    let command = SubCommand::with_name("score")
        .about("Score table of gRNA sequences by composition")
        .arg(
            Arg::with_name("table")
                .help("Table with gRNA sequences (optionally with PAM) in the first column.")
                .required(true),
        )
        .arg(
            Arg::with_name("output")
                .long("output")
                .takes_value(true)
                .help("Write scored table to this file instead of STDOUT."),
        );

    enzyme_args(command)
}

fn enzymes_command<'a, 'b>() -> App<'a, 'b> {
    SubCommand::with_name("enzymes").about("List available nuclease profiles")
}

fn get_str<'a>(matches: &'a ArgMatches, key: &str) -> Result<&'a str> {
    match matches.value_of(key) {
        Some(value) => Ok(value),
        None => Err(format!("Required option {:?} not set", key).into()),
    }
}

fn get_string(matches: &ArgMatches, key: &str) -> Result<String> {
    get_str(matches, key).map(|v| v.into())
}

fn get_opt_string(matches: &ArgMatches, key: &str) -> Option<String> {
    matches.value_of(key).map(|s| s.to_string())
}

fn parse_usize(matches: &ArgMatches, key: &str) -> Result<usize> {
    let s = get_str(matches, key)?;

    match s.parse::<usize>() {
        Ok(v) => Ok(v),
        Err(err) => Err(format!("Invalid --{} ({:?}) value: {}", key, s, err).into()),
    }
}

fn parse_enzyme(matches: &ArgMatches) -> Result<Enzyme> {
    if let Some(pam) = matches.value_of("pam") {
        let grna_len = parse_usize(matches, "grna-len")?;
        let position_str = get_str(matches, "pam-position")?;
        let position = match Position::get(position_str) {
            Some(position) => position,
            None => return Err(format!("Invalid --pam-position {:?}", position_str).into()),
        };

        let enzyme = Enzyme::custom(pam.as_bytes(), grna_len, position);
        enzyme.pam.motif()?;

        Ok(enzyme)
    } else {
        let enzyme_str = get_str(matches, "enzyme")?;

        match Enzyme::get(enzyme_str) {
            Some(enzyme) => Ok(enzyme),
            None => Err(ErrorKind::UnknownEnzyme(enzyme_str.into()).into()),
        }
    }
}

pub fn parse_args() -> Result<Args> {
    let matches = App::new("CRISPyR-design")
        .version("0.1.0")
        .author("Mikkel Schubert")
        .subcommand(find_command())
        .subcommand(design_command())
        .subcommand(score_command())
        .subcommand(enzymes_command())
        .get_matches();

    if let Some(matches) = matches.subcommand_matches("find") {
        Ok(Args::Find(FindArgs {
            fasta: get_string(matches, "fasta")?,
            output: get_opt_string(matches, "output"),
            annotation: get_opt_string(matches, "annotation"),
            enzyme: parse_enzyme(matches)?,
            threads: parse_usize(matches, "threads")?,
            debug_log: get_opt_string(matches, "debug-log"),
        }))
    } else if let Some(matches) = matches.subcommand_matches("design") {
        Ok(Args::Design(DesignArgs {
            sequence: get_string(matches, "sequence")?,
            name: get_string(matches, "name")?,
            output: get_opt_string(matches, "output"),
            annotation: get_opt_string(matches, "annotation"),
            enzyme: parse_enzyme(matches)?,
            debug_log: get_opt_string(matches, "debug-log"),
        }))
    } else if let Some(matches) = matches.subcommand_matches("score") {
        Ok(Args::Score(ScoreArgs {
            table: get_string(matches, "table")?,
            output: get_opt_string(matches, "output"),
            enzyme: parse_enzyme(matches)?,
        }))
    } else if matches.subcommand_matches("enzymes").is_some() {
        Ok(Args::Enzymes)
    } else {
        eprintln!("{}", matches.usage());

        Ok(Args::None)
    }
}
