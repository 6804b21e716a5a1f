use std::cmp::Reverse;
use std::io::Write;

use crate::annotation;
use crate::constants::*;
use crate::enzyme::Enzyme;
use crate::errors::*;
use crate::scan::{collect_targets, Site, Sites};
use crate::sequence::Sequence;
use crate::table;

/// Ranked target sites for one sequence and nuclease profile.
#[derive(Debug)]
pub struct Design {
    label: String,
    enzyme: Enzyme,
    sequence_length: usize,
    sites: Sites,
}

impl Design {
    /// Scans `sequence` with the named nuclease profile. An empty `label`
    /// is replaced by the default sequence name.
    pub fn new(sequence: &[u8], enzyme_name: &str, label: &str) -> Result<Design> {
        let enzyme = match Enzyme::get(enzyme_name) {
            Some(enzyme) => enzyme,
            None => return Err(ErrorKind::UnknownEnzyme(enzyme_name.into()).into()),
        };

        Self::with_enzyme(&Sequence::new(sequence)?, &enzyme, label)
    }

    pub fn with_enzyme(sequence: &Sequence, enzyme: &Enzyme, label: &str) -> Result<Design> {
        let mut sites = collect_targets(sequence, enzyme)?;
        // Stable; equal scores keep forward-before-reverse scan order
        sites.sort_by_key(|site| Reverse(site.score()));

        let label = if label.is_empty() {
            DEFAULT_LABEL
        } else {
            label
        };

        Ok(Design {
            label: label.into(),
            enzyme: enzyme.clone(),
            sequence_length: sequence.len(),
            sites,
        })
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn sequence_length(&self) -> usize {
        self.sequence_length
    }

    pub fn sites(&self) -> &[Site] {
        &self.sites
    }

    pub fn high_quality_sites(&self) -> usize {
        self.sites
            .iter()
            .filter(|site| site.score() >= HIGH_QUALITY_SCORE)
            .count()
    }

    pub fn summarize(&self) -> String {
        format!(
            "{}: {} bp, {} {} sites, {} with score >= {}",
            self.label,
            self.sequence_length,
            self.sites.len(),
            self.enzyme.name,
            self.high_quality_sites(),
            HIGH_QUALITY_SCORE
        )
    }

    /// LWGV annotation document for the sites.
    pub fn annotation(&self) -> String {
        annotation::render(&self.label, &self.sites)
    }

    /// CSV table of the sites, including header.
    pub fn write_table(&self, out: &mut dyn Write) -> Result<()> {
        table::write_header(out, false)?;
        table::write_sites(out, None, &self.sites)
    }
}

pub fn design(sequence: &[u8], enzyme_name: &str, label: &str) -> Result<Design> {
    Design::new(sequence, enzyme_name, label)
}
