use std::borrow::Cow;

use bio_types::strand::Strand;
use rayon::prelude::*;

use crate::enzyme::Enzyme;
use crate::errors::*;
use crate::iupac::Motif;
use crate::score::calculate_score;
use crate::sequence::Sequence;
use crate::strand::reverse_complement;

/// Candidate target site. All coordinates are 1-based, inclusive, and relative
/// to the forward strand, regardless of the strand the PAM was found on.
#[derive(Clone, Debug, PartialEq)]
pub struct Site {
    position: usize,
    pam: Vec<u8>,
    strand: Strand,
    spacer: Vec<u8>,
    grna_start: usize,
    grna_end: usize,
    score: u32,
}

impl Site {
    /// Builds a site and scores its spacer. `pam` and `spacer` are given as
    /// read 5' to 3' on `strand`.
    pub fn new(
        position: usize,
        pam: &[u8],
        strand: Strand,
        spacer: &[u8],
        grna_start: usize,
    ) -> Site {
        Site {
            position,
            pam: pam.to_owned(),
            strand,
            spacer: spacer.to_owned(),
            grna_start,
            grna_end: grna_start + spacer.len() - 1,
            score: calculate_score(spacer),
        }
    }

    /// Start of the PAM
    pub fn position(&self) -> usize {
        self.position
    }

    /// Last base of the PAM
    pub fn pam_end(&self) -> usize {
        self.position + self.pam.len() - 1
    }

    /// PAM as read 5' to 3' on the site's own strand.
    pub fn pam(&self) -> Cow<str> {
        String::from_utf8_lossy(&self.pam)
    }

    pub fn strand_symbol(&self) -> &str {
        self.strand.strand_symbol()
    }

    /// Spacer as read 5' to 3' on the site's own strand; for '-' sites this is
    /// the reverse complement of the forward bases at `grna_start..=grna_end`.
    pub fn spacer(&self) -> Cow<str> {
        String::from_utf8_lossy(&self.spacer)
    }

    pub fn grna_start(&self) -> usize {
        self.grna_start
    }

    pub fn grna_end(&self) -> usize {
        self.grna_end
    }

    pub fn score(&self) -> u32 {
        self.score
    }
}

pub type Sites = Vec<Site>;

/// PAM match with its spacer window, in coordinates of the scanned sequence.
struct Hit {
    pam_start: usize,
    spacer_start: usize,
    spacer_end: usize,
}

fn find_hits(sequence: &[u8], enzyme: &Enzyme, motif: &Motif) -> Vec<Hit> {
    sequence
        .par_windows(motif.len())
        .enumerate()
        .filter_map(|(idx, window)| {
            if motif.matches(window) {
                enzyme
                    .pam
                    .spacer_window(idx, enzyme.grna_len, sequence.len())
                    .map(|(spacer_start, spacer_end)| Hit {
                        pam_start: idx,
                        spacer_start,
                        spacer_end,
                    })
            } else {
                None
            }
        })
        .collect()
}

pub fn collect_forward_targets(sequence: &[u8], enzyme: &Enzyme, motif: &Motif) -> Sites {
    find_hits(sequence, enzyme, motif)
        .into_par_iter()
        .map(|hit| {
            let pam = &sequence[hit.pam_start..hit.pam_start + motif.len()];
            let spacer = &sequence[hit.spacer_start..hit.spacer_end];

            Site::new(hit.pam_start + 1, pam, Strand::Forward, spacer, hit.spacer_start + 1)
        })
        .collect()
}

pub fn collect_reverse_targets(sequence: &[u8], enzyme: &Enzyme, motif: &Motif) -> Sites {
    let len = sequence.len();
    let revcomp = reverse_complement(sequence);

    find_hits(&revcomp, enzyme, motif)
        .into_par_iter()
        .map(|hit| {
            let pam = &revcomp[hit.pam_start..hit.pam_start + motif.len()];
            let pam_start = len - hit.pam_start - motif.len();

            // Spacer is taken from the forward strand and reverse complemented
            let spacer_start = len - hit.spacer_end;
            let spacer_end = len - hit.spacer_start;
            let spacer = reverse_complement(&sequence[spacer_start..spacer_end]);

            Site::new(pam_start + 1, pam, Strand::Reverse, &spacer, spacer_start + 1)
        })
        .collect()
}

/// Forward strand sites followed by reverse strand sites, each in scan order.
pub fn collect_targets(sequence: &Sequence, enzyme: &Enzyme) -> Result<Sites> {
    let motif = enzyme.pam.motif()?;

    if enzyme.grna_len == 0 {
        return Err(format!("spacer length for {} must be at least 1", enzyme.name).into());
    } else if enzyme.grna_len.checked_add(motif.len()).is_none() {
        return Err(format!("spacer length for {} is too large", enzyme.name).into());
    }

    let mut targets = Vec::new();
    targets.append(&mut collect_forward_targets(sequence.as_bytes(), enzyme, &motif));
    targets.append(&mut collect_reverse_targets(sequence.as_bytes(), enzyme, &motif));

    Ok(targets)
}
