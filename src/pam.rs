use std::borrow::Cow;

use crate::errors::*;
use crate::iupac::Motif;

/// Placement of the PAM relative to the spacer (protospacer).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Position {
    /// PAM precedes the spacer (5' PAM, e.g. Cas12a)
    Head,
    /// PAM follows the spacer (3' PAM, e.g. SpCas9)
    Tail,
}

impl Position {
    pub fn get(name: &str) -> Option<Position> {
        match name.to_ascii_lowercase().as_ref() {
            "head" => Some(Position::Head),
            "tail" => Some(Position::Tail),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Position::Head => "head",
            Position::Tail => "tail",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PAM {
    pam: Vec<u8>,
    position: Position,
}

impl PAM {
    pub fn head(query: &[u8]) -> PAM {
        PAM {
            pam: query.to_owned(),
            position: Position::Head,
        }
    }

    pub fn tail(query: &[u8]) -> PAM {
        PAM {
            pam: query.to_owned(),
            position: Position::Tail,
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// Compiles the PAM into a matcher; fails on empty or non-IUPAC motifs.
    pub fn motif(&self) -> Result<Motif> {
        Motif::new(&self.pam)
    }

    /// Returns the spacer portion of a target written as PAM + spacer (head)
    /// or spacer + PAM (tail), provided that `motif` (compiled from this PAM)
    /// matches.
    pub fn spacer_of<'a>(&self, motif: &Motif, target: &'a [u8]) -> Option<&'a [u8]> {
        if target.len() <= motif.len() {
            return None;
        }

        let (pam, spacer) = match self.position {
            Position::Head => target.split_at(motif.len()),
            Position::Tail => {
                let (spacer, pam) = target.split_at(target.len() - motif.len());

                (pam, spacer)
            }
        };

        if motif.matches(pam) {
            Some(spacer)
        } else {
            None
        }
    }

    /// Spacer window `[start, end)` for a PAM matched at `pam_start`, or `None`
    /// if the window does not fit inside a sequence of `seq_len` bases.
    pub fn spacer_window(
        &self,
        pam_start: usize,
        grna_len: usize,
        seq_len: usize,
    ) -> Option<(usize, usize)> {
        let (start, end) = match self.position {
            Position::Head => {
                let start = pam_start.checked_add(self.len())?;

                (start, start.checked_add(grna_len)?)
            }
            Position::Tail => (pam_start.checked_sub(grna_len)?, pam_start),
        };

        if end <= seq_len {
            Some((start, end))
        } else {
            None
        }
    }

    pub fn len(&self) -> usize {
        self.pam.len()
    }

    pub fn to_string(&self) -> Cow<str> {
        String::from_utf8_lossy(&self.pam)
    }
}
