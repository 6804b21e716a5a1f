use crate::errors::*;

const MAPPING: [(u8, &[u8]); 15] = [
    (b'A', b"A"),
    (b'C', b"C"),
    (b'G', b"G"),
    (b'T', b"T"),
    (b'R', b"AG"),
    (b'Y', b"CT"),
    (b'S', b"CG"),
    (b'W', b"AT"),
    (b'K', b"GT"),
    (b'M', b"AC"),
    (b'B', b"CGT"),
    (b'D', b"AGT"),
    (b'H', b"ACT"),
    (b'V', b"ACG"),
    (b'N', b"ACGT"),
];

lazy_static! {
    // Bitmask of the concrete nucleotides matched by each IUPAC code; 0 if not a code
    static ref IUPAC: Vec<u8> = {
        let mut table = vec![0; 256];

        for (query, matches) in &MAPPING {
            let mask = matches.iter().fold(0, |acc, &nuc| acc | nucleotide_bit(nuc));

            table[query.to_ascii_uppercase() as usize] = mask;
            table[query.to_ascii_lowercase() as usize] = mask;
        }

        table
    };
}

fn nucleotide_bit(nuc: u8) -> u8 {
    match nuc {
        b'a' | b'A' => 0b0001,
        b'c' | b'C' => 0b0010,
        b'g' | b'G' => 0b0100,
        b't' | b'T' => 0b1000,
        _ => 0,
    }
}

/// Returns the set of nucleotides matched by an IUPAC code as a bitmask, or
/// `None` if `query` is not a (case-insensitive) IUPAC nucleotide code.
pub fn mask(query: u8) -> Option<u8> {
    match IUPAC[query as usize] {
        0 => None,
        mask => Some(mask),
    }
}

/// A degenerate motif compiled into one nucleotide predicate per position.
#[derive(Clone, Debug, PartialEq)]
pub struct Motif {
    masks: Vec<u8>,
}

impl Motif {
    pub fn new(motif: &[u8]) -> Result<Motif> {
        let motif_str = || String::from_utf8_lossy(motif).into_owned();

        if motif.is_empty() {
            return Err(ErrorKind::InvalidMotif(motif_str(), "motif is empty".into()).into());
        }

        let mut masks = Vec::with_capacity(motif.len());
        for &code in motif {
            match mask(code) {
                Some(mask) => masks.push(mask),
                None => {
                    let reason = format!("{:?} is not an IUPAC nucleotide code", code as char);

                    return Err(ErrorKind::InvalidMotif(motif_str(), reason).into());
                }
            }
        }

        Ok(Motif { masks })
    }

    pub fn len(&self) -> usize {
        self.masks.len()
    }

    /// True if `window` has the length of the motif and every base is matched
    /// by the code at the same position. Degenerate bases (including 'N') in
    /// `window` never match.
    pub fn matches(&self, window: &[u8]) -> bool {
        window.len() == self.masks.len()
            && self
                .masks
                .iter()
                .zip(window.iter())
                .all(|(&mask, &nuc)| mask & nucleotide_bit(nuc) != 0)
    }
}
