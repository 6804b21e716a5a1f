use crate::errors::*;

/// Uppercase nucleotide sequence handed to the scanner.
#[derive(Clone, Debug, PartialEq)]
pub struct Sequence {
    bases: Vec<u8>,
}

impl Sequence {
    /// Canonicalizes `raw` to uppercase. Fails if it contains no A, C, G, T
    /// or N at all; other characters are kept and simply never match a PAM.
    pub fn new(raw: &[u8]) -> Result<Sequence> {
        let bases = raw.to_ascii_uppercase();

        if bases.is_empty() {
            Err(ErrorKind::InvalidSequence("sequence is empty".into()).into())
        } else if !bases.iter().any(|&nuc| is_nucleotide(nuc)) {
            let reason = "no valid nucleotides (A, C, G, T, N) found".into();

            Err(ErrorKind::InvalidSequence(reason).into())
        } else {
            Ok(Sequence { bases })
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bases
    }

    pub fn len(&self) -> usize {
        self.bases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bases.is_empty()
    }
}

pub fn is_nucleotide(nuc: u8) -> bool {
    match nuc {
        b'A' | b'C' | b'G' | b'T' | b'N' => true,
        _ => false,
    }
}

/// Uppercases `raw` and drops every character outside A, C, G, T and N,
/// including whitespace and line breaks.
pub fn sanitize(raw: &[u8]) -> Vec<u8> {
    raw.iter()
        .map(|nuc| nuc.to_ascii_uppercase())
        .filter(|&nuc| is_nucleotide(nuc))
        .collect()
}
