use bio::alphabets::dna;

/// Complement of a single base; only A, C, G and T (either case) are
/// complemented, every other byte is returned as is.
pub fn complement(nuc: u8) -> u8 {
    match nuc {
        b'A' | b'C' | b'G' | b'T' | b'a' | b'c' | b'g' | b't' => dna::complement(nuc),
        _ => nuc,
    }
}

pub fn reverse_complement(sequence: &[u8]) -> Vec<u8> {
    sequence.iter().rev().map(|&nuc| complement(nuc)).collect()
}
