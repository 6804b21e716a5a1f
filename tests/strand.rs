extern crate crispyr_design;

use crispyr_design::strand::{complement, reverse_complement};

// Deterministic pseudo-random sequences (xorshift)
fn random_sequences(count: usize, alphabet: &[u8]) -> Vec<Vec<u8>> {
    let mut state: u32 = 0x9E37_79B9;
    let mut next = move || {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        state
    };

    (0..count)
        .map(|_| {
            let len = next() as usize % 64;
            (0..len)
                .map(|_| alphabet[next() as usize % alphabet.len()])
                .collect()
        })
        .collect()
}

#[test]
fn test_complement() {
    assert_eq!(complement(b'A'), b'T');
    assert_eq!(complement(b'C'), b'G');
    assert_eq!(complement(b'G'), b'C');
    assert_eq!(complement(b'T'), b'A');
    assert_eq!(complement(b'a'), b't');
}

#[test]
fn test_complement_passes_other_characters() {
    assert_eq!(complement(b'N'), b'N');
    assert_eq!(complement(b'R'), b'R');
    assert_eq!(complement(b'-'), b'-');
}

#[test]
fn test_reverse_complement() {
    assert_eq!(reverse_complement(b""), b"");
    assert_eq!(reverse_complement(b"A"), b"T");
    assert_eq!(reverse_complement(b"AACGTT"), b"AACGTT");
    assert_eq!(reverse_complement(b"AAAACGG"), b"CCGTTTT");
}

#[test]
fn test_reverse_complement_keeps_n_in_mirrored_position() {
    assert_eq!(reverse_complement(b"ANGC"), b"GCNT");
    assert_eq!(reverse_complement(b"NNA"), b"TNN");
}

#[test]
fn test_reverse_complement_involution() {
    for seq in random_sequences(500, b"ACGT") {
        assert_eq!(reverse_complement(&reverse_complement(&seq)), seq);
    }
}

#[test]
fn test_reverse_complement_involution_with_n() {
    for seq in random_sequences(500, b"ACGTN") {
        assert_eq!(reverse_complement(&reverse_complement(&seq)), seq);
    }
}
