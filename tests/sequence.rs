extern crate crispyr_design;

use crispyr_design::sequence::{is_nucleotide, sanitize, Sequence};

#[test]
fn test_sequence_uppercase() {
    let sequence = Sequence::new(b"acgtn").unwrap();

    assert_eq!(sequence.as_bytes(), b"ACGTN");
    assert_eq!(sequence.len(), 5);
}

#[test]
fn test_sequence_keeps_other_characters() {
    let sequence = Sequence::new(b"AC-GT").unwrap();

    assert_eq!(sequence.as_bytes(), b"AC-GT");
}

#[test]
fn test_sequence_empty() {
    assert!(Sequence::new(b"").is_err());
}

#[test]
fn test_sequence_without_nucleotides() {
    assert!(Sequence::new(b"xyz 123").is_err());
    assert!(Sequence::new(b"N").is_ok());
}

#[test]
fn test_is_nucleotide() {
    for &nuc in b"ACGTN" {
        assert!(is_nucleotide(nuc));
    }

    assert!(!is_nucleotide(b'a'));
    assert!(!is_nucleotide(b'R'));
    assert!(!is_nucleotide(b'\n'));
}

#[test]
fn test_sanitize() {
    assert_eq!(sanitize(b"ac gt\nNN\r\n"), b"ACGTNN".to_vec());
    assert_eq!(sanitize(b"ACRYGT"), b"ACGT".to_vec());
    assert_eq!(sanitize(b"123"), Vec::<u8>::new());
}
