extern crate crispyr_design;

use crispyr_design::score::*;

#[test]
fn test_perfect_spacer() {
    // 50% GC, no triples, no poly-T
    assert_eq!(calculate_score(b"ACGTACGTACGTACGTACGT"), 100);
}

#[test]
fn test_gc_boundaries() {
    // 40% and 60% are inside the accepted range
    assert!(!gc_out_of_range(b"AAAAACGTACGTACGTACGT"));
    assert!(!gc_out_of_range(b"GCGCGCGTGCACGTACATAT"));
    // 65%, 70% and 25%
    assert!(gc_out_of_range(b"GCGCACGTGCACGTACGTAC"));
    assert!(gc_out_of_range(b"GCGCGCGTGCACGTACGTAC"));
    assert!(gc_out_of_range(b"ATATACGTACATATACGTAT"));
}

#[test]
fn test_gc_penalty() {
    assert_eq!(calculate_score(b"GCGCACGTGCACGTACGTAC"), 80);
    assert_eq!(calculate_score(b"ATATACGTACATATACGTAT"), 80);
}

#[test]
fn test_gc_count() {
    assert_eq!(gc_count(b""), 0);
    assert_eq!(gc_count(b"ATAT"), 0);
    assert_eq!(gc_count(b"GCAT"), 2);
}

#[test]
fn test_empty_spacer() {
    assert!(!gc_out_of_range(b""));
    assert_eq!(calculate_score(b""), 100);
}

#[test]
fn test_poly_t_penalty() {
    assert!(has_poly_t(b"ACTTTTG"));
    assert!(!has_poly_t(b"ACTTTG"));
    // -30 poly-T, -20 for the two TTT triples
    assert_eq!(calculate_score(b"TTTTACGACGATCGATCAGC"), 50);
    assert_eq!(calculate_score(b"ACGTTTTGCACGTGCACGTA"), 50);
}

#[test]
fn test_homopolymer_triples() {
    assert_eq!(homopolymer_triples(b""), 0);
    assert_eq!(homopolymer_triples(b"AA"), 0);
    assert_eq!(homopolymer_triples(b"AAA"), 1);
    assert_eq!(homopolymer_triples(b"AAAAA"), 3);
    assert_eq!(homopolymer_triples(b"AAACCCGGG"), 3);
    assert_eq!(homopolymer_triples(b"ACGACG"), 0);
}

#[test]
fn test_homopolymer_penalty() {
    assert_eq!(calculate_score(b"GGGCACGTACGTACGTACGA"), 90);
    // 40% GC, three overlapping triples
    assert_eq!(calculate_score(b"AAAAACGTACGTACGTACGT"), 70);
}

#[test]
fn test_score_is_floored_at_zero() {
    assert_eq!(calculate_score(b"AAAAAAAAAAAAAAAAAAAA"), 0);
    assert_eq!(calculate_score(b"TTTTAAAAAAAAAAAAAAAAAAAA"), 0);
}

#[test]
fn test_short_spacer_penalties_combine() {
    // -20 GC, -30 poly-T, -20 triples
    assert_eq!(calculate_score(b"TTTT"), 30);
}

#[test]
fn test_lowercase_spacer() {
    assert_eq!(calculate_score(b"tttt"), calculate_score(b"TTTT"));
    assert_eq!(calculate_score(b"acgtacgtacgtacgtacgt"), 100);
}
