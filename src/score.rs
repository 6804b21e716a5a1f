use crate::constants::*;

// A spacer starts out with MAX_SCORE points and loses points for composition
// features that are known to reduce guide efficiency:
//
//   GC content below 40% or above 60%               -20
//   contains a poly-T stretch (TTTT)                -30
//   every position starting a homopolymer triple    -10 (cumulative)
//
// Scores are floored at 0. A run of n identical bases (n >= 3) thus costs
// (n - 2) * 10 points, e.g. 'AAAAA' contains three overlapping triples.

// The helper functions below expect uppercase spacers

pub fn gc_count(spacer: &[u8]) -> usize {
    spacer
        .iter()
        .filter(|nuc| match nuc {
            b'G' | b'C' => true,
            _ => false,
        })
        .count()
}

/// True if the GC fraction lies outside [0.40, 0.60]; empty spacers have no
/// GC fraction and are never penalized.
pub fn gc_out_of_range(spacer: &[u8]) -> bool {
    if spacer.is_empty() {
        return false;
    }

    let gc_pct = gc_count(spacer) * 100;

    gc_pct < MIN_GC_PCT * spacer.len() || gc_pct > MAX_GC_PCT * spacer.len()
}

pub fn has_poly_t(spacer: &[u8]) -> bool {
    spacer
        .windows(POLY_T.len())
        .any(|window| window == POLY_T)
}

/// Number of positions `i` where `spacer[i..i + 3]` is a single repeated base.
pub fn homopolymer_triples(spacer: &[u8]) -> usize {
    spacer
        .windows(HOMOPOLYMER_LEN)
        .filter(|window| window.iter().all(|&nuc| nuc == window[0]))
        .count()
}

/// Composition score in [0, 100] for a spacer (case-insensitive).
pub fn calculate_score(spacer: &[u8]) -> u32 {
    let spacer = spacer.to_ascii_uppercase();
    let mut penalty = 0;

    if gc_out_of_range(&spacer) {
        penalty += GC_PENALTY;
    }

    if has_poly_t(&spacer) {
        penalty += POLY_T_PENALTY;
    }

    penalty += homopolymer_triples(&spacer) as u32 * HOMOPOLYMER_PENALTY;

    MAX_SCORE.saturating_sub(penalty)
}
