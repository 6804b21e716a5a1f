extern crate crispyr_design;

use crispyr_design::enzyme::Enzyme;
use crispyr_design::pam::Position;

#[test]
fn test_enzyme_spcas9() {
    assert_eq!(Enzyme::get("spcas9").map(|v| v.name), Some("SpCas9".into()));
    assert_eq!(Enzyme::get("SpCas9").map(|v| v.name), Some("SpCas9".into()));
    assert_eq!(Enzyme::get("SPCAS9").map(|v| v.name), Some("SpCas9".into()));
}

#[test]
fn test_enzyme_variants() {
    assert_eq!(Enzyme::get("SpCas9-VRQR"), Some(Enzyme::spcas9_vrqr()));
    assert_eq!(Enzyme::get("xcas9"), Some(Enzyme::xcas9()));
    assert_eq!(Enzyme::get("Cas12a"), Some(Enzyme::cas12a()));
    assert_eq!(Enzyme::get("cas12F"), Some(Enzyme::cas12f()));
}

#[test]
fn test_enzyme_unknown() {
    assert_eq!(Enzyme::get("Cas9"), None);
    assert_eq!(Enzyme::get("Cas12"), None);
    assert_eq!(Enzyme::get("SpCas9 "), None);
    assert_eq!(Enzyme::get(""), None);
}

#[test]
fn test_enzyme_profiles() {
    let profiles: Vec<_> = Enzyme::all()
        .into_iter()
        .map(|e| (e.name.clone(), e.pam.to_string().into_owned(), e.grna_len, e.pam.position()))
        .collect();

    assert_eq!(
        profiles,
        vec![
            ("SpCas9".to_string(), "NGG".to_string(), 20, Position::Tail),
            ("SpCas9-VRQR".to_string(), "NGA".to_string(), 20, Position::Tail),
            ("xCas9".to_string(), "NG".to_string(), 20, Position::Tail),
            ("Cas12a".to_string(), "TTTV".to_string(), 23, Position::Head),
            ("Cas12f".to_string(), "TTTN".to_string(), 23, Position::Head),
        ]
    );
}

#[test]
fn test_enzyme_profiles_compile() {
    for enzyme in Enzyme::all() {
        assert!(enzyme.pam.motif().is_ok(), "{}", enzyme.name);
    }
}

#[test]
fn test_enzyme_custom() {
    let enzyme = Enzyme::custom(b"NNGRRT", 21, Position::Tail);

    assert_eq!(enzyme.name, "Custom-NNGRRT");
    assert_eq!(enzyme.grna_len, 21);
    assert_eq!(enzyme.pam.position(), Position::Tail);
    assert_eq!(enzyme.pam.len(), 6);
}
