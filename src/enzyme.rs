use crate::pam::{Position, PAM};

/// Nuclease profile: PAM motif, spacer length and PAM placement.
#[derive(Clone, Debug, PartialEq)]
pub struct Enzyme {
    pub name: String,

    pub grna_len: usize,

    pub pam: PAM,
}

impl Enzyme {
    pub fn get(name: &str) -> Option<Enzyme> {
        match name.to_ascii_lowercase().as_ref() {
            "spcas9" => Some(Self::spcas9()),
            "spcas9-vrqr" => Some(Self::spcas9_vrqr()),
            "xcas9" => Some(Self::xcas9()),
            "cas12a" => Some(Self::cas12a()),
            "cas12f" => Some(Self::cas12f()),
            _ => None,
        }
    }

    pub fn all() -> Vec<Enzyme> {
        vec![
            Self::spcas9(),
            Self::spcas9_vrqr(),
            Self::xcas9(),
            Self::cas12a(),
            Self::cas12f(),
        ]
    }

    /// User-defined profile; the motif is validated by `PAM::motif`.
    pub fn custom(pam: &[u8], grna_len: usize, position: Position) -> Enzyme {
        let pam = match position {
            Position::Head => PAM::head(pam),
            Position::Tail => PAM::tail(pam),
        };

        Enzyme {
            name: format!("Custom-{}", pam.to_string()),
            grna_len,
            pam,
        }
    }

    pub fn spcas9() -> Enzyme {
        Enzyme {
            name: "SpCas9".into(),
            grna_len: 20,
            pam: PAM::tail(b"NGG"),
        }
    }

    pub fn spcas9_vrqr() -> Enzyme {
        Enzyme {
            name: "SpCas9-VRQR".into(),
            grna_len: 20,
            pam: PAM::tail(b"NGA"),
        }
    }

    pub fn xcas9() -> Enzyme {
        Enzyme {
            name: "xCas9".into(),
            grna_len: 20,
            pam: PAM::tail(b"NG"),
        }
    }

    pub fn cas12a() -> Enzyme {
        Enzyme {
            name: "Cas12a".into(),
            grna_len: 23,
            pam: PAM::head(b"TTTV"),
        }
    }

    pub fn cas12f() -> Enzyme {
        Enzyme {
            name: "Cas12f".into(),
            grna_len: 23,
            pam: PAM::head(b"TTTN"),
        }
    }
}
