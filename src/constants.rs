pub const MAX_SCORE: u32 = 100;

// GC content outside [MIN_GC_PCT, MAX_GC_PCT] percent is penalized
pub const MIN_GC_PCT: usize = 40;
pub const MAX_GC_PCT: usize = 60;
pub const GC_PENALTY: u32 = 20;

// Poly-T stretches terminate Pol III transcription of the guide
pub const POLY_T: &[u8] = b"TTTT";
pub const POLY_T_PENALTY: u32 = 30;

pub const HOMOPOLYMER_LEN: usize = 3;
pub const HOMOPOLYMER_PENALTY: u32 = 10;

pub const HIGH_QUALITY_SCORE: u32 = 80;

pub const DEFAULT_LABEL: &str = "CRISPR_Target";
pub const GRAPH_NAME: &str = "CRISPR_Scores";

pub const ANNOTATION_BANNER: &str = "\
%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%
%                                                                      %
% CRISPR Design Tool - LWGV Annotation File                           %
%                                                                      %
%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%
";

pub const MESSAGE_LOG_CAPACITY: usize = 100;

pub const TABLE_HEADER: [&str; 7] = [
    "Position",
    "Strand",
    "PAM Site",
    "gRNA Sequence",
    "Score",
    "gRNA Start",
    "gRNA End",
];
