//! LWGV (Lightweight Genome Viewer) annotation output.
//!
//! Each site becomes a PAM track and a gRNA track, and the scores of all sites
//! are plotted in a single graph at the PAM positions:
//!
//! ```text
//! begin genome CRISPR_Target
//!         track PAM_1_+ addPairs(21:23)
//!         track gRNA_1_+ addPairs(1:20)
//!         graph CRISPR_Scores addPoints(21:100)
//! end genome
//! ```
use std::fmt::Write;

use crate::constants::{ANNOTATION_BANNER, GRAPH_NAME};
use crate::scan::Site;

pub fn render(name: &str, sites: &[Site]) -> String {
    let mut annotation = String::from(ANNOTATION_BANNER);

    // Writing to a String cannot fail
    let _ = writeln!(annotation, "\nbegin genome {}", name);

    for (idx, site) in sites.iter().enumerate() {
        let _ = writeln!(
            annotation,
            "        track PAM_{}_{} addPairs({}:{})",
            idx + 1,
            site.strand_symbol(),
            site.position(),
            site.pam_end()
        );
        let _ = writeln!(
            annotation,
            "        track gRNA_{}_{} addPairs({}:{})",
            idx + 1,
            site.strand_symbol(),
            site.grna_start(),
            site.grna_end()
        );
    }

    if !sites.is_empty() {
        let points: Vec<String> = sites
            .iter()
            .map(|site| format!("{}:{}", site.position(), site.score()))
            .collect();

        let _ = writeln!(
            annotation,
            "        graph {} addPoints({})",
            GRAPH_NAME,
            points.join(", ")
        );
    }

    let _ = write!(
        annotation,
        "end genome\n\n% create the webpage and image for the genome\nshowGenome({})\n",
        name
    );

    annotation
}
