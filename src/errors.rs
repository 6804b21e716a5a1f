error_chain! {
    foreign_links {
        Io(::std::io::Error);
    }

    errors {
        UnknownEnzyme(name: String) {
            description("unknown nuclease profile")
            display("unknown nuclease profile {:?}", name)
        }

        InvalidMotif(motif: String, reason: String) {
            description("invalid PAM motif")
            display("invalid PAM motif {:?}: {}", motif, reason)
        }

        InvalidSequence(reason: String) {
            description("invalid sequence")
            display("invalid sequence: {}", reason)
        }
    }
}
