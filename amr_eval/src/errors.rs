use evaluation_metrics::Dimension;

// Create the Error, ErrorKind, ResultExt, and Result types
error_chain! {
    links {
        Amr(::amr::errors::Error, ::amr::errors::ErrorKind);
    }

    foreign_links {
        Io(::std::io::Error);
        Yaml(::serde_yaml::Error);
    }

    errors {
        CorpusLengthMismatch(n_pred: usize, n_gold: usize) {
            description("predicted and gold corpora have different sizes")
            display("predicted corpus has {} AMRs but gold corpus has {}", n_pred, n_gold)
        }
        InvalidAmr(index: usize, side: &'static str) {
            description("cannot parse AMR")
            display("cannot parse {} AMR #{}", side, index)
        }
        DanglingTrigger(variable: String, missing: &'static str) {
            description("operation variable without a lexical trigger")
            display("operation variable `{}` has no {}", variable, missing)
        }
        AlignmentArity(dimension: Dimension, n_pred: usize, n_gold: usize) {
            description("alignment requires exactly one aggregate pair")
            display("{} alignment requires exactly one aggregate pair, got {} predicted and {} gold", dimension, n_pred, n_gold)
        }
        SegmentMismatch(n_pred: usize, n_gold: usize) {
            description("aggregate sub-graphs have different numbers of segments")
            display("predicted aggregate has {} segments but gold aggregate has {}", n_pred, n_gold)
        }
    }
}
