use std::fmt;

#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AlignmentConf {
    /// Segments whose number of candidate mappings exceeds this value are aligned by hill climbing
    /// instead of exhaustive search
    pub max_permutation: usize,
    /// Number of random restarts of the hill climbing, on top of the in-order initial mapping
    pub n_restarts: usize
}

impl Default for AlignmentConf {
    fn default() -> AlignmentConf {
        AlignmentConf {
            max_permutation: 50_000,
            n_restarts: 4
        }
    }
}

impl fmt::Debug for AlignmentConf {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, r#"
    max_permutation : {}
    n_restarts      : {}"#,
        self.max_permutation,
        self.n_restarts)
    }
}
