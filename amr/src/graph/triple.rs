use std::fmt;
use fnv::FnvHashMap;

/// Relation of the instance triples `(instance, variable, concept)`
pub const INSTANCE: &str = "instance";
/// Relation of the attribute triple that marks the root `(TOP, variable, concept)`
pub const TOP: &str = "TOP";

/// Mapping from a variable to its concept label
pub type ConceptMap = FnvHashMap<String, String>;

/// A labeled relation `(relation, source, target)`. The source is always a variable,
/// the target is either a variable or a literal value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Triple {
    pub relation: String,
    pub source: String,
    pub target: String
}

impl Triple {
    pub fn new<R, S, T>(relation: R, source: S, target: T) -> Triple
        where R: Into<String>, S: Into<String>, T: Into<String> {
        Triple { relation: relation.into(), source: source.into(), target: target.into() }
    }
}

impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {}, {})", self.relation, self.source, self.target)
    }
}
