use std::collections::BTreeSet;
use std::iter::FromIterator;
use amr::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Instance {
    pub variable: String,
    pub concept: String
}

/// Part of an AMR that is scored by alignment: relation triples and the instances of the
/// variables they touch. `relations` end in a variable, `attributes` end in a literal.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SubGraph {
    pub instances: Vec<Instance>,
    pub relations: Vec<Triple>,
    #[serde(default)]
    pub attributes: Vec<Triple>
}

/// Sub-graphs of a whole corpus merged into a single entry. The i-th segment holds the
/// sub-graph of the i-th AMR; variables of different segments are never aligned.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AggregateSubGraph {
    pub segments: Vec<SubGraph>
}

impl Instance {
    pub fn new(variable: &str, concept: &str) -> Instance {
        Instance { variable: variable.to_owned(), concept: concept.to_owned() }
    }
}

impl SubGraph {
    /// Create a sub-graph from edges and attributes, adding the instances of both ends of
    /// every edge and of the source of every attribute. Variables missing from `concepts` get
    /// no instance. Instances are sorted by variable.
    pub fn induced(concepts: &ConceptMap, relations: Vec<Triple>, attributes: Vec<Triple>) -> SubGraph {
        let variables = relations.iter()
            .flat_map(|t| vec![t.source.as_str(), t.target.as_str()])
            .chain(attributes.iter().map(|t| t.source.as_str()))
            .filter(|v| concepts.contains_key(*v))
            .collect::<BTreeSet<_>>();

        SubGraph {
            instances: variables.into_iter().map(|v| Instance::new(v, &concepts[v])).collect(),
            relations,
            attributes
        }
    }

    /// Number of relation triples, whether they end in a variable or a literal
    #[inline]
    pub fn n_relations(&self) -> usize {
        self.relations.len() + self.attributes.len()
    }
}

impl AggregateSubGraph {
    pub fn new() -> AggregateSubGraph {
        AggregateSubGraph { segments: Vec::new() }
    }

    pub fn push(&mut self, segment: SubGraph) {
        self.segments.push(segment);
    }

    /// Total number of relation triples over all segments
    pub fn n_relations(&self) -> usize {
        self.segments.iter().map(|s| s.n_relations()).sum()
    }

    #[inline]
    pub fn n_segments(&self) -> usize {
        self.segments.len()
    }
}

impl FromIterator<SubGraph> for AggregateSubGraph {
    fn from_iter<I: IntoIterator<Item=SubGraph>>(iter: I) -> AggregateSubGraph {
        AggregateSubGraph { segments: iter.into_iter().collect() }
    }
}
