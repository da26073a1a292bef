use amr::prelude::*;

/// Suffix of inverse relations, e.g. `ARG0-of`
pub const INVERSE_MARKER: &str = "-of";

/// Rewrite an inverse relation `(rel-of, a, b)` into `(rel, b, a)`, other triples are unchanged
pub fn normalize_triple(triple: Triple) -> Triple {
    if triple.relation.ends_with(INVERSE_MARKER) {
        let relation_len = triple.relation.len() - INVERSE_MARKER.len();
        Triple {
            relation: triple.relation[..relation_len].to_owned(),
            source: triple.target,
            target: triple.source
        }
    } else {
        triple
    }
}

pub fn normalize_triples<I: IntoIterator<Item=Triple>>(triples: I) -> Vec<Triple> {
    triples.into_iter().map(normalize_triple).collect()
}

/// An AMR reduced to what the extractors consume: the concept of every variable, and the
/// attribute and edge triples with forward relations only.
///
/// Attributes (`TOP` included) end in a literal and relations end in a variable; the two
/// are kept apart because a literal may be spelled like a variable.
#[derive(Debug, Clone)]
pub struct NormalizedAmr {
    pub concepts: ConceptMap,
    pub attributes: Vec<Triple>,
    pub relations: Vec<Triple>
}

impl NormalizedAmr {
    pub fn new(graph: &Graph) -> NormalizedAmr {
        let (_, attributes, relations) = graph.get_triples();
        NormalizedAmr {
            concepts: graph.concept_map(),
            attributes: normalize_triples(attributes),
            relations: normalize_triples(relations)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    pub fn test_normalize_triple() {
        assert_eq!(normalize_triple(Triple::new("ARG0-of", "b", "w")), Triple::new("ARG0", "w", "b"));
        assert_eq!(normalize_triple(Triple::new("ARG0", "w", "b")), Triple::new("ARG0", "w", "b"));
        // the marker must be a suffix
        assert_eq!(normalize_triple(Triple::new("consist-of-01", "a", "b")), Triple::new("consist-of-01", "a", "b"));
    }

    #[test]
    pub fn test_normalized_amr() {
        let graph = parse_amr_line("(b / boy :ARG0-of (w / want-01 :polarity -))").unwrap();
        let amr = NormalizedAmr::new(&graph);

        assert_eq!(amr.concepts.len(), 2);
        assert_eq!(amr.attributes, vec![Triple::new("TOP", "b", "boy"), Triple::new("polarity", "w", "-")]);
        assert_eq!(amr.relations, vec![Triple::new("ARG0", "w", "b")]);
        assert!(amr.relations.iter().all(|t| !t.relation.ends_with(INVERSE_MARKER)));
    }

    #[test]
    pub fn test_literal_named_like_a_variable_stays_an_attribute() {
        let graph = parse_amr_line(r#"(a / and :op1 (l / letter :name (n / name :op1 "a")))"#).unwrap();
        let amr = NormalizedAmr::new(&graph);

        assert!(amr.attributes.contains(&Triple::new("op1", "n", "a")));
        assert_eq!(amr.relations, vec![Triple::new("op1", "a", "l"), Triple::new("name", "l", "n")]);
    }
}
