//! Extraction of the comparable items of every dimension from a normalized AMR.
//!
//! Concepts, named entities, negations and wiki links are flat items that are compared as
//! (multi)sets. Reentrancies and SRL are sub-graphs that need to be aligned.

use std::collections::{BTreeMap, BTreeSet};
use fnv::FnvHashMap;
use amr::prelude::*;
use super::normalizer::NormalizedAmr;
use super::structural::SubGraph;

pub const NAME: &str = "name";
pub const WIKI: &str = "wiki";
pub const POLARITY: &str = "polarity";
pub const NEGATIVE: &str = "-";
pub const ARG_PREFIX: &str = "ARG";
pub const OP_PREFIX: &str = "op";

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Item {
    Concept(String),
    NamedEntity { name: String, entity_type: String },
    Negation(String),
    Wiki { name: String, link: String }
}

/// One item per variable, holding its concept
pub fn concepts(concepts: &ConceptMap) -> Vec<Item> {
    let mut items = concepts.values().map(|c| Item::Concept(c.clone())).collect::<Vec<_>>();
    items.sort();
    items
}

/// Index of an `opN` relation, `None` for any other relation
fn op_index(relation: &str) -> Option<usize> {
    if relation.starts_with(OP_PREFIX) {
        relation[OP_PREFIX.len()..].parse::<usize>().ok()
    } else {
        None
    }
}

/// Literal `opN` values of `variable` ordered by N and joined by `_`
fn name_of_variable(amr: &NormalizedAmr, variable: &str) -> String {
    let mut parts: BTreeMap<usize, &str> = BTreeMap::new();
    for t in &amr.attributes {
        if t.source == variable {
            if let Some(idx) = op_index(&t.relation) {
                parts.insert(idx, t.target.as_str());
            }
        }
    }

    parts.values().cloned().collect::<Vec<_>>().join("_")
}

/// Name string of every `name` triple: (named variable, name). A `name` edge is rebuilt from
/// the `opN` values of its target, a `name` attribute is the name itself.
fn names(amr: &NormalizedAmr) -> Vec<(&str, String)> {
    let literal_names = amr.attributes.iter()
        .filter(|t| t.relation == NAME)
        .map(|t| (t.source.as_str(), t.target.clone()));

    amr.relations.iter()
        .filter(|t| t.relation == NAME)
        .map(|t| (t.source.as_str(), name_of_variable(amr, &t.target)))
        .chain(literal_names)
        .collect()
}

/// Name of the entity `variable`, empty when it does not have a `name` relation
pub fn entity_name(amr: &NormalizedAmr, variable: &str) -> String {
    names(amr).into_iter()
        .find(|&(source, _)| source == variable)
        .map(|(_, name)| name)
        .unwrap_or_default()
}

/// One item per `name` relation: the rebuilt name and the concept of the named variable
pub fn named_entities(amr: &NormalizedAmr) -> Vec<Item> {
    names(amr).into_iter()
        .filter_map(|(source, name)| {
            amr.concepts.get(source).map(|entity_type| Item::NamedEntity {
                name,
                entity_type: entity_type.clone()
            })
        })
        .collect()
}

/// Concepts of the variables with a negative polarity
pub fn negations(amr: &NormalizedAmr) -> Vec<Item> {
    amr.attributes.iter()
        .filter(|t| t.relation == POLARITY && t.target == NEGATIVE)
        .filter_map(|t| amr.concepts.get(&t.source).map(|c| Item::Negation(c.clone())))
        .collect()
}

/// One item per `wiki` attribute: the name of the linked entity and the link
pub fn wikification(amr: &NormalizedAmr) -> Vec<Item> {
    amr.attributes.iter()
        .filter(|t| t.relation == WIKI)
        .map(|t| Item::Wiki {
            name: entity_name(amr, &t.source),
            link: t.target.clone()
        })
        .collect()
}

/// Sub-graph of the incoming edges of every variable that is the target of more than one
/// distinct edge
pub fn reentrancies(amr: &NormalizedAmr) -> SubGraph {
    let mut incoming: FnvHashMap<&str, BTreeSet<&Triple>> = FnvHashMap::default();
    for t in &amr.relations {
        incoming.entry(t.target.as_str()).or_insert_with(BTreeSet::new).insert(t);
    }

    let relations = incoming.values()
        .filter(|ts| ts.len() > 1)
        .flat_map(|ts| ts.iter().map(|&t| t.clone()))
        .collect::<BTreeSet<_>>();

    SubGraph::induced(&amr.concepts, relations.into_iter().collect(), Vec::new())
}

/// Sub-graph of the predicate-argument relations (`ARG0`, `ARG1`, ...), whether their
/// argument is a variable or a literal
pub fn srl(amr: &NormalizedAmr) -> SubGraph {
    let is_argument = |t: &&Triple| t.relation.starts_with(ARG_PREFIX) && amr.concepts.contains_key(&t.source);
    let relations = amr.relations.iter().filter(&is_argument).cloned().collect();
    let attributes = amr.attributes.iter().filter(&is_argument).cloned().collect();

    SubGraph::induced(&amr.concepts, relations, attributes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalized(line: &str) -> NormalizedAmr {
        NormalizedAmr::new(&parse_amr_line(line).unwrap())
    }

    #[test]
    pub fn test_named_entities_and_wiki() {
        let amr = normalized(r#"(c / city :wiki "New_York_City" :name (n / name :op2 "York" :op1 "New" :op3 "City"))"#);

        assert_eq!(named_entities(&amr), vec![
            Item::NamedEntity { name: "New_York_City".to_owned(), entity_type: "city".to_owned() }
        ]);
        assert_eq!(wikification(&amr), vec![
            Item::Wiki { name: "New_York_City".to_owned(), link: "New_York_City".to_owned() }
        ]);

        // literal name and wiki link without a name
        let amr = normalized(r#"(p / person :name "Mary" :ARG0-of (w / write-01 :wiki -))"#);
        assert_eq!(named_entities(&amr), vec![
            Item::NamedEntity { name: "Mary".to_owned(), entity_type: "person".to_owned() }
        ]);
        assert_eq!(wikification(&amr), vec![
            Item::Wiki { name: "".to_owned(), link: "-".to_owned() }
        ]);
    }

    #[test]
    pub fn test_concepts_and_negations() {
        let amr = normalized("(w / want-01 :polarity - :ARG0 (b / boy) :ARG1 (g / go-01 :ARG0 b :polarity +))");
        assert_eq!(concepts(&amr.concepts), vec![
            Item::Concept("boy".to_owned()), Item::Concept("go-01".to_owned()), Item::Concept("want-01".to_owned())
        ]);
        assert_eq!(negations(&amr), vec![Item::Negation("want-01".to_owned())]);
    }

    #[test]
    pub fn test_reentrancies() {
        let amr = normalized("(w / want-01 :ARG0 (b / boy) :ARG1 (g / go-01 :ARG0 b))");
        let sub_graph = reentrancies(&amr);

        assert_eq!(sub_graph.relations, vec![Triple::new("ARG0", "g", "b"), Triple::new("ARG0", "w", "b")]);
        assert_eq!(sub_graph.instances.iter().map(|i| i.variable.as_str()).collect::<Vec<_>>(), vec!["b", "g", "w"]);

        // a tree has no reentrancy
        let amr = normalized("(w / want-01 :ARG0 (b / boy) :ARG1 (g / go-01))");
        assert!(reentrancies(&amr).relations.is_empty());
    }

    #[test]
    pub fn test_literal_spelled_like_a_variable_is_not_reentrant() {
        let amr = normalized(r#"(a / and :op1 (l / letter :name (n / name :op1 "a")) :op2 (l2 / letter :name (n2 / name :op1 "a")))"#);
        let sub_graph = reentrancies(&amr);
        assert!(sub_graph.relations.is_empty());
        assert!(sub_graph.instances.is_empty());

        assert_eq!(named_entities(&amr), vec![
            Item::NamedEntity { name: "a".to_owned(), entity_type: "letter".to_owned() },
            Item::NamedEntity { name: "a".to_owned(), entity_type: "letter".to_owned() },
        ]);
    }

    #[test]
    pub fn test_srl_keeps_literal_arguments_apart() {
        // the string "i" is not the variable `i`
        let amr = normalized(r#"(s / say-01 :ARG0 (i / i) :ARG1 "i")"#);
        let sub_graph = srl(&amr);

        assert_eq!(sub_graph.relations, vec![Triple::new("ARG0", "s", "i")]);
        assert_eq!(sub_graph.attributes, vec![Triple::new("ARG1", "s", "i")]);
        assert_eq!(sub_graph.n_relations(), 2);
        assert_eq!(sub_graph.instances.iter().map(|i| i.variable.as_str()).collect::<Vec<_>>(), vec!["i", "s"]);
    }

    #[test]
    pub fn test_srl() {
        let amr = normalized("(w / want-01 :ARG0 (b / boy) :ARG1 (g / go-01 :ARG0 b) :time (n / now))");
        let sub_graph = srl(&amr);

        assert_eq!(sub_graph.n_relations(), 3);
        assert!(sub_graph.relations.iter().all(|t| t.relation.starts_with("ARG")));
        assert_eq!(sub_graph.instances.len(), 3);
    }

    #[test]
    pub fn test_inverse_relations_give_same_items() {
        let forward = normalized(r#"(w / want-01 :ARG0 (p / person :name (n / name :op1 "John")) :polarity -)"#);
        let inverse = normalized(r#"(p / person :name (n / name :op1 "John") :ARG0-of (w / want-01 :polarity -))"#);

        let (a, b) = (&forward, &inverse);
        assert_eq!(concepts(&a.concepts), concepts(&b.concepts));
        assert_eq!(named_entities(a), named_entities(b));
        assert_eq!(negations(a), negations(b));
        assert_eq!(wikification(a), wikification(b));
        assert_eq!(reentrancies(a), reentrancies(b));
        assert_eq!(srl(a), srl(b));
        assert_eq!(srl(a).relations, vec![Triple::new("ARG0", "w", "p")]);
    }
}
