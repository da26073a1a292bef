use std::cmp;
use std::collections::BTreeMap;
use fnv::{FnvHashMap, FnvHashSet};
use super::sub_graph::SubGraph;

pub const UNBOUND: i32 = -1;

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Target<'a> {
    Node(i32),
    Literal(&'a str)
}

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct Triple<'a> {
    pub source_id: i32,
    pub target: Target<'a>,
    pub predicate: &'a str
}

pub type TripleSet<'a> = FnvHashSet<Triple<'a>>;

/// A sub-graph where variables are replaced by their position in `instances`
#[derive(Debug)]
pub struct IndexedSubGraph<'a> {
    pub concepts: Vec<&'a str>,
    pub triples: TripleSet<'a>
}

/// Nodes of the gold (x) and predicted (x_prime) sub-graphs that share a concept
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct PairLabelGroup<'a> {
    pub label: &'a str,
    pub x: Vec<usize>,
    pub x_prime: Vec<usize>
}

/// Mapping between gold nodes (x) and predicted nodes (x_prime), `UNBOUND` when a node
/// is not mapped
#[derive(Debug, Deserialize, Serialize, Eq, PartialEq, Clone)]
pub struct Bijection {
    pub prime2x: Vec<i32>,
    pub x2prime: Vec<i32>,
}

impl<'a> IndexedSubGraph<'a> {
    pub fn new(sub_graph: &'a SubGraph) -> IndexedSubGraph<'a> {
        let var2id: FnvHashMap<&'a str, i32> = sub_graph.instances.iter().enumerate()
            .map(|(i, instance)| (instance.variable.as_str(), i as i32))
            .collect();

        let mut triples = TripleSet::default();
        for relation in &sub_graph.relations {
            let ids = (var2id.get(relation.source.as_str()), var2id.get(relation.target.as_str()));
            match ids {
                (Some(&source_id), Some(&target_id)) => {
                    triples.insert(Triple { source_id, target: Target::Node(target_id), predicate: relation.relation.as_str() });
                },
                _ => warn!("Ignore relation {} because one of its ends is not an instance of the sub-graph", relation)
            }
        }
        for attribute in &sub_graph.attributes {
            match var2id.get(attribute.source.as_str()) {
                Some(&source_id) => {
                    triples.insert(Triple { source_id, target: Target::Literal(attribute.target.as_str()), predicate: attribute.relation.as_str() });
                },
                None => warn!("Ignore attribute {} because its source is not an instance of the sub-graph", attribute)
            }
        }

        IndexedSubGraph {
            concepts: sub_graph.instances.iter().map(|instance| instance.concept.as_str()).collect(),
            triples
        }
    }

    #[inline]
    pub fn n_nodes(&self) -> usize {
        self.concepts.len()
    }

    /// Number of triples the graph is scored on: one instance triple per node plus the relations
    #[inline]
    pub fn n_triples(&self) -> usize {
        self.concepts.len() + self.triples.len()
    }
}

impl<'a> PairLabelGroup<'a> {
    pub fn new(label: &'a str) -> PairLabelGroup<'a> {
        PairLabelGroup { label, x: Vec::new(), x_prime: Vec::new() }
    }

    /// Number of injective mappings from the smaller side into the bigger side
    pub fn get_n_permutations(&self) -> f64 {
        let n = cmp::max(self.x.len(), self.x_prime.len());
        let m = cmp::min(self.x.len(), self.x_prime.len());

        (0..m).map(|k| (n - k) as f64).product()
    }
}

/// Group nodes of both graphs by concept. Groups with at most one node on each side are
/// mapped directly in the returned bijection, the other groups still need to be searched.
pub fn get_map_groups<'a>(gold: &IndexedSubGraph<'a>, pred: &IndexedSubGraph<'a>) -> (Bijection, Vec<PairLabelGroup<'a>>) {
    let mut label2nodes: BTreeMap<&'a str, PairLabelGroup<'a>> = Default::default();
    for (id, &concept) in gold.concepts.iter().enumerate() {
        label2nodes.entry(concept).or_insert_with(|| PairLabelGroup::new(concept)).x.push(id);
    }
    for (id, &concept) in pred.concepts.iter().enumerate() {
        label2nodes.entry(concept).or_insert_with(|| PairLabelGroup::new(concept)).x_prime.push(id);
    }

    let mut bijection = Bijection::new(gold.n_nodes(), pred.n_nodes());
    let mut map_groups = Vec::new();
    for (_, pair) in label2nodes {
        if pair.x.is_empty() || pair.x_prime.is_empty() {
            // nothing to map, nodes stay unbound
            continue;
        }

        if cmp::max(pair.x.len(), pair.x_prime.len()) == 1 {
            bijection.push_both(pair.x[0], pair.x_prime[0]);
        } else {
            map_groups.push(pair);
        }
    }

    (bijection, map_groups)
}

impl Bijection {
    /// Bijection between two graphs without nodes, the result of a search that found no mapping
    pub fn empty() -> Bijection {
        Bijection {
            x2prime: Vec::new(),
            prime2x: Vec::new(),
        }
    }

    pub fn new(n_x: usize, n_x_prime: usize) -> Bijection {
        Bijection {
            prime2x: vec![UNBOUND; n_x_prime],
            x2prime: vec![UNBOUND; n_x],
        }
    }

    pub fn new_like(bijection: &Bijection) -> Bijection {
        Bijection::new(bijection.x2prime.len(), bijection.prime2x.len())
    }

    pub fn clear(&mut self) {
        for i in 0..self.prime2x.len() {
            self.prime2x[i] = UNBOUND;
        }
        for i in 0..self.x2prime.len() {
            self.x2prime[i] = UNBOUND;
        }
    }

    pub fn push_x_prime(&mut self, x: Option<usize>, x_prime: usize) {
        match x {
            None => {
                self.prime2x[x_prime] = UNBOUND;
            },
            Some(v) => {
                self.prime2x[x_prime] = v as i32;
                self.x2prime[v] = x_prime as i32;
            }
        }
    }

    pub fn push_both(&mut self, x: usize, x_prime: usize) {
        self.x2prime[x] = x_prime as i32;
        self.prime2x[x_prime] = x as i32;
    }

    /// Map `x_prime` to the unbound gold node `x`, releasing the node `x_prime` was mapped to
    pub fn rebind_x_prime(&mut self, x_prime: usize, x: usize) {
        debug_assert!(!self.is_gold_node_bounded(x));
        let old_x = self.prime2x[x_prime];
        if old_x != UNBOUND {
            self.x2prime[old_x as usize] = UNBOUND;
        }
        self.push_both(x, x_prime);
    }

    /// Exchange the gold nodes two predicted nodes are mapped to
    pub fn swap_x_prime(&mut self, a: usize, b: usize) {
        let x_a = self.prime2x[a];
        let x_b = self.prime2x[b];

        self.prime2x[a] = x_b;
        self.prime2x[b] = x_a;
        if x_a != UNBOUND {
            self.x2prime[x_a as usize] = b as i32;
        }
        if x_b != UNBOUND {
            self.x2prime[x_b as usize] = a as i32;
        }
    }

    pub fn extends(&self, bijection: &Bijection) -> Bijection {
        let mut new_bijection = self.clone();
        new_bijection.extends_(bijection);
        new_bijection
    }

    pub fn extends_(&mut self, bijection: &Bijection) {
        for (x_prime, &x) in bijection.prime2x.iter().enumerate() {
            if x != UNBOUND {
                self.prime2x[x_prime] = x;
            }
        }

        for (x, &x_prime) in bijection.x2prime.iter().enumerate() {
            if x_prime != UNBOUND {
                self.x2prime[x] = x_prime;
            }
        }
    }

    #[inline]
    pub fn is_gold_node_bounded(&self, node_id: usize) -> bool {
        self.x2prime[node_id] != UNBOUND
    }

    #[inline]
    pub fn to_x(&self, x_prime: usize) -> i32 {
        self.prime2x[x_prime]
    }

    /// Number of predicted nodes mapped to a gold node
    pub fn n_bounded(&self) -> usize {
        self.prime2x.iter().filter(|&&x| x != UNBOUND).count()
    }
}
