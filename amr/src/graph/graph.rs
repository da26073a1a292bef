use std::fmt;
use std::slice::Iter;
use fnv::FnvHashMap;
use graph::node::Node;
use graph::edge::{Edge, Attribute};
use graph::triple::{Triple, ConceptMap, INSTANCE, TOP};

/// An AMR: variables bound to concepts (nodes), relations between variables (edges) and
/// relations from variables to literal values (attributes). The first node is the root.
#[derive(Debug, Clone)]
pub struct Graph {
    pub n_nodes: usize,
    pub n_edges: usize,
    pub n_attributes: usize,
    pub(super) nodes: Vec<Node>,
    pub(super) edges: Vec<Edge>,
    pub(super) attributes: Vec<Attribute>,
    variable_index: FnvHashMap<String, usize>
}

impl Graph {
    pub fn with_capacity(estimated_n_nodes: usize, estimated_n_edges: usize) -> Graph {
        Graph {
            n_nodes: 0,
            n_edges: 0,
            n_attributes: 0,
            nodes: Vec::with_capacity(estimated_n_nodes),
            edges: Vec::with_capacity(estimated_n_edges),
            attributes: Vec::with_capacity(estimated_n_edges),
            variable_index: FnvHashMap::with_capacity_and_hasher(estimated_n_nodes, Default::default())
        }
    }

    /// Add new node to graph and return its id. The variable of the node must not be
    /// used by any other node of the graph.
    pub fn add_node(&mut self, mut node: Node) -> usize {
        debug_assert!(!self.has_variable(&node.variable), "Variable `{}` is already bound", node.variable);
        node.id = self.n_nodes;
        self.n_nodes += 1;

        self.variable_index.insert(node.variable.clone(), node.id);
        self.nodes.push(node);
        self.n_nodes - 1
    }

    /// add new link to graph and return its id
    pub fn add_edge(&mut self, mut edge: Edge) -> usize {
        edge.id = self.n_edges;
        self.n_edges += 1;
        self.nodes[edge.source_id].add_outgoing_edge(&edge);

        self.edges.push(edge);
        self.n_edges - 1
    }

    /// add new attribute to graph and return its id
    pub fn add_attribute(&mut self, mut attribute: Attribute) -> usize {
        attribute.id = self.n_attributes;
        self.n_attributes += 1;
        self.nodes[attribute.source_id].add_attribute(&attribute);

        self.attributes.push(attribute);
        self.n_attributes - 1
    }

    #[inline]
    pub fn get_node_by_id(&self, idx: usize) -> &Node { &self.nodes[idx] }

    #[inline]
    pub fn get_edge_by_id(&self, idx: usize) -> &Edge { &self.edges[idx] }

    #[inline]
    pub fn get_attribute_by_id(&self, idx: usize) -> &Attribute { &self.attributes[idx] }

    #[inline]
    pub fn has_variable(&self, variable: &str) -> bool {
        self.variable_index.contains_key(variable)
    }

    pub fn get_node_by_variable(&self, variable: &str) -> Option<&Node> {
        self.variable_index.get(variable).map(|&idx| &self.nodes[idx])
    }

    #[inline]
    pub fn iter_nodes(&self) -> Iter<Node> { self.nodes.iter() }

    #[inline]
    pub fn iter_edges(&self) -> Iter<Edge> { self.edges.iter() }

    #[inline]
    pub fn iter_attributes(&self) -> Iter<Attribute> { self.attributes.iter() }

    #[inline]
    pub fn get_root_node(&self) -> Option<&Node> {
        self.nodes.first()
    }

    pub fn concept_map(&self) -> ConceptMap {
        self.nodes.iter()
            .map(|n| (n.variable.clone(), n.concept.clone()))
            .collect()
    }

    /// Get (instance triples, attribute triples, edge triples) of the graph.
    ///
    /// Attribute triples start with `(TOP, root_variable, root_concept)`; relations are
    /// listed node by node, in the order they are written.
    pub fn get_triples(&self) -> (Vec<Triple>, Vec<Triple>, Vec<Triple>) {
        let instances = self.nodes.iter()
            .map(|n| Triple::new(INSTANCE, n.variable.as_str(), n.concept.as_str()))
            .collect::<Vec<_>>();

        let mut attributes = Vec::with_capacity(self.n_attributes + 1);
        if let Some(root) = self.get_root_node() {
            attributes.push(Triple::new(TOP, root.variable.as_str(), root.concept.as_str()));
        }

        let mut relations = Vec::with_capacity(self.n_edges);
        for n in &self.nodes {
            for a in n.iter_attributes(self) {
                attributes.push(Triple::new(a.label.as_str(), n.variable.as_str(), a.value.as_str()));
            }
            for e in n.iter_outgoing_edges(self) {
                relations.push(Triple::new(e.label.as_str(), n.variable.as_str(), e.get_target_node(self).variable.as_str()));
            }
        }

        (instances, attributes, relations)
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Graph(\n")?;
        for n in self.iter_nodes() {
            write!(f, "\t+ {} / {}\n", n.variable, n.concept)?;
        }
        for e in self.iter_edges() {
            write!(f, "\t+ {}---{}---{}\n", e.get_source_node(self).variable, e.label, e.get_target_node(self).variable)?;
        }
        for a in self.iter_attributes() {
            write!(f, "\t+ {}---{}---{}\n", a.get_source_node(self).variable, a.label, a.value)?;
        }

        write!(f, ")")
    }
}

impl PartialEq for Graph {
    fn eq(&self, other: &Graph) -> bool {
        self.nodes == other.nodes && self.edges == other.edges && self.attributes == other.attributes
    }
}
