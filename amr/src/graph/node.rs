use graph::edge::{Edge, Attribute};
use graph::graph::Graph;
use graph::graph_iter::{IterEdge, IterAttribute};

/// Id of a node, edge or attribute that has not been added to a graph yet
pub const UNSET_ID: usize = ::std::usize::MAX;

/// A variable of the graph together with the concept it is bound to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub id: usize,
    pub variable: String,
    pub concept: String,
    pub outgoing_edges: Vec<usize>,
    pub attributes: Vec<usize>
}

impl Node {
    pub fn new(variable: String, concept: String) -> Node {
        Node {
            id: UNSET_ID,
            variable,
            concept,
            outgoing_edges: Vec::new(),
            attributes: Vec::new()
        }
    }

    pub fn add_outgoing_edge(&mut self, link: &Edge) {
        self.outgoing_edges.push(link.id);
    }

    pub fn add_attribute(&mut self, attribute: &Attribute) {
        self.attributes.push(attribute.id);
    }

    pub fn iter_outgoing_edges<'a>(&'a self, graph: &'a Graph) -> IterEdge<'a> {
        IterEdge::new(&self.outgoing_edges, graph)
    }

    pub fn iter_attributes<'a>(&'a self, graph: &'a Graph) -> IterAttribute<'a> {
        IterAttribute::new(&self.attributes, graph)
    }
}
