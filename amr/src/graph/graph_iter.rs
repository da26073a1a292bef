use graph::graph::Graph;
use graph::edge::{Edge, Attribute};

pub struct IterEdge<'a> {
    current_idx: usize,
    pub(super) edges: &'a Vec<usize>,
    pub(super) graph: &'a Graph
}

pub struct IterAttribute<'a> {
    current_idx: usize,
    pub(super) attributes: &'a Vec<usize>,
    pub(super) graph: &'a Graph
}

impl<'a> IterEdge<'a> {
    pub fn new(edges: &'a Vec<usize>, graph: &'a Graph) -> IterEdge<'a> {
        IterEdge {
            current_idx: 0,
            edges,
            graph
        }
    }
}

impl<'a> IterAttribute<'a> {
    pub fn new(attributes: &'a Vec<usize>, graph: &'a Graph) -> IterAttribute<'a> {
        IterAttribute {
            current_idx: 0,
            attributes,
            graph
        }
    }
}

impl<'a> Iterator for IterEdge<'a> {
    type Item = &'a Edge;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current_idx == self.edges.len() {
            None
        } else {
            self.current_idx += 1;
            Some(self.graph.get_edge_by_id(self.edges[self.current_idx - 1]))
        }
    }
}

impl<'a> Iterator for IterAttribute<'a> {
    type Item = &'a Attribute;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current_idx == self.attributes.len() {
            None
        } else {
            self.current_idx += 1;
            Some(self.graph.get_attribute_by_id(self.attributes[self.current_idx - 1]))
        }
    }
}
