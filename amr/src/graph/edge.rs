use graph::graph::Graph;
use graph::node::{Node, UNSET_ID};

/// A relation between two variables of the graph
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    pub id: usize,
    pub label: String,
    pub source_id: usize,
    pub target_id: usize
}

/// A relation from a variable to a literal value (constant or quoted string)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub id: usize,
    pub label: String,
    pub source_id: usize,
    pub value: String
}

impl Edge {
    pub fn new(label: String, source_id: usize, target_id: usize) -> Edge {
        Edge {
            id: UNSET_ID,
            label,
            source_id,
            target_id
        }
    }

    #[inline]
    pub fn get_source_node<'a>(&self, graph: &'a Graph) -> &'a Node {
        graph.get_node_by_id(self.source_id)
    }

    #[inline]
    pub fn get_target_node<'a>(&self, graph: &'a Graph) -> &'a Node {
        graph.get_node_by_id(self.target_id)
    }
}

impl Attribute {
    pub fn new(label: String, source_id: usize, value: String) -> Attribute {
        Attribute {
            id: UNSET_ID,
            label,
            source_id,
            value
        }
    }

    #[inline]
    pub fn get_source_node<'a>(&self, graph: &'a Graph) -> &'a Node {
        graph.get_node_by_id(self.source_id)
    }
}
