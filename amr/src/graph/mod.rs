mod node;
mod edge;
mod graph;
mod graph_iter;
mod triple;

pub use self::graph::Graph;
pub use self::node::{Node, UNSET_ID};
pub use self::edge::{Edge, Attribute};
pub use self::graph_iter::{IterEdge, IterAttribute};
pub use self::triple::{Triple, ConceptMap, INSTANCE, TOP};
