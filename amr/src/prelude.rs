pub use graph::{Graph, Node, Edge, Attribute, Triple, ConceptMap, INSTANCE, TOP};
pub use parser::{AmrParser, parse_amr_line};
pub use reader::{split_amr_blocks, read_amr_file};
