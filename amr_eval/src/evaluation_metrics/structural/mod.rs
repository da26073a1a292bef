//! Structural scoring of Reentrancies and SRL.
//!
//! Sub-graphs are compared by finding the variable mapping that maximizes the number of
//! matched triples (instances and relations), the way smatch scores whole AMRs. Only
//! variables bound to the same concept can be mapped to each other.

pub mod sub_graph;
pub mod internal_structure;
pub mod find_best_map;
pub mod hill_climbing;
pub mod alignment;

pub use self::sub_graph::{Instance, SubGraph, AggregateSubGraph};
pub use self::internal_structure::{Bijection, IndexedSubGraph, PairLabelGroup};
pub use self::alignment::{align, align_segment, f1_precision_recall, SegmentAlignment};
