pub mod dimension;
pub mod normalizer;
pub mod substructures;
pub mod disambiguation;
pub mod operation_classification;
pub mod aggregation;
pub mod structural;
pub mod scores;

pub use self::dimension::{Dimension, ScoreRecord, Scores, UNDEFINED_SCORE};
pub use self::scores::{calc_metrics, calc_metrics_with_settings};
