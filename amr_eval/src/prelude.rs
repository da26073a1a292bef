pub use errors::{Error, ErrorKind, Result, ResultExt};
pub use settings::Settings;
pub use settings::conf_alignment::AlignmentConf;
pub use evaluation_metrics::{calc_metrics, calc_metrics_with_settings, Dimension, ScoreRecord, Scores, UNDEFINED_SCORE};
pub use utils::Timer;
