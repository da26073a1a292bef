use std::fmt;
use std::collections::BTreeMap;

/// Value of precision, recall or f1 when it is not defined (e.g. precision of a dimension
/// without any predicted item)
pub const UNDEFINED_SCORE: f64 = -1.0;

/// Linguistic dimensions an AMR is evaluated on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Dimension {
    #[serde(rename = "Concepts")]
    Concepts,
    #[serde(rename = "Named Ent.")]
    NamedEntities,
    #[serde(rename = "Negations")]
    Negations,
    #[serde(rename = "Wikification")]
    Wikification,
    #[serde(rename = "op_class")]
    OpClass,
    #[serde(rename = "Reentrancies")]
    Reentrancies,
    #[serde(rename = "SRL")]
    Srl
}

impl Dimension {
    /// Dimensions scored by counting items in both sides
    pub fn counted() -> [Dimension; 5] {
        [Dimension::Concepts, Dimension::NamedEntities, Dimension::Negations, Dimension::Wikification, Dimension::OpClass]
    }

    pub fn all() -> [Dimension; 7] {
        [
            Dimension::Concepts, Dimension::NamedEntities, Dimension::Negations, Dimension::Wikification,
            Dimension::OpClass, Dimension::Reentrancies, Dimension::Srl
        ]
    }

    pub fn name(&self) -> &'static str {
        match *self {
            Dimension::Concepts => "Concepts",
            Dimension::NamedEntities => "Named Ent.",
            Dimension::Negations => "Negations",
            Dimension::Wikification => "Wikification",
            Dimension::OpClass => "op_class",
            Dimension::Reentrancies => "Reentrancies",
            Dimension::Srl => "SRL",
        }
    }

    #[inline]
    pub fn is_structural(&self) -> bool {
        match *self {
            Dimension::Reentrancies | Dimension::Srl => true,
            _ => false
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreRecord {
    #[serde(rename = "p")]
    pub precision: f64,
    #[serde(rename = "r")]
    pub recall: f64,
    pub f1: f64,
    /// number of predicted annotations + number of gold annotations
    pub total: usize
}

impl ScoreRecord {
    /// Build a record from precision and recall, `f1` is `UNDEFINED_SCORE` unless `precision + recall > 0`
    pub fn from_precision_recall(precision: f64, recall: f64, total: usize) -> ScoreRecord {
        let f1 = if precision + recall > 0.0 {
            2.0 * precision * recall / (precision + recall)
        } else {
            UNDEFINED_SCORE
        };

        ScoreRecord { precision, recall, f1, total }
    }
}

impl fmt::Display for ScoreRecord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "P: {:.2}, R: {:.2}, F: {:.2}", self.precision, self.recall, self.f1)
    }
}

pub type Scores = BTreeMap<Dimension, ScoreRecord>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json;

    #[test]
    pub fn test_scores_are_keyed_by_dimension_name() {
        let mut scores = Scores::new();
        scores.insert(Dimension::NamedEntities, ScoreRecord::from_precision_recall(0.5, 0.5, 3));
        scores.insert(Dimension::Srl, ScoreRecord::from_precision_recall(UNDEFINED_SCORE, 1.0, 2));

        let value = serde_json::to_value(&scores).unwrap();
        assert_eq!(value["Named Ent."]["p"], json_f64(0.5));
        assert_eq!(value["Named Ent."]["f1"], json_f64(0.5));
        assert_eq!(value["Named Ent."]["total"], serde_json::Value::from(3u64));
        assert_eq!(value["SRL"]["f1"], json_f64(UNDEFINED_SCORE));

        let back: Scores = serde_json::from_value(value).unwrap();
        assert_eq!(back, scores);
    }

    fn json_f64(x: f64) -> serde_json::Value {
        serde_json::Value::from(x)
    }
}
