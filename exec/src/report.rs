use prettytable::Table;
use serde_json;
use amr_eval::prelude::Scores;
use errors::*;

pub fn scores_table(scores: &Scores) -> Table {
    let mut table = Table::new();
    table.add_row(row!["dimension", "precision", "recall", "f1", "total"]);
    for (dimension, record) in scores {
        table.add_row(row![
            dimension.name(),
            format!("{:.2}", record.precision),
            format!("{:.2}", record.recall),
            format!("{:.2}", record.f1),
            record.total
        ]);
    }

    table
}

pub fn scores_json(scores: &Scores) -> Result<String> {
    Ok(serde_json::to_string_pretty(scores)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use amr_eval::prelude::{Dimension, ScoreRecord, UNDEFINED_SCORE};

    fn sample_scores() -> Scores {
        let mut scores = Scores::new();
        scores.insert(Dimension::Concepts, ScoreRecord { precision: 0.5, recall: 1.0, f1: 0.75, total: 6 });
        scores.insert(Dimension::Srl, ScoreRecord { precision: UNDEFINED_SCORE, recall: UNDEFINED_SCORE, f1: UNDEFINED_SCORE, total: 0 });
        scores
    }

    #[test]
    pub fn test_scores_table() {
        let table = scores_table(&sample_scores());
        assert_eq!(table.len(), 3);

        let text = table.to_string();
        assert!(text.contains("Concepts"));
        assert!(text.contains("0.75"));
        assert!(text.contains("-1.00"));
    }

    #[test]
    pub fn test_scores_json() {
        let value: serde_json::Value = serde_json::from_str(&scores_json(&sample_scores()).unwrap()).unwrap();
        assert_eq!(value["Concepts"]["r"], serde_json::Value::from(1.0));
        assert_eq!(value["SRL"]["total"], serde_json::Value::from(0u64));
    }
}
