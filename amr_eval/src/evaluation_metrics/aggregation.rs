use std::collections::{BTreeMap, HashSet};
use std::hash::{BuildHasher, Hash};
use std::ops::{Add, AddAssign};

use super::dimension::*;

/// Counts of a dimension over one or several AMR pairs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counts {
    pub intersection: usize,
    pub predicted: usize,
    pub gold: usize
}

impl Counts {
    pub fn new(intersection: usize, predicted: usize, gold: usize) -> Counts {
        Counts { intersection, predicted, gold }
    }

    pub fn from_sets<T, S>(pred: &HashSet<T, S>, gold: &HashSet<T, S>) -> Counts
        where T: Eq + Hash, S: BuildHasher {
        Counts {
            intersection: pred.intersection(gold).count(),
            predicted: pred.len(),
            gold: gold.len()
        }
    }

    /// Precision and recall are `UNDEFINED_SCORE` when there is no predicted (resp. gold) item
    pub fn finalize(&self) -> ScoreRecord {
        let precision = if self.predicted > 0 {
            self.intersection as f64 / self.predicted as f64
        } else {
            UNDEFINED_SCORE
        };
        let recall = if self.gold > 0 {
            self.intersection as f64 / self.gold as f64
        } else {
            UNDEFINED_SCORE
        };

        ScoreRecord::from_precision_recall(precision, recall, self.predicted + self.gold)
    }
}

impl Add for Counts {
    type Output = Counts;

    fn add(self, other: Counts) -> Counts {
        Counts {
            intersection: self.intersection + other.intersection,
            predicted: self.predicted + other.predicted,
            gold: self.gold + other.gold
        }
    }
}

impl AddAssign for Counts {
    fn add_assign(&mut self, other: Counts) {
        *self = *self + other;
    }
}

/// Running counts of the counted dimensions over a corpus. Counts are only added while
/// accumulating; `finalize` consumes the accumulator and produces the scores.
#[derive(Debug, Clone, PartialEq)]
pub struct Accumulator {
    counts: BTreeMap<Dimension, Counts>
}

impl Accumulator {
    pub fn new() -> Accumulator {
        Accumulator {
            counts: Dimension::counted().iter().map(|&d| (d, Counts::default())).collect()
        }
    }

    pub fn record(mut self, dimension: Dimension, counts: Counts) -> Accumulator {
        debug_assert!(!dimension.is_structural(), "{} is not a counted dimension", dimension);
        *self.counts.entry(dimension).or_insert_with(Counts::default) += counts;
        self
    }

    pub fn finalize(self) -> Scores {
        self.counts.into_iter()
            .map(|(dimension, counts)| {
                let record = counts.finalize();
                debug!("{} -> {}", dimension, record);
                (dimension, record)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fnv::FnvHashSet;

    #[test]
    pub fn test_counts_from_sets() {
        let pred: FnvHashSet<_> = vec!["want-01", "boy", "go-01"].into_iter().collect();
        let gold: FnvHashSet<_> = vec!["want-01", "boy", "go-02"].into_iter().collect();
        assert_eq!(Counts::from_sets(&pred, &gold), Counts::new(2, 3, 3));
    }

    #[test]
    pub fn test_finalize() {
        let record = Counts::new(2, 3, 3).finalize();
        assert!((record.precision - 2.0 / 3.0).abs() < 1e-9);
        assert!((record.recall - 2.0 / 3.0).abs() < 1e-9);
        assert!((record.f1 - 2.0 / 3.0).abs() < 1e-9);
        assert_eq!(record.total, 6);

        // nothing in common
        let record = Counts::new(0, 2, 1).finalize();
        assert_eq!((record.precision, record.recall, record.f1), (0.0, 0.0, UNDEFINED_SCORE));

        // no gold item
        let record = Counts::new(0, 2, 0).finalize();
        assert_eq!((record.precision, record.recall, record.f1, record.total), (0.0, UNDEFINED_SCORE, UNDEFINED_SCORE, 2));

        // no item at all
        let record = Counts::default().finalize();
        assert_eq!((record.precision, record.recall, record.f1, record.total), (UNDEFINED_SCORE, UNDEFINED_SCORE, UNDEFINED_SCORE, 0));
    }

    #[test]
    pub fn test_accumulator() {
        let acc = Accumulator::new()
            .record(Dimension::Concepts, Counts::new(1, 2, 2))
            .record(Dimension::Concepts, Counts::new(1, 1, 3))
            .record(Dimension::OpClass, Counts::new(1, 1, 1));

        let scores = acc.finalize();
        assert_eq!(scores.keys().cloned().collect::<Vec<_>>(), Dimension::counted().to_vec());
        assert_eq!(scores[&Dimension::Concepts], Counts::new(2, 3, 5).finalize());
        assert_eq!(scores[&Dimension::Negations].total, 0);
        assert_eq!(scores[&Dimension::OpClass].f1, 1.0);
    }
}
