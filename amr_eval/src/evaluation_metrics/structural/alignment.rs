use rand::prelude::*;
use rayon::prelude::*;

use errors::*;
use settings::Settings;
use settings::conf_alignment::AlignmentConf;
use evaluation_metrics::dimension::Dimension;
use super::sub_graph::{SubGraph, AggregateSubGraph};
use super::internal_structure::*;
use super::find_best_map::find_best_map;
use super::hill_climbing::hill_climb;

#[derive(Debug, Clone)]
pub struct SegmentAlignment {
    pub n_matched: usize,
    pub n_pred_triples: usize,
    pub n_gold_triples: usize,
    /// maps predicted variables (by position in `pred.instances`) to gold variables
    pub bijection: Bijection
}

/// Find the variable mapping between two sub-graphs that maximizes the number of matched
/// triples. `seed` makes the hill climbing fallback deterministic.
pub fn align_segment(pred: &SubGraph, gold: &SubGraph, conf: &AlignmentConf, seed: u8) -> SegmentAlignment {
    let gold = IndexedSubGraph::new(gold);
    let pred = IndexedSubGraph::new(pred);
    let (bijection, map_groups) = get_map_groups(&gold, &pred);

    let n_permutation: f64 = map_groups.iter().map(|g| g.get_n_permutations()).product();
    let (bijection, n_matched) = if n_permutation > conf.max_permutation as f64 {
        debug!("Number of permutation is too big: {}. Fallback to hill climbing", n_permutation);
        let mut rng = StdRng::from_seed([seed; 32]);
        hill_climb(&gold, &pred, &map_groups, &bijection, conf.n_restarts, &mut rng)
    } else {
        find_best_map(&gold, &pred, &map_groups, bijection)
    };

    SegmentAlignment {
        n_matched,
        n_pred_triples: pred.n_triples(),
        n_gold_triples: gold.n_triples(),
        bijection
    }
}

/// Score a predicted aggregate against a gold aggregate, segment by segment. Matched and
/// total triples are summed over the segments before computing the scores.
///
/// Return (f1, precision, recall), all 0 when one of the aggregates has no triple.
pub fn f1_precision_recall(pred: &AggregateSubGraph, gold: &AggregateSubGraph, settings: &Settings) -> Result<(f64, f64, f64)> {
    if pred.n_segments() != gold.n_segments() {
        bail!(ErrorKind::SegmentMismatch(pred.n_segments(), gold.n_segments()));
    }

    let alignments: Vec<SegmentAlignment> = if settings.parallel {
        pred.segments.par_iter()
            .zip(gold.segments.par_iter())
            .map(|(p, g)| align_segment(p, g, &settings.alignment, settings.manual_seed))
            .collect()
    } else {
        pred.segments.iter()
            .zip(gold.segments.iter())
            .map(|(p, g)| align_segment(p, g, &settings.alignment, settings.manual_seed))
            .collect()
    };

    let (mut n_matched, mut n_pred_triples, mut n_gold_triples) = (0, 0, 0);
    for alignment in &alignments {
        n_matched += alignment.n_matched;
        n_pred_triples += alignment.n_pred_triples;
        n_gold_triples += alignment.n_gold_triples;
    }

    if n_pred_triples == 0 || n_gold_triples == 0 {
        return Ok((0.0, 0.0, 0.0));
    }

    let precision = n_matched as f64 / n_pred_triples as f64;
    let recall = n_matched as f64 / n_gold_triples as f64;
    let f1 = if n_matched == 0 {
        0.0
    } else {
        2.0 * precision * recall / (precision + recall)
    };

    Ok((f1, precision, recall))
}

/// Structural scoring of a dimension. With `restrict_to_one_pair`, exactly one aggregate must
/// be given on each side.
///
/// Return (precision, recall, f1)
pub fn align(dimension: Dimension, pred: &[AggregateSubGraph], gold: &[AggregateSubGraph], restrict_to_one_pair: bool, settings: &Settings) -> Result<(f64, f64, f64)> {
    if restrict_to_one_pair && (pred.len() != 1 || gold.len() != 1) {
        bail!(ErrorKind::AlignmentArity(dimension, pred.len(), gold.len()));
    }
    if pred.len() != gold.len() {
        bail!(ErrorKind::SegmentMismatch(pred.len(), gold.len()));
    }

    let pred = pred.iter().flat_map(|agg| agg.segments.iter().cloned()).collect::<AggregateSubGraph>();
    let gold = gold.iter().flat_map(|agg| agg.segments.iter().cloned()).collect::<AggregateSubGraph>();
    let (f1, precision, recall) = f1_precision_recall(&pred, &gold, settings)?;

    debug!("{} -> P: {:.2}, R: {:.2}, F: {:.2}", dimension, precision, recall, f1);
    Ok((precision, recall, f1))
}
