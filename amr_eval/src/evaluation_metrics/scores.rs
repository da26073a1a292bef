use rayon::prelude::*;
use amr::prelude::*;

use errors::*;
use settings::Settings;
use super::dimension::*;
use super::normalizer::NormalizedAmr;
use super::substructures;
use super::disambiguation::disambiguate;
use super::operation_classification::{operation_classes, score_operation_classes};
use super::aggregation::{Accumulator, Counts};
use super::structural::{align, SubGraph, AggregateSubGraph};

/// Everything extracted from one (predicted, gold) pair
#[derive(Debug, Clone)]
pub struct PairEvaluation {
    pub counts: Vec<(Dimension, Counts)>,
    /// (predicted, gold) sub-graphs
    pub reentrancies: (SubGraph, SubGraph),
    pub srl: (SubGraph, SubGraph)
}

/// Accumulation state of a corpus: counts of the counted dimensions, and the sub-graphs of
/// the structural dimensions merged into one aggregate per side
#[derive(Debug, Clone)]
struct CorpusState {
    counts: Accumulator,
    reentrancies: (AggregateSubGraph, AggregateSubGraph),
    srl: (AggregateSubGraph, AggregateSubGraph)
}

impl CorpusState {
    fn new() -> CorpusState {
        CorpusState {
            counts: Accumulator::new(),
            reentrancies: (AggregateSubGraph::new(), AggregateSubGraph::new()),
            srl: (AggregateSubGraph::new(), AggregateSubGraph::new())
        }
    }

    fn push(mut self, pair: PairEvaluation) -> CorpusState {
        self.counts = pair.counts.into_iter()
            .fold(self.counts, |acc, (dimension, counts)| acc.record(dimension, counts));

        self.reentrancies.0.push(pair.reentrancies.0);
        self.reentrancies.1.push(pair.reentrancies.1);
        self.srl.0.push(pair.srl.0);
        self.srl.1.push(pair.srl.1);
        self
    }
}

fn flat_counts<F>(pred: &NormalizedAmr, gold: &NormalizedAmr, extract: F) -> Counts
    where F: Fn(&NormalizedAmr) -> Vec<substructures::Item> {
    Counts::from_sets(&disambiguate(extract(pred)), &disambiguate(extract(gold)))
}

/// Extract and compare the items of every dimension of one pair. `index` is the position of
/// the pair in the corpus, used in error messages.
pub fn evaluate_pair(parser: &AmrParser, index: usize, pred: &str, gold: &str) -> Result<PairEvaluation> {
    let pred = NormalizedAmr::new(&parser.parse(pred).chain_err(|| ErrorKind::InvalidAmr(index, "predicted"))?);
    let gold = NormalizedAmr::new(&parser.parse(gold).chain_err(|| ErrorKind::InvalidAmr(index, "gold"))?);

    let op_classes = score_operation_classes(
        &operation_classes(&pred)?,
        &operation_classes(&gold)?);

    let counts = vec![
        (Dimension::Concepts, flat_counts(&pred, &gold, |amr| substructures::concepts(&amr.concepts))),
        (Dimension::NamedEntities, flat_counts(&pred, &gold, substructures::named_entities)),
        (Dimension::Negations, flat_counts(&pred, &gold, substructures::negations)),
        (Dimension::Wikification, flat_counts(&pred, &gold, substructures::wikification)),
        (Dimension::OpClass, op_classes),
    ];

    Ok(PairEvaluation {
        counts,
        reentrancies: (
            substructures::reentrancies(&pred),
            substructures::reentrancies(&gold)
        ),
        srl: (
            substructures::srl(&pred),
            substructures::srl(&gold)
        )
    })
}

/// Score a structural dimension. The whole corpus is submitted as a single aggregate pair.
fn structural_record(dimension: Dimension, aggregates: (AggregateSubGraph, AggregateSubGraph), settings: &Settings) -> Result<ScoreRecord> {
    let pred = vec![aggregates.0];
    let gold = vec![aggregates.1];

    let (precision, recall, f1) = align(dimension, &pred, &gold, true, settings)?;
    Ok(ScoreRecord {
        precision,
        recall,
        f1,
        total: pred[0].n_relations() + gold[0].n_relations()
    })
}

/// Score predicted AMRs against gold AMRs, with the default settings. AMRs are paired by
/// position.
pub fn calc_metrics<S: AsRef<str> + Sync>(pred: &[S], gold: &[S]) -> Result<Scores> {
    calc_metrics_with_settings(pred, gold, &Settings::default())
}

pub fn calc_metrics_with_settings<S: AsRef<str> + Sync>(pred: &[S], gold: &[S], settings: &Settings) -> Result<Scores> {
    if pred.len() != gold.len() {
        bail!(ErrorKind::CorpusLengthMismatch(pred.len(), gold.len()));
    }

    info!("Evaluate {} AMR pairs", pred.len());
    let parser = AmrParser::new();
    let evaluations: Vec<PairEvaluation> = if settings.parallel {
        pred.par_iter()
            .zip(gold.par_iter())
            .enumerate()
            .map(|(i, (p, g))| evaluate_pair(&parser, i, p.as_ref(), g.as_ref()))
            .collect::<Result<Vec<_>>>()?
    } else {
        pred.iter()
            .zip(gold.iter())
            .enumerate()
            .map(|(i, (p, g))| evaluate_pair(&parser, i, p.as_ref(), g.as_ref()))
            .collect::<Result<Vec<_>>>()?
    };

    let state = evaluations.into_iter().fold(CorpusState::new(), CorpusState::push);
    let mut scores = state.counts.finalize();
    scores.insert(Dimension::Reentrancies, structural_record(Dimension::Reentrancies, state.reentrancies, settings)?);
    scores.insert(Dimension::Srl, structural_record(Dimension::Srl, state.srl, settings)?);

    Ok(scores)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    pub fn test_evaluate_pair() {
        let parser = AmrParser::new();
        let pair = evaluate_pair(&parser, 0,
            "(w / want-01 :ARG0 (b / boy) :ARG1 (g / go-01 :ARG0 b))",
            "(w / want-01 :ARG0 (b / boy) :ARG1 (g / go-02 :ARG0 b))").unwrap();

        assert_eq!(pair.counts[0], (Dimension::Concepts, Counts::new(2, 3, 3)));
        assert_eq!(pair.counts[4], (Dimension::OpClass, Counts::default()));
        assert_eq!(pair.reentrancies.0.n_relations(), 2);
        assert_eq!(pair.srl.1.n_relations(), 3);
    }

    #[test]
    pub fn test_invalid_amr_is_reported_with_its_position() {
        let parser = AmrParser::new();
        match evaluate_pair(&parser, 3, "(b / boy)", "(b / boy") {
            Err(Error(ErrorKind::InvalidAmr(3, "gold"), _)) => (),
            x => panic!("{:?}", x)
        }
    }
}
