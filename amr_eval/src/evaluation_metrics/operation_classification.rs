use std::collections::BTreeMap;
use fnv::FnvHashMap;
use amr::prelude::*;

use errors::*;
use super::aggregation::Counts;
use super::normalizer::NormalizedAmr;

/// Suffix of the concepts that classify an operation, e.g. `click-enum`
pub const ENUM_MARKER: &str = "-enum";
/// Trigger of operations without an explicit lexical trigger
pub const IMPLICIT_TRIGGER: &str = "event_";

/// Mapping from the lexical trigger of an operation to its class
pub type OperationClasses = BTreeMap<String, String>;

/// Links `source -> target` of the `op1` and `name` relations. When a variable has several
/// links, the last one wins.
pub fn trigger_links(triples: &[Triple]) -> FnvHashMap<&str, &str> {
    triples.iter()
        .filter(|t| t.relation == "op1" || t.relation == "name")
        .map(|t| (t.source.as_str(), t.target.as_str()))
        .collect()
}

/// Resolve the trigger of an operation variable: operation variable -> naming variable (an
/// edge of `edge_links`) -> literal (an attribute of `literal_links`)
pub fn resolve_trigger<'a>(edge_links: &FnvHashMap<&'a str, &'a str>, literal_links: &FnvHashMap<&'a str, &'a str>, variable: &str) -> Result<&'a str> {
    let naming_variable = match edge_links.get(variable) {
        Some(&v) => v,
        None => bail!(ErrorKind::DanglingTrigger(variable.to_owned(), "naming variable"))
    };

    match literal_links.get(naming_variable) {
        Some(&trigger) => Ok(trigger),
        None => bail!(ErrorKind::DanglingTrigger(variable.to_owned(), "trigger literal"))
    }
}

/// Classes of the operations of an AMR, keyed by their trigger. Operations whose trigger is
/// `IMPLICIT_TRIGGER` are left out.
pub fn operation_classes(amr: &NormalizedAmr) -> Result<OperationClasses> {
    let edge_links = trigger_links(&amr.relations);
    let literal_links = trigger_links(&amr.attributes);
    let mut operations = amr.concepts.iter()
        .filter(|&(_, concept)| concept.ends_with(ENUM_MARKER))
        .collect::<Vec<_>>();
    operations.sort();

    let mut classes = OperationClasses::new();
    for (variable, concept) in operations {
        let trigger = resolve_trigger(&edge_links, &literal_links, variable)?;
        if trigger != IMPLICIT_TRIGGER {
            classes.insert(trigger.to_owned(), concept.clone());
        }
    }

    Ok(classes)
}

/// Only triggers found in both AMRs are compared, so the predicted and gold counts are both
/// the number of shared triggers
pub fn score_operation_classes(pred: &OperationClasses, gold: &OperationClasses) -> Counts {
    let mut n_shared = 0;
    let mut n_correct = 0;
    for (trigger, pred_class) in pred {
        if let Some(gold_class) = gold.get(trigger) {
            n_shared += 1;
            if pred_class == gold_class {
                n_correct += 1;
            }
        }
    }

    Counts::new(n_correct, n_shared, n_shared)
}
