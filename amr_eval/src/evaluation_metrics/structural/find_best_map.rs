use im::vector::Vector as IVector;
use itertools::Itertools;
use permutohedron::heap_recursive;

use super::internal_structure::*;

pub struct FindBestMapArgs {
    pub group_index: usize,
    pub bijection: Bijection
}

pub struct IterGroupMapUsingGroupingArgs {
    pub node_index: usize,
    pub group_sizes: IVector<i32>,
    pub mapping: IVector<i32>
}

pub fn iter_group_maps<F>(group: &PairLabelGroup, borrow_bijection: &mut Bijection, func: F)
    where F: FnMut(&Bijection) -> () {
    // note that the borrow bijection must be cleaned before using
    if group.x.len() < group.x_prime.len() {
        iter_group_maps_general_approach(&group.x, &group.x_prime, borrow_bijection, func)
    } else {
        let x_groups = group.x.iter().map(|&x| vec![x]).collect::<Vec<_>>();
        iter_group_maps_using_grouping(&group.x_prime, x_groups, borrow_bijection, func)
    }
}

/// Generate all mapping from X to X_prime
/// NOTE: |X| < |X_prime|
///
/// Return mapping from (x_prime to x)
fn iter_group_maps_general_approach<F>(x: &[usize], x_prime: &[usize], borrow_bijection: &mut Bijection, mut func: F)
    where F: FnMut(&Bijection) -> () {

    let mut mapping_mold: Vec<Option<usize>> = vec![None; x_prime.len()];
    for mut combs in (0..x_prime.len()).combinations(x.len()) {
        heap_recursive(&mut combs, |perm| {
            for (i, &j) in perm.iter().enumerate() {
                mapping_mold[j] = Some(x[i]);
            }

            for i in 0..x_prime.len() {
                borrow_bijection.push_x_prime(mapping_mold[i], x_prime[i]);
                mapping_mold[i] = None;
            }

            func(&borrow_bijection);
            borrow_bijection.clear(); // clean it after using
        });
    }
}

/// Generate all mapping from X_prime to G (groups of interchangeable nodes of X)
/// NOTE: |X_prime| <= |X|
///
/// Return mapping from (x_prime to x)
fn iter_group_maps_using_grouping<F>(x_prime: &[usize], x_groups: Vec<Vec<usize>>, borrow_bijection: &mut Bijection, mut func: F)
    where F: FnMut(&Bijection) -> () {
    let terminate_index = x_prime.len();
    let mut call_stack = vec![IterGroupMapUsingGroupingArgs {
        node_index: 0,
        mapping: IVector::from(vec![-1; x_prime.len()]),
        group_sizes: IVector::from(x_groups.iter().map(|g| g.len() as i32).collect::<Vec<_>>())
    }];
    let mut g_numerator = vec![0; x_groups.len()];

    while let Some(call_args) = call_stack.pop() {
        if call_args.node_index == terminate_index {
            // convert the assignment of groups into final mapping
            for i in 0..x_prime.len() {
                let mapping_idx = call_args.mapping[i] as usize;
                let x_id = x_groups[mapping_idx][g_numerator[mapping_idx]];

                g_numerator[mapping_idx] += 1;
                borrow_bijection.push_both(x_id, x_prime[i])
            }

            func(&borrow_bijection);
            for i in 0..x_groups.len() {
                g_numerator[i] = 0;
            }
            borrow_bijection.clear();
        } else {
            for i in 0..x_groups.len() {
                if call_args.group_sizes[i] == 0 {
                    continue;
                }

                let mapping = call_args.mapping.update(call_args.node_index, i as i32);
                let group_sizes = call_args.group_sizes.update(i, call_args.group_sizes[i] - 1);
                call_stack.push(IterGroupMapUsingGroupingArgs {
                    node_index: call_args.node_index + 1,
                    mapping,
                    group_sizes
                });
            }
        }
    }
}

/// Number of triples of the predicted graph that are found in the gold graph once its nodes
/// are renamed by the bijection. Mapped nodes share their concept, so each of them matches
/// an instance triple.
pub fn eval_score<'a>(gold: &IndexedSubGraph<'a>, pred: &IndexedSubGraph<'a>, bijection: &Bijection) -> usize {
    let mut n_matched = bijection.n_bounded();

    for triple in &pred.triples {
        let source_id = bijection.to_x(triple.source_id as usize);
        if source_id == UNBOUND {
            continue;
        }

        let target = match triple.target {
            Target::Node(target_id) => {
                let target_id = bijection.to_x(target_id as usize);
                if target_id == UNBOUND {
                    continue;
                }
                Target::Node(target_id)
            },
            Target::Literal(value) => Target::Literal(value)
        };

        if gold.triples.contains(&Triple { source_id, target, predicate: triple.predicate }) {
            n_matched += 1;
        }
    }

    n_matched
}

/// Exhaustively search the mappings of every group and return the best bijection together
/// with its score
pub fn find_best_map<'a>(gold: &IndexedSubGraph<'a>, pred: &IndexedSubGraph<'a>, map_groups: &[PairLabelGroup<'a>], bijection: Bijection) -> (Bijection, usize) {
    let terminate_index = map_groups.len();
    // a lending bijection to help speed up the program by avoiding creating new bijection
    // everytime
    let mut lending_bijection = Bijection::new_like(&bijection);

    let mut call_stack = vec![FindBestMapArgs { group_index: 0, bijection }];
    let mut best_score = 0;
    let mut best_map: Option<Bijection> = None;

    while let Some(call_args) = call_stack.pop() {
        if call_args.group_index == terminate_index {
            // it is terminated, calculate score
            let score = eval_score(gold, pred, &call_args.bijection);
            if best_map.is_none() || score > best_score {
                best_score = score;
                best_map = Some(call_args.bijection);
            }
        } else {
            let pair_group = &map_groups[call_args.group_index];
            iter_group_maps(pair_group, &mut lending_bijection, |par_bijection| {
               call_stack.push(FindBestMapArgs {
                   group_index: call_args.group_index + 1,
                   bijection: call_args.bijection.extends(par_bijection)
               });
            });
        }
    }

    (best_map.unwrap_or_else(Bijection::empty), best_score)
}

#[cfg(test)]
mod tests {
    use super::*;
    use evaluation_metrics::structural::sub_graph::{Instance, SubGraph};
    use amr::prelude::Triple as AmrTriple;

    fn sub_graph(instances: &[(&str, &str)], relations: &[(&str, &str, &str)]) -> SubGraph {
        SubGraph {
            instances: instances.iter().map(|&(v, c)| Instance::new(v, c)).collect(),
            relations: relations.iter().map(|&(r, s, t)| AmrTriple::new(r, s, t)).collect(),
            attributes: Vec::new()
        }
    }

    fn collect_maps(group: &PairLabelGroup, n_x: usize, n_x_prime: usize) -> Vec<Vec<i32>> {
        let mut lending_bijection = Bijection::new(n_x, n_x_prime);
        let mut maps = Vec::new();
        iter_group_maps(group, &mut lending_bijection, |b| maps.push(b.prime2x.clone()));
        maps.sort();
        maps
    }

    #[test]
    pub fn test_iter_group_maps() {
        // |X| >= |X'|: every x' goes to a distinct x
        let group = PairLabelGroup { label: "person", x: vec![0, 1, 2], x_prime: vec![0, 1] };
        assert_eq!(collect_maps(&group, 3, 2), vec![
            vec![0, 1], vec![0, 2], vec![1, 0], vec![1, 2], vec![2, 0], vec![2, 1]
        ]);

        // |X| < |X'|: some x' stay unbound
        let group = PairLabelGroup { label: "person", x: vec![0], x_prime: vec![0, 1] };
        assert_eq!(collect_maps(&group, 1, 2), vec![vec![UNBOUND, 0], vec![0, UNBOUND]]);
    }

    #[test]
    pub fn test_find_best_map_prefers_structure() {
        // both graphs have two persons, only one mapping preserves who wants what
        let gold = sub_graph(
            &[("p", "person"), ("p2", "person"), ("w", "want-01")],
            &[("ARG0", "w", "p2"), ("ARG1", "w", "p")]);
        let pred = sub_graph(
            &[("a", "person"), ("b", "person"), ("c", "want-01")],
            &[("ARG0", "c", "a"), ("ARG1", "c", "b")]);
        let (gold, pred) = (IndexedSubGraph::new(&gold), IndexedSubGraph::new(&pred));
        let (bijection, groups) = get_map_groups(&gold, &pred);

        let (best_map, score) = find_best_map(&gold, &pred, &groups, bijection);
        assert_eq!(score, 5);
        assert_eq!(best_map.prime2x, vec![1, 0, 2]);
        assert_eq!(eval_score(&gold, &pred, &best_map), 5);
    }
}
