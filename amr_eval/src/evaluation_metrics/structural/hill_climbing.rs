use std::cmp;
use rand::prelude::*;

use super::internal_structure::*;
use super::find_best_map::eval_score;

/// Map the i-th predicted node of every group to the i-th gold node of the same group
fn initial_map(base: &Bijection, map_groups: &[PairLabelGroup]) -> Bijection {
    let mut bijection = base.clone();
    for group in map_groups {
        for i in 0..cmp::min(group.x.len(), group.x_prime.len()) {
            bijection.push_both(group.x[i], group.x_prime[i]);
        }
    }

    bijection
}

/// Same as `initial_map` but the nodes of every group are shuffled first
fn random_map<R: Rng>(base: &Bijection, map_groups: &[PairLabelGroup], rng: &mut R) -> Bijection {
    let mut bijection = base.clone();
    for group in map_groups {
        let mut x = group.x.clone();
        let mut x_prime = group.x_prime.clone();
        rng.shuffle(&mut x);
        rng.shuffle(&mut x_prime);

        for i in 0..cmp::min(x.len(), x_prime.len()) {
            bijection.push_both(x[i], x_prime[i]);
        }
    }

    bijection
}

/// Climb from `bijection` by repeatedly applying the move that improves the score the most.
/// A move either rebinds a predicted node to an unbound gold node of its group, or swaps the
/// gold nodes of two predicted nodes of the same group.
fn climb<'a>(gold: &IndexedSubGraph<'a>, pred: &IndexedSubGraph<'a>, map_groups: &[PairLabelGroup<'a>], mut bijection: Bijection) -> (Bijection, usize) {
    let mut score = eval_score(gold, pred, &bijection);

    loop {
        let mut best_move: Option<(Bijection, usize)> = None;
        for group in map_groups {
            for &x_prime in &group.x_prime {
                for &x in &group.x {
                    let mut candidate = bijection.clone();
                    if !candidate.is_gold_node_bounded(x) {
                        candidate.rebind_x_prime(x_prime, x);
                    } else if candidate.x2prime[x] as usize != x_prime {
                        let other = candidate.x2prime[x] as usize;
                        candidate.swap_x_prime(x_prime, other);
                    } else {
                        continue;
                    }

                    let candidate_score = eval_score(gold, pred, &candidate);
                    let best_score = best_move.as_ref().map_or(score, |m| m.1);
                    if candidate_score > best_score {
                        best_move = Some((candidate, candidate_score));
                    }
                }
            }
        }

        match best_move {
            None => return (bijection, score),
            Some((new_bijection, new_score)) => {
                bijection = new_bijection;
                score = new_score;
            }
        }
    }
}

/// Approximate search of the best mapping when there are too many candidate mappings to
/// enumerate them. The best local optimum found from the in-order mapping and from
/// `n_restarts` random mappings is returned.
pub fn hill_climb<'a, R: Rng>(gold: &IndexedSubGraph<'a>, pred: &IndexedSubGraph<'a>, map_groups: &[PairLabelGroup<'a>], base: &Bijection, n_restarts: usize, rng: &mut R) -> (Bijection, usize) {
    let (mut best_map, mut best_score) = climb(gold, pred, map_groups, initial_map(base, map_groups));

    for i in 0..n_restarts {
        let (bijection, score) = climb(gold, pred, map_groups, random_map(base, map_groups, rng));
        trace!("Restart {}: score = {} (best = {})", i, score, best_score);
        if score > best_score {
            best_map = bijection;
            best_score = score;
        }
    }

    (best_map, best_score)
}

#[cfg(test)]
mod tests {
    use super::*;
    use evaluation_metrics::structural::find_best_map::find_best_map;
    use evaluation_metrics::structural::sub_graph::{Instance, SubGraph};
    use amr::prelude::Triple as AmrTriple;

    #[test]
    pub fn test_hill_climb_reaches_exhaustive_score() {
        // a chain of persons: only the reversed mapping matches every relation
        let gold = SubGraph {
            instances: (0..4).map(|i| Instance::new(&format!("g{}", i), "person")).collect(),
            relations: vec![
                AmrTriple::new("ARG0", "g3", "g2"),
                AmrTriple::new("ARG0", "g2", "g1"),
                AmrTriple::new("ARG0", "g1", "g0"),
            ],
            attributes: Vec::new()
        };
        let pred = SubGraph {
            instances: (0..4).map(|i| Instance::new(&format!("p{}", i), "person")).collect(),
            relations: vec![
                AmrTriple::new("ARG0", "p0", "p1"),
                AmrTriple::new("ARG0", "p1", "p2"),
                AmrTriple::new("ARG0", "p2", "p3"),
            ],
            attributes: Vec::new()
        };
        let (gold, pred) = (IndexedSubGraph::new(&gold), IndexedSubGraph::new(&pred));
        let (base, groups) = get_map_groups(&gold, &pred);

        let (_, exhaustive_score) = find_best_map(&gold, &pred, &groups, base.clone());
        let mut rng = StdRng::from_seed([120; 32]);
        let (bijection, score) = hill_climb(&gold, &pred, &groups, &base, 8, &mut rng);

        assert_eq!(exhaustive_score, 7);
        assert!(score <= exhaustive_score);
        assert_eq!(eval_score(&gold, &pred, &bijection), score);
        assert_eq!(bijection.n_bounded(), 4);
    }
}
