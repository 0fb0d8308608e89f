use itertools::Itertools;
use log::trace;

use crate::types::Candidates;

/// Union every pair drawn from `itemsets` (an itemset paired with itself
/// included) and keep the unions of exactly `target_size` items.
///
/// No subset pruning happens here; the support scan that follows rejects
/// candidates with an infrequent subset on its own.
pub fn join_step(itemsets: &Candidates, target_size: usize) -> Candidates {
    let candidates: Candidates = itemsets
        .iter()
        .combinations_with_replacement(2)
        .filter(|pair| pair[0].union_len(pair[1]) == target_size)
        .map(|pair| pair[0].union(pair[1]))
        .collect();

    trace!(
        "joined {} itemsets into {} candidates of size {}",
        itemsets.len(),
        candidates.len(),
        target_size
    );

    candidates
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::itemset::Itemset;
    use maplit::hashset;

    fn itemsets(ids: Vec<Vec<usize>>) -> Candidates {
        ids.into_iter().map(Itemset::from).collect()
    }

    #[test]
    fn test_join_step() {
        let itemsets = itemsets(vec![
            vec![1, 2, 3],
            vec![1, 2, 4],
            vec![1, 3, 4],
            vec![1, 3, 5],
            vec![2, 3, 4],
        ]);
        let y = join_step(&itemsets, 4);

        // every pair sharing two items, not only a common prefix
        let expected = hashset! {
            Itemset::from(vec![1, 2, 3, 4]),
            Itemset::from(vec![1, 2, 3, 5]),
            Itemset::from(vec![1, 3, 4, 5]),
        };
        assert_eq!(y, expected);
    }

    #[test]
    fn test_join_step_singletons() {
        let itemsets = itemsets(vec![vec![10], vec![13], vec![14]]);
        let y = join_step(&itemsets, 2);

        assert_eq!(
            y,
            hashset! {
                Itemset::from(vec![10, 13]),
                Itemset::from(vec![10, 14]),
                Itemset::from(vec![13, 14]),
            }
        );
    }

    #[test]
    fn test_join_step_disjoint_pairs_do_not_join() {
        let itemsets = itemsets(vec![vec![10, 11], vec![13, 14]]);
        assert!(join_step(&itemsets, 3).is_empty());
    }

    #[test]
    fn test_join_step_self_pairs_match_current_size() {
        let itemsets = itemsets(vec![vec![1, 2], vec![3, 4]]);
        assert_eq!(join_step(&itemsets, 2), itemsets);
    }

    #[test]
    fn test_join_step_empty() {
        assert!(join_step(&Candidates::new(), 2).is_empty());
    }
}
