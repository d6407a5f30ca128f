//! Property tests for the ordered index.
//!
//! Every property drives the index and a `BTreeMap` model with the same
//! operation sequence (model inserts use `or_insert` so the first payload
//! for a key wins) and checks the two agree.

use std::collections::BTreeMap;

use catalogdb::common::config::max_avl_height;
use catalogdb::OrderedIndex;
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Insert(u16, u32),
    Remove(u16),
}

fn op() -> impl Strategy<Value = Op> {
    // A narrow key space makes duplicates and hits on remove common
    prop_oneof![
        3 => (0u16..256, any::<u32>()).prop_map(|(k, v)| Op::Insert(k, v)),
        2 => (0u16..256).prop_map(Op::Remove),
    ]
}

fn apply(ops: &[Op]) -> (OrderedIndex<u16, u32>, BTreeMap<u16, u32>) {
    let mut index = OrderedIndex::new();
    let mut model = BTreeMap::new();
    for op in ops {
        match *op {
            Op::Insert(k, v) => {
                let fresh = !model.contains_key(&k);
                model.entry(k).or_insert(v);
                assert_eq!(index.insert(k, v), fresh);
            }
            Op::Remove(k) => {
                assert_eq!(index.remove(&k), model.remove(&k).is_some());
            }
        }
    }
    (index, model)
}

proptest! {
    #[test]
    fn prop_invariants_hold_after_any_sequence(ops in prop::collection::vec(op(), 0..400)) {
        let (index, model) = apply(&ops);

        prop_assert_eq!(index.validate(), Ok(()));
        prop_assert_eq!(index.len(), model.len());
        prop_assert!(index.height() <= max_avl_height(index.len()));
    }

    #[test]
    fn prop_records_match_model(ops in prop::collection::vec(op(), 0..400)) {
        let (index, model) = apply(&ops);

        let actual: Vec<(u16, u32)> = index.records().map(|(k, v)| (*k, *v)).collect();
        let expected: Vec<(u16, u32)> = model.into_iter().collect();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn prop_find_returns_first_payload(ops in prop::collection::vec(op(), 0..400), probe in 0u16..256) {
        let (index, model) = apply(&ops);

        prop_assert_eq!(index.find(&probe), model.get(&probe));
        prop_assert_eq!(index.contains_key(&probe), model.contains_key(&probe));
    }

    #[test]
    fn prop_range_matches_filtered_records(
        ops in prop::collection::vec(op(), 0..400),
        a in 0u16..300,
        b in 0u16..300,
    ) {
        let (index, _) = apply(&ops);
        let (low, high) = (a.min(b), a.max(b));

        let ranged: Vec<u16> = index.range_records(&low, &high).map(|(k, _)| *k).collect();
        let filtered: Vec<u16> = index
            .records()
            .map(|(k, _)| *k)
            .filter(|k| low <= *k && *k <= high)
            .collect();
        prop_assert_eq!(ranged, filtered);
    }

    #[test]
    fn prop_inverted_range_is_empty(ops in prop::collection::vec(op(), 0..200), a in 0u16..300, b in 0u16..300) {
        prop_assume!(a != b);
        let (index, _) = apply(&ops);
        let (low, high) = (a.min(b), a.max(b));

        prop_assert_eq!(index.range_records(&high, &low).count(), 0);
    }

    #[test]
    fn prop_duplicate_insert_is_invisible(ops in prop::collection::vec(op(), 1..200), payload in any::<u32>()) {
        let (mut index, _) = apply(&ops);
        let Some((&key, _)) = index.first() else {
            return Ok(());
        };
        let before: Vec<(u16, u32)> = index.records().map(|(k, v)| (*k, *v)).collect();
        let height = index.height();

        prop_assert!(!index.insert(key, payload));

        let after: Vec<(u16, u32)> = index.records().map(|(k, v)| (*k, *v)).collect();
        prop_assert_eq!(before, after);
        prop_assert_eq!(index.height(), height);
    }
}
