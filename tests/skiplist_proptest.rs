// model = "claude-opus-4-5"
// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "Isaac Clayton"

//! Property-based tests: the skip list against a `BTreeSet` model.

use std::collections::BTreeSet;

use proptest::prelude::*;

use lanes::{Options, SkipList};

// =============================================================================
// Test helpers
// =============================================================================

#[derive(Clone, Debug)]
enum Op {
    Insert(u16),
    Delete(u16),
}

fn arbitrary_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        // Small key space so deletes and updates hit existing items.
        3 => (0..256u16).prop_map(Op::Insert),
        2 => (0..256u16).prop_map(Op::Delete),
    ]
}

fn apply(list: &mut SkipList<u16>, model: &mut BTreeSet<u16>, op: &Op) -> bool {
    match op {
        Op::Insert(key) => {
            let replaced = list.insert(*key).is_some();
            let fresh = model.insert(*key);
            return replaced != fresh;
        }
        Op::Delete(key) => {
            return list.delete(key) == model.remove(key);
        }
    }
}

fn build(ops: &[Op], seed: u64, free_list_capacity: usize) -> (SkipList<u16>, BTreeSet<u16>) {
    let mut list = SkipList::with_options(
        Options::default()
            .with_seed(seed)
            .with_free_list_capacity(free_list_capacity),
    );
    let mut model = BTreeSet::new();
    for op in ops {
        assert!(apply(&mut list, &mut model, op), "outcome diverged on {:?}", op);
    }
    return (list, model);
}

// =============================================================================
// Order and content
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Iteration matches the model: ascending, no duplicates.
    #[test]
    fn iteration_matches_model(
        ops in prop::collection::vec(arbitrary_op(), 1..300),
        seed in any::<u64>(),
        free_list_capacity in 0..40usize,
    ) {
        let (list, model) = build(&ops, seed, free_list_capacity);

        let got: Vec<u16> = list.iter().copied().collect();
        let want: Vec<u16> = model.iter().copied().collect();
        prop_assert_eq!(got, want);
        prop_assert_eq!(list.len(), model.len());
        prop_assert_eq!(list.first(), model.first());
        prop_assert_eq!(list.last(), model.last());
    }

    /// `get` finds exactly the model's members.
    #[test]
    fn search_matches_model(
        ops in prop::collection::vec(arbitrary_op(), 1..300),
        seed in any::<u64>(),
    ) {
        let (list, model) = build(&ops, seed, 32);
        for key in 0..256u16 {
            prop_assert_eq!(list.get(&key), model.get(&key));
        }
    }

    /// `seek` lands on the first member not less than the key.
    #[test]
    fn seek_matches_model(
        ops in prop::collection::vec(arbitrary_op(), 1..200),
        seed in any::<u64>(),
        key in 0..300u16,
    ) {
        let (list, model) = build(&ops, seed, 32);
        let cursor = list.seek(&key);
        prop_assert_eq!(cursor.current(), model.range(key..).next());
    }

    /// `range(begin, end)` yields exactly `begin..=end` from the model.
    #[test]
    fn range_matches_model(
        ops in prop::collection::vec(arbitrary_op(), 1..200),
        seed in any::<u64>(),
        begin in 0..300u16,
        end in 0..300u16,
    ) {
        let (list, model) = build(&ops, seed, 32);
        let got: Vec<u16> = list.range(&begin, &end).copied().collect();
        let want: Vec<u16> = if end < begin {
            Vec::new()
        } else {
            model.range(begin..=end).copied().collect()
        };
        prop_assert_eq!(got, want);
    }

    /// Draining everything leaves an empty, single-lane list.
    #[test]
    fn drain_empties_list(
        keys in prop::collection::btree_set(any::<u16>(), 0..500),
        seed in any::<u64>(),
    ) {
        let mut list = SkipList::with_options(Options::default().with_seed(seed));
        list.extend(keys.iter().copied());
        prop_assert_eq!(list.len(), keys.len());

        for key in keys.iter().rev() {
            prop_assert!(list.delete(key));
        }
        prop_assert!(list.is_empty());
        prop_assert_eq!(list.level(), 1);
        prop_assert_eq!(list.iter().count(), 0);
    }
}
