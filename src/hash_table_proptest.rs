#![cfg(test)]

// Property tests for HashTable kept inside the crate so they can check
// private geometry (`index_of`) alongside the public behavior.

use crate::hash_element::{hash_str, HashElement};
use crate::hash_table::{Handle, HashTable};
use crate::multiplier::Multiplier;
use proptest::prelude::*;
use std::collections::{BTreeMap, HashMap};

#[derive(Clone, Debug)]
struct Item {
    key: String,
    value: i32,
    // When set, every item hashes to the same code.
    collide: bool,
}

impl HashElement for Item {
    fn equals(&self, other: &Self) -> bool {
        self.key == other.key
    }
    fn hash_code(&self) -> u32 {
        if self.collide {
            0x5bd1_e995
        } else {
            hash_str(&self.key)
        }
    }
}

#[derive(Clone, Debug)]
enum Op {
    Add(usize, i32),
    Find(usize),
    Mutate(usize, i32),
    Handle(usize),
    Clear,
    Iterate,
}

fn arb_scenario() -> impl Strategy<Value = (Vec<String>, Vec<Op>)> {
    proptest::collection::vec("[a-z]{1,5}", 1..=8).prop_flat_map(|pool| {
        let idxs: Vec<usize> = (0..pool.len()).collect();
        let idx = proptest::sample::select(idxs);
        let op = prop_oneof![
            4 => (idx.clone(), any::<i32>()).prop_map(|(i, v)| Op::Add(i, v)),
            3 => idx.clone().prop_map(Op::Find),
            2 => (idx.clone(), any::<i32>()).prop_map(|(i, d)| Op::Mutate(i, d)),
            1 => idx.clone().prop_map(Op::Handle),
            1 => Just(Op::Clear),
            1 => Just(Op::Iterate),
        ];
        proptest::collection::vec(op, 1..80).prop_map(move |ops| (pool.clone(), ops))
    })
}

fn run(pool: &[String], ops: Vec<Op>, hint: usize, z: u32, collide: bool) -> Result<(), TestCaseError> {
    let item = |i: usize, value: i32| Item {
        key: pool[i].clone(),
        value,
        collide,
    };
    let mut sut: HashTable<Item> = HashTable::with_multiplier(hint, Multiplier::new(z)).unwrap();
    let mut model: HashMap<String, i32> = HashMap::new();
    let mut stale: Vec<Handle> = Vec::new();

    for op in ops {
        match op {
            Op::Add(i, v) => {
                let prev = sut.add(item(i, v));
                let model_prev = model.insert(pool[i].clone(), v);
                prop_assert_eq!(prev.map(|p| p.value), model_prev);
            }
            Op::Find(i) => {
                let probe = item(i, 0);
                let found = sut.find(&probe).map(|p| (p.key.clone(), p.value));
                let expected = model.get(&pool[i]).map(|v| (pool[i].clone(), *v));
                prop_assert_eq!(&found, &expected);
                // Repeated lookup without mutation agrees with itself.
                let again = sut.find(&probe).map(|p| (p.key.clone(), p.value));
                prop_assert_eq!(found, again);
            }
            Op::Mutate(i, d) => {
                let probe = item(i, 0);
                match (sut.find_mut(&probe), model.get_mut(&pool[i])) {
                    (Some(p), Some(m)) => {
                        p.value = p.value.wrapping_add(d);
                        *m = m.wrapping_add(d);
                    }
                    (None, None) => {}
                    (s, m) => prop_assert!(false, "presence mismatch: {:?} vs {:?}", s, m),
                }
            }
            Op::Handle(i) => {
                let probe = item(i, 0);
                let h = sut.find_handle(&probe);
                prop_assert_eq!(h.is_some(), model.contains_key(&pool[i]));
                if let Some(h) = h {
                    prop_assert_eq!(h.get(&sut).map(|p| p.value), model.get(&pool[i]).copied());
                    stale.push(h);
                }
            }
            Op::Clear => {
                sut.clear();
                model.clear();
                for h in stale.drain(..) {
                    prop_assert!(h.get(&sut).is_none());
                }
            }
            Op::Iterate => {
                let s: BTreeMap<String, i32> =
                    sut.iter().map(|p| (p.key.clone(), p.value)).collect();
                let m: BTreeMap<String, i32> = model.iter().map(|(k, v)| (k.clone(), *v)).collect();
                prop_assert_eq!(s, m);
            }
        }

        prop_assert_eq!(sut.len(), model.len());
        prop_assert_eq!(sut.is_empty(), model.is_empty());
        let stats = sut.stats();
        prop_assert_eq!(stats.len, model.len());
        prop_assert!(stats.longest_chain <= model.len());
    }
    Ok(())
}

// Property: state-machine equivalence against std::collections::HashMap.
// Invariants exercised across random operation sequences:
// - `add` returns the replaced entry exactly when the model had the key.
// - `find` agrees with the model and is idempotent.
// - `find_mut` edits are visible to later lookups; `len` tracks distinct keys.
// - `clear` empties the table and invalidates every handle taken before it.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine((pool, ops) in arb_scenario(), hint in 1usize..64, z in any::<u32>()) {
        run(&pool, ops, hint, z, false)?;
    }

    #[test]
    fn prop_state_machine_with_collisions((pool, ops) in arb_scenario(), z in any::<u32>()) {
        run(&pool, ops, 4, z, true)?;
    }

    // Property: the bucket index is always in [0, capacity) and equal keys
    // share a bucket whatever their payload.
    #[test]
    fn prop_bucket_index_in_range(hint in 1usize..100_000, z in any::<u32>(), key in "[a-zA-Z0-9]{1,12}", a in any::<i32>(), b in any::<i32>()) {
        let t: HashTable<Item> = HashTable::with_multiplier(hint, Multiplier::new(z)).unwrap();
        prop_assert!(t.capacity().is_power_of_two());
        prop_assert!(t.capacity() >= 2 * hint);
        prop_assert!(t.capacity() < 4 * hint);
        let x = Item { key: key.clone(), value: a, collide: false };
        let y = Item { key, value: b, collide: false };
        let i = t.bucket_index(&x);
        prop_assert!(i < t.capacity());
        prop_assert_eq!(i, t.bucket_index(&y));
    }

    #[test]
    fn prop_index_of_in_range(hint in 1usize..1_000_000, z in any::<u32>(), code in any::<u32>()) {
        let t: HashTable<Item> = HashTable::with_multiplier(hint, Multiplier::new(z)).unwrap();
        prop_assert!(t.index_of(code) < t.capacity());
    }
}
