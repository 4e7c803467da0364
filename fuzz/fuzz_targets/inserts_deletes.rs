#![no_main]

use std::collections::BTreeSet;

use avl_tree::AvlTree;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|inserts_removals: (Vec<i16>, Vec<i16>)| {
  let mut tree = AvlTree::new();
  let mut oracle = BTreeSet::new();

  for i in inserts_removals.0 {
    let key = i64::from(i);
    assert_eq!(tree.insert(key), Ok(oracle.insert(key)));
    tree.assert_valid();
  }

  for i in inserts_removals.1 {
    let key = i64::from(i);
    assert_eq!(tree.delete(key), oracle.remove(&key));
    tree.assert_valid();
  }

  assert!(tree.in_order().map(|visit| visit.key).eq(oracle.iter().copied()));
});
