//! The AVL engine.
//!
//! Every mutation walks down by key comparison, takes a child link by value
//! and hands the (possibly rotated) subtree root back to the caller, which
//! stores it into its own link. Heights are recomputed from both children on
//! every unwound frame before rebalancing.

use crate::{Error, Key};
use std::{cmp::Ordering, fmt::Debug};

mod arena;
mod balance;
#[cfg(feature = "dot")]
mod dot;
mod iter;
mod node;
mod print;

use self::arena::{Arena, NodeId};
use self::node::{Link, Node};

#[cfg(feature = "dot")]
pub use self::dot::Dot;
pub use self::iter::{Order, Traverse, Visit};
pub use self::print::Listing;

/// A height-balanced binary search tree of unique keys.
#[derive(Clone, Default)]
pub struct AvlTree {
  arena: Arena,
  root: Link,
}

impl AvlTree {
  pub fn new() -> Self {
    Self {
      arena: Arena::new(),
      root: None,
    }
  }

  #[cfg(test)]
  fn with_slot_limit(limit: usize) -> Self {
    Self {
      arena: Arena::with_slot_limit(limit),
      root: None,
    }
  }

  pub fn len(&self) -> usize {
    self.arena.len()
  }

  pub fn is_empty(&self) -> bool {
    self.root.is_none()
  }

  /// Height of the whole tree; `0` when empty.
  pub fn height(&self) -> u32 {
    self.arena.height(self.root)
  }

  pub fn root_key(&self) -> Option<Key> {
    self.root.map(|id| self.arena[id].key)
  }

  pub fn clear(&mut self) {
    self.arena.clear();
    self.root = None;
  }
}

impl AvlTree {
  /// Adds `key`, returning whether it was absent before.
  ///
  /// Inserting a key that is already present leaves the tree untouched.
  ///
  /// # Errors
  ///
  /// Fails if storage for the new node cannot be obtained, in which case the
  /// tree is left exactly as it was.
  pub fn insert(&mut self, key: Key) -> Result<bool, Error> {
    if self.search(key) {
      log::debug!("insert {key}: already present");
      return Ok(false);
    }
    self.arena.reserve()?;
    self.root = Some(self.insert_at(self.root, key));
    log::debug!("insert {key}: height now {}", self.height());
    Ok(true)
  }

  fn insert_at(&mut self, link: Link, key: Key) -> NodeId {
    let Some(id) = link else {
      return self.arena.alloc(Node::new(key));
    };
    let node = self.arena[id];
    match key.cmp(&node.key) {
      Ordering::Less => {
        let left = self.insert_at(node.left, key);
        self.arena[id].left = Some(left);
      }
      Ordering::Greater => {
        let right = self.insert_at(node.right, key);
        self.arena[id].right = Some(right);
      }
      Ordering::Equal => return id,
    }
    self.arena.update_height(id);
    balance::rebalance(&mut self.arena, id)
  }

  pub fn search(&self, key: Key) -> bool {
    let mut link = self.root;
    while let Some(id) = link {
      let node = &self.arena[id];
      link = match key.cmp(&node.key) {
        Ordering::Less => node.left,
        Ordering::Greater => node.right,
        Ordering::Equal => return true,
      };
    }
    false
  }

  /// Removes `key`, returning whether it was present.
  pub fn delete(&mut self, key: Key) -> bool {
    let len = self.arena.len();
    self.root = self.delete_at(self.root, key);
    let deleted = self.arena.len() < len;
    log::debug!("delete {key}: removed = {deleted}");
    deleted
  }

  fn delete_at(&mut self, link: Link, key: Key) -> Link {
    let id = link?;
    let node = self.arena[id];
    match key.cmp(&node.key) {
      Ordering::Less => {
        self.arena[id].left = self.delete_at(node.left, key);
      }
      Ordering::Greater => {
        self.arena[id].right = self.delete_at(node.right, key);
      }
      Ordering::Equal => match (node.left, node.right) {
        (None, None) => {
          self.arena.free(id);
          return None;
        }
        (None, Some(child)) | (Some(child), None) => {
          log::debug!("delete {key}: splicing in its only child");
          self.arena.free(id);
          return Some(child);
        }
        (Some(left), Some(_)) => {
          let predecessor = self.max_key(left);
          log::debug!("delete {key}: promoting predecessor {predecessor}");
          self.arena[id].left = self.delete_at(Some(left), predecessor);
          self.arena[id].key = predecessor;
        }
      },
    }
    self.arena.update_height(id);
    Some(balance::rebalance(&mut self.arena, id))
  }

  /// Rightmost key of the subtree rooted at `id`.
  fn max_key(&self, mut id: NodeId) -> Key {
    while let Some(right) = self.arena[id].right {
      id = right;
    }
    self.arena[id].key
  }
}

impl AvlTree {
  pub fn traverse(&self, order: Order) -> Traverse<'_> {
    Traverse::new(&self.arena, self.root, order)
  }

  pub fn pre_order(&self) -> Traverse<'_> {
    self.traverse(Order::Pre)
  }

  pub fn in_order(&self) -> Traverse<'_> {
    self.traverse(Order::In)
  }

  pub fn post_order(&self) -> Traverse<'_> {
    self.traverse(Order::Post)
  }

  /// Line-per-node listing of the tree in the given order.
  pub fn display(&self, order: Order) -> Listing<'_> {
    Listing {
      visits: self.traverse(order),
    }
  }

  #[cfg(feature = "dot")]
  pub fn dot(&self) -> Dot<'_> {
    Dot {
      arena: &self.arena,
      root: self.root,
    }
  }
}

impl AvlTree {
  /// Panics unless ordering, heights and balance hold at every node and
  /// every stored node is reachable exactly once.
  #[track_caller]
  pub fn assert_valid(&self) {
    let reachable = self.assert_valid_at(self.root, None, None);
    assert_eq!(
      reachable,
      self.arena.len(),
      "{reachable} nodes reachable from the root, {} stored",
      self.arena.len()
    );
  }

  fn assert_valid_at(&self, link: Link, lower: Option<Key>, upper: Option<Key>) -> usize {
    let Some(id) = link else {
      return 0;
    };
    let node = self.arena[id];
    if let Some(lower) = lower {
      assert!(node.key > lower, "key {} sits right of {lower}", node.key);
    }
    if let Some(upper) = upper {
      assert!(node.key < upper, "key {} sits left of {upper}", node.key);
    }

    let left = self.assert_valid_at(node.left, lower, Some(node.key));
    let right = self.assert_valid_at(node.right, Some(node.key), upper);

    let (lh, rh) = (self.arena.height(node.left), self.arena.height(node.right));
    assert_eq!(node.height, 1 + lh.max(rh), "stale height at key {}", node.key);
    assert!(
      lh.abs_diff(rh) <= 1,
      "key {} is unbalanced: left height {lh}, right height {rh}",
      node.key
    );
    1 + left + right
  }
}

impl Debug for AvlTree {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("AvlTree")
      .field("len", &self.len())
      .field("height", &self.height())
      .field("pre_order", &self.display(Order::Pre))
      .finish()
  }
}
