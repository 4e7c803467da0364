use super::node::Node;
use crate::Error;
use std::{
  fmt::{Debug, Display},
  ops::{Index, IndexMut},
};

/// Handle to a node slot. Each live handle is stored in exactly one child
/// link or in the tree root.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

impl NodeId {
  fn index(self) -> usize {
    self.0 as usize
  }
}

impl Debug for NodeId {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "#{}", self.0)
  }
}

impl Display for NodeId {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "n{}", self.0)
  }
}

#[derive(Debug, Clone)]
enum Slot {
  Occupied(Node),
  Vacant { next_free: Option<NodeId> },
}

/// Owning storage for tree nodes.
///
/// Reclaimed slots are chained through `Slot::Vacant` so that `free` never
/// allocates and `alloc` prefers reuse over growth.
#[derive(Debug, Clone, Default)]
pub struct Arena {
  slots: Vec<Slot>,
  free: Option<NodeId>,
  len: usize,
  #[cfg(test)]
  slot_limit: Option<usize>,
}

impl Arena {
  pub fn new() -> Self {
    Self::default()
  }

  /// Caps the number of slots well below `u32::MAX`.
  #[cfg(test)]
  pub fn with_slot_limit(limit: usize) -> Self {
    Self {
      slot_limit: Some(limit),
      ..Self::default()
    }
  }

  /// Number of live nodes.
  pub fn len(&self) -> usize {
    self.len
  }

  pub fn clear(&mut self) {
    self.slots.clear();
    self.free = None;
    self.len = 0;
  }

  /// Guarantees that the next `alloc` succeeds without reallocating.
  pub fn reserve(&mut self) -> Result<(), Error> {
    if self.free.is_some() {
      return Ok(());
    }
    u32::try_from(self.slots.len()).map_err(|_| Error::CapacityExceeded)?;
    #[cfg(test)]
    if self.slot_limit.is_some_and(|limit| self.slots.len() >= limit) {
      return Err(Error::CapacityExceeded);
    }
    self.slots.try_reserve(1)?;
    Ok(())
  }

  pub fn alloc(&mut self, node: Node) -> NodeId {
    self.len += 1;
    if let Some(id) = self.free {
      if let Slot::Vacant { next_free } = &self.slots[id.index()] {
        self.free = *next_free;
      }
      log::trace!("reusing slot {id:?} for key {}", node.key);
      self.slots[id.index()] = Slot::Occupied(node);
      return id;
    }
    // bounded by `reserve`
    let id = NodeId(self.slots.len() as u32);
    self.slots.push(Slot::Occupied(node));
    id
  }

  /// Reclaims the slot behind `id`, returning the node it held.
  pub fn free(&mut self, id: NodeId) -> Node {
    let vacant = Slot::Vacant {
      next_free: self.free,
    };
    match std::mem::replace(&mut self.slots[id.index()], vacant) {
      Slot::Occupied(node) => {
        self.free = Some(id);
        self.len -= 1;
        node
      }
      Slot::Vacant { .. } => panic!("double free of node {id:?}"),
    }
  }
}

impl Index<NodeId> for Arena {
  type Output = Node;

  fn index(&self, id: NodeId) -> &Self::Output {
    match &self.slots[id.index()] {
      Slot::Occupied(node) => node,
      Slot::Vacant { .. } => panic!("dangling node {id:?}"),
    }
  }
}

impl IndexMut<NodeId> for Arena {
  fn index_mut(&mut self, id: NodeId) -> &mut Self::Output {
    match &mut self.slots[id.index()] {
      Slot::Occupied(node) => node,
      Slot::Vacant { .. } => panic!("dangling node {id:?}"),
    }
  }
}

#[cfg(test)]
mod test_arena {
  use super::*;

  #[test]
  fn freed_slots_are_reused_last_in_first_out() {
    let mut arena = Arena::new();
    let a = arena.alloc(Node::new(1));
    let b = arena.alloc(Node::new(2));
    let c = arena.alloc(Node::new(3));
    assert_eq!(arena.len(), 3);

    assert_eq!(arena.free(a).key, 1);
    assert_eq!(arena.free(c).key, 3);
    assert_eq!(arena.len(), 1);

    assert_eq!(arena.alloc(Node::new(4)), c);
    assert_eq!(arena.alloc(Node::new(5)), a);
    assert_eq!(arena.slots.len(), 3);
    assert_eq!(arena[b].key, 2);
    assert_eq!(arena[a].key, 5);
  }

  #[test]
  fn reserve_is_free_when_a_slot_is_vacant() {
    let mut arena = Arena::new();
    let a = arena.alloc(Node::new(1));
    arena.free(a);
    let capacity = arena.slots.capacity();
    assert_eq!(arena.reserve(), Ok(()));
    assert_eq!(arena.slots.capacity(), capacity);
  }

  #[test]
  #[should_panic(expected = "dangling node")]
  fn freed_handle_is_dangling() {
    let mut arena = Arena::new();
    let a = arena.alloc(Node::new(1));
    arena.free(a);
    let _key = arena[a].key;
  }

  #[test]
  fn reserve_fails_at_the_slot_limit() {
    let mut arena = Arena::with_slot_limit(1);
    assert_eq!(arena.reserve(), Ok(()));
    let a = arena.alloc(Node::new(1));
    assert_eq!(arena.reserve(), Err(Error::CapacityExceeded));
    arena.free(a);
    assert_eq!(arena.reserve(), Ok(()));
  }

  #[test]
  fn clear_drops_everything() {
    let mut arena = Arena::new();
    let a = arena.alloc(Node::new(1));
    arena.alloc(Node::new(2));
    arena.free(a);
    arena.clear();
    assert_eq!(arena.len(), 0);
    assert!(arena.free.is_none());
    assert_eq!(arena.alloc(Node::new(7)), NodeId(0));
  }
}
