use super::arena::{Arena, NodeId};
use super::node::Link;
use crate::Key;
use std::iter::FusedIterator;

/// Depth-first visiting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Order {
  Pre,
  In,
  Post,
}

/// A node as seen by a traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Visit {
  pub key: Key,
  pub height: u32,
}

#[derive(Debug, Clone, Copy)]
enum Frame {
  /// Children not yet scheduled.
  Enter(NodeId),
  /// Ready to be yielded.
  Emit(NodeId),
}

/// Lazy depth-first traversal over a borrowed tree.
///
/// Cloning the iterator forks it at its current position.
#[derive(Debug, Clone)]
pub struct Traverse<'a> {
  arena: &'a Arena,
  order: Order,
  stack: Vec<Frame>,
}

impl<'a> Traverse<'a> {
  pub(crate) fn new(arena: &'a Arena, root: Link, order: Order) -> Self {
    Self {
      arena,
      order,
      stack: root.map(Frame::Enter).into_iter().collect(),
    }
  }

  pub fn order(&self) -> Order {
    self.order
  }

  fn schedule(&mut self, link: Link) {
    if let Some(id) = link {
      self.stack.push(Frame::Enter(id));
    }
  }
}

impl Iterator for Traverse<'_> {
  type Item = Visit;

  fn next(&mut self) -> Option<Self::Item> {
    let arena = self.arena;
    loop {
      let id = match self.stack.pop()? {
        Frame::Emit(id) => id,
        Frame::Enter(id) => {
          let node = &arena[id];
          // pushed in reverse of visiting order
          match self.order {
            Order::Pre => {
              self.schedule(node.right);
              self.schedule(node.left);
              id
            }
            Order::In => {
              self.schedule(node.right);
              self.stack.push(Frame::Emit(id));
              self.schedule(node.left);
              continue;
            }
            Order::Post => {
              self.stack.push(Frame::Emit(id));
              self.schedule(node.right);
              self.schedule(node.left);
              continue;
            }
          }
        }
      };
      let node = &arena[id];
      return Some(Visit {
        key: node.key,
        height: node.height,
      });
    }
  }
}

impl FusedIterator for Traverse<'_> {}
