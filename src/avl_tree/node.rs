use super::arena::{Arena, NodeId};
use crate::Key;

/// Child link: `None` is an absent subtree of height 0.
pub type Link = Option<NodeId>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Node {
  pub key: Key,
  pub height: u32,
  pub left: Link,
  pub right: Link,
}

impl Node {
  pub fn new(key: Key) -> Self {
    Node {
      key,
      height: 1,
      left: None,
      right: None,
    }
  }

  pub fn is_leaf(&self) -> bool {
    self.left.is_none() && self.right.is_none()
  }
}

// Height accounting. Children must already carry correct heights.
impl Arena {
  pub fn height(&self, link: Link) -> u32 {
    link.map_or(0, |id| self[id].height)
  }

  pub fn update_height(&mut self, id: NodeId) {
    let node = self[id];
    self[id].height = if node.is_leaf() {
      1
    } else {
      1 + self.height(node.left).max(self.height(node.right))
    };
  }

  /// Left subtree height minus right subtree height.
  pub fn factor(&self, id: NodeId) -> i64 {
    let node = &self[id];
    i64::from(self.height(node.left)) - i64::from(self.height(node.right))
  }
}
