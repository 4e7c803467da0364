use super::arena::{Arena, NodeId};

/// Restores `|factor| <= 1` at `id`, whose children are already balanced,
/// and returns the root of the rebalanced subtree.
pub fn rebalance(arena: &mut Arena, id: NodeId) -> NodeId {
  match arena.factor(id) {
    2 => {
      let Some(left) = arena[id].left else {
        debug_assert!(false, "left-heavy node {id:?} has no left child");
        return id;
      };
      if arena.factor(left) == -1 {
        let pivot = rotate_left(arena, left);
        arena[id].left = Some(pivot);
      }
      rotate_right(arena, id)
    }
    -2 => {
      let Some(right) = arena[id].right else {
        debug_assert!(false, "right-heavy node {id:?} has no right child");
        return id;
      };
      if arena.factor(right) == 1 {
        let pivot = rotate_right(arena, right);
        arena[id].right = Some(pivot);
      }
      rotate_left(arena, id)
    }
    factor => {
      debug_assert!(factor.abs() <= 1, "imbalance of {factor} at {id:?}");
      id
    }
  }
}

/// Promotes the left child of `id` into its place.
///
/// The promoted node's right subtree becomes the demoted node's left subtree.
pub fn rotate_right(arena: &mut Arena, id: NodeId) -> NodeId {
  let Some(pivot) = arena[id].left else {
    debug_assert!(false, "rotate right at {id:?} without a left child");
    return id;
  };
  log::trace!("rotate right: {} over {}", arena[pivot].key, arena[id].key);

  let inner = arena[pivot].right;
  arena[id].left = inner;
  arena[pivot].right = Some(id);

  arena.update_height(id);
  arena.update_height(pivot);
  pivot
}

/// Promotes the right child of `id` into its place.
///
/// The promoted node's left subtree becomes the demoted node's right subtree.
pub fn rotate_left(arena: &mut Arena, id: NodeId) -> NodeId {
  let Some(pivot) = arena[id].right else {
    debug_assert!(false, "rotate left at {id:?} without a right child");
    return id;
  };
  log::trace!("rotate left: {} over {}", arena[pivot].key, arena[id].key);

  let inner = arena[pivot].left;
  arena[id].right = inner;
  arena[pivot].left = Some(id);

  arena.update_height(id);
  arena.update_height(pivot);
  pivot
}

#[cfg(test)]
mod test_balance {
  use super::super::node::{Link, Node};
  use super::*;

  /// Builds an unbalanced chain by hand, bypassing insertion.
  fn chain(arena: &mut Arena, keys: &[i64], lean_left: &[bool]) -> NodeId {
    let mut ids = keys
      .iter()
      .map(|&key| arena.alloc(Node::new(key)))
      .collect::<Vec<_>>();
    let mut below: Link = None;
    for (i, id) in ids.drain(..).enumerate().rev() {
      if let Some(child) = below {
        if lean_left[i] {
          arena[id].left = Some(child);
        } else {
          arena[id].right = Some(child);
        }
      }
      arena.update_height(id);
      below = Some(id);
    }
    below.unwrap()
  }

  fn shape(arena: &Arena, id: NodeId) -> (i64, u32, Option<i64>, Option<i64>) {
    let node = arena[id];
    (
      node.key,
      node.height,
      node.left.map(|l| arena[l].key),
      node.right.map(|r| arena[r].key),
    )
  }

  #[test]
  fn left_left_single_rotation() {
    let mut arena = Arena::new();
    let root = chain(&mut arena, &[3, 2, 1], &[true, true, true]);
    let root = rebalance(&mut arena, root);
    assert_eq!(shape(&arena, root), (2, 2, Some(1), Some(3)));
  }

  #[test]
  fn right_right_single_rotation() {
    let mut arena = Arena::new();
    let root = chain(&mut arena, &[1, 2, 3], &[false, false, false]);
    let root = rebalance(&mut arena, root);
    assert_eq!(shape(&arena, root), (2, 2, Some(1), Some(3)));
  }

  #[test]
  fn left_right_double_rotation() {
    let mut arena = Arena::new();
    let root = chain(&mut arena, &[3, 1, 2], &[true, false, false]);
    let root = rebalance(&mut arena, root);
    assert_eq!(shape(&arena, root), (2, 2, Some(1), Some(3)));
  }

  #[test]
  fn right_left_double_rotation() {
    let mut arena = Arena::new();
    let root = chain(&mut arena, &[1, 3, 2], &[false, true, true]);
    let root = rebalance(&mut arena, root);
    assert_eq!(shape(&arena, root), (2, 2, Some(1), Some(3)));
  }

  #[test]
  fn rotation_moves_inner_subtree_across() {
    // 4 has left child 2 (children 1, 3) and right child 5; rotating right
    // must hand 3 over to 4.
    let mut arena = Arena::new();
    let [n1, n2, n3, n4, n5] = [1, 2, 3, 4, 5].map(|key| arena.alloc(Node::new(key)));
    arena[n2].left = Some(n1);
    arena[n2].right = Some(n3);
    arena.update_height(n2);
    arena[n4].left = Some(n2);
    arena[n4].right = Some(n5);
    arena.update_height(n4);

    let root = rotate_right(&mut arena, n4);
    assert_eq!(root, n2);
    assert_eq!(shape(&arena, n2), (2, 3, Some(1), Some(4)));
    assert_eq!(shape(&arena, n4), (4, 2, Some(3), Some(5)));
  }

  #[test]
  #[cfg(debug_assertions)]
  #[should_panic(expected = "without a left child")]
  fn rotating_a_missing_child_is_caught() {
    let mut arena = Arena::new();
    let leaf = arena.alloc(Node::new(1));
    rotate_right(&mut arena, leaf);
  }

  #[test]
  fn balanced_node_is_left_alone() {
    let mut arena = Arena::new();
    let root = chain(&mut arena, &[2, 1], &[true, true]);
    assert_eq!(rebalance(&mut arena, root), root);
    assert_eq!(shape(&arena, root), (2, 2, Some(1), None));
  }
}
