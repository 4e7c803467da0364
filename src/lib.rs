//! # An AVL tree over unique integer keys.
//!
//! [`AvlTree`] keeps every node's left and right subtree heights within one of
//! each other, so [`insert`](AvlTree::insert), [`search`](AvlTree::search) and
//! [`delete`](AvlTree::delete) all run in `O(log n)`.
//!
//! ```
//! use avl_tree::{AvlTree, Order};
//!
//! let mut tree = AvlTree::new();
//! for key in [3, 1, 5, 0, 2] {
//!   tree.insert(key)?;
//! }
//! assert!(tree.delete(1));
//! assert_eq!(
//!   tree.in_order().map(|visit| visit.key).collect::<Vec<_>>(),
//!   [0, 2, 3, 5]
//! );
//! print!("{}", tree.display(Order::Pre));
//! # Ok::<(), avl_tree::Error>(())
//! ```
//!
//! ## features
//!
//! | Feature | Default | Explanation                                              |
//! |:--------|:--------|:---------------------------------------------------------|
//! | `cli`   | `false` | Builds the `avl-demo` driver binary                      |
//! | `dot`   | `false` | Enables [`AvlTree::dot`], rendering the tree for graphviz |

mod avl_tree;
mod error;

pub use avl_tree::{AvlTree, Listing, Order, Traverse, Visit};
#[cfg(feature = "dot")]
pub use avl_tree::Dot;
pub use error::Error;

/// Key type stored in the tree.
pub type Key = i64;
