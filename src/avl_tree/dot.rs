use super::arena::{Arena, NodeId};
use super::node::Link;
use std::fmt;

/// Renders the tree in [graphviz format](https://graphviz.org/doc/info/lang.html).
pub struct Dot<'a> {
  pub(crate) arena: &'a Arena,
  pub(crate) root: Link,
}

impl Dot<'_> {
  fn node_fmt(&self, f: &mut fmt::Formatter, id: NodeId) -> fmt::Result {
    let node = &self.arena[id];
    writeln!(
      f,
      r#"  {id} [label="{key}, height = {height}"];"#,
      key = node.key,
      height = node.height,
    )?;

    for (side, child) in [("left", node.left), ("right", node.right)] {
      if let Some(child) = child {
        writeln!(f, r#"  {id} -> {child} [label="{side}"];"#)?;
        self.node_fmt(f, child)?;
      }
    }
    Ok(())
  }
}

impl fmt::Display for Dot<'_> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("digraph {\n")?;
    if let Some(root) = self.root {
      self.node_fmt(f, root)?;
    }
    f.write_str("}\n")
  }
}

impl fmt::Debug for Dot<'_> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    fmt::Display::fmt(self, f)
  }
}
