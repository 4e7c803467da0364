use super::iter::Traverse;
use std::fmt::{Debug, Display};

/// Writes one `"{key}, height = {height}"` line per visited node.
#[derive(Clone)]
pub struct Listing<'a> {
  pub(crate) visits: Traverse<'a>,
}

impl Display for Listing<'_> {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    for visit in self.visits.clone() {
      writeln!(f, "{}, height = {}", visit.key, visit.height)?;
    }
    Ok(())
  }
}

impl Debug for Listing<'_> {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_list().entries(self.visits.clone()).finish()
  }
}
