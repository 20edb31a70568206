use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result as FmtResult;

use crate::lang::BoxName;

/// Diagnostic snapshot of a holder's box occupancies.
///
/// This is the `showboxes`-style introspection hook: a point-in-time view
/// of how many messages each box holds, for logging and debugging only.
/// No routine's logic may depend on it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MailboxInfo {
  entries: Vec<(BoxName, usize)>,
}

impl MailboxInfo {
  #[inline]
  pub(crate) fn new(entries: Vec<(BoxName, usize)>) -> Self {
    Self { entries }
  }

  /// Returns the per-box occupancy, ordered by box name.
  #[inline]
  pub fn entries(&self) -> &[(BoxName, usize)] {
    &self.entries
  }

  /// Returns the occupancy of the named box, or [`None`] if the holder
  /// has no box under that name.
  pub fn count(&self, name: BoxName) -> Option<usize> {
    self
      .entries
      .iter()
      .find(|(entry, _)| *entry == name)
      .map(|(_, count)| *count)
  }

  /// Returns the total number of queued messages across all boxes.
  pub fn total(&self) -> usize {
    self.entries.iter().map(|(_, count)| count).sum()
  }
}

impl Display for MailboxInfo {
  fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
    for (index, (name, count)) in self.entries.iter().enumerate() {
      if index > 0 {
        f.write_str(", ")?;
      }

      write!(f, "{}: {}", name, count)?;
    }

    Ok(())
  }
}

// -----------------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------------
