use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result;

/// Exception severity classification.
///
/// The runtime currently raises error-level exceptions only; every protocol
/// violation is fatal to the offending caller. Other classes may be added if
/// a supervised recovery path ever exists.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
#[non_exhaustive]
pub enum ExceptionClass {
  /// Fatal error; the violated contract cannot be repaired locally.
  Error,
}

impl Display for ExceptionClass {
  fn fmt(&self, f: &mut Formatter<'_>) -> Result {
    match self {
      Self::Error => f.write_str("error"),
    }
  }
}

// -----------------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
  use crate::error::ExceptionClass;

  #[test]
  fn test_display() {
    assert_eq!(format!("{}", ExceptionClass::Error), "error");
  }
}
