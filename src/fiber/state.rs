use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result;

/// Lifecycle state of a [`Fiber`].
///
/// A fiber moves strictly forward: `NotStarted` → `Suspended` (zero or
/// more times) → `Finished`. There are no backward transitions and no
/// restart.
///
/// [`Fiber`]: crate::fiber::Fiber
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum FiberState {
  /// The routine has not run yet; the first resume starts it.
  NotStarted,
  /// The routine is parked at a suspension point awaiting a resume value.
  Suspended,
  /// The routine returned; all future resumes are errors.
  Finished,
}

impl FiberState {
  /// Returns `true` if the fiber can still be resumed.
  #[inline]
  pub const fn is_alive(&self) -> bool {
    matches!(self, Self::NotStarted | Self::Suspended)
  }

  /// Returns `true` if the routine has run to completion.
  #[inline]
  pub const fn is_finished(&self) -> bool {
    matches!(self, Self::Finished)
  }
}

impl Display for FiberState {
  fn fmt(&self, f: &mut Formatter<'_>) -> Result {
    match self {
      Self::NotStarted => f.write_str("not-started"),
      Self::Suspended => f.write_str("suspended"),
      Self::Finished => f.write_str("finished"),
    }
  }
}

// -----------------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
  use crate::fiber::FiberState;

  #[test]
  fn test_liveness() {
    assert!(FiberState::NotStarted.is_alive());
    assert!(FiberState::Suspended.is_alive());
    assert!(!FiberState::Finished.is_alive());
  }

  #[test]
  fn test_is_finished() {
    assert!(!FiberState::NotStarted.is_finished());
    assert!(!FiberState::Suspended.is_finished());
    assert!(FiberState::Finished.is_finished());
  }
}
