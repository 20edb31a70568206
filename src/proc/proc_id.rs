use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result as FmtResult;
use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering;

static SEQUENCE: AtomicU64 = AtomicU64::new(0);

/// Process-wide unique microprocess identifier.
///
/// Ids are assigned sequentially at construction and never reused. They
/// exist for tracing and diagnostics; the scheduler itself keys nothing on
/// them.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[repr(transparent)]
pub struct ProcId {
  index: u64,
}

impl ProcId {
  /// Allocates the next identifier in the sequence.
  #[inline]
  pub(crate) fn next() -> Self {
    Self {
      index: SEQUENCE.fetch_add(1, Ordering::Relaxed),
    }
  }

  /// Returns the identifier as a plain integer.
  #[inline]
  pub const fn to_u64(self) -> u64 {
    self.index
  }
}

impl Display for ProcId {
  fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
    write!(f, "#{}", self.index)
  }
}

// -----------------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------------
