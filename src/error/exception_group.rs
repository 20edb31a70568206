use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result;

/// Exception category indicating the nature of the contract violation.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
#[non_exhaustive]
pub enum ExceptionGroup {
  /// Invalid argument.
  ///
  /// Raised for malformed input such as a send or receive on a box name the
  /// holder never declared, or a box name exceeding the length limit.
  BadArg,
  /// System capacity limit exceeded.
  ///
  /// Raised when the global box-name table is full.
  SysCap,
  /// Invalid operation for the current state.
  ///
  /// Raised for protocol misuse: activating a microprocess twice, resuming
  /// a finished fiber, or receiving from an empty message box.
  SysInv,
}

impl ExceptionGroup {
  /// Returns a one-line description of the group.
  pub const fn describe(&self) -> &'static str {
    match self {
      Self::BadArg => "errors were found with the given argument(s)",
      Self::SysCap => "a system limit has been reached",
      Self::SysInv => "a runtime invariant has been broken",
    }
  }
}

impl Display for ExceptionGroup {
  fn fmt(&self, f: &mut Formatter<'_>) -> Result {
    match self {
      Self::BadArg => f.write_str("badarg"),
      Self::SysCap => f.write_str("syscap"),
      Self::SysInv => f.write_str("sysinv"),
    }
  }
}

// -----------------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------------
