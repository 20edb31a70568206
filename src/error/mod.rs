//! Exception handling for the Alcor runtime.
//!
//! This module provides a panic-based exception system. The runtime's error
//! taxonomy contains only programmer errors: protocol misuse such as
//! double activation, resuming a finished fiber, or receiving from an empty
//! or unknown message box. Masking any of these would corrupt scheduling
//! order or box contents invisibly, so every violation surfaces immediately
//! and locally at the offending call site.
//!
//! Exceptions carry three pieces of information:
//!
//! 1. **Class**: The severity level ([`Error`])
//! 2. **Group**: The error category ([`BadArg`], [`SysCap`], [`SysInv`])
//! 3. **Description**: A human-readable error message
//!
//! # Raising Exceptions
//!
//! Use the [`raise!`] macro to construct and panic with an exception:
//!
//! ```
//! use alcor::raise;
//!
//! fn check_box_name(name: &str) {
//!   if name.is_empty() {
//!     raise!(Error, BadArg, "box name cannot be empty");
//!   }
//! }
//! ```
//!
//! # Exception Groups
//!
//! - [`BadArg`]: unknown or malformed box names
//! - [`SysCap`]: box-name table exhausted
//! - [`SysInv`]: lifecycle misuse and broken runtime invariants
//!
//! Note that a scheduler draining its pool is *not* an error: when every
//! registered microprocess has finished, the scheduler finishes cleanly.
//!
//! [`Error`]: ExceptionClass::Error
//! [`BadArg`]: ExceptionGroup::BadArg
//! [`SysCap`]: ExceptionGroup::SysCap
//! [`SysInv`]: ExceptionGroup::SysInv
//!
//! [`raise!`]: crate::raise!

mod exception;
mod exception_class;
mod exception_group;

pub use self::exception::Exception;
pub use self::exception_class::ExceptionClass;
pub use self::exception_group::ExceptionGroup;

// -----------------------------------------------------------------------------
// raise!
// -----------------------------------------------------------------------------

/// Raises an exception with the specified class, group, and message.
///
/// This macro constructs an [`Exception`] and immediately panics; the panic
/// unwinds to the caller that violated the contract.
///
/// # Examples
///
/// ```
/// # use alcor::raise;
/// fn deliver(ready: bool) {
///   if !ready {
///     raise!(Error, SysInv, "receive from empty box");
///   }
/// }
/// ```
#[macro_export]
macro_rules! raise {
  ($class:ident, $group:ident, $error:expr $(,)?) => {
    ::std::panic!(
      "{}",
      $crate::error::Exception::new(
        $crate::error::ExceptionClass::$class,
        $crate::error::ExceptionGroup::$group,
        $error,
      ),
    )
  };
}

// -----------------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
  use std::panic;

  #[test]
  fn test_raise_macro_badarg() {
    assert!(panic::catch_unwind(|| raise!(Error, BadArg, "no box named 'x'")).is_err());
  }

  #[test]
  fn test_raise_macro_syscap() {
    assert!(panic::catch_unwind(|| raise!(Error, SysCap, "name table full")).is_err());
  }

  #[test]
  fn test_raise_macro_sysinv() {
    assert!(panic::catch_unwind(|| raise!(Error, SysInv, "already activated")).is_err());
  }
}
