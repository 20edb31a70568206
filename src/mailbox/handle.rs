use parking_lot::Mutex;
use std::fmt::Debug;
use std::fmt::Formatter;
use std::fmt::Result as FmtResult;
use tracing::trace;
use triomphe::Arc;

use crate::lang::BoxName;
use crate::lang::Term;
use crate::mailbox::MailboxInfo;
use crate::mailbox::Mailboxes;

/// Shared handle to one holder's [`Mailboxes`].
///
/// The holder's own routine and any postman bound to it touch the boxes at
/// different scheduling steps, so the set lives behind a shared handle.
/// Cloning the handle shares the *same* box set, never a copy of it;
/// independent holders come from constructing independent [`Mailboxes`].
///
/// Everything runs on a single logical thread of control; the interior
/// mutex is uncontended and only satisfies the `Send` bound on routine
/// closures.
#[derive(Clone)]
pub struct MailboxHandle {
  inner: Arc<Mutex<Mailboxes>>,
}

impl MailboxHandle {
  /// Wraps a box set in a shared handle.
  #[inline]
  pub fn new(boxes: Mailboxes) -> Self {
    Self {
      inner: Arc::new(Mutex::new(boxes)),
    }
  }

  /// Creates a handle over the conventional `inbox`/`outbox` set.
  #[inline]
  pub fn standard() -> Self {
    Self::new(Mailboxes::standard())
  }

  /// Appends `value` to the named box.
  ///
  /// # Errors
  ///
  /// Raises [`Exception`] if the holder has no box under `name`.
  ///
  /// [`Exception`]: crate::error::Exception
  pub fn send(&self, value: Term, name: BoxName) {
    trace!(target: "alcor", name = %name, "message queued");

    self.inner.lock().send(value, name);
  }

  /// Removes and returns the oldest value in the named box.
  ///
  /// # Errors
  ///
  /// Raises [`Exception`] if the box is empty or the holder has no box
  /// under `name`.
  ///
  /// [`Exception`]: crate::error::Exception
  pub fn recv(&self, name: BoxName) -> Term {
    self.inner.lock().recv(name)
  }

  /// Returns `true` if the named box holds at least one value.
  ///
  /// # Errors
  ///
  /// Raises [`Exception`] if the holder has no box under `name`.
  ///
  /// [`Exception`]: crate::error::Exception
  pub fn data_ready(&self, name: BoxName) -> bool {
    self.inner.lock().data_ready(name)
  }

  /// Returns the number of values queued in the named box.
  ///
  /// # Errors
  ///
  /// Raises [`Exception`] if the holder has no box under `name`.
  ///
  /// [`Exception`]: crate::error::Exception
  pub fn count(&self, name: BoxName) -> usize {
    self.inner.lock().count(name)
  }

  /// Takes a diagnostic snapshot of all box occupancies.
  pub fn info(&self) -> MailboxInfo {
    self.inner.lock().info()
  }
}

impl Debug for MailboxHandle {
  fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
    Debug::fmt(&*self.inner.lock(), f)
  }
}

// -----------------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------------
