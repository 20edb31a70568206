use hashbrown::HashMap;
use std::collections::VecDeque;
use std::fmt::Debug;
use std::fmt::Formatter;
use std::fmt::Result as FmtResult;

use crate::consts;
use crate::lang::BoxName;
use crate::lang::Term;
use crate::mailbox::MailboxInfo;
use crate::raise;

/// A fixed set of named FIFO message boxes.
///
/// The box set is declared at construction and never changes afterwards:
/// sends and receives on a name the holder never declared are programmer
/// errors and raise immediately. Every instance owns its own independent
/// boxes: two holders never observe each other's queues, even when they
/// use the same names.
///
/// Queues are unbounded; [`send`] always succeeds and there is no
/// backpressure beyond observable queue growth.
///
/// # Examples
///
/// ```
/// use alcor::lang::{BoxName, Term};
/// use alcor::mailbox::Mailboxes;
///
/// let mut boxes = Mailboxes::standard();
///
/// boxes.send(Term::new(1_i32), BoxName::OUTBOX);
/// boxes.send(Term::new(2_i32), BoxName::OUTBOX);
///
/// assert!(boxes.data_ready(BoxName::OUTBOX));
/// assert_eq!(boxes.recv(BoxName::OUTBOX).downcast_ref::<i32>(), Some(&1));
/// ```
///
/// [`send`]: Self::send
pub struct Mailboxes {
  boxes: HashMap<BoxName, VecDeque<Term>>,
}

impl Mailboxes {
  /// Creates a box set containing exactly the given names.
  ///
  /// Duplicate names collapse to a single box.
  pub fn new<I>(names: I) -> Self
  where
    I: IntoIterator<Item = BoxName>,
  {
    let boxes: HashMap<BoxName, VecDeque<Term>> = names
      .into_iter()
      .map(|name| (name, VecDeque::with_capacity(consts::CAP_MAILBOX_QUEUE)))
      .collect();

    Self { boxes }
  }

  /// Creates the conventional box set: one `inbox`, one `outbox`.
  #[inline]
  pub fn standard() -> Self {
    Self::new([BoxName::INBOX, BoxName::OUTBOX])
  }

  /// Appends `value` to the named box.
  ///
  /// # Errors
  ///
  /// Raises [`Exception`] if the holder has no box under `name`.
  ///
  /// [`Exception`]: crate::error::Exception
  #[inline]
  pub fn send(&mut self, value: Term, name: BoxName) {
    self.queue_mut(name).push_back(value);
  }

  /// Removes and returns the oldest value in the named box.
  ///
  /// Callers must gate this behind [`data_ready`]; an empty box is a
  /// violated gate, never a sentinel value.
  ///
  /// # Errors
  ///
  /// Raises [`Exception`] if the box is empty or the holder has no box
  /// under `name`.
  ///
  /// [`data_ready`]: Self::data_ready
  /// [`Exception`]: crate::error::Exception
  #[inline]
  pub fn recv(&mut self, name: BoxName) -> Term {
    match self.queue_mut(name).pop_front() {
      Some(value) => value,
      None => raise!(Error, SysInv, format!("receive from empty box '{}'", name)),
    }
  }

  /// Returns `true` if the named box holds at least one value.
  ///
  /// # Errors
  ///
  /// Raises [`Exception`] if the holder has no box under `name`.
  ///
  /// [`Exception`]: crate::error::Exception
  #[inline]
  pub fn data_ready(&self, name: BoxName) -> bool {
    !self.queue(name).is_empty()
  }

  /// Returns the number of values queued in the named box.
  ///
  /// # Errors
  ///
  /// Raises [`Exception`] if the holder has no box under `name`.
  ///
  /// [`Exception`]: crate::error::Exception
  #[inline]
  pub fn count(&self, name: BoxName) -> usize {
    self.queue(name).len()
  }

  /// Returns the declared box names in lexicographic order.
  pub fn names(&self) -> Vec<BoxName> {
    let mut names: Vec<BoxName> = self.boxes.keys().copied().collect();
    names.sort();
    names
  }

  /// Takes a diagnostic snapshot of all box occupancies.
  pub fn info(&self) -> MailboxInfo {
    MailboxInfo::new(
      self
        .names()
        .into_iter()
        .map(|name| (name, self.count(name)))
        .collect(),
    )
  }

  fn queue(&self, name: BoxName) -> &VecDeque<Term> {
    match self.boxes.get(&name) {
      Some(queue) => queue,
      None => raise!(Error, BadArg, format!("no box named '{}'", name)),
    }
  }

  fn queue_mut(&mut self, name: BoxName) -> &mut VecDeque<Term> {
    match self.boxes.get_mut(&name) {
      Some(queue) => queue,
      None => raise!(Error, BadArg, format!("no box named '{}'", name)),
    }
  }
}

impl Debug for Mailboxes {
  fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
    let mut map = f.debug_map();

    for name in self.names() {
      map.entry(&name, &self.boxes[&name]);
    }

    map.finish()
  }
}

// -----------------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
  use crate::lang::BoxName;
  use crate::lang::Term;
  use crate::mailbox::Mailboxes;

  #[test]
  fn test_standard_names() {
    let boxes: Mailboxes = Mailboxes::standard();

    assert_eq!(boxes.names(), vec![BoxName::INBOX, BoxName::OUTBOX]);
  }

  #[test]
  fn test_fifo_ordering() {
    let mut boxes: Mailboxes = Mailboxes::standard();

    boxes.send(Term::new(1_i32), BoxName::OUTBOX);
    boxes.send(Term::new(2_i32), BoxName::OUTBOX);
    boxes.send(Term::new(3_i32), BoxName::OUTBOX);

    assert_eq!(boxes.recv(BoxName::OUTBOX).downcast_ref::<i32>(), Some(&1));
    assert_eq!(boxes.recv(BoxName::OUTBOX).downcast_ref::<i32>(), Some(&2));
    assert_eq!(boxes.recv(BoxName::OUTBOX).downcast_ref::<i32>(), Some(&3));
  }

  #[test]
  fn test_data_ready() {
    let mut boxes: Mailboxes = Mailboxes::standard();

    assert!(!boxes.data_ready(BoxName::INBOX));

    boxes.send(Term::new(1_i32), BoxName::INBOX);

    assert!(boxes.data_ready(BoxName::INBOX));
    assert!(!boxes.data_ready(BoxName::OUTBOX));
  }

  #[test]
  fn test_count() {
    let mut boxes: Mailboxes = Mailboxes::standard();

    boxes.send(Term::new(1_i32), BoxName::INBOX);
    boxes.send(Term::new(2_i32), BoxName::INBOX);

    assert_eq!(boxes.count(BoxName::INBOX), 2);
    assert_eq!(boxes.count(BoxName::OUTBOX), 0);
  }

  #[test]
  fn test_boxes_are_independent() {
    let mut boxes: Mailboxes = Mailboxes::standard();

    boxes.send(Term::new(1_i32), BoxName::OUTBOX);

    assert!(!boxes.data_ready(BoxName::INBOX));
    assert_eq!(boxes.count(BoxName::INBOX), 0);
  }

  #[test]
  #[should_panic(expected = "no box named 'control'")]
  fn test_send_unknown_box_raises() {
    Mailboxes::standard().send(Term::new(1_i32), BoxName::new("control"));
  }

  #[test]
  #[should_panic(expected = "no box named")]
  fn test_recv_unknown_box_raises() {
    Mailboxes::standard().recv(BoxName::new("signal"));
  }

  #[test]
  #[should_panic(expected = "receive from empty box 'inbox'")]
  fn test_recv_empty_box_raises() {
    Mailboxes::standard().recv(BoxName::INBOX);
  }

  #[test]
  fn test_custom_box_set() {
    let mut boxes: Mailboxes = Mailboxes::new([BoxName::new("aux"), BoxName::OUTBOX]);

    boxes.send(Term::new(1_i32), BoxName::new("aux"));

    assert_eq!(boxes.count(BoxName::new("aux")), 1);
  }
}
