use std::cmp::Ordering;
use std::fmt::Debug;
use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result as FmtResult;
use std::sync::LazyLock;

use crate::lang::name_table::NameTable;
use crate::raise;

// -----------------------------------------------------------------------------
// Global Name Table
// -----------------------------------------------------------------------------

/// Global name table initialized with the well-known box names.
static NAME_TABLE: LazyLock<NameTable> = LazyLock::new(|| {
  let table: NameTable = NameTable::new();

  let inbox: u32 = table.insert("inbox");
  let outbox: u32 = table.insert("outbox");

  if inbox != BoxName::INBOX.into_slot() || outbox != BoxName::OUTBOX.into_slot() {
    raise!(Error, SysInv, "well-known box name out of slot");
  }

  table
});

// -----------------------------------------------------------------------------
// Box Name
// -----------------------------------------------------------------------------

/// Interned, immutable identifier naming a message box within its holder.
///
/// Box names are lightweight handles (32-bit slot indices) to globally
/// interned strings, so using one as a queue key costs a word, not a string
/// hash of arbitrary length. Two holders may use the same name for their
/// own boxes: the name identifies a box *within* a holder, never across
/// holders.
///
/// # Equality and Ordering
///
/// Equality comparisons are performed on slot indices (O(1)), while
/// ordering comparisons delegate to the underlying string values.
///
/// # Examples
///
/// ```
/// use alcor::lang::BoxName;
///
/// let a = BoxName::new("control");
/// let b = BoxName::new("control");
///
/// assert_eq!(a, b);                   // Fast: compares slot indices
/// assert_eq!(a.as_str(), "control");  // Zero-copy string access
/// assert_eq!(BoxName::INBOX, "inbox");
/// ```
#[derive(Clone, Copy, Hash, PartialEq, Eq)]
#[repr(transparent)]
pub struct BoxName {
  slot: u32,
}

impl BoxName {
  /// Name of the conventional receiving box.
  pub const INBOX: Self = Self::from_slot(0);

  /// Name of the conventional sending box.
  pub const OUTBOX: Self = Self::from_slot(1);

  /// Constructs a box name from a raw name table slot.
  #[inline]
  pub(crate) const fn from_slot(slot: u32) -> Self {
    Self { slot }
  }

  /// Returns the name table slot backing this name.
  #[inline]
  pub(crate) const fn into_slot(self) -> u32 {
    self.slot
  }

  /// Interns `name` and returns its handle.
  ///
  /// # Errors
  ///
  /// Raises [`Exception`] if the name exceeds [`MAX_BOX_NAME_CHARS`]
  /// characters or the name table holds [`MAX_BOX_NAME_COUNT`] entries.
  ///
  /// [`Exception`]: crate::error::Exception
  /// [`MAX_BOX_NAME_CHARS`]: crate::consts::MAX_BOX_NAME_CHARS
  /// [`MAX_BOX_NAME_COUNT`]: crate::consts::MAX_BOX_NAME_COUNT
  #[inline]
  pub fn new(name: &str) -> Self {
    Self::from_slot(NAME_TABLE.insert(name))
  }

  /// Returns the interned string value.
  #[inline]
  pub fn as_str(&self) -> &'static str {
    NAME_TABLE.resolve(self.slot)
  }
}

impl Debug for BoxName {
  fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
    Debug::fmt(self.as_str(), f)
  }
}

impl Display for BoxName {
  fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
    f.write_str(self.as_str())
  }
}

impl PartialOrd for BoxName {
  #[inline]
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
    Some(self.cmp(other))
  }
}

impl Ord for BoxName {
  #[inline]
  fn cmp(&self, other: &Self) -> Ordering {
    self.as_str().cmp(other.as_str())
  }
}

impl PartialEq<str> for BoxName {
  #[inline]
  fn eq(&self, other: &str) -> bool {
    self.as_str() == other
  }
}

impl PartialEq<&str> for BoxName {
  #[inline]
  fn eq(&self, other: &&str) -> bool {
    self.as_str() == *other
  }
}

// -----------------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
  use crate::lang::BoxName;

  #[test]
  fn test_well_known_names_have_correct_values() {
    assert_eq!(BoxName::INBOX.as_str(), "inbox");
    assert_eq!(BoxName::OUTBOX.as_str(), "outbox");
  }

  #[test]
  fn test_new() {
    assert_eq!(BoxName::new("control").as_str(), "control");
  }

  #[test]
  fn test_new_well_known() {
    assert_eq!(BoxName::new("inbox"), BoxName::INBOX);
    assert_eq!(BoxName::new("outbox"), BoxName::OUTBOX);
  }

  #[test]
  fn test_interning() {
    let a: BoxName = BoxName::new("signal");
    let b: BoxName = BoxName::new("signal");

    assert_eq!(a.into_slot(), b.into_slot());
  }

  #[test]
  fn test_str_equality() {
    assert_eq!(BoxName::INBOX, "inbox");
    assert_ne!(BoxName::INBOX, "outbox");
  }

  #[test]
  fn test_ordering_is_lexicographic() {
    assert!(BoxName::INBOX < BoxName::OUTBOX);
    assert!(BoxName::new("aux") < BoxName::INBOX);
  }

  #[test]
  #[should_panic]
  fn test_new_too_long() {
    BoxName::new(&"x".repeat(256));
  }
}
