//! Global interning table backing [`BoxName`].
//!
//! [`BoxName`]: crate::lang::BoxName

use hashbrown::HashMap;
use parking_lot::Mutex;

use crate::consts;
use crate::raise;

/// Interning table mapping box-name strings to stable `u32` slots.
///
/// Interned strings are leaked: the table is small, append-only, and lives
/// for the whole program, which is what makes the zero-copy
/// [`BoxName::as_str`] access possible.
///
/// [`BoxName::as_str`]: crate::lang::BoxName::as_str
pub(crate) struct NameTable {
  inner: Mutex<NameTableInner>,
}

struct NameTableInner {
  lookup: HashMap<&'static str, u32>,
  names: Vec<&'static str>,
}

impl NameTable {
  pub(crate) fn new() -> Self {
    Self {
      inner: Mutex::new(NameTableInner {
        lookup: HashMap::new(),
        names: Vec::new(),
      }),
    }
  }

  /// Interns `name` and returns its slot, reusing the slot of a previously
  /// interned equal string.
  pub(crate) fn insert(&self, name: &str) -> u32 {
    if name.chars().count() > consts::MAX_BOX_NAME_CHARS {
      raise!(Error, BadArg, format!("box name exceeds {} characters", consts::MAX_BOX_NAME_CHARS));
    }

    let mut inner = self.inner.lock();

    if let Some(slot) = inner.lookup.get(name) {
      return *slot;
    }

    if inner.names.len() >= consts::MAX_BOX_NAME_COUNT {
      raise!(Error, SysCap, "box name table full");
    }

    let leaked: &'static str = Box::leak(Box::from(name));
    let slot: u32 = inner.names.len() as u32;

    inner.names.push(leaked);
    inner.lookup.insert(leaked, slot);

    slot
  }

  /// Resolves a slot back to its interned string.
  pub(crate) fn resolve(&self, slot: u32) -> &'static str {
    match self.inner.lock().names.get(slot as usize) {
      Some(name) => *name,
      None => raise!(Error, SysInv, format!("unknown box name slot {}", slot)),
    }
  }
}

// -----------------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------------
