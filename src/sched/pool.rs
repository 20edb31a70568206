use std::collections::VecDeque;
use std::mem;

use crate::consts;
use crate::proc::Microprocess;

/// The scheduler's two-queue rotation.
///
/// `active` is drained during the current cycle; `next` accumulates the
/// survivors and any newly registered microprocesses. Registration only
/// ever touches `next`, so a unit registered mid-cycle is never stepped
/// twice in the cycle that created it.
pub(crate) struct SchedPool {
  active: VecDeque<Microprocess>,
  next: VecDeque<Microprocess>,
}

impl SchedPool {
  pub(crate) fn new() -> Self {
    Self {
      active: VecDeque::with_capacity(consts::CAP_SCHED_POOL),
      next: VecDeque::with_capacity(consts::CAP_SCHED_POOL),
    }
  }

  /// Returns `true` once every pooled microprocess has finished.
  pub(crate) fn is_drained(&self) -> bool {
    self.active.is_empty() && self.next.is_empty()
  }

  /// Promotes `next` to `active` for the coming cycle.
  ///
  /// Only legal between cycles, when `active` has been fully drained.
  pub(crate) fn rotate(&mut self) {
    debug_assert!(self.active.is_empty(), "rotated mid-cycle");

    mem::swap(&mut self.active, &mut self.next);
  }

  /// Removes the next microprocess due for a step this cycle.
  pub(crate) fn pop_active(&mut self) -> Option<Microprocess> {
    self.active.pop_front()
  }

  /// Appends a survivor or a new registration for the following cycle.
  pub(crate) fn push_next(&mut self, proc: Microprocess) {
    self.next.push_back(proc);
  }

  /// Returns the number of pooled microprocesses across both queues.
  pub(crate) fn pending(&self) -> usize {
    self.active.len() + self.next.len()
  }
}

// -----------------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
  use crate::proc::Microprocess;
  use crate::sched::pool::SchedPool;

  fn idle() -> Microprocess {
    Microprocess::new(|mut context| async move {
      context.pause().await;
    })
  }

  #[test]
  fn test_rotation_preserves_fifo_order() {
    let mut pool: SchedPool = SchedPool::new();

    let a: Microprocess = idle();
    let b: Microprocess = idle();
    let first: u64 = a.id().to_u64();
    let second: u64 = b.id().to_u64();

    pool.push_next(a);
    pool.push_next(b);
    pool.rotate();

    assert_eq!(pool.pop_active().unwrap().id().to_u64(), first);
    assert_eq!(pool.pop_active().unwrap().id().to_u64(), second);
    assert!(pool.pop_active().is_none());
  }

  #[test]
  fn test_drained() {
    let mut pool: SchedPool = SchedPool::new();

    assert!(pool.is_drained());

    pool.push_next(idle());

    assert!(!pool.is_drained());

    pool.rotate();

    assert!(!pool.is_drained());

    let _ignore = pool.pop_active();

    assert!(pool.is_drained());
  }
}
