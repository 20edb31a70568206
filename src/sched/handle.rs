use parking_lot::Mutex;
use tracing::debug;
use triomphe::Arc;

use crate::proc::Microprocess;
use crate::sched::pool::SchedPool;

/// Clonable registration handle to a scheduler's pool.
///
/// Registration is legal at any time: before the scheduler starts, and,
/// because it only ever touches the `next` queue, from within a running
/// microprocess's own step, which is how dynamic topologies grow while the
/// system runs. Clone the handle into any routine that needs to spawn
/// units.
#[derive(Clone)]
pub struct SchedHandle {
  pool: Arc<Mutex<SchedPool>>,
}

impl SchedHandle {
  #[inline]
  pub(crate) fn new() -> Self {
    Self {
      pool: Arc::new(Mutex::new(SchedPool::new())),
    }
  }

  /// Activates `proc` and pools it for the following cycle.
  ///
  /// # Errors
  ///
  /// Raises [`Exception`] if the microprocess was already activated, or if
  /// called from outside the runtime.
  ///
  /// [`Exception`]: crate::error::Exception
  pub fn register(&self, proc: impl Into<Microprocess>) {
    let mut proc: Microprocess = proc.into();

    proc.activate();

    debug!(target: "alcor", id = %proc.id(), "microprocess registered");

    self.pool.lock().push_next(proc);
  }

  /// Returns the number of pooled microprocesses.
  pub fn pending(&self) -> usize {
    self.pool.lock().pending()
  }

  pub(crate) fn is_drained(&self) -> bool {
    self.pool.lock().is_drained()
  }

  pub(crate) fn rotate(&self) {
    self.pool.lock().rotate();
  }

  pub(crate) fn pop_active(&self) -> Option<Microprocess> {
    self.pool.lock().pop_active()
  }

  pub(crate) fn requeue(&self, proc: Microprocess) {
    self.pool.lock().push_next(proc);
  }
}
