use tracing::debug;
use tracing::trace;

use crate::fiber::FiberContext;
use crate::lang::Term;
use crate::proc::Microprocess;
use crate::proc::ProcId;
use crate::sched::SchedHandle;

/// Round-robin scheduler over a pool of microprocesses.
///
/// The scheduler is itself a microprocess: its `main` routine is the cycle
/// loop, and whoever holds the `Scheduler` value single-steps it like any
/// other unit. One cycle is a full pass over the `active` queue; before
/// stepping each pooled microprocess the loop suspends to its own caller,
/// so one outer [`step`] advances the whole system by exactly one pooled
/// microprocess step. Units are stepped in registration order, and a unit
/// that finishes is dropped from the pool.
///
/// The loop ends when the pool is fully drained, meaning every registered
/// microprocess has finished, and runs indefinitely while any remains
/// alive. There is no cycle quota; a bounded run is expressed by the
/// caller stepping a bounded number of times.
///
/// # Examples
///
/// ```no_run
/// use alcor::proc::Microprocess;
/// use alcor::sched::Scheduler;
///
/// alcor::init::run(async {
///   let scheduler = Scheduler::new();
///
///   scheduler.register(Microprocess::new(|mut context| async move {
///     for line in ["one", "two", "three"] {
///       println!("{line}");
///       context.pause().await;
///     }
///   }));
///
///   alcor::init::drive(scheduler).await;
/// });
/// ```
///
/// [`step`]: Self::step
pub struct Scheduler {
  handle: SchedHandle,
  proc: Microprocess,
}

impl Scheduler {
  /// Creates an idle scheduler with an empty pool.
  pub fn new() -> Self {
    let handle: SchedHandle = SchedHandle::new();
    let shared: SchedHandle = handle.clone();
    let proc: Microprocess = Microprocess::new(move |context| Self::main(shared, context));

    Self { handle, proc }
  }

  /// The scheduler's own routine: the cycle loop.
  async fn main(shared: SchedHandle, mut context: FiberContext) {
    let mut cycle: u64 = 0;

    loop {
      if shared.is_drained() {
        break;
      }

      shared.rotate();
      cycle += 1;

      trace!(target: "alcor", cycle, pooled = shared.pending(), "cycle started");

      while let Some(mut current) = shared.pop_active() {
        // Hand control back to the driver before each pooled step.
        context.pause().await;

        if current.step().await.is_some() {
          shared.requeue(current);
        }
      }
    }

    debug!(target: "alcor", cycles = cycle, "scheduler drained");
  }

  /// Returns the scheduler's own microprocess identifier.
  #[inline]
  pub const fn id(&self) -> ProcId {
    self.proc.id()
  }

  /// Returns a clonable registration handle to the pool.
  #[inline]
  pub fn handle(&self) -> SchedHandle {
    self.handle.clone()
  }

  /// Activates `proc` and pools it for the following cycle.
  ///
  /// See [`SchedHandle::register`].
  ///
  /// # Errors
  ///
  /// Raises [`Exception`] if the microprocess was already activated, or if
  /// called from outside the runtime.
  ///
  /// [`Exception`]: crate::error::Exception
  #[inline]
  pub fn register(&self, proc: impl Into<Microprocess>) {
    self.handle.register(proc);
  }

  /// Returns the number of pooled microprocesses.
  #[inline]
  pub fn pending(&self) -> usize {
    self.handle.pending()
  }

  /// Activates the scheduler's own microprocess.
  ///
  /// # Errors
  ///
  /// Raises [`Exception`] if already activated, or if called from outside
  /// the runtime.
  ///
  /// [`Exception`]: crate::error::Exception
  #[inline]
  pub fn activate(&mut self) {
    self.proc.activate();
  }

  /// Returns `true` if [`activate`] has been called.
  ///
  /// [`activate`]: Self::activate
  #[inline]
  pub fn activated(&self) -> bool {
    self.proc.activated()
  }

  /// Returns `true` if the scheduler can still be stepped.
  #[inline]
  pub fn alive(&self) -> bool {
    self.proc.alive()
  }

  /// Advances the system by one pooled microprocess step.
  ///
  /// Returns the finished sentinel once the pool has drained.
  #[inline]
  pub async fn step(&mut self) -> Option<Term> {
    self.proc.step().await
  }

  /// Steps the scheduler until the pool drains.
  ///
  /// This only returns if every registered microprocess eventually
  /// finishes; a topology with an immortal unit (such as a postman) runs
  /// until externally cancelled.
  #[inline]
  pub async fn run(&mut self) {
    self.proc.run().await;
  }
}

impl Default for Scheduler {
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}

impl From<Scheduler> for Microprocess {
  /// A scheduler is a microprocess; one can be pooled inside another.
  #[inline]
  fn from(scheduler: Scheduler) -> Self {
    scheduler.proc
  }
}
