use std::panic;
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio::sync::mpsc::Receiver;
use tokio::sync::mpsc::Sender;
use tokio::task::JoinHandle;

use crate::consts;
use crate::fiber::FiberContext;
use crate::fiber::FiberState;
use crate::lang::Term;
use crate::raise;

/// A resumable routine, the suspendable unit of the runtime.
///
/// A fiber binds a routine to a dedicated task and a pair of single-slot
/// channels. [`resume`] sends a "go" token carrying the resume value and
/// blocks for a "progress" token, so one call advances the routine by
/// exactly one suspension interval: the routine runs from its current
/// suspension point to the next one (or to completion) while the resumer
/// waits. No first-class continuations and no unsafe stack switching: the
/// task's own await points are the saved resume points.
///
/// # Lifecycle
///
/// The routine does not run when the fiber is spawned; the first [`resume`]
/// starts it, and the value of that first call is discarded since no
/// suspension point is pending yet. When the routine returns, [`resume`]
/// yields [`None`] and the fiber is `Finished` for good.
///
/// # Examples
///
/// ```
/// use alcor::fiber::Fiber;
/// use alcor::lang::{Term, Tick};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let mut fiber = Fiber::spawn(|mut context| async move {
///   let value = context.suspend(Term::new(1_i32)).await;
///   context.suspend(value).await;
/// });
///
/// let one = fiber.resume(Term::new(Tick)).await.unwrap();
/// let two = fiber.resume(Term::new(2_i32)).await.unwrap();
///
/// assert_eq!(one.downcast_ref::<i32>(), Some(&1));
/// assert_eq!(two.downcast_ref::<i32>(), Some(&2));
/// assert!(fiber.resume(Term::new(Tick)).await.is_none());
/// # }
/// ```
///
/// [`resume`]: Self::resume
#[derive(Debug)]
pub struct Fiber {
  state: FiberState,
  resume_send: Sender<Term>,
  yield_recv: Receiver<Term>,
  handle: Option<JoinHandle<()>>,
}

impl Fiber {
  /// Spawns a new fiber running `main`.
  ///
  /// The routine is parked immediately: it runs only when driven by
  /// [`resume`], one suspension interval at a time.
  ///
  /// # Errors
  ///
  /// Raises [`Exception`] if called from outside the runtime, since the
  /// backing task has nowhere to live.
  ///
  /// [`resume`]: Self::resume
  /// [`Exception`]: crate::error::Exception
  pub fn spawn<F, Fut>(main: F) -> Self
  where
    F: FnOnce(FiberContext) -> Fut + Send + 'static,
    Fut: Future<Output = ()> + Send + 'static,
  {
    if Handle::try_current().is_err() {
      raise!(Error, SysInv, "fiber spawned outside the runtime");
    }

    let (resume_send, resume_recv) = mpsc::channel(consts::CAP_FIBER_CHANNEL);
    let (yield_send, yield_recv) = mpsc::channel(consts::CAP_FIBER_CHANNEL);

    let mut context: FiberContext = FiberContext::new(yield_send, resume_recv);

    let handle: JoinHandle<()> = tokio::spawn(async move {
      // The first go token starts the routine; its value is discarded
      // because no suspension point is pending yet. A `None` here means
      // the fiber was dropped without ever being resumed.
      if context.wait_start().await.is_none() {
        return;
      }

      main(context).await;
    });

    Self {
      state: FiberState::NotStarted,
      resume_send,
      yield_recv,
      handle: Some(handle),
    }
  }

  /// Returns the fiber's lifecycle state.
  #[inline]
  pub const fn state(&self) -> FiberState {
    self.state
  }

  /// Advances the routine by one suspension interval.
  ///
  /// `value` becomes the result of the routine's pending [`suspend`] call
  /// (or is discarded on the first resume). Returns `Some(progress)` with
  /// the routine's yielded value if it suspended again, or [`None`] if it
  /// ran to completion.
  ///
  /// A panic inside the routine is re-raised here on the resumer; a dead
  /// routine is never reported as merely finished.
  ///
  /// # Errors
  ///
  /// Raises [`Exception`] if the fiber is already `Finished`.
  ///
  /// [`suspend`]: crate::fiber::FiberContext::suspend
  /// [`Exception`]: crate::error::Exception
  pub async fn resume(&mut self, value: Term) -> Option<Term> {
    if self.state.is_finished() {
      raise!(Error, SysInv, "fiber resumed after completion");
    }

    // A send failure means the task died without suspending; the join
    // below surfaces the routine's panic.
    let _ignore = self.resume_send.send(value).await;

    match self.yield_recv.recv().await {
      Some(progress) => {
        self.state = FiberState::Suspended;
        Some(progress)
      }
      None => {
        self.state = FiberState::Finished;
        self.join().await;
        None
      }
    }
  }

  /// Reaps the finished task, re-raising a routine panic on the resumer.
  async fn join(&mut self) {
    let Some(handle) = self.handle.take() else {
      return;
    };

    match handle.await {
      Ok(()) => {}
      Err(error) if error.is_panic() => panic::resume_unwind(error.into_panic()),
      Err(_) => raise!(Error, SysInv, "fiber task aborted"),
    }
  }
}

// -----------------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
  use crate::fiber::Fiber;
  use crate::fiber::FiberState;
  use crate::lang::Term;
  use crate::lang::Tick;

  fn tick() -> Term {
    Term::new(Tick)
  }

  #[tokio::test]
  async fn test_spawn_does_not_run_the_routine() {
    let fiber: Fiber = Fiber::spawn(|mut context| async move {
      context.pause().await;
    });

    assert_eq!(fiber.state(), FiberState::NotStarted);
  }

  #[tokio::test]
  async fn test_resume_counts_suspension_intervals() {
    let mut fiber: Fiber = Fiber::spawn(|mut context| async move {
      for _ in 0..3 {
        context.pause().await;
      }
    });

    assert!(fiber.resume(tick()).await.is_some());
    assert!(fiber.resume(tick()).await.is_some());
    assert!(fiber.resume(tick()).await.is_some());
    assert!(fiber.resume(tick()).await.is_none());

    assert_eq!(fiber.state(), FiberState::Finished);
  }

  #[tokio::test]
  async fn test_resume_value_reaches_the_routine() {
    let mut fiber: Fiber = Fiber::spawn(|mut context| async move {
      let value: Term = context.suspend(Term::new(0_i32)).await;
      let value: Term = context.suspend(value).await;
      drop(value);
    });

    let first: Term = fiber.resume(tick()).await.unwrap();
    let second: Term = fiber.resume(Term::new(7_i32)).await.unwrap();

    assert_eq!(first.downcast_ref::<i32>(), Some(&0));
    assert_eq!(second.downcast_ref::<i32>(), Some(&7));
  }

  #[tokio::test]
  async fn test_immediate_completion() {
    let mut fiber: Fiber = Fiber::spawn(|context| async move {
      drop(context);
    });

    assert!(fiber.resume(tick()).await.is_none());
    assert_eq!(fiber.state(), FiberState::Finished);
  }

  #[tokio::test]
  #[should_panic(expected = "fiber resumed after completion")]
  async fn test_resume_after_completion_raises() {
    let mut fiber: Fiber = Fiber::spawn(|context| async move {
      drop(context);
    });

    assert!(fiber.resume(tick()).await.is_none());

    let _ignore = fiber.resume(tick()).await;
  }

  #[tokio::test]
  #[should_panic(expected = "routine exploded")]
  async fn test_routine_panic_reaches_the_resumer() {
    let mut fiber: Fiber = Fiber::spawn(|mut context| async move {
      context.pause().await;
      panic!("routine exploded");
    });

    assert!(fiber.resume(tick()).await.is_some());

    let _ignore = fiber.resume(tick()).await;
  }
}
