use std::future::pending;
use tokio::sync::mpsc::Receiver;
use tokio::sync::mpsc::Sender;

use crate::lang::Term;
use crate::lang::Tick;

/// Routine-side half of a [`Fiber`]'s suspension machinery.
///
/// A routine receives its context as the first argument of its `main`
/// closure and uses it to cede control: [`suspend`] hands a progress value
/// to whoever resumed the fiber and parks until the next resume, whose
/// value becomes the result of the call. Exactly one of {resumer, routine}
/// runs at any instant; control transfer is a rendezvous, not a queue.
///
/// [`Fiber`]: crate::fiber::Fiber
/// [`suspend`]: Self::suspend
#[derive(Debug)]
pub struct FiberContext {
  yield_send: Sender<Term>,
  resume_recv: Receiver<Term>,
}

impl FiberContext {
  #[inline]
  pub(crate) fn new(yield_send: Sender<Term>, resume_recv: Receiver<Term>) -> Self {
    Self {
      yield_send,
      resume_recv,
    }
  }

  /// Consumes the token that starts the routine.
  ///
  /// Returns [`None`] if the fiber handle was dropped before ever being
  /// resumed, in which case the routine must not run at all.
  #[inline]
  pub(crate) async fn wait_start(&mut self) -> Option<Term> {
    self.resume_recv.recv().await
  }

  /// Cedes control to the resumer, handing it `progress`.
  ///
  /// Returns the value supplied to the resume call that wakes the routine
  /// back up. If the fiber handle is dropped while the routine is parked
  /// here, the call never returns and the task is torn down with the
  /// runtime.
  pub async fn suspend(&mut self, progress: Term) -> Term {
    if self.yield_send.send(progress).await.is_err() {
      // Fiber handle dropped; park until the runtime reaps the task.
      return pending().await;
    }

    match self.resume_recv.recv().await {
      Some(value) => value,
      None => pending().await,
    }
  }

  /// Cedes control for one step, discarding the resume value.
  ///
  /// This is the common case: the yielded [`Tick`] carries no meaning
  /// beyond "still running", and default routines have no use for the
  /// value the scheduler resumes them with.
  #[inline]
  pub async fn pause(&mut self) {
    let _ignore: Term = self.suspend(Term::new(Tick)).await;
  }
}
