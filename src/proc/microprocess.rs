use std::fmt::Debug;
use std::fmt::Formatter;
use std::fmt::Result as FmtResult;
use std::pin::Pin;
use tracing::debug;

use crate::fiber::Fiber;
use crate::fiber::FiberContext;
use crate::lang::Term;
use crate::lang::Tick;
use crate::proc::ProcId;
use crate::raise;

type MainFuture = Pin<Box<dyn Future<Output = ()> + Send>>;
type MainRoutine = Box<dyn FnOnce(FiberContext) -> MainFuture + Send>;

/// A cooperatively scheduled unit of work.
///
/// A microprocess is constructed idle, holding only its `main` routine.
/// [`activate`] binds a fresh [`Fiber`] to the routine; from then on every
/// [`step`] advances the routine by one suspension interval, until it
/// returns and the microprocess is permanently dead.
///
/// ```text
/// idle --activate()--> alive --step()*--> dead
/// ```
///
/// Stepping a dead (or never-activated) microprocess is a harmless no-op
/// that returns the finished sentinel, which is what lets a scheduler
/// treat "finished during this cycle" uniformly. Activating twice, on the
/// other hand, raises: it would silently discard a live fiber.
///
/// [`activate`]: Self::activate
/// [`step`]: Self::step
pub struct Microprocess {
  id: ProcId,
  main: Option<MainRoutine>,
  fiber: Option<Fiber>,
}

impl Microprocess {
  /// Constructs an idle microprocess from its `main` routine.
  ///
  /// The routine receives a [`FiberContext`] and cedes control through it;
  /// nothing runs until the microprocess is activated and stepped.
  pub fn new<F, Fut>(main: F) -> Self
  where
    F: FnOnce(FiberContext) -> Fut + Send + 'static,
    Fut: Future<Output = ()> + Send + 'static,
  {
    Self {
      id: ProcId::next(),
      main: Some(Box::new(move |context| Box::pin(main(context)))),
      fiber: None,
    }
  }

  /// Returns the microprocess identifier.
  #[inline]
  pub const fn id(&self) -> ProcId {
    self.id
  }

  /// Binds a fresh fiber to the `main` routine.
  ///
  /// # Errors
  ///
  /// Raises [`Exception`] if the microprocess was already activated, or if
  /// called from outside the runtime.
  ///
  /// [`Exception`]: crate::error::Exception
  pub fn activate(&mut self) {
    let Some(main) = self.main.take() else {
      raise!(Error, SysInv, format!("microprocess {} already activated", self.id));
    };

    self.fiber = Some(Fiber::spawn(main));
  }

  /// Returns `true` if [`activate`] has been called.
  ///
  /// [`activate`]: Self::activate
  #[inline]
  pub fn activated(&self) -> bool {
    self.fiber.is_some()
  }

  /// Returns `true` if the microprocess has a fiber that can still run.
  #[inline]
  pub fn alive(&self) -> bool {
    self
      .fiber
      .as_ref()
      .is_some_and(|fiber| fiber.state().is_alive())
  }

  /// Advances the microprocess by one step.
  ///
  /// Returns the routine's progress value, or the finished sentinel
  /// ([`None`]) once the routine has returned. When not alive this does
  /// nothing and returns the sentinel.
  pub async fn step(&mut self) -> Option<Term> {
    let Some(fiber) = self.fiber.as_mut() else {
      return None;
    };

    if fiber.state().is_finished() {
      return None;
    }

    let progress: Option<Term> = fiber.resume(Term::new(Tick)).await;

    if progress.is_none() {
      debug!(target: "alcor", id = %self.id, "microprocess finished");
    }

    progress
  }

  /// Steps the microprocess until it finishes.
  ///
  /// Not normally called on a pooled microprocess (the scheduler owns the
  /// stepping there) but useful for driving a unit directly in tests.
  pub async fn run(&mut self) {
    while self.step().await.is_some() {}
  }
}

impl Debug for Microprocess {
  fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
    f.debug_struct("Microprocess")
      .field("id", &self.id)
      .field("activated", &self.activated())
      .field("alive", &self.alive())
      .finish()
  }
}

// -----------------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------------
