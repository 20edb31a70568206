//! Runtime entry point and the driver loop.
//!
//! [`run`] owns the outermost layer of the system: it builds the
//! single-threaded tokio runtime every fiber task lives on, installs the
//! tracing subscriber, and blocks on the supplied future. Topology wiring
//! (constructing components, binding postmen, registering everything with
//! a [`Scheduler`]) happens inside that future, so activation always has
//! a runtime to spawn onto.
//!
//! [`drive`] is the driver half of the contract: repeatedly step the
//! top-level scheduler until it reports completion. Nothing else is
//! required of a driver, and a caller that wants a bounded run can step
//! the scheduler itself instead.

mod config;

pub use self::config::RuntimeConfig;

use std::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering;
use tokio::runtime::Builder;
use tokio::runtime::Runtime as TokioRuntime;
use tracing::debug;

use crate::raise;
use crate::sched::Scheduler;

static SUBSCRIBED: AtomicBool = AtomicBool::new(false);

/// Runs the given future to completion on the Alcor runtime.
///
/// This is the same as calling `run_opts(future, Default::default())`.
#[inline]
pub fn run<F, T>(future: F) -> T
where
  F: Future<Output = T>,
{
  run_opts(future, Default::default())
}

/// Runs the given future to completion on the Alcor runtime.
///
/// Builds a fresh current-thread tokio runtime per call; the tracing
/// subscriber is process-global and installed once, by whichever call
/// gets there first.
///
/// # Errors
///
/// Raises [`Exception`] if the runtime cannot be built.
///
/// [`Exception`]: crate::error::Exception
pub fn run_opts<F, T>(future: F, config: RuntimeConfig) -> T
where
  F: Future<Output = T>,
{
  if !SUBSCRIBED.swap(true, Ordering::SeqCst) {
    if let Err(error) = init_tracing_subscriber(&config) {
      eprintln!("failed to set tracing subscriber: {error}");
    }
  }

  let runtime: TokioRuntime = match Builder::new_current_thread().build() {
    Ok(runtime) => runtime,
    Err(error) => raise!(Error, SysInv, format!("failed to build runtime: {error}")),
  };

  runtime.block_on(future)
}

/// Single-steps `scheduler` until it reports completion.
///
/// Activates the scheduler first if the caller has not. This only returns
/// once every registered microprocess has finished; with an immortal unit
/// pooled it runs until the surrounding runtime is torn down.
pub async fn drive(mut scheduler: Scheduler) {
  if !scheduler.activated() {
    scheduler.activate();
  }

  debug!(target: "alcor", id = %scheduler.id(), "driving scheduler");

  scheduler.run().await;

  debug!(target: "alcor", id = %scheduler.id(), "scheduler finished");
}

fn init_tracing_subscriber(
  config: &RuntimeConfig,
) -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>> {
  tracing_subscriber::fmt()
    .with_max_level(config.tracing_filter())
    .with_file(config.tracing_source_file)
    .with_line_number(config.tracing_source_line)
    .with_thread_names(config.tracing_thread_info)
    .try_init()
}
