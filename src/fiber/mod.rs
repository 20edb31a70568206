//! Suspendable units: resumable routines with explicit hand-off points.
//!
//! The suspension mechanism is a dedicated task bound to a pair of
//! rendezvous channels. The resumer sends a "go" token and blocks for a
//! "progress" token; the routine's [`suspend`] does the mirror image.
//! One [`resume`] call therefore equals exactly one step of the routine,
//! with a symmetric transfer of control and no parallelism inside a unit.
//!
//! [`suspend`]: FiberContext::suspend
//! [`resume`]: Fiber::resume

mod context;
mod fiber;
mod state;

pub use self::context::FiberContext;
pub use self::fiber::Fiber;
pub use self::state::FiberState;
