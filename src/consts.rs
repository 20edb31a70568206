//! Runtime-wide configuration constants.

// -----------------------------------------------------------------------------
// System - Box Names
// -----------------------------------------------------------------------------

/// Maximum number of characters in a [`BoxName`].
///
/// [`BoxName`]: crate::lang::BoxName
pub const MAX_BOX_NAME_CHARS: usize = 255;

/// Maximum number of [`BoxName`]s in the name table.
///
/// [`BoxName`]: crate::lang::BoxName
pub const MAX_BOX_NAME_COUNT: usize = 1 << 16;

// -----------------------------------------------------------------------------
// System - Fibers
// -----------------------------------------------------------------------------

/// Capacity of the go/progress channels backing a [`Fiber`].
///
/// One token is in flight per channel at any instant, so a single slot
/// gives rendezvous hand-off semantics.
///
/// [`Fiber`]: crate::fiber::Fiber
pub const CAP_FIBER_CHANNEL: usize = 1;

// -----------------------------------------------------------------------------
// System - Mailboxes
// -----------------------------------------------------------------------------

/// Initial capacity of each named message box queue.
pub const CAP_MAILBOX_QUEUE: usize = 8;

// -----------------------------------------------------------------------------
// System - Scheduler
// -----------------------------------------------------------------------------

/// Initial capacity of the scheduler `active`/`next` pool queues.
pub const CAP_SCHED_POOL: usize = 16;
