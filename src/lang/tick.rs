/// Progress marker carried by default suspensions.
///
/// The value a routine yields carries no scheduler meaning; only its
/// presence (suspended) or absence (finished) matters. [`Tick`] is the
/// conventional payload for "I made progress, nothing to report", used by
/// [`FiberContext::pause`] and supplied by [`Microprocess::step`] as the
/// resume value.
///
/// [`FiberContext::pause`]: crate::fiber::FiberContext::pause
/// [`Microprocess::step`]: crate::proc::Microprocess::step
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
pub struct Tick;

// -----------------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------------
