use tracing::trace;

use crate::fiber::FiberContext;
use crate::lang::BoxName;
use crate::lang::Term;
use crate::mailbox::MailboxHandle;
use crate::proc::Microprocess;

/// Relay unit moving messages from one holder's box to another's.
///
/// The binding (source holder, source box, sink holder, sink box) is
/// fixed at construction. Each scheduling step the postman cedes control
/// first, then checks the source box and relays *at most one* message.
/// The one-per-step limit bounds the work a single postman injects into a
/// cycle and ties relay fairness directly to scheduling fairness, so it is
/// kept even when more messages are queued.
///
/// A postman never blocks and never finishes on its own; it is an ordinary
/// pooled microprocess, so relaying happens purely as a side effect of the
/// normal round-robin.
///
/// A box should feed at most one concurrently pooled postman, and be fed
/// by at most one: two relays draining the same source interleave their
/// steps and split the stream between their sinks.
///
/// # Examples
///
/// ```no_run
/// use alcor::proc::Component;
/// use alcor::relay::Postman;
///
/// # let producer = Component::standard(|_context, _boxes| async move {});
/// # let consumer = Component::standard(|_context, _boxes| async move {});
/// // producer.outbox -> consumer.inbox
/// let postman = Postman::standard(producer.boxes(), consumer.boxes());
/// ```
pub struct Postman {
  source: MailboxHandle,
  source_box: BoxName,
  sink: MailboxHandle,
  sink_box: BoxName,
}

impl Postman {
  /// Binds `source.source_box` to `sink.sink_box`.
  pub fn new(
    source: MailboxHandle,
    source_box: BoxName,
    sink: MailboxHandle,
    sink_box: BoxName,
  ) -> Self {
    Self {
      source,
      source_box,
      sink,
      sink_box,
    }
  }

  /// Binds the conventional pair: `source.outbox` to `sink.inbox`.
  #[inline]
  pub fn standard(source: MailboxHandle, sink: MailboxHandle) -> Self {
    Self::new(source, BoxName::OUTBOX, sink, BoxName::INBOX)
  }

  /// The relay loop: one `data_ready` poll and at most one move per step.
  ///
  /// `recv` failing after `data_ready` reported true would mean another
  /// party drained the box inside this step; the mailbox layer raises on
  /// it as a broken invariant rather than recovering.
  async fn main(self, mut context: FiberContext) {
    loop {
      context.pause().await;

      if self.source.data_ready(self.source_box) {
        let value: Term = self.source.recv(self.source_box);

        trace!(
          target: "alcor",
          from = %self.source_box,
          to = %self.sink_box,
          "message relayed",
        );

        self.sink.send(value, self.sink_box);
      }
    }
  }
}

impl From<Postman> for Microprocess {
  #[inline]
  fn from(postman: Postman) -> Self {
    Microprocess::new(move |context| postman.main(context))
  }
}

// -----------------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------------
