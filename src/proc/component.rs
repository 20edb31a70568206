use crate::fiber::FiberContext;
use crate::lang::BoxName;
use crate::mailbox::MailboxHandle;
use crate::mailbox::Mailboxes;
use crate::proc::Microprocess;
use crate::proc::ProcId;

/// A microprocess augmented with its own set of named message boxes.
///
/// Units compose the two capabilities rather than inheriting them: the
/// steppable part is an ordinary [`Microprocess`], and the message-box part
/// is a [`MailboxHandle`] handed to the routine as its second argument.
/// A unit that needs boxes but no routine, or a routine but no boxes, just
/// uses the corresponding piece directly.
///
/// The box set is created fresh for every component, never shared between
/// instances, and the holder keeps a handle to lend out, which is how a
/// postman gets bound to this component's boxes.
///
/// # Examples
///
/// ```no_run
/// use alcor::lang::{BoxName, Term};
/// use alcor::proc::Component;
///
/// let producer = Component::standard(|mut context, boxes| async move {
///   loop {
///     boxes.send(Term::new("Hello World"), BoxName::OUTBOX);
///     context.pause().await;
///   }
/// });
/// ```
pub struct Component {
  boxes: MailboxHandle,
  proc: Microprocess,
}

impl Component {
  /// Constructs a component with boxes under exactly the given names.
  ///
  /// The routine receives its [`FiberContext`] and a handle to the
  /// component's own boxes; its only obligations are to cede control via
  /// the context and to gate every `recv` behind `data_ready`.
  pub fn new<I, F, Fut>(names: I, main: F) -> Self
  where
    I: IntoIterator<Item = BoxName>,
    F: FnOnce(FiberContext, MailboxHandle) -> Fut + Send + 'static,
    Fut: Future<Output = ()> + Send + 'static,
  {
    let boxes: MailboxHandle = MailboxHandle::new(Mailboxes::new(names));
    let handle: MailboxHandle = boxes.clone();
    let proc: Microprocess = Microprocess::new(move |context| main(context, handle));

    Self { boxes, proc }
  }

  /// Constructs a component with the conventional `inbox`/`outbox` set.
  #[inline]
  pub fn standard<F, Fut>(main: F) -> Self
  where
    F: FnOnce(FiberContext, MailboxHandle) -> Fut + Send + 'static,
    Fut: Future<Output = ()> + Send + 'static,
  {
    Self::new([BoxName::INBOX, BoxName::OUTBOX], main)
  }

  /// Returns the component's microprocess identifier.
  #[inline]
  pub const fn id(&self) -> ProcId {
    self.proc.id()
  }

  /// Returns a handle to the component's boxes, for binding postmen.
  #[inline]
  pub fn boxes(&self) -> MailboxHandle {
    self.boxes.clone()
  }
}

impl From<Component> for Microprocess {
  #[inline]
  fn from(component: Component) -> Self {
    component.proc
  }
}

// -----------------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
  use crate::lang::BoxName;
  use crate::lang::Term;
  use crate::mailbox::MailboxHandle;
  use crate::proc::Component;
  use crate::proc::Microprocess;

  #[tokio::test]
  async fn test_routine_writes_through_the_shared_handle() {
    let component: Component = Component::standard(|mut context, boxes| async move {
      boxes.send(Term::new(1_i32), BoxName::OUTBOX);
      context.pause().await;
      boxes.send(Term::new(2_i32), BoxName::OUTBOX);
    });

    let boxes: MailboxHandle = component.boxes();
    let mut proc: Microprocess = component.into();

    proc.activate();

    assert!(proc.step().await.is_some());
    assert_eq!(boxes.count(BoxName::OUTBOX), 1);

    assert!(proc.step().await.is_none());
    assert_eq!(boxes.count(BoxName::OUTBOX), 2);
  }

  #[tokio::test]
  async fn test_components_have_independent_boxes() {
    let a: Component = Component::standard(|mut context, boxes| async move {
      boxes.send(Term::new(1_i32), BoxName::OUTBOX);
      context.pause().await;
    });

    let b: Component = Component::standard(|mut context, _boxes| async move {
      context.pause().await;
    });

    let a_boxes: MailboxHandle = a.boxes();
    let b_boxes: MailboxHandle = b.boxes();

    let mut proc: Microprocess = a.into();
    proc.activate();
    proc.step().await;

    assert_eq!(a_boxes.count(BoxName::OUTBOX), 1);
    assert_eq!(b_boxes.count(BoxName::OUTBOX), 0);
    assert_eq!(b_boxes.count(BoxName::INBOX), 0);
  }
}
