//! Producer/postman/consumer pipeline behavior.

use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;

use alcor::lang::BoxName;
use alcor::lang::Term;
use alcor::mailbox::Mailboxes;
use alcor::proc::Component;
use alcor::relay::Postman;
use alcor::sched::Scheduler;

/// Steps `scheduler` through `cycles` full passes over a pool of `pooled`
/// immortal microprocesses.
///
/// The scheduler suspends before each pooled step, so completing
/// `cycles * pooled` pooled steps takes one extra resume.
async fn step_cycles(scheduler: &mut Scheduler, pooled: usize, cycles: usize) {
  for _ in 0..(pooled * cycles + 1) {
    assert!(scheduler.step().await.is_some());
  }
}

fn hello_producer() -> Component {
  Component::standard(|mut context, boxes| async move {
    loop {
      boxes.send(Term::new("Hello World"), BoxName::OUTBOX);
      context.pause().await;
    }
  })
}

fn recording_consumer(received: Arc<Mutex<Vec<String>>>) -> Component {
  Component::standard(|mut context, boxes| async move {
    loop {
      if boxes.data_ready(BoxName::INBOX) {
        let message: Term = boxes.recv(BoxName::INBOX);
        let message: &str = message.downcast_ref::<&str>().copied().unwrap();

        received.lock().unwrap().push(message.to_string());
      }

      context.pause().await;
    }
  })
}

#[tokio::test]
async fn test_hello_world_pipeline_delivers_once_per_cycle() {
  const CYCLES: usize = 10;

  let received: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));

  let producer: Component = hello_producer();
  let consumer: Component = recording_consumer(received.clone());
  let postman: Postman = Postman::standard(producer.boxes(), consumer.boxes());

  let consumer_boxes = consumer.boxes();

  let mut scheduler: Scheduler = Scheduler::new();

  scheduler.register(producer);
  scheduler.register(postman);
  scheduler.register(consumer);
  scheduler.activate();

  step_cycles(&mut scheduler, 3, CYCLES).await;

  let received: Vec<String> = received.lock().unwrap().clone();

  // One copy per cycle, consumed in the cycle it was relayed, never
  // duplicated, never out of order.
  assert_eq!(received.len(), CYCLES);
  assert!(received.iter().all(|message| message == "Hello World"));
  assert_eq!(consumer_boxes.count(BoxName::INBOX), 0);
}

#[tokio::test]
async fn test_pipeline_is_deterministic_across_runs() {
  const CYCLES: usize = 7;

  async fn run_once() -> Vec<String> {
    let received: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));

    let producer: Component = Component::standard(|mut context, boxes| async move {
      let mut sequence: u32 = 0;

      loop {
        boxes.send(Term::new(format!("message-{}", sequence)), BoxName::OUTBOX);
        sequence += 1;
        context.pause().await;
      }
    });

    let consumer: Component = {
      let received = received.clone();

      Component::standard(move |mut context, boxes| async move {
        loop {
          if boxes.data_ready(BoxName::INBOX) {
            let message: Term = boxes.recv(BoxName::INBOX);

            received
              .lock()
              .unwrap()
              .push(message.downcast_ref::<String>().cloned().unwrap());
          }

          context.pause().await;
        }
      })
    };

    let postman: Postman = Postman::standard(producer.boxes(), consumer.boxes());

    let mut scheduler: Scheduler = Scheduler::new();

    scheduler.register(producer);
    scheduler.register(postman);
    scheduler.register(consumer);
    scheduler.activate();

    step_cycles(&mut scheduler, 3, CYCLES).await;

    let received: Vec<String> = received.lock().unwrap().clone();
    received
  }

  let first: Vec<String> = run_once().await;
  let second: Vec<String> = run_once().await;

  assert_eq!(first.len(), CYCLES);
  assert_eq!(first, second);

  for (index, message) in first.iter().enumerate() {
    assert_eq!(message, &format!("message-{}", index));
  }
}

#[tokio::test]
async fn test_consumer_registered_ahead_of_postman_lags_one_cycle() {
  const CYCLES: usize = 5;

  let count: Arc<AtomicUsize> = Arc::new(AtomicUsize::new(0));

  let producer: Component = hello_producer();

  let consumer: Component = {
    let count = count.clone();

    Component::standard(move |mut context, boxes| async move {
      loop {
        if boxes.data_ready(BoxName::INBOX) {
          let _message: Term = boxes.recv(BoxName::INBOX);

          count.fetch_add(1, Ordering::Relaxed);
        }

        context.pause().await;
      }
    })
  };

  let postman: Postman = Postman::standard(producer.boxes(), consumer.boxes());

  let mut scheduler: Scheduler = Scheduler::new();

  // The consumer is stepped before the postman within each cycle, so each
  // message is consumed in the cycle after the one that relayed it.
  scheduler.register(producer);
  scheduler.register(consumer);
  scheduler.register(postman);
  scheduler.activate();

  step_cycles(&mut scheduler, 3, CYCLES).await;

  assert_eq!(count.load(Ordering::Relaxed), CYCLES - 1);
}

#[test]
fn test_holders_never_observe_each_other() {
  let mut x: Mailboxes = Mailboxes::standard();
  let y: Mailboxes = Mailboxes::standard();

  x.send(Term::new("private"), BoxName::OUTBOX);

  assert!(!y.data_ready(BoxName::OUTBOX));
  assert!(!y.data_ready(BoxName::INBOX));
  assert_eq!(x.count(BoxName::OUTBOX), 1);
}
