//! Alcor - a cooperative microprocess runtime for Rust.
//!
//! Alcor round-robins a pool of resumable units of work ("microprocesses")
//! on a single logical thread of control, and layers a message-passing
//! convention on top: named inbox/outbox FIFO boxes plus a relaying
//! "postman", so microprocesses can form dataflow pipelines without any
//! event machinery. Relaying happens purely as a side effect of the normal
//! rotation.
//!
//! There is no preemption and no parallelism. A routine runs until it
//! voluntarily suspends, handing a progress value to its resumer; the next
//! resume continues it exactly after the suspension point. The scheduler
//! is itself such a unit, which makes the entire system single-steppable
//! from outside.
//!
//! # Quick Start
//!
//! ```no_run
//! use alcor::lang::{BoxName, Term};
//! use alcor::proc::Component;
//! use alcor::relay::Postman;
//! use alcor::sched::Scheduler;
//!
//! alcor::init::run(async {
//!   let producer = Component::standard(|mut context, boxes| async move {
//!     loop {
//!       boxes.send(Term::new("Hello World"), BoxName::OUTBOX);
//!       context.pause().await;
//!     }
//!   });
//!
//!   let consumer = Component::standard(|mut context, boxes| async move {
//!     loop {
//!       if boxes.data_ready(BoxName::INBOX) {
//!         println!("! {:?}", boxes.recv(BoxName::INBOX));
//!       }
//!       context.pause().await;
//!     }
//!   });
//!
//!   let postman = Postman::standard(producer.boxes(), consumer.boxes());
//!
//!   let scheduler = Scheduler::new();
//!   scheduler.register(producer);
//!   scheduler.register(postman);
//!   scheduler.register(consumer);
//!
//!   alcor::init::drive(scheduler).await;
//! });
//! ```
//!
//! # Core Modules
//!
//! - [`init`]: Runtime entry point and the driver loop
//! - [`fiber`]: Suspendable units and their resume/suspend rendezvous
//! - [`proc`]: Microprocess lifecycle and component composition
//! - [`sched`]: The round-robin scheduler and its pool
//! - [`mailbox`]: Named FIFO message boxes
//! - [`relay`]: The postman relay
//! - [`lang`]: Message values and box names
//! - [`error`]: Exception system
//! - [`consts`]: Runtime configuration constants

pub mod consts;
pub mod error;
pub mod fiber;
pub mod init;
pub mod lang;
pub mod mailbox;
pub mod proc;
pub mod relay;
pub mod sched;
