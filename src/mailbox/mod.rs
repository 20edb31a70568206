//! Named FIFO message boxes and their shared handles.
//!
//! Every message-box holder owns a fixed set of named queues declared at
//! construction. The set is private to the instance: no storage is ever
//! shared between holders, including holders built from the same
//! constructor. Data moves between holders only when a postman relays it.

mod boxes;
mod handle;
mod info;

pub use self::boxes::Mailboxes;
pub use self::handle::MailboxHandle;
pub use self::info::MailboxInfo;
