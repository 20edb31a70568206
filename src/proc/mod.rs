//! Microprocesses: cooperatively scheduled units and their composition.

mod component;
mod microprocess;
mod proc_id;

pub use self::component::Component;
pub use self::microprocess::Microprocess;
pub use self::proc_id::ProcId;
