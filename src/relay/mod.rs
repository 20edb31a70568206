//! Message relays between box holders.

mod postman;

pub use self::postman::Postman;
