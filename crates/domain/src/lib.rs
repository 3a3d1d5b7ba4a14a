//! Domain layer for the WhatsApp relay
//!
//! Contains the inbound webhook event model and its validation rules, the
//! class schedule and its query logic, and the value objects shared by the
//! outer layers. This layer performs no I/O.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
