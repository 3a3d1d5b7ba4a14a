//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod message_sender_port;
mod response_generator;
mod schedule_source_port;

#[cfg(test)]
pub use message_sender_port::MockMessageSenderPort;
pub use message_sender_port::{MessageSenderPort, SendError, SendReceipt};
pub use response_generator::ResponseGenerator;
#[cfg(test)]
pub use schedule_source_port::MockScheduleSourcePort;
pub use schedule_source_port::ScheduleSourcePort;
