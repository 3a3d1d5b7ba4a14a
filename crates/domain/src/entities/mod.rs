//! Domain entities

mod inbound_event;
mod schedule;

pub use inbound_event::{
    ContactProfile, InboundChange, InboundContact, InboundEntry, InboundEvent, InboundMessage,
    InboundText, InboundValue, MalformedEvent, ValidatedEvent, is_valid_message,
};
pub use schedule::{Schedule, ScheduleRow};
