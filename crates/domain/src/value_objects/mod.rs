//! Value objects - Immutable objects defined by their attributes

mod wa_id;

pub use wa_id::WaId;
