//! Data model for ingested events and their downstream holders.

pub mod event;
pub mod field_state;
pub mod law;
pub mod register;
pub mod time;

pub use event::{Event, FieldValue, Meta};
pub use field_state::FieldState;
pub use law::Law;
pub use register::Register;
pub use time::EventTime;
