pub mod api;
pub mod models;

pub use api::decode_events;
pub use models::{EventRecord, Organizer, MISSING_FIELD};
