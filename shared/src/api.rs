use crate::models::EventRecord;

/// Path of the events collection on the API server.
pub const EVENTS_PATH: &str = "/eventos";

/// Decode a response body into the ordered list of events.
///
/// The array order is kept as served.
pub fn decode_events(body: &str) -> serde_json::Result<Vec<EventRecord>> {
    serde_json::from_str(body)
}
