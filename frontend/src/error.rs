use thiserror::Error;

#[derive(Debug, Error)]
pub enum EventsError {
    #[error("Request failed: {0}")]
    Network(String),

    /// Any non-2xx answer, whatever the code.
    #[error("Error al cargar eventos")]
    Status { status: u16 },

    #[error("Failed to parse events: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Container element #{0} not found")]
    MissingContainer(String),

    /// The board was torn down before the cards reached the DOM.
    #[error("Render into #{0} was cancelled")]
    RenderCancelled(String),
}

pub type EventsResult<T> = Result<T, EventsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_message_ignores_code() {
        assert_eq!(
            EventsError::Status { status: 404 }.to_string(),
            "Error al cargar eventos"
        );
        assert_eq!(
            EventsError::Status { status: 503 }.to_string(),
            "Error al cargar eventos"
        );
    }

    #[test]
    fn test_parse_error_conversion() {
        let err: EventsError = serde_json::from_str::<Vec<u8>>("nope").unwrap_err().into();
        assert!(matches!(err, EventsError::Parse(_)));
        assert!(err.to_string().starts_with("Failed to parse events"));
    }

    #[test]
    fn test_missing_container_message() {
        let err = EventsError::MissingContainer("eventos-container".to_string());
        assert_eq!(err.to_string(), "Container element #eventos-container not found");
    }

    #[test]
    fn test_render_cancelled_message() {
        let err = EventsError::RenderCancelled("eventos-container".to_string());
        assert_eq!(err.to_string(), "Render into #eventos-container was cancelled");
    }
}
