use eventos_shared::{decode_events, EventRecord};
use gloo_net::http::Request;

use crate::error::{EventsError, EventsResult};

pub struct ApiService;

impl ApiService {
    /// Single GET against the events endpoint. No retry, no timeout.
    pub async fn list_events(url: &str) -> EventsResult<Vec<EventRecord>> {
        tracing::debug!("Fetching events from {}", url);

        let response = Request::get(url)
            .send()
            .await
            .map_err(|e| EventsError::Network(format!("{:?}", e)))?;

        if !response.ok() {
            return Err(EventsError::Status {
                status: response.status(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| EventsError::Network(format!("{:?}", e)))?;

        Ok(decode_events(&body)?)
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    async fn test_unreachable_host_is_network_error() {
        let result = ApiService::list_events("http://127.0.0.1:1/eventos").await;
        assert!(matches!(result, Err(EventsError::Network(_))));
    }

    #[wasm_bindgen_test]
    async fn test_missing_route_is_status_error() {
        // Served by the test runner, which has no such path.
        let result = ApiService::list_events("/eventos-no-existe").await;
        assert!(matches!(result, Err(EventsError::Status { status }) if status >= 400));
    }
}
