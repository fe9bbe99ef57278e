use std::cell::RefCell;
use std::future::Future;

use eventos_shared::EventRecord;
use yew::platform::pinned::oneshot;
use yew::AppHandle;

use crate::components::event_board::{BoardMsg, EventBoard};
use crate::config::AppConfig;
use crate::error::{EventsError, EventsResult};
use crate::services::api::ApiService;

struct MountedBoard {
    container_id: String,
    handle: AppHandle<EventBoard>,
}

thread_local! {
    // At most one board; moving to another container tears the old one down.
    static BOARD: RefCell<Option<MountedBoard>> = const { RefCell::new(None) };
}

/// Fetch the events once and render them. Every failure ends here: it is
/// logged and otherwise dropped, leaving the container as it was.
pub async fn load_events(config: AppConfig) {
    let AppConfig {
        events_url,
        container_id,
    } = config;
    let id: &str = &container_id;

    let outcome = fetch_then_display(ApiService::list_events(&events_url), move |events| {
        display_events(id, events)
    })
    .await;

    match outcome {
        Ok(count) => tracing::info!("Rendered {} events into #{}", count, container_id),
        Err(e) => tracing::error!("Error: {}", e),
    }
}

/// Runs `display` only when `fetch` succeeds.
pub async fn fetch_then_display<F, D, R>(fetch: F, display: D) -> EventsResult<usize>
where
    F: Future<Output = EventsResult<Vec<EventRecord>>>,
    D: FnOnce(Vec<EventRecord>) -> R,
    R: Future<Output = EventsResult<usize>>,
{
    let events = fetch.await?;
    display(events).await
}

/// Replace the contents of the container with one card per event, in order.
///
/// Resolves once the cards are in the DOM. The board is mounted on the
/// first call for a container (clearing whatever was there); later calls
/// hand it the new list, so output is replaced and never appended.
pub async fn display_events(container_id: &str, events: Vec<EventRecord>) -> EventsResult<usize> {
    let container = gloo::utils::document()
        .get_element_by_id(container_id)
        .ok_or_else(|| EventsError::MissingContainer(container_id.to_string()))?;

    let (done, rendered) = oneshot::channel();
    BOARD.with(|slot| {
        let mut slot = slot.borrow_mut();
        let mounted_here = slot
            .as_ref()
            .is_some_and(|board| board.container_id == container_id);

        if !mounted_here {
            if let Some(previous) = slot.take() {
                previous.handle.destroy();
            }
            container.set_inner_html("");
            *slot = Some(MountedBoard {
                container_id: container_id.to_string(),
                handle: yew::Renderer::<EventBoard>::with_root(container).render(),
            });
        }

        if let Some(board) = slot.as_ref() {
            board.handle.send_message(BoardMsg::Show { events, done });
        }
    });

    rendered
        .await
        .map_err(|_| EventsError::RenderCancelled(container_id.to_string()))
}
