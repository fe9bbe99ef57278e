use eventos_shared::EventRecord;
use yew::prelude::*;

use crate::components::event_card::EventCard;

#[derive(Properties, PartialEq)]
pub struct EventListProps {
    pub events: Vec<EventRecord>,
}

/// Cards only, no wrapper: the host container ends up holding one card per
/// event and nothing else.
#[function_component(EventList)]
pub fn event_list(props: &EventListProps) -> Html {
    html! {
        <>
            { for props.events.iter().map(|event| {
                html! { <EventCard event={event.clone()} /> }
            })}
        </>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    fn named(name: &str) -> EventRecord {
        EventRecord {
            name: Some(name.to_string()),
            ..Default::default()
        }
    }

    async fn render(events: Vec<EventRecord>) -> String {
        yew::ServerRenderer::<EventList>::with_props(move || EventListProps { events })
            .hydratable(false)
            .render()
            .await
    }

    #[tokio::test]
    async fn test_two_records_two_cards_in_order() {
        let html = render(vec![named("Concierto"), named("Teatro")]).await;

        assert_eq!(html.matches(r#"class="evento-card""#).count(), 2);
        let first = html.find("<h2>Concierto</h2>").expect("first card");
        let second = html.find("<h2>Teatro</h2>").expect("second card");
        assert!(first < second);
    }

    #[tokio::test]
    async fn test_order_follows_input() {
        let names = ["Zeta", "Alfa", "Mu", "Beta", "Omega"];
        let html = render(names.iter().map(|n| named(n)).collect()).await;

        assert_eq!(html.matches(r#"class="evento-card""#).count(), names.len());
        let positions: Vec<usize> = names
            .iter()
            .map(|n| html.find(&format!("<h2>{}</h2>", n)).expect("card rendered"))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[tokio::test]
    async fn test_empty_list_renders_nothing() {
        let html = render(Vec::new()).await;
        assert!(!html.contains("evento-card"));
        assert!(html.trim().is_empty());
    }
}
