use eventos_shared::EventRecord;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct EventCardProps {
    pub event: EventRecord,
}

#[function_component(EventCard)]
pub fn event_card(props: &EventCardProps) -> Html {
    let event = &props.event;

    html! {
        <div class="evento-card">
            <h2>{ event.display_name() }</h2>
            <p><strong>{ "Descripción:" }</strong>{ " " }{ event.display_description() }</p>
            <p><strong>{ "Fecha:" }</strong>{ " " }{ event.display_date() }</p>
            <p><strong>{ "Lugar:" }</strong>{ " " }{ event.display_place() }</p>
            <p><strong>{ "Organizador:" }</strong>{ " " }{ event.display_organizer() }</p>
        </div>
    }
}
