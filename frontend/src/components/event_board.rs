use eventos_shared::EventRecord;
use yew::platform::pinned::oneshot::Sender;
use yew::prelude::*;

use crate::components::event_list::EventList;

pub enum BoardMsg {
    /// Replace the shown events; `done` receives the card count once the
    /// new cards are in the DOM.
    Show {
        events: Vec<EventRecord>,
        done: Sender<usize>,
    },
}

/// Long-lived root mounted once per container. New event lists arrive as
/// messages, so every update is a diff against the cards already shown.
pub struct EventBoard {
    events: Vec<EventRecord>,
    pending: Vec<Sender<usize>>,
}

impl Component for EventBoard {
    type Message = BoardMsg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            events: Vec::new(),
            pending: Vec::new(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            BoardMsg::Show { events, done } => {
                self.events = events;
                self.pending.push(done);
                true
            }
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! { <EventList events={self.events.clone()} /> }
    }

    fn rendered(&mut self, _ctx: &Context<Self>, _first_render: bool) {
        let count = self.events.len();
        for done in self.pending.drain(..) {
            // The caller may have stopped waiting.
            let _ = done.send(count);
        }
    }
}
