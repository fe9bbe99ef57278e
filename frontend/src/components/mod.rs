pub mod event_board;
pub mod event_card;
pub mod event_list;
