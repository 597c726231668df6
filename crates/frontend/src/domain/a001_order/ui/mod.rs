pub mod list;
pub mod order_card;
pub mod status_badge;
