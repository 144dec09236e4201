pub mod api;
pub mod messages;
pub mod ui;
