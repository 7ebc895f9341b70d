pub mod catalog;
pub mod menu;
pub mod send_api;
