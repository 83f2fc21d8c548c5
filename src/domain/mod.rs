pub mod app_state;
pub mod category;
pub mod child_item;
pub mod reminder;
