//! UI Components
//!
//! Leptos components rendered by the dashboard.

mod header;
mod modal;
mod food_form;
mod modal_add_food;
mod modal_edit_food;
mod food_card;
mod error_banner;

pub use header::Header;
pub use modal_add_food::ModalAddFood;
pub use modal_edit_food::ModalEditFood;
pub use food_card::FoodCard;
pub use error_banner::ErrorBanner;
