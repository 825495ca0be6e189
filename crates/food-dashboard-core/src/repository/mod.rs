//! Repository Layer
//!
//! Remote store accessors for the `/foods` collection.

mod traits;
mod http;
mod memory;


pub use traits::FoodRepository;
pub use http::HttpFoodRepository;
pub use memory::{InMemoryFoodRepository, Operation};
