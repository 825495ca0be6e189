//! Domain Layer
//!
//! Food plate records and the entity contract shared by list helpers.
//! This layer has NO external dependencies (except serde for serialization).

mod entity;
mod food;

pub use entity::{Entity, FoodId};
pub use food::{FoodPlate, FoodPlateInput, NewFoodPlate};
