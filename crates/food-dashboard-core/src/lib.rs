//! Food Dashboard Core
//!
//! Layered architecture:
//! - domain: food plate records and the entity contract
//! - repository: remote store accessors (HTTP, in-memory)
//! - service: remote half of every dashboard operation
//! - dashboard: the view-model that mirrors the remote collection

pub mod config;
pub mod dashboard;
pub mod domain;
pub mod error;
pub mod food_list;
pub mod lifetime;
pub mod repository;
pub mod service;

pub use config::ApiConfig;
pub use dashboard::{Dashboard, DashboardState, FoodActions, FoodPatch};
pub use domain::{Entity, FoodId, FoodPlate, FoodPlateInput, NewFoodPlate};
pub use error::{DashboardError, DashboardResult, RemoteError, RemoteResult};
pub use lifetime::Lifetime;
pub use repository::{FoodRepository, HttpFoodRepository, InMemoryFoodRepository, Operation};
pub use service::FoodService;
