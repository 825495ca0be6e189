//! Repository Layer - Core Traits
//!
//! The consumed contract of the remote food store. Implementations can
//! talk HTTP, keep records in memory, etc.

use async_trait::async_trait;

use crate::domain::{FoodId, FoodPlate, FoodPlateInput, NewFoodPlate};
use crate::error::RemoteResult;

/// CRUD over the `/foods` collection
///
/// Futures are `?Send` on wasm32, where the browser fetch API is not
/// thread-safe.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait FoodRepository {
    /// `GET /foods`
    async fn list(&self) -> RemoteResult<Vec<FoodPlate>>;

    /// `POST /foods`; the store assigns the identifier
    async fn create(&self, food: &NewFoodPlate) -> RemoteResult<FoodPlate>;

    /// `PUT /foods/{id}` with the editable fields only
    async fn update(&self, id: FoodId, food: &FoodPlateInput) -> RemoteResult<FoodPlate>;

    /// `PUT /foods/{id}` with the full record
    async fn replace(&self, food: &FoodPlate) -> RemoteResult<FoodPlate>;

    /// `DELETE /foods/{id}`
    async fn delete(&self, id: FoodId) -> RemoteResult<()>;
}
