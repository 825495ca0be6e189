//! Food Service
//!
//! The remote half of every dashboard operation. Results are handed back
//! for the caller to patch into whatever state it keeps.

use crate::domain::{FoodId, FoodPlate, FoodPlateInput, NewFoodPlate};
use crate::error::DashboardResult;
use crate::repository::FoodRepository;

#[derive(Debug, Clone)]
pub struct FoodService<R> {
    repo: R,
}

impl<R: FoodRepository> FoodService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Fetch the whole collection
    pub async fn load(&self) -> DashboardResult<Vec<FoodPlate>> {
        Ok(self.repo.list().await?)
    }

    /// Persist a new plate, available by default; the store picks the ID
    pub async fn create(&self, input: FoodPlateInput) -> DashboardResult<FoodPlate> {
        Ok(self.repo.create(&NewFoodPlate::from(input)).await?)
    }

    pub async fn update(&self, id: FoodId, input: FoodPlateInput) -> DashboardResult<FoodPlate> {
        Ok(self.repo.update(id, &input).await?)
    }

    pub async fn delete(&self, id: FoodId) -> DashboardResult<FoodId> {
        self.repo.delete(id).await?;
        Ok(id)
    }

    pub async fn set_availability(&self, food: &FoodPlate, available: bool) -> DashboardResult<FoodPlate> {
        Ok(self.repo.replace(&food.with_availability(available)).await?)
    }
}
