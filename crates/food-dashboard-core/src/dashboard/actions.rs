//! Dashboard Actions
//!
//! Every dashboard operation up to the point of touching local state.
//! Each one returns the `FoodPatch` to apply, or the error to show.
//! Shared by the native `Dashboard` and the Leptos front end.

use crate::domain::{FoodId, FoodPlate, FoodPlateInput};
use crate::error::{DashboardError, DashboardResult};
use crate::lifetime::Lifetime;
use crate::repository::FoodRepository;
use crate::service::FoodService;

use super::patch::FoodPatch;

#[derive(Debug, Clone)]
pub struct FoodActions<R> {
    service: FoodService<R>,
    lifetime: Lifetime,
}

impl<R: FoodRepository> FoodActions<R> {
    pub fn new(repo: R, lifetime: Lifetime) -> Self {
        Self {
            service: FoodService::new(repo),
            lifetime,
        }
    }

    pub fn lifetime(&self) -> &Lifetime {
        &self.lifetime
    }

    pub async fn load(&self) -> DashboardResult<FoodPatch> {
        let result = self.service.load().await.map(FoodPatch::Loaded);
        self.settle("load foods", result)
    }

    pub async fn add_food(&self, input: FoodPlateInput) -> DashboardResult<FoodPatch> {
        let result = self.service.create(input).await.map(FoodPatch::Created);
        self.settle("add food", result)
    }

    /// Save `input` over `editing`; no remote call without an edit target
    pub async fn update_food(
        &self,
        editing: Option<FoodPlate>,
        input: FoodPlateInput,
    ) -> DashboardResult<FoodPatch> {
        let Some(editing) = editing else {
            return self.settle("update food", Err(DashboardError::NoEditTarget));
        };
        let result = self.service.update(editing.id, input).await.map(FoodPatch::Edited);
        self.settle("update food", result)
    }

    pub async fn delete_food(&self, id: FoodId) -> DashboardResult<FoodPatch> {
        let result = self.service.delete(id).await.map(FoodPatch::Deleted);
        self.settle("delete food", result)
    }

    /// Flip `current`'s availability; `current` is the local record for `id`
    pub async fn toggle_availability(
        &self,
        current: Option<FoodPlate>,
        id: FoodId,
    ) -> DashboardResult<FoodPatch> {
        let Some(food) = current else {
            return self.settle("toggle availability", Err(DashboardError::UnknownFood(id)));
        };
        let result = self
            .service
            .set_availability(&food, !food.available)
            .await
            .map(FoodPatch::Updated);
        self.settle("toggle availability", result)
    }

    /// Liveness wins over the call's own outcome: once unmounted every
    /// result, success or failure, settles as `Detached`.
    fn settle(&self, operation: &str, result: DashboardResult<FoodPatch>) -> DashboardResult<FoodPatch> {
        report(operation, self.lifetime.ensure_alive().and(result))
    }
}

/// Log a failed operation at its boundary and hand the result back
fn report<T>(operation: &str, result: DashboardResult<T>) -> DashboardResult<T> {
    if let Err(err) = &result {
        match err {
            DashboardError::Detached => log::debug!("[DASHBOARD] {} dropped: {}", operation, err),
            _ => log::error!("[DASHBOARD] {} failed: {}", operation, err),
        }
    }
    result
}
