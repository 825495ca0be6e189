//! Dashboard View-Model
//!
//! Mirrors the remote `/foods` collection locally. Every mutation runs the
//! remote call first and patches local state only once it succeeded.

mod actions;
mod patch;
mod state;

#[cfg(test)]
mod tests;

pub use actions::FoodActions;
pub use patch::FoodPatch;
pub use state::DashboardState;

use crate::domain::{FoodId, FoodPlate, FoodPlateInput};
use crate::error::DashboardResult;
use crate::food_list;
use crate::lifetime::Lifetime;
use crate::repository::FoodRepository;

/// Explicit view-model: shared actions plus the local state they patch
pub struct Dashboard<R> {
    actions: FoodActions<R>,
    state: DashboardState,
}

impl<R: FoodRepository> Dashboard<R> {
    pub fn new(repo: R) -> Self {
        Self::with_lifetime(repo, Lifetime::new())
    }

    /// Tie the dashboard to a lifetime owned elsewhere
    pub fn with_lifetime(repo: R, lifetime: Lifetime) -> Self {
        Self {
            actions: FoodActions::new(repo, lifetime),
            state: DashboardState::default(),
        }
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    pub fn foods(&self) -> &[FoodPlate] {
        &self.state.foods
    }

    /// Handle for ending the lifetime from outside an operation
    pub fn lifetime(&self) -> Lifetime {
        self.actions.lifetime().clone()
    }

    /// Stop applying results; in-flight calls complete as `Detached`
    pub fn unmount(&self) {
        log::debug!("[DASHBOARD] Unmounted");
        self.actions.lifetime().end();
    }

    /// Initial load; replaces the list with the remote collection
    pub async fn load(&mut self) -> DashboardResult<FoodPatch> {
        let patch = self.actions.load().await?;
        if let FoodPatch::Loaded(foods) = &patch {
            log::info!("[DASHBOARD] Loaded {} foods", foods.len());
        }
        Ok(self.apply(patch))
    }

    /// Add a plate and append the record the store returned
    pub async fn add_food(&mut self, input: FoodPlateInput) -> DashboardResult<FoodPatch> {
        let patch = self.actions.add_food(input).await?;
        Ok(self.apply(patch))
    }

    /// Update the plate currently being edited
    pub async fn update_food(&mut self, input: FoodPlateInput) -> DashboardResult<FoodPatch> {
        let editing = self.state.editing_food.clone();
        let patch = self.actions.update_food(editing, input).await?;
        Ok(self.apply(patch))
    }

    pub async fn delete_food(&mut self, id: FoodId) -> DashboardResult<FoodPatch> {
        let patch = self.actions.delete_food(id).await?;
        Ok(self.apply(patch))
    }

    /// Flip a plate's availability on the store, then locally
    pub async fn toggle_availability(&mut self, id: FoodId) -> DashboardResult<FoodPatch> {
        let current = food_list::find_by_id(&self.state.foods, id).cloned();
        let patch = self.actions.toggle_availability(current, id).await?;
        Ok(self.apply(patch))
    }

    /// Enter edit mode for `food`
    pub fn edit_food(&mut self, food: FoodPlate) {
        self.state.begin_edit(food);
    }

    pub fn toggle_modal(&mut self) {
        self.state.toggle_modal();
    }

    pub fn toggle_edit_modal(&mut self) {
        self.state.toggle_edit_modal();
    }

    fn apply(&mut self, patch: FoodPatch) -> FoodPatch {
        self.state.apply(patch.clone());
        patch
    }
}
