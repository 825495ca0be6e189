//! Dashboard State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Patches go
//! through `FoodPatch`, the same path the native view-model uses.

use leptos::prelude::*;
use reactive_stores::Store;
use food_dashboard_core::{food_list, FoodId, FoodPatch, FoodPlate};

/// Dashboard view-state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Mirror of the remote `/foods` collection
    pub foods: Vec<FoodPlate>,
    /// Plate targeted by the edit modal
    pub editing_food: Option<FoodPlate>,
    pub modal_open: bool,
    pub edit_modal_open: bool,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

// ========================
// Store Helper Functions
// ========================

/// Apply a settled dashboard operation; same path as `DashboardState::apply`
pub fn store_apply(store: &AppStore, patch: FoodPatch) {
    let ends_edit = patch.ends_edit();
    {
        let foods_field = store.foods();
        let mut foods = foods_field.write();
        patch.apply_to_list(&mut *foods);
    }
    if ends_edit {
        store_finish_edit(store);
    }
}

pub fn store_find_food(store: &AppStore, food_id: FoodId) -> Option<FoodPlate> {
    store.foods().with_untracked(|foods| food_list::find_by_id(foods, food_id).cloned())
}

/// Enter edit mode: remember the plate and open the edit modal
pub fn store_begin_edit(store: &AppStore, food: FoodPlate) {
    *store.edit_modal_open().write() = true;
    *store.editing_food().write() = Some(food);
}

pub fn store_finish_edit(store: &AppStore) {
    *store.editing_food().write() = None;
}

pub fn store_toggle_modal(store: &AppStore) {
    store.modal_open().update(|open| *open = !*open);
}

pub fn store_toggle_edit_modal(store: &AppStore) {
    store.edit_modal_open().update(|open| *open = !*open);
}

/// Availability of the plate as currently stored; false once it is gone
pub fn is_available(foods: &[FoodPlate], food_id: FoodId) -> bool {
    food_list::find_by_id(foods, food_id).is_some_and(|food| food.available)
}
