//! Dashboard View-State
//!
//! Plain data behind the dashboard: the food list, the plate being edited
//! and the two modal flags. No I/O happens here.

use crate::domain::FoodPlate;

use super::patch::FoodPatch;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardState {
    /// Remote collection, in fetch/insertion order
    pub foods: Vec<FoodPlate>,
    /// Record targeted by the edit modal
    pub editing_food: Option<FoodPlate>,
    pub modal_open: bool,
    pub edit_modal_open: bool,
}

impl DashboardState {
    /// Apply a finished operation. Returns false when an update found no match.
    pub fn apply(&mut self, patch: FoodPatch) -> bool {
        let ends_edit = patch.ends_edit();
        let applied = patch.apply_to_list(&mut self.foods);
        if ends_edit {
            self.finish_edit();
        }
        applied
    }

    /// Store the edit target and open the edit modal
    pub fn begin_edit(&mut self, food: FoodPlate) {
        self.edit_modal_open = true;
        self.editing_food = Some(food);
    }

    pub fn finish_edit(&mut self) {
        self.editing_food = None;
    }

    pub fn toggle_modal(&mut self) {
        self.modal_open = !self.modal_open;
    }

    pub fn toggle_edit_modal(&mut self) {
        self.edit_modal_open = !self.edit_modal_open;
    }
}
