//! Food List Patches
//!
//! The local effect of a finished remote call. Both the native view-model
//! and the UI store apply results through `FoodPatch::apply_to_list`.

use crate::domain::{FoodId, FoodPlate};
use crate::food_list;

#[derive(Debug, Clone, PartialEq)]
pub enum FoodPatch {
    /// Whole collection from the initial load
    Loaded(Vec<FoodPlate>),
    /// Record the store created
    Created(FoodPlate),
    /// Record saved from the edit modal; ends edit mode
    Edited(FoodPlate),
    /// Record rewritten outside the edit flow (availability)
    Updated(FoodPlate),
    Deleted(FoodId),
}

impl FoodPatch {
    /// Patch `foods` in place. Returns false when an update found no match.
    pub fn apply_to_list(self, foods: &mut Vec<FoodPlate>) -> bool {
        match self {
            FoodPatch::Loaded(loaded) => {
                *foods = loaded;
                true
            }
            FoodPatch::Created(food) => {
                food_list::append(foods, food);
                true
            }
            FoodPatch::Edited(food) | FoodPatch::Updated(food) => {
                let id = food.id;
                let replaced = food_list::replace_by_id(foods, food);
                if !replaced {
                    log::warn!("[DASHBOARD] Updated food {} is not in the list", id);
                }
                replaced
            }
            FoodPatch::Deleted(id) => {
                food_list::remove_by_id(foods, id);
                true
            }
        }
    }

    /// Whether applying this patch clears the edit target
    pub fn ends_edit(&self) -> bool {
        matches!(self, FoodPatch::Edited(_))
    }

    /// The single record carried by create/update patches
    pub fn record(&self) -> Option<&FoodPlate> {
        match self {
            FoodPatch::Created(food) | FoodPatch::Edited(food) | FoodPatch::Updated(food) => Some(food),
            FoodPatch::Loaded(_) | FoodPatch::Deleted(_) => None,
        }
    }
}
