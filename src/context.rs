//! Application Context
//!
//! Dashboard actions and the error banner, provided via Leptos Context API.

use leptos::prelude::*;
use food_dashboard_core::{DashboardError, DashboardResult, FoodActions, FoodPatch, HttpFoodRepository, Lifetime};

pub type Actions = FoodActions<HttpFoodRepository>;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Every dashboard operation, tied to this page's lifetime
    actions: StoredValue<Actions, LocalStorage>,
    /// Last failure, shown in the error banner - read
    pub error: ReadSignal<Option<String>>,
    /// Last failure - write
    set_error: WriteSignal<Option<String>>,
}

impl AppContext {
    pub fn new(repo: HttpFoodRepository, error: (ReadSignal<Option<String>>, WriteSignal<Option<String>>)) -> Self {
        Self {
            actions: StoredValue::new_local(FoodActions::new(repo, Lifetime::new())),
            error: error.0,
            set_error: error.1,
        }
    }

    /// None once the owner disposed our handles
    pub fn actions(&self) -> Option<Actions> {
        self.actions.try_get_value()
    }

    pub fn end(&self) {
        let _ = self.actions.try_with_value(|actions| actions.lifetime().end());
    }

    /// Turn a settled action into the patch to apply, updating the banner
    pub fn finish(&self, operation: &str, result: DashboardResult<FoodPatch>) -> Option<FoodPatch> {
        let message = match &result {
            Ok(_) => None,
            Err(DashboardError::Detached) => return None,
            Err(e) => banner_message(operation, e),
        };
        // The signal is gone if the page unmounted meanwhile
        if self.set_error.try_set(message).is_some() {
            return None;
        }
        result.ok()
    }

    pub fn clear_error(&self) {
        self.set_error.set(None);
    }
}

/// Banner text for a failed operation; nothing for a dropped one
pub fn banner_message(operation: &str, err: &DashboardError) -> Option<String> {
    match err {
        DashboardError::Detached => None,
        _ => Some(format!("Could not {}: {}", operation, err)),
    }
}
