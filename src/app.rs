//! Food Dashboard App
//!
//! The dashboard page: header, add/edit modals and the plate list.
//! Every handler runs a shared `FoodActions` operation and applies the
//! returned patch only once the call succeeded and the page is still mounted.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use food_dashboard_core::{FoodId, FoodPlate, FoodPlateInput, HttpFoodRepository};

use crate::config;
use crate::context::AppContext;
use crate::components::{ErrorBanner, FoodCard, Header, ModalAddFood, ModalEditFood};
use crate::store::{
    is_available, store_apply, store_begin_edit, store_find_food, store_toggle_edit_modal,
    store_toggle_modal, AppState, AppStateStoreFields, AppStore,
};

#[component]
pub fn App() -> impl IntoView {
    let api_config = config::api_config();
    log::info!("[APP] Remote store at {}", api_config.foods_url());

    let repo = match HttpFoodRepository::new(api_config) {
        Ok(repo) => repo,
        Err(e) => {
            log::error!("[APP] Cannot build HTTP client: {}", e);
            return view! { <p class="fatal-error">"The food store is unreachable: " {e.to_string()}</p> }
                .into_any();
        }
    };

    // State
    let store: AppStore = Store::new(AppState::default());
    provide_context(store);

    let ctx = AppContext::new(repo, signal(None));
    provide_context(ctx);

    // Results arriving after this point are dropped
    on_cleanup(move || ctx.end());

    // Load foods on mount
    Effect::new(move |_| {
        let Some(actions) = ctx.actions() else { return };
        spawn_local(async move {
            let result = actions.load().await;
            if let Some(patch) = ctx.finish("load foods", result) {
                store_apply(&store, patch);
            }
        });
    });

    let handle_add_food = Callback::new(move |input: FoodPlateInput| {
        let Some(actions) = ctx.actions() else { return };
        spawn_local(async move {
            let result = actions.add_food(input).await;
            if let Some(patch) = ctx.finish("add food", result) {
                store_apply(&store, patch);
            }
        });
    });

    let handle_update_food = Callback::new(move |input: FoodPlateInput| {
        let Some(actions) = ctx.actions() else { return };
        let editing = store.editing_food().get_untracked();
        spawn_local(async move {
            let result = actions.update_food(editing, input).await;
            if let Some(patch) = ctx.finish("update food", result) {
                store_apply(&store, patch);
            }
        });
    });

    let handle_delete_food = Callback::new(move |id: FoodId| {
        let Some(actions) = ctx.actions() else { return };
        spawn_local(async move {
            let result = actions.delete_food(id).await;
            if let Some(patch) = ctx.finish("delete food", result) {
                store_apply(&store, patch);
            }
        });
    });

    let handle_toggle_availability = Callback::new(move |id: FoodId| {
        let Some(actions) = ctx.actions() else { return };
        let current = store_find_food(&store, id);
        spawn_local(async move {
            let result = actions.toggle_availability(current, id).await;
            if let Some(patch) = ctx.finish("toggle availability", result) {
                store_apply(&store, patch);
            }
        });
    });

    let handle_edit_food = Callback::new(move |food: FoodPlate| store_begin_edit(&store, food));
    let toggle_modal = Callback::new(move |_: ()| store_toggle_modal(&store));
    let toggle_edit_modal = Callback::new(move |_: ()| store_toggle_edit_modal(&store));

    view! {
        <Header open_modal=toggle_modal />
        <ErrorBanner />
        <ModalAddFood
            is_open=Signal::derive(move || store.modal_open().get())
            set_is_open=toggle_modal
            handle_add_food=handle_add_food
        />
        <ModalEditFood
            is_open=Signal::derive(move || store.edit_modal_open().get())
            set_is_open=toggle_edit_modal
            editing_food=Signal::derive(move || store.editing_food().get())
            handle_update_food=handle_update_food
        />

        <div class="foods-container" data-testid="foods-list">
            <For
                each=move || store.foods().get()
                key=|food| food.clone()
                children=move |food| {
                    let id = food.id;
                    view! {
                        <FoodCard
                            food=food
                            available=Signal::derive(move || store.foods().with(|foods| is_available(foods, id)))
                            handle_delete=handle_delete_food
                            handle_edit_food=handle_edit_food
                            handle_toggle_availability=handle_toggle_availability
                        />
                    }
                }
            />
        </div>
    }
    .into_any()
}
