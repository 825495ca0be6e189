//! Edit Food Modal
//!
//! Pre-fills the form from the plate being edited.

use leptos::prelude::*;
use food_dashboard_core::{FoodPlate, FoodPlateInput};

use super::food_form::FoodForm;
use super::modal::Modal;

#[component]
pub fn ModalEditFood(
    #[prop(into)] is_open: Signal<bool>,
    #[prop(into)] set_is_open: Callback<()>,
    #[prop(into)] editing_food: Signal<Option<FoodPlate>>,
    #[prop(into)] handle_update_food: Callback<FoodPlateInput>,
) -> impl IntoView {
    let initial = Signal::derive(move || {
        editing_food.get().map(|food| food.to_input()).unwrap_or_default()
    });

    let on_submit = Callback::new(move |input: FoodPlateInput| {
        handle_update_food.run(input);
        set_is_open.run(());
    });

    view! {
        <Modal is_open=is_open set_is_open=set_is_open>
            <h1>"Edit plate"</h1>
            <FoodForm initial=initial submit_label="Save changes" on_submit=on_submit />
        </Modal>
    }
}
