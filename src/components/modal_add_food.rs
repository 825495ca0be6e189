//! Add Food Modal

use leptos::prelude::*;
use food_dashboard_core::FoodPlateInput;

use super::food_form::FoodForm;
use super::modal::Modal;

#[component]
pub fn ModalAddFood(
    #[prop(into)] is_open: Signal<bool>,
    #[prop(into)] set_is_open: Callback<()>,
    #[prop(into)] handle_add_food: Callback<FoodPlateInput>,
) -> impl IntoView {
    let on_submit = Callback::new(move |input: FoodPlateInput| {
        handle_add_food.run(input);
        set_is_open.run(());
    });

    view! {
        <Modal is_open=is_open set_is_open=set_is_open>
            <h1>"New plate"</h1>
            <FoodForm
                initial=Signal::derive(FoodPlateInput::default)
                submit_label="Add plate"
                on_submit=on_submit
            />
        </Modal>
    }
}
