//! Food Form Component
//!
//! Name/image/price/description inputs shared by the add and edit modals.

use leptos::prelude::*;
use food_dashboard_core::FoodPlateInput;

/// Form for a food plate payload
///
/// Inputs reset to `initial` whenever it changes.
#[component]
pub fn FoodForm(
    #[prop(into)] initial: Signal<FoodPlateInput>,
    #[prop(into)] submit_label: String,
    #[prop(into)] on_submit: Callback<FoodPlateInput>,
) -> impl IntoView {
    let (name, set_name) = signal(String::new());
    let (image, set_image) = signal(String::new());
    let (price, set_price) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);

    Effect::new(move |_| {
        let input = initial.get();
        set_name.set(input.name);
        set_image.set(input.image);
        set_price.set(input.price);
        set_description.set(input.description);
        set_error.set(None);
    });

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let input = FoodPlateInput::new(name.get(), image.get(), price.get(), description.get());
        if input.name.trim().is_empty() {
            set_error.set(Some("name must not be empty".to_string()));
            return;
        }
        on_submit.run(input);
    };

    view! {
        <form class="food-form" on:submit=submit>
            <label>
                "Image URL"
                <input
                    type="text"
                    placeholder="Paste the image link here"
                    prop:value=move || image.get()
                    on:input=move |ev| set_image.set(event_target_value(&ev))
                />
            </label>
            <div class="food-form-row">
                <label>
                    "Name"
                    <input
                        type="text"
                        placeholder="Ex: Moda Italiana"
                        prop:value=move || name.get()
                        on:input=move |ev| {
                            set_name.set(event_target_value(&ev));
                            set_error.set(None);
                        }
                    />
                </label>
                <label>
                    "Price"
                    <input
                        type="text"
                        placeholder="Ex: 19.90"
                        prop:value=move || price.get()
                        on:input=move |ev| set_price.set(event_target_value(&ev))
                    />
                </label>
            </div>
            <label>
                "Description"
                <textarea
                    rows="3"
                    prop:value=move || description.get()
                    on:input=move |ev| set_description.set(event_target_value(&ev))
                ></textarea>
            </label>
            {move || error.get().map(|msg| view! { <p class="form-error">{msg}</p> })}
            <button type="submit" class="food-form-submit">{submit_label.clone()}</button>
        </form>
    }
}
