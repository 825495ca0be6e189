//! Food Card Component
//!
//! A single plate in the dashboard list.

use leptos::prelude::*;
use food_dashboard_core::{FoodId, FoodPlate};

/// List item for one plate, with edit/delete/availability actions
///
/// `available` tracks the stored record, so the switch only moves once the
/// store accepted the toggle. Delete asks for confirmation in place.
#[component]
pub fn FoodCard(
    food: FoodPlate,
    #[prop(into)] available: Signal<bool>,
    #[prop(into)] handle_delete: Callback<FoodId>,
    #[prop(into)] handle_edit_food: Callback<FoodPlate>,
    #[prop(into)] handle_toggle_availability: Callback<FoodId>,
) -> impl IntoView {
    let id = food.id;
    let price = food.display_price();
    let name = food.name.clone();
    let alt = name.clone();
    let delete_title = format!("Delete {}", name);
    let confirm_text = format!("Delete {}?", name);
    let image = food.image.clone();
    let description = food.description.clone();

    let (confirm_delete, set_confirm_delete) = signal(false);

    view! {
        <div
            class=move || if available.get() { "food" } else { "food unavailable" }
            data-testid=format!("food-{}", id)
        >
            <header>
                <img src=image alt=alt />
            </header>
            <section class="body">
                <h2>{name}</h2>
                <p>{description}</p>
                <p class="price">{price}</p>
            </section>
            <section class="footer">
                <div class="icon-container">
                    <button
                        type="button"
                        class="icon"
                        title="Edit"
                        on:click=move |_| handle_edit_food.run(food.clone())
                    >
                        "✎"
                    </button>
                    <Show
                        when=move || confirm_delete.get()
                        fallback=move || view! {
                            <button
                                type="button"
                                class="icon delete-btn"
                                title=delete_title.clone()
                                on:click=move |_| set_confirm_delete.set(true)
                            >
                                "🗑"
                            </button>
                        }
                    >
                        <span class="delete-confirm">
                            <span class="delete-confirm-text">{confirm_text.clone()}</span>
                            <button
                                type="button"
                                class="confirm-btn"
                                on:click=move |_| {
                                    set_confirm_delete.set(false);
                                    handle_delete.run(id);
                                }
                            >
                                "✓"
                            </button>
                            <button
                                type="button"
                                class="cancel-btn"
                                on:click=move |_| set_confirm_delete.set(false)
                            >
                                "✗"
                            </button>
                        </span>
                    </Show>
                </div>
                <div class="availability-container">
                    <p>{move || if available.get() { "Available" } else { "Unavailable" }}</p>
                    <label class="switch">
                        // The browser must not flip the box; the store decides
                        <input
                            type="checkbox"
                            prop:checked=move || available.get()
                            on:click=move |ev| {
                                ev.prevent_default();
                                handle_toggle_availability.run(id);
                            }
                        />
                        <span class="slider" />
                    </label>
                </div>
            </section>
        </div>
    }
}
