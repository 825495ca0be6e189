//! Header Component

use leptos::prelude::*;

/// Top bar with the "new plate" action
#[component]
pub fn Header(#[prop(into)] open_modal: Callback<()>) -> impl IntoView {
    view! {
        <header class="header">
            <div class="header-content">
                <h1 class="logo">"Food Dashboard"</h1>
                <nav>
                    <button
                        type="button"
                        class="add-food-btn"
                        on:click=move |_| open_modal.run(())
                    >
                        <span class="add-food-text">"New plate"</span>
                        <span class="add-food-icon">"+"</span>
                    </button>
                </nav>
            </div>
        </header>
    }
}
