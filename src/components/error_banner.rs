//! Error Banner Component
//!
//! Shows the last failed dashboard operation until dismissed.

use leptos::prelude::*;

use crate::context::AppContext;

#[component]
pub fn ErrorBanner() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        {move || ctx.error.get().map(|msg| view! {
            <div class="error-banner" role="alert">
                <span>{msg}</span>
                <button type="button" on:click=move |_| ctx.clear_error()>"×"</button>
            </div>
        })}
    }
}
