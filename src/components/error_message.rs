//! Error Message Component

use leptos::prelude::*;

/// Renders nothing until a message is present
#[component]
pub fn ErrorMessage(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    move || message.get().map(|msg| view! { <p class="error-message">{msg}</p> })
}
