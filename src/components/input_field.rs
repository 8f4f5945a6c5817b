//! Input Field Component

use leptos::prelude::*;

/// Labelled text input bound to a signal
#[component]
pub fn InputField(
    #[prop(into)] label: String,
    #[prop(into)] input_type: String,
    value: ReadSignal<String>,
    set_value: WriteSignal<String>,
    #[prop(into, optional)] placeholder: String,
) -> impl IntoView {
    view! {
        <label class="input-field">
            <span class="input-label">{label}</span>
            <input
                type=input_type
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| set_value.set(event_target_value(&ev))
            />
        </label>
    }
}
