//! Home Page

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Home() -> impl IntoView {
    view! {
        <section class="home-page">
            <h2>"Capture The Flag"</h2>
            <p>"Solve challenges, find flags, earn points."</p>
            <A href="/challenges">"Browse challenges"</A>
        </section>
    }
}

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <section class="not-found">
            <h2>"Page not found"</h2>
            <A href="/">"Back to home"</A>
        </section>
    }
}
