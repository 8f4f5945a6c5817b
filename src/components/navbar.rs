//! Navbar Component
//!
//! Static top navigation.

use leptos::prelude::*;
use leptos_router::components::A;

/// Navigation targets as (path, label)
pub const NAV_LINKS: &[(&str, &str)] = &[
    ("/", "Home"),
    ("/challenges", "Challenges"),
    ("/leader", "Leaderboard"),
    ("/auth", "Login"),
];

#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <nav class="navbar">
            <div class="navbar-inner">
                <h1 class="navbar-title">"CTF Platform"</h1>
                <div class="navbar-links">
                    {NAV_LINKS.iter().map(|(href, label)| view! {
                        <A href=*href>{*label}</A>
                    }).collect_view()}
                </div>
            </div>
        </nav>
    }
}
