//! CTF Client App
//!
//! Root component: provides session and challenge state, mounts the navbar
//! and maps paths to pages.

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use reactive_stores::Store;

use crate::components::{AuthForm, ChallengeListPage, ChallengePage, EditChallengeRoute, Home, Navbar, NotFound};
use crate::context::UserContext;
use crate::store::ChallengeState;

#[component]
pub fn App() -> impl IntoView {
    // Provide context to all children
    provide_context(UserContext::init());
    provide_context(Store::new(ChallengeState::default()));

    view! {
        <Router>
            <Navbar />
            <main class="main-content">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=Home />
                    <Route path=path!("/auth") view=AuthPage />
                    <Route path=path!("/challenges") view=ChallengeListPage />
                    <Route path=path!("/challenges/:id") view=ChallengePage />
                    <Route path=path!("/challenges/:id/edit") view=EditChallengeRoute />
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn AuthPage() -> impl IntoView {
    view! {
        <section class="auth-page">
            <h2>"Login"</h2>
            <AuthForm />
        </section>
    }
}
