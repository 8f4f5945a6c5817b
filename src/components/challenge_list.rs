//! Challenge List Page
//!
//! Fills the challenge store on first visit and links to each challenge.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use crate::api::{encode_segment, ApiClient};
use crate::load::Ticket;
use crate::config::CHALLENGES_LOAD_FAILED;
use crate::context::use_user_context;
use crate::error::ApiError;
use crate::load::{LoadState, RequestTracker};
use crate::store::{store_fill_if_empty, use_challenge_store, ChallengeStateStoreFields, ChallengeStore};

/// In-app link to a challenge page
pub fn challenge_href(id: &str) -> String {
    format!("/challenges/{}", encode_segment(id))
}

/// Fetch the challenge list and seed the store with it, unless the
/// requesting view is gone or the store was filled in the meantime.
pub async fn load_challenges(store: ChallengeStore, client: ApiClient, ticket: Ticket) -> Result<(), ApiError> {
    let challenges = client.list_challenges().await?;
    if !ticket.is_current() {
        log::debug!("dropping stale challenge list");
    } else if store_fill_if_empty(&store, challenges) {
        log::info!("loaded {} challenges", store.challenges().read_untracked().len());
    }
    Ok(())
}

#[component]
pub fn ChallengeListPage() -> impl IntoView {
    let user = use_user_context();
    let store = use_challenge_store();

    // The store owns local edits, so only fetch when it is empty
    let already_loaded = !store.challenges().read_untracked().is_empty();
    let (state, set_state) = signal(if already_loaded {
        LoadState::Loaded(())
    } else {
        LoadState::Loading
    });

    let tracker = RequestTracker::new();
    on_cleanup({
        let tracker = tracker.clone();
        move || tracker.cancel()
    });

    Effect::new(move |_| {
        if !state.get_untracked().is_loading() {
            return;
        }
        let ticket = tracker.begin();
        let client = user.api();
        spawn_local(async move {
            let result = load_challenges(store, client, ticket.clone()).await;
            if ticket.is_current() {
                set_state.set(LoadState::from_result(result, CHALLENGES_LOAD_FAILED));
            }
        });
    });

    view! {
        <section class="challenge-list">
            <h2>"Challenges"</h2>
            {move || match state.get() {
                LoadState::Loading => view! { <div class="loading">"Loading..."</div> }.into_any(),
                LoadState::Error(message) => view! { <div class="load-error">{message}</div> }.into_any(),
                LoadState::Loaded(()) => view! {
                    <ul class="challenge-items">
                        <For
                            each=move || store.challenges().get()
                            key=|c| (c.id.clone(), c.title.clone(), c.points)
                            children=move |c| {
                                let href = challenge_href(&c.id);
                                let edit_href = format!("{}/edit", href);
                                view! {
                                    <li class="challenge-item">
                                        <A href=href>{c.title}</A>
                                        <span class="challenge-points">{c.points} " pts"</span>
                                        <Show when=move || user.is_admin.get()>
                                            <A href=edit_href.clone()>"Edit"</A>
                                        </Show>
                                    </li>
                                }
                            }
                        />
                    </ul>
                }.into_any(),
            }}
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_challenge_href_encodes_id() {
        assert_eq!(challenge_href("12"), "/challenges/12");
        assert_eq!(challenge_href("rev 2"), "/challenges/rev%202");
    }
}
