//! Edit Challenge Page
//!
//! Admin editor for a challenge title and description. The page never
//! writes the list itself: it emits the edited copy and the list owner
//! applies it.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::components::challenge_list::load_challenges;
use crate::context::use_user_context;
use crate::load::RequestTracker;
use crate::models::{Challenge, ChallengeDraft};
use crate::store::{store_apply_update, use_challenge_store, ChallengeStateStoreFields};

/// Challenge the editor works on: the first entry with an id.
///
/// The route id is not consulted, so the editor always lands on the head of
/// the list. Kept as-is until the intended targeting is settled.
pub fn select_challenge(challenges: &[Challenge]) -> Option<&Challenge> {
    challenges.iter().find(|c| !c.id.is_empty())
}

#[component]
pub fn EditChallengePage(
    #[prop(into)] challenges: Signal<Vec<Challenge>>,
    #[prop(into)] on_update: Callback<Challenge>,
) -> impl IntoView {
    let navigate = use_navigate();
    let selected = Memo::new(move |_| select_challenge(&challenges.get()).cloned());

    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());

    // Reset the draft whenever the selection changes
    Effect::new(move |_| {
        if let Some(challenge) = selected.get() {
            let draft = ChallengeDraft::from_challenge(&challenge);
            set_title.set(draft.title);
            set_description.set(draft.description);
        }
    });

    let handle_save = move |_: web_sys::MouseEvent| {
        let Some(challenge) = selected.get_untracked() else { return };
        let draft = ChallengeDraft {
            title: title.get_untracked(),
            description: description.get_untracked(),
        };
        on_update.run(draft.apply_to(&challenge));
        navigate("/challenges", Default::default());
    };

    view! {
        <div class="edit-challenge">
            <h2>"Edit Challenge"</h2>
            <input
                type="text"
                placeholder="Challenge Title"
                prop:value=move || title.get()
                on:input=move |ev| set_title.set(event_target_value(&ev))
            />
            <textarea
                placeholder="Challenge Description"
                prop:value=move || description.get()
                on:input=move |ev| set_description.set(event_target_value(&ev))
            />
            <button class="primary-btn" on:click=handle_save>"Save"</button>
        </div>
    }
}

/// Binds the editor to the challenge store
#[component]
pub fn EditChallengeRoute() -> impl IntoView {
    let user = use_user_context();
    let store = use_challenge_store();

    let tracker = RequestTracker::new();
    on_cleanup({
        let tracker = tracker.clone();
        move || tracker.cancel()
    });

    if store.challenges().read_untracked().is_empty() {
        let ticket = tracker.begin();
        let client = user.api();
        spawn_local(async move {
            if let Err(e) = load_challenges(store, client, ticket).await {
                log::warn!("could not load challenges for editing: {}", e);
            }
        });
    }

    let challenges = Signal::derive(move || store.challenges().get());
    let on_update = Callback::new(move |updated: Challenge| {
        let id = updated.id.clone();
        if store_apply_update(&store, updated) {
            log::info!("challenge {} updated", id);
        } else {
            log::warn!("challenge {} no longer in the list", id);
        }
    });

    view! { <EditChallengePage challenges=challenges on_update=on_update /> }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_challenge(id: &str, title: &str) -> Challenge {
        Challenge {
            id: id.to_string(),
            title: title.to_string(),
            description: format!("{} description", title),
            points: 100,
            image_url: None,
        }
    }

    #[test]
    fn test_select_always_takes_first_challenge() {
        let list = vec![make_challenge("1", "Crypto"), make_challenge("2", "Pwn")];
        assert_eq!(select_challenge(&list).map(|c| c.id.as_str()), Some("1"));
    }

    #[test]
    fn test_select_skips_entries_without_id() {
        let list = vec![make_challenge("", "Draft"), make_challenge("5", "Web")];
        assert_eq!(select_challenge(&list).map(|c| c.id.as_str()), Some("5"));
        assert_eq!(select_challenge(&[]), None);
    }

    #[test]
    fn test_save_emits_merged_copy_of_first() {
        let mut list = vec![make_challenge("1", "Crypto"), make_challenge("2", "Pwn")];
        let selected = select_challenge(&list).cloned().unwrap();
        let draft = ChallengeDraft {
            title: "Crypto II".to_string(),
            description: "Harder".to_string(),
        };
        let updated = draft.apply_to(&selected);

        assert!(crate::store::apply_update(&mut list, updated));
        assert_eq!(list[0].title, "Crypto II");
        assert_eq!(list[0].description, "Harder");
        assert_eq!(list[1], make_challenge("2", "Pwn"));
    }
}
