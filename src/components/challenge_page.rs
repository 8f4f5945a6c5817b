//! Challenge Page
//!
//! Loads one challenge by the id in the current path and accepts flag
//! submissions for it.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_location;
use percent_encoding::percent_decode_str;

use crate::browser;
use crate::config::{CHALLENGE_LOAD_FAILED, CHALLENGE_NOT_FOUND, FLAG_ACCEPTED, WRONG_FLAG};
use crate::context::use_user_context;
use crate::error::ApiError;
use crate::load::{LoadState, RequestTracker, Ticket};
use crate::models::Challenge;

/// Challenge id from a `/challenges/{id}` path (second segment).
///
/// The browser pathname is still percent-encoded; the API client encodes
/// the id again, so it is decoded here.
pub fn challenge_id_from_path(path: &str) -> Option<String> {
    path.split('/')
        .nth(2)
        .filter(|id| !id.is_empty())
        .map(|id| percent_decode_str(id).decode_utf8_lossy().into_owned())
}

/// Result of a flag submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagOutcome {
    Accepted,
    Wrong,
}

pub fn flag_outcome(result: Result<(), ApiError>) -> FlagOutcome {
    match result {
        Ok(()) => FlagOutcome::Accepted,
        Err(e) => {
            log::info!("flag rejected: {}", e);
            FlagOutcome::Wrong
        }
    }
}

/// What the page does with a verification reply
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitAction {
    AcknowledgeAndGoBack,
    ShowWrongFlag,
    /// User left the challenge before the reply arrived
    Drop,
}

pub fn submit_action(outcome: FlagOutcome, ticket: &Ticket) -> SubmitAction {
    if !ticket.is_current() {
        return SubmitAction::Drop;
    }
    match outcome {
        FlagOutcome::Accepted => SubmitAction::AcknowledgeAndGoBack,
        FlagOutcome::Wrong => SubmitAction::ShowWrongFlag,
    }
}

#[component]
pub fn ChallengePage() -> impl IntoView {
    let user = use_user_context();
    let location = use_location();
    let challenge_id = Memo::new(move |_| challenge_id_from_path(&location.pathname.get()));

    let (state, set_state) = signal(LoadState::<Challenge>::Loading);
    let (flag, set_flag) = signal(String::new());
    let (submission_status, set_submission_status) = signal::<Option<String>>(None);

    let tracker = RequestTracker::new();
    on_cleanup({
        let tracker = tracker.clone();
        move || tracker.cancel()
    });

    // (Re)load whenever the id changes
    Effect::new({
        let tracker = tracker.clone();
        move |_| {
            let id = challenge_id.get();
            let ticket = tracker.begin();
            set_state.set(LoadState::Loading);

            let Some(id) = id else {
                set_state.set(LoadState::Error(CHALLENGE_NOT_FOUND.to_string()));
                return;
            };
            log::info!("loading challenge {}", id);
            let client = user.api();
            spawn_local(async move {
                let result = client.get_challenge(&id).await;
                if ticket.is_current() {
                    set_state.set(LoadState::from_result(result, CHALLENGE_LOAD_FAILED));
                } else {
                    log::debug!("dropping stale response for challenge {}", id);
                }
            });
        }
    });

    let handle_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_submission_status.set(None);
        let Some(id) = challenge_id.get_untracked() else { return };
        let guess = flag.get_untracked();
        let ticket = tracker.watch();
        let client = user.api();

        spawn_local(async move {
            let outcome = flag_outcome(client.verify_flag(&id, &guess).await);
            match submit_action(outcome, &ticket) {
                SubmitAction::AcknowledgeAndGoBack => {
                    browser::alert(FLAG_ACCEPTED);
                    browser::history_back();
                }
                // Guess stays in the field; resubmission is unlimited
                SubmitAction::ShowWrongFlag => {
                    set_submission_status.set(Some(WRONG_FLAG.to_string()));
                }
                SubmitAction::Drop => log::debug!("dropping verification reply for challenge {}", id),
            }
        });
    };

    view! {
        <div class="challenge-page">
            {move || match state.get() {
                LoadState::Loading => view! {
                    <div class="loading">"Loading..."</div>
                }.into_any(),
                LoadState::Error(message) => view! {
                    <div class="load-error">{message}</div>
                }.into_any(),
                LoadState::Loaded(challenge) => {
                    let handle_submit = handle_submit.clone();
                    view! {
                        <div class="challenge-card">
                            <button class="back-link" on:click=move |_| browser::history_back()>
                                "← Back"
                            </button>
                            <h1 class="challenge-title">{challenge.title}</h1>
                            {challenge.image_url.map(|src| view! {
                                <img src=src alt="Challenge" class="challenge-image" />
                            })}
                            <p class="challenge-description">{challenge.description}</p>
                            <p class="challenge-points">"Points: " {challenge.points}</p>
                            <form class="flag-form" on:submit=handle_submit>
                                <input
                                    type="text"
                                    placeholder="Flag format: FLAG{...}"
                                    required=true
                                    prop:value=move || flag.get()
                                    on:input=move |ev| set_flag.set(event_target_value(&ev))
                                />
                                <button type="submit" class="primary-btn">"Submit Flag"</button>
                            </form>
                            {move || submission_status.get().map(|status| view! {
                                <div class="submission-status">{status}</div>
                            })}
                        </div>
                    }.into_any()
                }
            }}
        </div>
    }
}
