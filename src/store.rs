//! Challenge Store
//!
//! Canonical challenge list. Uses Leptos reactive_stores for fine-grained
//! reactivity; editors emit updates and only the helpers below write.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::Challenge;

#[derive(Clone, Debug, Default, Store)]
pub struct ChallengeState {
    /// Challenges as last fetched, with local edits applied
    pub challenges: Vec<Challenge>,
}

/// Type alias for the store
pub type ChallengeStore = Store<ChallengeState>;

/// Get the challenge store from context
pub fn use_challenge_store() -> ChallengeStore {
    expect_context::<ChallengeStore>()
}

/// Replace the entry with the same id. Returns false when no entry matched.
pub fn apply_update(challenges: &mut [Challenge], updated: Challenge) -> bool {
    match challenges.iter_mut().find(|c| c.id == updated.id) {
        Some(slot) => {
            *slot = updated;
            true
        }
        None => false,
    }
}

/// Seed an empty list with fetched challenges. A list that already holds
/// entries (and possibly local edits) is left alone.
pub fn fill_if_empty(challenges: &mut Vec<Challenge>, fetched: Vec<Challenge>) -> bool {
    if !challenges.is_empty() {
        return false;
    }
    *challenges = fetched;
    true
}

// ========================
// Store Helper Functions
// ========================

pub fn store_fill_if_empty(store: &ChallengeStore, fetched: Vec<Challenge>) -> bool {
    fill_if_empty(&mut store.challenges().write(), fetched)
}

pub fn store_apply_update(store: &ChallengeStore, updated: Challenge) -> bool {
    apply_update(&mut store.challenges().write(), updated)
}
