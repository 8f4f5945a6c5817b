//! User Context
//!
//! Session state shared via Leptos Context API.

use leptos::prelude::*;

use crate::api::ApiClient;
use crate::config::API_URL;
use crate::session::{KeyValueStore, LocalStore, Session};

/// Tab-wide session provided via context
#[derive(Clone, Copy)]
pub struct UserContext {
    /// Whether the current viewer is an admin - read
    pub is_admin: ReadSignal<bool>,
    /// Whether the current viewer is an admin - write (login flow only)
    set_is_admin: WriteSignal<bool>,
}

impl UserContext {
    /// Restore the session persisted by an earlier login.
    pub fn init() -> Self {
        Self::restore(&Session::new(LocalStore))
    }

    pub fn restore<S: KeyValueStore>(session: &Session<S>) -> Self {
        let is_admin = session.is_admin();
        log::info!("session restored (admin: {})", is_admin);
        let (is_admin, set_is_admin) = signal(is_admin);
        Self { is_admin, set_is_admin }
    }

    /// Client carrying the stored bearer token, read fresh on every call
    pub fn api(&self) -> ApiClient {
        ApiClient::new(API_URL).with_token(Session::new(LocalStore).token())
    }

    /// Apply a successful login
    pub fn record_login<S: KeyValueStore>(&self, session: &Session<S>, is_admin: bool, token: Option<&str>) {
        if let Err(e) = session.record_login(is_admin, token) {
            log::warn!("failed to persist session: {}", e);
        }
        self.set_is_admin.set(is_admin);
    }
}

/// Get the user context
pub fn use_user_context() -> UserContext {
    expect_context::<UserContext>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::MemoryStore;

    #[test]
    fn test_restore_reads_persisted_flag() {
        let owner = Owner::new();
        owner.with(|| {
            let store = MemoryStore::default();
            Session::new(&store).record_login(true, Some("tok")).unwrap();

            let user = UserContext::restore(&Session::new(&store));
            assert!(user.is_admin.get_untracked());
        });
    }

    #[test]
    fn test_record_login_updates_signal_and_storage() {
        let owner = Owner::new();
        owner.with(|| {
            let store = MemoryStore::default();
            let session = Session::new(&store);
            let user = UserContext::restore(&session);
            assert!(!user.is_admin.get_untracked());

            user.record_login(&session, true, Some("tok"));
            assert!(user.is_admin.get_untracked());
            assert!(session.is_admin());
            assert_eq!(session.token().as_deref(), Some("tok"));
        });
    }
}
