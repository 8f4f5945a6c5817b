//! Auth Form Component
//!
//! Email/password login. Updates the shared admin flag on success and
//! shows a local error message otherwise.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::ApiClient;
use crate::browser;
use crate::components::{ErrorMessage, InputField};
use crate::config::{API_URL, LOGIN_FAILED, LOGIN_SUCCESS, LOGIN_UNREACHABLE};
use crate::context::{use_user_context, UserContext};
use crate::error::ApiError;
use crate::models::LoginResponse;
use crate::session::{KeyValueStore, LocalStore, Session};

/// What a login attempt means for the form
#[derive(Debug, Clone, PartialEq)]
pub enum LoginOutcome {
    LoggedIn { is_admin: bool, token: Option<String> },
    Rejected(String),
}

pub fn login_outcome(result: Result<LoginResponse, ApiError>) -> LoginOutcome {
    match result {
        Ok(resp) if resp.success => LoginOutcome::LoggedIn {
            is_admin: resp.is_admin.unwrap_or(false),
            token: resp.token,
        },
        Ok(resp) => LoginOutcome::Rejected(resp.message.unwrap_or_else(|| LOGIN_FAILED.to_string())),
        Err(e) => {
            log::warn!("login request failed: {}", e);
            LoginOutcome::Rejected(LOGIN_UNREACHABLE.to_string())
        }
    }
}

/// Apply a login outcome to the shared session. Returns the message to
/// show when the login was rejected; a rejection leaves the session as is.
pub fn apply_login<S: KeyValueStore>(user: &UserContext, session: &Session<S>, outcome: LoginOutcome) -> Option<String> {
    match outcome {
        LoginOutcome::LoggedIn { is_admin, token } => {
            user.record_login(session, is_admin, token.as_deref());
            None
        }
        LoginOutcome::Rejected(message) => Some(message),
    }
}

#[component]
pub fn AuthForm() -> impl IntoView {
    let user = use_user_context();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error_message, set_error_message) = signal::<Option<String>>(None);

    let handle_login = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_error_message.set(None);
        let email = email.get_untracked();
        let password = password.get_untracked();

        spawn_local(async move {
            let result = ApiClient::new(API_URL).login(&email, &password).await;
            match apply_login(&user, &Session::new(LocalStore), login_outcome(result)) {
                None => browser::alert(LOGIN_SUCCESS),
                // Credentials stay in the fields for another try
                Some(message) => set_error_message.set(Some(message)),
            }
        });
    };

    view! {
        <form class="auth-form" on:submit=handle_login>
            <InputField
                label="Email"
                input_type="email"
                value=email
                set_value=set_email
                placeholder="Enter your email"
            />
            <InputField
                label="Password"
                input_type="password"
                value=password
                set_value=set_password
                placeholder="Enter your password"
            />
            <button type="submit" class="primary-btn">"Login"</button>
            <ErrorMessage message=error_message />
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ADMIN_KEY, TOKEN_KEY};
    use crate::session::MemoryStore;

    #[test]
    fn test_rejection_shows_server_message() {
        let resp = LoginResponse {
            success: false,
            message: Some("Invalid credentials".to_string()),
            ..Default::default()
        };
        assert_eq!(login_outcome(Ok(resp)), LoginOutcome::Rejected("Invalid credentials".to_string()));
    }

    #[test]
    fn test_rejection_without_message_uses_default() {
        let resp = LoginResponse { success: false, ..Default::default() };
        assert_eq!(login_outcome(Ok(resp)), LoginOutcome::Rejected(LOGIN_FAILED.to_string()));
    }

    #[test]
    fn test_admin_login() {
        let resp = LoginResponse {
            success: true,
            is_admin: Some(true),
            token: Some("tok".to_string()),
            ..Default::default()
        };
        assert_eq!(
            login_outcome(Ok(resp)),
            LoginOutcome::LoggedIn { is_admin: true, token: Some("tok".to_string()) }
        );
    }

    #[test]
    fn test_missing_admin_flag_means_regular_user() {
        let resp = LoginResponse { success: true, ..Default::default() };
        assert_eq!(login_outcome(Ok(resp)), LoginOutcome::LoggedIn { is_admin: false, token: None });
    }

    #[test]
    fn test_transport_and_status_failures_share_message() {
        let network = login_outcome(Err(ApiError::Network("offline".to_string())));
        let status = login_outcome(Err(ApiError::Status { status: 502, text: "Bad Gateway".to_string() }));
        assert_eq!(network, LoginOutcome::Rejected(LOGIN_UNREACHABLE.to_string()));
        assert_eq!(network, status);
    }

    #[test]
    fn test_invalid_credentials_leave_admin_flag_untouched() {
        let owner = Owner::new();
        owner.with(|| {
            let store = MemoryStore::default();
            let session = Session::new(&store);
            let user = UserContext::restore(&session);

            let resp = LoginResponse {
                success: false,
                message: Some("Invalid credentials".to_string()),
                ..Default::default()
            };
            let shown = apply_login(&user, &session, login_outcome(Ok(resp)));

            assert_eq!(shown.as_deref(), Some("Invalid credentials"));
            assert!(!user.is_admin.get_untracked());
            assert_eq!(store.get_raw(ADMIN_KEY), None);
            assert_eq!(store.get_raw(TOKEN_KEY), None);
        });
    }

    #[test]
    fn test_admin_login_sets_shared_flag() {
        let owner = Owner::new();
        owner.with(|| {
            let store = MemoryStore::default();
            let session = Session::new(&store);
            let user = UserContext::restore(&session);

            let resp: LoginResponse = serde_json::from_str(r#"{"success":true,"isAdmin":true}"#).unwrap();
            let shown = apply_login(&user, &session, login_outcome(Ok(resp)));

            assert_eq!(shown, None);
            assert!(user.is_admin.get_untracked());
            assert_eq!(store.get_raw(ADMIN_KEY).as_deref(), Some("true"));
        });
    }

    #[test]
    fn test_network_failure_leaves_existing_admin_session() {
        let owner = Owner::new();
        owner.with(|| {
            let store = MemoryStore::default();
            let session = Session::new(&store);
            session.record_login(true, Some("tok")).unwrap();
            let user = UserContext::restore(&session);

            let shown = apply_login(&user, &session, login_outcome(Err(ApiError::Network("offline".to_string()))));

            assert_eq!(shown.as_deref(), Some(LOGIN_UNREACHABLE));
            assert!(user.is_admin.get_untracked());
            assert_eq!(session.token().as_deref(), Some("tok"));
        });
    }
}
