//! UI Components
//!
//! Leptos components and pages.

mod navbar;
mod input_field;
mod error_message;
mod auth_form;
mod home;
mod challenge_list;
mod challenge_page;
mod edit_challenge_page;

pub use navbar::Navbar;
pub use input_field::InputField;
pub use error_message::ErrorMessage;
pub use auth_form::AuthForm;
pub use home::{Home, NotFound};
pub use challenge_list::ChallengeListPage;
pub use challenge_page::ChallengePage;
pub use edit_challenge_page::{EditChallengePage, EditChallengeRoute};
