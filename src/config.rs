//! Client Configuration
//!
//! Compile-time API location, storage keys and fixed user-facing messages.

/// Base URL of the CTF REST API.
///
/// Set `CTF_API_URL` at build time to point at a deployed backend.
pub const API_URL: &str = match option_env!("CTF_API_URL") {
    Some(url) => url,
    None => "http://localhost:3000",
};

/// Local storage key holding the bearer token
pub const TOKEN_KEY: &str = "token";
/// Local storage key holding the admin flag ("true" / "false")
pub const ADMIN_KEY: &str = "isAdmin";

// ========================
// User-facing messages
// ========================

pub const LOGIN_SUCCESS: &str = "Login successful!";
pub const LOGIN_FAILED: &str = "Login failed. Please try again.";
pub const LOGIN_UNREACHABLE: &str = "An error occurred. Please check your API or internet connection.";

pub const CHALLENGE_LOAD_FAILED: &str = "Error fetching challenge data";
pub const CHALLENGE_NOT_FOUND: &str = "Challenge not found";
pub const CHALLENGES_LOAD_FAILED: &str = "Error fetching challenges";

pub const FLAG_ACCEPTED: &str = "Flag submitted successfully!";
pub const WRONG_FLAG: &str = "Wrong flag";
