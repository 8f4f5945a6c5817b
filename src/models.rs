//! Frontend Models
//!
//! Data structures matching the CTF API payloads.

use serde::{Deserialize, Deserializer, Serialize};

/// Challenge data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Challenge {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub title: String,
    pub description: String,
    pub points: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// The backend has served both numeric and string ids.
fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(i64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(id) => id,
        RawId::Number(id) => id.to_string(),
    })
}

/// Admin editor working copy of a challenge
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChallengeDraft {
    pub title: String,
    pub description: String,
}

impl ChallengeDraft {
    pub fn from_challenge(challenge: &Challenge) -> Self {
        Self {
            title: challenge.title.clone(),
            description: challenge.description.clone(),
        }
    }

    /// Merge the draft over `base`, keeping every other field.
    pub fn apply_to(&self, base: &Challenge) -> Challenge {
        Challenge {
            title: self.title.clone(),
            description: self.description.clone(),
            ..base.clone()
        }
    }
}

// ========================
// Request / Response Bodies
// ========================

#[derive(Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub success: bool,
    #[serde(default)]
    pub is_admin: Option<bool>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
}

#[derive(Serialize)]
pub struct VerifyRequest<'a> {
    pub flag: &'a str,
}
