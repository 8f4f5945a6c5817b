//! Auth Endpoints

use gloo_net::http::Request;

use super::{network_error, read_json, ApiClient};
use crate::error::ApiError;
use crate::models::{LoginRequest, LoginResponse};

impl ApiClient {
    /// `POST /auth` with the user's credentials.
    ///
    /// A rejection body (`success: false`) is returned as `Ok` even on a
    /// non-2xx status so its message can reach the user.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        log::info!("submitting login");
        let response = Request::post(&self.url("auth"))
            .json(&LoginRequest { email, password })
            .map_err(|e| ApiError::Serialize(e.to_string()))?
            .send()
            .await
            .map_err(network_error)?;

        match read_json::<LoginResponse>(&response).await {
            Ok(body) => Ok(body),
            Err(_) if !response.ok() => Err(ApiError::Status {
                status: response.status(),
                text: response.status_text(),
            }),
            Err(e) => Err(e),
        }
    }
}
