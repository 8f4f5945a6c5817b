//! Challenge Endpoints

use gloo_net::http::Request;

use super::{encode_segment, ensure_ok, network_error, read_json, ApiClient};
use crate::error::ApiError;
use crate::models::{Challenge, VerifyRequest};

impl ApiClient {
    /// `GET /challenges`
    pub async fn list_challenges(&self) -> Result<Vec<Challenge>, ApiError> {
        let response = self
            .authorize(Request::get(&self.url("challenges")))
            .send()
            .await
            .map_err(network_error)?;
        read_json(&ensure_ok(response)?).await
    }

    /// `GET /challenges/{id}`
    pub async fn get_challenge(&self, id: &str) -> Result<Challenge, ApiError> {
        let url = self.url(&format!("challenges/{}", encode_segment(id)));
        let response = self
            .authorize(Request::get(&url))
            .send()
            .await
            .map_err(network_error)?;
        read_json(&ensure_ok(response)?).await
    }

    /// `POST /verify/{id}` with the submitted flag. Any 2xx means correct;
    /// the response body is not inspected.
    pub async fn verify_flag(&self, id: &str, flag: &str) -> Result<(), ApiError> {
        let url = self.url(&format!("verify/{}", encode_segment(id)));
        let response = self
            .authorize(Request::post(&url))
            .json(&VerifyRequest { flag })
            .map_err(|e| ApiError::Serialize(e.to_string()))?
            .send()
            .await
            .map_err(network_error)?;
        ensure_ok(response).map(|_| ())
    }
}
