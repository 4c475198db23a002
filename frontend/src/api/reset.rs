use serde_json::Value;

use super::{
    client::ApiClient,
    types::{ErrorResponse, MessageResponse, ResetError, ResetPasswordRequest},
};

impl ApiClient {
    /// Sends one reset request. A non-2xx status becomes `ServerRejected`; anything
    /// that stops the exchange from completing, including an undecodable success
    /// body, becomes `Transport`.
    pub async fn reset_password(
        &self,
        request: &ResetPasswordRequest,
    ) -> Result<MessageResponse, ResetError> {
        let endpoint = self.resolved_endpoint().await;
        let response = self
            .http_client()
            .post(&endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                log::warn!("reset request failed: {}", e);
                ResetError::transport(e)
            })?;

        let status = response.status();
        if status.is_success() {
            log::debug!("reset request accepted ({})", status);
            response
                .json::<Value>()
                .await
                .map(|body| MessageResponse::from_body(&body))
                .map_err(|e| {
                    log::warn!("reset response could not be decoded: {}", e);
                    ResetError::transport(e)
                })
        } else {
            log::warn!("reset request rejected ({})", status);
            let body = response
                .json::<Value>()
                .await
                .map(|body| ErrorResponse::from_body(&body))
                .unwrap_or_default();
            Err(ResetError::ServerRejected(body.into_message()))
        }
    }
}
