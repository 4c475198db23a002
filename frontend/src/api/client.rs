use reqwest::Client;

use crate::config;

#[derive(Clone, Default)]
pub struct ApiClient {
    client: Client,
    endpoint: Option<String>,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            endpoint: None,
        }
    }

    pub fn new_with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: Some(endpoint.into()),
        }
    }

    pub(super) async fn resolved_endpoint(&self) -> String {
        if let Some(endpoint) = &self.endpoint {
            endpoint.clone()
        } else {
            config::await_reset_endpoint().await
        }
    }

    pub(super) fn http_client(&self) -> &Client {
        &self.client
    }
}
