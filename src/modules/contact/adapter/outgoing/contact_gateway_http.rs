use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use tracing::debug;

use crate::modules::contact::application::ports::outgoing::{
    ContactGateway, ContactGatewayError,
};
use crate::modules::contact::domain::entities::ContactForm;

const CONTACT_PATH: &str = "/contact";

/// Posts contact messages to `{base}/contact` as JSON.
#[derive(Clone)]
pub struct ContactGatewayHttp {
    client: reqwest::Client,
    endpoint: String,
}

impl ContactGatewayHttp {
    pub fn new(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            endpoint: format!("{}{}", base_url.trim_end_matches('/'), CONTACT_PATH),
        }
    }
}

#[async_trait]
impl ContactGateway for ContactGatewayHttp {
    async fn send(&self, form: ContactForm) -> Result<(), ContactGatewayError> {
        debug!("POST {}", self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .json(&form)
            .send()
            .await
            .map_err(|e| ContactGatewayError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ContactGatewayError::Rejected {
                status: status.as_u16(),
            });
        }

        Ok(())
    }
}
