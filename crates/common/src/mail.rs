//! Transactional email client (Brevo-style `POST /v3/smtp/email`).
//!
//! Thin wrapper over `reqwest`; callers compose the message, this module only
//! authenticates and delivers it. No retries, no queueing.

use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MailError {
    #[error("network error: {0}")]
    Network(String),
    #[error("provider rejected send ({status}): {body}")]
    Api { status: u16, body: String },
}

#[derive(Debug, Clone, Serialize)]
pub struct Address {
    pub email: String,
    pub name: String,
}

impl Address {
    pub fn new(email: impl Into<String>, name: impl Into<String>) -> Self {
        Self { email: email.into(), name: name.into() }
    }
}

/// One outbound message in the provider's wire shape.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendEmailRequest {
    pub sender: Address,
    pub to: Vec<Address>,
    pub subject: String,
    pub html_content: String,
}

#[derive(Clone)]
pub struct Mailer {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
    sender: Address,
}

impl Mailer {
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>, sender: Address) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
            api_key: api_key.into(),
            sender,
        }
    }

    /// Fire one message at the provider. The provider answers 201 on success.
    pub async fn send(&self, to: Address, subject: String, html_content: String) -> Result<(), MailError> {
        let req = SendEmailRequest {
            sender: self.sender.clone(),
            to: vec![to],
            subject,
            html_content,
        };
        let resp = self
            .http
            .post(&self.endpoint)
            .header("api-key", &self.api_key)
            .json(&req)
            .send()
            .await
            .map_err(|e| MailError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(MailError::Api { status: status.as_u16(), body });
        }
        Ok(())
    }
}
