//! Email dispatch over the transactional-email provider's HTTP API.

use std::time::Duration;

use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Clone)]
pub struct EmailConfig {
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_from_address")]
    pub from_address: String,
    #[serde(default)]
    pub contact_address: String,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            api_key: String::new(),
            from_address: default_from_address(),
            contact_address: String::new(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

impl EmailConfig {
    /// Delivery needs an API key, a sender, and an operator inbox. There is
    /// no fallback operator address.
    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty() && !self.from_address.is_empty() && !self.contact_address.is_empty()
    }
}

fn default_api_url() -> String {
    "https://api.resend.com".to_string()
}

fn default_from_address() -> String {
    "onboarding@resend.dev".to_string()
}

fn default_timeout_seconds() -> u64 {
    10
}

/// An email ready for dispatch.
#[derive(Debug, Clone, PartialEq)]
pub struct OutgoingEmail {
    pub to: String,
    pub subject: String,
    pub html: String,
    pub reply_to: Option<String>,
}

#[derive(Serialize)]
struct SendRequest<'a> {
    from: &'a str,
    to: [&'a str; 1],
    subject: &'a str,
    html: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    reply_to: Option<&'a str>,
}

/// Email service for sending contact-page notifications.
///
/// Created once per process start from configuration and cloned into request
/// state; every call shares the inner connection pool and carries the
/// configured timeout, so a hung provider surfaces as a dispatch failure.
#[derive(Clone)]
pub struct EmailService {
    http: reqwest::Client,
    api_url: String,
    api_key: String,
    from: String,
}

impl EmailService {
    /// Create a new email service from configuration
    pub fn new(config: &EmailConfig) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        tracing::info!(
            api_url = %config.api_url,
            from = %config.from_address,
            timeout_seconds = config.timeout_seconds,
            "Email service initialized"
        );

        Ok(Self {
            http,
            api_url: config.api_url.trim_end_matches('/').to_owned(),
            api_key: config.api_key.clone(),
            from: config.from_address.clone(),
        })
    }

    pub async fn send(&self, email: &OutgoingEmail) -> anyhow::Result<()> {
        tracing::info!(to = %email.to, subject = %email.subject, "Sending email");

        let request = SendRequest {
            from: &self.from,
            to: [email.to.as_str()],
            subject: &email.subject,
            html: &email.html,
            reply_to: email.reply_to.as_deref(),
        };

        let response = self
            .http
            .post(format!("{}/emails", self.api_url))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("email API returned {status}: {body}");
        }

        Ok(())
    }
}
