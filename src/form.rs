//! Client-side controller for the contact form: holds the field state,
//! posts the payload, and walks the idle/submitting/success/error cycle.

use std::time::Duration;

use saiyana_contact::SubmissionForm;

use crate::routes::contact::ContactResponse;

pub const FALLBACK_ERROR: &str = "Failed to send message. Please try again later.";
const FALLBACK_SUCCESS: &str =
    "Your request has been sent successfully! We'll get back to you soon.";

#[derive(Debug, Clone, PartialEq)]
pub enum FormStatus {
    Idle,
    Submitting,
    Success { message: String },
    Error { message: String },
}

pub struct FormController {
    endpoint: String,
    http: reqwest::Client,
    form: SubmissionForm,
    status: FormStatus,
}

impl FormController {
    pub fn new(endpoint: impl Into<String>) -> anyhow::Result<Self> {
        Ok(Self {
            endpoint: endpoint.into(),
            http: reqwest::Client::builder()
                .timeout(Duration::from_secs(30))
                .build()?,
            form: SubmissionForm::default(),
            status: FormStatus::Idle,
        })
    }

    pub fn status(&self) -> &FormStatus {
        &self.status
    }

    pub fn form(&self) -> &SubmissionForm {
        &self.form
    }

    /// Edit the form fields. Editing after a failed submit returns the
    /// controller to the editable idle state with the prior values kept.
    pub fn form_mut(&mut self) -> &mut SubmissionForm {
        if matches!(self.status, FormStatus::Error { .. }) {
            self.status = FormStatus::Idle;
        }
        &mut self.form
    }

    /// Submit the current fields. At most one submission is in flight; a
    /// call while submitting is a no-op.
    pub async fn submit(&mut self) -> &FormStatus {
        if self.status == FormStatus::Submitting {
            return &self.status;
        }
        self.status = FormStatus::Submitting;

        self.status = match self.post().await {
            Ok(message) => {
                self.form = SubmissionForm::default();
                FormStatus::Success { message }
            }
            Err(message) => FormStatus::Error { message },
        };

        &self.status
    }

    /// Back to an empty form after a successful submission.
    pub fn reset(&mut self) {
        self.form = SubmissionForm::default();
        self.status = FormStatus::Idle;
    }

    async fn post(&self) -> Result<String, String> {
        let response = self
            .http
            .post(&self.endpoint)
            .json(&self.form)
            .send()
            .await
            .map_err(|err| {
                tracing::debug!(%err, "Submission request failed");
                FALLBACK_ERROR.to_string()
            })?;

        let status = response.status();
        let body: ContactResponse = response.json().await.map_err(|err| {
            tracing::debug!(%err, "Invalid response from server");
            FALLBACK_ERROR.to_string()
        })?;

        if status.is_success() && body.success {
            if let Some(warning) = &body.warning {
                tracing::warn!(%warning, "Submission accepted with warning");
            }
            Ok(body.message.unwrap_or_else(|| FALLBACK_SUCCESS.to_string()))
        } else {
            Err(body.error.unwrap_or_else(|| FALLBACK_ERROR.to_string()))
        }
    }
}
