use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    response::IntoResponse,
};
use saiyana_contact::{ServiceType, Submission, SubmissionForm};
use saiyana_notification::contact::{acknowledgment_email, admin_email};
use serde::{Deserialize, Serialize};
use strum::VariantArray;

use crate::{error::ApiError, routes::AppState, template};

#[derive(askama::Template)]
#[template(path = "contact.html")]
pub struct ContactTemplate {
    pub services: &'static [ServiceType],
}

pub async fn page() -> impl IntoResponse {
    template::render(ContactTemplate {
        services: ServiceType::VARIANTS,
    })
}

/// Wire response for `POST /api/contact`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ContactResponse {
    pub fn error(error: impl Into<String>) -> Self {
        Self {
            error: Some(error.into()),
            ..Self::default()
        }
    }
}

/// Relay a form submission as two emails: the operator notification, then
/// the customer acknowledgment.
///
/// The operator notification is the primary obligation; its failure fails
/// the request. A failed acknowledgment only downgrades the response to a
/// success-with-warning.
#[tracing::instrument(skip_all)]
pub async fn submit(
    State(state): State<AppState>,
    payload: Result<Json<SubmissionForm>, JsonRejection>,
) -> Result<Json<ContactResponse>, ApiError> {
    let Json(form) = payload.map_err(|err| {
        tracing::debug!(%err, "Rejecting malformed submission body");
        ApiError::InvalidBody
    })?;

    let submission = form.validate()?;

    let Some(email) = &state.email else {
        return Err(ApiError::NotConfigured);
    };

    tracing::info!(
        from = %submission.email(),
        name = %submission.name(),
        "Contact form submission received"
    );

    let notification = admin_email(&submission, state.config.email.contact_address.as_str())?;
    email
        .send(&notification)
        .await
        .map_err(ApiError::AdminDispatch)?;

    let acknowledgment = acknowledgment_email(&submission)?;
    if let Err(err) = email.send(&acknowledgment).await {
        tracing::warn!("Acknowledgment email failed: {err:#}");
        return Ok(Json(ContactResponse {
            success: true,
            warning: Some(ack_warning(&submission).to_string()),
            ..ContactResponse::default()
        }));
    }

    Ok(Json(ContactResponse {
        success: true,
        message: Some(success_message(&submission).to_string()),
        ..ContactResponse::default()
    }))
}

fn success_message(submission: &Submission) -> &'static str {
    match submission {
        Submission::Quote(_) => "Quote request received and confirmation emails sent",
        Submission::Message(_) => "Message received and confirmation emails sent",
    }
}

fn ack_warning(submission: &Submission) -> &'static str {
    match submission {
        Submission::Quote(_) => "Quote received, but confirmation email could not be sent",
        Submission::Message(_) => "Message received, but confirmation email could not be sent",
    }
}
