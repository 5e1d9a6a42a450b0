use serde::{Deserialize, Serialize};
use thiserror::Error;
use time::Date;
use time::macros::format_description;

use crate::ServiceType;

/// Longest accepted free-text field (message, requirements).
pub const MAX_TEXT_LEN: usize = 5000;
/// Longest accepted single-line field.
pub const MAX_FIELD_LEN: usize = 200;

/// Raw form body as posted to `/api/contact`.
///
/// Every field is optional at the decode stage; [`SubmissionForm::validate`]
/// resolves the record into one of the typed submission shapes or rejects it
/// with a field-level reason before any email work happens.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SubmissionForm {
    pub name: String,
    pub email: String,
    pub message: String,
    pub company_name: String,
    pub service_type: String,
    pub shipment_volume: String,
    pub start_date: String,
    pub requirements: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("{0} must be at most {1} characters")]
    TooLong(&'static str, usize),

    #[error("invalid email format")]
    InvalidEmail,

    #[error("unknown service type: {0}")]
    UnknownServiceType(String),

    #[error("invalid start date: {0}")]
    InvalidStartDate(String),
}

/// A validated submission, ready for email dispatch.
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    Quote(QuoteRequest),
    Message(ContactMessage),
}

impl Submission {
    pub fn name(&self) -> &str {
        match self {
            Submission::Quote(quote) => &quote.name,
            Submission::Message(message) => &message.name,
        }
    }

    pub fn email(&self) -> &str {
        match self {
            Submission::Quote(quote) => &quote.email,
            Submission::Message(message) => &message.email,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct QuoteRequest {
    pub name: String,
    pub email: String,
    pub company_name: String,
    pub service_type: ServiceType,
    pub shipment_volume: Option<String>,
    pub start_date: Option<Date>,
    pub requirements: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl SubmissionForm {
    /// Resolve the raw form into a typed submission.
    ///
    /// The record is a quote request when any quote-only field is present,
    /// so a quote missing one of its required fields gets the quote-side
    /// error instead of being misread as a plain message.
    pub fn validate(&self) -> Result<Submission, ValidationError> {
        let name = required("name", &self.name, MAX_FIELD_LEN)?;
        let email = required("email", &self.email, MAX_FIELD_LEN)?;
        if !is_valid_email(&email) {
            return Err(ValidationError::InvalidEmail);
        }

        let is_quote = [&self.company_name, &self.service_type, &self.requirements]
            .iter()
            .any(|field| !field.trim().is_empty());

        if !is_quote {
            let message = required("message", &self.message, MAX_TEXT_LEN)?;
            return Ok(Submission::Message(ContactMessage {
                name,
                email,
                message,
            }));
        }

        let company_name = required("companyName", &self.company_name, MAX_FIELD_LEN)?;
        let service_type = required("serviceType", &self.service_type, MAX_FIELD_LEN)?;
        let service_type = service_type
            .parse::<ServiceType>()
            .map_err(|_| ValidationError::UnknownServiceType(service_type))?;
        let requirements = required("requirements", &self.requirements, MAX_TEXT_LEN)?;
        let shipment_volume = optional("shipmentVolume", &self.shipment_volume, MAX_FIELD_LEN)?;
        let start_date = match self.start_date.trim() {
            "" => None,
            raw => Some(parse_start_date(raw)?),
        };

        Ok(Submission::Quote(QuoteRequest {
            name,
            email,
            company_name,
            service_type,
            shipment_volume,
            start_date,
            requirements,
        }))
    }
}

fn required(field: &'static str, value: &str, max: usize) -> Result<String, ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ValidationError::MissingField(field));
    }
    if value.chars().count() > max {
        return Err(ValidationError::TooLong(field, max));
    }
    Ok(value.to_owned())
}

fn optional(
    field: &'static str,
    value: &str,
    max: usize,
) -> Result<Option<String>, ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    if value.chars().count() > max {
        return Err(ValidationError::TooLong(field, max));
    }
    Ok(Some(value.to_owned()))
}

/// Syntactic `local@domain.tld` check: no whitespace, a single `@`, and a
/// dot in the domain with non-empty labels either side.
fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !host.is_empty() && !tld.is_empty()
}

/// Start dates arrive in the HTML date-input format.
fn parse_start_date(raw: &str) -> Result<Date, ValidationError> {
    Date::parse(raw, format_description!("[year]-[month]-[day]"))
        .map_err(|_| ValidationError::InvalidStartDate(raw.to_owned()))
}
