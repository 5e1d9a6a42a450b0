//! Email bodies for contact-page submissions, one template per audience.
//!
//! User-supplied text is interpolated through askama, which HTML-escapes
//! by default.

use askama::Template;
use saiyana_contact::{ContactMessage, QuoteRequest, Submission};
use time::Date;
use time::macros::format_description;

use crate::OutgoingEmail;

#[derive(Template)]
#[template(path = "quote_admin.html")]
struct QuoteAdminTemplate<'a> {
    quote: &'a QuoteRequest,
    start_date: Option<String>,
}

#[derive(Template)]
#[template(path = "quote_acknowledgment.html")]
struct QuoteAcknowledgmentTemplate<'a> {
    quote: &'a QuoteRequest,
    start_date: Option<String>,
}

#[derive(Template)]
#[template(path = "message_admin.html")]
struct MessageAdminTemplate<'a> {
    message: &'a ContactMessage,
}

#[derive(Template)]
#[template(path = "message_acknowledgment.html")]
struct MessageAcknowledgmentTemplate<'a> {
    message: &'a ContactMessage,
}

/// Operator notification. Reply-to is the submitter, so staff can answer
/// straight from their inbox.
pub fn admin_email(submission: &Submission, to: impl Into<String>) -> anyhow::Result<OutgoingEmail> {
    let (subject, html) = match submission {
        Submission::Quote(quote) => (
            format!("New Quote Request from {}", quote.company_name),
            QuoteAdminTemplate {
                quote,
                start_date: quote.start_date.map(format_date),
            }
            .render()?,
        ),
        Submission::Message(message) => (
            format!("New Contact Form Submission from {}", message.name),
            MessageAdminTemplate { message }.render()?,
        ),
    };

    Ok(OutgoingEmail {
        to: to.into(),
        subject,
        html,
        reply_to: Some(submission.email().to_owned()),
    })
}

/// Customer acknowledgment, dispatched only after the operator notification
/// succeeded.
pub fn acknowledgment_email(submission: &Submission) -> anyhow::Result<OutgoingEmail> {
    let (subject, html) = match submission {
        Submission::Quote(quote) => (
            "Your Quote Request - Saiyana Logistics".to_owned(),
            QuoteAcknowledgmentTemplate {
                quote,
                start_date: quote.start_date.map(format_date),
            }
            .render()?,
        ),
        Submission::Message(message) => (
            "Thank you for contacting Saiyana Logistics".to_owned(),
            MessageAcknowledgmentTemplate { message }.render()?,
        ),
    };

    Ok(OutgoingEmail {
        to: submission.email().to_owned(),
        subject,
        html,
        reply_to: None,
    })
}

fn format_date(date: Date) -> String {
    date.format(format_description!("[month repr:long] [day padding:none], [year]"))
        .unwrap_or_else(|_| date.to_string())
}
