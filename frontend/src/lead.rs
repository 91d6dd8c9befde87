//! Lead-capture form data and the submit pipeline.
//!
//! A submit runs validate, normalize, deliver and settle in that order.
//! Delivery is a single attempt raced against a deadline; the form is only
//! cleared after the transport confirms.

use futures::future::{self, Either};
use std::fmt;
use std::future::Future;
use thiserror::Error;

use crate::transport::{NotificationPayload, NotificationTransport, TransportError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    FirstName,
    LastName,
    Email,
    Phone,
    Country,
    Service,
    Timeframe,
    Message,
}

impl TextField {
    pub fn label(&self) -> &'static str {
        match self {
            TextField::FirstName => "first name",
            TextField::LastName => "last name",
            TextField::Email => "email",
            TextField::Phone => "phone",
            TextField::Country => "destination country",
            TextField::Service => "service",
            TextField::Timeframe => "preferred timeframe",
            TextField::Message => "message",
        }
    }
}

impl fmt::Display for TextField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One field-level edit coming from an input element.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldEdit {
    Text(TextField, String),
    Consent(bool),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct LeadFormData {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub country: String,
    pub service: String,
    pub timeframe: String,
    pub message: String,
    pub consent: bool,
}

impl LeadFormData {
    pub fn get(&self, field: TextField) -> &str {
        match field {
            TextField::FirstName => &self.first_name,
            TextField::LastName => &self.last_name,
            TextField::Email => &self.email,
            TextField::Phone => &self.phone,
            TextField::Country => &self.country,
            TextField::Service => &self.service,
            TextField::Timeframe => &self.timeframe,
            TextField::Message => &self.message,
        }
    }

    fn slot(&mut self, field: TextField) -> &mut String {
        match field {
            TextField::FirstName => &mut self.first_name,
            TextField::LastName => &mut self.last_name,
            TextField::Email => &mut self.email,
            TextField::Phone => &mut self.phone,
            TextField::Country => &mut self.country,
            TextField::Service => &mut self.service,
            TextField::Timeframe => &mut self.timeframe,
            TextField::Message => &mut self.message,
        }
    }

    /// Replaces exactly the edited field.
    pub fn apply(&mut self, edit: FieldEdit) {
        match edit {
            FieldEdit::Text(field, value) => *self.slot(field) = value,
            FieldEdit::Consent(consent) => self.consent = consent,
        }
    }

    pub fn full_name(&self) -> String {
        [self.first_name.trim(), self.last_name.trim()]
            .iter()
            .filter(|part| !part.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Folds the secondary fields into the free-text body.
    pub fn to_payload(&self) -> NotificationPayload {
        let mut lines = Vec::new();
        if !self.message.trim().is_empty() {
            lines.push(self.message.trim().to_string());
        }
        if !self.timeframe.trim().is_empty() {
            lines.push(format!("Preferred timeframe: {}", self.timeframe.trim()));
        }
        lines.push(format!(
            "Consent to contact: {}",
            if self.consent { "yes" } else { "no" }
        ));

        NotificationPayload {
            name: self.full_name(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            country: self.country.trim().to_string(),
            service: self.service.trim().to_string(),
            message: lines.join("\n"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RequiredFields(Vec<TextField>);

impl RequiredFields {
    pub fn new(fields: &[TextField]) -> Self {
        Self(fields.to_vec())
    }

    /// Full lead-capture form on the home page.
    pub fn lead() -> Self {
        Self::new(&[
            TextField::FirstName,
            TextField::LastName,
            TextField::Email,
            TextField::Phone,
            TextField::Country,
        ])
    }

    /// Short contact form; its single name input feeds `FirstName`.
    pub fn contact() -> Self {
        Self::new(&[TextField::FirstName, TextField::Email])
    }

    pub fn contains(&self, field: TextField) -> bool {
        self.0.contains(&field)
    }

    pub fn validate(&self, form: &LeadFormData) -> Result<(), ValidationError> {
        match self.0.iter().find(|field| form.get(**field).trim().is_empty()) {
            Some(field) => Err(ValidationError::MissingField(*field)),
            None => Ok(()),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("please fill in your {0}")]
    MissingField(TextField),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SubmitError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error("notification service did not answer within the deadline")]
    Timeout,
}

/// What the user is told once a submit settles.
#[derive(Debug, Clone, PartialEq)]
pub enum Acknowledgement {
    Sent,
    Invalid(ValidationError),
    Failed,
    TimedOut,
}

impl Acknowledgement {
    pub fn is_success(&self) -> bool {
        matches!(self, Acknowledgement::Sent)
    }

    pub fn message(&self) -> String {
        match self {
            Acknowledgement::Sent => {
                "Thank you! Your message has been sent. Our team will get back to you shortly."
                    .to_string()
            }
            Acknowledgement::Invalid(err) => format!("Please check the form: {}.", err),
            Acknowledgement::Failed => {
                "Sorry, something went wrong. Please try again or contact us directly.".to_string()
            }
            Acknowledgement::TimedOut => {
                "Sorry, our server is taking too long to respond. Please try again or contact us directly."
                    .to_string()
            }
        }
    }
}

pub fn prepare(
    form: &LeadFormData,
    required: &RequiredFields,
) -> Result<NotificationPayload, ValidationError> {
    required.validate(form)?;
    Ok(form.to_payload())
}

/// One delivery attempt; whichever of transport and deadline finishes first
/// decides the outcome.
pub async fn deliver<T, D>(
    transport: &T,
    payload: NotificationPayload,
    deadline: D,
) -> Result<(), SubmitError>
where
    T: NotificationTransport + ?Sized,
    D: Future<Output = ()>,
{
    let send = transport.send(payload);
    let deadline = Box::pin(deadline);

    match future::select(send, deadline).await {
        Either::Left((Ok(result), _)) if result.success => Ok(()),
        Either::Left((Ok(result), _)) => Err(TransportError::Rejected(
            result.error.unwrap_or_else(|| "no reason given".to_string()),
        )
        .into()),
        Either::Left((Err(err), _)) => Err(err.into()),
        Either::Right(((), _)) => Err(SubmitError::Timeout),
    }
}

/// Clears the form only on success.
pub fn settle(form: &mut LeadFormData, outcome: &Result<(), SubmitError>) -> Acknowledgement {
    match outcome {
        Ok(()) => {
            *form = LeadFormData::default();
            Acknowledgement::Sent
        }
        Err(SubmitError::Validation(err)) => Acknowledgement::Invalid(err.clone()),
        Err(SubmitError::Transport(err)) => {
            log::warn!("lead submission failed: {}", err);
            Acknowledgement::Failed
        }
        Err(SubmitError::Timeout) => {
            log::warn!("lead submission timed out");
            Acknowledgement::TimedOut
        }
    }
}

pub async fn submit<T, D>(
    form: &mut LeadFormData,
    required: &RequiredFields,
    transport: &T,
    deadline: D,
) -> Acknowledgement
where
    T: NotificationTransport + ?Sized,
    D: Future<Output = ()>,
{
    let outcome = match prepare(form, required) {
        Ok(payload) => deliver(transport, payload, deadline).await,
        Err(err) => Err(err.into()),
    };
    settle(form, &outcome)
}

/// The form as one component instance sees it. While a submission is in
/// flight the record is locked, so the snapshot handed to `submit` and the
/// form it comes back as cannot drift apart.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LeadSession {
    form: LeadFormData,
    submitting: bool,
}

impl LeadSession {
    pub fn form(&self) -> &LeadFormData {
        &self.form
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Returns `false` when the edit was dropped because the form is locked.
    pub fn edit(&mut self, edit: FieldEdit) -> bool {
        if self.submitting {
            return false;
        }
        self.form.apply(edit);
        true
    }

    /// Locks the form and hands out the record to submit. `None` while a
    /// previous submission is still pending.
    pub fn begin(&mut self) -> Option<LeadFormData> {
        if self.submitting {
            return None;
        }
        self.submitting = true;
        Some(self.form.clone())
    }

    /// Takes back the record `submit` settled and unlocks the form.
    pub fn finish(&mut self, settled: LeadFormData) {
        self.form = settled;
        self.submitting = false;
    }
}
