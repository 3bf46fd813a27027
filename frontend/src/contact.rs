use log::{debug, info};
use serde::Serialize;
use thiserror::Error;

pub const CONFIRMATION_MESSAGE: &str = "Thank you for your interest! We will contact you soon.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Interest,
}

impl ContactField {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Interest => "interest",
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ContactError {
    #[error("Please fill in all fields")]
    MissingFields(Vec<ContactField>),
}

/// A validated lead, logged and then dropped.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub interest: String,
}

impl ContactSubmission {
    pub fn diagnostic_record(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| format!("{:?}", self))
    }
}

/// Current contents of the lead-capture form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub interest: String,
}

impl ContactForm {
    pub fn validate(&self) -> Result<ContactSubmission, ContactError> {
        let missing: Vec<ContactField> = [
            (ContactField::Name, &self.name),
            (ContactField::Email, &self.email),
            (ContactField::Interest, &self.interest),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect();

        if !missing.is_empty() {
            return Err(ContactError::MissingFields(missing));
        }

        Ok(ContactSubmission {
            name: self.name.clone(),
            email: self.email.clone(),
            interest: self.interest.clone(),
        })
    }

    pub fn prefill_interest(&mut self, product_id: &str) {
        self.interest = product_id.to_string();
    }

    pub fn reset(&mut self) {
        *self = ContactForm::default();
    }
}

/// Validates the form, logs the submission and clears the fields.
/// On rejection the form is left exactly as the user typed it.
pub fn handle_submit(form: &mut ContactForm) -> Result<ContactSubmission, ContactError> {
    let submission = form.validate().map_err(|err| {
        let ContactError::MissingFields(fields) = &err;
        let missing: Vec<&str> = fields.iter().map(ContactField::as_str).collect();
        debug!("Contact form rejected, missing {}", missing.join(", "));
        err
    })?;
    info!("Contact form submitted: {}", submission.diagnostic_record());
    form.reset();
    Ok(submission)
}
