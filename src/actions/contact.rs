// SPDX-License-Identifier: MPL-2.0
//! Contact form state and submission.
//!
//! Submissions are not sent anywhere; they are logged and the form resets.

/// Editable fields of the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

/// Why a submission was refused, as an i18n key for the warning notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    MissingFields,
    InvalidEmail,
}

impl Rejection {
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            Rejection::MissingFields => "notification-contact-missing-fields",
            Rejection::InvalidEmail => "notification-contact-invalid-email",
        }
    }
}

/// An accepted submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    name: String,
    email: String,
    message: String,
}

impl ContactForm {
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
    }

    #[must_use]
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    /// Validates and takes the form contents.
    ///
    /// On success the form is reset. On rejection it is left untouched so
    /// the user can correct it.
    ///
    /// # Errors
    ///
    /// Returns the [`Rejection`] when a field is blank or the email address
    /// is not of the form `local@domain`.
    pub fn submit(&mut self) -> Result<Submission, Rejection> {
        let name = self.name.trim();
        let email = self.email.trim();
        let message = self.message.trim();

        if name.is_empty() || email.is_empty() || message.is_empty() {
            return Err(Rejection::MissingFields);
        }
        if !looks_like_email(email) {
            return Err(Rejection::InvalidEmail);
        }

        let submission = Submission {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        };
        tracing::info!(
            name = %submission.name,
            email = %submission.email,
            length = submission.message.chars().count(),
            "contact form submitted"
        );
        *self = Self::default();
        Ok(submission)
    }
}

fn looks_like_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !email.contains(char::is_whitespace)
        }
        None => false,
    }
}
