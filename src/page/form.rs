//! Contact form validation.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

pub const SUCCESS_MESSAGE: &str = "Thank you for your message! We'll get back to you soon.";

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Company,
    Message,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub company: String,
    pub message: String,
}

impl ContactFields {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Company => &self.company,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Company => self.company = value,
            ContactField::Message => self.message = value,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Please fill in all required fields.")]
    MissingFields,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Company is optional; everything else must be non-empty, and the email
/// must look like `local@domain.tld`.
pub fn validate(fields: &ContactFields) -> Result<(), FormError> {
    if fields.name.is_empty() || fields.email.is_empty() || fields.message.is_empty() {
        return Err(FormError::MissingFields);
    }
    if !is_valid_email(&fields.email) {
        return Err(FormError::InvalidEmail);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactFields {
        ContactFields {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            company: String::new(),
            message: "Hello".to_string(),
        }
    }

    #[test]
    fn accepts_complete_form_without_company() {
        assert_eq!(validate(&filled()), Ok(()));
    }

    #[test]
    fn missing_required_fields_take_precedence() {
        for field in [ContactField::Name, ContactField::Email, ContactField::Message] {
            let mut fields = filled();
            fields.set(field, String::new());
            assert_eq!(validate(&fields), Err(FormError::MissingFields));
        }
    }

    #[test]
    fn rejects_malformed_email() {
        for email in ["ada", "ada@example", "@example.com", "ada @example.com", "a@b@c.d"] {
            let mut fields = filled();
            fields.email = email.to_string();
            assert_eq!(validate(&fields), Err(FormError::InvalidEmail), "{email}");
        }
    }

    #[test]
    fn error_messages_are_user_facing() {
        assert_eq!(
            FormError::MissingFields.to_string(),
            "Please fill in all required fields."
        );
        assert_eq!(
            FormError::InvalidEmail.to_string(),
            "Please enter a valid email address."
        );
    }

    #[test]
    fn field_accessors_round_trip() {
        let mut fields = ContactFields::default();
        fields.set(ContactField::Company, "Acme".to_string());
        assert_eq!(fields.get(ContactField::Company), "Acme");
        assert_eq!(fields.get(ContactField::Name), "");
    }
}
