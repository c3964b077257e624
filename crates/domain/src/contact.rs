//! Contact form — client-side presence check and local acknowledgment.
//!
//! Nothing is sent anywhere; a valid submission is only acknowledged.

/// Alert shown when any field is missing.
pub const MISSING_FIELDS_MESSAGE: &str = "Please fill in all fields.";

/// Alert shown for a complete submission.
pub const THANK_YOU_MESSAGE: &str = "Thank you for your message! I'll get back to you soon.";

/// Ids of the form fields, in form order.
pub const FIELD_IDS: [&str; 4] = ["name", "email", "subject", "message"];

/// Values read from the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactSubmission {
    /// Build a submission from `(field id, value)` pairs; unknown ids are ignored.
    #[must_use]
    pub fn from_fields<'a>(fields: impl IntoIterator<Item = (&'a str, String)>) -> Self {
        let mut submission = Self::default();
        for (id, value) in fields {
            match id {
                "name" => submission.name = value,
                "email" => submission.email = value,
                "subject" => submission.subject = value,
                "message" => submission.message = value,
                _ => {}
            }
        }
        submission
    }

    /// Ids of the fields left blank (whitespace counts as blank).
    #[must_use]
    pub fn missing_fields(&self) -> Vec<&'static str> {
        FIELD_IDS
            .into_iter()
            .zip([&self.name, &self.email, &self.subject, &self.message])
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(id, _)| id)
            .collect()
    }

    /// Check that every field is filled.
    ///
    /// # Errors
    ///
    /// Returns [`ContactError::MissingFields`] listing the blank fields.
    pub fn validate(&self) -> Result<(), ContactError> {
        let missing = self.missing_fields();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(ContactError::MissingFields(missing))
        }
    }
}

/// Reasons a submission is refused.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContactError {
    /// Displays as the user-facing alert text.
    #[error("Please fill in all fields.")]
    MissingFields(Vec<&'static str>),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> ContactSubmission {
        ContactSubmission {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            subject: "Hello".to_string(),
            message: "Nice site".to_string(),
        }
    }

    #[test]
    fn should_accept_complete_submission() {
        assert_eq!(complete().validate(), Ok(()));
    }

    #[test]
    fn should_reject_when_message_is_empty() {
        let mut submission = complete();
        submission.message = String::new();
        assert_eq!(
            submission.validate(),
            Err(ContactError::MissingFields(vec!["message"]))
        );
    }

    #[test]
    fn should_treat_whitespace_as_missing() {
        let mut submission = complete();
        submission.name = "   ".to_string();
        submission.subject = "\n".to_string();
        assert_eq!(submission.missing_fields(), vec!["name", "subject"]);
    }

    #[test]
    fn should_display_alert_text_for_missing_fields() {
        let err = ContactError::MissingFields(vec!["email"]);
        assert_eq!(err.to_string(), MISSING_FIELDS_MESSAGE);
    }

    #[test]
    fn should_build_from_field_pairs() {
        let submission = ContactSubmission::from_fields([
            ("name", "Ada".to_string()),
            ("email", "ada@example.com".to_string()),
            ("phone", "ignored".to_string()),
        ]);
        assert_eq!(submission.name, "Ada");
        assert_eq!(submission.email, "ada@example.com");
        assert_eq!(submission.missing_fields(), vec!["subject", "message"]);
    }
}
