//! Contact form — validates on submit and acknowledges locally.

use tracing::{debug, info};

use folio_domain::contact::{ContactError, ContactSubmission, FIELD_IDS, THANK_YOU_MESSAGE};
use folio_domain::error::{FolioError, MissingElementError};

use crate::ports::ContactSurface;

/// Selector reported when the page has no contact form.
pub const FORM_SELECTOR: &str = ".contact-form";

pub struct ContactForm<D> {
    surface: D,
}

impl<D: ContactSurface> ContactForm<D> {
    pub fn new(surface: D) -> Self {
        Self { surface }
    }

    #[must_use]
    pub fn surface(&self) -> &D {
        &self.surface
    }

    /// # Errors
    ///
    /// Returns [`FolioError::MissingElement`] when the page has no form.
    pub fn ensure_present(&self) -> Result<(), FolioError> {
        if self.surface.has_form() {
            Ok(())
        } else {
            Err(MissingElementError::new(FORM_SELECTOR).into())
        }
    }

    /// Handle a submit: read the fields, alert the outcome, reset on success.
    ///
    /// A missing field element reads as empty.
    ///
    /// # Errors
    ///
    /// Returns [`ContactError::MissingFields`] when any field is blank; the
    /// form keeps its values.
    pub fn submit(&self) -> Result<ContactSubmission, ContactError> {
        let submission = ContactSubmission::from_fields(
            FIELD_IDS
                .into_iter()
                .map(|id| (id, self.surface.field_value(id).unwrap_or_default())),
        );

        if let Err(err) = submission.validate() {
            debug!(error = ?err, "contact form rejected");
            self.surface.alert(&err.to_string());
            return Err(err);
        }

        info!(subject = %submission.subject, "contact form acknowledged");
        self.surface.alert(THANK_YOU_MESSAGE);
        self.surface.reset_form();
        Ok(submission)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_domain::contact::MISSING_FIELDS_MESSAGE;
    use std::cell::{Cell, RefCell};
    use std::collections::HashMap;

    #[derive(Default)]
    struct FakeForm {
        present: bool,
        fields: RefCell<HashMap<&'static str, String>>,
        alerts: RefCell<Vec<String>>,
        resets: Cell<usize>,
    }

    impl FakeForm {
        fn filled(values: [&str; 4]) -> Self {
            let form = Self {
                present: true,
                ..Self::default()
            };
            for (id, value) in FIELD_IDS.into_iter().zip(values) {
                form.fields.borrow_mut().insert(id, value.to_string());
            }
            form
        }
    }

    impl ContactSurface for FakeForm {
        fn has_form(&self) -> bool {
            self.present
        }

        fn field_value(&self, id: &str) -> Option<String> {
            self.fields.borrow().get(id).cloned()
        }

        fn alert(&self, message: &str) {
            self.alerts.borrow_mut().push(message.to_string());
        }

        fn reset_form(&self) {
            self.fields.borrow_mut().clear();
            self.resets.set(self.resets.get() + 1);
        }
    }

    #[test]
    fn should_thank_and_reset_when_complete() {
        let form = ContactForm::new(FakeForm::filled(["Ada", "ada@example.com", "Hi", "Hello"]));

        let submission = form.submit().unwrap();

        assert_eq!(submission.name, "Ada");
        assert_eq!(*form.surface().alerts.borrow(), vec![THANK_YOU_MESSAGE]);
        assert_eq!(form.surface().resets.get(), 1);
        assert!(form.surface().fields.borrow().is_empty());
    }

    #[test]
    fn should_alert_and_keep_values_when_message_is_empty() {
        let form = ContactForm::new(FakeForm::filled(["Ada", "ada@example.com", "Hi", ""]));

        let err = form.submit().unwrap_err();

        assert_eq!(err, ContactError::MissingFields(vec!["message"]));
        assert_eq!(*form.surface().alerts.borrow(), vec![MISSING_FIELDS_MESSAGE]);
        assert_eq!(form.surface().resets.get(), 0);
        assert_eq!(form.surface().fields.borrow().len(), 4);
    }

    #[test]
    fn should_treat_absent_field_as_missing() {
        let form = ContactForm::new(FakeForm::filled(["Ada", "ada@example.com", "Hi", "Hello"]));
        form.surface().fields.borrow_mut().remove("email");

        assert_eq!(
            form.submit(),
            Err(ContactError::MissingFields(vec!["email"]))
        );
    }

    #[test]
    fn should_report_missing_form() {
        let form = ContactForm::new(FakeForm::default());
        assert!(matches!(
            form.ensure_present(),
            Err(FolioError::MissingElement(e)) if e.selector == FORM_SELECTOR
        ));
    }
}
