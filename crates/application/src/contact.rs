use folio_domain::{ContactField, ContactForm, ContactInquiry};
use tracing::{debug, info};

use crate::{ApplicationError, InquirySink};

pub struct ContactController {
    form: ContactForm,
    sink: Box<dyn InquirySink>,
}

impl ContactController {
    pub fn new(sink: Box<dyn InquirySink>) -> Self {
        Self {
            form: ContactForm::default(),
            sink,
        }
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn field_mut(&mut self, field: ContactField) -> &mut String {
        self.form.field_mut(field)
    }

    pub fn update(&mut self, field: ContactField, value: impl Into<String>) {
        self.form.set(field, value);
    }

    /// Validates and hands off the form, then clears it. A rejected form is
    /// left untouched so the visitor can correct it.
    pub fn submit(&mut self) -> Result<ContactInquiry, ApplicationError> {
        let inquiry = self.form.validate().inspect_err(|error| {
            debug!(%error, "contact form rejected");
        })?;
        self.sink.deliver(&inquiry)?;
        info!(email = %inquiry.email, company = %inquiry.company, "contact inquiry submitted");
        self.form.reset();
        Ok(inquiry)
    }
}
