use folio_application::{ApplicationError, InquirySink};
use folio_domain::ContactInquiry;
use tracing::info;

/// Writes enquiries to the log. Nothing leaves the machine.
#[derive(Debug, Default)]
pub struct TracingInquirySink;

impl InquirySink for TracingInquirySink {
    fn deliver(&self, inquiry: &ContactInquiry) -> Result<(), ApplicationError> {
        let payload = serde_json::to_string(inquiry)
            .map_err(|error| ApplicationError::Decode(error.to_string()))?;
        info!(target: "folio::contact", %payload, "form submitted");
        Ok(())
    }
}
