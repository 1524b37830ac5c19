use folio_domain::{ContactInquiry, ImageCatalog};

use crate::ApplicationError;

pub trait CatalogSource {
    fn load_catalog(&self) -> Result<ImageCatalog, ApplicationError>;

    fn describe(&self) -> String;
}

pub trait InquirySink {
    fn deliver(&self, inquiry: &ContactInquiry) -> Result<(), ApplicationError>;
}

pub trait Clock {
    fn now_millis(&self) -> u64;
}
