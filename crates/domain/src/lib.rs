mod catalog;
mod category;
mod contact;
mod error;
mod image;
mod layout;
mod lightbox;
mod studio;

pub use catalog::ImageCatalog;
pub use category::Category;
pub use contact::{ContactField, ContactForm, ContactInquiry};
pub use error::DomainError;
pub use image::ImageId;
pub use layout::{Column, ColumnLayout, COLUMN_COUNT};
pub use lightbox::Lightbox;
pub use studio::{Client, ContactDetails, PortfolioEntry, Stat, StudioContent, Testimonial};
