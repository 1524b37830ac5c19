pub mod builtin;
pub mod fs;
pub mod inquiry;
pub mod json;
pub mod presenters;

pub use builtin::{builtin_studio_content, BuiltinCatalogSource};
pub use fs::{is_displayable, FolderCatalogSource, SystemClock};
pub use inquiry::TracingInquirySink;
pub use json::{write_catalog_json, JsonCatalogSource};
pub use presenters::{present_catalog_summary, present_columns, present_lightbox};
