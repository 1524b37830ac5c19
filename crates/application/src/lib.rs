mod contact;
mod error;
mod gallery;
mod keyboard;
mod navigation;
mod ports;
mod preloader;
mod site;

pub use contact::ContactController;
pub use error::ApplicationError;
pub use gallery::{GalleryController, GalleryView};
pub use keyboard::{KeyListener, KeySubscription, KeyboardHub, NavKey};
pub use navigation::{NavItem, Route, NAV_ITEMS};
pub use ports::{CatalogSource, Clock, InquirySink};
pub use preloader::{Preloader, DEFAULT_SPLASH_MS};
pub use site::SiteSession;
