use std::rc::Rc;

use folio_domain::{ImageCatalog, PortfolioEntry, StudioContent};
use tracing::info;

use crate::contact::ContactController;
use crate::gallery::GalleryView;
use crate::keyboard::{KeyboardHub, NavKey};
use crate::navigation::Route;
use crate::preloader::Preloader;
use crate::{Clock, InquirySink};

/// Everything one visitor session needs: routing, the mounted gallery (if
/// any), the contact form and the splash screen.
pub struct SiteSession {
    catalog: Rc<ImageCatalog>,
    studio: StudioContent,
    route: Route,
    keyboard: KeyboardHub,
    gallery: Option<GalleryView>,
    contact: ContactController,
    preloader: Preloader,
}

impl SiteSession {
    pub fn new(
        catalog: Rc<ImageCatalog>,
        studio: StudioContent,
        sink: Box<dyn InquirySink>,
        clock: &dyn Clock,
        splash_ms: u64,
    ) -> Self {
        Self {
            catalog,
            studio,
            route: Route::Home,
            keyboard: KeyboardHub::new(),
            gallery: None,
            contact: ContactController::new(sink),
            preloader: Preloader::start(clock, splash_ms),
        }
    }

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn catalog(&self) -> &ImageCatalog {
        &self.catalog
    }

    pub fn studio(&self) -> &StudioContent {
        &self.studio
    }

    pub fn portfolio(&self) -> Vec<PortfolioEntry> {
        PortfolioEntry::index(&self.catalog, |category| Route::gallery(category).href())
    }

    pub fn gallery(&self) -> Option<&GalleryView> {
        self.gallery.as_ref()
    }

    pub fn contact_mut(&mut self) -> &mut ContactController {
        &mut self.contact
    }

    pub fn preloader(&self) -> &Preloader {
        &self.preloader
    }

    pub fn keyboard(&self) -> &KeyboardHub {
        &self.keyboard
    }

    pub fn navigate(&mut self, location: &str) -> Route {
        self.go_to(Route::parse(location))
    }

    /// Moves to `route`. Any mounted gallery is unmounted first, and a fresh
    /// one is mounted when the target is a gallery, seeded with its category.
    pub fn go_to(&mut self, route: Route) -> Route {
        self.gallery = None;
        if let Route::Gallery { category } = route {
            self.gallery = Some(GalleryView::mount(
                &self.keyboard,
                Rc::clone(&self.catalog),
                Some(category.as_str()),
            ));
        }
        info!(from = %self.route.href(), to = %route.href(), "navigated");
        self.route = route;
        route
    }

    pub fn dispatch_key(&self, key: NavKey) -> bool {
        self.keyboard.dispatch(key) > 0
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use folio_domain::{Category, ContactInquiry, ImageId};

    use super::*;
    use crate::ApplicationError;

    struct FixedClock(Cell<u64>);

    impl Clock for FixedClock {
        fn now_millis(&self) -> u64 {
            self.0.get()
        }
    }

    struct DiscardSink;

    impl InquirySink for DiscardSink {
        fn deliver(&self, _inquiry: &ContactInquiry) -> Result<(), ApplicationError> {
            Ok(())
        }
    }

    fn session() -> SiteSession {
        let images: Vec<ImageId> = (0..6)
            .map(|index| ImageId::new(format!("https://img/nature/{index}.jpeg")).expect("id"))
            .collect();
        let catalog = ImageCatalog::new()
            .with_images(Category::Nature, images)
            .expect("catalog");
        SiteSession::new(
            Rc::new(catalog),
            StudioContent {
                studio_name: "Studio".to_string(),
                clients: Vec::new(),
                testimonials: Vec::new(),
                stats: Vec::new(),
                contact: Default::default(),
            },
            Box::new(DiscardSink),
            &FixedClock(Cell::new(0)),
            3_000,
        )
    }

    #[test]
    fn gallery_mounts_with_query_category() {
        let mut site = session();
        site.navigate("/gallery?category=nature");
        let gallery = site.gallery().expect("gallery mounted");
        assert_eq!(gallery.controller().active_category(), Category::Nature);
        assert_eq!(site.keyboard().listener_count(), 1);
    }

    #[test]
    fn leaving_gallery_detaches_keyboard() {
        let mut site = session();
        site.navigate("/gallery?category=nature");
        site.navigate("/contact");
        assert!(site.gallery().is_none());
        assert_eq!(site.keyboard().listener_count(), 0);
        assert!(!site.dispatch_key(NavKey::Escape));
    }

    #[test]
    fn remounting_gallery_keeps_single_listener() {
        let mut site = session();
        site.navigate("/gallery?category=nature");
        site.navigate("/gallery?category=all");
        site.navigate("/gallery?category=bogus");
        assert_eq!(site.keyboard().listener_count(), 1);
        let gallery = site.gallery().expect("gallery mounted");
        assert_eq!(gallery.controller().active_category(), Category::Food);
    }

    #[test]
    fn keys_reach_open_lightbox_once() {
        let mut site = session();
        site.navigate("/gallery?category=nature");
        site.gallery()
            .expect("gallery mounted")
            .controller_mut()
            .open_at(2);

        assert!(site.dispatch_key(NavKey::ArrowRight));
        let index = site
            .gallery()
            .and_then(|gallery| gallery.controller().lightbox().selected_index());
        assert_eq!(index, Some(3));
    }

    #[test]
    fn portfolio_lists_concrete_categories() {
        let site = session();
        let entries = site.portfolio();
        assert_eq!(entries.len(), 4);
        assert!(entries[2].cover.is_some());
        assert_eq!(entries[2].href, "/gallery?category=nature");
        assert_eq!(
            Route::parse(&entries[0].href),
            Route::gallery(Category::Food)
        );
    }
}
