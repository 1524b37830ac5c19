use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

use folio_domain::{Category, ColumnLayout, ImageCatalog, ImageId, Lightbox};
use tracing::debug;

use crate::keyboard::{KeyListener, KeySubscription, KeyboardHub, NavKey};

/// View state of the gallery page: active category, its projected images,
/// their column layout, and the lightbox.
#[derive(Debug, Clone)]
pub struct GalleryController {
    catalog: Rc<ImageCatalog>,
    active_category: Category,
    current_images: Vec<ImageId>,
    columns: ColumnLayout,
    lightbox: Lightbox,
}

impl GalleryController {
    pub fn new(catalog: Rc<ImageCatalog>, initial_category: Option<&str>) -> Self {
        let active_category = Category::resolve(initial_category);
        if initial_category.is_some_and(|token| token.parse::<Category>().is_err()) {
            debug!(token = ?initial_category, fallback = %active_category, "unrecognised category");
        }
        let mut controller = Self {
            catalog,
            active_category,
            current_images: Vec::new(),
            columns: ColumnLayout::default(),
            lightbox: Lightbox::Closed,
        };
        controller.reproject();
        controller
    }

    pub fn active_category(&self) -> Category {
        self.active_category
    }

    pub fn current_images(&self) -> &[ImageId] {
        &self.current_images
    }

    pub fn columns(&self) -> &ColumnLayout {
        &self.columns
    }

    pub fn lightbox(&self) -> &Lightbox {
        &self.lightbox
    }

    /// Switches category. An open lightbox is closed first, since its index
    /// refers to the previous list.
    pub fn select_category(&mut self, category: Category) {
        if self.lightbox.close() {
            debug!(from = %self.active_category, to = %category, "lightbox closed by category switch");
        }
        self.active_category = category;
        self.reproject();
    }

    pub fn open(&mut self, image: &ImageId) -> bool {
        let opened = self.lightbox.open(image, &self.current_images);
        if opened {
            debug!(index = ?self.lightbox.selected_index(), "lightbox opened");
        } else {
            debug!(%image, category = %self.active_category, "image not in current list");
        }
        opened
    }

    /// Opens at a flat position in the current list; out of range is a no-op.
    pub fn open_at(&mut self, index: usize) -> bool {
        match self.current_images.get(index).cloned() {
            Some(image) => self.open(&image),
            None => false,
        }
    }

    pub fn next(&mut self) -> bool {
        self.lightbox.next(&self.current_images)
    }

    pub fn previous(&mut self) -> bool {
        self.lightbox.previous(&self.current_images)
    }

    pub fn close(&mut self) -> bool {
        self.lightbox.close()
    }

    /// Keyboard handling, honoured only while the lightbox is open.
    pub fn handle_key(&mut self, key: NavKey) -> bool {
        if !self.lightbox.is_open() {
            return false;
        }
        match key {
            NavKey::ArrowRight => self.next(),
            NavKey::ArrowLeft => self.previous(),
            NavKey::Escape => self.close(),
        }
    }

    fn reproject(&mut self) {
        self.current_images = self.catalog.project(self.active_category).into_owned();
        self.columns = ColumnLayout::partition(&self.current_images);
        debug!(
            category = %self.active_category,
            images = self.current_images.len(),
            "gallery reprojected"
        );
    }
}

impl KeyListener for GalleryController {
    fn on_key(&mut self, key: NavKey) -> bool {
        self.handle_key(key)
    }
}

/// A mounted gallery page. Holds the key subscription for its whole
/// lifetime; dropping the view detaches it.
pub struct GalleryView {
    controller: Rc<RefCell<GalleryController>>,
    _subscription: KeySubscription,
}

impl GalleryView {
    pub fn mount(
        hub: &KeyboardHub,
        catalog: Rc<ImageCatalog>,
        initial_category: Option<&str>,
    ) -> Self {
        let controller = Rc::new(RefCell::new(GalleryController::new(
            catalog,
            initial_category,
        )));
        let subscription = hub.subscribe(controller.clone());
        Self {
            controller,
            _subscription: subscription,
        }
    }

    pub fn controller(&self) -> Ref<'_, GalleryController> {
        self.controller.borrow()
    }

    pub fn controller_mut(&self) -> RefMut<'_, GalleryController> {
        self.controller.borrow_mut()
    }
}
