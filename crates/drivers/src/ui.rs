use std::time::Duration;

use eframe::egui;
use folio_adapters::SystemClock;
use folio_application::{Clock, NavKey, Route, SiteSession, NAV_ITEMS};
use folio_domain::{Category, Column, ContactField, ImageId, Lightbox};

const KEY_BINDINGS: [(egui::Key, NavKey); 3] = [
    (egui::Key::ArrowRight, NavKey::ArrowRight),
    (egui::Key::ArrowLeft, NavKey::ArrowLeft),
    (egui::Key::Escape, NavKey::Escape),
];
const COVER_HEIGHT: f32 = 280.0;
const THUMB_SIZE: f32 = 160.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LightboxAction {
    Previous,
    Next,
    Close,
}

struct FolioApp {
    site: SiteSession,
    clock: SystemClock,
    contact_status: Option<String>,
}

impl FolioApp {
    fn new(site: SiteSession) -> Self {
        Self {
            site,
            clock: SystemClock,
            contact_status: None,
        }
    }

    fn forward_keys(&self, ctx: &egui::Context) {
        let pressed: Vec<NavKey> = ctx.input(|input| {
            KEY_BINDINGS
                .into_iter()
                .filter(|(key, _)| input.key_pressed(*key))
                .map(|(_, nav)| nav)
                .collect()
        });
        for key in pressed {
            self.site.dispatch_key(key);
        }
    }

    fn show_splash(&self, ctx: &egui::Context, remaining_ms: u64) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(ui.available_height() * 0.4);
                ui.heading(egui::RichText::new(&self.site.studio().studio_name).size(48.0));
                ui.label("PHOTOGRAPHY");
                ui.add(egui::Spinner::new());
            });
        });
        ctx.request_repaint_after(Duration::from_millis(remaining_ms.min(100)));
    }

    fn show_navigation(&self, ctx: &egui::Context) -> Option<Route> {
        let current = self.site.route();
        let mut target = None;
        egui::TopBottomPanel::top("navigation").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let brand = egui::RichText::new(&self.site.studio().studio_name).strong();
                if ui.add(egui::Button::new(brand).frame(false)).clicked() {
                    target = Some(Route::Home);
                }
                ui.separator();
                for item in NAV_ITEMS {
                    if ui.selectable_label(item.is_active(current), item.name).clicked() {
                        target = Some(item.route);
                    }
                }
            });
        });
        target
    }

    fn show_home(&self, ui: &mut egui::Ui) -> Option<Route> {
        let mut target = None;
        ui.vertical_centered(|ui| {
            ui.add_space(40.0);
            ui.heading(egui::RichText::new(&self.site.studio().studio_name).size(56.0));
            ui.label(
                Category::CONCRETE
                    .iter()
                    .map(|category| category.label())
                    .collect::<Vec<_>>()
                    .join("  •  "),
            );
            ui.add_space(24.0);
            ui.horizontal(|ui| {
                if ui.button("View Portfolio").clicked() {
                    target = Some(Route::Portfolio);
                }
                if ui.button("Get In Touch").clicked() {
                    target = Some(Route::Contact);
                }
                if ui.button("View Clients").clicked() {
                    target = Some(Route::Clients);
                }
            });
            if let Some(cover) = self.site.catalog().cover(Category::All) {
                ui.add_space(24.0);
                ui.add(egui::Image::new(cover.as_str()).max_height(COVER_HEIGHT * 1.5));
            }
        });
        target
    }

    fn show_portfolio(&self, ui: &mut egui::Ui) -> Option<Route> {
        let mut target = None;
        for entry in self.site.portfolio() {
            ui.group(|ui| {
                ui.horizontal(|ui| {
                    match &entry.cover {
                        Some(cover) => {
                            ui.add(egui::Image::new(cover.as_str()).max_height(COVER_HEIGHT));
                        }
                        None => {
                            ui.label("no images yet");
                        }
                    }
                    ui.vertical(|ui| {
                        ui.heading(&entry.title);
                        ui.label(format!(
                            "{} images",
                            self.site.catalog().len(entry.category)
                        ));
                        if ui.button("Explore →").clicked() {
                            target = Some(Route::parse(&entry.href));
                        }
                    });
                });
            });
            ui.add_space(12.0);
        }
        target
    }

    fn show_gallery(&self, ui: &mut egui::Ui) {
        let Some(view) = self.site.gallery() else {
            return;
        };
        let (active, layout) = {
            let controller = view.controller();
            (controller.active_category(), controller.columns().clone())
        };

        let mut selected_category = None;
        ui.heading(egui::RichText::new(active.label()).size(40.0));
        ui.horizontal(|ui| {
            for category in Category::TABS {
                if ui.selectable_label(category == active, category.label()).clicked() {
                    selected_category = Some(category);
                }
            }
        });
        ui.separator();

        let mut clicked: Option<ImageId> = None;
        if layout.is_empty() {
            ui.label("No images in this category yet.");
        } else {
            ui.columns(3, |columns| {
                for column in Column::ORDER {
                    let ui = &mut columns[column.offset()];
                    let width = ui.available_width();
                    for (index, image) in layout.positions(column) {
                        let response = ui
                            .add(
                                egui::Image::new(image.as_str())
                                    .max_width(width)
                                    .sense(egui::Sense::click()),
                            )
                            .on_hover_text(format!("Gallery image {}", index + 1));
                        if response.clicked() {
                            clicked = Some(image.clone());
                        }
                        ui.add_space(12.0);
                    }
                }
            });
        }

        if let Some(category) = selected_category {
            view.controller_mut().select_category(category);
        }
        if let Some(image) = clicked {
            view.controller_mut().open(&image);
        }
    }

    fn show_lightbox(&self, ctx: &egui::Context) {
        let Some(view) = self.site.gallery() else {
            return;
        };
        let (lightbox, total) = {
            let controller = view.controller();
            (controller.lightbox().clone(), controller.current_images().len())
        };
        let Lightbox::Open { image, index } = &lightbox else {
            return;
        };

        let mut action = None;
        let max_size = ctx.screen_rect().size() * 0.8;
        let response = egui::Modal::new(egui::Id::new("lightbox")).show(ctx, |ui| {
            ui.add(egui::Image::new(image.as_str()).max_size(max_size));
            ui.horizontal(|ui| {
                if ui.button("◀").clicked() {
                    action = Some(LightboxAction::Previous);
                }
                ui.label(lightbox_caption(*index, total));
                if ui.button("▶").clicked() {
                    action = Some(LightboxAction::Next);
                }
                if ui.button("✕").clicked() {
                    action = Some(LightboxAction::Close);
                }
            });
        });
        if response.should_close() {
            action = Some(LightboxAction::Close);
        }

        let mut controller = view.controller_mut();
        match action {
            Some(LightboxAction::Previous) => {
                controller.previous();
            }
            Some(LightboxAction::Next) => {
                controller.next();
            }
            Some(LightboxAction::Close) => {
                controller.close();
            }
            None => {}
        }
    }

    fn show_clients(&self, ui: &mut egui::Ui) {
        let studio = self.site.studio();
        ui.heading("OUR CLIENTS");
        ui.horizontal_wrapped(|ui| {
            for client in &studio.clients {
                ui.vertical(|ui| {
                    ui.add(
                        egui::Image::new(client.logo.as_str())
                            .fit_to_exact_size(egui::vec2(THUMB_SIZE, THUMB_SIZE)),
                    );
                    ui.label(&client.name);
                });
            }
        });
        ui.add_space(24.0);
        ui.horizontal(|ui| {
            for stat in &studio.stats {
                ui.vertical_centered(|ui| {
                    ui.label(egui::RichText::new(&stat.value).size(36.0).strong());
                    ui.label(&stat.label);
                });
                ui.add_space(32.0);
            }
        });
        ui.add_space(24.0);
        ui.heading("TESTIMONIALS");
        for testimonial in &studio.testimonials {
            ui.group(|ui| {
                ui.horizontal(|ui| {
                    ui.add(
                        egui::Image::new(testimonial.image.as_str())
                            .fit_to_exact_size(egui::vec2(THUMB_SIZE * 0.5, THUMB_SIZE * 0.5)),
                    );
                    ui.vertical(|ui| {
                        ui.label(egui::RichText::new(&testimonial.quote).italics());
                        ui.label(format!("— {}, {}", testimonial.author, testimonial.company));
                    });
                });
            });
        }
    }

    fn show_contact(&mut self, ui: &mut egui::Ui) {
        ui.heading("LET'S WORK TOGETHER");
        let details = &self.site.studio().contact;
        egui::Grid::new("contact_details")
            .num_columns(2)
            .spacing([16.0, 4.0])
            .show(ui, |ui| {
                for (label, value) in [
                    ("Email", &details.email),
                    ("Phone", &details.phone),
                    ("Location", &details.location),
                ] {
                    ui.label(egui::RichText::new(label).strong());
                    ui.label(value);
                    ui.end_row();
                }
            });
        if !details.social.is_empty() {
            ui.label(format!("Follow: {}", details.social.join(" · ")));
        }
        ui.add_space(16.0);
        egui::Grid::new("contact_form")
            .num_columns(2)
            .spacing([16.0, 8.0])
            .show(ui, |ui| {
                for field in ContactField::ALL {
                    ui.label(field.label());
                    let value = self.site.contact_mut().field_mut(field);
                    let edit = if field.is_multiline() {
                        egui::TextEdit::multiline(value)
                    } else {
                        egui::TextEdit::singleline(value)
                    };
                    ui.add(edit.hint_text(field.placeholder()).desired_width(360.0));
                    ui.end_row();
                }
            });
        ui.add_space(12.0);
        if ui.button("SEND MESSAGE").clicked() {
            self.contact_status = Some(match self.site.contact_mut().submit() {
                Ok(inquiry) => format!("Thank you {}, we'll be in touch.", inquiry.full_name),
                Err(error) => error.to_string(),
            });
        }
        if let Some(status) = &self.contact_status {
            ui.label(status);
        }
    }
}

impl eframe::App for FolioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let remaining = self
            .site
            .preloader()
            .remaining_ms(self.clock.now_millis());
        if remaining > 0 {
            self.show_splash(ctx, remaining);
            return;
        }

        self.forward_keys(ctx);
        let mut target = self.show_navigation(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                let page_target = match self.site.route() {
                    Route::Home => self.show_home(ui),
                    Route::Portfolio => self.show_portfolio(ui),
                    Route::Gallery { .. } => {
                        self.show_gallery(ui);
                        None
                    }
                    Route::Clients => {
                        self.show_clients(ui);
                        None
                    }
                    Route::Contact => {
                        self.show_contact(ui);
                        None
                    }
                };
                target = target.or(page_target);
            });
        });
        self.show_lightbox(ctx);

        if let Some(route) = target {
            if route != Route::Contact {
                self.contact_status = None;
            }
            self.site.go_to(route);
        }
    }
}

fn lightbox_caption(index: usize, total: usize) -> String {
    format!("{} / {}", index + 1, total)
}

pub fn launch_window(site: SiteSession, window_size: [f32; 2]) -> Result<(), String> {
    let title = format!("{} | portfolio", site.studio().studio_name);
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(window_size)
            .with_title(title),
        ..Default::default()
    };

    eframe::run_native(
        "folio",
        options,
        Box::new(|cc| {
            egui_extras::install_image_loaders(&cc.egui_ctx);
            Ok(Box::new(FolioApp::new(site)))
        }),
    )
    .map_err(|error| format!("failed to start UI: {error}"))
}
