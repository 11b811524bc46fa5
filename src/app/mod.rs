//! App module - contains the main application state and logic

pub mod hello;
pub mod notes;
mod views;

use crate::settings::Settings;
use crate::theme;
use crate::types::Tab;
use crate::utils::build_client;
use eframe::egui;
use hello::HelloPage;
use notes::NotesPage;
use std::path::PathBuf;

pub type DynError = Box<dyn std::error::Error + Send + Sync>;

// ============================================================================
// APP STATE
// ============================================================================

pub struct App {
    pub(crate) notes: NotesPage,
    pub(crate) hello: HelloPage,
    pub(crate) active_tab: Tab,
    pub(crate) page_origin: String,
    pub(crate) api_base: String,
    // Window geometry, saved on exit
    pub(crate) window_pos: Option<egui::Pos2>,
    pub(crate) window_size: Option<egui::Vec2>,
    pub(crate) needs_center: bool,
    pub(crate) data_dir: PathBuf,
    // Declared last so pages drop before the runtime their tasks run on
    _runtime: tokio::runtime::Runtime,
}

// ============================================================================
// APP INITIALIZATION & HELPERS
// ============================================================================

impl App {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        settings: Settings,
        data_dir: PathBuf,
    ) -> Result<Self, DynError> {
        // Force dark theme
        cc.egui_ctx.set_theme(egui::Theme::Dark);

        // Phosphor icons on top of the default fonts
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        theme::apply_visuals(&cc.egui_ctx);

        Self::from_settings(settings, data_dir)
    }

    /// Runtime, client and pages for the given settings. No window needed.
    pub fn from_settings(settings: Settings, data_dir: PathBuf) -> Result<Self, DynError> {
        let runtime = tokio::runtime::Runtime::new()?;
        let client = build_client(&settings.page_origin)?;
        let api_base = client.base().to_string();

        Ok(Self {
            notes: NotesPage::new(client.clone(), runtime.handle().clone()),
            hello: HelloPage::new(client, runtime.handle().clone()),
            active_tab: settings.active_tab,
            page_origin: settings.page_origin,
            api_base,
            window_pos: None,
            window_size: None,
            needs_center: false,
            data_dir,
            _runtime: runtime,
        })
    }

    pub fn save_settings(&self) {
        let settings = Settings {
            window_x: self.window_pos.map(|p| p.x),
            window_y: self.window_pos.map(|p| p.y),
            window_w: self.window_size.map(|s| s.x),
            window_h: self.window_size.map(|s| s.y),
            page_origin: self.page_origin.clone(),
            active_tab: self.active_tab,
        };
        settings.save(&self.data_dir);
    }

    /// Pick up finished requests for both views.
    pub fn poll_responses(&mut self, ctx: &egui::Context) {
        self.notes.poll(ctx);
        self.hello.poll();
    }
}
