//! View rendering (tab bar, notes page, hello page)
//!
//! Rendering never mutates page state directly. Widgets push events which are
//! handed to the page once the frame's UI has been laid out.

use super::notes::state::Event;
use super::App;
use crate::app::hello::GreetingState;
use crate::theme;
use crate::types::{FormMode, Tab};
use crate::ui::components::{icon_button, note_meta, status_line};
use eframe::egui;
use egui_phosphor::regular as icons;

impl App {
    pub(crate) fn render_tab_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("tab_bar")
            .exact_height(theme::TAB_BAR_HEIGHT)
            .frame(theme::tab_bar_frame())
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| {
                    ui.spacing_mut().item_spacing.x = theme::SPACING_XL;
                    let tabs = [
                        (Tab::Notes, format!("{}  Notes", icons::NOTE)),
                        (Tab::Hello, format!("{}  Hello", icons::HAND_WAVING)),
                    ];
                    for (tab, label) in tabs {
                        if theme::tab(ui, &label, self.active_tab == tab) {
                            self.active_tab = tab;
                        }
                    }

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.add(
                            egui::Label::new(
                                egui::RichText::new(format!("API  {}", self.api_base))
                                    .size(theme::FONT_SMALL)
                                    .color(theme::TEXT_DIM),
                            )
                            .selectable(false),
                        );
                    });
                });
            });
    }

    pub(crate) fn render_notes(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        let state = self.notes.state();
        let loading = self.notes.in_flight() > 0;
        let busy = state.mutation_pending();
        let mode = state.mode();
        let mut events = Vec::new();

        ui.add(
            egui::Label::new(
                egui::RichText::new("Note CRUD test page")
                    .size(theme::FONT_TITLE)
                    .strong()
                    .color(theme::TEXT_PRIMARY),
            )
            .selectable(false),
        );
        ui.add(
            egui::Label::new(
                egui::RichText::new("Desktop test client for the notes REST API")
                    .color(theme::TEXT_MUTED),
            )
            .selectable(false),
        );
        ui.add_space(theme::SPACING_LG);

        // Form
        let mut title = state.title().to_string();
        theme::input_frame().show(ui, |ui| {
            let response = ui.add(
                egui::TextEdit::singleline(&mut title)
                    .hint_text("title")
                    .frame(false)
                    .desired_width(f32::INFINITY),
            );
            if response.changed() {
                events.push(Event::TitleChanged(title.clone()));
            }
            // Enter in the title field submits, like a plain HTML form
            if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                events.push(Event::Submit);
            }
        });

        let mut content = state.content().to_string();
        theme::input_frame().show(ui, |ui| {
            let response = ui.add(
                egui::TextEdit::multiline(&mut content)
                    .hint_text("content")
                    .frame(false)
                    .desired_rows(theme::CONTENT_ROWS)
                    .desired_width(f32::INFINITY),
            );
            if response.changed() {
                events.push(Event::ContentChanged(content.clone()));
            }
        });

        ui.add_space(theme::SPACING_SM);
        ui.horizontal(|ui| {
            let submit_label = match mode {
                FormMode::Create => format!("{}  Create", icons::PLUS),
                FormMode::Edit(id) => format!("{}  Update #{}", icons::FLOPPY_DISK, id),
            };
            if ui.add_enabled(!busy, theme::button_accent(submit_label)).clicked() {
                events.push(Event::Submit);
            }
            if matches!(mode, FormMode::Edit(_)) && ui.add(icon_button(icons::X, "Cancel")).clicked() {
                events.push(Event::CancelEdit);
            }
            if ui.add(icon_button(icons::ARROW_CLOCKWISE, "Refresh")).clicked() {
                events.push(Event::Refresh);
            }
        });

        if matches!(mode, FormMode::Edit(_)) && ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            events.push(Event::CancelEdit);
        }

        ui.add_space(theme::SPACING_MD);
        ui.horizontal(|ui| {
            status_line(ui, state.status());
            if loading {
                ui.spinner();
            }
        });
        ui.add_space(theme::SPACING_MD);

        // Mirror, in service order
        for note in state.notes() {
            theme::card_frame().show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.add(
                    egui::Label::new(
                        egui::RichText::new(&note.title)
                            .size(theme::FONT_HEADING)
                            .strong()
                            .color(theme::TEXT_PRIMARY),
                    )
                    .wrap(),
                );
                ui.add_space(theme::SPACING_SM);
                ui.add(
                    egui::Label::new(egui::RichText::new(&note.content).color(theme::TEXT_SECONDARY))
                        .wrap(),
                );
                ui.add_space(theme::SPACING_SM);
                ui.add(
                    egui::Label::new(
                        egui::RichText::new(note_meta(note))
                            .size(theme::FONT_SMALL)
                            .color(theme::TEXT_DIM),
                    )
                    .selectable(false),
                );
                ui.add_space(theme::SPACING_MD);
                ui.horizontal(|ui| {
                    if ui.add(icon_button(icons::PENCIL_SIMPLE, "Edit")).clicked() {
                        events.push(Event::BeginEdit(note.clone()));
                    }
                    let delete = theme::button_danger(format!("{}  Delete", icons::TRASH));
                    if ui.add_enabled(!busy, delete).clicked() {
                        events.push(Event::Delete(note.id));
                    }
                });
            });
            ui.add_space(theme::SPACING_LG);
        }
        if state.notes().is_empty() {
            ui.label(egui::RichText::new("No notes yet.").color(theme::TEXT_MUTED));
        }

        for event in events {
            self.notes.handle(ctx, event);
        }
    }

    pub(crate) fn render_hello(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        self.hello.ensure_started(ctx);

        ui.add(
            egui::Label::new(
                egui::RichText::new("Hello")
                    .size(theme::FONT_TITLE)
                    .strong()
                    .color(theme::TEXT_PRIMARY),
            )
            .selectable(false),
        );
        ui.add_space(theme::SPACING_LG);

        let greeting = self.hello.greeting();
        let color = match greeting {
            GreetingState::Loaded(_) => theme::ACCENT,
            GreetingState::Failed => theme::STATUS_ERROR,
            GreetingState::Idle | GreetingState::Loading => theme::TEXT_DIM,
        };
        ui.horizontal(|ui| {
            if matches!(greeting, GreetingState::Loading) {
                ui.spinner();
            }
            ui.label(egui::RichText::new(greeting.text()).size(theme::FONT_HEADING).color(color));
        });
    }
}
