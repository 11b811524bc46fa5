//! Reusable UI components
//!
//! Standalone helpers shared by the notes and hello views.

use crate::theme;
use crate::types::Note;
use chrono::{DateTime, Local, NaiveDateTime};
use eframe::egui;

const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Render a service timestamp in local time.
///
/// Accepts RFC 3339 and offset-less ISO-8601 (treated as UTC); anything else is
/// shown as "Invalid Date".
pub fn format_timestamp(raw: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.with_timezone(&Local).format(DISPLAY_FORMAT).to_string();
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return naive.and_utc().with_timezone(&Local).format(DISPLAY_FORMAT).to_string();
    }
    "Invalid Date".to_string()
}

/// `id=.. | created=.. | updated=..` line under each note
pub fn note_meta(note: &Note) -> String {
    format!(
        "id={} | created={} | updated={}",
        note.id,
        format_timestamp(&note.created_at),
        format_timestamp(&note.updated_at)
    )
}

/// Status line below the form
pub fn status_line(ui: &mut egui::Ui, status: &str) {
    ui.add(
        egui::Label::new(
            egui::RichText::new(status)
                .size(theme::FONT_BODY)
                .color(theme::STATUS_SUCCESS),
        )
        .selectable(false),
    );
}

/// Lay out `add_contents` in a column at most `max_width` wide, centered horizontally.
pub fn centered_column<R>(
    ui: &mut egui::Ui,
    max_width: f32,
    add_contents: impl FnOnce(&mut egui::Ui) -> R,
) -> R {
    let pad = ((ui.available_width() - max_width) / 2.0).max(0.0);
    ui.horizontal_top(|ui| {
        ui.add_space(pad);
        ui.vertical(|ui| {
            ui.set_max_width(max_width);
            add_contents(ui)
        })
        .inner
    })
    .inner
}

/// Button with a leading Phosphor icon
pub fn icon_button(icon: &str, label: &str) -> egui::Button<'static> {
    theme::button(format!("{}  {}", icon, label))
}
