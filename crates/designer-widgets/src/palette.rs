//! Palette list: one clickable row per control type.

use egui::{vec2, Color32, CornerRadius, CursorIcon, Pos2, Sense, Ui};

use crate::{sizing, theme};

/// Show a single palette row. Returns true when clicked.
pub fn palette_item(ui: &mut Ui, label: &str, highlighted: bool) -> bool {
    let size = vec2(ui.available_width(), sizing::ROW_HEIGHT);
    let (rect, response) = ui.allocate_exact_size(size, Sense::click());

    if ui.is_rect_visible(rect) {
        let bg_color = if highlighted {
            theme::SELECTED_BG
        } else if response.hovered() {
            theme::HOVER_BG
        } else {
            Color32::TRANSPARENT
        };
        ui.painter()
            .rect_filled(rect, CornerRadius::same(sizing::CORNER_RADIUS), bg_color);

        let text_color = if highlighted { theme::ACCENT } else { theme::TEXT };
        ui.painter().text(
            Pos2::new(rect.left() + 10.0, rect.center().y),
            egui::Align2::LEFT_CENTER,
            label,
            egui::FontId::proportional(13.0),
            text_color,
        );
    }

    let clicked = response.clicked();
    response.on_hover_cursor(CursorIcon::PointingHand);
    clicked
}

/// A vertical list of palette tags.
pub struct PaletteList<'a> {
    tags: &'a [&'a str],
    highlighted: Option<&'a str>,
}

impl<'a> PaletteList<'a> {
    pub fn new(tags: &'a [&'a str]) -> Self {
        Self {
            tags,
            highlighted: None,
        }
    }

    /// Highlight one tag (e.g. the last one added).
    pub fn highlighted(mut self, tag: Option<&'a str>) -> Self {
        self.highlighted = tag;
        self
    }

    /// Show the list. Returns the clicked tag, if any.
    pub fn show(self, ui: &mut Ui) -> Option<&'a str> {
        let mut clicked = None;
        for &tag in self.tags {
            if palette_item(ui, tag, self.highlighted == Some(tag)) {
                clicked = Some(tag);
            }
        }
        clicked
    }
}
