//! Reusable egui widget components for the designer panel.
//!
//! - **Palette**: clickable list of control types
//! - **Properties**: name/value grid with text editors
//! - **Colors**: parsing of color names used by control backgrounds
//! - **Layout**: panel frames, section labels, separators

pub mod colors;
pub mod layout;
pub mod palette;
pub mod properties;

pub use colors::{parse_color, NAMED_COLORS};
pub use layout::{empty_hint, panel_frame, section_label, separator};
pub use palette::{palette_item, PaletteList};
pub use properties::{PropertyEdit, PropertyGrid};

/// Standard sizing constants used across widgets.
pub mod sizing {
    /// Height of a palette entry
    pub const ROW_HEIGHT: f32 = 26.0;
    /// Width of the name column in the property grid
    pub const NAME_COLUMN: f32 = 90.0;
    /// Standard corner radius
    pub const CORNER_RADIUS: u8 = 4;
    /// Panel corner radius
    pub const PANEL_RADIUS: u8 = 8;
}

/// Standard colors used across widgets.
pub mod theme {
    use egui::Color32;

    /// Text color (dark gray)
    pub const TEXT: Color32 = Color32::from_rgb(60, 60, 60);
    /// Muted text color
    pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 120, 120);
    /// Border color
    pub const BORDER: Color32 = Color32::from_rgb(220, 220, 220);
    /// Selection/active color (blue)
    pub const ACCENT: Color32 = Color32::from_rgb(59, 130, 246);
    /// Hover background
    pub const HOVER_BG: Color32 = Color32::from_rgb(245, 245, 245);
    /// Selected background
    pub const SELECTED_BG: Color32 = Color32::from_rgb(235, 245, 255);
    /// Panel background
    pub const PANEL_BG: Color32 = Color32::from_rgba_premultiplied(250, 250, 252, 250);
}

#[cfg(test)]
pub(crate) mod test_util {
    /// Run one headless frame with a central panel.
    pub fn run_ui(mut add_contents: impl FnMut(&mut egui::Ui)) {
        let ctx = egui::Context::default();
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| add_contents(ui));
        });
    }
}
