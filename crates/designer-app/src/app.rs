//! Core application state and the per-frame UI.

use designer_core::{
    Anchor, Control, ControlKind, ControlTree, DesignSurface, Hit, TreeResult, PALETTE_TAGS,
};
use designer_widgets::{
    empty_hint, panel_frame, section_label, separator, theme, PaletteList, PropertyEdit,
    PropertyGrid,
};
use egui::{Color32, CursorIcon, RichText};
use kurbo::{Point, Size};

use crate::canvas::paint_surface;
use crate::config::AppConfig;
use crate::event_handler::translate_events;

const SIDE_PANEL_WIDTH: f32 = 220.0;
const CANVAS_BG: Color32 = Color32::from_rgb(245, 246, 248);

/// The designer window.
pub struct DesignerApp {
    surface: DesignSurface,
    /// Edit buffers mirroring the inspector rows.
    edits: Vec<PropertyEdit>,
    /// Panel revision the buffers were built from. `None` forces a resync.
    synced_revision: Option<u64>,
    last_added: Option<&'static str>,
    status: Option<String>,
}

impl DesignerApp {
    pub fn new(config: AppConfig) -> Self {
        let size = Size::new(config.width as f64, config.height as f64);
        let surface = DesignSurface::with_tree(config.designer, starter_tree(size));
        log::info!("Design surface ready with {} controls", surface.tree().len());
        Self {
            surface,
            edits: Vec::new(),
            synced_revision: None,
            last_added: None,
            status: None,
        }
    }

    fn sync_edits(&mut self) {
        let revision = self.surface.panel().revision();
        if self.synced_revision == Some(revision) {
            return;
        }
        self.edits = self
            .surface
            .panel()
            .rows()
            .iter()
            .map(|row| PropertyEdit::new(&row.name, &row.value))
            .collect();
        self.synced_revision = Some(revision);
    }

    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        if ctx.wants_keyboard_input() || !ctx.input(|i| i.key_pressed(egui::Key::Delete)) {
            return;
        }
        match self.surface.remove_selected() {
            Ok(true) => self.status = None,
            Ok(false) => {}
            Err(e) => {
                log::error!("Failed to remove control: {}", e);
                self.status = Some(e.to_string());
            }
        }
    }

    fn palette_panel(&mut self, ctx: &egui::Context) {
        egui::SidePanel::left("palette")
            .exact_width(SIDE_PANEL_WIDTH)
            .frame(panel_frame())
            .show(ctx, |ui| {
                section_label(ui, "Toolbox");
                separator(ui);
                let Some(tag) = PaletteList::new(&PALETTE_TAGS)
                    .highlighted(self.last_added)
                    .show(ui)
                else {
                    return;
                };
                match self.surface.add_from_palette(tag) {
                    Ok(id) => {
                        log::info!("Added {} ({})", tag, id);
                        self.last_added = Some(tag);
                        self.status = None;
                    }
                    Err(e) => {
                        log::error!("Failed to add {}: {}", tag, e);
                        self.status = Some(e.to_string());
                    }
                }
            });
    }

    fn property_panel(&mut self, ctx: &egui::Context) {
        self.sync_edits();
        egui::SidePanel::right("properties")
            .exact_width(SIDE_PANEL_WIDTH + 40.0)
            .frame(panel_frame())
            .show(ctx, |ui| {
                section_label(ui, "Properties");
                separator(ui);
                if self.surface.panel().target().is_none() {
                    empty_hint(ui, "Select a control to edit it");
                    return;
                }
                let grid = PropertyGrid::new("property_grid", &mut self.edits);
                let Some(index) = grid.show(ui) else {
                    return;
                };
                let edit = self.edits[index].clone();
                let unchanged = self
                    .surface
                    .panel()
                    .rows()
                    .get(index)
                    .is_some_and(|row| row.value == edit.text);
                if unchanged {
                    return;
                }
                match self.surface.set_property(&edit.name, &edit.text) {
                    Ok(()) => self.status = None,
                    Err(e) => {
                        self.status = Some(e.to_string());
                        self.synced_revision = None;
                    }
                }
            });
    }

    fn status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if let Some(message) = &self.status {
                    ui.label(RichText::new(message).color(Color32::from_rgb(200, 60, 60)));
                    ui.separator();
                }
                let selected = self.surface.selected().and_then(|id| self.surface.tree().get(id));
                match selected {
                    Some(control) => {
                        let name = control.property("Name").unwrap_or_default();
                        let size = control.measured().map(|r| r.size()).unwrap_or(Size::ZERO);
                        ui.label(
                            RichText::new(format!(
                                "{} {}  {:.0} x {:.0}",
                                control.kind().name(),
                                name,
                                size.width,
                                size.height
                            ))
                            .color(theme::TEXT),
                        );
                    }
                    None => {
                        ui.label(RichText::new("Nothing selected").color(theme::TEXT_MUTED));
                    }
                }
            });
        });
    }

    fn canvas(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(CANVAS_BG))
            .show(ctx, |ui| {
                let (response, painter) =
                    ui.allocate_painter(ui.available_size(), egui::Sense::click_and_drag());
                let rect = response.rect;
                self.surface
                    .resize(Size::new(rect.width() as f64, rect.height() as f64));

                let events = ui.input(|i| translate_events(&i.events, rect));
                for event in &events {
                    self.surface.handle_pointer(event);
                }

                if let Some(hover) = response.hover_pos() {
                    let offset = hover - rect.min;
                    let point = Point::new(offset.x as f64, offset.y as f64);
                    if let Some(icon) = self.surface.hit_test(point).map(cursor_for) {
                        ctx.set_cursor_icon(icon);
                    }
                }

                paint_surface(&painter, rect.min, &self.surface);
            });
    }
}

impl eframe::App for DesignerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_shortcuts(ctx);
        self.palette_panel(ctx);
        self.property_panel(ctx);
        self.status_bar(ctx);
        self.canvas(ctx);
    }
}

fn cursor_for(hit: Hit) -> CursorIcon {
    match hit {
        Hit::Body(_) => CursorIcon::Move,
        Hit::Anchor(_, anchor) => match anchor {
            Anchor::North | Anchor::South => CursorIcon::ResizeVertical,
            Anchor::East | Anchor::West => CursorIcon::ResizeHorizontal,
            Anchor::NorthWest | Anchor::SouthEast => CursorIcon::ResizeNwSe,
            Anchor::NorthEast | Anchor::SouthWest => CursorIcon::ResizeNeSw,
        },
    }
}

/// A small form so the window does not open empty.
fn starter_tree(size: Size) -> ControlTree {
    let mut tree = ControlTree::new(size);
    if let Err(e) = seed(&mut tree) {
        log::error!("Failed to seed starter controls: {}", e);
    }
    tree
}

fn seed(tree: &mut ControlTree) -> TreeResult<()> {
    let root = tree.root();
    let panel = tree.insert(
        root,
        Control::new(ControlKind::StackPanel)
            .with_position(Point::new(40.0, 40.0))
            .with_size(220.0, 120.0)
            .with_property("Background", "LightGray"),
    )?;
    tree.insert(panel, Control::new(ControlKind::Button).with_property("Content", "OK"))?;
    tree.insert(panel, Control::new(ControlKind::TextBox).with_property("Text", "Name"))?;
    tree.insert(
        root,
        Control::new(ControlKind::Label)
            .with_position(Point::new(300.0, 60.0))
            .with_property("Text", "Drag me"),
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starter_tree_is_attached() {
        let app = DesignerApp::new(AppConfig::default());
        // root + panel + two children + label
        assert_eq!(app.surface.tree().len(), 5);
        assert_eq!(app.surface.layer().len(), 4);
        assert!(app.surface.selected().is_none());
    }

    #[test]
    fn test_edits_follow_panel_revision() {
        let mut app = DesignerApp::new(AppConfig::default());
        app.sync_edits();
        assert!(app.edits.is_empty());

        let label = app.surface.tree().descendants(app.surface.tree().root())[3];
        let bounds = app.surface.layer().get(label).unwrap().bounds();
        app.surface.press(bounds.center());
        app.surface.release();
        app.sync_edits();
        assert!(app.edits.iter().any(|e| e.name == "Text" && e.text == "Drag me"));
    }

    #[test]
    fn test_cursor_for_anchors() {
        let id = designer_core::ControlId::new();
        assert_eq!(cursor_for(Hit::Body(id)), CursorIcon::Move);
        assert_eq!(cursor_for(Hit::Anchor(id, Anchor::West)), CursorIcon::ResizeHorizontal);
        assert_eq!(cursor_for(Hit::Anchor(id, Anchor::SouthEast)), CursorIcon::ResizeNwSe);
    }
}
