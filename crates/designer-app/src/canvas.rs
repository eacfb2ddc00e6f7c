//! Painting of the design panel, its controls and their overlays.

use designer_core::{bounds_in_surface, grid_lines, Control, Decorator, DesignSurface};
use designer_widgets::{parse_color, theme};
use egui::{Align2, Color32, CornerRadius, FontId, Painter, Pos2, Rect, Stroke, StrokeKind};

const GRID_COLOR: Color32 = Color32::from_rgb(236, 238, 242);
const CONTROL_BORDER: Color32 = Color32::from_rgb(170, 170, 170);
const OVERLAY_BORDER: Color32 = Color32::from_rgba_premultiplied(59, 130, 246, 60);
const CAPTION_FONT: f32 = 12.0;

fn to_screen_pos(origin: Pos2, point: kurbo::Point) -> Pos2 {
    Pos2::new(origin.x + point.x as f32, origin.y + point.y as f32)
}

/// Map a rect in overlay-surface space onto the screen.
pub(crate) fn to_screen_rect(origin: Pos2, rect: kurbo::Rect) -> Rect {
    Rect::from_min_max(
        to_screen_pos(origin, kurbo::Point::new(rect.x0, rect.y0)),
        to_screen_pos(origin, kurbo::Point::new(rect.x1, rect.y1)),
    )
}

/// Fill colour from the control's `Background` property. Unset or
/// unparseable values paint transparent.
pub(crate) fn background_of(control: &Control) -> Color32 {
    control
        .property("Background")
        .and_then(parse_color)
        .unwrap_or(Color32::TRANSPARENT)
}

/// Paint everything on the surface. `origin` is the screen position of the
/// overlay surface's top-left corner.
pub fn paint_surface(painter: &Painter, origin: Pos2, surface: &DesignSurface) {
    let tree = surface.tree();
    let root = tree.root();

    if let Some(panel) = bounds_in_surface(tree, root) {
        let panel_rect = to_screen_rect(origin, panel);
        painter.rect_filled(panel_rect, CornerRadius::ZERO, Color32::WHITE);
        paint_grid(&painter.with_clip_rect(panel_rect), panel, origin, surface);
    }

    for id in tree.descendants(root) {
        let (Some(control), Some(bounds)) = (tree.get(id), bounds_in_surface(tree, id)) else {
            continue;
        };
        paint_control(painter, to_screen_rect(origin, bounds), control);
    }

    let anchor_size = surface.config().anchor_size as f32;
    for decorator in surface.layer().iter() {
        paint_overlay(painter, origin, decorator, anchor_size);
    }
}

fn paint_grid(painter: &Painter, panel: kurbo::Rect, origin: Pos2, surface: &DesignSurface) {
    let config = surface.config();
    let stroke = Stroke::new(config.grid_stroke_width as f32, GRID_COLOR);
    let offset = panel.origin().to_vec2();
    for line in grid_lines(panel.size(), config.grid_spacing) {
        painter.line_segment(
            [
                to_screen_pos(origin, line.p0 + offset),
                to_screen_pos(origin, line.p1 + offset),
            ],
            stroke,
        );
    }
}

fn paint_control(painter: &Painter, rect: Rect, control: &Control) {
    let radius = CornerRadius::same(designer_widgets::sizing::CORNER_RADIUS);
    painter.rect_filled(rect, radius, background_of(control));
    painter.rect_stroke(rect, radius, Stroke::new(1.0, CONTROL_BORDER), StrokeKind::Inside);

    if control.kind().is_container() {
        painter.text(
            rect.min + egui::vec2(4.0, 2.0),
            Align2::LEFT_TOP,
            control.caption(),
            FontId::proportional(CAPTION_FONT - 2.0),
            theme::TEXT_MUTED,
        );
    } else {
        painter.with_clip_rect(rect).text(
            rect.center(),
            Align2::CENTER_CENTER,
            control.caption(),
            FontId::proportional(CAPTION_FONT),
            theme::TEXT,
        );
    }
}

fn paint_overlay(painter: &Painter, origin: Pos2, decorator: &Decorator, anchor_size: f32) {
    let rect = to_screen_rect(origin, decorator.bounds());
    if !decorator.is_selected() {
        let stroke = Stroke::new(1.0, OVERLAY_BORDER);
        painter.rect_stroke(rect, CornerRadius::ZERO, stroke, StrokeKind::Outside);
        return;
    }

    let accent = Stroke::new(1.5, theme::ACCENT);
    painter.rect_stroke(rect, CornerRadius::ZERO, accent, StrokeKind::Outside);
    let handle_stroke = Stroke::new(1.0, theme::ACCENT);
    let handle_size = egui::vec2(anchor_size, anchor_size);
    let active = decorator.active_anchor();
    for (anchor, point) in decorator.anchors() {
        let square = Rect::from_center_size(to_screen_pos(origin, point), handle_size);
        let fill = if active == Some(anchor) {
            theme::ACCENT
        } else {
            Color32::WHITE
        };
        painter.rect_filled(square, CornerRadius::same(1), fill);
        painter.rect_stroke(square, CornerRadius::same(1), handle_stroke, StrokeKind::Inside);
    }
}
