//! Translation of egui input into design surface pointer events.

use designer_core::{MouseButton, PointerEvent};
use kurbo::Point;

fn to_surface(pos: egui::Pos2, canvas: egui::Rect) -> Point {
    Point::new((pos.x - canvas.min.x) as f64, (pos.y - canvas.min.y) as f64)
}

fn to_button(button: egui::PointerButton) -> Option<MouseButton> {
    match button {
        egui::PointerButton::Primary => Some(MouseButton::Left),
        egui::PointerButton::Secondary => Some(MouseButton::Right),
        egui::PointerButton::Middle => Some(MouseButton::Middle),
        _ => None,
    }
}

/// Convert raw egui events into surface pointer events, in order.
///
/// Positions are made relative to the canvas' top-left corner. Presses
/// outside the canvas are dropped so clicks on side panels never reach the
/// surface; moves and releases always pass so a gesture that leaves the
/// canvas still ends.
pub fn translate_events(events: &[egui::Event], canvas: egui::Rect) -> Vec<PointerEvent> {
    events
        .iter()
        .filter_map(|event| match *event {
            egui::Event::PointerMoved(pos) => Some(PointerEvent::Move {
                position: to_surface(pos, canvas),
            }),
            egui::Event::PointerButton {
                pos,
                button,
                pressed,
                ..
            } => {
                let button = to_button(button)?;
                let position = to_surface(pos, canvas);
                if pressed {
                    canvas
                        .contains(pos)
                        .then_some(PointerEvent::Down { position, button })
                } else {
                    Some(PointerEvent::Up { position, button })
                }
            }
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canvas() -> egui::Rect {
        egui::Rect::from_min_size(egui::pos2(200.0, 40.0), egui::vec2(600.0, 400.0))
    }

    fn button(x: f32, y: f32, pressed: bool) -> egui::Event {
        egui::Event::PointerButton {
            pos: egui::pos2(x, y),
            button: egui::PointerButton::Primary,
            pressed,
            modifiers: egui::Modifiers::default(),
        }
    }

    #[test]
    fn test_positions_relative_to_canvas() {
        let events = [
            button(250.0, 90.0, true),
            egui::Event::PointerMoved(egui::pos2(260.0, 95.0)),
            button(260.0, 95.0, false),
        ];
        let out = translate_events(&events, canvas());
        assert_eq!(
            out,
            vec![
                PointerEvent::Down {
                    position: Point::new(50.0, 50.0),
                    button: MouseButton::Left
                },
                PointerEvent::Move {
                    position: Point::new(60.0, 55.0)
                },
                PointerEvent::Up {
                    position: Point::new(60.0, 55.0),
                    button: MouseButton::Left
                },
            ]
        );
    }

    #[test]
    fn test_press_outside_canvas_dropped() {
        let events = [button(10.0, 10.0, true), button(10.0, 10.0, false)];
        let out = translate_events(&events, canvas());
        assert_eq!(out.len(), 1);
        assert!(matches!(out[0], PointerEvent::Up { .. }));
    }

    #[test]
    fn test_other_events_ignored() {
        let events = [egui::Event::Text("x".to_string()), egui::Event::PointerGone];
        assert!(translate_events(&events, canvas()).is_empty());
    }
}
