//! The adorner overlay wrapped around each control on the design surface.
//!
//! A [`Decorator`] mirrors its target's bounds in overlay-surface space and
//! turns pointer input into drag and resize gestures that mutate the target
//! directly. It holds the target by id only; once the target is gone every
//! operation is a no-op.

use crate::anchor::{Anchor, hit_test_anchors};
use crate::control::ControlId;
use crate::geometry::{self, Space};
use crate::tree::ControlTree;
use kurbo::{Point, Rect};

/// Gesture currently driven by the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum GestureState {
    #[default]
    Idle,
    /// Moving the target. `origin` is the last pointer position in
    /// target-parent space.
    Dragging { origin: Point },
    /// Resizing the target from `anchor`.
    Resizing { anchor: Anchor, origin: Point },
}

/// Selection and resize chrome for one target control.
#[derive(Debug, Clone)]
pub struct Decorator {
    target: ControlId,
    selected: bool,
    gesture: GestureState,
    /// Bounds in overlay-surface space, as of the last successful sync.
    bounds: Rect,
}

impl Decorator {
    /// Create an unselected, idle overlay for `target`.
    pub fn new(target: ControlId) -> Self {
        Self {
            target,
            selected: false,
            gesture: GestureState::Idle,
            bounds: Rect::ZERO,
        }
    }

    pub fn target(&self) -> ControlId {
        self.target
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    /// Set the selection flag. Returns true if it changed.
    pub fn set_selected(&mut self, selected: bool) -> bool {
        let changed = self.selected != selected;
        self.selected = selected;
        changed
    }

    pub fn gesture(&self) -> GestureState {
        self.gesture
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.gesture, GestureState::Dragging { .. })
    }

    pub fn is_resizing(&self) -> bool {
        matches!(self.gesture, GestureState::Resizing { .. })
    }

    /// Whether a drag or resize is in progress.
    pub fn is_active(&self) -> bool {
        self.gesture != GestureState::Idle
    }

    /// The anchor that started the current resize.
    pub fn active_anchor(&self) -> Option<Anchor> {
        match self.gesture {
            GestureState::Resizing { anchor, .. } => Some(anchor),
            _ => None,
        }
    }

    pub fn drag_anchor_point(&self) -> Option<Point> {
        match self.gesture {
            GestureState::Dragging { origin } => Some(origin),
            _ => None,
        }
    }

    pub fn resize_anchor_point(&self) -> Option<Point> {
        match self.gesture {
            GestureState::Resizing { origin, .. } => Some(origin),
            _ => None,
        }
    }

    /// Bounds in overlay-surface space.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Anchors with their centres in overlay-surface space.
    pub fn anchors(&self) -> [(Anchor, Point); 8] {
        Anchor::ALL.map(|anchor| (anchor, anchor.position(self.bounds)))
    }

    /// Check if a surface point lies on the overlay body, grown by
    /// `tolerance` on every side so a zero-sized target stays reachable.
    pub fn hit_test_body(&self, point: Point, tolerance: f64) -> bool {
        self.bounds.inflate(tolerance, tolerance).contains(point)
    }

    /// Find the anchor under a surface point.
    pub fn hit_test_anchor(&self, point: Point, tolerance: f64) -> Option<Anchor> {
        hit_test_anchors(self.bounds, point, tolerance)
    }

    /// Convert a surface point into the target's parent space.
    fn to_parent_space(&self, tree: &ControlTree, point: Point) -> Option<Point> {
        let parent = tree.get(self.target)?.parent()?;
        geometry::surface_to_local(tree, parent, point)
    }

    /// Start moving the target. `point` is in overlay-surface space.
    ///
    /// Selection is handled by [`crate::registry::DecoratorLayer::select_only`].
    /// Returns false if the target's parent space cannot be resolved.
    pub fn begin_drag(&mut self, tree: &ControlTree, point: Point) -> bool {
        let Some(origin) = self.to_parent_space(tree, point) else {
            log::debug!("Drag on {} ignored: parent not laid out", self.target);
            return false;
        };
        log::debug!("Drag started on {} at {:?}", self.target, origin);
        self.gesture = GestureState::Dragging { origin };
        true
    }

    /// Start resizing the target from `anchor`. `point` is in overlay-surface space.
    pub fn begin_resize(&mut self, tree: &ControlTree, anchor: Anchor, point: Point) -> bool {
        let Some(origin) = self.to_parent_space(tree, point) else {
            log::debug!("Resize on {} ignored: parent not laid out", self.target);
            return false;
        };
        log::debug!("Resize started on {} from {:?}", self.target, anchor);
        self.gesture = GestureState::Resizing { anchor, origin };
        true
    }

    /// Feed a pointer move. Returns true if the event was consumed.
    ///
    /// Mutates the target's geometry; the caller runs layout afterwards so
    /// the overlay catches up through [`Decorator::on_layout_changed`].
    pub fn pointer_moved(&mut self, tree: &mut ControlTree, point: Point) -> bool {
        if self.gesture == GestureState::Idle {
            return false;
        }
        let Some(current) = self.to_parent_space(tree, point) else {
            return false;
        };
        let Some(target) = tree.get_mut(self.target) else {
            return false;
        };

        match self.gesture {
            GestureState::Idle => false,
            GestureState::Dragging { origin } => {
                let delta = current - origin;
                target.set_left(target.left() + delta.x);
                target.set_top(target.top() + delta.y);
                self.gesture = GestureState::Dragging { origin: current };
                true
            }
            GestureState::Resizing { anchor, origin } => {
                let delta = current - origin;
                let out = anchor.apply(
                    target.left(),
                    target.top(),
                    target.resolved_width(),
                    target.resolved_height(),
                    delta,
                );
                if anchor.resizes_width() {
                    target.set_width(Some(out.width));
                    target.set_left(out.left);
                }
                if anchor.resizes_height() {
                    target.set_height(Some(out.height));
                    target.set_top(out.top);
                }
                self.gesture = GestureState::Resizing {
                    anchor,
                    origin: current,
                };
                true
            }
        }
    }

    /// Finish any gesture. Returns true if one was in progress.
    pub fn pointer_released(&mut self) -> bool {
        let was_active = self.is_active();
        if was_active {
            log::debug!("Gesture on {} finished", self.target);
        }
        self.gesture = GestureState::Idle;
        was_active
    }

    /// Re-read the target's bounds and move the overlay onto them.
    ///
    /// Skipped silently when the target cannot be placed in surface space
    /// yet; the next layout event retries. Returns true if the bounds changed.
    pub fn on_layout_changed(&mut self, tree: &ControlTree) -> bool {
        let Some(size) = tree
            .get(self.target)
            .and_then(|c| c.measured())
            .map(|r| r.size())
        else {
            log::debug!("Sync of {} skipped: not measured", self.target);
            return false;
        };
        let Some(origin) = geometry::translate_point(tree, self.target, Point::ZERO, Space::Surface)
        else {
            log::debug!("Sync of {} skipped: unresolved position", self.target);
            return false;
        };
        let bounds = Rect::from_origin_size(origin, size);
        let changed = bounds != self.bounds;
        self.bounds = bounds;
        changed
    }
}
