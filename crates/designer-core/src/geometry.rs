//! Coordinate transforms between control spaces and the overlay surface.
//!
//! Every laid-out control has a local space whose origin is its top-left
//! corner. Walking up the parent chain composes one translation per level;
//! the root's translation lands in overlay-surface space.

use crate::control::ControlId;
use crate::tree::ControlTree;
use kurbo::{Affine, Point, Rect};

/// A coordinate space to translate into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Space {
    /// The shared overlay surface (where decorators and pointer events live).
    Surface,
    /// The local space of a control.
    Control(ControlId),
}

/// Transform from a control's local space into its parent's space.
///
/// `None` while the control has not been laid out.
pub fn local_transform(tree: &ControlTree, id: ControlId) -> Option<Affine> {
    let bounds = tree.get(id)?.measured()?;
    Some(Affine::translate(bounds.origin().to_vec2()))
}

/// Transform from `from`'s local space into `to`.
///
/// `to` must be `from` itself, one of its ancestors, or the surface.
/// Returns `None` when `to` is not reachable or any control on the way is
/// unmeasured.
pub fn transform_to(tree: &ControlTree, from: ControlId, to: Space) -> Option<Affine> {
    tree.get(from)?;
    let mut transform = Affine::IDENTITY;
    for current in std::iter::once(from).chain(tree.ancestors(from)) {
        if to == Space::Control(current) {
            return Some(transform);
        }
        transform = local_transform(tree, current)? * transform;
    }
    match to {
        Space::Surface => Some(transform),
        Space::Control(_) => None,
    }
}

/// Translate a point from `from`'s local space into `to`.
pub fn translate_point(
    tree: &ControlTree,
    from: ControlId,
    point: Point,
    to: Space,
) -> Option<Point> {
    transform_to(tree, from, to).map(|t| t * point)
}

/// Translate a point from overlay-surface space into `id`'s local space.
pub fn surface_to_local(tree: &ControlTree, id: ControlId, point: Point) -> Option<Point> {
    transform_to(tree, id, Space::Surface).map(|t| t.inverse() * point)
}

/// Bounds of a control in overlay-surface space.
pub fn bounds_in_surface(tree: &ControlTree, id: ControlId) -> Option<Rect> {
    let size = tree.get(id)?.measured()?.size();
    let origin = translate_point(tree, id, Point::ZERO, Space::Surface)?;
    Some(Rect::from_origin_size(origin, size))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::{Control, ControlKind};
    use kurbo::Size;

    fn nested() -> (ControlTree, ControlId, ControlId) {
        let mut tree = ControlTree::new(Size::new(800.0, 600.0));
        let root = tree.root();
        tree.get_mut(root)
            .unwrap()
            .set_position(Point::new(5.0, 5.0));
        let grid = tree
            .insert(
                root,
                Control::new(ControlKind::Grid)
                    .with_position(Point::new(100.0, 50.0))
                    .with_size(300.0, 300.0),
            )
            .unwrap();
        let button = tree
            .insert(
                grid,
                Control::new(ControlKind::Button).with_position(Point::new(10.0, 20.0)),
            )
            .unwrap();
        tree.layout();
        (tree, grid, button)
    }

    #[test]
    fn test_translate_through_containers() {
        let (tree, grid, button) = nested();

        let in_grid = translate_point(&tree, button, Point::ZERO, Space::Control(grid)).unwrap();
        assert_eq!(in_grid, Point::new(10.0, 20.0));

        let in_surface =
            translate_point(&tree, button, Point::new(1.0, 1.0), Space::Surface).unwrap();
        assert_eq!(in_surface, Point::new(116.0, 76.0));
    }

    #[test]
    fn test_surface_to_local_inverts() {
        let (tree, grid, _) = nested();
        let local = surface_to_local(&tree, grid, Point::new(125.0, 75.0)).unwrap();
        assert_eq!(local, Point::new(20.0, 20.0));
    }

    #[test]
    fn test_non_ancestor_is_unresolved() {
        let (mut tree, grid, button) = nested();
        let sibling = tree
            .insert(tree.root(), Control::new(ControlKind::Label))
            .unwrap();
        tree.layout();
        assert!(translate_point(&tree, button, Point::ZERO, Space::Control(sibling)).is_none());
        assert!(translate_point(&tree, grid, Point::ZERO, Space::Control(button)).is_none());
    }

    #[test]
    fn test_unmeasured_is_unresolved() {
        let (mut tree, grid, _) = nested();
        let fresh = tree.insert(grid, Control::new(ControlKind::Label)).unwrap();
        assert!(bounds_in_surface(&tree, fresh).is_none());
        tree.layout();
        assert!(bounds_in_surface(&tree, fresh).is_some());
    }
}
