//! Control tree and layout pass.
//!
//! The tree is an arena keyed by [`ControlId`]. Its root is the design panel,
//! which sits at its own left/top inside the overlay surface.
//! [`ControlTree::layout`] measures every control and reports the ones whose
//! bounds moved; those are the layout-changed notifications overlays listen to.

use crate::control::{Control, ControlId, ControlKind, PanelLayout};
use kurbo::{Point, Rect, Size};
use std::collections::HashMap;
use thiserror::Error;

/// Control tree errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TreeError {
    #[error("Control not found: {0}")]
    NotFound(ControlId),
    #[error("Control {0} cannot hold children")]
    NotAContainer(ControlId),
    #[error("Control {0} is already in the tree")]
    Duplicate(ControlId),
    #[error("The design panel cannot be removed")]
    RemoveRoot,
}

/// Result type for tree operations.
pub type TreeResult<T> = Result<T, TreeError>;

/// All controls on the design surface.
#[derive(Debug, Clone)]
pub struct ControlTree {
    controls: HashMap<ControlId, Control>,
    root: ControlId,
}

impl ControlTree {
    /// Create a tree whose root canvas has the given size.
    pub fn new(size: Size) -> Self {
        let root = Control::new(ControlKind::Canvas).with_size(size.width, size.height);
        let root_id = root.id();
        let mut controls = HashMap::new();
        controls.insert(root_id, root);
        Self {
            controls,
            root: root_id,
        }
    }

    /// The design panel.
    pub fn root(&self) -> ControlId {
        self.root
    }

    pub fn get(&self, id: ControlId) -> Option<&Control> {
        self.controls.get(&id)
    }

    pub fn get_mut(&mut self, id: ControlId) -> Option<&mut Control> {
        self.controls.get_mut(&id)
    }

    pub fn contains(&self, id: ControlId) -> bool {
        self.controls.contains_key(&id)
    }

    /// Number of controls, including the root.
    pub fn len(&self) -> usize {
        self.controls.len()
    }

    /// Always false; the root is never removed.
    pub fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }

    /// Insert a control as the last child of `parent`.
    pub fn insert(&mut self, parent: ControlId, mut control: Control) -> TreeResult<ControlId> {
        let id = control.id();
        if self.controls.contains_key(&id) {
            return Err(TreeError::Duplicate(id));
        }
        let parent_control = self
            .controls
            .get_mut(&parent)
            .ok_or(TreeError::NotFound(parent))?;
        if !parent_control.kind().is_container() {
            return Err(TreeError::NotAContainer(parent));
        }
        parent_control.children.push(id);
        control.parent = Some(parent);
        control.measured = None;
        self.controls.insert(id, control);
        Ok(id)
    }

    /// Remove a control and its whole subtree.
    ///
    /// Returns the removed ids, the control itself first.
    pub fn remove(&mut self, id: ControlId) -> TreeResult<Vec<ControlId>> {
        if id == self.root {
            return Err(TreeError::RemoveRoot);
        }
        let parent = self
            .controls
            .get(&id)
            .ok_or(TreeError::NotFound(id))?
            .parent;
        if let Some(parent) = parent.and_then(|p| self.controls.get_mut(&p)) {
            parent.children.retain(|&child| child != id);
        }

        let mut removed = vec![id];
        removed.extend(self.descendants(id));
        for removed_id in &removed {
            self.controls.remove(removed_id);
        }
        Ok(removed)
    }

    /// All descendants of `id` in depth-first pre-order, excluding `id`.
    pub fn descendants(&self, id: ControlId) -> Vec<ControlId> {
        let mut out = Vec::new();
        let mut stack: Vec<ControlId> = match self.controls.get(&id) {
            Some(control) => control.children.iter().rev().copied().collect(),
            None => return out,
        };
        while let Some(next) = stack.pop() {
            out.push(next);
            if let Some(control) = self.controls.get(&next) {
                stack.extend(control.children.iter().rev().copied());
            }
        }
        out
    }

    /// Ancestors of `id`, nearest first.
    pub fn ancestors(&self, id: ControlId) -> impl Iterator<Item = ControlId> + '_ {
        let mut current = self.controls.get(&id).and_then(|c| c.parent);
        std::iter::from_fn(move || {
            let next = current?;
            current = self.controls.get(&next).and_then(|c| c.parent);
            Some(next)
        })
    }

    /// Measure and arrange every control.
    ///
    /// Returns the controls whose position relative to the overlay surface or
    /// whose size changed, parents before children. A control inside a moved
    /// container is reported too, since its surface position moved with it.
    pub fn layout(&mut self) -> Vec<ControlId> {
        let mut changed = Vec::new();
        let root = self.root;
        let origin = self
            .controls
            .get(&root)
            .map(|c| Point::new(c.left(), c.top()))
            .unwrap_or(Point::ZERO);
        self.arrange(root, origin, false, &mut changed);
        changed
    }

    fn arrange(
        &mut self,
        id: ControlId,
        origin: Point,
        ancestor_changed: bool,
        changed: &mut Vec<ControlId>,
    ) {
        let Some(control) = self.controls.get_mut(&id) else {
            return;
        };
        let bounds = Rect::from_origin_size(origin, control.desired_size());
        let moved = control.measured != Some(bounds);
        control.measured = Some(bounds);
        if (moved || ancestor_changed) && id != self.root {
            changed.push(id);
        }

        let layout = control.kind().panel_layout();
        let children = control.children.clone();
        let mut stack_y = 0.0;
        for child in children {
            let Some(child_control) = self.controls.get(&child) else {
                continue;
            };
            let child_origin = match layout {
                PanelLayout::Absolute => Point::new(child_control.left(), child_control.top()),
                PanelLayout::VerticalStack => {
                    let origin = Point::new(0.0, stack_y);
                    stack_y += child_control.desired_size().height;
                    origin
                }
            };
            self.arrange(child, child_origin, moved || ancestor_changed, changed);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree() -> ControlTree {
        ControlTree::new(Size::new(800.0, 600.0))
    }

    #[test]
    fn test_insert_requires_container() {
        let mut tree = tree();
        let button = tree
            .insert(tree.root(), Control::new(ControlKind::Button))
            .unwrap();
        let err = tree
            .insert(button, Control::new(ControlKind::Label))
            .unwrap_err();
        assert_eq!(err, TreeError::NotAContainer(button));
    }

    #[test]
    fn test_insert_rejects_duplicate_id() {
        let mut tree = tree();
        let panel = Control::new(ControlKind::StackPanel);
        let copy = panel.clone();
        let id = tree.insert(tree.root(), panel).unwrap();

        assert_eq!(tree.insert(tree.root(), copy), Err(TreeError::Duplicate(id)));
        assert_eq!(tree.get(tree.root()).unwrap().children(), &[id]);
        assert_eq!(tree.len(), 2);
    }

    #[test]
    fn test_remove_subtree() {
        let mut tree = tree();
        let panel = tree
            .insert(tree.root(), Control::new(ControlKind::StackPanel))
            .unwrap();
        let a = tree.insert(panel, Control::new(ControlKind::Button)).unwrap();
        let b = tree.insert(panel, Control::new(ControlKind::Label)).unwrap();

        let removed = tree.remove(panel).unwrap();
        assert_eq!(removed, vec![panel, a, b]);
        assert!(!tree.contains(a));
        assert!(tree.get(tree.root()).unwrap().children().is_empty());
        assert_eq!(tree.remove(tree.root()), Err(TreeError::RemoveRoot));
    }

    #[test]
    fn test_layout_reports_changes_once() {
        let mut tree = tree();
        let button = tree
            .insert(
                tree.root(),
                Control::new(ControlKind::Button)
                    .with_position(Point::new(50.0, 50.0))
                    .with_size(100.0, 100.0),
            )
            .unwrap();

        assert_eq!(tree.layout(), vec![button]);
        assert!(tree.layout().is_empty());
        assert_eq!(
            tree.get(button).unwrap().measured(),
            Some(Rect::new(50.0, 50.0, 150.0, 150.0))
        );

        tree.get_mut(button).unwrap().set_left(60.0);
        assert_eq!(tree.layout(), vec![button]);
    }

    #[test]
    fn test_stack_panel_ignores_left_top() {
        let mut tree = tree();
        let panel = tree
            .insert(
                tree.root(),
                Control::new(ControlKind::StackPanel)
                    .with_position(Point::new(10.0, 10.0))
                    .with_size(200.0, 200.0),
            )
            .unwrap();
        let first = tree
            .insert(
                panel,
                Control::new(ControlKind::Button)
                    .with_position(Point::new(99.0, 99.0))
                    .with_size(80.0, 30.0),
            )
            .unwrap();
        let second = tree
            .insert(panel, Control::new(ControlKind::Button).with_size(80.0, 20.0))
            .unwrap();
        tree.layout();

        assert_eq!(
            tree.get(first).unwrap().measured(),
            Some(Rect::new(0.0, 0.0, 80.0, 30.0))
        );
        assert_eq!(
            tree.get(second).unwrap().measured(),
            Some(Rect::new(0.0, 30.0, 80.0, 50.0))
        );
    }

    #[test]
    fn test_moving_container_reports_children() {
        let mut tree = tree();
        let grid = tree
            .insert(tree.root(), Control::new(ControlKind::Grid).with_size(100.0, 100.0))
            .unwrap();
        let child = tree.insert(grid, Control::new(ControlKind::Label)).unwrap();
        tree.layout();

        tree.get_mut(grid).unwrap().set_top(40.0);
        assert_eq!(tree.layout(), vec![grid, child]);
    }

    #[test]
    fn test_ancestors() {
        let mut tree = tree();
        let outer = tree
            .insert(tree.root(), Control::new(ControlKind::Grid))
            .unwrap();
        let inner = tree.insert(outer, Control::new(ControlKind::StackPanel)).unwrap();
        let leaf = tree.insert(inner, Control::new(ControlKind::Button)).unwrap();

        let chain: Vec<_> = tree.ancestors(leaf).collect();
        assert_eq!(chain, vec![inner, outer, tree.root()]);
        assert_eq!(tree.descendants(outer), vec![inner, leaf]);
    }
}
