//! The design surface: control tree, overlay layer and inspector together.
//!
//! Pointer events come in here in overlay-surface space. Presses are hit
//! tested against the selected overlay's anchors first, then against overlay
//! bodies from the top down, so an anchor press never starts a drag. Every
//! geometry change is followed by a layout pass whose notifications re-sync
//! the affected overlays.

use crate::anchor::Anchor;
use crate::config::DesignerConfig;
use crate::control::{Control, ControlId};
use crate::decorator::Decorator;
use crate::input::PointerEvent;
use crate::palette::{self, PaletteError};
use crate::properties::{PropertyError, PropertyPanel, Reflect};
use crate::registry::{DecoratorLayer, SelectionChange};
use crate::tree::{ControlTree, TreeError};
use kurbo::{Point, Size};
use thiserror::Error;

/// Errors from surface operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SurfaceError {
    #[error(transparent)]
    Palette(#[from] PaletteError),
    #[error(transparent)]
    Tree(#[from] TreeError),
}

/// What a press landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    Anchor(ControlId, Anchor),
    Body(ControlId),
}

/// Editable design area.
#[derive(Debug, Clone)]
pub struct DesignSurface {
    config: DesignerConfig,
    tree: ControlTree,
    layer: DecoratorLayer,
    panel: PropertyPanel,
}

impl DesignSurface {
    /// Create an empty surface with a design panel of the given size.
    pub fn new(config: DesignerConfig, size: Size) -> Self {
        Self::with_tree(config, ControlTree::new(size))
    }

    /// Wrap an existing tree, attaching an overlay to every control in it.
    pub fn with_tree(config: DesignerConfig, mut tree: ControlTree) -> Self {
        let root = tree.root();
        if let Some(root) = tree.get_mut(root) {
            root.set_position(config.surface_offset.to_point());
        }
        let mut surface = Self {
            config,
            tree,
            layer: DecoratorLayer::new(),
            panel: PropertyPanel::new(),
        };
        surface.attach_recursive(root);
        surface.refresh();
        surface
    }

    pub fn config(&self) -> &DesignerConfig {
        &self.config
    }

    pub fn tree(&self) -> &ControlTree {
        &self.tree
    }

    pub fn layer(&self) -> &DecoratorLayer {
        &self.layer
    }

    pub fn panel(&self) -> &PropertyPanel {
        &self.panel
    }

    /// The selected control, if any.
    pub fn selected(&self) -> Option<ControlId> {
        self.layer.selected()
    }

    /// Resize the design panel.
    pub fn resize(&mut self, size: Size) {
        let root = self.tree.root();
        if let Some(root) = self.tree.get_mut(root) {
            if root.width() == Some(size.width) && root.height() == Some(size.height) {
                return;
            }
            root.set_width(Some(size.width));
            root.set_height(Some(size.height));
        }
        self.refresh();
    }

    /// Attach an overlay to every descendant of `id`, depth first.
    ///
    /// Controls that already have one are left alone.
    pub fn attach_recursive(&mut self, id: ControlId) {
        let children = match self.tree.get(id) {
            Some(control) => control.children().to_vec(),
            None => return,
        };
        for child in children {
            self.attach(child);
            self.attach_recursive(child);
        }
    }

    fn attach(&mut self, id: ControlId) {
        let mut decorator = Decorator::new(id);
        decorator.on_layout_changed(&self.tree);
        self.layer.insert(decorator);
    }

    /// Add a control (and any children it already has in the tree) under `parent`.
    pub fn add_control(
        &mut self,
        parent: ControlId,
        control: Control,
    ) -> Result<ControlId, SurfaceError> {
        let id = self.tree.insert(parent, control)?;
        log::info!("Added {} {}", self.kind_name(id), id);
        self.attach(id);
        self.attach_recursive(id);
        self.refresh();
        Ok(id)
    }

    /// Instantiate a palette tag at the configured drop position.
    pub fn add_from_palette(&mut self, tag: &str) -> Result<ControlId, SurfaceError> {
        let control = palette::instantiate(tag, self.config.drop_position)?;
        let root = self.tree.root();
        self.add_control(root, control)
    }

    /// Remove a control, its descendants and all of their overlays.
    pub fn remove_control(&mut self, id: ControlId) -> Result<(), SurfaceError> {
        let removed = self.tree.remove(id)?;
        for removed_id in &removed {
            self.layer.remove(*removed_id);
        }
        if self.panel.target().is_some_and(|t| removed.contains(&t)) {
            self.panel.clear();
        }
        log::info!("Removed {} control(s) starting at {}", removed.len(), id);
        self.refresh();
        Ok(())
    }

    /// Remove the selected control, if any.
    pub fn remove_selected(&mut self) -> Result<bool, SurfaceError> {
        match self.selected() {
            Some(id) => self.remove_control(id).map(|_| true),
            None => Ok(false),
        }
    }

    /// Find what a surface point lands on, anchors first.
    pub fn hit_test(&self, point: Point) -> Option<Hit> {
        let tolerance = self.config.anchor_hit_tolerance;
        if let Some(selected) = self.layer.iter().find(|d| d.is_selected()) {
            if let Some(anchor) = selected.hit_test_anchor(point, tolerance) {
                return Some(Hit::Anchor(selected.target(), anchor));
            }
        }
        self.layer
            .iter()
            .rev()
            .find(|d| d.hit_test_body(point, tolerance))
            .map(|d| Hit::Body(d.target()))
    }

    /// Dispatch a pointer event. Returns true if it was consumed.
    pub fn handle_pointer(&mut self, event: &PointerEvent) -> bool {
        if !event.is_primary() {
            return false;
        }
        let position = event.position();
        match event {
            PointerEvent::Down { .. } => self.press(position),
            PointerEvent::Move { .. } => self.move_to(position),
            PointerEvent::Up { .. } => self.release(),
        }
    }

    /// Pointer pressed at a surface point.
    pub fn press(&mut self, point: Point) -> bool {
        match self.hit_test(point) {
            Some(Hit::Anchor(target, anchor)) => match self.layer.get_mut(target) {
                Some(decorator) => decorator.begin_resize(&self.tree, anchor, point),
                None => false,
            },
            Some(Hit::Body(target)) => {
                let changes = self.layer.select_only(target);
                self.on_selection_changed(&changes);
                match self.layer.get_mut(target) {
                    Some(decorator) => decorator.begin_drag(&self.tree, point),
                    None => false,
                }
            }
            None => {
                let changes = self.layer.clear_selection();
                self.on_selection_changed(&changes);
                false
            }
        }
    }

    /// Pointer moved to a surface point.
    pub fn move_to(&mut self, point: Point) -> bool {
        let handled = match self.layer.active_mut() {
            Some(decorator) => decorator.pointer_moved(&mut self.tree, point),
            None => false,
        };
        if handled {
            self.refresh();
        }
        handled
    }

    /// Pointer released anywhere.
    pub fn release(&mut self) -> bool {
        self.layer
            .iter_mut()
            .fold(false, |any, d| d.pointer_released() || any)
    }

    /// Write an edited property back to the selected control.
    pub fn set_property(&mut self, name: &str, value: &str) -> Result<(), PropertyError> {
        let target = self.panel.target().ok_or(PropertyError::NoTarget)?;
        let control = self.tree.get_mut(target).ok_or(PropertyError::NoTarget)?;
        if let Err(err) = control.set_property(name, value) {
            log::warn!("Rejected edit of {name} on {target}: {err}");
            return Err(err);
        }
        self.refresh();
        // Text-only edits do not move anything, so rebuild explicitly.
        self.rebuild_panel();
        Ok(())
    }

    fn on_selection_changed(&mut self, changes: &[SelectionChange]) {
        if changes.is_empty() {
            return;
        }
        log::debug!("Selection changed: {:?}", changes);
        self.rebuild_panel();
    }

    fn rebuild_panel(&mut self) {
        match self.layer.selected().and_then(|id| self.tree.get(id)) {
            Some(control) => self.panel.rebuild(control.id(), control),
            None => self.panel.clear(),
        }
    }

    /// Run layout and deliver layout-changed notifications.
    fn refresh(&mut self) {
        let changed = self.tree.layout();
        let mut selected_changed = false;
        for id in &changed {
            if let Some(decorator) = self.layer.get_mut(*id) {
                decorator.on_layout_changed(&self.tree);
                selected_changed |= decorator.is_selected();
            }
        }
        if selected_changed {
            self.rebuild_panel();
        }
    }

    fn kind_name(&self, id: ControlId) -> &'static str {
        self.tree.get(id).map(|c| c.kind().name()).unwrap_or("control")
    }
}
