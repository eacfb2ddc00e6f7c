//! The overlay layer: every decorator on the surface, as siblings.
//!
//! This is where the single-selection rule lives. Selecting one overlay
//! deselects all of its siblings in the same call.

use crate::control::ControlId;
use crate::decorator::Decorator;

/// A selection flag that flipped, reported so the renderer and the
/// property panel can react.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionChange {
    pub target: ControlId,
    pub selected: bool,
}

/// Ordered collection of decorators (back to front).
#[derive(Debug, Clone, Default)]
pub struct DecoratorLayer {
    decorators: Vec<Decorator>,
}

impl DecoratorLayer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.decorators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decorators.is_empty()
    }

    /// Decorators back to front.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Decorator> {
        self.decorators.iter()
    }

    pub fn iter_mut(&mut self) -> impl DoubleEndedIterator<Item = &mut Decorator> {
        self.decorators.iter_mut()
    }

    pub fn get(&self, target: ControlId) -> Option<&Decorator> {
        self.decorators.iter().find(|d| d.target() == target)
    }

    pub fn get_mut(&mut self, target: ControlId) -> Option<&mut Decorator> {
        self.decorators.iter_mut().find(|d| d.target() == target)
    }

    pub fn contains(&self, target: ControlId) -> bool {
        self.get(target).is_some()
    }

    /// Add a decorator on top. Returns false (and drops it) if its target
    /// already has one.
    pub fn insert(&mut self, decorator: Decorator) -> bool {
        if self.contains(decorator.target()) {
            return false;
        }
        self.decorators.push(decorator);
        true
    }

    /// Remove the decorator for a target.
    pub fn remove(&mut self, target: ControlId) -> Option<Decorator> {
        let index = self.decorators.iter().position(|d| d.target() == target)?;
        Some(self.decorators.remove(index))
    }

    /// Select `target` and deselect every sibling.
    ///
    /// Idempotent. Returns the flags that actually changed.
    pub fn select_only(&mut self, target: ControlId) -> Vec<SelectionChange> {
        self.decorators
            .iter_mut()
            .filter_map(|d| {
                let selected = d.target() == target;
                d.set_selected(selected).then_some(SelectionChange {
                    target: d.target(),
                    selected,
                })
            })
            .collect()
    }

    /// Deselect everything.
    pub fn clear_selection(&mut self) -> Vec<SelectionChange> {
        self.decorators
            .iter_mut()
            .filter_map(|d| {
                d.set_selected(false).then_some(SelectionChange {
                    target: d.target(),
                    selected: false,
                })
            })
            .collect()
    }

    /// The selected target, if any.
    pub fn selected(&self) -> Option<ControlId> {
        self.decorators
            .iter()
            .find(|d| d.is_selected())
            .map(Decorator::target)
    }

    /// The decorator with a drag or resize in progress.
    pub fn active_mut(&mut self) -> Option<&mut Decorator> {
        self.decorators.iter_mut().find(|d| d.is_active())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layer(n: usize) -> (DecoratorLayer, Vec<ControlId>) {
        let mut layer = DecoratorLayer::new();
        let ids: Vec<_> = (0..n).map(|_| ControlId::new()).collect();
        for &id in &ids {
            assert!(layer.insert(Decorator::new(id)));
        }
        (layer, ids)
    }

    #[test]
    fn test_select_middle_of_three() {
        let (mut layer, ids) = layer(3);
        layer.select_only(ids[1]);
        let flags: Vec<_> = layer.iter().map(Decorator::is_selected).collect();
        assert_eq!(flags, vec![false, true, false]);
        assert_eq!(layer.selected(), Some(ids[1]));
    }

    #[test]
    fn test_select_only_is_idempotent() {
        let (mut layer, ids) = layer(3);
        let first = layer.select_only(ids[2]);
        assert_eq!(
            first,
            vec![SelectionChange {
                target: ids[2],
                selected: true
            }]
        );
        assert!(layer.select_only(ids[2]).is_empty());

        let switched = layer.select_only(ids[0]);
        assert_eq!(switched.len(), 2);
    }

    #[test]
    fn test_at_most_one_selected() {
        let (mut layer, ids) = layer(5);
        for &pick in [3, 0, 0, 4, 1, 2, 4].iter() {
            layer.select_only(ids[pick]);
            assert_eq!(layer.iter().filter(|d| d.is_selected()).count(), 1);
        }
        layer.clear_selection();
        assert_eq!(layer.selected(), None);
    }

    #[test]
    fn test_one_decorator_per_target() {
        let (mut layer, ids) = layer(1);
        assert!(!layer.insert(Decorator::new(ids[0])));
        assert_eq!(layer.len(), 1);
        assert!(layer.remove(ids[0]).is_some());
        assert!(layer.is_empty());
        assert!(layer.remove(ids[0]).is_none());
    }
}
