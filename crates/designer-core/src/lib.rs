//! Designer Core Library
//!
//! Platform-agnostic data structures and adorner logic for the designer panel:
//! the control tree, per-control overlays with drag and resize gestures,
//! single selection, and property reflection for the inspector.

pub mod anchor;
pub mod config;
pub mod control;
pub mod decorator;
pub mod geometry;
pub mod grid;
pub mod input;
pub mod palette;
pub mod properties;
pub mod registry;
pub mod surface;
pub mod tree;

pub use anchor::{Anchor, ResizeOutcome, hit_test_anchors};
pub use config::{ConfigError, DesignerConfig};
pub use control::{Control, ControlId, ControlKind, PanelLayout, TextProperty};
pub use decorator::{Decorator, GestureState};
pub use geometry::{Space, bounds_in_surface, surface_to_local, translate_point};
pub use grid::{DEFAULT_GRID_SPACING, DEFAULT_GRID_STROKE, grid_lines};
pub use input::{MouseButton, PointerEvent};
pub use palette::{PALETTE_TAGS, PaletteError, instantiate};
pub use properties::{
    PropertyDescriptor, PropertyError, PropertyPanel, PropertyRow, PropertyValue, Reflect,
    editable_rows,
};
pub use registry::{DecoratorLayer, SelectionChange};
pub use surface::{DesignSurface, Hit, SurfaceError};
pub use tree::{ControlTree, TreeError, TreeResult};
