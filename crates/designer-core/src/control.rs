//! Controls placed on the design surface.
//!
//! A control is pure data: kind, placement, optional explicit size and a bag
//! of text properties. Overlay state lives in [`crate::decorator`].

use kurbo::{Point, Rect, Size};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ControlId(Uuid);

impl ControlId {
    /// Create a fresh random id.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ControlId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ControlId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The type of a control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ControlKind {
    /// The design panel itself (root of every tree).
    Canvas,
    Button,
    TextBox,
    Label,
    StackPanel,
    DockPanel,
    Grid,
    ComboBox,
    CheckBox,
    RadioButton,
    Slider,
    ProgressBar,
    Image,
    Calendar,
}

/// How a container arranges its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelLayout {
    /// Children sit at their own left/top.
    #[default]
    Absolute,
    /// Children are stacked top to bottom; left/top are ignored.
    VerticalStack,
}

/// Approximate advance of one character of default UI text.
const CHAR_WIDTH: f64 = 7.0;
/// Horizontal padding around content text.
const CONTENT_PADDING: f64 = 24.0;

impl ControlKind {
    /// Display name, also used as the palette tag.
    pub fn name(self) -> &'static str {
        match self {
            ControlKind::Canvas => "Canvas",
            ControlKind::Button => "Button",
            ControlKind::TextBox => "TextBox",
            ControlKind::Label => "Label",
            ControlKind::StackPanel => "StackPanel",
            ControlKind::DockPanel => "DockPanel",
            ControlKind::Grid => "Grid",
            ControlKind::ComboBox => "ComboBox",
            ControlKind::CheckBox => "CheckBox",
            ControlKind::RadioButton => "RadioButton",
            ControlKind::Slider => "Slider",
            ControlKind::ProgressBar => "ProgressBar",
            ControlKind::Image => "Image",
            ControlKind::Calendar => "Calendar",
        }
    }

    /// Whether this kind can hold child controls.
    pub fn is_container(self) -> bool {
        matches!(
            self,
            ControlKind::Canvas
                | ControlKind::StackPanel
                | ControlKind::DockPanel
                | ControlKind::Grid
        )
    }

    /// Child arrangement for containers.
    pub fn panel_layout(self) -> PanelLayout {
        match self {
            ControlKind::StackPanel => PanelLayout::VerticalStack,
            _ => PanelLayout::Absolute,
        }
    }

    /// Name of the property holding the visible text, if any.
    pub fn content_property(self) -> Option<&'static str> {
        match self {
            ControlKind::Button | ControlKind::CheckBox | ControlKind::RadioButton => {
                Some("Content")
            }
            ControlKind::TextBox | ControlKind::Label => Some("Text"),
            _ => None,
        }
    }

    /// Size used when no explicit size is set and there is no content text.
    fn base_size(self) -> Size {
        match self {
            ControlKind::Canvas => Size::new(800.0, 600.0),
            ControlKind::Button => Size::new(80.0, 32.0),
            ControlKind::TextBox => Size::new(120.0, 32.0),
            ControlKind::Label => Size::new(40.0, 20.0),
            ControlKind::StackPanel | ControlKind::DockPanel | ControlKind::Grid => Size::ZERO,
            ControlKind::ComboBox => Size::new(120.0, 32.0),
            ControlKind::CheckBox | ControlKind::RadioButton => Size::new(90.0, 32.0),
            ControlKind::Slider => Size::new(120.0, 32.0),
            ControlKind::ProgressBar => Size::new(120.0, 6.0),
            ControlKind::Image => Size::new(64.0, 64.0),
            ControlKind::Calendar => Size::new(250.0, 300.0),
        }
    }
}

/// A named text property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextProperty {
    pub name: String,
    pub value: String,
}

/// A control on the design surface.
#[derive(Debug, Clone)]
pub struct Control {
    pub(crate) id: ControlId,
    kind: ControlKind,
    left: f64,
    top: f64,
    width: Option<f64>,
    height: Option<f64>,
    properties: Vec<TextProperty>,
    pub(crate) measured: Option<Rect>,
    pub(crate) parent: Option<ControlId>,
    pub(crate) children: Vec<ControlId>,
}

impl Control {
    /// Create a detached control with natural size at the parent origin.
    pub fn new(kind: ControlKind) -> Self {
        Self {
            id: ControlId::new(),
            kind,
            left: 0.0,
            top: 0.0,
            width: None,
            height: None,
            properties: vec![TextProperty {
                name: "Name".to_string(),
                value: String::new(),
            }],
            measured: None,
            parent: None,
            children: Vec::new(),
        }
    }

    /// Set the position (builder style).
    pub fn with_position(mut self, position: Point) -> Self {
        self.set_position(position);
        self
    }

    /// Set an explicit size (builder style).
    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    /// Set a text property (builder style).
    pub fn with_property(mut self, name: &str, value: &str) -> Self {
        self.set_text_property(name, value);
        self
    }

    pub fn id(&self) -> ControlId {
        self.id
    }

    pub fn kind(&self) -> ControlKind {
        self.kind
    }

    pub fn left(&self) -> f64 {
        self.left
    }

    pub fn top(&self) -> f64 {
        self.top
    }

    /// Explicit width, `None` when the natural width is used.
    pub fn width(&self) -> Option<f64> {
        self.width
    }

    /// Explicit height, `None` when the natural height is used.
    pub fn height(&self) -> Option<f64> {
        self.height
    }

    pub fn set_left(&mut self, left: f64) {
        self.left = left;
    }

    pub fn set_top(&mut self, top: f64) {
        self.top = top;
    }

    pub fn set_position(&mut self, position: Point) {
        self.left = position.x;
        self.top = position.y;
    }

    /// Set the explicit width. Negative values are clamped to zero.
    pub fn set_width(&mut self, width: Option<f64>) {
        self.width = width.map(|w| w.max(0.0));
    }

    /// Set the explicit height. Negative values are clamped to zero.
    pub fn set_height(&mut self, height: Option<f64>) {
        self.height = height.map(|h| h.max(0.0));
    }

    /// Bounds in parent space from the last layout pass.
    ///
    /// `None` until the control has been laid out inside a tree.
    pub fn measured(&self) -> Option<Rect> {
        self.measured
    }

    pub fn parent(&self) -> Option<ControlId> {
        self.parent
    }

    pub fn children(&self) -> &[ControlId] {
        &self.children
    }

    /// Size the control wants when no explicit size is set.
    pub fn natural_size(&self) -> Size {
        let base = self.kind.base_size();
        let text_width = self
            .kind
            .content_property()
            .and_then(|name| self.property(name))
            .map(|text| text.chars().count() as f64 * CHAR_WIDTH + CONTENT_PADDING);
        match text_width {
            Some(w) => Size::new(base.width.max(w), base.height),
            None => base,
        }
    }

    /// Size used by layout: explicit size where set, natural size otherwise.
    pub fn desired_size(&self) -> Size {
        let natural = self.natural_size();
        Size::new(
            self.width.unwrap_or(natural.width),
            self.height.unwrap_or(natural.height),
        )
    }

    /// Width to resize from: explicit, else last measured, else natural.
    pub fn resolved_width(&self) -> f64 {
        self.width
            .or_else(|| self.measured.map(|r| r.width()))
            .unwrap_or_else(|| self.natural_size().width)
    }

    /// Height to resize from: explicit, else last measured, else natural.
    pub fn resolved_height(&self) -> f64 {
        self.height
            .or_else(|| self.measured.map(|r| r.height()))
            .unwrap_or_else(|| self.natural_size().height)
    }

    /// Look up a text property.
    pub fn property(&self, name: &str) -> Option<&str> {
        self.properties
            .iter()
            .find(|p| p.name == name)
            .map(|p| p.value.as_str())
    }

    /// Set a text property, adding it if missing.
    pub fn set_text_property(&mut self, name: &str, value: &str) {
        match self.properties.iter_mut().find(|p| p.name == name) {
            Some(prop) => prop.value = value.to_string(),
            None => self.properties.push(TextProperty {
                name: name.to_string(),
                value: value.to_string(),
            }),
        }
    }

    /// Text properties in insertion order.
    pub fn text_properties(&self) -> &[TextProperty] {
        &self.properties
    }

    /// Text to draw inside the control.
    pub fn caption(&self) -> &str {
        self.kind
            .content_property()
            .and_then(|name| self.property(name))
            .unwrap_or_else(|| self.kind.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_natural_size_grows_with_content() {
        let short = Control::new(ControlKind::Button).with_property("Content", "Ok");
        let long = Control::new(ControlKind::Button)
            .with_property("Content", "A much longer button caption");

        assert!((short.natural_size().width - 80.0).abs() < f64::EPSILON);
        assert!(long.natural_size().width > 80.0);
    }

    #[test]
    fn test_desired_size_prefers_explicit() {
        let control = Control::new(ControlKind::TextBox).with_size(200.0, 50.0);
        assert_eq!(control.desired_size(), Size::new(200.0, 50.0));

        let mut control = Control::new(ControlKind::TextBox);
        control.set_width(Some(10.0));
        assert_eq!(control.desired_size(), Size::new(10.0, 32.0));
    }

    #[test]
    fn test_negative_size_is_clamped() {
        let mut control = Control::new(ControlKind::Grid);
        control.set_width(Some(-5.0));
        control.set_height(Some(-1.0));
        assert_eq!(control.width(), Some(0.0));
        assert_eq!(control.height(), Some(0.0));
    }

    #[test]
    fn test_resolved_size_falls_back_to_measured() {
        let mut control = Control::new(ControlKind::Label);
        control.measured = Some(Rect::new(0.0, 0.0, 64.0, 18.0));
        assert!((control.resolved_width() - 64.0).abs() < f64::EPSILON);
        assert!((control.resolved_height() - 18.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_set_text_property_replaces() {
        let mut control = Control::new(ControlKind::Label).with_property("Text", "a");
        control.set_text_property("Text", "b");
        assert_eq!(control.property("Text"), Some("b"));
        assert_eq!(
            control
                .text_properties()
                .iter()
                .filter(|p| p.name == "Text")
                .count(),
            1
        );
        assert_eq!(control.caption(), "b");
    }
}
