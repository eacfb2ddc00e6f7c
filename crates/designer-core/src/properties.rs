//! Property reflection for the inspector panel.
//!
//! Controls describe their properties through [`Reflect`]. The
//! [`PropertyPanel`] keeps only the settable ones, as text rows, and is
//! rebuilt from scratch whenever the selection or the target changes.

use crate::control::{Control, ControlId};
use std::fmt;
use thiserror::Error;

/// Property write-back errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PropertyError {
    #[error("Unknown property: {0}")]
    Unknown(String),
    #[error("Property {0} is read-only")]
    ReadOnly(String),
    #[error("Property {name} needs a number, got {value:?}")]
    InvalidNumber { name: String, value: String },
    #[error("No control selected")]
    NoTarget,
}

/// Current value of a property.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    Text(String),
    Number(f64),
    /// A number that may be unset (shown as empty text).
    OptionalNumber(Option<f64>),
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::Text(text) => f.write_str(text),
            PropertyValue::Number(n) | PropertyValue::OptionalNumber(Some(n)) => write!(f, "{n}"),
            PropertyValue::OptionalNumber(None) => Ok(()),
        }
    }
}

/// Describes one property of a control.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyDescriptor {
    pub name: String,
    pub value: PropertyValue,
    pub read_only: bool,
}

impl PropertyDescriptor {
    pub fn new(name: &str, value: PropertyValue) -> Self {
        Self {
            name: name.to_string(),
            value,
            read_only: false,
        }
    }

    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }
}

/// Something whose properties can be listed and written back as text.
pub trait Reflect {
    /// All properties, read-only ones included.
    fn properties(&self) -> Vec<PropertyDescriptor>;

    /// Write an edited value back.
    fn set_property(&mut self, name: &str, value: &str) -> Result<(), PropertyError>;
}

fn parse_number(name: &str, value: &str) -> Result<f64, PropertyError> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .ok_or_else(|| PropertyError::InvalidNumber {
            name: name.to_string(),
            value: value.to_string(),
        })
}

fn parse_optional_number(name: &str, value: &str) -> Result<Option<f64>, PropertyError> {
    if value.trim().is_empty() {
        Ok(None)
    } else {
        parse_number(name, value).map(Some)
    }
}

impl Reflect for Control {
    fn properties(&self) -> Vec<PropertyDescriptor> {
        let measured = self.measured().map(|r| r.size());
        let mut props = vec![
            PropertyDescriptor::new("Kind", PropertyValue::Text(self.kind().name().to_string()))
                .read_only(),
            PropertyDescriptor::new("Left", PropertyValue::Number(self.left())),
            PropertyDescriptor::new("Top", PropertyValue::Number(self.top())),
            PropertyDescriptor::new("Width", PropertyValue::OptionalNumber(self.width())),
            PropertyDescriptor::new("Height", PropertyValue::OptionalNumber(self.height())),
            PropertyDescriptor::new(
                "ActualWidth",
                PropertyValue::OptionalNumber(measured.map(|s| s.width)),
            )
            .read_only(),
            PropertyDescriptor::new(
                "ActualHeight",
                PropertyValue::OptionalNumber(measured.map(|s| s.height)),
            )
            .read_only(),
        ];
        props.extend(
            self.text_properties()
                .iter()
                .map(|p| PropertyDescriptor::new(&p.name, PropertyValue::Text(p.value.clone()))),
        );
        props
    }

    fn set_property(&mut self, name: &str, value: &str) -> Result<(), PropertyError> {
        match name {
            "Kind" | "ActualWidth" | "ActualHeight" => {
                Err(PropertyError::ReadOnly(name.to_string()))
            }
            "Left" => {
                self.set_left(parse_number(name, value)?);
                Ok(())
            }
            "Top" => {
                self.set_top(parse_number(name, value)?);
                Ok(())
            }
            "Width" => {
                self.set_width(parse_optional_number(name, value)?);
                Ok(())
            }
            "Height" => {
                self.set_height(parse_optional_number(name, value)?);
                Ok(())
            }
            _ if self.property(name).is_some() => {
                self.set_text_property(name, value);
                Ok(())
            }
            _ => Err(PropertyError::Unknown(name.to_string())),
        }
    }
}

/// One editable row of the inspector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyRow {
    pub name: String,
    pub value: String,
    pub read_only: bool,
}

/// Settable properties of `source` as text rows. Read-only ones are dropped.
pub fn editable_rows(source: &impl Reflect) -> Vec<PropertyRow> {
    source
        .properties()
        .into_iter()
        .filter(|p| !p.read_only)
        .map(|p| PropertyRow {
            value: p.value.to_string(),
            name: p.name,
            read_only: false,
        })
        .collect()
}

/// Rows shown for the selected control.
#[derive(Debug, Clone, Default)]
pub struct PropertyPanel {
    target: Option<ControlId>,
    rows: Vec<PropertyRow>,
    revision: u64,
}

impl PropertyPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Control the rows belong to.
    pub fn target(&self) -> Option<ControlId> {
        self.target
    }

    pub fn rows(&self) -> &[PropertyRow] {
        &self.rows
    }

    /// Bumped on every rebuild or clear, so views know to refresh their
    /// edit buffers.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Drop all rows.
    pub fn clear(&mut self) {
        self.target = None;
        self.rows.clear();
        self.revision += 1;
    }

    /// Replace all rows with the editable properties of `source`.
    pub fn rebuild(&mut self, target: ControlId, source: &impl Reflect) {
        self.target = Some(target);
        self.rows = editable_rows(source);
        self.revision += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::ControlKind;
    use kurbo::{Point, Rect};

    fn button() -> Control {
        Control::new(ControlKind::Button)
            .with_position(Point::new(50.0, 60.0))
            .with_property("Content", "New Button")
    }

    #[test]
    fn test_rows_drop_read_only() {
        let mut control = button();
        control.measured = Some(Rect::new(0.0, 0.0, 80.0, 32.0));
        let rows = editable_rows(&control);
        let names: Vec<_> = rows.iter().map(|r| r.name.as_str()).collect();

        assert_eq!(names, vec!["Left", "Top", "Width", "Height", "Name", "Content"]);
        assert!(rows.iter().all(|r| !r.read_only));
        assert_eq!(rows[0].value, "50");
        assert_eq!(rows[2].value, "");
        assert_eq!(rows[5].value, "New Button");
    }

    #[test]
    fn test_set_text_property_verbatim() {
        let mut control = button();
        control.set_property("Content", "  Click me  ").unwrap();
        assert_eq!(control.property("Content"), Some("  Click me  "));
    }

    #[test]
    fn test_set_geometry() {
        let mut control = button();
        control.set_property("Left", "12.5").unwrap();
        control.set_property("Width", "200").unwrap();
        assert_eq!(control.left(), 12.5);
        assert_eq!(control.width(), Some(200.0));

        control.set_property("Width", "").unwrap();
        assert_eq!(control.width(), None);
    }

    #[test]
    fn test_set_property_errors() {
        let mut control = button();
        assert_eq!(
            control.set_property("Kind", "Label"),
            Err(PropertyError::ReadOnly("Kind".to_string()))
        );
        assert_eq!(
            control.set_property("Bogus", "x"),
            Err(PropertyError::Unknown("Bogus".to_string()))
        );
        assert!(matches!(
            control.set_property("Top", "abc"),
            Err(PropertyError::InvalidNumber { .. })
        ));
        assert_eq!(control.top(), 60.0);
    }

    #[test]
    fn test_panel_rebuild_replaces_rows() {
        let mut panel = PropertyPanel::new();
        let first = button();
        panel.rebuild(first.id(), &first);
        let rev = panel.revision();
        assert_eq!(panel.target(), Some(first.id()));

        let label = Control::new(ControlKind::Label).with_property("Text", "hi");
        panel.rebuild(label.id(), &label);
        assert!(panel.revision() > rev);
        assert!(panel.rows().iter().all(|r| r.name != "Content"));
        assert!(panel.rows().iter().any(|r| r.name == "Text"));

        panel.clear();
        assert!(panel.rows().is_empty());
        assert_eq!(panel.target(), None);
    }
}
