//! Palette of control types that can be dropped on the design surface.

use crate::control::{Control, ControlKind};
use kurbo::Point;
use std::str::FromStr;
use thiserror::Error;

/// Palette errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PaletteError {
    #[error("Unknown control type: {0}")]
    UnknownTag(String),
}

/// Tags offered by the palette, in display order.
pub const PALETTE_TAGS: [&str; 13] = [
    "Button",
    "TextBox",
    "Label",
    "StackPanel",
    "DockPanel",
    "Grid",
    "ComboBox",
    "CheckBox",
    "RadioButton",
    "Slider",
    "ProgressBar",
    "Image",
    "Calendar",
];

/// Background given to new containers so they are visible on the canvas.
const CONTAINER_BACKGROUND: &str = "LightGray";

impl FromStr for ControlKind {
    type Err = PaletteError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        let kind = match tag {
            "Button" => ControlKind::Button,
            "TextBox" => ControlKind::TextBox,
            "Label" => ControlKind::Label,
            "StackPanel" => ControlKind::StackPanel,
            "DockPanel" => ControlKind::DockPanel,
            "Grid" => ControlKind::Grid,
            "ComboBox" => ControlKind::ComboBox,
            "CheckBox" => ControlKind::CheckBox,
            "RadioButton" => ControlKind::RadioButton,
            "Slider" => ControlKind::Slider,
            "ProgressBar" => ControlKind::ProgressBar,
            "Image" => ControlKind::Image,
            "Calendar" => ControlKind::Calendar,
            _ => return Err(PaletteError::UnknownTag(tag.to_string())),
        };
        Ok(kind)
    }
}

/// Build a new control for a palette tag, with its default content.
pub fn instantiate(tag: &str, position: Point) -> Result<Control, PaletteError> {
    let kind: ControlKind = tag.parse()?;
    let control = Control::new(kind).with_position(position);
    let control = match kind {
        ControlKind::Button => control.with_property("Content", "New Button"),
        ControlKind::TextBox => control.with_property("Text", "New TextBox"),
        ControlKind::Label => control.with_property("Text", "New Label"),
        ControlKind::StackPanel | ControlKind::DockPanel | ControlKind::Grid => control
            .with_property("Background", CONTAINER_BACKGROUND)
            .with_size(100.0, 100.0),
        ControlKind::ComboBox => control.with_property("Items", "Item1, Item2"),
        ControlKind::CheckBox => control.with_property("Content", "New CheckBox"),
        ControlKind::RadioButton => control.with_property("Content", "New RadioButton"),
        ControlKind::Image => control
            .with_property("Source", "image.png")
            .with_size(100.0, 100.0),
        ControlKind::Calendar => control.with_size(100.0, 100.0),
        ControlKind::Slider | ControlKind::ProgressBar | ControlKind::Canvas => control,
    };
    Ok(control)
}
