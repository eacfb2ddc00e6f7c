//! Property grid: a name column and a single-line text editor per row.

use egui::{Grid, RichText, TextEdit, Ui};

use crate::{sizing, theme};

/// Edit buffer for one property row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyEdit {
    pub name: String,
    pub text: String,
}

impl PropertyEdit {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }
}

/// Name/value grid over a slice of edit buffers.
pub struct PropertyGrid<'a> {
    id_salt: &'a str,
    rows: &'a mut [PropertyEdit],
}

impl<'a> PropertyGrid<'a> {
    pub fn new(id_salt: &'a str, rows: &'a mut [PropertyEdit]) -> Self {
        Self { id_salt, rows }
    }

    /// Show the grid. Returns the index of a row whose edit was committed
    /// (Enter pressed or focus lost after a change).
    pub fn show(self, ui: &mut Ui) -> Option<usize> {
        let mut committed = None;
        Grid::new(self.id_salt)
            .num_columns(2)
            .spacing([8.0, 6.0])
            .show(ui, |ui| {
                for (index, row) in self.rows.iter_mut().enumerate() {
                    ui.add_sized(
                        [sizing::NAME_COLUMN, 20.0],
                        egui::Label::new(RichText::new(&row.name).size(12.0).color(theme::TEXT)),
                    );
                    let response = ui.add(
                        TextEdit::singleline(&mut row.text)
                            .desired_width(f32::INFINITY)
                            .font(egui::TextStyle::Body),
                    );
                    if response.lost_focus() {
                        committed = Some(index);
                    }
                    ui.end_row();
                }
            });
        committed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::run_ui;

    #[test]
    fn test_grid_renders_without_commit() {
        let mut rows = vec![
            PropertyEdit::new("Left", "50"),
            PropertyEdit::new("Content", "New Button"),
        ];
        run_ui(|ui| {
            assert_eq!(PropertyGrid::new("props", &mut rows).show(ui), None);
        });
        assert_eq!(rows[1].text, "New Button");
    }
}
