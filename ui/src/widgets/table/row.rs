//! Data-row rendering for the generic data table.

use egui::{Frame, InnerResponse, Margin, Ui};

use super::columns::{CellContent, TableColumn};

/// Data cell with padding.
pub(super) fn data_cell<R>(ui: &mut Ui, add_contents: impl FnOnce(&mut Ui) -> R) -> InnerResponse<R> {
    Frame::NONE
        .inner_margin(Margin::symmetric(8, 6))
        .show(ui, add_contents)
}

/// Renders one data row. Returns true if any custom cell's action fired.
pub(super) fn render_data_row<R>(ui: &mut Ui, columns: &[&TableColumn<R>], data: &R) -> bool {
    let mut activated = false;
    for column in columns {
        data_cell(ui, |ui| match &column.content {
            CellContent::Text(accessor) => {
                ui.label(accessor(data));
            }
            CellContent::Custom(render) => {
                if render(ui, data) {
                    activated = true;
                }
            }
        });
    }
    activated
}

/// The string values of every text column, as seen by the global filter.
pub(super) fn row_text_values<R>(columns: &[&TableColumn<R>], data: &R) -> Vec<String> {
    columns
        .iter()
        .filter_map(|column| match &column.content {
            CellContent::Text(accessor) => Some(accessor(data)),
            CellContent::Custom(_) => None,
        })
        .collect()
}
