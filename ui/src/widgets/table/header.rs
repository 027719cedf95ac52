//! Header rendering for the generic data table.

use egui::{Frame, InnerResponse, Margin, Ui};

use super::HEADER_BG_COLOR;
use super::columns::{ColumnGroup, TableColumn};

/// Header cell with a light background.
pub(super) fn header_cell<R>(ui: &mut Ui, add_contents: impl FnOnce(&mut Ui) -> R) -> InnerResponse<R> {
    Frame::NONE
        .fill(HEADER_BG_COLOR)
        .inner_margin(Margin::symmetric(8, 8))
        .show(ui, add_contents)
}

/// Renders the group-title row: the title sits over the group's first
/// column, the remaining group columns stay blank.
pub(super) fn render_group_header_row<R>(ui: &mut Ui, groups: &[ColumnGroup<R>]) {
    for group in groups {
        for (index, _column) in group.columns.iter().enumerate() {
            header_cell(ui, |ui| {
                if index == 0 {
                    ui.strong(group.title);
                }
            });
        }
    }
}

/// Renders the leaf-header row with one bold label per column.
pub(super) fn render_leaf_header_row<R>(ui: &mut Ui, columns: &[&TableColumn<R>]) {
    for column in columns {
        header_cell(ui, |ui| {
            ui.strong(column.header);
        });
    }
}
