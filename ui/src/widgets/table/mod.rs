//! Schema-driven table renderer.
//!
//! A table is described by an ordered sequence of [`ColumnGroup`]s, each
//! holding leaf [`TableColumn`]s with a header label and cell content (a
//! text accessor or a custom widget). The renderer draws a group-title
//! row, a leaf-header row, and one striped row per visible data row, and
//! reports which row's custom cell fired.
//!
//! Uses a Typora-like table style with clean borders and minimal styling.

pub mod columns;
mod filter;
mod header;
mod row;

pub use columns::{CellContent, ColumnGroup, TableColumn};
pub use filter::row_matches_filter;

use egui::{Color32, Frame, Margin, Stroke, Ui};

/// Border color for the table frame (subtle gray)
pub(crate) const TABLE_BORDER_COLOR: Color32 = Color32::from_rgb(200, 200, 200);

/// Header background color (light gray)
pub(crate) const HEADER_BG_COLOR: Color32 = Color32::from_rgb(245, 245, 245);

/// What happened inside the table this frame.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TableResponse {
    /// Index (into the caller's row slice) of the row whose custom cell
    /// fired, if any.
    pub activated_row: Option<usize>,
}

/// Renders a schema-driven table.
///
/// When `filter` is `Some`, a "Search..." input is shown above the table
/// and rows are narrowed to those where any text column contains the
/// needle, case-insensitively. Filtering is in-memory over the passed rows
/// only; it never re-queries the backend.
pub fn data_table<R>(
    ui: &mut Ui,
    id: &str,
    groups: &[ColumnGroup<R>],
    rows: &[R],
    filter: Option<&mut String>,
) -> TableResponse {
    let mut response = TableResponse::default();

    let needle = if let Some(filter) = filter {
        ui.add(egui::TextEdit::singleline(&mut *filter).hint_text("Search..."));
        filter.clone()
    } else {
        String::new()
    };

    let flat: Vec<&TableColumn<R>> = groups.iter().flat_map(|group| &group.columns).collect();

    Frame::NONE
        .stroke(Stroke::new(1.0, TABLE_BORDER_COLOR))
        .inner_margin(Margin::ZERO)
        .show(ui, |ui| {
            egui::Grid::new(id)
                .num_columns(flat.len())
                .striped(true)
                .spacing([16.0, 0.0])
                .min_col_width(48.0)
                .show(ui, |ui| {
                    header::render_group_header_row(ui, groups);
                    ui.end_row();

                    header::render_leaf_header_row(ui, &flat);
                    ui.end_row();

                    for (index, data) in rows.iter().enumerate() {
                        if !filter::row_matches_filter(&row::row_text_values(&flat, data), &needle)
                        {
                            continue;
                        }
                        if row::render_data_row(ui, &flat, data) {
                            response.activated_row = Some(index);
                        }
                        ui.end_row();
                    }
                });
        });

    response
}
