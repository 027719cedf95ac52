//! Column schema types for the generic data table.

use egui::Ui;

/// What a cell renders.
pub enum CellContent<R> {
    /// Plain text; the accessor reads the display value out of a row.
    Text(fn(&R) -> String),
    /// Custom widget; returns true when the cell's action fired.
    Custom(fn(&mut Ui, &R) -> bool),
}

/// One leaf column: header label and cell content.
pub struct TableColumn<R> {
    pub header: &'static str,
    pub content: CellContent<R>,
}

/// A titled group of columns, rendered as a two-level header.
pub struct ColumnGroup<R> {
    pub title: &'static str,
    pub columns: Vec<TableColumn<R>>,
}
