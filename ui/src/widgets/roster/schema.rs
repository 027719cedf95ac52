//! Column schemas for the two tables.
//!
//! Grouping mirrors the admin screen layout: the users table nests its
//! columns under `Name` and `Info`, the aggregate table under
//! `Daily Record`, `Male`, and `Female`.

use roster_business::{DailyRow, UserRow};

use crate::widgets::table::{CellContent, ColumnGroup, TableColumn};

/// Users table: `Name[No, First Name, Last Name]` +
/// `Info[Age, Gender, Location, Action]`. The Action cell is the per-row
/// Delete button.
pub fn user_columns() -> Vec<ColumnGroup<UserRow>> {
    vec![
        ColumnGroup {
            title: "Name",
            columns: vec![
                TableColumn {
                    header: "No",
                    content: CellContent::Text(|row| row.ordinal.to_string()),
                },
                TableColumn {
                    header: "First Name",
                    content: CellContent::Text(|row| row.name.first().to_owned()),
                },
                TableColumn {
                    header: "Last Name",
                    content: CellContent::Text(|row| row.name.last().to_owned()),
                },
            ],
        },
        ColumnGroup {
            title: "Info",
            columns: vec![
                TableColumn {
                    header: "Age",
                    content: CellContent::Text(|row| row.age.to_string()),
                },
                TableColumn {
                    header: "Gender",
                    content: CellContent::Text(|row| row.gender.clone()),
                },
                TableColumn {
                    header: "Location",
                    content: CellContent::Text(|row| row.location.clone()),
                },
                TableColumn {
                    header: "Action",
                    content: CellContent::Custom(|ui, _row| ui.button("Delete").clicked()),
                },
            ],
        },
    ]
}

/// Daily record table: `Daily Record[Date, Total User]` +
/// `Male[Count, Avg Age]` + `Female[Count, Avg Age]`.
pub fn daily_record_columns() -> Vec<ColumnGroup<DailyRow>> {
    vec![
        ColumnGroup {
            title: "Daily Record",
            columns: vec![
                TableColumn {
                    header: "Date",
                    content: CellContent::Text(|row| row.date.clone()),
                },
                TableColumn {
                    header: "Total User",
                    content: CellContent::Text(|row| {
                        row.total_user
                            .map(|total| total.to_string())
                            .unwrap_or_default()
                    }),
                },
            ],
        },
        ColumnGroup {
            title: "Male",
            columns: vec![
                TableColumn {
                    header: "Count",
                    content: CellContent::Text(|row| row.male_count.to_string()),
                },
                TableColumn {
                    header: "Avg Age",
                    content: CellContent::Text(|row| format!("{:.1}", row.male_avg_age)),
                },
            ],
        },
        ColumnGroup {
            title: "Female",
            columns: vec![
                TableColumn {
                    header: "Count",
                    content: CellContent::Text(|row| row.female_count.to_string()),
                },
                TableColumn {
                    header: "Avg Age",
                    content: CellContent::Text(|row| format!("{:.1}", row.female_avg_age)),
                },
            ],
        },
    ]
}
