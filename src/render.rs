//! Markdown rendering for tables

use tabled::builder::Builder;
use tabled::settings::Style;

use crate::model::Table;

/// Render a table as a Markdown pipe table.
///
/// Cells are already Markdown-safe; rendering only lays them out. Output
/// is deterministic and carries no trailing newline.
pub fn to_markdown(table: &Table) -> String {
    let mut builder = Builder::default();
    builder.push_record(table.headers.iter().cloned());
    for row in &table.rows {
        builder.push_record(row.iter().cloned());
    }

    let mut rendered = builder.build();
    rendered.with(Style::markdown());
    rendered.to_string()
}
