//! Terminal renderings of the roster.
//!
//! Every view is a pure function from records (or statistics) to a string.
//! Nothing here mutates the roster; deletion goes through the `delete`
//! command using the identifiers the views print.

mod cards;
mod dashboard;
mod table;
mod timeline;

pub use cards::render_cards;
pub use dashboard::render_dashboard;
pub use table::render_table;
pub use timeline::render_timeline;

use chrono::{DateTime, Utc};
use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use scout_model::{Locale, Shift};

use crate::i18n::t;

/// How views are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub locale: Locale,
    /// Emit ANSI styling.
    pub color: bool,
    /// Maximum table width.
    pub width: u16,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            color: false,
            width: 120,
        }
    }
}

fn new_table(options: &RenderOptions) -> Table {
    let mut table = Table::new();
    if options.color {
        table.enforce_styling();
    } else {
        table.force_no_tty();
    }
    table.set_width(options.width);
    table
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn apply_grid_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

/// `Title (count)` heading used above list views.
fn heading(locale: Locale, key: &str, count: usize) -> String {
    format!("{} ({count})", t(locale, key))
}

fn shift_label(locale: Locale, shift: Option<Shift>) -> &'static str {
    match shift {
        Some(shift) => localized_shift(locale, shift),
        None => "-",
    }
}

fn localized_shift(locale: Locale, shift: Shift) -> &'static str {
    t(locale, shift.label_key())
}

fn format_timestamp(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%d %H:%M").to_string()
}

fn or_dash(value: &str) -> &str {
    if value.is_empty() { "-" } else { value }
}
