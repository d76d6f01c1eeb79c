use std::fmt::Write;

use comfy_table::{Attribute, Cell, CellAlignment, ColumnConstraint};

use scout_model::Scout;

use super::{
    RenderOptions, align_column, apply_table_style, dim_cell, format_timestamp, header_cell,
    heading, new_table, or_dash, shift_label,
};
use crate::i18n::t;

const ID_COLUMN: usize = 0;
const REGISTERED_COLUMN: usize = 8;

/// One row per record. The ID column is what `delete` takes.
pub fn render_table(scouts: &[&Scout], options: &RenderOptions) -> String {
    let locale = options.locale;
    let mut out = String::new();
    let _ = writeln!(out, "{}", heading(locale, "list.tableView", scouts.len()));
    if scouts.is_empty() {
        let _ = write!(out, "{}", t(locale, "list.empty"));
        return out;
    }

    let mut table = new_table(options);
    apply_table_style(&mut table);
    table.set_header(
        [
            "table.id",
            "table.nickname",
            "table.clan",
            "table.map",
            "table.power",
            "table.language",
            "table.shift",
            "table.wbRole",
            "table.registered",
        ]
        .into_iter()
        .map(|key| header_cell(t(locale, key)))
        .collect::<Vec<_>>(),
    );
    for scout in scouts {
        table.add_row(vec![
            dim_cell(&scout.id),
            Cell::new(&scout.nickname).add_attribute(Attribute::Bold),
            Cell::new(&scout.clan),
            Cell::new(&scout.location),
            Cell::new(or_dash(&scout.power)),
            Cell::new(&scout.language),
            Cell::new(shift_label(locale, scout.shift)),
            Cell::new(or_dash(&scout.role)),
            dim_cell(format_timestamp(scout.created_at)),
        ]);
    }
    align_column(&mut table, 4, CellAlignment::Right);
    // IDs and timestamps must stay on one line to be copied into `delete`.
    for index in [ID_COLUMN, REGISTERED_COLUMN] {
        if let Some(column) = table.column_mut(index) {
            column.set_constraint(ColumnConstraint::ContentWidth);
        }
    }
    let _ = writeln!(out, "{table}");
    let _ = write!(out, "mir4-scout delete <ID>");
    out
}
