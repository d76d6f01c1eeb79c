use std::fmt::Write;

use comfy_table::{Attribute, Cell, Color};

use scout_model::Scout;

use super::{RenderOptions, apply_grid_style, format_timestamp, heading, new_table, shift_label};
use crate::i18n::t;

/// Cards per grid row.
pub const CARDS_PER_ROW: usize = 3;

/// One card per record, laid out in a grid.
pub fn render_cards(scouts: &[&Scout], options: &RenderOptions) -> String {
    let locale = options.locale;
    let mut out = String::new();
    let _ = writeln!(out, "{}", heading(locale, "list.activeScouts", scouts.len()));
    if scouts.is_empty() {
        let _ = write!(out, "{}", t(locale, "list.empty"));
        return out;
    }

    let mut grid = new_table(options);
    apply_grid_style(&mut grid);
    for chunk in scouts.chunks(CARDS_PER_ROW) {
        let mut row: Vec<Cell> = chunk.iter().map(|scout| card_cell(scout, options)).collect();
        // Pad the last row so every column has a cell.
        row.resize_with(CARDS_PER_ROW.min(scouts.len()), || Cell::new(""));
        grid.add_row(row);
    }
    let _ = write!(out, "{grid}");
    out
}

fn card_cell(scout: &Scout, options: &RenderOptions) -> Cell {
    let locale = options.locale;
    let mut text = String::new();
    let _ = writeln!(
        text,
        "{}  [{}]",
        scout.location,
        shift_label(locale, scout.shift)
    );
    let _ = writeln!(text, "{}", scout.nickname);
    if !scout.power.is_empty() {
        let _ = writeln!(text, "{}: {}", t(locale, "card.power"), scout.power);
    }
    let _ = writeln!(text, "{}: {}", t(locale, "card.clan"), scout.clan);
    let _ = writeln!(text, "{}: {}", t(locale, "card.language"), scout.language);
    if !scout.role.is_empty() {
        let _ = writeln!(text, "{}: {}", t(locale, "card.wbRole"), scout.role);
    }
    let _ = writeln!(text, "{}", format_timestamp(scout.created_at));
    let _ = write!(text, "id: {}", scout.id);

    Cell::new(text)
        .fg(Color::White)
        .add_attribute(Attribute::Bold)
}
