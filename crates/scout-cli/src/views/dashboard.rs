use std::fmt::Write;

use comfy_table::{Attribute, Cell, CellAlignment, Color};

use scout_query::RosterStats;

use super::{
    RenderOptions, align_column, apply_grid_style, apply_table_style, dim_cell, header_cell,
    localized_shift, new_table,
};
use crate::i18n::t;

/// Width of a full proportion bar, in characters.
pub const BAR_WIDTH: usize = 24;

/// Four headline figures plus the language and shift breakdowns.
pub fn render_dashboard(stats: &RosterStats, options: &RenderOptions) -> String {
    let locale = options.locale;
    let mut out = String::new();
    let _ = writeln!(out, "{}", t(locale, "header.title"));
    let _ = writeln!(out, "{}", t(locale, "header.subtitle"));

    let mut figures = new_table(options);
    figures.set_header(vec![
        header_cell(t(locale, "dashboard.totalScouts")),
        header_cell(t(locale, "dashboard.activeClans")),
        header_cell(t(locale, "dashboard.coveredMaps")),
        header_cell(t(locale, "dashboard.languages")),
    ]);
    apply_grid_style(&mut figures);
    figures.add_row(vec![
        figure_cell(stats.total),
        figure_cell(stats.distinct_clans),
        figure_cell(stats.distinct_locations),
        figure_cell(stats.language_count()),
    ]);
    for index in 0..4 {
        align_column(&mut figures, index, CellAlignment::Center);
    }
    let _ = writeln!(out, "{figures}");

    let languages = stats
        .by_language
        .iter()
        .map(|(code, count)| (code.clone(), *count));
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", t(locale, "dashboard.languageDistribution"));
    let _ = writeln!(out, "{}", breakdown_table(stats, languages, options));

    let shifts = stats
        .by_shift
        .iter()
        .map(|(shift, count)| (localized_shift(locale, *shift).to_string(), *count));
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", t(locale, "dashboard.mainShifts"));
    let _ = write!(out, "{}", breakdown_table(stats, shifts, options));
    out
}

fn breakdown_table(
    stats: &RosterStats,
    rows: impl Iterator<Item = (String, usize)>,
    options: &RenderOptions,
) -> String {
    let mut table = new_table(options);
    apply_table_style(&mut table);
    let mut empty = true;
    for (label, count) in rows {
        empty = false;
        let share = stats.share(count);
        table.add_row(vec![
            Cell::new(label).add_attribute(Attribute::Bold),
            Cell::new(bar(share, BAR_WIDTH)).fg(Color::Green),
            Cell::new(count),
            dim_cell(format!("{:.0}%", share * 100.0)),
        ]);
    }
    if empty {
        table.add_row(vec![dim_cell("-")]);
    }
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    table.to_string()
}

/// Proportion bar; a non-finite share draws as empty.
pub fn bar(share: f64, width: usize) -> String {
    let filled = if share.is_finite() {
        ((share.clamp(0.0, 1.0) * width as f64).round() as usize).min(width)
    } else {
        0
    };
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

fn figure_cell(value: usize) -> Cell {
    Cell::new(value)
        .fg(Color::Yellow)
        .add_attribute(Attribute::Bold)
}
