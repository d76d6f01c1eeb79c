use std::fmt::Write;

use scout_model::Scout;
use scout_query::newest_first;

use super::{RenderOptions, format_timestamp, heading, or_dash};
use crate::i18n::t;

/// Registrations as a vertical feed, newest first.
pub fn render_timeline(scouts: &[&Scout], options: &RenderOptions) -> String {
    let locale = options.locale;
    let mut out = String::new();
    let _ = writeln!(out, "{}", heading(locale, "list.timelineLine", scouts.len()));
    if scouts.is_empty() {
        let _ = write!(out, "{}", t(locale, "timeline.empty"));
        return out;
    }

    let ordered = newest_first(scouts.iter().copied());
    let last = ordered.len() - 1;
    for (index, scout) in ordered.into_iter().enumerate() {
        let _ = writeln!(
            out,
            "● {}  {} [{}]",
            format_timestamp(scout.created_at),
            t(locale, "timeline.entry"),
            scout.language
        );
        let _ = writeln!(
            out,
            "│ {} · {} · {} · {}",
            scout.nickname,
            scout.clan,
            scout.location,
            or_dash(&scout.power)
        );
        if index != last {
            let _ = writeln!(out, "│");
        }
    }
    out
}
