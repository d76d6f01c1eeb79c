//! One function per subcommand. Each returns the text to print on stdout so
//! the binary stays a thin dispatcher.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use chrono::{DateTime, NaiveDate, Utc};
use tracing::{debug, info, info_span, warn};

use scout_model::{KNOWN_MAPS, LANGUAGE_CODES, Locale, ScoutId};
use scout_query::{RosterStats, ScoutFilter};
use scout_sheet::{export_file_name, export_workbook, import_file};
use scout_store::{KeyValueStore, Roster, StoreError, load_locale, save_locale};

use crate::cli::AddArgs;
use crate::i18n::t;
use crate::settings::Settings;
use crate::views::{RenderOptions, render_cards, render_dashboard, render_table, render_timeline};

/// Which list view to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListView {
    Cards,
    Table,
    Timeline,
}

/// Open the roster and read the interface language from the same store.
pub fn open_roster<S: KeyValueStore>(store: S) -> Result<(Roster<S>, Locale)> {
    let locale = load_locale(&store);
    let roster = Roster::open(store).map_err(|error| store_error(&error))?;
    debug!(count = roster.len(), %locale, "roster loaded");
    Ok((roster, locale))
}

pub fn run_add<S: KeyValueStore>(
    roster: &mut Roster<S>,
    args: AddArgs,
    locale: Locale,
    now: DateTime<Utc>,
) -> Result<String> {
    let draft = args.into_draft();
    if !draft.location.is_empty() && !KNOWN_MAPS.contains(&draft.location.as_str()) {
        debug!(map = %draft.location, "map is not one of the usual boss maps");
    }
    if !LANGUAGE_CODES.contains(&draft.language.as_str()) {
        warn!(language = %draft.language, "unusual language code");
    }
    let scout = roster
        .register(draft, now)
        .with_context(|| t(locale, "toast.required").to_string())?;
    let message = format!("{} ({})", t(locale, "toast.added"), scout.id);
    ensure_persisted(roster)?;
    Ok(message)
}

/// Deleting an unknown ID is reported but is not an error.
pub fn run_delete<S: KeyValueStore>(
    roster: &mut Roster<S>,
    id: &str,
    locale: Locale,
) -> Result<String> {
    let id = ScoutId::from(id);
    if !roster.delete(&id) {
        return Ok(format!("{}: {id}", t(locale, "toast.notFound")));
    }
    ensure_persisted(roster)?;
    Ok(format!("{}: {id}", t(locale, "toast.deleted")))
}

/// The dashboard always summarises the whole roster.
pub fn run_dashboard<S: KeyValueStore>(roster: &Roster<S>, options: &RenderOptions) -> String {
    let stats = RosterStats::from_records(roster.scouts());
    render_dashboard(&stats, options)
}

pub fn run_list<S: KeyValueStore>(
    roster: &Roster<S>,
    view: ListView,
    filter: &ScoutFilter,
    options: &RenderOptions,
) -> String {
    let scouts = filter.apply(roster.scouts());
    debug!(
        ?view,
        matched = scouts.len(),
        total = roster.len(),
        "filter applied"
    );
    match view {
        ListView::Cards => render_cards(&scouts, options),
        ListView::Table => render_table(&scouts, options),
        ListView::Timeline => render_timeline(&scouts, options),
    }
}

/// Write the whole roster to `<dir>/mir4-scouts-<today>.xlsx`.
pub fn run_export<S: KeyValueStore>(
    roster: &Roster<S>,
    dir: &Path,
    today: NaiveDate,
    locale: Locale,
) -> Result<(PathBuf, String)> {
    let span = info_span!("export", dir = %dir.display());
    let _guard = span.enter();

    let bytes = export_workbook(roster.scouts()).context("build workbook")?;
    fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;
    let path = dir.join(export_file_name(today));
    fs::write(&path, bytes).with_context(|| format!("write {}", path.display()))?;
    info!(path = %path.display(), count = roster.len(), "roster exported");

    let message = format!("{} {}", t(locale, "toast.exported"), path.display());
    Ok((path, message))
}

/// Replace the roster with the rows of `file`. On any error the roster is
/// left as it was.
pub fn run_import<S: KeyValueStore>(
    roster: &mut Roster<S>,
    file: &Path,
    now: DateTime<Utc>,
    locale: Locale,
) -> Result<String> {
    let span = info_span!("import", file = %file.display());
    let _guard = span.enter();

    let scouts = import_file(file, now).context(t(locale, "toast.importError").to_string())?;
    let count = scouts.len();
    roster.replace_all(scouts);
    ensure_persisted(roster)?;
    Ok(format!("{count} {}", t(locale, "toast.imported")))
}

/// Show the interface language, or switch it when `code` is given.
pub fn run_lang<S: KeyValueStore>(store: &mut S, code: Option<&str>) -> Result<String> {
    let locale = match code {
        Some(code) => {
            let locale: Locale = code.parse()?;
            save_locale(store, locale).context("save language preference")?;
            info!(%locale, "interface language changed");
            locale
        }
        None => load_locale(store),
    };
    Ok(format!(
        "{}: {} ({})",
        t(locale, "toast.language"),
        locale.native_name(),
        locale.code()
    ))
}

/// Describe where settings and data live; `init` writes a default file.
pub fn run_config(
    settings: &Settings,
    config_path: Option<&Path>,
    data_dir: &Path,
    init: bool,
) -> Result<String> {
    let mut lines = Vec::new();
    match config_path {
        Some(path) => {
            if init && !path.exists() {
                settings.save_to(path)?;
                lines.push(format!("created {}", path.display()));
            }
            lines.push(format!("settings: {}", path.display()));
        }
        None => lines.push("settings: (no config directory on this platform)".to_string()),
    }
    lines.push(format!("data: {}", data_dir.display()));
    lines.push(format!("width: {}", settings.display.width));
    lines.push(format!("export: {}", settings.export_dir(None).display()));
    Ok(lines.join("\n"))
}

/// Surface a storage failure from the last mutation as a command error.
fn ensure_persisted<S: KeyValueStore>(roster: &Roster<S>) -> Result<()> {
    match roster.last_persist_error() {
        None => Ok(()),
        Some(error) => Err(store_error(error)),
    }
}

fn store_error(error: &StoreError) -> anyhow::Error {
    match error.suggestion() {
        Some(hint) => anyhow!("{error}. {hint}"),
        None => anyhow!("{error}"),
    }
}
