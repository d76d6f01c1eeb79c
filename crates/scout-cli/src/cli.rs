//! Command-line arguments for `mir4-scout`.

use std::path::PathBuf;

use clap::{Args, ColorChoice, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use tracing::level_filters::LevelFilter;

use scout_model::{DEFAULT_LANGUAGE, NewScout, Shift};
use scout_query::{ScoutFilter, Selection};

use crate::logging::{LogConfig, LogFormat};

#[derive(Parser)]
#[command(
    name = "mir4-scout",
    version,
    about = "MIR4 world boss scout roster",
    long_about = "Register world boss scouts, browse the roster as a dashboard, \
                  cards, a table or a timeline, and move it in and out of \
                  spreadsheets."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Directory holding the roster (overrides settings.toml).
    #[arg(long = "data-dir", value_name = "DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Logging setup implied by the flags. `--log-level` beats `-v`/`-q`, and
    /// either one disables `RUST_LOG`. `stderr_is_terminal` decides `auto`
    /// color when logging to stderr.
    pub fn log_config(&self, stderr_is_terminal: bool) -> LogConfig {
        let explicit = self.log_level.map(LevelFilter::from);
        let with_ansi = match self.color.color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => self.log_file.is_none() && stderr_is_terminal,
        };
        LogConfig {
            level_filter: explicit.unwrap_or_else(|| self.verbosity.tracing_level_filter()),
            use_env_filter: explicit.is_none() && !self.verbosity.is_present(),
            with_ansi,
            format: self.log_format.into(),
            log_file: self.log_file.clone(),
            ..LogConfig::default()
        }
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Register a new scout.
    Add(AddArgs),

    /// Remove the scout with the given ID (as shown by `table`).
    Delete {
        #[arg(value_name = "ID")]
        id: String,
    },

    /// Totals and language/shift breakdowns for the whole roster.
    Dashboard,

    /// Scouts as a grid of cards.
    Cards(FilterArgs),

    /// Scouts as a table, one row each.
    Table(FilterArgs),

    /// Registrations, newest first.
    Timeline(FilterArgs),

    /// Write the roster to `mir4-scouts-<date>.xlsx`.
    Export {
        /// Target directory (default: settings, then the current directory).
        #[arg(long = "output-dir", value_name = "DIR")]
        output_dir: Option<PathBuf>,
    },

    /// Replace the roster with the rows of a spreadsheet.
    Import {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Show or set the interface language (pt, en, es).
    Lang {
        #[arg(value_name = "CODE")]
        code: Option<String>,
    },

    /// Show the settings file and resolved paths.
    Config {
        /// Write a settings file with the defaults if none exists.
        #[arg(long)]
        init: bool,
    },
}

#[derive(Args, Debug, Clone)]
pub struct AddArgs {
    /// Map the scout watches.
    #[arg(long = "map", value_name = "MAP")]
    pub location: String,

    #[arg(long = "nick", value_name = "NICK")]
    pub nickname: String,

    #[arg(long, value_name = "CLAN")]
    pub clan: String,

    /// Main shift (Manhã, Tarde, Noite, Madrugada, or the English names).
    #[arg(long)]
    pub shift: Option<Shift>,

    #[arg(long, default_value = "")]
    pub power: String,

    #[arg(long, default_value = DEFAULT_LANGUAGE)]
    pub language: String,

    /// World boss role.
    #[arg(long, default_value = "")]
    pub role: String,
}

impl AddArgs {
    pub fn into_draft(self) -> NewScout {
        NewScout {
            location: self.location,
            shift: self.shift,
            nickname: self.nickname,
            power: self.power,
            clan: self.clan,
            language: self.language,
            role: self.role,
        }
    }
}

/// Roster filters shared by the list views. `all` or absent means no constraint.
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Clan name contains.
    #[arg(long)]
    pub clan: Option<String>,

    /// Exact language code.
    #[arg(long)]
    pub language: Option<String>,

    /// Exact map name.
    #[arg(long = "map")]
    pub location: Option<String>,

    #[arg(long, default_value = "all")]
    pub shift: Selection<Shift>,

    /// World boss role contains.
    #[arg(long)]
    pub role: Option<String>,

    /// Nickname, map or clan contains.
    #[arg(long)]
    pub search: Option<String>,
}

impl FilterArgs {
    pub fn to_filter(&self) -> ScoutFilter {
        ScoutFilter {
            clan: self.clan.clone().unwrap_or_default(),
            language: self.language.clone().unwrap_or_default().into(),
            location: self.location.clone().unwrap_or_default().into(),
            shift: self.shift.clone(),
            role: self.role.clone().unwrap_or_default(),
            search: self.search.clone().unwrap_or_default(),
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevelArg> for LevelFilter {
    fn from(level: LogLevelArg) -> Self {
        match level {
            LogLevelArg::Error => Self::ERROR,
            LogLevelArg::Warn => Self::WARN,
            LogLevelArg::Info => Self::INFO,
            LogLevelArg::Debug => Self::DEBUG,
            LogLevelArg::Trace => Self::TRACE,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(format: LogFormatArg) -> Self {
        match format {
            LogFormatArg::Pretty => Self::Pretty,
            LogFormatArg::Compact => Self::Compact,
            LogFormatArg::Json => Self::Json,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_add() {
        let cli = Cli::try_parse_from([
            "mir4-scout",
            "add",
            "--map",
            "LAB BICHEON",
            "--nick",
            "Kira",
            "--clan",
            "Lobos",
            "--shift",
            "noite",
        ])
        .unwrap();
        let Command::Add(args) = cli.command else {
            panic!("expected add");
        };
        let draft = args.into_draft();
        assert_eq!(draft.shift, Some(Shift::Night));
        assert_eq!(draft.language, "PT");
        assert!(draft.power.is_empty());
    }

    #[test]
    fn filter_sentinels() {
        let cli = Cli::try_parse_from([
            "mir4-scout",
            "table",
            "--language",
            "all",
            "--map",
            "LAB TOURO",
            "--shift",
            "Tarde",
        ])
        .unwrap();
        let Command::Table(args) = cli.command else {
            panic!("expected table");
        };
        let filter = args.to_filter();
        assert!(filter.language.is_all());
        assert_eq!(filter.location, Selection::Only("LAB TOURO".to_string()));
        assert_eq!(filter.shift, Selection::Only(Shift::Afternoon));
        assert!(FilterArgs::default().to_filter().is_empty());
    }

    #[test]
    fn rejects_unknown_shift() {
        let result = Cli::try_parse_from(["mir4-scout", "cards", "--shift", "lunch"]);
        assert!(result.is_err());
    }

    #[test]
    fn log_flags_map_to_config() {
        let cli = Cli::try_parse_from(["mir4-scout", "dashboard"]).unwrap();
        let config = cli.log_config(true);
        assert_eq!(config.level_filter, LevelFilter::WARN);
        assert!(config.use_env_filter);
        assert_eq!(config.format, LogFormat::Pretty);

        let cli = Cli::try_parse_from(["mir4-scout", "-vv", "--log-level", "error", "table"]).unwrap();
        let config = cli.log_config(true);
        assert_eq!(config.level_filter, LevelFilter::ERROR);
        assert!(!config.use_env_filter);

        let cli = Cli::try_parse_from([
            "mir4-scout",
            "-v",
            "--log-format",
            "json",
            "--log-file",
            "/tmp/scout.log",
            "cards",
        ])
        .unwrap();
        let config = cli.log_config(true);
        assert_eq!(config.level_filter, LevelFilter::INFO);
        assert!(!config.use_env_filter);
        assert_eq!(config.format, LogFormat::Json);
        assert!(!config.with_ansi);
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["mir4-scout", "dashboard", "--data-dir", "/tmp/roster"]).unwrap();
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/roster")));
    }
}
