//! `mir4-scout`: the scout roster from the terminal.

use std::io::{self, IsTerminal};

use anyhow::{Context, Result};
use chrono::{Local, Utc};
use clap::{ColorChoice, Parser};

use scout_cli::cli::{Cli, Command};
use scout_cli::commands::{
    ListView, open_roster, run_add, run_config, run_dashboard, run_delete, run_export,
    run_import, run_lang, run_list,
};
use scout_cli::logging::init_logging;
use scout_cli::settings::Settings;
use scout_cli::views::RenderOptions;
use scout_store::FileStore;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = cli.log_config(io::stderr().is_terminal());
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match run(cli) {
        Ok(output) => {
            if !output.is_empty() {
                println!("{output}");
            }
            0
        }
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn run(cli: Cli) -> Result<String> {
    let settings = Settings::load()?;
    let data_dir = settings.data_dir(cli.data_dir.as_deref());
    tracing::debug!(data_dir = %data_dir.display(), "resolved data directory");
    let store = FileStore::new(&data_dir);

    match cli.command {
        Command::Lang { code } => {
            let mut store = store;
            run_lang(&mut store, code.as_deref())
        }
        Command::Config { init } => run_config(
            &settings,
            Settings::config_path().as_deref(),
            &data_dir,
            init,
        ),
        command => {
            let (mut roster, locale) = open_roster(store)
                .with_context(|| format!("open roster in {}", data_dir.display()))?;
            let options = RenderOptions {
                locale,
                color: color_enabled(cli.color.color),
                width: settings.display.width,
            };
            match command {
                Command::Add(args) => run_add(&mut roster, args, locale, Utc::now()),
                Command::Delete { id } => run_delete(&mut roster, &id, locale),
                Command::Dashboard => Ok(run_dashboard(&roster, &options)),
                Command::Cards(args) => {
                    Ok(run_list(&roster, ListView::Cards, &args.to_filter(), &options))
                }
                Command::Table(args) => {
                    Ok(run_list(&roster, ListView::Table, &args.to_filter(), &options))
                }
                Command::Timeline(args) => Ok(run_list(
                    &roster,
                    ListView::Timeline,
                    &args.to_filter(),
                    &options,
                )),
                Command::Export { output_dir } => {
                    let dir = settings.export_dir(output_dir.as_deref());
                    let today = Local::now().date_naive();
                    run_export(&roster, &dir, today, locale).map(|(_, message)| message)
                }
                Command::Import { file } => run_import(&mut roster, &file, Utc::now(), locale),
                Command::Lang { .. } | Command::Config { .. } => Ok(String::new()),
            }
        }
    }
}

fn color_enabled(choice: ColorChoice) -> bool {
    match choice {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => io::stdout().is_terminal(),
    }
}
