//! Terminal front-end for the MIR4 world boss scout roster.

pub mod cli;
pub mod commands;
pub mod i18n;
pub mod logging;
pub mod settings;
pub mod views;
