//! modx-install: download, configure and run the MODX command-line setup for a fresh site.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{install, settings_for};
pub use app::commands::install::{InstallOptions, RunTimer};
pub use domain::{AppError, ExplicitParameters, InstallSettings, ModxVersion};
