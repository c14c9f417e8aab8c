//! API facade wiring the real adapters into the install command.

use std::env;
use std::path::PathBuf;

use crate::adapters::system_environment::{default_cache_dir, detect_hostname, detect_timezone};
use crate::adapters::{
    FilesystemConfigStore, ModxReleaseDistribution, PhpSetupRunner, TerminalConsole,
};
use crate::app::AppContext;
use crate::app::commands::install::{self, InstallOptions, RunTimer};
use crate::domain::{AppError, InstallSettings};

/// Build settings for `dir` (or the current directory) from the local host.
pub fn settings_for(
    dir: Option<PathBuf>,
    php_binary: String,
) -> Result<InstallSettings, AppError> {
    let dir = match dir {
        Some(dir) => dir,
        None => env::current_dir()?,
    };
    let working_dir = dir.canonicalize().map_err(|err| {
        AppError::config_error(format!(
            "Working directory {} is not accessible: {}",
            dir.display(),
            err
        ))
    })?;

    Ok(InstallSettings {
        working_dir,
        php_binary,
        timezone: detect_timezone(),
        hostname: detect_hostname(),
        cache_dir: default_cache_dir(),
    })
}

/// Download (if needed), configure and run the MODX setup in `settings.working_dir`.
pub fn install(
    settings: &InstallSettings,
    options: InstallOptions,
    timer: &RunTimer,
) -> Result<(), AppError> {
    let mut ctx = AppContext::new(
        ModxReleaseDistribution::new(settings.working_dir.clone(), settings.cache_dir.clone()),
        PhpSetupRunner::new(),
        FilesystemConfigStore::new(settings.config_path()),
        TerminalConsole::new(),
    );
    install::execute(&mut ctx, settings, options, timer)
}
