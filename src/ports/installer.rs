use std::path::PathBuf;

use crate::domain::AppError;

/// Everything needed to run the MODX command-line setup once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetupInvocation {
    /// PHP interpreter program.
    pub php_binary: String,
    /// Path to `setup/index.php`.
    pub setup_script: PathBuf,
    /// Path to the written configuration document.
    pub config_path: PathBuf,
    /// Value for PHP's `date.timezone`.
    pub timezone: String,
    /// Directory the process runs in.
    pub working_dir: PathBuf,
}

/// What the setup process printed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstallerOutput {
    pub stdout: String,
    /// Exit code, if the process exited normally. Informational only.
    pub exit_code: Option<i32>,
}

impl InstallerOutput {
    /// First line of standard output, if any.
    pub fn first_line(&self) -> Option<&str> {
        self.stdout.lines().next()
    }
}

/// Port for running the external installer.
pub trait InstallerPort {
    /// Run the setup to completion and capture its output.
    ///
    /// Only a failure to launch is an error; the installer's own exit
    /// status is reported back, not judged.
    fn run(&self, invocation: &SetupInvocation) -> Result<InstallerOutput, AppError>;
}
