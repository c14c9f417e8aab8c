use std::process::Command;

use tracing::debug;

use crate::domain::AppError;
use crate::ports::{InstallerOutput, InstallerPort, SetupInvocation};

/// Runs `setup/index.php` with the PHP CLI.
///
/// Arguments are passed as a list; nothing goes through a shell.
#[derive(Debug, Clone, Default)]
pub struct PhpSetupRunner;

impl PhpSetupRunner {
    pub fn new() -> Self {
        Self
    }

    fn command(invocation: &SetupInvocation) -> Command {
        let mut command = Command::new(&invocation.php_binary);
        command
            .arg("-d")
            .arg(format!("date.timezone={}", invocation.timezone))
            .arg(&invocation.setup_script)
            .arg("--installmode=new")
            .arg(format!("--config={}", invocation.config_path.display()))
            .current_dir(&invocation.working_dir);
        command
    }
}

impl InstallerPort for PhpSetupRunner {
    fn run(&self, invocation: &SetupInvocation) -> Result<InstallerOutput, AppError> {
        debug!(
            php = %invocation.php_binary,
            script = %invocation.setup_script.display(),
            timezone = %invocation.timezone,
            "running MODX setup"
        );

        let output = Self::command(invocation).output().map_err(|err| {
            AppError::ExternalToolError {
                tool: invocation.php_binary.clone(),
                error: err.to_string(),
            }
        })?;

        debug!(status = ?output.status, "MODX setup exited");
        Ok(InstallerOutput {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            exit_code: output.status.code(),
        })
    }
}
