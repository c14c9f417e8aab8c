//! Run the MODX command-line setup against a written config document.

use std::path::Path;

use tracing::{debug, warn};

use crate::domain::InstallSettings;
use crate::ports::{ConfigDocumentStore, ConsolePort, InstallerPort, SetupInvocation};

const CLEANUP_WARNING: &str =
    "Warning: could not clean up the setup config file, please remove this manually.";
const NO_OUTPUT: &str = "MODX Setup produced no output.";

/// Invoke the installer, echo its first output line and remove the document.
///
/// Neither the installer's exit status nor a failure to launch it fails the
/// run: a launch failure is a warning and counts as empty output. The
/// document is always removed; a failed removal is only a warning.
pub fn run_setup<I, S, C>(
    installer: &I,
    store: &S,
    console: &mut C,
    settings: &InstallSettings,
    config_path: &Path,
) where
    I: InstallerPort + ?Sized,
    S: ConfigDocumentStore + ?Sized,
    C: ConsolePort + ?Sized,
{
    let invocation = SetupInvocation {
        php_binary: settings.php_binary.clone(),
        setup_script: settings.setup_script(),
        config_path: config_path.to_path_buf(),
        timezone: settings.timezone.clone(),
        working_dir: settings.working_dir.clone(),
    };

    console.say("Running MODX Setup...");
    let first_line = match installer.run(&invocation) {
        Ok(output) => {
            debug!(exit_code = ?output.exit_code, "MODX setup finished");
            output.first_line().map(str::to_string)
        }
        Err(err) => {
            warn!(error = %err, "MODX setup could not be started");
            console.warn(&format!("Could not run MODX Setup: {}", err));
            None
        }
    };

    match first_line {
        Some(line) => console.say(&line),
        None => console.say(NO_OUTPUT),
    }

    if let Err(err) = store.remove(config_path) {
        warn!(path = %config_path.display(), error = %err, "setup config cleanup failed");
        console.warn(CLEANUP_WARNING);
    }
}
