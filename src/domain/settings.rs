use std::path::{Path, PathBuf};

/// Name of the setup configuration document written into the working directory.
pub const CONFIG_FILE_NAME: &str = "config.xml";

/// Location of the setup entry point inside an unpacked distribution.
pub const SETUP_SCRIPT: &str = "setup/index.php";

/// Explicit configuration for one install run.
#[derive(Debug, Clone)]
pub struct InstallSettings {
    /// Directory MODX is installed into.
    pub working_dir: PathBuf,
    /// PHP interpreter used to run the setup script.
    pub php_binary: String,
    /// Timezone handed to PHP as `date.timezone`.
    pub timezone: String,
    /// Local hostname, the default database host.
    pub hostname: String,
    /// Where downloaded release archives are kept.
    pub cache_dir: PathBuf,
}

impl InstallSettings {
    /// Final component of the working directory, used for default names.
    pub fn project_name(&self) -> String {
        self.working_dir
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// Working directory rendered with exactly one trailing separator.
    pub fn dir_prefix(&self) -> String {
        dir_prefix(&self.working_dir)
    }

    pub fn config_path(&self) -> PathBuf {
        self.working_dir.join(CONFIG_FILE_NAME)
    }

    pub fn setup_script(&self) -> PathBuf {
        self.working_dir.join(SETUP_SCRIPT)
    }
}

/// Render a directory path with exactly one trailing `/`.
pub fn dir_prefix(path: &Path) -> String {
    let display = path.to_string_lossy();
    format!("{}/", display.trim_end_matches('/'))
}
