//! Shared testing utilities for modx-install CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// First line printed by the stand-in PHP interpreter.
pub const FAKE_SETUP_OUTPUT: &str = "Installation finished in 0.42s";

/// Isolated site directory with an unpacked distribution and a fake PHP binary.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    site_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let site_dir = root.path().join("myshop");
        fs::create_dir_all(site_dir.join("setup")).expect("Failed to create site directory");
        fs::write(site_dir.join("setup/index.php"), "<?php\n")
            .expect("Failed to create setup script");

        let ctx = Self { root, site_dir };
        ctx.write_fake_php();
        ctx
    }

    /// Directory MODX is installed into.
    pub fn site_dir(&self) -> &Path {
        &self.site_dir
    }

    /// Copy of the config document as the installer saw it.
    pub fn captured_config(&self) -> Option<String> {
        fs::read_to_string(self.root.path().join("captured-config.xml")).ok()
    }

    /// Arguments the installer was invoked with, one per line.
    pub fn captured_args(&self) -> Option<Vec<String>> {
        fs::read_to_string(self.root.path().join("captured-args"))
            .ok()
            .map(|content| content.lines().map(str::to_string).collect())
    }

    pub fn installer_ran(&self) -> bool {
        self.root.path().join("captured-args").exists()
    }

    /// Build a command for invoking the compiled binary against the site directory.
    pub fn cli(&self) -> Command {
        self.cli_in(self.site_dir())
    }

    /// Build a command for invoking the compiled binary against a custom directory.
    pub fn cli_in<P: AsRef<Path>>(&self, dir: P) -> Command {
        self.command(self.fake_php(), dir.as_ref())
    }

    /// Build a command that uses `php` as the interpreter.
    pub fn cli_with_php<P: AsRef<Path>>(&self, php: P) -> Command {
        self.command(php.as_ref().to_path_buf(), self.site_dir())
    }

    fn command(&self, php: PathBuf, dir: &Path) -> Command {
        let mut cmd = Command::cargo_bin("modx-install").expect("Failed to locate binary");
        cmd.arg("--php")
            .arg(php)
            .arg("--dir")
            .arg(dir)
            .env("MODX_INSTALL_CACHE", self.root.path().join("cache"))
            .env("TZ", "Europe/Amsterdam")
            .env_remove("MODX_INSTALL_LOG");
        cmd
    }

    /// Flags for every field, so no prompt is shown.
    pub fn all_fields() -> Vec<&'static str> {
        vec![
            "--name",
            "shop",
            "--user",
            "root",
            "--password",
            "longenoughpw",
            "--host",
            "127.0.0.1/",
            "--base",
            "store",
            "--language",
            "en",
            "--manager-user",
            "admin",
            "--manager-password",
            "generate",
            "--manager-email",
            "ops@example.com",
        ]
    }

    fn fake_php(&self) -> PathBuf {
        self.root.path().join("fake-php")
    }

    fn write_fake_php(&self) {
        let script = format!(
            r#"#!/bin/sh
printf '%s\n' "$@" > "{args}"
for arg in "$@"; do
  case "$arg" in
    --config=*) cp "${{arg#--config=}}" "{config}" ;;
  esac
done
echo "{output}"
echo "second line"
exit 3
"#,
            args = self.root.path().join("captured-args").display(),
            config = self.root.path().join("captured-config.xml").display(),
            output = FAKE_SETUP_OUTPUT,
        );
        let path = self.fake_php();
        fs::write(&path, script).expect("Failed to write fake php");

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
                .expect("Failed to make fake php executable");
        }
    }
}
