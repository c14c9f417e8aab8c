//! Ambient values read from the host: timezone, hostname, cache location.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

const DEFAULT_TIMEZONE: &str = "UTC";
const DEFAULT_HOSTNAME: &str = "localhost";
const CACHE_ENV: &str = "MODX_INSTALL_CACHE";

/// Timezone of this process as an IANA name, falling back to `UTC`.
pub fn detect_timezone() -> String {
    timezone_from(
        env::var("TZ").ok(),
        fs::read_to_string("/etc/timezone").ok(),
        fs::read_link("/etc/localtime").ok(),
    )
}

/// Local hostname: `$HOSTNAME`, `/etc/hostname`, then the `hostname` program,
/// falling back to `localhost`.
pub fn detect_hostname() -> String {
    hostname_from(
        env::var("HOSTNAME").ok(),
        fs::read_to_string("/etc/hostname").ok(),
        hostname_program,
    )
}

/// Directory for cached release archives.
pub fn default_cache_dir() -> PathBuf {
    if let Some(dir) = env::var_os(CACHE_ENV).filter(|value| !value.is_empty()) {
        return PathBuf::from(dir);
    }
    dirs::cache_dir().unwrap_or_else(env::temp_dir).join("modx-install")
}

fn timezone_from(
    tz_env: Option<String>,
    etc_timezone: Option<String>,
    localtime_link: Option<PathBuf>,
) -> String {
    let from_env = tz_env.and_then(|value| {
        let value = value.trim().trim_start_matches(':');
        zone_from_path(Path::new(value)).or_else(|| non_empty(value))
    });

    from_env
        .or_else(|| etc_timezone.and_then(|content| non_empty(content.trim())))
        .or_else(|| localtime_link.and_then(|link| zone_from_path(&link)))
        .unwrap_or_else(|| DEFAULT_TIMEZONE.to_string())
}

fn hostname_from(
    env_value: Option<String>,
    etc_hostname: Option<String>,
    program: impl FnOnce() -> Option<String>,
) -> String {
    env_value
        .and_then(|value| non_empty(value.trim()))
        .or_else(|| etc_hostname.and_then(|content| non_empty(content.trim())))
        .or_else(|| program().and_then(|output| non_empty(output.trim())))
        .unwrap_or_else(|| DEFAULT_HOSTNAME.to_string())
}

fn hostname_program() -> Option<String> {
    let output = Command::new("hostname").output().ok()?;
    if !output.status.success() {
        return None;
    }
    Some(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// `/usr/share/zoneinfo/Europe/Amsterdam` -> `Europe/Amsterdam`.
fn zone_from_path(path: &Path) -> Option<String> {
    let text = path.to_string_lossy();
    let (_, zone) = text.split_once("zoneinfo/")?;
    non_empty(zone.trim_matches('/'))
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() { None } else { Some(value.to_string()) }
}
