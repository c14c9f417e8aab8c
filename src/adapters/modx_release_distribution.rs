//! Fetches and unpacks MODX release archives.

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::Duration;

use reqwest::blocking::Client;
use tempfile::{NamedTempFile, TempDir};
use tracing::debug;
use url::Url;
use zip::ZipArchive;

use crate::domain::version::latest_stable_release;
use crate::domain::{AppError, ModxVersion, ReleaseTag, SETUP_SCRIPT};
use crate::ports::{ConsolePort, DistributionPort};

const RELEASES_REPOSITORY: &str = "https://github.com/modxcms/revolution.git";
const DOWNLOAD_BASE_URL: &str = "https://modx.com/download/direct/";
const DOWNLOAD_TIMEOUT_SECS: u64 = 300;

/// Release archives from modx.com, cached on disk and unpacked in place.
#[derive(Debug, Clone)]
pub struct ModxReleaseDistribution {
    working_dir: PathBuf,
    cache_dir: PathBuf,
}

impl ModxReleaseDistribution {
    pub fn new(working_dir: impl Into<PathBuf>, cache_dir: impl Into<PathBuf>) -> Self {
        Self { working_dir: working_dir.into(), cache_dir: cache_dir.into() }
    }

    fn resolve_tag(&self, version: &ModxVersion) -> Result<ReleaseTag, AppError> {
        match version {
            ModxVersion::Release(tag) => Ok(tag.clone()),
            ModxVersion::Latest => {
                let listing = run_tool("git", &["ls-remote", "--tags", RELEASES_REPOSITORY])?;
                latest_stable_release(&listing).ok_or_else(|| {
                    AppError::download("no stable release found in the MODX repository")
                })
            }
        }
    }

    fn fetch_archive(
        &self,
        tag: &ReleaseTag,
        force_download: bool,
        console: &mut dyn ConsolePort,
    ) -> Result<PathBuf, AppError> {
        let archive = self.cache_dir.join(archive_name(tag));
        if archive.is_file() && !force_download {
            debug!(archive = %archive.display(), "using cached MODX archive");
            console.say(&format!("Using cached MODX {} archive.", tag));
            return Ok(archive);
        }

        fs::create_dir_all(&self.cache_dir).map_err(|err| {
            AppError::download(format!(
                "could not create cache directory {}: {}",
                self.cache_dir.display(),
                err
            ))
        })?;

        let url = archive_url(tag)?;
        console.say(&format!("Downloading MODX {}...", tag));
        debug!(%url, "downloading MODX archive");

        let client = Client::builder()
            .timeout(Duration::from_secs(DOWNLOAD_TIMEOUT_SECS))
            .build()
            .map_err(|err| AppError::download(format!("failed to create HTTP client: {}", err)))?;
        let mut response = client
            .get(url.clone())
            .send()
            .and_then(|response| response.error_for_status())
            .map_err(|err| AppError::download(format!("download of {} failed: {}", url, err)))?;

        // Only a complete download lands under the cached name.
        let mut partial = NamedTempFile::new_in(&self.cache_dir).map_err(|err| {
            AppError::download(format!("could not stage download: {}", err))
        })?;
        response
            .copy_to(partial.as_file_mut())
            .map_err(|err| AppError::download(format!("download of {} failed: {}", url, err)))?;
        partial.persist(&archive).map_err(|err| {
            AppError::download(format!("could not cache {}: {}", archive.display(), err.error))
        })?;

        Ok(archive)
    }

    fn unpack(
        &self,
        tag: &ReleaseTag,
        archive: &Path,
        console: &mut dyn ConsolePort,
    ) -> Result<(), AppError> {
        console.say(&format!("Extracting MODX {}...", tag));

        let staging = TempDir::new_in(&self.working_dir).map_err(|err| {
            AppError::download(format!("could not create extraction directory: {}", err))
        })?;
        extract_archive(archive, staging.path())?;

        let root = distribution_root(staging.path()).map_err(|err| {
            AppError::download(format!("could not read extracted archive: {}", err))
        })?;
        move_entries(&root, &self.working_dir).map_err(|err| {
            AppError::download(format!("could not move MODX files into place: {}", err))
        })?;
        Ok(())
    }
}

impl DistributionPort for ModxReleaseDistribution {
    fn prepare(
        &self,
        version: &ModxVersion,
        force_download: bool,
        console: &mut dyn ConsolePort,
    ) -> Result<(), AppError> {
        let setup_script = self.working_dir.join(SETUP_SCRIPT);
        if setup_script.is_file() && !force_download {
            debug!(script = %setup_script.display(), "reusing unpacked MODX distribution");
            return Ok(());
        }

        let tag = self.resolve_tag(version)?;
        let archive = self.fetch_archive(&tag, force_download, console)?;
        self.unpack(&tag, &archive, console)?;

        if !setup_script.is_file() {
            return Err(AppError::download(format!(
                "archive for MODX {} did not contain {}",
                tag, SETUP_SCRIPT
            )));
        }
        Ok(())
    }
}

fn archive_name(tag: &ReleaseTag) -> String {
    format!("modx-{}.zip", tag)
}

fn archive_url(tag: &ReleaseTag) -> Result<Url, AppError> {
    Url::parse(DOWNLOAD_BASE_URL)
        .and_then(|base| base.join(&archive_name(tag)))
        .map_err(|err| AppError::download(format!("invalid download URL: {}", err)))
}

fn run_tool(program: &str, args: &[&str]) -> Result<String, AppError> {
    let output = Command::new(program).args(args).output().map_err(|err| {
        AppError::download(format!("failed to execute {}: {}", program, err))
    })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        return Err(AppError::download(if stderr.is_empty() {
            format!("{} exited with status {}", program, output.status)
        } else {
            format!("{}: {}", program, stderr)
        }));
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

fn extract_archive(archive: &Path, into: &Path) -> Result<(), AppError> {
    let file = File::open(archive).map_err(|err| {
        AppError::download(format!("could not open {}: {}", archive.display(), err))
    })?;
    ZipArchive::new(file)
        .and_then(|mut zip| zip.extract(into))
        .map_err(|err| {
            AppError::download(format!("could not extract {}: {}", archive.display(), err))
        })
}

/// Release archives wrap everything in one `modx-X.Y.Z-pl/` folder.
fn distribution_root(extracted: &Path) -> io::Result<PathBuf> {
    let entries = fs::read_dir(extracted)?.collect::<Result<Vec<_>, _>>()?;
    if let [only] = entries.as_slice()
        && only.file_type()?.is_dir()
    {
        return Ok(only.path());
    }
    Ok(extracted.to_path_buf())
}

/// Move every entry of `from` into `to`, merging directories and replacing files.
fn move_entries(from: &Path, to: &Path) -> io::Result<()> {
    fs::create_dir_all(to)?;
    for entry in fs::read_dir(from)? {
        let entry = entry?;
        let source = entry.path();
        let target = to.join(entry.file_name());

        if entry.file_type()?.is_dir() && target.is_dir() {
            move_entries(&source, &target)?;
            continue;
        }
        if target.is_dir() {
            fs::remove_dir_all(&target)?;
        } else if target.exists() {
            fs::remove_file(&target)?;
        }
        fs::rename(&source, &target)?;
    }
    Ok(())
}
