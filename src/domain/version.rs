use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::domain::AppError;

/// MODX release requested on the command line.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ModxVersion {
    /// Newest stable (`-pl`) release.
    #[default]
    Latest,
    Release(ReleaseTag),
}

impl FromStr for ModxVersion {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("latest") {
            return Ok(ModxVersion::Latest);
        }
        ReleaseTag::parse(trimmed).map(ModxVersion::Release).ok_or_else(|| {
            AppError::download(format!(
                "Unknown MODX version '{}': use the format 2.3.2-pl or 'latest'",
                value
            ))
        })
    }
}

impl fmt::Display for ModxVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModxVersion::Latest => write!(f, "latest"),
            ModxVersion::Release(tag) => tag.fmt(f),
        }
    }
}

/// A concrete release such as `2.8.5-pl`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseTag {
    major: u64,
    minor: u64,
    patch: u64,
    stage: String,
}

impl ReleaseTag {
    /// Parse `X.Y.Z-stage`, with an optional leading `v`.
    pub fn parse(value: &str) -> Option<Self> {
        let normalized = value.trim().trim_start_matches('v');
        let (core, stage) = normalized.split_once('-')?;
        if stage.is_empty() || !stage.chars().all(|c| c.is_ascii_alphanumeric()) {
            return None;
        }

        let mut parts = core.split('.');
        let major = parts.next()?.parse().ok()?;
        let minor = parts.next()?.parse().ok()?;
        let patch = parts.next()?.parse().ok()?;
        if parts.next().is_some() {
            return None;
        }

        Some(Self { major, minor, patch, stage: stage.to_string() })
    }

    /// Whether this is a stable ("patch level") release.
    pub fn is_stable(&self) -> bool {
        self.stage == "pl"
    }

    fn cmp_numbers(&self, other: &Self) -> Ordering {
        (self.major, self.minor, self.patch).cmp(&(other.major, other.minor, other.patch))
    }
}

impl fmt::Display for ReleaseTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}-{}", self.major, self.minor, self.patch, self.stage)
    }
}

/// Pick the newest stable release from `git ls-remote --tags` output.
pub fn latest_stable_release(ls_remote_output: &str) -> Option<ReleaseTag> {
    ls_remote_output
        .lines()
        .filter_map(extract_tag_ref)
        .filter_map(ReleaseTag::parse)
        .filter(ReleaseTag::is_stable)
        .max_by(|left, right| left.cmp_numbers(right))
}

fn extract_tag_ref(line: &str) -> Option<&str> {
    line.split_whitespace().nth(1)?.strip_prefix("refs/tags/")
}
