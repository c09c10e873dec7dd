//! Finding the archive `vsce package` left behind

use crate::models::{PackError, Result, SelectionStrategy, ARCHIVE_SUFFIX};
use lazy_static::lazy_static;
use regex::Regex;
use std::cmp::Ordering;
use std::fs;
use std::io;
use std::path::Path;
use std::time::SystemTime;
use tracing::debug;

lazy_static! {
    static ref VERSION_TAIL: Regex =
        Regex::new(r"(\d+)\.(\d+)\.(\d+)(?:-([0-9A-Za-z.-]+))?$").unwrap();
}

/// A matching directory entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveCandidate {
    pub name: String,
    pub modified: Option<SystemTime>,
}

impl ArchiveCandidate {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            modified: None,
        }
    }
}

/// Unbounded version number, kept as digits without leading zeros.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionNumber(String);

impl VersionNumber {
    pub fn new(digits: &str) -> Self {
        let trimmed = digits.trim_start_matches('0');
        Self(if trimmed.is_empty() { "0" } else { trimmed }.to_string())
    }
}

impl Ord for VersionNumber {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .len()
            .cmp(&other.0.len())
            .then_with(|| self.0.cmp(&other.0))
    }
}

impl PartialOrd for VersionNumber {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// One dot-separated pre-release part. Numbers sort below words.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum PreReleasePart {
    Number(VersionNumber),
    Word(String),
}

impl PreReleasePart {
    fn parse(part: &str) -> Self {
        if !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit()) {
            Self::Number(VersionNumber::new(part))
        } else {
            Self::Word(part.to_string())
        }
    }
}

/// Trailing version of an archive name; a pre-release sorts below its release.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveVersion {
    pub major: VersionNumber,
    pub minor: VersionNumber,
    pub patch: VersionNumber,
    /// Empty for a release.
    pub pre: Vec<PreReleasePart>,
}

impl ArchiveVersion {
    pub fn parse(name: &str) -> Option<Self> {
        let stem = name.strip_suffix(ARCHIVE_SUFFIX)?.strip_suffix('.')?;
        let caps = VERSION_TAIL.captures(stem)?;
        Some(Self {
            major: VersionNumber::new(&caps[1]),
            minor: VersionNumber::new(&caps[2]),
            patch: VersionNumber::new(&caps[3]),
            pre: caps
                .get(4)
                .map(|m| m.as_str().split('.').map(PreReleasePart::parse).collect())
                .unwrap_or_default(),
        })
    }
}

impl Ord for ArchiveVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        (&self.major, &self.minor, &self.patch)
            .cmp(&(&other.major, &other.minor, &other.patch))
            .then_with(|| match (self.pre.is_empty(), other.pre.is_empty()) {
                (true, true) => Ordering::Equal,
                (true, false) => Ordering::Greater,
                (false, true) => Ordering::Less,
                (false, false) => self.pre.cmp(&other.pre),
            })
    }
}

impl PartialOrd for ArchiveVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Whether a file name carries the archive suffix
pub fn is_archive_name(name: &str) -> bool {
    name.strip_suffix(ARCHIVE_SUFFIX)
        .is_some_and(|stem| stem.ends_with('.'))
}

/// List the entries of `directory` whose names end in `.vsix`
pub fn list_candidates(directory: &Path) -> Result<Vec<ArchiveCandidate>> {
    let entries =
        fs::read_dir(directory).map_err(|e| PackError::filesystem("list", directory, e))?;

    let mut candidates = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| PackError::filesystem("list", directory, e))?;
        let file_name = entry.file_name();
        let Some(name) = file_name.to_str() else {
            if is_archive_name(&file_name.to_string_lossy()) {
                return Err(PackError::filesystem(
                    "read name of",
                    entry.path(),
                    io::Error::new(io::ErrorKind::InvalidData, "file name is not valid UTF-8"),
                ));
            }
            debug!(name = ?file_name, "skipping non UTF-8 entry");
            continue;
        };
        if !is_archive_name(name) {
            continue;
        }

        let modified = entry.metadata().ok().and_then(|m| m.modified().ok());
        candidates.push(ArchiveCandidate {
            name: name.to_string(),
            modified,
        });
    }

    Ok(candidates)
}

/// Pick one candidate, or `None` if there are none
pub fn select_archive(
    candidates: &[ArchiveCandidate],
    strategy: SelectionStrategy,
) -> Option<&ArchiveCandidate> {
    match strategy {
        SelectionStrategy::Lexicographic => candidates.iter().max_by(|a, b| a.name.cmp(&b.name)),
        SelectionStrategy::SemanticVersion => candidates.iter().max_by(|a, b| {
            ArchiveVersion::parse(&a.name)
                .cmp(&ArchiveVersion::parse(&b.name))
                .then_with(|| a.name.cmp(&b.name))
        }),
        SelectionStrategy::Newest => candidates.iter().max_by(|a, b| {
            a.modified
                .cmp(&b.modified)
                .then_with(|| a.name.cmp(&b.name))
        }),
    }
}

/// Locate the produced archive with the default reverse-lexicographic rule
pub fn locate_produced_archive(directory: &Path) -> Result<String> {
    locate_archive(directory, SelectionStrategy::Lexicographic)
}

/// Locate the produced archive with an explicit selection strategy
pub fn locate_archive(directory: &Path, strategy: SelectionStrategy) -> Result<String> {
    let candidates = list_candidates(directory)?;
    debug!(count = candidates.len(), ?strategy, "archive candidates");

    select_archive(&candidates, strategy)
        .map(|c| c.name.clone())
        .ok_or_else(|| PackError::NoArchiveProduced {
            directory: directory.to_path_buf(),
            suffix: ARCHIVE_SUFFIX.to_string(),
        })
}
