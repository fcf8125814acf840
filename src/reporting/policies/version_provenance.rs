use crate::shared::error::AnalyzerError;
use crate::shared::Result;
use std::cmp::Ordering;

/// Default suffix marking versions produced by the internal build system
pub const DEFAULT_INTERNAL_SUFFIX: &str = "redhat";

/// Decides whether a version string was produced internally (rebuilt) or
/// comes from upstream. Pure: no I/O.
pub trait VersionProvenance: Send + Sync {
    fn is_internally_produced(&self, version: &str) -> bool;
}

/// Build counter of a rebuilt version.
///
/// Kept as its digit string so any number of digits compares numerically:
/// leading zeros are ignored, then the longer number is the greater one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildNumber<'v>(&'v str);

impl<'v> BuildNumber<'v> {
    fn new(digits: &'v str) -> Self {
        Self(digits.trim_start_matches('0'))
    }
}

impl Ord for BuildNumber<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .len()
            .cmp(&other.0.len())
            .then_with(|| self.0.cmp(other.0))
    }
}

impl PartialOrd for BuildNumber<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Recognises rebuilt versions by a build suffix.
///
/// A version is internally produced when it ends in `<sep><suffix>-<digits>`,
/// where `<sep>` is `.` or `-` and the suffix comparison ignores ASCII case:
///
/// - `1.2.3.redhat-00001` → upstream `1.2.3`, build 1
/// - `4.1-redhat-2` → upstream `4.1`, build 2
/// - `1.2.3` → upstream
#[derive(Debug, Clone)]
pub struct BuildSuffixProvenance {
    suffix: String,
}

impl BuildSuffixProvenance {
    pub fn new(suffix: impl Into<String>) -> Result<Self> {
        let suffix = suffix.into();
        if suffix.is_empty() || !suffix.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(AnalyzerError::invalid_input(format!(
                "internal version suffix '{}' must be non-empty and alphanumeric",
                suffix
            ))
            .into());
        }
        Ok(Self { suffix })
    }

    /// Splits an internally produced version into its upstream version and
    /// build number. Returns `None` for upstream versions.
    pub fn split<'v>(&self, version: &'v str) -> Option<(&'v str, BuildNumber<'v>)> {
        let (head, build) = version.rsplit_once('-')?;
        if build.is_empty() || !build.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }

        let cut = head.len().checked_sub(self.suffix.len())?;
        if !head.is_char_boundary(cut) {
            return None;
        }
        let (rest, suffix) = head.split_at(cut);
        if !suffix.eq_ignore_ascii_case(&self.suffix) {
            return None;
        }

        let upstream = rest.strip_suffix('.').or_else(|| rest.strip_suffix('-'))?;
        if upstream.is_empty() {
            return None;
        }
        Some((upstream, BuildNumber::new(build)))
    }

    /// Upstream part of `version`; upstream versions are returned unchanged.
    pub fn upstream_version<'v>(&self, version: &'v str) -> &'v str {
        self.split(version).map(|(upstream, _)| upstream).unwrap_or(version)
    }
}

impl Default for BuildSuffixProvenance {
    fn default() -> Self {
        Self {
            suffix: DEFAULT_INTERNAL_SUFFIX.to_string(),
        }
    }
}

impl VersionProvenance for BuildSuffixProvenance {
    fn is_internally_produced(&self, version: &str) -> bool {
        self.split(version).is_some()
    }
}
