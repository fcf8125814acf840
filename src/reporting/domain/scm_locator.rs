use crate::shared::error::AnalyzerError;
use crate::shared::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Source-control location of a project: repository URL plus optional revision.
///
/// A missing revision means the repository's default branch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScmLocator {
    scm_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    revision: Option<String>,
}

impl ScmLocator {
    pub fn new(scm_url: impl Into<String>, revision: Option<String>) -> Result<Self> {
        let scm_url = scm_url.into().trim().to_string();
        if scm_url.is_empty() {
            return Err(AnalyzerError::invalid_input("SCM URL can't be empty").into());
        }

        // git would treat a leading dash as an option
        if scm_url.starts_with('-') {
            return Err(AnalyzerError::invalid_input(format!(
                "SCM URL '{}' must not start with '-'",
                scm_url
            ))
            .into());
        }

        let revision = revision
            .map(|r| r.trim().to_string())
            .filter(|r| !r.is_empty());
        if let Some(rev) = &revision {
            if rev.starts_with('-') {
                return Err(AnalyzerError::invalid_input(format!(
                    "revision '{}' must not start with '-'",
                    rev
                ))
                .into());
            }
        }

        Ok(Self { scm_url, revision })
    }

    pub fn scm_url(&self) -> &str {
        &self.scm_url
    }

    pub fn revision(&self) -> Option<&str> {
        self.revision.as_deref()
    }

    /// Whether `other` names the same source. Revisions only have to agree
    /// when both sides specify one.
    pub fn matches(&self, other: &ScmLocator) -> bool {
        let normalize = |url: &str| url.trim_end_matches('/').trim_end_matches(".git").to_string();
        if normalize(&self.scm_url) != normalize(&other.scm_url) {
            return false;
        }
        match (&self.revision, &other.revision) {
            (Some(a), Some(b)) => a == b,
            _ => true,
        }
    }
}

impl fmt::Display for ScmLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.revision {
            Some(rev) => write!(f, "{}@{}", self.scm_url, rev),
            None => write!(f, "{}", self.scm_url),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_trims_and_drops_blank_revision() {
        let scm = ScmLocator::new(" https://git.example.com/app.git ", Some("  ".to_string()))
            .unwrap();
        assert_eq!(scm.scm_url(), "https://git.example.com/app.git");
        assert!(scm.revision().is_none());
    }

    #[test]
    fn test_empty_url_is_invalid_input() {
        let err = ScmLocator::new("", None).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<AnalyzerError>(),
            Some(AnalyzerError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_option_like_values_rejected() {
        assert!(ScmLocator::new("--upload-pack=x", None).is_err());
        assert!(ScmLocator::new("https://h/r.git", Some("-b".to_string())).is_err());
    }

    #[test]
    fn test_matches_ignores_git_suffix() {
        let a = ScmLocator::new("https://h/app.git", Some("v1".to_string())).unwrap();
        let b = ScmLocator::new("https://h/app", None).unwrap();
        let c = ScmLocator::new("https://h/app", Some("v2".to_string())).unwrap();
        assert!(a.matches(&b));
        assert!(!a.matches(&c));
    }

    #[test]
    fn test_display() {
        let scm = ScmLocator::new("https://h/app.git", Some("main".to_string())).unwrap();
        assert_eq!(scm.to_string(), "https://h/app.git@main");
    }
}
