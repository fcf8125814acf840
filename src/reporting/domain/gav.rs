use crate::shared::error::AnalyzerError;
use crate::shared::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Maximum length of a single coordinate component (security limit)
const MAX_COMPONENT_LENGTH: usize = 255;

fn validate_component(value: &str, field: &str, allow_plus: bool) -> Result<()> {
    if value.is_empty() {
        return Err(AnalyzerError::invalid_input(format!("{} cannot be empty", field)).into());
    }

    if value.len() > MAX_COMPONENT_LENGTH {
        return Err(AnalyzerError::invalid_input(format!(
            "{} is too long ({} bytes). Maximum allowed: {} bytes",
            field,
            value.len(),
            MAX_COMPONENT_LENGTH
        ))
        .into());
    }

    // Coordinates end up in repository URLs, so anything path-like is refused
    if !value
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-' || c == '_' || (allow_plus && c == '+'))
    {
        return Err(AnalyzerError::invalid_input(format!(
            "{} '{}' contains invalid characters",
            field, value
        ))
        .into());
    }

    Ok(())
}

/// Group and artifact of a coordinate, without the version.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupArtifact {
    group_id: String,
    artifact_id: String,
}

impl GroupArtifact {
    pub fn new(group_id: impl Into<String>, artifact_id: impl Into<String>) -> Result<Self> {
        let group_id = group_id.into();
        let artifact_id = artifact_id.into();
        validate_component(&group_id, "groupId", false)?;
        validate_component(&artifact_id, "artifactId", false)?;
        Ok(Self {
            group_id,
            artifact_id,
        })
    }

    pub fn group_id(&self) -> &str {
        &self.group_id
    }

    pub fn artifact_id(&self) -> &str {
        &self.artifact_id
    }
}

impl fmt::Display for GroupArtifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.group_id, self.artifact_id)
    }
}

/// Artifact coordinate: group, artifact and version.
///
/// Equality, ordering and hashing cover all three fields, so a `Gav` is
/// usable directly as a set or map key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "GavFields", into = "GavFields")]
pub struct Gav {
    group_id: String,
    artifact_id: String,
    version: String,
}

impl Gav {
    pub fn new(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        version: impl Into<String>,
    ) -> Result<Self> {
        let group_id = group_id.into();
        let artifact_id = artifact_id.into();
        let version = version.into();

        validate_component(&group_id, "groupId", false)?;
        validate_component(&artifact_id, "artifactId", false)?;
        validate_component(&version, "version", true)?;

        Ok(Self {
            group_id,
            artifact_id,
            version,
        })
    }

    pub fn group_id(&self) -> &str {
        &self.group_id
    }

    pub fn artifact_id(&self) -> &str {
        &self.artifact_id
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn group_artifact(&self) -> GroupArtifact {
        GroupArtifact {
            group_id: self.group_id.clone(),
            artifact_id: self.artifact_id.clone(),
        }
    }
}

impl fmt::Display for Gav {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group_id, self.artifact_id, self.version)
    }
}

impl FromStr for Gav {
    type Err = anyhow::Error;

    /// Parses `groupId:artifactId:version`.
    fn from_str(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.trim().split(':').collect();
        match parts.as_slice() {
            [group_id, artifact_id, version] => Gav::new(*group_id, *artifact_id, *version),
            _ => Err(AnalyzerError::invalid_input(format!(
                "'{}' is not a coordinate. Expected groupId:artifactId:version",
                s
            ))
            .into()),
        }
    }
}

/// Wire shape of a coordinate, matching the field names used by build tooling.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GavFields {
    group_id: String,
    artifact_id: String,
    version: String,
}

impl TryFrom<GavFields> for Gav {
    type Error = anyhow::Error;

    fn try_from(fields: GavFields) -> Result<Self> {
        Gav::new(fields.group_id, fields.artifact_id, fields.version)
    }
}

impl From<Gav> for GavFields {
    fn from(gav: Gav) -> Self {
        Self {
            group_id: gav.group_id,
            artifact_id: gav.artifact_id,
            version: gav.version,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_gav_new_valid() {
        let gav = Gav::new("org.apache.commons", "commons-lang3", "3.12.0").unwrap();
        assert_eq!(gav.group_id(), "org.apache.commons");
        assert_eq!(gav.artifact_id(), "commons-lang3");
        assert_eq!(gav.version(), "3.12.0");
    }

    #[test]
    fn test_gav_new_empty_component() {
        assert!(Gav::new("", "a", "1.0").is_err());
        assert!(Gav::new("g", "", "1.0").is_err());
        assert!(Gav::new("g", "a", "").is_err());
    }

    #[test]
    fn test_gav_rejects_path_characters() {
        let err = Gav::new("org/evil", "a", "1.0").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<AnalyzerError>(),
            Some(AnalyzerError::InvalidInput { .. })
        ));
        assert!(Gav::new("g", "a", "../1.0").is_err());
    }

    #[test]
    fn test_version_allows_plus() {
        assert!(Gav::new("g", "a", "1.0+build.5").is_ok());
        assert!(Gav::new("g", "a+b", "1.0").is_err());
    }

    #[test]
    fn test_underscore_in_artifact_id() {
        let gav: Gav = "org.scala-lang.modules:scala-xml_2.13:2.1.0".parse().unwrap();
        assert_eq!(gav.artifact_id(), "scala-xml_2.13");
    }

    #[test]
    fn test_gav_too_long() {
        let long = "a".repeat(MAX_COMPONENT_LENGTH + 1);
        assert!(Gav::new(long, "a", "1.0").is_err());
    }

    #[test]
    fn test_gav_parse_and_display() {
        let gav: Gav = "org.acme:widget:1.2.3".parse().unwrap();
        assert_eq!(gav.to_string(), "org.acme:widget:1.2.3");
    }

    #[test]
    fn test_gav_parse_wrong_arity() {
        assert!("org.acme:widget".parse::<Gav>().is_err());
        assert!("org.acme:widget:jar:1.0".parse::<Gav>().is_err());
    }

    #[test]
    fn test_gav_hash_uses_all_fields() {
        let mut set = HashSet::new();
        set.insert(Gav::new("g", "a", "1.0").unwrap());
        set.insert(Gav::new("g", "a", "1.0").unwrap());
        set.insert(Gav::new("g", "a", "2.0").unwrap());
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_group_artifact_ignores_version() {
        let gav = Gav::new("g", "a", "1.0").unwrap();
        assert_eq!(gav.group_artifact(), GroupArtifact::new("g", "a").unwrap());
        assert_eq!(gav.group_artifact().to_string(), "g:a");
    }

    #[test]
    fn test_gav_serde_camel_case() {
        let gav = Gav::new("g", "a", "1.0").unwrap();
        let json = serde_json::to_string(&gav).unwrap();
        assert_eq!(json, r#"{"groupId":"g","artifactId":"a","version":"1.0"}"#);

        let back: Gav = serde_json::from_str(&json).unwrap();
        assert_eq!(back, gav);
    }

    #[test]
    fn test_gav_deserialize_validates() {
        let json = r#"{"groupId":"","artifactId":"a","version":"1.0"}"#;
        assert!(serde_json::from_str::<Gav>(json).is_err());
    }
}
