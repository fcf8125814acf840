use super::{ArtifactReport, Gav};
use serde::Serialize;
use std::collections::BTreeSet;

/// Classification bucket of an external dependency.
///
/// The three community buckets partition the classified coordinates;
/// allowed and denied are independent tags on top of that partition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommunityBucket {
    /// A compatible rebuilt version exists
    BestMatch,
    /// Some rebuilt version of the same artifact exists
    BuiltVersion,
    /// Nothing rebuilt, nothing allow-listed
    Plain,
}

/// Flattened view of the project's external dependencies at its module
/// boundaries, together with the full report tree it was derived from.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvancedReport {
    artifact_report: ArtifactReport,
    allowed_artifacts: BTreeSet<Gav>,
    denied_artifacts: BTreeSet<Gav>,
    community_gavs_with_best_match_versions: BTreeSet<Gav>,
    community_gavs_with_built_versions: BTreeSet<Gav>,
    community_gavs: BTreeSet<Gav>,
}

impl AdvancedReport {
    pub fn new(artifact_report: ArtifactReport) -> Self {
        Self {
            artifact_report,
            allowed_artifacts: BTreeSet::new(),
            denied_artifacts: BTreeSet::new(),
            community_gavs_with_best_match_versions: BTreeSet::new(),
            community_gavs_with_built_versions: BTreeSet::new(),
            community_gavs: BTreeSet::new(),
        }
    }

    pub fn add_allowed(&mut self, gav: Gav) {
        self.allowed_artifacts.insert(gav);
    }

    pub fn add_denied(&mut self, gav: Gav) {
        self.denied_artifacts.insert(gav);
    }

    /// Files `gav` under `bucket`, moving it out of any other bucket.
    pub(crate) fn add_community(&mut self, gav: Gav, bucket: CommunityBucket) {
        self.community_gavs_with_best_match_versions.remove(&gav);
        self.community_gavs_with_built_versions.remove(&gav);
        self.community_gavs.remove(&gav);

        let target = match bucket {
            CommunityBucket::BestMatch => &mut self.community_gavs_with_best_match_versions,
            CommunityBucket::BuiltVersion => &mut self.community_gavs_with_built_versions,
            CommunityBucket::Plain => &mut self.community_gavs,
        };
        target.insert(gav);
    }

    pub fn artifact_report(&self) -> &ArtifactReport {
        &self.artifact_report
    }

    pub fn allowed_artifacts(&self) -> &BTreeSet<Gav> {
        &self.allowed_artifacts
    }

    pub fn denied_artifacts(&self) -> &BTreeSet<Gav> {
        &self.denied_artifacts
    }

    pub fn community_gavs_with_best_match_versions(&self) -> &BTreeSet<Gav> {
        &self.community_gavs_with_best_match_versions
    }

    pub fn community_gavs_with_built_versions(&self) -> &BTreeSet<Gav> {
        &self.community_gavs_with_built_versions
    }

    pub fn community_gavs(&self) -> &BTreeSet<Gav> {
        &self.community_gavs
    }

    /// Bucket holding `gav`, if it was classified at all.
    pub fn bucket_of(&self, gav: &Gav) -> Option<CommunityBucket> {
        if self.community_gavs_with_best_match_versions.contains(gav) {
            Some(CommunityBucket::BestMatch)
        } else if self.community_gavs_with_built_versions.contains(gav) {
            Some(CommunityBucket::BuiltVersion)
        } else if self.community_gavs.contains(gav) {
            Some(CommunityBucket::Plain)
        } else {
            None
        }
    }

    /// Number of distinct coordinates in the community buckets.
    pub fn classified_count(&self) -> usize {
        self.community_gavs_with_best_match_versions.len()
            + self.community_gavs_with_built_versions.len()
            + self.community_gavs.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporting::domain::VersionLookupResult;

    fn root() -> ArtifactReport {
        ArtifactReport::new(
            Gav::new("org.test", "app", "1.0").unwrap(),
            VersionLookupResult::empty(),
            false,
            false,
            vec![],
        )
    }

    #[test]
    fn test_buckets_deduplicate() {
        let mut report = AdvancedReport::new(root());
        let gav = Gav::new("org.test", "lib", "1.0").unwrap();
        report.add_community(gav.clone(), CommunityBucket::Plain);
        report.add_community(gav.clone(), CommunityBucket::Plain);
        report.add_allowed(gav.clone());
        report.add_allowed(gav.clone());

        assert_eq!(report.community_gavs().len(), 1);
        assert_eq!(report.allowed_artifacts().len(), 1);
        assert_eq!(report.classified_count(), 1);
        assert_eq!(report.bucket_of(&gav), Some(CommunityBucket::Plain));
    }

    #[test]
    fn test_buckets_stay_disjoint() {
        let mut report = AdvancedReport::new(root());
        let gav = Gav::new("org.test", "lib", "1.0").unwrap();
        report.add_community(gav.clone(), CommunityBucket::Plain);
        report.add_community(gav.clone(), CommunityBucket::BestMatch);

        assert!(report.community_gavs().is_empty());
        assert_eq!(report.community_gavs_with_best_match_versions().len(), 1);
        assert_eq!(report.classified_count(), 1);
        assert_eq!(report.bucket_of(&gav), Some(CommunityBucket::BestMatch));
    }

    #[test]
    fn test_bucket_of_unclassified() {
        let report = AdvancedReport::new(root());
        let gav = Gav::new("org.test", "lib", "1.0").unwrap();
        assert!(report.bucket_of(&gav).is_none());
    }

    #[test]
    fn test_serialized_field_names() {
        let mut report = AdvancedReport::new(root());
        report.add_community(
            Gav::new("org.test", "lib", "1.0").unwrap(),
            CommunityBucket::BestMatch,
        );
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(
            json["communityGavsWithBestMatchVersions"][0]["artifactId"],
            "lib"
        );
        assert!(json["artifactReport"].is_object());
        assert!(json["deniedArtifacts"].as_array().unwrap().is_empty());
    }
}
