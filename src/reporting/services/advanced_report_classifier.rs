use crate::ports::outbound::{ArtifactListing, ModuleBoundaryOracle};
use crate::reporting::domain::{AdvancedReport, ArtifactReport, CommunityBucket, Gav, GroupArtifact};
use crate::reporting::policies::VersionProvenance;
use crate::shared::Result;
use futures::future::BoxFuture;
use std::collections::HashSet;
use std::path::Path;

/// State of one classification walk.
#[derive(Default)]
struct Walk {
    modules: HashSet<Gav>,
    allowed_group_artifacts: Option<HashSet<GroupArtifact>>,
    allowed: Vec<Gav>,
    denied: Vec<Gav>,
    community: Vec<(Gav, CommunityBucket)>,
}

/// AdvancedReportClassifier flattens a report tree into classification
/// buckets at the project's module boundaries
///
/// Starting from the root's dependencies, a dependency that is one of the
/// project's own modules is descended into and never classified. Any other
/// dependency is an external candidate: it is classified (unless its
/// version was produced internally) and its own dependencies are ignored.
pub struct AdvancedReportClassifier<'a, O, L, P> {
    oracle: &'a O,
    listing: &'a L,
    provenance: &'a P,
}

impl<'a, O, L, P> AdvancedReportClassifier<'a, O, L, P>
where
    O: ModuleBoundaryOracle,
    L: ArtifactListing,
    P: VersionProvenance,
{
    pub fn new(oracle: &'a O, listing: &'a L, provenance: &'a P) -> Self {
        Self {
            oracle,
            listing,
            provenance,
        }
    }

    /// Classifies the dependencies of `report` against the modules found in
    /// `working_copy`
    ///
    /// # Returns
    /// The advanced report, holding `report` itself plus the buckets
    ///
    /// # Errors
    /// Propagates failures of the module oracle and the artifact listing
    pub async fn build_advanced_report(
        &self,
        report: ArtifactReport,
        working_copy: &Path,
    ) -> Result<AdvancedReport> {
        let mut walk = Walk::default();
        self.classify_dependencies(&report, working_copy, &mut walk)
            .await?;

        let mut advanced = AdvancedReport::new(report);
        for gav in walk.allowed {
            advanced.add_allowed(gav);
        }
        for gav in walk.denied {
            advanced.add_denied(gav);
        }
        for (gav, bucket) in walk.community {
            advanced.add_community(gav, bucket);
        }
        Ok(advanced)
    }

    fn classify_dependencies<'s>(
        &'s self,
        report: &'s ArtifactReport,
        working_copy: &'s Path,
        walk: &'s mut Walk,
    ) -> BoxFuture<'s, Result<()>> {
        Box::pin(async move {
            for dependency in report.dependencies() {
                let gav = dependency.gav();
                if walk.modules.contains(gav) {
                    continue;
                }

                if self.oracle.is_module(working_copy, gav)? {
                    walk.modules.insert(gav.clone());
                    self.classify_dependencies(dependency, working_copy, &mut *walk)
                        .await?;
                    continue;
                }

                if self.provenance.is_internally_produced(gav.version()) {
                    continue;
                }

                self.classify_external(dependency, walk).await?;
            }
            Ok(())
        })
    }

    async fn classify_external(&self, dependency: &ArtifactReport, walk: &mut Walk) -> Result<()> {
        let gav = dependency.gav();
        if dependency.is_allowed() {
            walk.allowed.push(gav.clone());
        }
        if dependency.is_denied() {
            walk.denied.push(gav.clone());
        }

        let bucket = if dependency.best_match_version().is_some() {
            CommunityBucket::BestMatch
        } else if !dependency.available_versions().is_empty()
            || self.has_allowed_group_artifact(gav, walk).await?
        {
            CommunityBucket::BuiltVersion
        } else {
            CommunityBucket::Plain
        };
        walk.community.push((gav.clone(), bucket));
        Ok(())
    }

    async fn has_allowed_group_artifact(&self, gav: &Gav, walk: &mut Walk) -> Result<bool> {
        if walk.allowed_group_artifacts.is_none() {
            walk.allowed_group_artifacts = Some(self.listing.all_allowed().await?);
        }
        Ok(walk
            .allowed_group_artifacts
            .as_ref()
            .is_some_and(|gas| gas.contains(&gav.group_artifact())))
    }
}
