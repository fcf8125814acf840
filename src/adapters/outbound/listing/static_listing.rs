use crate::ports::outbound::ArtifactListing;
use crate::reporting::domain::{Gav, GroupArtifact};
use crate::shared::Result;
use async_trait::async_trait;
use std::collections::HashSet;

/// StaticArtifactListing adapter holding the allow-list and deny-list in
/// memory, typically as loaded from the configuration file
#[derive(Debug, Clone, Default)]
pub struct StaticArtifactListing {
    allowed: HashSet<Gav>,
    denied: HashSet<Gav>,
}

impl StaticArtifactListing {
    pub fn new(
        allowed: impl IntoIterator<Item = Gav>,
        denied: impl IntoIterator<Item = Gav>,
    ) -> Self {
        Self {
            allowed: allowed.into_iter().collect(),
            denied: denied.into_iter().collect(),
        }
    }

    pub fn allowed_count(&self) -> usize {
        self.allowed.len()
    }

    pub fn denied_count(&self) -> usize {
        self.denied.len()
    }
}

#[async_trait]
impl ArtifactListing for StaticArtifactListing {
    async fn is_allowed(&self, gav: &Gav) -> Result<bool> {
        Ok(self.allowed.contains(gav))
    }

    async fn is_denied(&self, gav: &Gav) -> Result<bool> {
        Ok(self.denied.contains(gav))
    }

    async fn all_allowed(&self) -> Result<HashSet<GroupArtifact>> {
        Ok(self.allowed.iter().map(Gav::group_artifact).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gav(s: &str) -> Gav {
        s.parse().unwrap()
    }

    #[tokio::test]
    async fn test_membership_is_exact() {
        let listing = StaticArtifactListing::new(
            vec![gav("org.lib:util:2.0")],
            vec![gav("org.bad:thing:1.0")],
        );

        assert!(listing.is_allowed(&gav("org.lib:util:2.0")).await.unwrap());
        assert!(!listing.is_allowed(&gav("org.lib:util:2.1")).await.unwrap());
        assert!(listing.is_denied(&gav("org.bad:thing:1.0")).await.unwrap());
        assert!(!listing.is_denied(&gav("org.lib:util:2.0")).await.unwrap());
    }

    #[tokio::test]
    async fn test_all_allowed_projects_versions_away() {
        let listing = StaticArtifactListing::new(
            vec![gav("org.lib:util:2.0"), gav("org.lib:util:2.1")],
            vec![],
        );

        let all = listing.all_allowed().await.unwrap();
        assert_eq!(all.len(), 1);
        assert!(all.contains(&GroupArtifact::new("org.lib", "util").unwrap()));
        assert_eq!(listing.allowed_count(), 2);
    }

    #[tokio::test]
    async fn test_empty_listing() {
        let listing = StaticArtifactListing::default();
        assert!(listing.all_allowed().await.unwrap().is_empty());
        assert_eq!(listing.denied_count(), 0);
    }
}
