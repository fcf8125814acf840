use crate::reporting::domain::{Gav, GroupArtifact};
use crate::shared::Result;
use async_trait::async_trait;
use std::collections::HashSet;

/// ArtifactListing port for the administrative allow-list and deny-list
#[async_trait]
pub trait ArtifactListing: Send + Sync {
    /// Whether exactly this coordinate is allow-listed
    async fn is_allowed(&self, gav: &Gav) -> Result<bool>;

    /// Whether exactly this coordinate is deny-listed
    async fn is_denied(&self, gav: &Gav) -> Result<bool>;

    /// Group/artifact pairs of every allow-listed coordinate
    async fn all_allowed(&self) -> Result<HashSet<GroupArtifact>>;
}
