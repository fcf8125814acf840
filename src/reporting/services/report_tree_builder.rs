use crate::ports::outbound::{ArtifactListing, VersionResolver};
use crate::reporting::domain::{ArtifactReport, DependencyGraph, NodeId};
use crate::shared::Result;
use futures::future::BoxFuture;
use std::collections::HashSet;

/// ReportTreeBuilder turns a dependency graph into a report tree
///
/// Every graph node reached is looked up once per occurrence. A node that
/// was already expanded somewhere else in the walk still gets its own row,
/// but its dependencies are not expanded again. This keeps diamonds and
/// cycles finite: in `A -> {B, C}, B -> D, C -> D, D -> E` the `E` row
/// only appears under the `D` reached through `B`.
///
/// Any lookup failure aborts the walk; no partial tree is returned.
pub struct ReportTreeBuilder<'a, V, L> {
    resolver: &'a V,
    listing: &'a L,
}

impl<'a, V, L> ReportTreeBuilder<'a, V, L>
where
    V: VersionResolver,
    L: ArtifactListing,
{
    pub fn new(resolver: &'a V, listing: &'a L) -> Self {
        Self { resolver, listing }
    }

    /// Builds the report tree rooted at the graph's root
    ///
    /// # Errors
    /// Propagates the first failure of the version resolver or the artifact
    /// listing
    pub async fn build_report(&self, graph: &DependencyGraph) -> Result<ArtifactReport> {
        let mut visited = HashSet::new();
        visited.insert(graph.root());
        self.build_node(graph, graph.root(), true, &mut visited)
            .await
    }

    fn build_node<'s>(
        &'s self,
        graph: &'s DependencyGraph,
        id: NodeId,
        expand: bool,
        visited: &'s mut HashSet<NodeId>,
    ) -> BoxFuture<'s, Result<ArtifactReport>> {
        Box::pin(async move {
            let gav = graph.gav(id);
            let lookup = self.resolver.lookup_built_versions(gav).await?;
            let allowed = self.listing.is_allowed(gav).await?;
            let denied = self.listing.is_denied(gav).await?;

            let mut dependencies = Vec::new();
            if expand {
                for &child in graph.dependencies(id) {
                    // marked on entry so that cycles below the root terminate
                    let first_visit = visited.insert(child);
                    let report = self
                        .build_node(graph, child, first_visit, &mut *visited)
                        .await?;
                    dependencies.push(report);
                }
            }

            Ok(ArtifactReport::new(
                gav.clone(),
                lookup,
                allowed,
                denied,
                dependencies,
            ))
        })
    }
}
