use async_trait::async_trait;
use dep_analyzer::prelude::*;
use dep_analyzer::shared::error::AnalyzerError;
use std::collections::HashMap;

/// Mock DependencyGraphProvider serving one in-memory graph for any source
/// location and re-rooting it for coordinates
pub struct MockGraphProvider {
    root: Gav,
    adjacency: HashMap<Gav, Vec<Gav>>,
}

#[allow(dead_code)]
impl MockGraphProvider {
    pub fn new(root: &str) -> Self {
        Self {
            root: root.parse().unwrap(),
            adjacency: HashMap::new(),
        }
    }

    pub fn with_edges(mut self, parent: &str, children: &[&str]) -> Self {
        self.adjacency.insert(
            parent.parse().unwrap(),
            children.iter().map(|c| c.parse().unwrap()).collect(),
        );
        self
    }
}

#[async_trait]
impl DependencyGraphProvider for MockGraphProvider {
    async fn graph_for_scm(&self, _scm: &ScmLocator) -> Result<DependencyGraph> {
        Ok(DependencyGraph::from_adjacency(&self.root, &self.adjacency))
    }

    async fn graph_for_gav(&self, gav: &Gav) -> Result<DependencyGraph> {
        let graph = DependencyGraph::from_adjacency(&self.root, &self.adjacency);
        match graph.find(gav) {
            Some(id) => Ok(graph.rerooted_at(id)),
            None => Err(AnalyzerError::analysis(format!("{} is not in the graph", gav)).into()),
        }
    }
}
