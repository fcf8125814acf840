use crate::ports::outbound::DependencyGraphProvider;
use crate::reporting::domain::{DependencyGraph, Gav, ScmLocator};
use crate::shared::error::AnalyzerError;
use crate::shared::security::{read_checked, MAX_FILE_SIZE};
use crate::shared::Result;
use async_trait::async_trait;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::PathBuf;

#[derive(Debug, Deserialize)]
struct ExportedScm {
    scm_url: String,
    #[serde(default)]
    revision: Option<String>,
}

/// On-disk shape of an exported dependency graph.
#[derive(Debug, Deserialize)]
struct GraphExport {
    root: String,
    #[serde(default)]
    scm: Option<ExportedScm>,
    #[serde(default)]
    dependencies: HashMap<String, Vec<String>>,
}

/// Parsed export with validated coordinates.
struct LoadedGraph {
    root: Gav,
    scm: Option<ScmLocator>,
    adjacency: HashMap<Gav, Vec<Gav>>,
}

impl LoadedGraph {
    fn contains(&self, gav: &Gav) -> bool {
        &self.root == gav
            || self.adjacency.contains_key(gav)
            || self.adjacency.values().any(|deps| deps.contains(gav))
    }
}

/// GraphFileReader adapter serving dependency graphs from an exported JSON
/// document
///
/// ```json
/// {
///   "root": "org.acme:app:1.0",
///   "scm": { "scm_url": "https://git.example.com/app.git", "revision": "v1.0" },
///   "dependencies": {
///     "org.acme:app:1.0": ["org.acme:core:1.0", "com.google.guava:guava:32.1.2-jre"]
///   }
/// }
/// ```
///
/// Within one export a coordinate names a single node, so the same
/// coordinate listed under several parents is a shared dependency.
pub struct GraphFileReader {
    path: PathBuf,
}

impl GraphFileReader {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    fn load(&self) -> Result<LoadedGraph> {
        let content = read_checked(&self.path, MAX_FILE_SIZE)?;
        let export: GraphExport = serde_json::from_str(&content).map_err(|e| {
            AnalyzerError::analysis(format!(
                "{} is not a valid dependency graph export: {}",
                self.path.display(),
                e
            ))
        })?;

        let root = Self::parse_coordinate(&export.root)?;
        let scm = export
            .scm
            .map(|scm| ScmLocator::new(scm.scm_url, scm.revision))
            .transpose()?;

        let mut adjacency = HashMap::with_capacity(export.dependencies.len());
        for (parent, children) in &export.dependencies {
            let parent = Self::parse_coordinate(parent)?;
            let children = children
                .iter()
                .map(|child| Self::parse_coordinate(child))
                .collect::<Result<Vec<_>>>()?;
            adjacency.insert(parent, children);
        }

        Ok(LoadedGraph {
            root,
            scm,
            adjacency,
        })
    }

    fn parse_coordinate(value: &str) -> Result<Gav> {
        value.parse::<Gav>().map_err(|e| {
            AnalyzerError::analysis(format!("invalid coordinate '{}' in graph export: {:#}", value, e))
                .into()
        })
    }
}

#[async_trait]
impl DependencyGraphProvider for GraphFileReader {
    async fn graph_for_scm(&self, scm: &ScmLocator) -> Result<DependencyGraph> {
        let loaded = self.load()?;
        match &loaded.scm {
            Some(exported) if exported.matches(scm) => {
                Ok(DependencyGraph::from_adjacency(&loaded.root, &loaded.adjacency))
            }
            Some(exported) => Err(AnalyzerError::analysis(format!(
                "graph export {} was produced for {}, not for {}",
                self.path.display(),
                exported,
                scm
            ))
            .into()),
            None => Err(AnalyzerError::analysis(format!(
                "graph export {} does not declare its source location",
                self.path.display()
            ))
            .into()),
        }
    }

    async fn graph_for_gav(&self, gav: &Gav) -> Result<DependencyGraph> {
        let loaded = self.load()?;
        if !loaded.contains(gav) {
            return Err(AnalyzerError::analysis(format!(
                "{} does not appear in graph export {}",
                gav,
                self.path.display()
            ))
            .into());
        }
        Ok(DependencyGraph::from_adjacency(gav, &loaded.adjacency))
    }
}
