use crate::ports::outbound::ModuleBoundaryOracle;
use crate::reporting::domain::Gav;
use crate::shared::error::AnalyzerError;
use crate::shared::security::{read_checked, MAX_MANIFEST_SIZE};
use crate::shared::Result;
use dashmap::DashMap;
use roxmltree::{Document, Node};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use walkdir::{DirEntry, WalkDir};

const MANIFEST_NAME: &str = "pom.xml";

/// PomModuleOracle adapter recognising a project's modules by its `pom.xml`
/// files
///
/// Every `pom.xml` below the working copy declares one module. `groupId`
/// and `version` fall back to the `<parent>` section when the POM omits
/// them. Build output (`target/`) and hidden directories are skipped.
///
/// The coordinates declared by a working copy are collected once and
/// cached for later questions about the same directory.
pub struct PomModuleOracle {
    declared: DashMap<PathBuf, Arc<HashSet<Gav>>>,
}

impl PomModuleOracle {
    pub fn new() -> Self {
        Self {
            declared: DashMap::new(),
        }
    }

    /// Coordinates declared by the POMs of `working_copy`
    pub fn declared_modules(&self, working_copy: &Path) -> Result<Arc<HashSet<Gav>>> {
        if let Some(cached) = self.declared.get(working_copy) {
            return Ok(Arc::clone(&cached));
        }

        let modules = Arc::new(Self::scan(working_copy)?);
        self.declared
            .insert(working_copy.to_path_buf(), Arc::clone(&modules));
        Ok(modules)
    }

    fn scan(working_copy: &Path) -> Result<HashSet<Gav>> {
        if !working_copy.is_dir() {
            return Err(AnalyzerError::analysis(format!(
                "working copy {} is not a directory",
                working_copy.display()
            ))
            .into());
        }

        let mut modules = HashSet::new();
        let walker = WalkDir::new(working_copy)
            .follow_links(false)
            .into_iter()
            .filter_entry(|entry| entry.depth() == 0 || !Self::is_skipped(entry));

        for entry in walker {
            let entry = entry.map_err(|e| {
                AnalyzerError::analysis(format!(
                    "failed to walk working copy {}: {}",
                    working_copy.display(),
                    e
                ))
            })?;
            if !entry.file_type().is_file() || entry.file_name() != MANIFEST_NAME {
                continue;
            }

            let content = read_checked(entry.path(), MAX_MANIFEST_SIZE)?;
            // templated or broken POMs (test fixtures, archetypes) declare nothing usable
            if let Some(gav) = Self::parse_coordinate(&content) {
                modules.insert(gav);
            }
        }

        Ok(modules)
    }

    fn is_skipped(entry: &DirEntry) -> bool {
        if !entry.file_type().is_dir() {
            return false;
        }
        let name = entry.file_name().to_string_lossy();
        name.starts_with('.') || name == "target"
    }

    /// Coordinate declared by one POM, or `None` when it cannot be determined
    fn parse_coordinate(content: &str) -> Option<Gav> {
        let doc = Document::parse(content).ok()?;
        let project = doc.root_element();
        if !project.has_tag_name("project") {
            return None;
        }

        let parent = Self::child(project, "parent");
        let inherited = |name: &str| parent.and_then(|p| Self::child_text(p, name));

        let group_id = Self::child_text(project, "groupId").or_else(|| inherited("groupId"))?;
        let artifact_id = Self::child_text(project, "artifactId")?;
        let version = Self::child_text(project, "version").or_else(|| inherited("version"))?;

        Gav::new(group_id, artifact_id, version).ok()
    }

    fn child<'a, 'input>(node: Node<'a, 'input>, name: &str) -> Option<Node<'a, 'input>> {
        node.children().find(|c| c.has_tag_name(name))
    }

    fn child_text(node: Node, name: &str) -> Option<String> {
        Self::child(node, name)
            .and_then(|c| c.text())
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
    }
}

impl Default for PomModuleOracle {
    fn default() -> Self {
        Self::new()
    }
}

impl ModuleBoundaryOracle for PomModuleOracle {
    fn is_module(&self, working_copy: &Path, gav: &Gav) -> Result<bool> {
        Ok(self.declared_modules(working_copy)?.contains(gav))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write(dir: &Path, relative: &str, content: &str) {
        let path = dir.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn gav(s: &str) -> Gav {
        s.parse().unwrap()
    }

    const ROOT_POM: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<project xmlns="http://maven.apache.org/POM/4.0.0">
  <modelVersion>4.0.0</modelVersion>
  <groupId>org.acme</groupId>
  <artifactId>parent</artifactId>
  <version>1.0</version>
  <packaging>pom</packaging>
  <modules>
    <module>core</module>
  </modules>
  <dependencies>
    <dependency>
      <groupId>org.lib</groupId>
      <artifactId>util</artifactId>
      <version>2.0</version>
    </dependency>
  </dependencies>
</project>"#;

    const CORE_POM: &str = r#"<project xmlns="http://maven.apache.org/POM/4.0.0">
  <parent>
    <groupId>org.acme</groupId>
    <artifactId>parent</artifactId>
    <version>1.0</version>
  </parent>
  <artifactId>core</artifactId>
</project>"#;

    fn project() -> TempDir {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "pom.xml", ROOT_POM);
        write(dir.path(), "core/pom.xml", CORE_POM);
        dir
    }

    #[test]
    fn test_root_and_submodule_are_modules() {
        let dir = project();
        let oracle = PomModuleOracle::new();

        assert!(oracle.is_module(dir.path(), &gav("org.acme:parent:1.0")).unwrap());
        // groupId and version inherited from <parent>
        assert!(oracle.is_module(dir.path(), &gav("org.acme:core:1.0")).unwrap());
    }

    #[test]
    fn test_dependencies_are_not_modules() {
        let dir = project();
        let oracle = PomModuleOracle::new();

        assert!(!oracle.is_module(dir.path(), &gav("org.lib:util:2.0")).unwrap());
        assert!(!oracle.is_module(dir.path(), &gav("org.acme:core:2.0")).unwrap());
    }

    #[test]
    fn test_build_output_and_hidden_dirs_are_skipped() {
        let dir = project();
        write(
            dir.path(),
            "core/target/classes/META-INF/pom.xml",
            &CORE_POM.replace("<artifactId>core</artifactId>", "<artifactId>copied</artifactId>"),
        );
        write(
            dir.path(),
            ".git/pom.xml",
            &CORE_POM.replace("<artifactId>core</artifactId>", "<artifactId>hidden</artifactId>"),
        );
        let oracle = PomModuleOracle::new();

        let modules = oracle.declared_modules(dir.path()).unwrap();
        assert_eq!(modules.len(), 2);
        assert!(!modules.contains(&gav("org.acme:copied:1.0")));
        assert!(!modules.contains(&gav("org.acme:hidden:1.0")));
    }

    #[test]
    fn test_templated_pom_is_ignored() {
        let dir = project();
        write(
            dir.path(),
            "archetype/pom.xml",
            "<project><groupId>${groupId}</groupId><artifactId>x</artifactId></project>",
        );
        write(dir.path(), "broken/pom.xml", "<project>");
        let oracle = PomModuleOracle::new();

        assert_eq!(oracle.declared_modules(dir.path()).unwrap().len(), 2);
    }

    #[test]
    fn test_scan_is_cached() {
        let dir = project();
        let oracle = PomModuleOracle::new();
        assert!(oracle.is_module(dir.path(), &gav("org.acme:core:1.0")).unwrap());

        fs::remove_file(dir.path().join("core/pom.xml")).unwrap();
        assert!(oracle.is_module(dir.path(), &gav("org.acme:core:1.0")).unwrap());
    }

    #[test]
    fn test_missing_working_copy() {
        let oracle = PomModuleOracle::new();
        let result = oracle.is_module(Path::new("/nonexistent/checkout"), &gav("g:a:1.0"));
        assert!(result.is_err());
    }
}
