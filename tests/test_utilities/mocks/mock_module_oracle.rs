use dep_analyzer::prelude::*;
use std::collections::HashSet;
use std::path::Path;

/// Mock ModuleBoundaryOracle with a fixed set of module coordinates
#[derive(Default)]
pub struct MockModuleOracle {
    modules: HashSet<Gav>,
}

#[allow(dead_code)]
impl MockModuleOracle {
    pub fn new(modules: &[&str]) -> Self {
        Self {
            modules: modules.iter().map(|m| m.parse().unwrap()).collect(),
        }
    }
}

impl ModuleBoundaryOracle for MockModuleOracle {
    fn is_module(&self, _working_copy: &Path, gav: &Gav) -> Result<bool> {
        Ok(self.modules.contains(gav))
    }
}
