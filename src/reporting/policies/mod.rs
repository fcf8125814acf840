pub mod version_provenance;

pub use version_provenance::{
    BuildNumber, BuildSuffixProvenance, VersionProvenance, DEFAULT_INTERNAL_SUFFIX,
};
