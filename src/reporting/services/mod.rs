//! Reporting services: the algorithms that turn graphs and lookups into
//! reports. Collaborators are reached through the outbound ports.

pub mod advanced_report_classifier;
pub mod batch_lookup;
pub mod metadata_generator;
pub mod report_tree_builder;

pub use advanced_report_classifier::AdvancedReportClassifier;
pub use batch_lookup::{BatchLookup, DEFAULT_MAX_CONCURRENT_LOOKUPS};
pub use metadata_generator::MetadataGenerator;
pub use report_tree_builder::ReportTreeBuilder;
