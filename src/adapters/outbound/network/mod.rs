/// Network adapters for the build-tracking repository
mod caching_version_resolver;
mod maven_metadata_client;

pub use caching_version_resolver::CachingVersionResolver;
pub use maven_metadata_client::{MavenMetadataResolver, DEFAULT_REPOSITORY_URL};
