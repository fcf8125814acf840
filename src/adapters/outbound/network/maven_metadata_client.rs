use crate::ports::outbound::VersionResolver;
use crate::reporting::domain::{Gav, VersionLookupResult};
use crate::reporting::policies::BuildSuffixProvenance;
use crate::shared::error::AnalyzerError;
use crate::shared::Result;
use async_trait::async_trait;
use reqwest::StatusCode;
use roxmltree::Document;
use std::time::Duration;

const SERVICE_NAME: &str = "artifact repository";

/// Repository used when neither the command line nor the configuration file
/// names one
pub const DEFAULT_REPOSITORY_URL: &str = "https://maven.repository.redhat.com/ga";

/// MavenMetadataResolver adapter answering version lookups from a Maven
/// repository that holds rebuilt artifacts
///
/// For `g:a:v` it reads `{repository}/{g as path}/{a}/maven-metadata.xml`.
/// Every internally produced version listed there is an available version;
/// the best match is the one rebuilt from the requested upstream version,
/// preferring the highest build number. A missing metadata file means
/// nothing was built.
///
/// # Async Support
/// Uses async reqwest client, so lookups of a batch run concurrently.
pub struct MavenMetadataResolver {
    client: reqwest::Client,
    repository_url: String,
    provenance: BuildSuffixProvenance,
    max_retries: u32,
}

impl MavenMetadataResolver {
    /// Creates a resolver for the repository at `repository_url`
    ///
    /// # Errors
    /// Returns an error if the URL is not http(s) or the HTTP client cannot
    /// be built
    pub fn new(repository_url: &str, provenance: BuildSuffixProvenance) -> Result<Self> {
        let repository_url = repository_url.trim().trim_end_matches('/').to_string();
        if !(repository_url.starts_with("http://") || repository_url.starts_with("https://")) {
            return Err(AnalyzerError::invalid_input(format!(
                "repository URL '{}' must start with http:// or https://",
                repository_url
            ))
            .into());
        }

        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("dep-analyzer/{}", version);
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            repository_url,
            provenance,
            max_retries: 3,
        })
    }

    /// Location of the metadata file for the artifact of `gav`
    fn metadata_url(&self, gav: &Gav) -> Result<String> {
        Self::validate_url_component(gav.group_id(), "groupId")?;
        Self::validate_url_component(gav.artifact_id(), "artifactId")?;

        let group_path = gav
            .group_id()
            .split('.')
            .map(|segment| urlencoding::encode(segment).into_owned())
            .collect::<Vec<_>>()
            .join("/");

        Ok(format!(
            "{}/{}/{}/maven-metadata.xml",
            self.repository_url,
            group_path,
            urlencoding::encode(gav.artifact_id())
        ))
    }

    /// Security: coordinates are spliced into a URL path
    fn validate_url_component(component: &str, component_type: &str) -> Result<()> {
        if component.contains('/') || component.contains('\\') {
            anyhow::bail!(
                "Security: {} contains path separators which are not allowed",
                component_type
            );
        }

        if component.contains("..") || component.starts_with('.') || component.ends_with('.') {
            anyhow::bail!(
                "Security: {} contains empty or relative path segments",
                component_type
            );
        }

        if component.contains('#') || component.contains('?') || component.contains('@') {
            anyhow::bail!(
                "Security: {} contains URL-unsafe characters",
                component_type
            );
        }

        Ok(())
    }

    /// Fetches the metadata document with retry logic
    ///
    /// `Ok(None)` means the repository has no metadata for the artifact.
    async fn fetch_with_retry(&self, url: &str) -> Result<Option<String>> {
        let mut last_error = None;

        for attempt in 1..=self.max_retries {
            match self.fetch_metadata(url).await {
                Ok(result) => return Ok(result),
                Err(e) => {
                    last_error = Some(e);
                    if attempt < self.max_retries {
                        tokio::time::sleep(Duration::from_millis(100 * attempt as u64)).await;
                    }
                }
            }
        }

        Err(last_error
            .unwrap_or_else(|| AnalyzerError::communication(SERVICE_NAME, "no attempt was made").into()))
    }

    async fn fetch_metadata(&self, url: &str) -> Result<Option<String>> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| AnalyzerError::communication(SERVICE_NAME, format!("{}: {}", url, e)))?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(AnalyzerError::communication(
                SERVICE_NAME,
                format!("{} returned status code {}", url, response.status()),
            )
            .into());
        }

        let body = response
            .text()
            .await
            .map_err(|e| AnalyzerError::communication(SERVICE_NAME, format!("{}: {}", url, e)))?;
        Ok(Some(body))
    }

    /// Versions listed under `<versioning><versions>`, in document order
    fn parse_versions(metadata: &str) -> Result<Vec<String>> {
        let doc = Document::parse(metadata).map_err(|e| {
            AnalyzerError::communication(SERVICE_NAME, format!("malformed maven-metadata.xml: {}", e))
        })?;

        let versions = doc
            .descendants()
            .filter(|node| node.has_tag_name("versions"))
            .flat_map(|node| node.children())
            .filter(|child| child.has_tag_name("version"))
            .filter_map(|child| child.text())
            .map(|text| text.trim().to_string())
            .filter(|text| !text.is_empty())
            .collect();
        Ok(versions)
    }

    /// Picks the available versions and the best match for `requested`
    fn select(&self, requested: &str, listed: Vec<String>) -> VersionLookupResult {
        let requested_upstream = self.provenance.upstream_version(requested);

        let available: Vec<String> = listed
            .into_iter()
            .filter(|v| self.provenance.split(v).is_some())
            .collect();

        let best_match = available
            .iter()
            .filter_map(|v| {
                self.provenance
                    .split(v)
                    .filter(|(upstream, _)| *upstream == requested_upstream)
                    .map(|(_, build)| (build, v))
            })
            .max_by_key(|(build, _)| *build)
            .map(|(_, v)| v.clone());

        VersionLookupResult::new(best_match, available)
    }
}

#[async_trait]
impl VersionResolver for MavenMetadataResolver {
    async fn lookup_built_versions(&self, gav: &Gav) -> Result<VersionLookupResult> {
        let url = self.metadata_url(gav)?;
        match self.fetch_with_retry(&url).await? {
            Some(metadata) => {
                let listed = Self::parse_versions(&metadata)?;
                Ok(self.select(gav.version(), listed))
            }
            None => Ok(VersionLookupResult::empty()),
        }
    }
}
