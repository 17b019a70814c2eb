//! Pure TextRazor REST API client.
//!
//! A clean, minimal client for the TextRazor text-analytics API with no
//! domain-specific logic. Builds a form-encoded analysis request from the
//! configured extractors and options, posts it, and decodes the JSON reply
//! into typed annotation objects.
//!
//! # Example
//!
//! ```rust,ignore
//! use textrazor::{Extractor, TextRazorClient};
//!
//! let client = TextRazorClient::from_env()?
//!     .with_extractors([Extractor::Entities, Extractor::Topics]);
//!
//! let response = client.analyze("Barack Obama visited Paris.").await?;
//! for entity in response.entities() {
//!     println!(
//!         "{:?} relevance={:?}",
//!         entity.entity_id, entity.relevance_score
//!     );
//! }
//! ```
//!
//! # Linked annotations
//!
//! Annotations reference each other by document-global word position; the
//! [`Response`] resolves those links on demand:
//!
//! ```rust,ignore
//! for entity in response.entities() {
//!     for word in response.matched_words(entity) {
//!         println!("{} -> {:?}", word.token, word.part_of_speech);
//!     }
//! }
//! ```

pub mod error;
pub mod response;
pub mod types;

pub use error::{Result, TextRazorError};
pub use response::{
    AnnotationContent, AnnotationLink, CustomAnnotation, Entailment, Entity, NounPhrase,
    ParamRelation, Property, Relation, RelationParam, Response, Sense, Sentence, Topic, Word,
};
pub use types::{CleanupMode, Extractor};

use reqwest::Client;
use tracing::{debug, warn};

const TEXTRAZOR_ENDPOINT: &str = "https://api.textrazor.com/";

/// Pure TextRazor API client.
///
/// Holds the API key and the analysis options applied to every request.
/// Options are set once through the consuming `with_*` methods; clone the
/// client if concurrent requests need different options.
#[derive(Debug, Clone)]
pub struct TextRazorClient {
    http_client: Client,
    api_key: String,
    endpoint: String,
    extractors: Vec<Extractor>,
    rules: String,
    language_override: Option<String>,
    cleanup_mode: Option<CleanupMode>,
    cleanup_return_cleaned: Option<bool>,
    cleanup_return_raw: Option<bool>,
    cleanup_use_metadata: Option<bool>,
    download_user_agent: Option<String>,
    enrichment_queries: Vec<String>,
    dbpedia_type_filters: Vec<String>,
    freebase_type_filters: Vec<String>,
    allow_overlap: Option<bool>,
}

impl TextRazorClient {
    /// Create a new TextRazor client with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http_client: Client::new(),
            api_key: api_key.into(),
            endpoint: TEXTRAZOR_ENDPOINT.to_string(),
            extractors: Vec::new(),
            rules: String::new(),
            language_override: None,
            cleanup_mode: None,
            cleanup_return_cleaned: None,
            cleanup_return_raw: None,
            cleanup_use_metadata: None,
            download_user_agent: None,
            enrichment_queries: Vec::new(),
            dbpedia_type_filters: Vec::new(),
            freebase_type_filters: Vec::new(),
            allow_overlap: None,
        }
    }

    /// Create from environment variable `TEXTRAZOR_API_KEY`.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("TEXTRAZOR_API_KEY")
            .map_err(|_| TextRazorError::Config("TEXTRAZOR_API_KEY not set".into()))?;
        Ok(Self::new(api_key))
    }

    /// Set a custom endpoint URL (for proxies, tests, etc.).
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set the extractors to run against the text. Only select the extractors
    /// your application needs for optimal performance.
    pub fn with_extractors<I>(mut self, extractors: I) -> Self
    where
        I: IntoIterator<Item = Extractor>,
    {
        self.extractors = extractors.into_iter().collect();
        self
    }

    /// Set Prolog rules to run against the document. All rules matching an
    /// extractor name in the request are evaluated, and matching param
    /// combinations are linked in the response.
    pub fn with_rules(mut self, rules: impl Into<String>) -> Self {
        self.rules = rules.into();
        self
    }

    /// Force analysis with the given ISO-639-2 language code instead of the
    /// automatically identified language.
    pub fn with_language_override(mut self, language: impl Into<String>) -> Self {
        self.language_override = Some(language.into());
        self
    }

    /// Set the preprocessing cleanup mode applied before analysis.
    pub fn with_cleanup_mode(mut self, mode: CleanupMode) -> Self {
        self.cleanup_mode = Some(mode);
        self
    }

    /// When `true`, the response carries the cleaned text. Costs bandwidth,
    /// so only enable it if your application reads it.
    pub fn with_cleanup_return_cleaned(mut self, return_cleaned: bool) -> Self {
        self.cleanup_return_cleaned = Some(return_cleaned);
        self
    }

    /// When `true`, the response carries the raw text as received or
    /// downloaded before cleaning.
    pub fn with_cleanup_return_raw(mut self, return_raw: bool) -> Self {
        self.cleanup_return_raw = Some(return_raw);
        self
    }

    /// When `true`, document metadata (HTML titles, meta tags) is used to
    /// help disambiguation. No effect with [`CleanupMode::Raw`].
    pub fn with_cleanup_use_metadata(mut self, use_metadata: bool) -> Self {
        self.cleanup_use_metadata = Some(use_metadata);
        self
    }

    /// Set the User-Agent header used when the server downloads URLs for
    /// [`TextRazorClient::analyze_url`].
    pub fn with_download_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.download_user_agent = Some(user_agent.into());
        self
    }

    /// Set enrichment queries used to enrich the entity response with
    /// structured linked data.
    pub fn with_enrichment_queries<I, S>(mut self, queries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.enrichment_queries = queries.into_iter().map(Into::into).collect();
        self
    }

    /// Restrict entity extraction to entities matching at least one of these
    /// DBPedia types.
    pub fn with_dbpedia_type_filters<I, S>(mut self, filters: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dbpedia_type_filters = filters.into_iter().map(Into::into).collect();
        self
    }

    /// Restrict entity extraction to entities matching at least one of these
    /// Freebase types.
    pub fn with_freebase_type_filters<I, S>(mut self, filters: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.freebase_type_filters = filters.into_iter().map(Into::into).collect();
        self
    }

    /// When `false`, the "best" non-overlapping set of entities is returned
    /// instead of allowing overlapping matches. The API defaults to `true`.
    pub fn with_entity_allow_overlap(mut self, allow_overlap: bool) -> Self {
        self.allow_overlap = Some(allow_overlap);
        self
    }

    /// Get the API key.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Get the endpoint URL.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Analyze a raw text document.
    pub async fn analyze(&self, text: &str) -> Result<Response> {
        let mut params = self.request_params()?;
        params.push(("text", text.to_string()));
        self.send(params).await
    }

    /// Analyze the document at a URL. The server downloads the page (capped
    /// at roughly 1MB, larger documents are truncated with a warning in the
    /// response), cleans it, and analyzes the resulting text.
    pub async fn analyze_url(&self, url: &str) -> Result<Response> {
        let mut params = self.request_params()?;
        params.push(("url", url.to_string()));
        self.send(params).await
    }

    /// Build the form parameters common to every analysis request. Fails
    /// before any network I/O when no API key is configured.
    fn request_params(&self) -> Result<Vec<(&'static str, String)>> {
        if self.api_key.is_empty() {
            return Err(TextRazorError::Config(
                "TextRazor API key is required for all requests".into(),
            ));
        }

        let extractors = self
            .extractors
            .iter()
            .map(Extractor::as_str)
            .collect::<Vec<_>>()
            .join(",");

        let mut params: Vec<(&'static str, String)> = vec![
            ("apiKey", self.api_key.clone()),
            ("extractors", extractors),
        ];

        if !self.rules.is_empty() {
            params.push(("rules", self.rules.clone()));
        }

        for filter in &self.dbpedia_type_filters {
            params.push(("entities.filterDbpediaTypes", filter.clone()));
        }

        for filter in &self.freebase_type_filters {
            params.push(("entities.filterFreebaseTypes", filter.clone()));
        }

        for query in &self.enrichment_queries {
            params.push(("entities.enrichmentQueries", query.clone()));
        }

        if let Some(allow_overlap) = self.allow_overlap {
            params.push(("entities.allowOverlap", allow_overlap.to_string()));
        }

        if let Some(language) = &self.language_override {
            params.push(("languageOverride", language.clone()));
        }

        if let Some(mode) = self.cleanup_mode {
            params.push(("cleanup.mode", mode.as_str().to_string()));
        }

        if let Some(return_cleaned) = self.cleanup_return_cleaned {
            params.push(("cleanup.returnCleaned", return_cleaned.to_string()));
        }

        if let Some(return_raw) = self.cleanup_return_raw {
            params.push(("cleanup.returnRaw", return_raw.to_string()));
        }

        if let Some(use_metadata) = self.cleanup_use_metadata {
            params.push(("cleanup.useMetadata", use_metadata.to_string()));
        }

        if let Some(user_agent) = &self.download_user_agent {
            params.push(("download.userAgent", user_agent.clone()));
        }

        Ok(params)
    }

    async fn send(&self, params: Vec<(&'static str, String)>) -> Result<Response> {
        let start = std::time::Instant::now();

        let response = self
            .http_client
            .post(&self.endpoint)
            .form(&params)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "TextRazor request failed");
                TextRazorError::Network(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            warn!(status = %status, error = %message, "TextRazor API error");
            return Err(TextRazorError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let envelope: response::ResponseEnvelope = response
            .json()
            .await
            .map_err(|e| TextRazorError::Parse(e.to_string()))?;

        let decoded = Response::new(envelope);

        debug!(
            ok = decoded.ok(),
            analysis_time = decoded.time(),
            sentences = decoded.sentences().len(),
            duration_ms = start.elapsed().as_millis(),
            "TextRazor analysis complete"
        );

        Ok(decoded)
    }
}
