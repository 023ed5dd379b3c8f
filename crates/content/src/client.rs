//! # Content Client
//!
//! The gateway's fetch surface. Each call issues exactly one request and
//! owns its response; there is no cache, no retry, and no state shared
//! between calls. The internal layer is fallible; the public accessors are
//! total and collapse every failure to an empty value after logging it.

use tracing::{debug, warn};

use crate::config::GatewayConfig;
use crate::constants::{ALL_VALUES, DEFAULT_RELATED_LIMIT};
use crate::errors::ContentError;
use crate::query::{Collection, CollectionQuery};
use crate::record::{ApiErrorEnvelope, ContentRecord, Envelope};

/// Client for the headless content backend.
pub struct ContentClient {
    http: reqwest::Client,
    config: GatewayConfig,
}

impl ContentClient {
    pub fn new(config: GatewayConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Builds a client from the process environment.
    pub fn from_env() -> Self {
        Self::new(GatewayConfig::from_env())
    }

    // --- Core Accessors ---

    /// Fetches a filtered collection in the backend's sort order.
    ///
    /// On transport failure or a non-success response the condition is
    /// logged and an empty list is returned; callers cannot distinguish
    /// "no content" from "fetch failed".
    pub async fn fetch_collection(
        &self,
        collection: Collection,
        query: &CollectionQuery,
    ) -> Vec<ContentRecord> {
        match self.try_fetch(collection, query).await {
            Ok(records) => records,
            Err(err) => {
                warn!("Fetch from {} failed: {err}", collection.api_path());
                Vec::new()
            }
        }
    }

    /// Fetches the first published record matching the slug exactly, or
    /// `None` when nothing matches or the fetch fails.
    pub async fn fetch_single_by_slug(
        &self,
        collection: Collection,
        slug: &str,
    ) -> Option<ContentRecord> {
        let query = CollectionQuery::new().slug(slug);
        self.fetch_collection(collection, &query)
            .await
            .into_iter()
            .next()
    }

    /// Derives the distinct non-empty values of `field` across the full
    /// published collection, reduced client-side.
    ///
    /// The `"All"` sentinel is always first; the rest follow first-seen
    /// order from the date-sorted fetch. On failure only the sentinel is
    /// returned.
    pub async fn list_distinct_values(&self, collection: Collection, field: &str) -> Vec<String> {
        let records = self
            .fetch_collection(collection, &CollectionQuery::new())
            .await;

        let mut values = vec![ALL_VALUES.to_string()];
        for record in &records {
            let Some(value) = record.str_field(field) else {
                continue;
            };
            if value.is_empty() || values.iter().any(|seen| seen == value) {
                continue;
            }
            values.push(value.to_string());
        }
        values
    }

    /// Fetches up to `limit` records (default 3) sharing `category`,
    /// excluding the record identified by `exclude_slug`. Returns whatever
    /// subset matches; there is no fill-up fallback when fewer exist.
    pub async fn fetch_related(
        &self,
        collection: Collection,
        category: &str,
        exclude_slug: &str,
        limit: Option<u32>,
    ) -> Vec<ContentRecord> {
        let query = CollectionQuery::new()
            .category(category)
            .exclude_slug(exclude_slug)
            .limit(limit.unwrap_or(DEFAULT_RELATED_LIMIT));

        // The exclusion must hold even when the backend ignores `$ne`.
        self.fetch_collection(collection, &query)
            .await
            .into_iter()
            .filter(|record| record.slug() != Some(exclude_slug))
            .collect()
    }

    // --- Blog Posts ---

    pub async fn blog_posts(&self, category: Option<&str>) -> Vec<ContentRecord> {
        let mut query = CollectionQuery::new();
        if let Some(category) = category {
            query = query.category(category);
        }
        self.fetch_collection(Collection::BlogPosts, &query).await
    }

    pub async fn blog_post(&self, slug: &str) -> Option<ContentRecord> {
        self.fetch_single_by_slug(Collection::BlogPosts, slug).await
    }

    pub async fn related_posts(&self, category: &str, exclude_slug: &str) -> Vec<ContentRecord> {
        self.fetch_related(Collection::BlogPosts, category, exclude_slug, None)
            .await
    }

    pub async fn blog_categories(&self) -> Vec<String> {
        self.list_distinct_values(Collection::BlogPosts, "category")
            .await
    }

    // --- Job Postings ---

    pub async fn job_postings(&self, department: Option<&str>) -> Vec<ContentRecord> {
        let mut query = CollectionQuery::new();
        if let Some(department) = department {
            query = query.department(department);
        }
        self.fetch_collection(Collection::JobPostings, &query).await
    }

    pub async fn job_posting(&self, slug: &str) -> Option<ContentRecord> {
        self.fetch_single_by_slug(Collection::JobPostings, slug)
            .await
    }

    pub async fn job_departments(&self) -> Vec<String> {
        self.list_distinct_values(Collection::JobPostings, "department")
            .await
    }

    // --- Press Releases ---

    pub async fn press_releases(&self) -> Vec<ContentRecord> {
        self.fetch_collection(Collection::PressReleases, &CollectionQuery::new())
            .await
    }

    pub async fn press_release(&self, slug: &str) -> Option<ContentRecord> {
        self.fetch_single_by_slug(Collection::PressReleases, slug)
            .await
    }

    pub async fn featured_press_releases(&self, limit: u32) -> Vec<ContentRecord> {
        let query = CollectionQuery::new().featured(true).limit(limit);
        self.fetch_collection(Collection::PressReleases, &query)
            .await
    }

    // --- Internal Fetch Layer ---

    async fn try_fetch(
        &self,
        collection: Collection,
        query: &CollectionQuery,
    ) -> Result<Vec<ContentRecord>, ContentError> {
        let url = format!(
            "{}{}",
            self.config.base_url.trim_end_matches('/'),
            collection.api_path()
        );
        let params = query.to_params(collection, &self.config.website);
        debug!("GET {url} with {} query parameters", params.len());

        let response = self.http.get(&url).query(&params).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            let detail = serde_json::from_str::<ApiErrorEnvelope>(&body)
                .map(|envelope| envelope.error.message)
                .unwrap_or(body);
            return Err(ContentError::Api(format!("status {status}: {detail}")));
        }

        let body = response.text().await?;
        let envelope: Envelope = serde_json::from_str(&body)?;
        Ok(envelope
            .data
            .into_iter()
            .filter_map(ContentRecord::from_value)
            .collect())
    }
}
