//! # Query Construction
//!
//! Translates caller-facing filter options into the backend's query-string
//! grammar. The tenant and publish-status filters are injected here
//! unconditionally; callers have no way to retrieve unpublished or
//! cross-tenant content.

use crate::constants::PUBLISHED;

/// A named collection exposed by the content backend.
///
/// Each collection has its own field schema but shares the same
/// filter/sort/pagination grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    BlogPosts,
    JobPostings,
    PressReleases,
}

impl Collection {
    /// The collection's REST endpoint path.
    pub fn api_path(&self) -> &'static str {
        match self {
            Collection::BlogPosts => "/api/blog-posts",
            Collection::JobPostings => "/api/job-postings",
            Collection::PressReleases => "/api/press-releases",
        }
    }

    /// Server-side sort applied when the caller gives none: newest first
    /// by the collection's date field.
    pub fn default_sort(&self) -> &'static str {
        match self {
            Collection::PressReleases => "releaseDate:desc",
            _ => "publishedAt:desc",
        }
    }
}

/// Caller-supplied filter options for a collection fetch.
///
/// All fields are optional; the mandatory tenant and publish-status
/// constraints are not represented here and cannot be set by callers.
#[derive(Debug, Clone, Default)]
pub struct CollectionQuery {
    pub category: Option<String>,
    pub department: Option<String>,
    pub slug: Option<String>,
    pub exclude_slug: Option<String>,
    pub featured: Option<bool>,
    pub limit: Option<u32>,
    pub sort: Option<String>,
}

impl CollectionQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(mut self, value: &str) -> Self {
        self.category = Some(value.to_string());
        self
    }

    pub fn department(mut self, value: &str) -> Self {
        self.department = Some(value.to_string());
        self
    }

    /// Exact-match slug filter. No trimming or case folding is applied.
    pub fn slug(mut self, value: &str) -> Self {
        self.slug = Some(value.to_string());
        self
    }

    /// Excludes the record with this slug from the result set.
    pub fn exclude_slug(mut self, value: &str) -> Self {
        self.exclude_slug = Some(value.to_string());
        self
    }

    pub fn featured(mut self, value: bool) -> Self {
        self.featured = Some(value);
        self
    }

    pub fn limit(mut self, value: u32) -> Self {
        self.limit = Some(value);
        self
    }

    /// Overrides the collection's default sort. The value is passed to the
    /// backend verbatim as `field:direction`.
    pub fn sort(mut self, value: &str) -> Self {
        self.sort = Some(value.to_string());
        self
    }

    /// Assembles the query-string parameters for a request against the
    /// given collection. Tenant, publish-status, and `populate` are always
    /// present regardless of what this query carries.
    pub(crate) fn to_params(&self, collection: Collection, website: &str) -> Vec<(String, String)> {
        let mut params = vec![
            ("filters[website]".to_string(), website.to_string()),
            ("filters[publishStatus]".to_string(), PUBLISHED.to_string()),
            ("populate".to_string(), "*".to_string()),
        ];

        if let Some(category) = &self.category {
            params.push(("filters[category]".to_string(), category.clone()));
        }
        if let Some(department) = &self.department {
            params.push(("filters[department]".to_string(), department.clone()));
        }
        if let Some(slug) = &self.slug {
            params.push(("filters[slug]".to_string(), slug.clone()));
        }
        if let Some(slug) = &self.exclude_slug {
            params.push(("filters[slug][$ne]".to_string(), slug.clone()));
        }
        if let Some(featured) = self.featured {
            params.push(("filters[featured]".to_string(), featured.to_string()));
        }

        let sort = self.sort.as_deref().unwrap_or_else(|| collection.default_sort());
        params.push(("sort[0]".to_string(), sort.to_string()));

        if let Some(limit) = self.limit {
            params.push(("pagination[limit]".to_string(), limit.to_string()));
        }

        params
    }
}
