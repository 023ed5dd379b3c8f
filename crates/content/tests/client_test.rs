//! # Content Client Integration Tests
//!
//! Exercises the gateway against a wiremock backend. Mocks only match
//! requests carrying the expected query parameters, so a successful fetch
//! doubles as an assertion on the constructed query string; unmatched
//! requests fall through to wiremock's 404 and collapse to the empty case.

use anyhow::Result;
use meridian_content::{Collection, CollectionQuery, ContentClient, GatewayConfig};
use meridian_test_utils::{
    blog_post, envelope, job_posting, press_release, TestBackend, TEST_WEBSITE,
};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

/// A client pointed at an address nothing listens on.
fn unreachable_client() -> ContentClient {
    ContentClient::new(GatewayConfig::new("http://127.0.0.1:9", TEST_WEBSITE))
}

#[tokio::test]
async fn test_tenant_and_publish_filters_always_injected() -> Result<()> {
    // --- Arrange ---
    let backend = TestBackend::start().await;
    Mock::given(method("GET"))
        .and(path("/api/blog-posts"))
        .and(query_param("filters[website]", TEST_WEBSITE))
        .and(query_param("filters[publishStatus]", "Published"))
        .and(query_param("populate", "*"))
        .and(query_param("sort[0]", "publishedAt:desc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(vec![blog_post(
            1,
            "markets-update",
            "Markets Update",
            "Tax",
        )])))
        .expect(1)
        .mount(&backend.server)
        .await;

    // --- Act ---
    // The caller supplies no filters at all; the mock still requires the
    // tenant and publish-status parameters to match.
    let records = backend
        .client()
        .fetch_collection(Collection::BlogPosts, &CollectionQuery::new())
        .await;

    // --- Assert ---
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].slug(), Some("markets-update"));
    Ok(())
}

#[tokio::test]
async fn test_category_filter_is_forwarded() -> Result<()> {
    let backend = TestBackend::start().await;
    Mock::given(method("GET"))
        .and(path("/api/blog-posts"))
        .and(query_param("filters[website]", TEST_WEBSITE))
        .and(query_param("filters[category]", "Tax"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(vec![blog_post(
            1,
            "tax-brief",
            "Tax Brief",
            "Tax",
        )])))
        .mount(&backend.server)
        .await;

    let records = backend.client().blog_posts(Some("Tax")).await;

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].category(), Some("Tax"));
    Ok(())
}

#[tokio::test]
async fn test_fetch_single_by_slug_returns_first_match() -> Result<()> {
    let backend = TestBackend::start().await;
    Mock::given(method("GET"))
        .and(path("/api/blog-posts"))
        .and(query_param("filters[website]", TEST_WEBSITE))
        .and(query_param("filters[slug]", "esg-outlook"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(vec![blog_post(
            7,
            "esg-outlook",
            "ESG Outlook",
            "ESG",
        )])))
        .mount(&backend.server)
        .await;

    let record = backend.client().blog_post("esg-outlook").await;

    let record = record.expect("expected a matching post");
    assert_eq!(record.id, Some(7));
    assert_eq!(record.title(), Some("ESG Outlook"));
    Ok(())
}

#[tokio::test]
async fn test_fetch_single_by_slug_absent_when_no_match() -> Result<()> {
    let backend = TestBackend::start().await;
    backend.mount_collection("/api/blog-posts", vec![]).await;

    let record = backend.client().blog_post("does-not-exist").await;

    assert!(record.is_none());
    Ok(())
}

#[tokio::test]
async fn test_accessors_collapse_error_responses_to_empty() -> Result<()> {
    let backend = TestBackend::start().await;
    backend
        .mount_error("/api/blog-posts", 500, "database connection lost")
        .await;
    let client = backend.client();

    assert!(client
        .fetch_collection(Collection::BlogPosts, &CollectionQuery::new())
        .await
        .is_empty());
    assert!(client.blog_post("any-slug").await.is_none());
    assert_eq!(client.blog_categories().await, vec!["All".to_string()]);
    assert!(client
        .fetch_related(Collection::BlogPosts, "Tax", "any-slug", None)
        .await
        .is_empty());
    Ok(())
}

#[tokio::test]
async fn test_accessors_collapse_transport_failures_to_empty() -> Result<()> {
    let client = unreachable_client();

    assert!(client
        .fetch_collection(Collection::BlogPosts, &CollectionQuery::new())
        .await
        .is_empty());
    assert!(client.blog_post("any-slug").await.is_none());
    assert_eq!(client.blog_categories().await, vec!["All".to_string()]);
    assert!(client
        .fetch_related(Collection::BlogPosts, "Tax", "any-slug", None)
        .await
        .is_empty());
    Ok(())
}

#[tokio::test]
async fn test_list_distinct_values_first_seen_order_without_duplicates() -> Result<()> {
    let backend = TestBackend::start().await;
    let mut uncategorized = blog_post(4, "one-off", "One Off", "");
    uncategorized["attributes"]
        .as_object_mut()
        .unwrap()
        .remove("category");
    backend
        .mount_collection(
            "/api/blog-posts",
            vec![
                blog_post(1, "tax-a", "Tax A", "Tax"),
                blog_post(2, "tax-b", "Tax B", "Tax"),
                blog_post(3, "esg-a", "ESG A", "ESG"),
                blog_post(5, "empty-category", "Empty Category", ""),
                uncategorized,
            ],
        )
        .await;

    let categories = backend.client().blog_categories().await;

    assert_eq!(categories, vec!["All", "Tax", "ESG"]);
    Ok(())
}

#[tokio::test]
async fn test_job_departments_reduce_over_full_collection() -> Result<()> {
    let backend = TestBackend::start().await;
    backend
        .mount_collection(
            "/api/job-postings",
            vec![
                job_posting(1, "senior-strategist", "Senior Strategist", "Advisory", "Boston"),
                job_posting(2, "compliance-lead", "Compliance Lead", "Compliance", "Remote"),
                job_posting(3, "analyst", "Analyst", "Advisory", "Boston"),
            ],
        )
        .await;

    let departments = backend.client().job_departments().await;

    assert_eq!(departments, vec!["All", "Advisory", "Compliance"]);
    Ok(())
}

#[tokio::test]
async fn test_fetch_related_sends_exclusion_filter_and_cap() -> Result<()> {
    let backend = TestBackend::start().await;
    Mock::given(method("GET"))
        .and(path("/api/blog-posts"))
        .and(query_param("filters[website]", TEST_WEBSITE))
        .and(query_param("filters[category]", "Tax"))
        .and(query_param("filters[slug][$ne]", "current-post"))
        .and(query_param("pagination[limit]", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(vec![
            blog_post(1, "related-a", "Related A", "Tax"),
            blog_post(2, "related-b", "Related B", "Tax"),
        ])))
        .expect(1)
        .mount(&backend.server)
        .await;

    let related = backend
        .client()
        .related_posts("Tax", "current-post")
        .await;

    assert_eq!(related.len(), 2);
    Ok(())
}

#[tokio::test]
async fn test_fetch_related_never_returns_excluded_slug() -> Result<()> {
    // --- Arrange ---
    // A backend that ignores the `$ne` operator and echoes the excluded
    // record back anyway.
    let backend = TestBackend::start().await;
    backend
        .mount_collection(
            "/api/blog-posts",
            vec![
                blog_post(1, "current-post", "Current Post", "Tax"),
                blog_post(2, "related-a", "Related A", "Tax"),
            ],
        )
        .await;

    // --- Act ---
    let related = backend
        .client()
        .related_posts("Tax", "current-post")
        .await;

    // --- Assert ---
    assert_eq!(related.len(), 1);
    assert_eq!(related[0].slug(), Some("related-a"));
    Ok(())
}

#[tokio::test]
async fn test_featured_press_releases_filter_and_sort() -> Result<()> {
    let backend = TestBackend::start().await;
    Mock::given(method("GET"))
        .and(path("/api/press-releases"))
        .and(query_param("filters[website]", TEST_WEBSITE))
        .and(query_param("filters[featured]", "true"))
        .and(query_param("sort[0]", "releaseDate:desc"))
        .and(query_param("pagination[limit]", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(vec![
            press_release(1, "acquisition", "Acquisition Closed", "2025-07-01", true),
            press_release(2, "new-office", "New Office", "2025-06-15", true),
        ])))
        .mount(&backend.server)
        .await;

    let releases = backend.client().featured_press_releases(2).await;

    assert_eq!(releases.len(), 2);
    assert!(releases.iter().all(|release| release.featured()));
    assert_eq!(releases[0].release_date(), Some("2025-07-01"));
    Ok(())
}

#[tokio::test]
async fn test_backend_order_is_preserved() -> Result<()> {
    let backend = TestBackend::start().await;
    backend
        .mount_collection(
            "/api/blog-posts",
            vec![
                blog_post(3, "newest", "Newest", "Tax"),
                blog_post(1, "older", "Older", "Tax"),
                blog_post(2, "oldest", "Oldest", "Tax"),
            ],
        )
        .await;

    let records = backend.client().blog_posts(None).await;

    let slugs: Vec<_> = records.iter().filter_map(|record| record.slug()).collect();
    assert_eq!(slugs, vec!["newest", "older", "oldest"]);
    Ok(())
}

#[tokio::test]
async fn test_missing_data_key_is_an_empty_collection() -> Result<()> {
    let backend = TestBackend::start().await;
    Mock::given(method("GET"))
        .and(path("/api/blog-posts"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "meta": {} })),
        )
        .mount(&backend.server)
        .await;

    let records = backend.client().blog_posts(None).await;

    assert!(records.is_empty());
    Ok(())
}
