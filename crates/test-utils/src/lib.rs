//! # `meridian-test-utils`: Shared Test Fixtures
//!
//! Helpers for exercising the content gateway against a mock backend: a
//! wiremock-backed [`TestBackend`] with a client already pointed at it,
//! plus canned record and envelope builders covering both response shapes
//! the backend can produce.

use meridian_content::{ContentClient, GatewayConfig};
use serde_json::{json, Value};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Tenant name used by all fixtures and test clients.
pub const TEST_WEBSITE: &str = "meridian";

// --- Test Backend ---

/// A mock content backend for one test.
pub struct TestBackend {
    pub server: MockServer,
}

impl TestBackend {
    /// Starts a fresh, isolated mock backend.
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// A client configured against this backend for the test tenant.
    pub fn client(&self) -> ContentClient {
        ContentClient::new(GatewayConfig::new(&self.server.uri(), TEST_WEBSITE))
    }

    /// Mounts a collection endpoint that only answers requests carrying
    /// the mandatory tenant and publish-status filters. Requests missing
    /// them fall through unmatched.
    pub async fn mount_collection(&self, api_path: &str, records: Vec<Value>) {
        Mock::given(method("GET"))
            .and(path(api_path))
            .and(query_param("filters[website]", TEST_WEBSITE))
            .and(query_param("filters[publishStatus]", "Published"))
            .respond_with(ResponseTemplate::new(200).set_body_json(envelope(records)))
            .mount(&self.server)
            .await;
    }

    /// Mounts a collection endpoint answering every request with the given
    /// error status and a backend-style error envelope.
    pub async fn mount_error(&self, api_path: &str, status: u16, message: &str) {
        Mock::given(method("GET"))
            .and(path(api_path))
            .respond_with(ResponseTemplate::new(status).set_body_json(json!({
                "data": null,
                "error": { "status": status, "name": "ApplicationError", "message": message }
            })))
            .mount(&self.server)
            .await;
    }
}

// --- Envelope & Rich-Text Builders ---

/// Wraps records in the backend's collection envelope.
pub fn envelope(records: Vec<Value>) -> Value {
    let total = records.len();
    json!({
        "data": records,
        "meta": { "pagination": { "total": total } }
    })
}

/// A single paragraph block with one text leaf.
pub fn paragraph(text: &str) -> Value {
    json!({
        "type": "paragraph",
        "children": [{ "type": "text", "text": text }]
    })
}

/// A rich-text document of plain paragraphs.
pub fn rich_text(paragraphs: &[&str]) -> Value {
    Value::Array(paragraphs.iter().map(|text| paragraph(text)).collect())
}

// --- Record Builders ---

/// A blog post in the nested `attributes` response shape.
pub fn blog_post(id: i64, slug: &str, title: &str, category: &str) -> Value {
    json!({
        "id": id,
        "attributes": {
            "slug": slug,
            "title": title,
            "category": category,
            "website": TEST_WEBSITE,
            "publishStatus": "Published",
            "publishedAt": "2025-06-01T09:00:00.000Z",
            "content": rich_text(&["Placeholder body copy for tests."])
        }
    })
}

/// A blog post with its fields flattened next to the id.
pub fn blog_post_flat(id: i64, slug: &str, title: &str, category: &str) -> Value {
    json!({
        "id": id,
        "slug": slug,
        "title": title,
        "category": category,
        "website": TEST_WEBSITE,
        "publishStatus": "Published",
        "publishedAt": "2025-06-01T09:00:00.000Z",
        "content": rich_text(&["Placeholder body copy for tests."])
    })
}

/// A job posting in the nested `attributes` response shape.
pub fn job_posting(id: i64, slug: &str, title: &str, department: &str, location: &str) -> Value {
    json!({
        "id": id,
        "attributes": {
            "slug": slug,
            "title": title,
            "department": department,
            "location": location,
            "jobType": "Full-time",
            "website": TEST_WEBSITE,
            "publishStatus": "Published",
            "publishedAt": "2025-05-12T08:30:00.000Z",
            "content": rich_text(&["Role description for tests."])
        }
    })
}

/// A press release in the nested `attributes` response shape.
pub fn press_release(id: i64, slug: &str, title: &str, release_date: &str, featured: bool) -> Value {
    json!({
        "id": id,
        "attributes": {
            "slug": slug,
            "title": title,
            "releaseDate": release_date,
            "featured": featured,
            "location": "New York, NY",
            "website": TEST_WEBSITE,
            "publishStatus": "Published",
            "description": rich_text(&["Announcement body for tests."])
        }
    })
}
