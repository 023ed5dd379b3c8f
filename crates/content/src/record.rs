//! # Response Shapes & Record Normalization
//!
//! The backend wraps every collection response in a `data` envelope and may
//! return each record either as `{id, attributes: {...}}` or with its
//! fields flattened next to the id. Both shapes are collapsed here, at the
//! gateway boundary, into a single flat [`ContentRecord`] so nothing
//! downstream has to care which one the backend chose.

use serde::Deserialize;
use serde_json::{Map, Value};

use meridian_richtext::flatten_rich_text;

/// Collection response envelope. A missing `data` key is tolerated as an
/// empty collection.
#[derive(Deserialize, Debug, Default)]
pub(crate) struct Envelope {
    #[serde(default)]
    pub data: Vec<Value>,
}

/// Error envelope returned with non-success statuses.
#[derive(Deserialize, Debug)]
pub(crate) struct ApiErrorEnvelope {
    pub error: ApiErrorDetail,
}

#[derive(Deserialize, Debug)]
pub(crate) struct ApiErrorDetail {
    #[serde(default)]
    pub message: String,
}

/// A content record normalized to a flat field bag.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentRecord {
    pub id: Option<i64>,
    fields: Map<String, Value>,
}

impl ContentRecord {
    /// Normalizes one raw entry from the response envelope.
    ///
    /// Accepts both the nested `attributes` shape and the flat shape;
    /// entries that are not JSON objects are dropped.
    pub fn from_value(value: Value) -> Option<Self> {
        let Value::Object(mut object) = value else {
            return None;
        };
        let id = object.get("id").and_then(Value::as_i64);
        let fields = match object.remove("attributes") {
            Some(Value::Object(attributes)) => attributes,
            _ => {
                object.remove("id");
                object
            }
        };
        Some(Self { id, fields })
    }

    /// Raw access to a field of the normalized bag.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// A field's string value, when present and a string.
    pub fn str_field(&self, name: &str) -> Option<&str> {
        self.field(name).and_then(Value::as_str)
    }

    pub fn slug(&self) -> Option<&str> {
        self.str_field("slug")
    }

    pub fn title(&self) -> Option<&str> {
        self.str_field("title")
    }

    pub fn category(&self) -> Option<&str> {
        self.str_field("category")
    }

    pub fn department(&self) -> Option<&str> {
        self.str_field("department")
    }

    pub fn location(&self) -> Option<&str> {
        self.str_field("location")
    }

    pub fn job_type(&self) -> Option<&str> {
        self.str_field("jobType")
    }

    pub fn release_date(&self) -> Option<&str> {
        self.str_field("releaseDate")
    }

    pub fn featured(&self) -> bool {
        self.field("featured").and_then(Value::as_bool).unwrap_or(false)
    }

    /// The record's rich-text body: `content` for posts and postings,
    /// `description` for press releases.
    pub fn rich_text(&self) -> Option<&Value> {
        self.field("content").or_else(|| self.field("description"))
    }

    /// A plain-text excerpt of the rich-text body, at most `max_chars`
    /// characters plus an ellipsis when truncated. Records without a body
    /// yield an empty string.
    pub fn excerpt(&self, max_chars: usize) -> String {
        self.rich_text()
            .map(|document| flatten_rich_text(document, max_chars))
            .unwrap_or_default()
    }
}
