//! # Shared Constants
//!
//! Centralized values used across the gateway. The tenant name is fixed at
//! compile time; one deployment serves exactly one website.

/// The tenant whose content this deployment serves, matched against the
/// backend's `website` field on every query.
pub const WEBSITE: &str = "meridian";

/// Environment variable selecting the content backend base URL.
pub const API_URL_ENV_VAR: &str = "CONTENT_API_URL";

/// Backend base URL used when [`API_URL_ENV_VAR`] is not set.
pub const DEFAULT_API_URL: &str = "http://localhost:1337";

/// Publish status required of every fetched record.
pub const PUBLISHED: &str = "Published";

/// Sentinel heading the distinct-value lists, meaning "no filter".
pub const ALL_VALUES: &str = "All";

/// Result cap for related-content lookups when the caller gives none.
pub const DEFAULT_RELATED_LIMIT: u32 = 3;
