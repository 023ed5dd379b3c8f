//! # `meridian-content`: Content Gateway
//!
//! A thin client for the headless content backend behind the Meridian
//! marketing site. It translates a small set of filter parameters into
//! queries over the blog-post, job-posting, and press-release collections,
//! normalizes the returned records into one flat shape, and derives
//! plain-text excerpts from rich-text bodies.
//!
//! Every public accessor is total: transport and backend failures are
//! logged and collapse to an empty result, so a page built on this client
//! degrades to a "no content" state instead of failing to render.

pub mod client;
pub mod config;
pub mod constants;
pub mod errors;
pub mod query;
pub mod record;

pub use client::ContentClient;
pub use config::GatewayConfig;
pub use errors::ContentError;
pub use query::{Collection, CollectionQuery};
pub use record::ContentRecord;
