//! # Content Gateway Example
//!
//! This example fetches published blog posts and their categories from a
//! running content backend and prints titles with short excerpts.
//!
//! ## Prerequisites
//!
//! A content backend reachable at `CONTENT_API_URL` (defaults to
//! `http://localhost:1337`). The variable can also be set in a `.env` file
//! at the workspace root:
//!
//! ```env
//! CONTENT_API_URL="https://cms.example.com"
//! ```
//!
//! ## How to Run
//!
//! From the workspace root, execute the following command:
//!
//! ```sh
//! cargo run -p meridian-content --example fetch_posts
//! ```

use anyhow::Result;
use dotenvy::dotenv;
use meridian_content::ContentClient;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize a simple logger to view the gateway's fetch output.
    tracing_subscriber::fmt::init();

    // Load environment variables from the .env file in the workspace root.
    dotenv().ok();

    let client = ContentClient::from_env();

    // --- 1. Categories ---
    println!("--- Categories ---");
    for category in client.blog_categories().await {
        println!("- {category}");
    }

    // --- 2. Published posts ---
    println!("\n--- Published posts ---");
    let posts = client.blog_posts(None).await;
    if posts.is_empty() {
        println!("No posts returned. Is the backend running and reachable?");
    }
    for post in &posts {
        println!("\n{}", post.title().unwrap_or("(untitled)"));
        println!("  {}", post.excerpt(120));
    }

    // --- 3. Related posts for the newest entry ---
    if let Some(first) = posts.first() {
        if let (Some(category), Some(slug)) = (first.category(), first.slug()) {
            let related = client.related_posts(category, slug).await;
            println!("\n--- Related to '{slug}' ---");
            for post in &related {
                println!("- {}", post.title().unwrap_or("(untitled)"));
            }
            println!("Related posts found: {}", related.len());
        }
    }

    Ok(())
}
