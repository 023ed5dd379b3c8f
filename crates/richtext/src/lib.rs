//! # `meridian-richtext`: Rich-Text Flattening
//!
//! This crate models the block-based rich-text documents produced by the
//! content backend's editor and flattens them into length-bounded plain
//! text for list-view excerpts. Only paragraph blocks carry meaningful
//! text; every other block type is skipped.

use serde::Deserialize;
use serde_json::Value;

/// An inline text leaf inside a paragraph block.
///
/// Leaves carry their own trailing whitespace and punctuation as authored,
/// so joining them requires no separator.
#[derive(Deserialize, Debug, Clone)]
pub struct Leaf {
    #[serde(default)]
    pub text: String,
}

/// A single block node of a rich-text document.
///
/// The backend emits many block types (headings, lists, quotes, images);
/// only `paragraph` is consumed here. Everything else collapses into
/// `Other` and is ignored.
#[derive(Deserialize, Debug, Clone)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    Paragraph {
        #[serde(default)]
        children: Vec<Leaf>,
    },
    #[serde(other)]
    Other,
}

/// Flattens a rich-text document into a plain-text excerpt of at most
/// `max_chars` characters.
///
/// Paragraph leaves are joined with no separator and paragraphs are joined
/// with a single space. Accumulation stops as soon as the running length
/// reaches `max_chars`, so arbitrarily long documents are never walked in
/// full. When the document's paragraph text is longer than `max_chars`,
/// the result is truncated to exactly `max_chars` characters and `"..."`
/// is appended; otherwise the text is returned as-is.
///
/// A document that is absent or not an array yields an empty string, as do
/// documents without paragraph blocks. Malformed block entries are skipped
/// like any other non-paragraph block.
pub fn flatten_rich_text(document: &Value, max_chars: usize) -> String {
    let Some(blocks) = document.as_array() else {
        return String::new();
    };

    let mut flat = String::new();
    let mut len = 0usize;
    let mut more_remaining = false;

    for block in blocks {
        let children = match serde_json::from_value::<Block>(block.clone()) {
            Ok(Block::Paragraph { children }) => children,
            _ => continue,
        };

        if len >= max_chars {
            // The cap is already reached; any paragraph that would extend
            // the joined text means the source is longer than what was
            // accumulated.
            if !flat.is_empty() || children.iter().any(|leaf| !leaf.text.is_empty()) {
                more_remaining = true;
                break;
            }
            continue;
        }

        if !flat.is_empty() {
            flat.push(' ');
            len += 1;
        }
        for leaf in &children {
            flat.push_str(&leaf.text);
            len += leaf.text.chars().count();
        }
    }

    if len > max_chars {
        let truncated: String = flat.chars().take(max_chars).collect();
        return format!("{truncated}...");
    }
    if more_remaining {
        return format!("{flat}...");
    }
    flat
}
