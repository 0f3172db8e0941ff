//! JSON Feed 1.1 object model.
//!
//! Field names and optionality follow the field table at
//! <https://jsonfeed.org/version/1.1>. Optional fields use
//! [`Optional`](jsonfeed_util::Optional) so a decode-then-encode keeps track of
//! which keys were absent, which were `null`, and which held values. Keys that
//! are not part of the field table (publisher extensions such as `_itunes`)
//! are kept verbatim in `extensions`.
//!
//! Fields are declared in field-table order; serialized output follows it.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use jsonfeed_util::{OptBool, OptInt, OptString, Optional};

use crate::error::Structure;
use crate::VERSION;

/// Unrecognised keys of a JSON Feed object, in document order.
pub type Extensions = Map<String, Value>;

const FEED_KEYS: &[&str] = &[
    "version", "title", "home_page_url", "feed_url", "description", "user_comment",
    "next_url", "icon", "favicon", "author", "authors", "language", "expired", "hubs",
    "items",
];
const AUTHOR_KEYS: &[&str] = &["name", "url", "avatar"];
const HUB_KEYS: &[&str] = &["type", "url"];
const ITEM_KEYS: &[&str] = &[
    "id", "url", "external_url", "title", "content_html", "content_text", "summary",
    "image", "banner_image", "date_published", "date_modified", "author", "authors",
    "tags", "language", "attachments",
];
const ATTACHMENT_KEYS: &[&str] = &[
    "url", "mime_type", "title", "size_in_bytes", "duration_in_seconds",
];

/// First extension key that collides with one of `declared`.
fn shadowing<'a>(
    extensions: &'a Extensions,
    declared: &[&str],
    structure: Structure,
) -> Option<(Structure, &'a str)> {
    extensions
        .keys()
        .find(|key| declared.contains(&key.as_str()))
        .map(|key| (structure, key.as_str()))
}

fn author_shadowing<'a>(
    author: &'a Optional<Author>,
    authors: &'a Optional<Vec<Author>>,
) -> Option<(Structure, &'a str)> {
    author
        .value()
        .into_iter()
        .chain(authors.value().into_iter().flatten())
        .find_map(|a| shadowing(&a.extensions, AUTHOR_KEYS, Structure::Author))
}

/// A JSON Feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feed {
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Optional::is_unset")]
    pub home_page_url: OptString,
    #[serde(default, skip_serializing_if = "Optional::is_unset")]
    pub feed_url: OptString,
    #[serde(default, skip_serializing_if = "Optional::is_unset")]
    pub description: OptString,
    #[serde(default, skip_serializing_if = "Optional::is_unset")]
    pub user_comment: OptString,
    #[serde(default, skip_serializing_if = "Optional::is_unset")]
    pub next_url: OptString,
    #[serde(default, skip_serializing_if = "Optional::is_unset")]
    pub icon: OptString,
    #[serde(default, skip_serializing_if = "Optional::is_unset")]
    pub favicon: OptString,
    /// Deprecated in 1.1 in favour of `authors`; kept independently.
    #[serde(default, skip_serializing_if = "Optional::is_unset")]
    pub author: Optional<Author>,
    #[serde(default, skip_serializing_if = "Optional::is_unset")]
    pub authors: Optional<Vec<Author>>,
    #[serde(default, skip_serializing_if = "Optional::is_unset")]
    pub language: OptString,
    #[serde(default, skip_serializing_if = "Optional::is_unset")]
    pub expired: OptBool,
    #[serde(default, skip_serializing_if = "Optional::is_unset")]
    pub hubs: Optional<Vec<Hub>>,
    /// Required. `None` when the key was absent or `null`.
    #[serde(default)]
    pub items: Option<Vec<Item>>,
    #[serde(flatten)]
    pub extensions: Extensions,
}

impl Feed {
    /// Construct a minimal feed: the current version, a title and items.
    pub fn new(title: impl Into<String>, items: Vec<Item>) -> Self {
        Self {
            version: VERSION.to_string(),
            title: title.into(),
            home_page_url: Optional::Unset,
            feed_url: Optional::Unset,
            description: Optional::Unset,
            user_comment: Optional::Unset,
            next_url: Optional::Unset,
            icon: Optional::Unset,
            favicon: Optional::Unset,
            author: Optional::Unset,
            authors: Optional::Unset,
            language: Optional::Unset,
            expired: Optional::Unset,
            hubs: Optional::Unset,
            items: Some(items),
            extensions: Extensions::new(),
        }
    }

    /// The feed items, or an empty slice when `items` is missing.
    pub fn items(&self) -> &[Item] {
        self.items.as_deref().unwrap_or_default()
    }

    /// The first extension key, anywhere in the feed, that uses the name of a
    /// declared field. Such a key would be emitted twice on encode.
    pub fn shadowed_extension_key(&self) -> Option<(Structure, &str)> {
        if let Some(found) = shadowing(&self.extensions, FEED_KEYS, Structure::Feed) {
            return Some(found);
        }
        if let Some(found) = author_shadowing(&self.author, &self.authors) {
            return Some(found);
        }
        let mut hubs = self.hubs.value().into_iter().flatten();
        if let Some(found) =
            hubs.find_map(|hub| shadowing(&hub.extensions, HUB_KEYS, Structure::Hub))
        {
            return Some(found);
        }
        self.items().iter().find_map(|item| item.shadowed_extension_key())
    }
}

/// The author of a feed or an item. All fields are optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Author {
    #[serde(default, skip_serializing_if = "Optional::is_unset")]
    pub name: OptString,
    #[serde(default, skip_serializing_if = "Optional::is_unset")]
    pub url: OptString,
    #[serde(default, skip_serializing_if = "Optional::is_unset")]
    pub avatar: OptString,
    #[serde(flatten)]
    pub extensions: Extensions,
}

impl Author {
    /// Construct an author with every field unset.
    pub fn new() -> Self {
        Self::default()
    }
}

/// An endpoint for real-time notifications from the feed publisher.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hub {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub url: String,
    #[serde(flatten)]
    pub extensions: Extensions,
}

impl Hub {
    pub fn new(kind: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            url: url.into(),
            extensions: Extensions::new(),
        }
    }
}

/// An entry in a feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    #[serde(default)]
    pub id: String,
    #[serde(default, skip_serializing_if = "Optional::is_unset")]
    pub url: OptString,
    #[serde(default, skip_serializing_if = "Optional::is_unset")]
    pub external_url: OptString,
    #[serde(default, skip_serializing_if = "Optional::is_unset")]
    pub title: OptString,
    #[serde(default, skip_serializing_if = "Optional::is_unset")]
    pub content_html: OptString,
    #[serde(default, skip_serializing_if = "Optional::is_unset")]
    pub content_text: OptString,
    #[serde(default, skip_serializing_if = "Optional::is_unset")]
    pub summary: OptString,
    #[serde(default, skip_serializing_if = "Optional::is_unset")]
    pub image: OptString,
    #[serde(default, skip_serializing_if = "Optional::is_unset")]
    pub banner_image: OptString,
    /// RFC 3339 timestamp, kept as text.
    #[serde(default, skip_serializing_if = "Optional::is_unset")]
    pub date_published: OptString,
    /// RFC 3339 timestamp, kept as text.
    #[serde(default, skip_serializing_if = "Optional::is_unset")]
    pub date_modified: OptString,
    /// Deprecated in 1.1 in favour of `authors`; kept independently.
    #[serde(default, skip_serializing_if = "Optional::is_unset")]
    pub author: Optional<Author>,
    #[serde(default, skip_serializing_if = "Optional::is_unset")]
    pub authors: Optional<Vec<Author>>,
    #[serde(default, skip_serializing_if = "Optional::is_unset")]
    pub tags: Optional<Vec<String>>,
    #[serde(default, skip_serializing_if = "Optional::is_unset")]
    pub language: OptString,
    #[serde(default, skip_serializing_if = "Optional::is_unset")]
    pub attachments: Optional<Vec<Attachment>>,
    #[serde(flatten)]
    pub extensions: Extensions,
}

impl Item {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            url: Optional::Unset,
            external_url: Optional::Unset,
            title: Optional::Unset,
            content_html: Optional::Unset,
            content_text: Optional::Unset,
            summary: Optional::Unset,
            image: Optional::Unset,
            banner_image: Optional::Unset,
            date_published: Optional::Unset,
            date_modified: Optional::Unset,
            author: Optional::Unset,
            authors: Optional::Unset,
            tags: Optional::Unset,
            language: Optional::Unset,
            attachments: Optional::Unset,
            extensions: Extensions::new(),
        }
    }

    fn shadowed_extension_key(&self) -> Option<(Structure, &str)> {
        if let Some(found) = shadowing(&self.extensions, ITEM_KEYS, Structure::Item) {
            return Some(found);
        }
        if let Some(found) = author_shadowing(&self.author, &self.authors) {
            return Some(found);
        }
        self.attachments
            .value()
            .into_iter()
            .flatten()
            .find_map(|att| shadowing(&att.extensions, ATTACHMENT_KEYS, Structure::Attachment))
    }
}

/// A related resource of an item, e.g. a podcast episode's audio file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attachment {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub mime_type: String,
    #[serde(default, skip_serializing_if = "Optional::is_unset")]
    pub title: OptString,
    #[serde(default, skip_serializing_if = "Optional::is_unset")]
    pub size_in_bytes: OptInt,
    #[serde(default, skip_serializing_if = "Optional::is_unset")]
    pub duration_in_seconds: OptInt,
    #[serde(flatten)]
    pub extensions: Extensions,
}

impl Attachment {
    pub fn new(url: impl Into<String>, mime_type: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            mime_type: mime_type.into(),
            title: Optional::Unset,
            size_in_bytes: Optional::Unset,
            duration_in_seconds: Optional::Unset,
            extensions: Extensions::new(),
        }
    }
}
