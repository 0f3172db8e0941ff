//! JSON Feed 1.1 parsing, validation, and serialization.
//!
//! This crate implements the [JSON Feed 1.1](https://jsonfeed.org/version/1.1)
//! format. [`parse`] decodes a feed and checks its required fields;
//! [`serialize`] refuses to encode a feed that fails the same checks.
//!
//! # Example
//!
//! ```
//! use jsonfeed::{parse, serialize, Feed, Item, Validate};
//!
//! let mut item = Item::new("1");
//! item.content_text = "Hello, world!".into();
//! let feed = Feed::new("My Feed", vec![item]);
//! assert!(feed.validate().is_ok());
//!
//! let bytes = serialize(&feed).unwrap();
//! assert_eq!(parse(&bytes).unwrap(), feed);
//!
//! let err = parse(br#"{"version":"https://jsonfeed.org/version/1.1","title":"t"}"#)
//!     .unwrap_err();
//! assert_eq!(err.to_string(), "Required field 'items' missing from 'Feed'");
//! ```

use std::str::FromStr;

use tracing::{debug, trace};

pub mod cli;
pub mod error;
pub mod schema;
pub mod validate;

pub use error::{JsonFeedError, Structure, ValidationError};
pub use jsonfeed_util::{OptBool, OptInt, OptString, Optional};
pub use schema::{Attachment, Author, Extensions, Feed, Hub, Item};
pub use validate::{validate_all, Validate};

/// The URL of the JSON Feed version implemented here.
pub const VERSION: &str = "https://jsonfeed.org/version/1.1";

/// Encoding options for [`serialize_with`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EncodeOptions {
    /// Indent the output instead of emitting compact JSON.
    pub pretty: bool,
}

/// Decode a feed without validating it.
pub fn decode(data: &[u8]) -> Result<Feed, serde_json::Error> {
    let feed = serde_json::from_slice::<Feed>(data).inspect_err(|e| {
        debug!(error = %e, "feed decode failed");
    })?;
    trace!(bytes = data.len(), items = feed.items().len(), "decoded feed");
    Ok(feed)
}

/// Decode and validate a feed.
///
/// A decode failure is returned as [`JsonFeedError::Json`]. A feed that decodes
/// but fails validation is returned as [`JsonFeedError::Invalid`], which still
/// carries the decoded value (see [`JsonFeedError::into_feed`]).
pub fn parse(data: &[u8]) -> Result<Feed, JsonFeedError> {
    let feed = decode(data)?;
    match feed.validate() {
        Ok(()) => Ok(feed),
        Err(cause) => {
            debug!(error = %cause, "decoded feed failed validation");
            Err(JsonFeedError::Invalid {
                cause,
                feed: Some(Box::new(feed)),
            })
        }
    }
}

/// Validate and encode a feed as compact JSON.
pub fn serialize(feed: &Feed) -> Result<Vec<u8>, JsonFeedError> {
    serialize_with(feed, &EncodeOptions::default())
}

/// Checks run before any encode: the feed must validate, and no extension key
/// may collide with a declared field (the output would repeat that key).
fn check_encodable(feed: &Feed) -> Result<(), JsonFeedError> {
    if let Err(cause) = feed.validate() {
        debug!(error = %cause, "refusing to serialize invalid feed");
        return Err(cause.into());
    }
    if let Some((structure, key)) = feed.shadowed_extension_key() {
        debug!(%structure, key, "refusing to serialize shadowing extension key");
        return Err(JsonFeedError::ReservedKey {
            structure,
            key: key.to_string(),
        });
    }
    Ok(())
}

/// Validate and encode a feed. Invalid feeds produce no output.
pub fn serialize_with(feed: &Feed, options: &EncodeOptions) -> Result<Vec<u8>, JsonFeedError> {
    check_encodable(feed)?;
    let bytes = if options.pretty {
        serde_json::to_vec_pretty(feed)?
    } else {
        serde_json::to_vec(feed)?
    };
    trace!(bytes = bytes.len(), pretty = options.pretty, "encoded feed");
    Ok(bytes)
}

impl Feed {
    /// Validate and encode as compact JSON text.
    pub fn to_json(&self) -> Result<String, JsonFeedError> {
        check_encodable(self)?;
        Ok(serde_json::to_string(self)?)
    }

    /// Validate and encode as indented JSON text.
    pub fn to_json_pretty(&self) -> Result<String, JsonFeedError> {
        check_encodable(self)?;
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl FromStr for Feed {
    type Err = JsonFeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s.as_bytes())
    }
}
