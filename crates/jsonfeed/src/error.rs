//! Error types for feed validation and the parse/serialize facade.

use std::fmt;

use thiserror::Error;

use crate::schema::Feed;

/// The kind of JSON Feed object a validation error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Structure {
    Feed,
    Author,
    Hub,
    Item,
    Attachment,
}

impl Structure {
    pub fn name(self) -> &'static str {
        match self {
            Structure::Feed => "Feed",
            Structure::Author => "Author",
            Structure::Hub => "Hub",
            Structure::Item => "Item",
            Structure::Attachment => "Attachment",
        }
    }
}

impl fmt::Display for Structure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A required field is missing, possibly inside an array of sub-objects.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// `key` is absent, `null`, or empty on an object of kind `structure`.
    #[error("Required field '{key}' missing from '{structure}'")]
    MissingRequiredValue {
        structure: Structure,
        key: &'static str,
    },
    /// `cause` was found on the element at position `index` of some array
    /// (items, hubs, attachments). Nests for arrays inside array elements.
    #[error("{cause} at index {index}")]
    Indexed {
        #[source]
        cause: Box<ValidationError>,
        index: usize,
    },
}

impl ValidationError {
    pub(crate) fn missing(structure: Structure, key: &'static str) -> Self {
        ValidationError::MissingRequiredValue { structure, key }
    }

    pub(crate) fn at(self, index: usize) -> Self {
        ValidationError::Indexed {
            cause: Box::new(self),
            index,
        }
    }

    /// The innermost missing-field error.
    pub fn root_cause(&self) -> &ValidationError {
        let mut err = self;
        while let ValidationError::Indexed { cause, .. } = err {
            err = cause;
        }
        err
    }

    /// Array positions leading to the failing object, outermost first.
    ///
    /// An attachment failing at index 0 of item 3 yields `[3, 0]`.
    pub fn path(&self) -> Vec<usize> {
        let mut out = Vec::new();
        let mut err = self;
        while let ValidationError::Indexed { cause, index } = err {
            out.push(*index);
            err = cause;
        }
        out
    }

    /// `(structure, key)` of the innermost missing field.
    pub fn missing_field(&self) -> (Structure, &'static str) {
        match self {
            ValidationError::MissingRequiredValue { structure, key } => (*structure, key),
            ValidationError::Indexed { cause, .. } => cause.missing_field(),
        }
    }
}

/// Errors returned by [`parse`](crate::parse) and [`serialize`](crate::serialize).
#[derive(Debug, Error)]
pub enum JsonFeedError {
    /// Malformed JSON or a type mismatch, straight from `serde_json`.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    /// The document decoded but is not a valid JSON Feed.
    ///
    /// On the parse path `feed` holds the decoded value for diagnostics.
    #[error("{cause}")]
    Invalid {
        #[source]
        cause: ValidationError,
        feed: Option<Box<Feed>>,
    },
    /// An `extensions` entry uses the key of a declared field and would be
    /// written twice.
    #[error("Extension key '{key}' on '{structure}' shadows a standard field")]
    ReservedKey { structure: Structure, key: String },
}

impl JsonFeedError {
    /// The validation error, if this is not a JSON error.
    pub fn validation(&self) -> Option<&ValidationError> {
        match self {
            JsonFeedError::Invalid { cause, .. } => Some(cause),
            JsonFeedError::Json(_) | JsonFeedError::ReservedKey { .. } => None,
        }
    }

    /// The decoded but invalid feed, when produced by [`parse`](crate::parse).
    pub fn into_feed(self) -> Option<Feed> {
        match self {
            JsonFeedError::Invalid { feed, .. } => feed.map(|f| *f),
            JsonFeedError::Json(_) | JsonFeedError::ReservedKey { .. } => None,
        }
    }
}

impl From<ValidationError> for JsonFeedError {
    fn from(cause: ValidationError) -> Self {
        JsonFeedError::Invalid { cause, feed: None }
    }
}
