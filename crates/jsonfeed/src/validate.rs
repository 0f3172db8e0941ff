//! Required-field validation for JSON Feed objects.
//!
//! Checks run in a fixed order and stop at the first failure, so the same
//! document always reports the same error.

use crate::error::{Structure, ValidationError};
use crate::schema::{Attachment, Author, Feed, Hub, Item};

/// A JSON Feed object that can check its own required fields.
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationError>;
}

/// Validate each element in order; the first failure is reported with its index.
///
/// # Example
///
/// ```
/// use jsonfeed::{validate_all, Hub, Structure};
///
/// let hubs = vec![Hub::new("WebSub", "https://hub"), Hub::new("WebSub", "")];
/// let err = validate_all(&hubs).unwrap_err();
/// assert_eq!(err.path(), vec![1]);
/// assert_eq!(err.missing_field(), (Structure::Hub, "url"));
/// ```
pub fn validate_all<'a, T, I>(elements: I) -> Result<(), ValidationError>
where
    T: Validate + 'a,
    I: IntoIterator<Item = &'a T>,
{
    for (index, element) in elements.into_iter().enumerate() {
        element.validate().map_err(|err| err.at(index))?;
    }
    Ok(())
}

fn require(value: &str, structure: Structure, key: &'static str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::missing(structure, key));
    }
    Ok(())
}

impl Validate for Feed {
    fn validate(&self) -> Result<(), ValidationError> {
        require(&self.version, Structure::Feed, "version")?;
        require(&self.title, Structure::Feed, "title")?;
        let items = self
            .items
            .as_ref()
            .ok_or_else(|| ValidationError::missing(Structure::Feed, "items"))?;
        validate_all(items)?;
        if let Some(hubs) = self.hubs.value() {
            validate_all(hubs)?;
        }
        Ok(())
    }
}

impl Validate for Author {
    /// Authors have no required fields.
    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}

impl Validate for Hub {
    fn validate(&self) -> Result<(), ValidationError> {
        require(&self.kind, Structure::Hub, "type")?;
        require(&self.url, Structure::Hub, "url")
    }
}

impl Validate for Item {
    fn validate(&self) -> Result<(), ValidationError> {
        require(&self.id, Structure::Item, "id")?;
        if let Some(attachments) = self.attachments.value() {
            validate_all(attachments)?;
        }
        Ok(())
    }
}

impl Validate for Attachment {
    fn validate(&self) -> Result<(), ValidationError> {
        require(&self.url, Structure::Attachment, "url")?;
        require(&self.mime_type, Structure::Attachment, "mime_type")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonfeed_util::Optional;

    fn missing(structure: Structure, key: &'static str) -> ValidationError {
        ValidationError::missing(structure, key)
    }

    #[test]
    fn test_minimal_feed_is_valid() {
        assert_eq!(Feed::new("t", vec![]).validate(), Ok(()));
    }

    #[test]
    fn test_feed_check_order() {
        let mut feed = Feed::new("", vec![]);
        feed.version.clear();
        feed.items = None;
        assert_eq!(feed.validate(), Err(missing(Structure::Feed, "version")));

        feed.version = crate::VERSION.to_string();
        assert_eq!(feed.validate(), Err(missing(Structure::Feed, "title")));

        feed.title = "t".to_string();
        assert_eq!(feed.validate(), Err(missing(Structure::Feed, "items")));
    }

    #[test]
    fn test_items_checked_before_hubs() {
        let mut feed = Feed::new("t", vec![Item::new("a"), Item::new("")]);
        feed.hubs = Optional::Value(vec![Hub::new("", "")]);
        assert_eq!(feed.validate(), Err(missing(Structure::Item, "id").at(1)));

        feed.items = Some(vec![]);
        assert_eq!(feed.validate(), Err(missing(Structure::Hub, "type").at(0)));
    }

    #[test]
    fn test_null_hubs_are_skipped() {
        let mut feed = Feed::new("t", vec![]);
        feed.hubs = Optional::Null;
        assert_eq!(feed.validate(), Ok(()));
        feed.hubs = Optional::Value(vec![]);
        assert_eq!(feed.validate(), Ok(()));
    }

    #[test]
    fn test_hub_rules() {
        assert_eq!(Hub::new("", "u").validate(), Err(missing(Structure::Hub, "type")));
        assert_eq!(Hub::new("t", "").validate(), Err(missing(Structure::Hub, "url")));
        assert_eq!(Hub::new("", "").validate(), Err(missing(Structure::Hub, "type")));
        assert_eq!(Hub::new("t", "u").validate(), Ok(()));
    }

    #[test]
    fn test_attachment_rules() {
        assert_eq!(
            Attachment::new("", "audio/mpeg").validate(),
            Err(missing(Structure::Attachment, "url"))
        );
        assert_eq!(
            Attachment::new("https://a", "").validate(),
            Err(missing(Structure::Attachment, "mime_type"))
        );
    }

    #[test]
    fn test_nested_attachment_error_is_double_indexed() {
        let mut bad = Item::new("b");
        bad.attachments = Optional::Value(vec![
            Attachment::new("https://a", "audio/mpeg"),
            Attachment::new("https://b", ""),
        ]);
        let feed = Feed::new("t", vec![Item::new("a"), bad]);
        let err = feed.validate().unwrap_err();
        assert_eq!(err, missing(Structure::Attachment, "mime_type").at(1).at(1));
        assert_eq!(err.path(), vec![1, 1]);
    }

    #[test]
    fn test_first_failure_wins() {
        let items = vec![Item::new("a"), Item::new(""), Item::new("")];
        assert_eq!(validate_all(&items), Err(missing(Structure::Item, "id").at(1)));
    }

    #[test]
    fn test_author_always_valid() {
        assert_eq!(Author::new().validate(), Ok(()));
    }
}
