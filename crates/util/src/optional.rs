use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A tri-state optional value: never specified, explicitly `null`, or present.
///
/// `Option<T>` collapses "absent" and "null" into `None`; JSON documents that
/// must round-trip exactly need to keep them apart. On the serde side the
/// container is meant to be used with
/// `#[serde(default, skip_serializing_if = "Optional::is_unset")]`:
///
/// - a missing key deserializes to [`Optional::Unset`] (via `Default`),
/// - `null` deserializes to [`Optional::Null`],
/// - any other value deserializes to [`Optional::Value`].
///
/// # Examples
///
/// ```
/// use jsonfeed_util::Optional;
/// use serde::Deserialize;
///
/// #[derive(Deserialize)]
/// struct Author {
///     #[serde(default)]
///     name: Optional<String>,
/// }
///
/// let a: Author = serde_json::from_str(r#"{}"#).unwrap();
/// let b: Author = serde_json::from_str(r#"{"name":null}"#).unwrap();
/// let c: Author = serde_json::from_str(r#"{"name":"Ada"}"#).unwrap();
/// assert!(a.name.is_unset());
/// assert!(b.name.is_null());
/// assert_eq!(c.name.as_deref(), Some("Ada"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Optional<T> {
    /// The field was never specified.
    Unset,
    /// The field was specified as `null`.
    Null,
    /// The field holds a value.
    Value(T),
}

impl<T> Optional<T> {
    /// Returns `true` if the field was never specified.
    pub fn is_unset(&self) -> bool {
        matches!(self, Optional::Unset)
    }

    /// Returns `true` if the field was explicitly `null`.
    pub fn is_null(&self) -> bool {
        matches!(self, Optional::Null)
    }

    /// Returns `true` if the field holds a value.
    pub fn is_value(&self) -> bool {
        matches!(self, Optional::Value(_))
    }

    /// Borrow the held value, if any.
    pub fn value(&self) -> Option<&T> {
        match self {
            Optional::Value(v) => Some(v),
            _ => None,
        }
    }

    /// Mutably borrow the held value, if any.
    pub fn value_mut(&mut self) -> Option<&mut T> {
        match self {
            Optional::Value(v) => Some(v),
            _ => None,
        }
    }

    /// Convert `&Optional<T>` into `Optional<&T>`.
    pub fn as_ref(&self) -> Optional<&T> {
        match self {
            Optional::Unset => Optional::Unset,
            Optional::Null => Optional::Null,
            Optional::Value(v) => Optional::Value(v),
        }
    }

    /// Map the held value, keeping `Unset` and `Null` as they are.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Optional<U> {
        match self {
            Optional::Unset => Optional::Unset,
            Optional::Null => Optional::Null,
            Optional::Value(v) => Optional::Value(f(v)),
        }
    }

    /// Discard the unset/null distinction.
    pub fn into_option(self) -> Option<T> {
        match self {
            Optional::Value(v) => Some(v),
            _ => None,
        }
    }

    /// Return the held value or `default`.
    pub fn unwrap_or(self, default: T) -> T {
        self.into_option().unwrap_or(default)
    }

    /// Replace the current state with `Unset` and return it.
    pub fn take(&mut self) -> Optional<T> {
        std::mem::take(self)
    }
}

impl<T> Default for Optional<T> {
    fn default() -> Self {
        Optional::Unset
    }
}

impl<T: std::ops::Deref> Optional<T> {
    /// Borrow the held value through `Deref`, e.g. `&str` from `Optional<String>`.
    pub fn as_deref(&self) -> Option<&T::Target> {
        self.value().map(|v| &**v)
    }
}

/// `None` becomes `Null`: a caller holding an `Option` has decided on the field.
impl<T> From<Option<T>> for Optional<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Optional::Value(v),
            None => Optional::Null,
        }
    }
}

impl From<&str> for Optional<String> {
    fn from(value: &str) -> Self {
        Optional::Value(value.to_string())
    }
}

impl From<String> for Optional<String> {
    fn from(value: String) -> Self {
        Optional::Value(value)
    }
}

impl From<bool> for Optional<bool> {
    fn from(value: bool) -> Self {
        Optional::Value(value)
    }
}

impl From<u64> for Optional<u64> {
    fn from(value: u64) -> Self {
        Optional::Value(value)
    }
}

impl<T: Serialize> Serialize for Optional<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            // Unset fields are expected to be skipped by the containing struct.
            Optional::Unset | Optional::Null => serializer.serialize_none(),
            Optional::Value(v) => serializer.serialize_some(v),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Optional<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // Only reached when the key is present; absence goes through `Default`.
        Ok(Option::<T>::deserialize(deserializer)?.into())
    }
}

/// Optional JSON string.
pub type OptString = Optional<String>;

/// Optional JSON boolean.
pub type OptBool = Optional<bool>;

/// Optional non-negative JSON integer.
pub type OptInt = Optional<u64>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use serde_json::json;

    #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
    struct Probe {
        #[serde(default, skip_serializing_if = "Optional::is_unset")]
        name: OptString,
        #[serde(default, skip_serializing_if = "Optional::is_unset")]
        size: OptInt,
    }

    #[test]
    fn test_absent_key_is_unset() {
        let probe: Probe = serde_json::from_value(json!({})).unwrap();
        assert!(probe.name.is_unset());
        assert!(probe.size.is_unset());
    }

    #[test]
    fn test_null_key_is_null() {
        let probe: Probe = serde_json::from_value(json!({"name": null})).unwrap();
        assert!(probe.name.is_null());
        assert!(probe.size.is_unset());
    }

    #[test]
    fn test_present_key_is_value() {
        let probe: Probe = serde_json::from_value(json!({"name": "", "size": 0})).unwrap();
        assert_eq!(probe.name, Optional::Value(String::new()));
        assert_eq!(probe.size, Optional::Value(0));
    }

    #[test]
    fn test_serialize_skips_unset_and_keeps_null() {
        let probe = Probe {
            name: Optional::Null,
            size: Optional::Unset,
        };
        assert_eq!(serde_json::to_value(&probe).unwrap(), json!({"name": null}));

        let probe = Probe {
            name: "x".into(),
            size: 3u64.into(),
        };
        assert_eq!(
            serde_json::to_value(&probe).unwrap(),
            json!({"name": "x", "size": 3})
        );
    }

    #[test]
    fn test_negative_integer_is_rejected() {
        assert!(serde_json::from_value::<Probe>(json!({"size": -1})).is_err());
    }

    #[test]
    fn test_accessors() {
        let v: OptString = "abc".into();
        assert_eq!(v.as_deref(), Some("abc"));
        assert_eq!(v.as_ref().map(|s| s.len()), Optional::Value(3));
        assert_eq!(Optional::<u64>::Null.unwrap_or(7), 7);
        assert_eq!(Optional::from(None::<bool>), Optional::Null);

        let mut w: OptBool = true.into();
        assert_eq!(w.take(), Optional::Value(true));
        assert!(w.is_unset());
    }
}
