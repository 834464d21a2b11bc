//! Ordered, case-insensitive collection of header fields.
//!
//! [`Fields`] is a multimap from field name to raw string value. Names are
//! compared ASCII case-insensitively for lookup, replacement and removal, while
//! the casing supplied by the caller is kept for display. Iteration always
//! follows insertion order.
//!
//! Any type implementing `AsRef<str>` can be used as a field name, which
//! includes the constants exported from [`http::header`]:
//!
//! ```
//! use micro_http_message::protocol::Fields;
//!
//! let mut fields = Fields::new();
//! fields.insert("Content-Type", "text/plain");
//! assert_eq!(fields.get(http::header::CONTENT_TYPE), Some("text/plain"));
//! ```

use std::slice;
use std::vec;

use http::{HeaderMap, HeaderName, HeaderValue};

use crate::protocol::MessageError;

/// Display name of the `Connection` field.
pub const CONNECTION: &str = "Connection";

/// Display name of the `Content-Length` field.
pub const CONTENT_LENGTH: &str = "Content-Length";

/// Display name of the `Transfer-Encoding` field.
pub const TRANSFER_ENCODING: &str = "Transfer-Encoding";

/// A single name/value pair stored in [`Fields`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    name: String,
    value: String,
}

impl Field {
    /// Returns the field name with the casing it was stored with.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the raw field value.
    pub fn value(&self) -> &str {
        &self.value
    }

    #[inline]
    fn is(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }
}

/// An ordered multimap of header fields with case-insensitive names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fields {
    entries: Vec<Field>,
}

impl Fields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { entries: Vec::with_capacity(capacity) }
    }

    /// Appends a field, keeping any existing fields with the same name.
    pub fn insert<N: AsRef<str>, V: Into<String>>(&mut self, name: N, value: V) {
        self.entries.push(Field { name: name.as_ref().to_owned(), value: value.into() });
    }

    /// Replaces every field with this name by a single field.
    ///
    /// The replacement takes the position of the first existing occurrence, and
    /// is appended if the name was absent.
    pub fn set<N: AsRef<str>, V: Into<String>>(&mut self, name: N, value: V) {
        let name = name.as_ref();
        let value = value.into();

        match self.entries.iter().position(|field| field.is(name)) {
            Some(index) => {
                self.entries[index] = Field { name: name.to_owned(), value };
                let mut current = 0;
                self.entries.retain(|field| {
                    let keep = current <= index || !field.is(name);
                    current += 1;
                    keep
                });
            }
            None => self.entries.push(Field { name: name.to_owned(), value }),
        }
    }

    /// Returns the value of the first field with this name.
    pub fn get<N: AsRef<str>>(&self, name: N) -> Option<&str> {
        let name = name.as_ref();
        self.entries.iter().find(|field| field.is(name)).map(Field::value)
    }

    /// Returns the values of every field with this name, in insertion order.
    pub fn get_all<N: AsRef<str>>(&self, name: N) -> impl Iterator<Item = &str> {
        self.entries.iter().filter(move |field| field.is(name.as_ref())).map(Field::value)
    }

    pub fn contains<N: AsRef<str>>(&self, name: N) -> bool {
        let name = name.as_ref();
        self.entries.iter().any(|field| field.is(name))
    }

    /// Removes every field with this name, returning whether any was present.
    pub fn remove<N: AsRef<str>>(&mut self, name: N) -> bool {
        let name = name.as_ref();
        let before = self.entries.len();
        self.entries.retain(|field| !field.is(name));
        self.entries.len() != before
    }

    pub fn iter(&self) -> slice::Iter<'_, Field> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<'a> IntoIterator for &'a Fields {
    type Item = &'a Field;
    type IntoIter = slice::Iter<'a, Field>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for Fields {
    type Item = Field;
    type IntoIter = vec::IntoIter<Field>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<N: AsRef<str>, V: Into<String>> Extend<(N, V)> for Fields {
    fn extend<I: IntoIterator<Item = (N, V)>>(&mut self, iter: I) {
        for (name, value) in iter {
            self.insert(name, value);
        }
    }
}

impl<N: AsRef<str>, V: Into<String>> FromIterator<(N, V)> for Fields {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut fields = Fields::new();
        fields.extend(iter);
        fields
    }
}

/// Copies a `HeaderMap` into fields.
///
/// `HeaderMap` normalizes names to lowercase, so the original display casing is
/// not recoverable. Values that are not valid UTF-8 are converted lossily.
impl From<&HeaderMap> for Fields {
    fn from(map: &HeaderMap) -> Self {
        let mut fields = Fields::with_capacity(map.len());
        for (name, value) in map {
            fields.insert(name, String::from_utf8_lossy(value.as_bytes()));
        }
        fields
    }
}

impl TryFrom<&Fields> for HeaderMap {
    type Error = MessageError;

    fn try_from(fields: &Fields) -> Result<Self, Self::Error> {
        let mut map = HeaderMap::with_capacity(fields.len());
        for field in fields {
            let name = HeaderName::from_bytes(field.name.as_bytes()).map_err(MessageError::invalid_header)?;
            let value = HeaderValue::from_str(&field.value).map_err(MessageError::invalid_header)?;
            map.append(name, value);
        }
        Ok(map)
    }
}
