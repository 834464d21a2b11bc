//! The header portion of an HTTP message.
//!
//! A header holds the protocol version and fields that every message has, plus a
//! role specific start line. Requests use [`RequestLine`](crate::protocol::RequestLine)
//! and responses use [`StatusLine`](crate::protocol::StatusLine), so the accessors
//! for method and target exist only on [`RequestHeader`](crate::protocol::RequestHeader)
//! and the accessors for status and reason only on
//! [`ResponseHeader`](crate::protocol::ResponseHeader).

use crate::framing;
use crate::protocol::{Fields, Version};

/// The role specific first line of a message.
pub trait StartLine {
    /// Returns true if a message with this start line must not carry a body.
    fn forbids_body(&self) -> bool {
        false
    }
}

/// A request or response header: the start line, version and fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Header<S> {
    version: Version,
    fields: Fields,
    start_line: S,
}

impl<S> Header<S> {
    /// Creates a header from an already built start line and fields.
    pub fn from_parts(start_line: S, version: Version, fields: Fields) -> Self {
        Self { version, fields, start_line }
    }

    /// Consumes the header, returning its start line, version and fields.
    pub fn into_parts(self) -> (S, Version, Fields) {
        (self.start_line, self.version, self.fields)
    }

    #[inline]
    pub fn version(&self) -> Version {
        self.version
    }

    #[inline]
    pub fn set_version<V: Into<Version>>(&mut self, version: V) {
        self.version = version.into();
    }

    #[inline]
    pub fn fields(&self) -> &Fields {
        &self.fields
    }

    #[inline]
    pub fn fields_mut(&mut self) -> &mut Fields {
        &mut self.fields
    }

    #[inline]
    pub fn start_line(&self) -> &S {
        &self.start_line
    }

    /// Returns true if the connection should stay open after this message.
    ///
    /// See [`framing::is_keep_alive`].
    pub fn is_keep_alive(&self) -> bool {
        framing::is_keep_alive(self)
    }

    /// Returns true if this message asks for a protocol upgrade.
    ///
    /// See [`framing::is_upgrade`].
    pub fn is_upgrade(&self) -> bool {
        framing::is_upgrade(self)
    }

    /// Attaches a body to this header.
    pub fn body<B>(self, body: B) -> crate::protocol::Message<S, B> {
        crate::protocol::Message::from_parts(self, body)
    }

    #[inline]
    pub(crate) fn start_line_mut(&mut self) -> &mut S {
        &mut self.start_line
    }
}
