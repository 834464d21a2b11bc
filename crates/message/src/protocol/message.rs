use crate::framing::{self, ConnectionOption};
use crate::protocol::fields::CONTENT_LENGTH;
use crate::protocol::header::StartLine;
use crate::protocol::{BodySize, Header, MessageError};

/// A complete HTTP message: a header plus a body value.
///
/// The start line type `S` decides whether this is a request or a response,
/// see [`Request`](crate::protocol::Request) and [`Response`](crate::protocol::Response).
/// The body type `B` is whatever the caller serializes; implementing [`BodySize`]
/// lets [`Message::prepare`] pick between `Content-Length` and chunked framing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message<S, B> {
    header: Header<S>,
    body: B,
    prepared: bool,
}

/// Represents the size information of an HTTP payload.
///
/// This enum describes how the payload of a prepared message is delimited:
/// - Known length: `Content-Length` framing
/// - Chunked: chunked `Transfer-Encoding`
/// - Empty: the message class forbids a body, no framing field at all
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PayloadSize {
    /// Payload with known length in bytes
    Length(u64),
    /// Payload using chunked transfer encoding
    Chunked,
    /// No payload may follow the header
    Empty,
}

impl PayloadSize {
    /// Returns true if the payload uses chunked transfer encoding
    #[inline]
    pub fn is_chunked(&self) -> bool {
        matches!(self, PayloadSize::Chunked)
    }

    /// Returns true if the payload is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, PayloadSize::Empty)
    }
}

impl<S, B> Message<S, B> {
    /// Creates an unprepared message from a header and a body.
    pub fn from_parts(header: Header<S>, body: B) -> Self {
        Self { header, body, prepared: false }
    }

    /// Consumes the message, returning the header and the body.
    pub fn into_parts(self) -> (Header<S>, B) {
        (self.header, self.body)
    }

    #[inline]
    pub fn header(&self) -> &Header<S> {
        &self.header
    }

    #[inline]
    pub fn header_mut(&mut self) -> &mut Header<S> {
        &mut self.header
    }

    #[inline]
    pub fn body(&self) -> &B {
        &self.body
    }

    #[inline]
    pub fn body_mut(&mut self) -> &mut B {
        &mut self.body
    }

    pub fn into_body(self) -> B {
        self.body
    }

    /// Replaces the body, keeping the header.
    ///
    /// The returned message is unprepared, since the new body may have a
    /// different size.
    pub fn map_body<F, C>(self, f: F) -> Message<S, C>
    where
        F: FnOnce(B) -> C,
    {
        Message { header: self.header, body: f(self.body), prepared: false }
    }

    /// Returns true if [`Message::prepare`] already succeeded on this message.
    #[inline]
    pub fn is_prepared(&self) -> bool {
        self.prepared
    }

    /// Returns true if `Transfer-Encoding` is present and `chunked` is its last coding.
    pub fn chunked(&self) -> bool {
        framing::is_chunked(&self.header)
    }

    /// Unconditionally sets the `Content-Length` field to `n` octets.
    ///
    /// A conflicting `Transfer-Encoding` field is left untouched.
    pub fn content_length(&mut self, n: u64) {
        self.header.fields_mut().set(CONTENT_LENGTH, n.to_string());
    }

    #[inline]
    pub(crate) fn mark_prepared(&mut self) {
        self.prepared = true;
    }
}

impl<S, B: BodySize> Message<S, B> {
    /// Returns the serialized size of the body in octets, or `None` if it is not
    /// known ahead of time.
    ///
    /// The current value of the `Content-Length` field is not inspected.
    pub fn size(&self) -> Option<u64> {
        self.body.size()
    }
}

impl<S: StartLine, B: BodySize> Message<S, B> {
    /// Returns how the payload of this message will be framed once prepared.
    pub fn payload_size(&self) -> PayloadSize {
        framing::payload_size(self)
    }

    /// Writes a consistent `Connection`, `Content-Length` and `Transfer-Encoding`
    /// state into the fields.
    ///
    /// See [`framing::prepare`] for the rules.
    ///
    /// # Errors
    ///
    /// Returns [`MessageError::InvalidArgument`] for conflicting options or an
    /// invalid body, and [`MessageError::AlreadyPrepared`] if called twice.
    pub fn prepare(&mut self, options: &[ConnectionOption]) -> Result<(), MessageError> {
        framing::prepare(self, options)
    }
}
