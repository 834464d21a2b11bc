//! HTTP response header handling implementation.
//!
//! The status code of a response is stored as the raw integer the caller set,
//! so codes outside the recognized set survive untouched. The reason phrase is
//! optional: unless a custom phrase is set, the standard text for the status
//! code is used.

use http::{HeaderMap, StatusCode};

use crate::protocol::header::StartLine;
use crate::protocol::status::{forbids_body, standard_reason};
use crate::protocol::{Fields, Header, Message, MessageError, Status, Version, version};

/// The status-line: status code and optional custom reason phrase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    code: u16,
    reason: Option<String>,
}

impl Default for StatusLine {
    fn default() -> Self {
        Self { code: Status::Ok.as_u16(), reason: None }
    }
}

impl StartLine for StatusLine {
    fn forbids_body(&self) -> bool {
        forbids_body(self.code)
    }
}

/// The header of an HTTP response.
pub type ResponseHeader = Header<StatusLine>;

/// A complete HTTP response.
pub type Response<B> = Message<StatusLine, B>;

impl Header<StatusLine> {
    /// Creates a response header with no fields.
    pub fn new(status: Status, version: Version) -> Self {
        Header::from_parts(StatusLine { code: status.as_u16(), reason: None }, version, Fields::new())
    }

    /// Returns the status, or [`Status::Unknown`] if the raw code is not recognized.
    #[inline]
    pub fn status(&self) -> Status {
        Status::from_u16(self.start_line().code)
    }

    pub fn set_status(&mut self, status: Status) {
        self.start_line_mut().code = status.as_u16();
    }

    /// Returns the raw status code exactly as it was set.
    #[inline]
    pub fn status_u16(&self) -> u16 {
        self.start_line().code
    }

    /// Sets the raw status code, which need not be a recognized one.
    pub fn set_status_u16(&mut self, code: u16) {
        self.start_line_mut().code = code;
    }

    /// Returns the reason phrase.
    ///
    /// This is the custom phrase if one is set, otherwise the standard text for
    /// the status code, or an empty string when the code has none.
    pub fn reason(&self) -> &str {
        let line = self.start_line();
        match &line.reason {
            Some(reason) => reason.as_str(),
            None => standard_reason(line.code).unwrap_or_default(),
        }
    }

    /// Sets a custom reason phrase. An empty string restores the standard text.
    pub fn set_reason(&mut self, reason: &str) {
        self.start_line_mut().reason = (!reason.is_empty()).then(|| reason.to_owned());
    }

    /// Returns true if a custom reason phrase is set.
    pub fn has_custom_reason(&self) -> bool {
        self.start_line().reason.is_some()
    }
}

impl<B> Message<StatusLine, B> {
    /// Creates an unprepared response with no fields.
    pub fn new(status: Status, version: Version, body: B) -> Self {
        Message::from_parts(ResponseHeader::new(status, version), body)
    }
}

/// Converts a parsed HTTP response into a ResponseHeader.
///
/// The reason phrase is kept as a custom phrase only when it differs from the
/// standard text for the status code.
impl<'headers, 'buf> From<httparse::Response<'headers, 'buf>> for ResponseHeader {
    fn from(res: httparse::Response<'headers, 'buf>) -> Self {
        let mut fields = Fields::with_capacity(res.headers.len());
        for header in res.headers.iter() {
            fields.insert(header.name, String::from_utf8_lossy(header.value));
        }

        let code = res.code.unwrap_or_default();
        let version = version::from_httparse(res.version);
        let mut header = Header::from_parts(StatusLine { code, reason: None }, version, fields);
        if let Some(reason) = res.reason
            && standard_reason(code) != Some(reason)
        {
            header.set_reason(reason);
        }
        header
    }
}

impl<B> From<http::Response<B>> for Response<B> {
    fn from(response: http::Response<B>) -> Self {
        let (parts, body) = response.into_parts();
        let mut header = ResponseHeader::new(Status::Unknown, parts.version.into());
        header.set_status_u16(parts.status.as_u16());
        *header.fields_mut() = Fields::from(&parts.headers);
        Message::from_parts(header, body)
    }
}

/// Converts into an `http::Response`.
///
/// `http` has no room for a custom reason phrase, so it is dropped.
impl<B> TryFrom<Response<B>> for http::Response<B> {
    type Error = MessageError;

    fn try_from(response: Response<B>) -> Result<Self, Self::Error> {
        let (header, body) = response.into_parts();

        let status = StatusCode::from_u16(header.status_u16()).map_err(MessageError::invalid_header)?;
        let version = http::Version::try_from(header.version())?;
        let headers = HeaderMap::try_from(header.fields())?;

        let mut response = http::Response::new(body);
        *response.status_mut() = status;
        *response.version_mut() = version;
        *response.headers_mut() = headers;
        Ok(response)
    }
}
