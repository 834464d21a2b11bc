//! HTTP request header handling implementation.
//!
//! This module provides the request start line and the accessors that only make
//! sense for requests: the method, both as a classified [`Verb`] and as the exact
//! text the caller supplied, and the request target.

use http::{HeaderMap, Method, Uri};

use crate::ensure;
use crate::protocol::header::StartLine;
use crate::protocol::{Fields, Header, Message, MessageError, Verb, Version, version};

/// The request-line: method and request-target.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestLine {
    verb: Verb,
    raw_method: Option<String>,
    target: String,
}

impl StartLine for RequestLine {}

/// The header of an HTTP request.
pub type RequestHeader = Header<RequestLine>;

/// A complete HTTP request.
pub type Request<B> = Message<RequestLine, B>;

impl Header<RequestLine> {
    /// Creates a request header with no fields.
    ///
    /// The method is classified as with [`RequestHeader::set_method_str`].
    pub fn new<T: Into<String>>(method: &str, target: T, version: Version) -> Self {
        let mut header = Header::from_parts(RequestLine::default(), version, Fields::new());
        header.set_method_str(method);
        header.set_target(target);
        header
    }

    /// Returns the request-method verb.
    ///
    /// If the method is not one of the recognized verbs, [`Verb::Unknown`] is
    /// returned and [`RequestHeader::method_str`] gives the exact text.
    #[inline]
    pub fn method(&self) -> Verb {
        self.start_line().verb
    }

    /// Sets the method to a known verb.
    ///
    /// # Errors
    ///
    /// Returns [`MessageError::InvalidArgument`] if `verb` is [`Verb::Unknown`];
    /// the header is left unchanged.
    pub fn set_method(&mut self, verb: Verb) -> Result<(), MessageError> {
        ensure!(verb != Verb::Unknown, MessageError::invalid_argument("unknown method verb"));

        let line = self.start_line_mut();
        line.verb = verb;
        line.raw_method = None;
        Ok(())
    }

    /// Returns the request-method text.
    pub fn method_str(&self) -> &str {
        let line = self.start_line();
        match &line.raw_method {
            Some(raw) => raw.as_str(),
            None if line.verb == Verb::Unknown => "",
            None => line.verb.as_str(),
        }
    }

    /// Sets the method from its text.
    ///
    /// If the text matches a known verb the method is classified as that verb,
    /// otherwise the text is stored as is and [`RequestHeader::method`] returns
    /// [`Verb::Unknown`].
    pub fn set_method_str(&mut self, method: &str) {
        let line = self.start_line_mut();
        line.verb = Verb::parse(method);
        line.raw_method = (line.verb == Verb::Unknown).then(|| method.to_owned());
    }

    /// Returns the request-target.
    #[inline]
    pub fn target(&self) -> &str {
        &self.start_line().target
    }

    pub fn set_target<T: Into<String>>(&mut self, target: T) {
        self.start_line_mut().target = target.into();
    }
}

impl<B> Message<RequestLine, B> {
    /// Creates an unprepared request with no fields.
    pub fn new<T: Into<String>>(method: &str, target: T, version: Version, body: B) -> Self {
        Message::from_parts(RequestHeader::new(method, target, version), body)
    }
}

/// Converts a parsed HTTP request into a RequestHeader.
///
/// Field names keep the casing they had on the wire, and values that are not
/// valid UTF-8 are converted lossily.
impl<'headers, 'buf> From<httparse::Request<'headers, 'buf>> for RequestHeader {
    fn from(req: httparse::Request<'headers, 'buf>) -> Self {
        let mut fields = Fields::with_capacity(req.headers.len());
        for header in req.headers.iter() {
            fields.insert(header.name, String::from_utf8_lossy(header.value));
        }

        let mut header = Header::from_parts(RequestLine::default(), version::from_httparse(req.version), fields);
        header.set_method_str(req.method.unwrap_or_default());
        header.set_target(req.path.unwrap_or_default());
        header
    }
}

impl<B> From<http::Request<B>> for Request<B> {
    fn from(request: http::Request<B>) -> Self {
        let (parts, body) = request.into_parts();
        let mut header = RequestHeader::new(parts.method.as_str(), parts.uri.to_string(), parts.version.into());
        *header.fields_mut() = Fields::from(&parts.headers);
        Message::from_parts(header, body)
    }
}

impl<B> TryFrom<Request<B>> for http::Request<B> {
    type Error = MessageError;

    fn try_from(request: Request<B>) -> Result<Self, Self::Error> {
        let (header, body) = request.into_parts();

        let method = Method::from_bytes(header.method_str().as_bytes()).map_err(MessageError::invalid_header)?;
        let uri = header.target().parse::<Uri>().map_err(MessageError::invalid_header)?;
        let version = http::Version::try_from(header.version())?;
        let headers = HeaderMap::try_from(header.fields())?;

        let mut request = http::Request::new(body);
        *request.method_mut() = method;
        *request.uri_mut() = uri;
        *request.version_mut() = version;
        *request.headers_mut() = headers;
        Ok(request)
    }
}
