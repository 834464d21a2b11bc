//! Core HTTP message data model.
//!
//! This module provides the typed representation of a single HTTP/1.x request or
//! response, which the [`framing`](crate::framing) module inspects and prepares.
//!
//! # Architecture
//!
//! - **Fields** ([`fields`]): ordered, case-insensitive field collection
//!   - [`Fields`]: the multimap itself
//!   - [`Field`]: a single name/value pair
//!
//! - **Header** ([`Header`]): version and fields plus a start line
//!   - [`RequestHeader`]: method, raw method text and request-target
//!   - [`ResponseHeader`]: raw status code and optional custom reason
//!
//! - **Message** ([`Message`]): a header plus a body value
//!   - [`Request`] and [`Response`] aliases
//!   - [`PayloadSize`]: how the payload is delimited
//!
//! - **Body** ([`BodySize`]): exact serialized size of a body, if known
//!
//! - **Vocabulary**: [`Verb`], [`Status`] and [`Version`]
//!
//! - **Error Handling** ([`MessageError`])
//!
//! Each role specific accessor is defined only on the header type of that role,
//! so asking a request for its status does not compile.

pub mod fields;
pub use fields::Field;
pub use fields::Fields;

pub mod token;

mod version;
pub use version::Version;

mod verb;
pub use verb::Verb;

mod status;
pub use status::Status;
pub use status::forbids_body;
pub use status::standard_reason;

mod header;
pub use header::Header;
pub use header::StartLine;

mod request;
pub use request::Request;
pub use request::RequestHeader;
pub use request::RequestLine;

mod response;
pub use response::Response;
pub use response::ResponseHeader;
pub use response::StatusLine;

mod message;
pub use message::Message;
pub use message::PayloadSize;

mod body;
pub use body::BodySize;
pub use body::SizeHinted;
pub use body::UnknownSize;

mod error;
pub use error::MessageError;
