//! Typed HTTP/1.x messages with automatic framing header preparation
//!
//! This crate models a single HTTP/1.x request or response as a typed value and
//! derives the message-framing fields (`Content-Length` vs. chunked
//! `Transfer-Encoding`, plus `Connection` semantics) from the body and the
//! caller's intent. The resulting header state is unambiguous and can be handed
//! to a serializer that trusts it blindly.
//!
//! Wire serialization, parsing, socket I/O and chunk encoding of the body bytes
//! are not part of this crate.
//!
//! # Example
//!
//! ```
//! use micro_http_message::framing::{self, ConnectionOption};
//! use micro_http_message::protocol::{Response, Status, Version};
//!
//! let mut response = Response::new(Status::Ok, Version::HTTP_10, String::from("Hello World!\r\n"));
//! response.prepare(&[ConnectionOption::KeepAlive]).unwrap();
//!
//! let fields = response.header().fields();
//! assert_eq!(fields.get("content-length"), Some("14"));
//! assert_eq!(fields.get("connection"), Some("keep-alive"));
//! assert!(framing::is_keep_alive(response.header()));
//! ```
//!
//! # Architecture
//!
//! The crate is organized into two modules:
//!
//! - [`protocol`]: the message data model
//!   - [`protocol::Fields`]: ordered, case-insensitive field collection
//!   - [`protocol::Header`]: version and fields plus a role specific start line,
//!     available as [`protocol::RequestHeader`] and [`protocol::ResponseHeader`]
//!   - [`protocol::Message`]: a header plus a body value
//!   - [`protocol::BodySize`]: reports the exact serialized size of a body, if known
//! - [`framing`]: keep-alive, upgrade and chunked predicates and the preparer
//!   that writes a consistent framing decision into the fields
//!
//! # Error Handling
//!
//! All recoverable failures are reported through [`protocol::MessageError`].
//! Operations that fail never leave a partially mutated message behind.

pub mod framing;
pub mod protocol;

mod utils;
pub(crate) use utils::ensure;
