//! Message framing: predicates and the preparer.
//!
//! The predicates answer three questions about a header from its fields and
//! version alone:
//!
//! - [`is_keep_alive`]: does the connection stay open after this message
//! - [`is_upgrade`]: does the message ask to switch protocols
//! - [`is_chunked`]: is the body delimited by chunked transfer coding
//!
//! [`prepare`] goes the other way. It takes the caller's intent, expressed as
//! [`ConnectionOption`]s, plus the body size reported by
//! [`BodySize`](crate::protocol::BodySize), and writes one consistent
//! `Connection`, `Content-Length` and `Transfer-Encoding` state into the fields.
//!
//! # Version policy
//!
//! Every version from HTTP/1.1 up is treated with HTTP/1.1 rules and every
//! version below it with HTTP/1.0 rules.

mod option;
pub use option::ConnectionOption;

mod predicate;
pub use predicate::is_chunked;
pub use predicate::is_keep_alive;
pub use predicate::is_upgrade;

mod prepare;
pub use prepare::payload_size;
pub use prepare::prepare;
