use crate::protocol::fields::{CONNECTION, TRANSFER_ENCODING};
use crate::protocol::token::{contains_token, last_token};
use crate::protocol::Header;

/// Returns true if the connection should stay open after this message.
///
/// HTTP/1.1 keeps the connection alive unless `Connection` lists `close`;
/// HTTP/1.0 closes it unless `Connection` lists `keep-alive`.
pub fn is_keep_alive<S>(header: &Header<S>) -> bool {
    let fields = header.fields();
    if header.version().is_http11_or_later() {
        !contains_token(fields, CONNECTION, "close")
    } else {
        contains_token(fields, CONNECTION, "keep-alive")
    }
}

/// Returns true if `Connection` lists `upgrade`.
///
/// The presence of an `Upgrade` field is not checked.
pub fn is_upgrade<S>(header: &Header<S>) -> bool {
    contains_token(header.fields(), CONNECTION, "upgrade")
}

/// Returns true if `Transfer-Encoding` is present and `chunked` is its last coding.
///
/// Chunked must be the final coding applied, so `gzip, chunked` is chunked but
/// `chunked, gzip` is not.
pub fn is_chunked<S>(header: &Header<S>) -> bool {
    last_token(header.fields(), TRANSFER_ENCODING).is_some_and(|coding| coding.eq_ignore_ascii_case("chunked"))
}
