//! The preparer: writes one consistent framing decision into a message.
//!
//! # Rules
//!
//! 1. The options are validated first, see [`ConnectionOption`]. A rejected
//!    call leaves the message untouched.
//! 2. The payload framing follows the body size:
//!    - known size, zero included: `Content-Length: n` and no `Transfer-Encoding`
//!    - unknown size: `chunked` as the final `Transfer-Encoding` coding and no
//!      `Content-Length`
//!    - a response whose status forbids a body (`1xx`, `204`, `304`): neither
//!      field, and the body must be known to be empty
//! 3. If any option is given, `Connection` is rewritten and its other tokens
//!    are kept. [`ConnectionOption::Close`] or [`ConnectionOption::KeepAlive`]
//!    replace any existing `close` and `keep-alive` tokens with `close`, or with
//!    `keep-alive` below HTTP/1.1 only. [`ConnectionOption::Upgrade`] replaces
//!    an existing `upgrade` token and leaves `close`/`keep-alive` alone. Without
//!    options `Connection` is left as the caller set it.
//!
//! Rewritten fields keep the display name of their first existing occurrence.
//! 4. A message can be prepared once; a second call fails with
//!    [`MessageError::AlreadyPrepared`].

use tracing::{debug, warn};

use crate::ensure;
use crate::framing::ConnectionOption;
use crate::framing::option::Intent;
use crate::protocol::fields::{CONNECTION, CONTENT_LENGTH, TRANSFER_ENCODING};
use crate::protocol::token::tokens;
use crate::protocol::{BodySize, Field, Fields, Message, MessageError, PayloadSize, StartLine, Version};

const CHUNKED: &str = "chunked";

/// Returns how the payload of `message` is framed by [`prepare`].
///
/// This depends only on the start line and the body size, never on the current
/// fields.
pub fn payload_size<S: StartLine, B: BodySize>(message: &Message<S, B>) -> PayloadSize {
    if message.header().start_line().forbids_body() {
        return PayloadSize::Empty;
    }

    match message.size() {
        Some(n) => PayloadSize::Length(n),
        None => PayloadSize::Chunked,
    }
}

/// Adjusts the `Connection`, `Content-Length` and `Transfer-Encoding` fields of
/// `message` from its body and the given options.
///
/// # Errors
///
/// Returns [`MessageError::InvalidArgument`] if:
/// - both [`ConnectionOption::Close`] and [`ConnectionOption::KeepAlive`] are given
/// - [`ConnectionOption::Upgrade`] is given for a version below HTTP/1.1
/// - the status forbids a body but the body is not known to be empty
///
/// Returns [`MessageError::AlreadyPrepared`] if the message was prepared before.
///
/// In every error case the message is left unchanged.
pub fn prepare<S: StartLine, B: BodySize>(
    message: &mut Message<S, B>,
    options: &[ConnectionOption],
) -> Result<(), MessageError> {
    ensure!(!message.is_prepared(), MessageError::AlreadyPrepared);

    let version = message.header().version();
    let intent = Intent::from_options(options, version)?;

    let payload_size = payload_size(message);
    if payload_size.is_empty() && message.size() != Some(0) {
        warn!(size = ?message.size(), "message must not carry a body");
        return Err(MessageError::invalid_argument("invalid response body"));
    }

    let fields = message.header_mut().fields_mut();
    prepare_payload(fields, payload_size, version);
    if !intent.is_empty() {
        prepare_connection(fields, intent, version);
    }

    debug!(%version, ?payload_size, ?options, "prepared message framing");
    message.mark_prepared();
    Ok(())
}

fn prepare_payload(fields: &mut Fields, payload_size: PayloadSize, version: Version) {
    match payload_size {
        PayloadSize::Length(n) => {
            fields.remove(TRANSFER_ENCODING);
            set_field(fields, CONTENT_LENGTH, n.to_string());
        }
        PayloadSize::Chunked => {
            if !version.is_http11_or_later() {
                warn!(%version, "chunked transfer coding used below HTTP/1.1");
            }

            fields.remove(CONTENT_LENGTH);
            let mut codings: Vec<&str> = fields
                .get_all(TRANSFER_ENCODING)
                .flat_map(tokens)
                .filter(|coding| !coding.eq_ignore_ascii_case(CHUNKED))
                .collect();
            codings.push(CHUNKED);
            let value = codings.join(", ");
            set_field(fields, TRANSFER_ENCODING, value);
        }
        PayloadSize::Empty => {
            fields.remove(CONTENT_LENGTH);
            fields.remove(TRANSFER_ENCODING);
        }
    }
}

fn prepare_connection(fields: &mut Fields, intent: Intent, version: Version) {
    let replaces_persistence = intent.close || intent.keep_alive;
    let mut connection: Vec<&str> = fields
        .get_all(CONNECTION)
        .flat_map(tokens)
        .filter(|token| !is_replaced_token(token, replaces_persistence))
        .collect();

    if intent.close {
        connection.push(ConnectionOption::Close.token());
    } else if intent.keep_alive && !version.is_http11_or_later() {
        connection.push(ConnectionOption::KeepAlive.token());
    }
    if intent.upgrade {
        connection.push(ConnectionOption::Upgrade.token());
    }

    let value = connection.join(", ");
    if value.is_empty() {
        fields.remove(CONNECTION);
    } else {
        set_field(fields, CONNECTION, value);
    }
}

/// `upgrade` is always recomputed, `close` and `keep-alive` only when a
/// persistence option was given.
fn is_replaced_token(token: &str, replaces_persistence: bool) -> bool {
    if token.eq_ignore_ascii_case(ConnectionOption::Upgrade.token()) {
        return true;
    }

    replaces_persistence
        && [ConnectionOption::Close, ConnectionOption::KeepAlive]
            .iter()
            .any(|option| token.eq_ignore_ascii_case(option.token()))
}

/// Sets `name` to a single `value`, keeping the display name already stored for it.
fn set_field(fields: &mut Fields, name: &str, value: String) {
    let name = fields
        .iter()
        .map(Field::name)
        .find(|stored| stored.eq_ignore_ascii_case(name))
        .unwrap_or(name)
        .to_owned();
    fields.set(name, value);
}

#[cfg(test)]
mod tests {
    use crate::framing::{is_chunked, is_keep_alive, is_upgrade};
    use crate::protocol::{Request, Response, Status, UnknownSize};

    use super::*;
    use ConnectionOption::{Close, KeepAlive, Upgrade};

    fn response<B>(version: Version, body: B) -> Response<B> {
        Response::new(Status::Ok, version, body)
    }

    #[test]
    fn known_size_sets_content_length() {
        let mut message = response(Version::HTTP_11, "Hello World!");
        message.header_mut().fields_mut().insert("Transfer-Encoding", "gzip, chunked");

        prepare(&mut message, &[]).unwrap();

        let fields = message.header().fields();
        assert_eq!(fields.get("Content-Length"), Some("12"));
        assert!(!fields.contains("Transfer-Encoding"));
        assert!(!fields.contains("Connection"));
        assert!(!message.chunked());
    }

    #[test]
    fn zero_size_sets_content_length() {
        let mut message = response(Version::HTTP_11, ());
        prepare(&mut message, &[]).unwrap();

        assert_eq!(message.header().fields().get("Content-Length"), Some("0"));
    }

    #[test]
    fn content_length_overrides_stale_value() {
        let mut message = response(Version::HTTP_11, "abc");
        message.header_mut().fields_mut().insert("content-length", "999");

        prepare(&mut message, &[]).unwrap();

        let fields = message.header().fields();
        assert_eq!(fields.get_all("Content-Length").collect::<Vec<_>>(), vec!["3"]);
        assert_eq!(fields.iter().next().map(Field::name), Some("content-length"));
    }

    #[test]
    fn unknown_size_sets_chunked() {
        let mut message = response(Version::HTTP_11, UnknownSize(()));
        message.header_mut().fields_mut().insert("Content-Length", "10");

        prepare(&mut message, &[]).unwrap();

        let fields = message.header().fields();
        assert_eq!(fields.get("Transfer-Encoding"), Some("chunked"));
        assert!(!fields.contains("Content-Length"));
        assert!(message.chunked());
    }

    #[test]
    fn unknown_size_http10_still_chunked() {
        let mut message = response(Version::HTTP_10, UnknownSize(()));
        message.header_mut().fields_mut().insert("Content-Length", "10");

        prepare(&mut message, &[]).unwrap();

        let fields = message.header().fields();
        assert_eq!(fields.get("Transfer-Encoding"), Some("chunked"));
        assert!(!fields.contains("Content-Length"));
        assert!(message.chunked());
        assert!(is_chunked(message.header()));
    }

    #[test]
    fn unknown_size_appends_chunked_after_other_codings() {
        let mut message = response(Version::HTTP_11, UnknownSize(()));
        message.header_mut().fields_mut().insert("Transfer-Encoding", "chunked, gzip");

        prepare(&mut message, &[]).unwrap();

        assert_eq!(message.header().fields().get("Transfer-Encoding"), Some("gzip, chunked"));
        assert!(message.chunked());
    }

    #[test]
    fn unknown_size_keeps_existing_chunked() {
        let mut message = response(Version::HTTP_11, UnknownSize(()));
        message.header_mut().fields_mut().insert("transfer-encoding", "gzip, Chunked");

        prepare(&mut message, &[]).unwrap();

        let fields = message.header().fields();
        assert_eq!(fields.get("Transfer-Encoding"), Some("gzip, chunked"));
        assert_eq!(fields.get_all("transfer-encoding").count(), 1);
        assert_eq!(fields.iter().next().map(Field::name), Some("transfer-encoding"));
    }

    #[test]
    fn close_option() {
        let mut message = response(Version::HTTP_11, "body");
        prepare(&mut message, &[Close]).unwrap();

        assert_eq!(message.header().fields().get("Connection"), Some("close"));
        assert!(!is_keep_alive(message.header()));
    }

    #[test]
    fn keep_alive_option_http10() {
        let mut message = response(Version::HTTP_10, "body");
        prepare(&mut message, &[KeepAlive]).unwrap();

        assert_eq!(message.header().fields().get("Connection"), Some("keep-alive"));
        assert!(is_keep_alive(message.header()));
    }

    #[test]
    fn keep_alive_option_http11_omits_connection() {
        let mut message = response(Version::HTTP_11, "body");
        prepare(&mut message, &[KeepAlive]).unwrap();

        assert!(!message.header().fields().contains("Connection"));
        assert!(is_keep_alive(message.header()));
    }

    #[test]
    fn keep_alive_option_replaces_close() {
        let mut message = response(Version::HTTP_11, "body");
        message.header_mut().fields_mut().insert("Connection", "close");

        prepare(&mut message, &[KeepAlive]).unwrap();

        assert!(!message.header().fields().contains("Connection"));
        assert!(is_keep_alive(message.header()));
    }

    #[test]
    fn upgrade_option() {
        let mut message = Request::new("GET", "/chat", Version::HTTP_11, ());
        message.header_mut().fields_mut().insert("Upgrade", "websocket");

        prepare(&mut message, &[Upgrade]).unwrap();

        assert_eq!(message.header().fields().get("Connection"), Some("upgrade"));
        assert!(is_upgrade(message.header()));
    }

    #[test]
    fn upgrade_keeps_existing_close() {
        let mut message = Request::new("GET", "/chat", Version::HTTP_11, ());
        message.header_mut().fields_mut().insert("connection", "close");

        prepare(&mut message, &[Upgrade]).unwrap();

        let fields = message.header().fields();
        assert_eq!(fields.get("Connection"), Some("close, upgrade"));
        assert_eq!(fields.iter().next().map(Field::name), Some("connection"));
        assert!(!is_keep_alive(message.header()));
        assert!(is_upgrade(message.header()));
    }

    #[test]
    fn upgrade_keeps_existing_keep_alive() {
        let mut message = Request::new("GET", "/chat", Version::from_u8(12), ());
        message.header_mut().fields_mut().insert("Connection", "keep-alive, Upgrade");

        prepare(&mut message, &[Upgrade]).unwrap();

        assert_eq!(message.header().fields().get("Connection"), Some("keep-alive, upgrade"));
    }

    #[test]
    fn close_and_upgrade_options() {
        let mut message = Request::new("GET", "/", Version::HTTP_11, ());
        prepare(&mut message, &[Close, Upgrade]).unwrap();

        assert_eq!(message.header().fields().get("Connection"), Some("close, upgrade"));
        assert!(is_upgrade(message.header()));
        assert!(!is_keep_alive(message.header()));
    }

    #[test]
    fn connection_keeps_unrelated_tokens() {
        let mut message = response(Version::HTTP_10, "body");
        message.header_mut().fields_mut().insert("Connection", "X-Trace, Close");

        prepare(&mut message, &[KeepAlive]).unwrap();

        assert_eq!(message.header().fields().get("Connection"), Some("X-Trace, keep-alive"));
    }

    #[test]
    fn no_options_leave_connection_untouched() {
        let mut message = response(Version::HTTP_11, "body");
        message.header_mut().fields_mut().insert("Connection", "close");

        prepare(&mut message, &[]).unwrap();

        assert_eq!(message.header().fields().get("Connection"), Some("close"));
    }

    #[test]
    fn conflicting_options_leave_message_untouched() {
        let mut message = response(Version::HTTP_11, "body");
        message.header_mut().fields_mut().insert("Transfer-Encoding", "chunked");
        let before = message.clone();

        let result = prepare(&mut message, &[Close, KeepAlive]);

        assert!(matches!(result, Err(MessageError::InvalidArgument { .. })));
        assert_eq!(message, before);
        assert!(!message.is_prepared());
    }

    #[test]
    fn upgrade_below_http11_rejected() {
        let mut message = Request::new("GET", "/", Version::HTTP_10, ());
        let before = message.clone();

        let result = prepare(&mut message, &[Upgrade]);

        assert!(matches!(result, Err(MessageError::InvalidArgument { .. })));
        assert_eq!(message, before);
    }

    #[test]
    fn prepare_twice_rejected() {
        let mut message = response(Version::HTTP_11, "body");
        prepare(&mut message, &[Close]).unwrap();
        let before = message.clone();

        let result = prepare(&mut message, &[Close]);

        assert_eq!(result, Err(MessageError::AlreadyPrepared));
        assert_eq!(message, before);
    }

    #[test]
    fn bodiless_status_removes_framing() {
        for status in [Status::Continue, Status::NoContent, Status::NotModified] {
            let mut message = Response::new(status, Version::HTTP_11, ());
            message.header_mut().fields_mut().insert("Content-Length", "0");
            message.header_mut().fields_mut().insert("Transfer-Encoding", "chunked");

            prepare(&mut message, &[]).unwrap();

            let fields = message.header().fields();
            assert!(!fields.contains("Content-Length"));
            assert!(!fields.contains("Transfer-Encoding"));
        }
    }

    #[test]
    fn bodiless_status_rejects_body() {
        let mut message = Response::new(Status::NoContent, Version::HTTP_11, "oops");
        let result = prepare(&mut message, &[]);
        assert!(matches!(result, Err(MessageError::InvalidArgument { .. })));

        let mut message = Response::new(Status::NotModified, Version::HTTP_11, UnknownSize(()));
        let result = prepare(&mut message, &[]);
        assert!(matches!(result, Err(MessageError::InvalidArgument { .. })));
        assert!(message.header().fields().is_empty());
    }

    #[test]
    fn switching_protocols_with_upgrade() {
        let mut message = Response::new(Status::SwitchingProtocols, Version::HTTP_11, ());
        message.header_mut().fields_mut().insert("Upgrade", "websocket");

        prepare(&mut message, &[Upgrade]).unwrap();

        let fields = message.header().fields();
        assert_eq!(fields.get("Connection"), Some("upgrade"));
        assert!(!fields.contains("Content-Length"));
        assert!(!is_chunked(message.header()));
    }

    #[test]
    fn payload_size_decision() {
        assert_eq!(payload_size(&response(Version::HTTP_11, "abc")), PayloadSize::Length(3));
        assert_eq!(payload_size(&response(Version::HTTP_11, UnknownSize(()))), PayloadSize::Chunked);
        assert_eq!(payload_size(&Response::new(Status::NoContent, Version::HTTP_11, ())), PayloadSize::Empty);
        assert_eq!(payload_size(&Request::new("GET", "/", Version::HTTP_11, ())), PayloadSize::Length(0));
    }
}
