//! Prepares a few responses and prints the resulting framing fields.
//!
//! Run with `cargo run --example prepare_response`.

use bytes::Bytes;
use http_body_util::Full;
use micro_http_message::framing::ConnectionOption;
use micro_http_message::protocol::{Fields, Response, Status, UnknownSize, Version};
use tracing::{Level, error, info};
use tracing_subscriber::FmtSubscriber;

fn main() {
    let subscriber = FmtSubscriber::builder().with_max_level(Level::DEBUG).finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let mut fixed = Response::new(Status::Ok, Version::HTTP_10, Full::new(Bytes::from_static(b"Hello World!\r\n")));
    match fixed.prepare(&[ConnectionOption::KeepAlive]) {
        Ok(()) => print_fields("fixed length", fixed.header().fields()),
        Err(e) => error!(cause = %e, "prepare fixed length response failed"),
    }

    let mut streaming = Response::new(Status::Ok, Version::HTTP_11, UnknownSize(()));
    streaming.header_mut().fields_mut().insert("Content-Type", "text/event-stream");
    match streaming.prepare(&[]) {
        Ok(()) => print_fields("streaming", streaming.header().fields()),
        Err(e) => error!(cause = %e, "prepare streaming response failed"),
    }

    let mut invalid = Response::new(Status::SwitchingProtocols, Version::HTTP_10, ());
    if let Err(e) = invalid.prepare(&[ConnectionOption::Upgrade]) {
        info!(cause = %e, "upgrade rejected as expected");
    }
}

fn print_fields(kind: &str, fields: &Fields) {
    for field in fields {
        info!(kind, name = field.name(), value = field.value(), "prepared field");
    }
}
