use std::mem::MaybeUninit;

use bytes::Bytes;
use http_body_util::{Empty, Full};
use indoc::indoc;
use micro_http_message::framing::{self, ConnectionOption};
use micro_http_message::protocol::{
    MessageError, Request, RequestHeader, Response, SizeHinted, Status, UnknownSize, Verb, Version,
};

fn parse_request(raw: &str) -> RequestHeader {
    let mut parsed_req = httparse::Request::new(&mut []);
    let mut headers: [MaybeUninit<httparse::Header>; 16] = [const { MaybeUninit::uninit() }; 16];
    parsed_req.parse_with_uninit_headers(raw.as_bytes(), &mut headers).unwrap();
    parsed_req.into()
}

#[test]
fn proxy_forwards_parsed_request_with_new_body() {
    let header = parse_request(indoc! {r##"
        POST /submit HTTP/1.1
        Host: example.com
        Content-Length: 11
        Transfer-Encoding: gzip, chunked
        Connection: keep-alive, X-Hop

        "##});

    assert!(header.fields().contains("Transfer-Encoding"));
    assert!(framing::is_chunked(&header));

    let mut request = header.body(Full::new(Bytes::from_static(b"rewritten body")));
    request.prepare(&[ConnectionOption::Close]).unwrap();

    let fields = request.header().fields();
    assert_eq!(fields.get("content-length"), Some("14"));
    assert!(!fields.contains("transfer-encoding"));
    assert_eq!(fields.get("connection"), Some("X-Hop, close"));
    assert_eq!(fields.get("host"), Some("example.com"));
    assert!(!framing::is_keep_alive(request.header()));
}

#[test]
fn streaming_response_is_chunked() {
    let mut response = Response::new(Status::Ok, Version::HTTP_11, UnknownSize(Empty::<Bytes>::new()));
    response.header_mut().fields_mut().insert("Content-Type", "text/event-stream");

    response.prepare(&[]).unwrap();

    let fields = response.header().fields();
    assert_eq!(fields.get("Transfer-Encoding"), Some("chunked"));
    assert!(!fields.contains("Content-Length"));
    assert!(response.chunked());
    assert!(response.header().is_keep_alive());
}

#[test]
fn size_hinted_body_uses_exact_hint() {
    let mut response = Response::new(Status::Ok, Version::HTTP_10, SizeHinted(Full::new(Bytes::from_static(b"hi"))));
    response.prepare(&[ConnectionOption::KeepAlive]).unwrap();

    let fields = response.header().fields();
    assert_eq!(fields.get("Content-Length"), Some("2"));
    assert_eq!(fields.get("Connection"), Some("keep-alive"));
}

#[test]
fn websocket_handshake_request() {
    let mut request = Request::new("GET", "/chat", Version::HTTP_11, ());
    request.header_mut().fields_mut().insert("Upgrade", "websocket");
    request.header_mut().fields_mut().insert("Sec-WebSocket-Version", "13");

    request.prepare(&[ConnectionOption::Upgrade]).unwrap();

    assert!(request.header().is_upgrade());
    assert_eq!(request.header().fields().get("Content-Length"), Some("0"));

    let names: Vec<_> = request.header().fields().iter().map(|field| field.name()).collect();
    assert_eq!(names, vec!["Upgrade", "Sec-WebSocket-Version", "Content-Length", "Connection"]);
}

#[test]
fn rejected_prepare_is_all_or_nothing() {
    let mut request = Request::new("FROBNICATE", "/", Version::HTTP_10, "body");
    request.header_mut().fields_mut().insert("Transfer-Encoding", "chunked");

    let result = request.prepare(&[ConnectionOption::Upgrade]);

    assert!(matches!(result, Err(MessageError::InvalidArgument { .. })));
    assert_eq!(request.header().method(), Verb::Unknown);
    assert_eq!(request.header().method_str(), "FROBNICATE");
    assert_eq!(request.header().fields().len(), 1);
    assert!(request.chunked());
    assert!(!request.is_prepared());

    request.prepare(&[ConnectionOption::KeepAlive]).unwrap();
    assert_eq!(request.header().fields().get("Content-Length"), Some("4"));
    assert!(!request.chunked());
}

#[test]
fn prepared_response_converts_to_http() {
    let mut response = Response::new(Status::Created, Version::HTTP_11, String::from("{\"id\":8}"));
    response.header_mut().fields_mut().insert("Content-Type", "application/json");
    response.prepare(&[]).unwrap();

    let response = http::Response::try_from(response).unwrap();

    assert_eq!(response.status(), http::StatusCode::CREATED);
    assert_eq!(response.headers().get(http::header::CONTENT_LENGTH).unwrap(), "8");
    assert_eq!(response.body(), "{\"id\":8}");
}
