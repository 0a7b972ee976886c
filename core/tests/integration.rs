//! End-to-end test against the live mock server.
//!
//! Starts the mock server on a random port, then drives `BitlyClient` over
//! real HTTP. Validates request construction, URL encoding and plain-text
//! parsing end-to-end with the actual server.

use bitly_core::{BitlyClient, BitlyConfig, BitlyError};

const TOKEN: &str = "test-token";

/// Start the mock server on a random port and return its address.
fn spawn_mock_server() -> std::net::SocketAddr {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener, TOKEN).await
        })
        .unwrap();
    });

    addr
}

#[test]
fn shorten_then_expand_round_trip() {
    let addr = spawn_mock_server();
    let client =
        BitlyClient::with_base_url(BitlyConfig::new(TOKEN), &format!("http://{addr}")).unwrap();

    // The long URL contains a space, so the round trip also proves the
    // percent-encoding survives the wire.
    let long_url = "https://example.com/a b";
    let short_url = client.shorten(long_url).unwrap();
    assert!(short_url.starts_with("http://bit.ly/"), "unexpected short url: {short_url}");
    assert!(!short_url.ends_with('\n'), "trailing newline must be chomped");

    let expanded = client.expand(&short_url).unwrap();
    assert_eq!(expanded, long_url);
}

#[test]
fn wrong_token_surfaces_as_http_403() {
    let addr = spawn_mock_server();
    let client =
        BitlyClient::with_base_url(BitlyConfig::new("wrong"), &format!("http://{addr}")).unwrap();

    let err = client.shorten("https://example.com").unwrap_err();
    match err {
        BitlyError::Http { status, body } => {
            assert_eq!(status, 403);
            assert_eq!(body, "INVALID_ACCESS_TOKEN\n");
        }
        other => panic!("expected Http error, got {other}"),
    }
}

#[test]
fn expanding_an_unknown_short_url_surfaces_as_http_404() {
    let addr = spawn_mock_server();
    let client =
        BitlyClient::with_base_url(BitlyConfig::new(TOKEN), &format!("http://{addr}")).unwrap();

    let err = client.expand("http://bit.ly/nope").unwrap_err();
    assert!(matches!(err, BitlyError::Http { status: 404, .. }));
}

#[test]
fn unreachable_server_surfaces_as_transport_error() {
    // Bind and drop a listener so the port is very likely closed.
    let addr = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap()
    };
    let client =
        BitlyClient::with_base_url(BitlyConfig::new(TOKEN), &format!("http://{addr}")).unwrap();

    let err = client.shorten("https://example.com").unwrap_err();
    assert!(matches!(err, BitlyError::Transport(_)));
}
