use super::*;
use axum::http::HeaderValue;

// =============================================================
// upstream_url
// =============================================================

#[test]
fn upstream_url_joins_origin_and_path() {
    assert_eq!(
        upstream_url("https://api.example.com", "/api/trending"),
        "https://api.example.com/api/trending"
    );
}

#[test]
fn upstream_url_trims_trailing_origin_slash() {
    assert_eq!(
        upstream_url("https://api.example.com/", "/api/trending"),
        "https://api.example.com/api/trending"
    );
}

#[test]
fn upstream_url_keeps_query_string() {
    assert_eq!(
        upstream_url("http://localhost:8000", "/api/search?query=arrival&page=2"),
        "http://localhost:8000/api/search?query=arrival&page=2"
    );
}

// =============================================================
// Header filtering
// =============================================================

#[test]
fn hop_by_hop_headers_are_flagged() {
    for name in ["connection", "keep-alive", "transfer-encoding", "upgrade", "host"] {
        let header = HeaderName::from_static(name);
        assert!(is_hop_by_hop(&header), "header {name:?}");
    }
}

#[test]
fn end_to_end_headers_are_not_flagged() {
    for name in ["cookie", "authorization", "content-type", "accept"] {
        let header = HeaderName::from_static(name);
        assert!(!is_hop_by_hop(&header), "header {name:?}");
    }
}

#[test]
fn forwardable_headers_drops_hop_by_hop_and_keeps_auth() {
    let mut source = HeaderMap::new();
    source.insert("connection", HeaderValue::from_static("keep-alive"));
    source.insert("host", HeaderValue::from_static("edge.example.com"));
    source.insert("cookie", HeaderValue::from_static("access_token=abc"));
    source.insert("authorization", HeaderValue::from_static("Bearer abc"));

    let forwarded = forwardable_headers(&source);
    assert!(!forwarded.contains_key("connection"));
    assert!(!forwarded.contains_key("host"));
    assert_eq!(
        forwarded.get("cookie"),
        Some(&HeaderValue::from_static("access_token=abc"))
    );
    assert_eq!(
        forwarded.get("authorization"),
        Some(&HeaderValue::from_static("Bearer abc"))
    );
}

// =============================================================
// Error rendering
// =============================================================

#[test]
fn error_body_serializes_message_field() {
    let body = ErrorBody { message: ProxyError::NotConfigured.to_string() };
    assert_eq!(
        serde_json::to_string(&body).unwrap(),
        "{\"message\":\"API origin is not configured\"}"
    );
}

#[test]
fn forwardable_headers_preserves_repeated_values() {
    let mut source = HeaderMap::new();
    source.append("set-cookie", HeaderValue::from_static("a=1"));
    source.append("set-cookie", HeaderValue::from_static("b=2"));

    let forwarded = forwardable_headers(&source);
    assert_eq!(forwarded.get_all("set-cookie").iter().count(), 2);
}
