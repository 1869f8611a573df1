use super::*;

// =============================================================
// Endpoint formatters
// =============================================================

#[test]
fn movie_endpoint_formats_expected_path() {
    assert_eq!(movie_endpoint(42), "/api/movies/42");
}

#[test]
fn tv_endpoint_formats_expected_path() {
    assert_eq!(tv_endpoint(95396), "/api/tv/95396");
}

#[test]
fn search_endpoint_includes_query_and_page() {
    assert_eq!(search_endpoint("arrival", 2), "/api/search?query=arrival&page=2");
}

#[test]
fn bearer_value_prefixes_token() {
    assert_eq!(bearer_value("tok-1"), "Bearer tok-1");
}

// =============================================================
// Failure messages
// =============================================================

#[test]
fn login_failed_message_formats_status() {
    assert_eq!(login_failed_message(401), "login failed: 401");
}

#[test]
fn signup_failed_message_formats_status() {
    assert_eq!(signup_failed_message(409), "signup failed: 409");
}

#[test]
fn verify_failed_message_formats_status() {
    assert_eq!(verify_failed_message(400), "verification failed: 400");
}

#[test]
fn request_failed_message_formats_status() {
    assert_eq!(request_failed_message(502), "request failed: 502");
}
