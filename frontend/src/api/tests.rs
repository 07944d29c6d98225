use super::*;

#[test]
fn new_trims_trailing_slash() {
    let api = CatalogApi::new("https://example.com/".to_string(), None);
    assert_eq!(api.url("movies/getMovies"), "https://example.com/movies/getMovies");
}

#[test]
fn url_joins_with_and_without_leading_slash() {
    let api = CatalogApi::new("https://example.com".to_string(), None);
    assert_eq!(api.url("/users/login"), "https://example.com/users/login");
    assert_eq!(api.url("users/login"), "https://example.com/users/login");
}

#[test]
fn error_message_prefers_payload_message() {
    let msg = error_message(401, r#"{"message": "Invalid email or password"}"#);
    assert_eq!(msg, "Invalid email or password");
}

#[test]
fn error_message_falls_back_on_unreadable_body() {
    assert_eq!(error_message(500, "<html>oops</html>"), "请求失败 (HTTP 500)");
    // message 字段为空串时同样退回通用文案
    assert_eq!(error_message(404, r#"{"message": ""}"#), "请求失败 (HTTP 404)");
    assert_eq!(error_message(502, "{}"), "请求失败 (HTTP 502)");
}

#[test]
fn api_error_display_is_user_facing() {
    let err = ApiError::Api {
        status: 401,
        message: "Invalid email or password".to_string(),
    };
    assert_eq!(err.to_string(), "Invalid email or password");

    let err = ApiError::Network("fetch aborted".to_string());
    assert!(err.to_string().contains("fetch aborted"));
}

#[test]
fn http_error_maps_onto_api_error() {
    let err: ApiError = HttpError::NetworkError("offline".to_string()).into();
    assert!(matches!(err, ApiError::Network(_)));

    let err: ApiError = HttpError::ResponseParseFailed("bad body".to_string()).into();
    assert!(matches!(err, ApiError::Decode(_)));
}
