use super::*;
use driverhub_protocols::error_codes::{
    INVALID_ARGUMENT, NO_SUCH_ELEMENT, NO_SUCH_SESSION, SUCCESS, UNKNOWN_COMMAND,
};

fn failure(status: i32, message: &str) -> Response {
    Response::failure(status, Some("s-1".to_string()), json!({"message": message}))
}

#[test]
fn test_legacy_success() {
    let response = Response::success(Some("s-1".to_string()), json!({"browserName": "firefox"}));
    let http = LegacyResponseCodec.encode(&response);
    let body = http.json_body().unwrap();

    assert_eq!(http.status, StatusCode::OK);
    assert_eq!(body["status"], SUCCESS);
    assert_eq!(body["state"], "success");
    assert_eq!(body["sessionId"], "s-1");
    assert_eq!(body["value"]["browserName"], "firefox");
}

#[test]
fn test_legacy_failure_is_still_http_ok() {
    let http = LegacyResponseCodec.encode(&failure(NO_SUCH_ELEMENT, "gone"));
    let body = http.json_body().unwrap();

    assert_eq!(http.status, StatusCode::OK);
    assert_eq!(body["status"], NO_SUCH_ELEMENT);
    assert_eq!(body["state"], "no such element");
    assert_eq!(body["value"]["message"], "gone");
}

#[test]
fn test_w3c_success() {
    let response = Response::success(None, json!([1, 2]));
    let http = W3cResponseCodec.encode(&response);
    let body = http.json_body().unwrap();

    assert_eq!(http.status, StatusCode::OK);
    assert_eq!(body["value"], json!([1, 2]));
    assert!(body["sessionId"].is_null());
}

#[test]
fn test_w3c_error_shape() {
    let http = W3cResponseCodec.encode(&failure(NO_SUCH_SESSION, "expired"));
    let body = http.json_body().unwrap();

    assert_eq!(http.status, StatusCode::NOT_FOUND);
    assert_eq!(body["status"], NO_SUCH_SESSION);
    assert_eq!(body["value"]["error"], "invalid session id");
    assert_eq!(body["value"]["message"], "expired");
    assert_eq!(body["value"]["stacktrace"], "");
}

#[test]
fn test_w3c_http_status_per_error() {
    let cases = [
        (INVALID_ARGUMENT, StatusCode::BAD_REQUEST),
        (UNKNOWN_COMMAND, StatusCode::NOT_FOUND),
        (NO_SUCH_ELEMENT, StatusCode::NOT_FOUND),
    ];
    for (status, expected) in cases {
        assert_eq!(W3cResponseCodec.encode(&failure(status, "x")).status, expected);
    }
}

#[test]
fn test_w3c_error_message_fallbacks() {
    let null_value = Response::failure(NO_SUCH_ELEMENT, None, Value::Null);
    let body = W3cResponseCodec.encode(&null_value).json_body().unwrap();
    assert_eq!(body["value"]["message"], "no such element");

    let string_value = Response::failure(NO_SUCH_ELEMENT, None, json!("plain"));
    let body = W3cResponseCodec.encode(&string_value).json_body().unwrap();
    assert_eq!(body["value"]["message"], "plain");
}

#[test]
fn test_codec_for_dialect() {
    let response = failure(NO_SUCH_SESSION, "x");
    assert_eq!(codec_for(Dialect::Oss).encode(&response).status, StatusCode::OK);
    assert_eq!(codec_for(Dialect::W3c).encode(&response).status, StatusCode::NOT_FOUND);
}

#[test]
fn test_headers_present() {
    let http = codec_for(Dialect::W3c).encode(&Response::new());
    assert_eq!(
        http.headers[axum::http::header::CONTENT_TYPE],
        crate::transport::JSON_CONTENT_TYPE
    );
}
