use axum::{
    body::Body,
    http::{StatusCode, header::CONTENT_TYPE},
    response::Response,
};

#[track_caller]
pub(crate) fn assert_status_ok(response: &Response<Body>) {
    assert_eq!(response.status(), StatusCode::OK);
}

/// The value of `name`, panicking if the header is missing or not visible ASCII.
#[track_caller]
pub(crate) fn get_header(response: &Response<Body>, name: &str) -> String {
    let Some(value) = response.headers().get(name) else {
        panic!("response has no {name} header, got {:?}", response.headers());
    };

    value
        .to_str()
        .unwrap_or_else(|error| panic!("{name} header is not a string: {error}"))
        .to_owned()
}

#[track_caller]
pub(crate) fn assert_content_type(response: &Response<Body>, content_type: &str) {
    assert_eq!(get_header(response, CONTENT_TYPE.as_str()), content_type);
}

#[track_caller]
pub(crate) fn assert_hx_redirect(response: &Response<Body>, endpoint: &str) {
    assert_eq!(get_header(response, "hx-redirect"), endpoint);
}
