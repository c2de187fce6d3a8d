use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use crate::models::{DENY_ALLOW_ORIGIN, DENY_BODY, DENY_CONTENT_TYPE};

// Takes no extractors: the request body is never read.
pub async fn deny() -> impl IntoResponse {

    (
        StatusCode::FORBIDDEN,
        [
            (header::CONTENT_TYPE, DENY_CONTENT_TYPE),
            (header::ACCESS_CONTROL_ALLOW_ORIGIN, DENY_ALLOW_ORIGIN)
        ],
        DENY_BODY
    )

}
