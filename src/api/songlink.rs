use std::sync::Arc;

use axum::{
    Extension, Json,
    extract::Query,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::{
    error::MoodError,
    resolve::LinkUpstream,
    types::ErrorBody,
};

/// Relays `?url=<storefront url>` to the link-aggregation service.
///
/// - exactly one non-empty `url` parameter, otherwise 400 `{"error": "Missing url parameter"}`
/// - upstream JSON relayed as-is with 200 and `Access-Control-Allow-Origin: *`
/// - upstream failure: 500 `{"error": <upstream message>}`
pub async fn songlink(
    Query(params): Query<Vec<(String, String)>>,
    Extension(upstream): Extension<Arc<dyn LinkUpstream>>,
) -> Response {
    let url = match single_url(&params) {
        Ok(url) => url,
        Err(e) => return error_response(StatusCode::BAD_REQUEST, e.to_string()),
    };

    match upstream.fetch_links(url).await {
        Ok(body) => (
            StatusCode::OK,
            [(header::ACCESS_CONTROL_ALLOW_ORIGIN, "*")],
            Json(body),
        )
            .into_response(),
        Err(e) => {
            tracing::warn!(%url, error = %e, "link upstream failed");
            let message = match e {
                MoodError::UpstreamFailure(message) if !message.is_empty() => message,
                MoodError::UpstreamFailure(_) => "Unknown error".to_string(),
                other => other.to_string(),
            };
            error_response(StatusCode::INTERNAL_SERVER_ERROR, message)
        }
    }
}

fn single_url(params: &[(String, String)]) -> Result<&str, MoodError> {
    let mut urls = params.iter().filter(|(key, _)| key == "url");
    match (urls.next(), urls.next()) {
        (Some((_, url)), None) if !url.is_empty() => Ok(url),
        _ => Err(MoodError::InvalidProxyInput),
    }
}

fn error_response(status: StatusCode, error: String) -> Response {
    (status, Json(ErrorBody { error })).into_response()
}
