//! Response hook applying domain cache rules.

use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{header::HOST, HeaderMap, Request, Uri},
    middleware::Next,
    response::Response,
};
use hostcache_application::use_cases::AnnotateResponseUseCase;
use hostcache_infrastructure::cache_control::HttpResponseCache;
use tracing::instrument;

/// Runs the inner service, then rewrites the response's cache headers
/// according to the rule matching the request host.
///
/// Mount with `middleware::from_fn_with_state(annotate, domain_cache_control)`.
#[instrument(skip_all, fields(path = %request.uri().path()))]
pub async fn domain_cache_control(
    State(annotate): State<Arc<AnnotateResponseUseCase>>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let host = request_host(request.headers(), request.uri());

    let mut response = next.run(request).await;
    annotate.execute(host.as_deref(), &mut HttpResponseCache::new(&mut response));

    response
}

/// Lowercased request host without port.
///
/// Taken from the `Host` header, falling back to the URI authority for
/// absolute-form requests.
pub fn request_host(headers: &HeaderMap, uri: &Uri) -> Option<String> {
    let raw = headers
        .get(HOST)
        .and_then(|v| v.to_str().ok())
        .or_else(|| uri.authority().map(|a| a.as_str()))?;

    let host = strip_port(raw.trim());
    if host.is_empty() {
        return None;
    }

    Some(host.to_ascii_lowercase())
}

fn strip_port(authority: &str) -> &str {
    // Bracketed IPv6 literal
    if authority.starts_with('[') {
        return match authority.find(']') {
            Some(end) => &authority[..=end],
            None => authority,
        };
    }

    match authority.rsplit_once(':') {
        Some((host, port)) if port.chars().all(|c| c.is_ascii_digit()) => host,
        _ => authority,
    }
}
