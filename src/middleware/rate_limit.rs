use axum::{
    body::Body,
    extract::{ConnectInfo, Request},
    http::StatusCode,
    middleware::{self, Next},
    response::Response,
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};

use crate::config::Config;

/// Type alias for the global governor layer (IP-based rate limiting)
pub type GlobalGovernorLayer = GovernorLayer<
    tower_governor::key_extractor::PeerIpKeyExtractor,
    governor::middleware::NoOpMiddleware<governor::clock::QuantaInstant>,
    Body,
>;

/// Create a GovernorLayer for rate limiting per client IP address.
/// Needs the router to be served with `into_make_service_with_connect_info`.
pub fn create_global_governor(config: &Config) -> GlobalGovernorLayer {
    let governor_config = GovernorConfigBuilder::default()
        .per_millisecond(config.rate_limit_period_ms.max(1))
        .burst_size(config.rate_limit_burst.max(1))
        .finish()
        .expect("rate limit period and burst are non-zero");

    GovernorLayer::new(Arc::new(governor_config))
}

/// Rate limit `router` per client IP and log every request, including the ones
/// the limiter rejects. The logger wraps the governor so it sees its 429s.
pub fn apply_rate_limit(router: Router, config: &Config) -> Router {
    router
        .layer(create_global_governor(config))
        .layer(middleware::from_fn(log_request))
}

/// Middleware to log request details and failed responses
pub async fn log_request(
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    request: Request,
    next: Next,
) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();

    tracing::debug!(
        client_ip = %addr.ip(),
        method = %method,
        uri = %uri,
        "Incoming request"
    );

    let response = next.run(request).await;
    let status = response.status();

    if status == StatusCode::TOO_MANY_REQUESTS {
        tracing::warn!(
            client_ip = %addr.ip(),
            method = %method,
            uri = %uri,
            "Rate limited"
        );
    } else if status.is_client_error() || status.is_server_error() {
        tracing::warn!(
            client_ip = %addr.ip(),
            method = %method,
            uri = %uri,
            status = %status,
            "Request failed"
        );
    } else {
        tracing::debug!(
            client_ip = %addr.ip(),
            method = %method,
            uri = %uri,
            status = %status,
            "Request completed"
        );
    }

    response
}
