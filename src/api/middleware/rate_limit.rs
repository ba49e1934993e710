//! Per-client rate limiting using a token bucket.

use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::PeerIpKeyExtractor,
};

/// Token bucket parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimit {
    /// Seconds between replenishing one token.
    pub per_second: u64,
    /// Requests allowed in a burst before throttling kicks in.
    pub burst_size: u32,
}

impl Default for RateLimit {
    fn default() -> Self {
        Self {
            per_second: 2,
            burst_size: 100,
        }
    }
}

/// Creates a rate limiter keyed by the peer IP address.
///
/// Requests exceeding the limit receive `429 Too Many Requests`. The server
/// must be started with connect info (`into_make_service_with_connect_info`)
/// so the peer address is available.
///
/// # Panics
///
/// Panics if either value is zero; [`crate::config::Config::validate`]
/// rejects both.
pub fn layer(
    limit: RateLimit,
) -> GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body> {
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(limit.per_second)
            .burst_size(limit.burst_size)
            .finish()
            .expect("rate limit values must be non-zero"),
    );

    GovernorLayer::new(governor_conf)
}
