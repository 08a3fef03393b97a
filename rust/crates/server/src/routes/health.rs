//! Liveness probe.

/// GET /healthz - Always `ok` while the process serves requests.
pub async fn health() -> &'static str {
    "ok"
}
