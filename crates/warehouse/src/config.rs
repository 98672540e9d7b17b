use std::time::Duration;

/// Default outbound request timeout. Exceeding it surfaces as an
/// upstream-unavailable error; there is no retry in the engine.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Connection settings for the external warehouse catalog service.
///
/// Passed explicitly into [`WarehouseClient::new`](crate::WarehouseClient::new)
/// rather than read from process-wide state, so tests and multi-tenant
/// callers can point different engines at different sources.
#[derive(Debug, Clone)]
pub struct WarehouseConfig {
    /// Base URL, e.g. `https://warehouse.internal`.
    pub base_url: String,
    /// Shared secret identifying this caller, sent on every request.
    pub shared_secret: String,
    /// Per-request timeout (default 15 seconds).
    pub timeout: Duration,
}

impl WarehouseConfig {
    pub fn new(base_url: impl Into<String>, shared_secret: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            shared_secret: shared_secret.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
