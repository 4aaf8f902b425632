//! Panel configuration. Loaded from TOML by the hosting application or built
//! programmatically; all fields fall back to defaults.

mod service_config;

pub use service_config::ServiceConfig;

/// Default values shared by the config structs.
pub mod defaults {
    /// Base URL of the remote inference service.
    pub const DEFAULT_SERVICE_URL: &str = "http://127.0.0.1:5000";
    /// Overall request timeout (seconds).
    pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 120;
    /// TCP connect timeout (seconds).
    pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
}
