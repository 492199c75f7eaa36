use std::time::Duration;

use efile_core::MalformedPolicy;
use efile_scan::Layout;
use serde::{Deserialize, Serialize};

/// The electronic filing search form.
pub const DEFAULT_ENDPOINT: &str = "https://docquery.fec.gov/cgi-bin/dcdev/forms/";

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub const DEFAULT_USER_AGENT: &str = concat!("efile-search/", env!("CARGO_PKG_VERSION"));

/// Client settings. Everything has a working default; `endpoint` only needs
/// changing to point at a local mock of the search form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub endpoint: String,
    pub timeout_secs: u64,
    pub user_agent: String,
    pub layout: Layout,
    pub on_malformed: MalformedPolicy,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            layout: Layout::default(),
            on_malformed: MalformedPolicy::default(),
        }
    }
}

impl SearchConfig {
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_malformed_policy(mut self, policy: MalformedPolicy) -> Self {
        self.on_malformed = policy;
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
