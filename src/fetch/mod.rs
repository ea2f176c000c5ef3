//! Hop navigation: follows a seed URL through HTTP redirects and body-level
//! navigation signals until a terminal page.

use std::time::Duration;

use crate::config::{
    DEFAULT_FILE_HOSTS, DEFAULT_MAX_HOPS, DEFAULT_USER_AGENT, HOP_TIMEOUT_SECS,
    MAX_RESPONSE_BODY_SIZE, OVERALL_TIMEOUT,
};

mod instruction;
mod redirects;
mod request;
mod signals;
mod state;


pub use instruction::{InstructionKind, RedirectInstruction};
pub use redirects::{Navigator, Resolution};
pub use signals::{
    detect_meta_refresh, detect_script_navigation, inspect_body, BodySignal, FileHostPattern,
    PageView,
};
pub use state::{Hop, NavigationState};

/// Settings for one `Navigator`.
#[derive(Debug, Clone)]
pub struct NavigatorConfig {
    /// Accepted navigations before `HopLimitExceeded`.
    pub max_hops: usize,
    /// Timeout for each individual request.
    pub hop_timeout: Duration,
    /// Wall-clock budget for a whole `resolve` call.
    pub overall_timeout: Duration,
    pub user_agent: String,
    /// Largest body read on any hop, in bytes.
    pub max_body_size: usize,
    /// Domains whose links in a page body count as a navigation.
    pub file_hosts: Vec<String>,
}

impl Default for NavigatorConfig {
    fn default() -> Self {
        Self {
            max_hops: DEFAULT_MAX_HOPS,
            hop_timeout: Duration::from_secs(HOP_TIMEOUT_SECS),
            overall_timeout: OVERALL_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            max_body_size: MAX_RESPONSE_BODY_SIZE,
            file_hosts: DEFAULT_FILE_HOSTS.iter().map(|h| h.to_string()).collect(),
        }
    }
}
