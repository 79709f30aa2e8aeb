//! Constants for the jira-gate client.

/// User-Agent header value for the Jira API client
pub const USER_AGENT: &str = concat!("jira-gate/", env!("CARGO_PKG_VERSION"));

/// Prefix of every REST endpoint used by the client
pub const API_PREFIX: &str = "/rest/api/2";

/// Default cap on the number of issues returned by a search
pub const DEFAULT_MAX_RESULTS: u32 = 50;
