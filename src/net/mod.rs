//! URL utilities.
//!
//! - address.rs: sanitize user input, extract the display domain, and
//!   validate http(s) URLs before any request is made
//! - probe.rs: HEAD-based reachability check with a 5s deadline

pub mod address;
pub mod probe;

pub use address::{domain_of, parse_http_url, sanitize};
pub use probe::{check_reachable, DEFAULT_PROBE_TIMEOUT};
