//! Authentication subsystem.
//!
//! # Data Flow
//! ```text
//! protected navigation
//!     → guard.rs (gateway ready? any cached account?)
//!     → gateway.rs (initialize / login / logout / get_token / accounts)
//!     → identity.rs (IdentityClient trait, implemented by the host app)
//! ```
//!
//! # Design Decisions
//! - The identity client is injected, never a global
//! - `InteractionRequired` is resolved inside `get_token` and never returned

pub mod gateway;
pub mod guard;
pub mod identity;

#[cfg(test)]
pub(crate) mod fake;

pub use gateway::AuthGateway;
pub use guard::{Navigation, RouteGuard};
pub use identity::{
    Account, AuthError, AuthResult, AuthenticationResult, IdentityClient, TokenRequest,
};
