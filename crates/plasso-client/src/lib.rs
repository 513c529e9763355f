/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public Plasso client crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

//! Client for the Plasso flexkit API: member login, profile lookups over
//! GraphQL, settings and card updates, payments and subscriptions, plus a
//! cookie based guard for member-only pages.

pub mod auth;
pub mod http;
pub mod types;

// Re-export commonly used types from auth
pub use auth::{Access, Protected, Redirect, SessionCookie, SessionGuard};

// Re-export commonly used types from http
pub use http::{ClientConfig, PlassoClient, PlassoError, Result};

// Re-export all types
pub use types::*;
