/*
[INPUT]:  HTTP client configuration and API endpoints
[OUTPUT]: HTTP responses and typed API results
[POS]:    HTTP layer - REST and GraphQL communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod checkout;
pub mod client;
pub mod error;
pub mod graphql;
pub mod member;

pub use error::{PlassoError, Result};

pub use client::{ClientConfig, PlassoClient};
