//! Wire contract of the `generateContent` provider endpoint.
//!
//! Both halves are pure transforms and are unit-testable without a live
//! endpoint; transport lives in the infrastructure layer.

pub mod envelope;
pub mod request;
