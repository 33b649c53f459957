//! Gemini `generateContent` adapter for the [`VisionGateway`] port.
//!
//! [`VisionGateway`]: blink_application::VisionGateway

pub mod errors;
pub mod gateway;
pub mod headers;
pub mod settings;
