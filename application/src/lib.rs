//! Application layer for blink
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::ProcessConfig;
pub use ports::{
    progress::{NoProgress, ProgressNotifier, Stage},
    vision_gateway::{GatewayError, GatewayReply, VisionGateway},
};
pub use use_cases::process_image::{
    ErrorClass, ProcessImageError, ProcessImageInput, ProcessImageUseCase,
};
