//! GLM provider implementation
//!
//! This module provides a client for the ZAI (BigModel) GLM streaming chat
//! completions API.

pub mod client;
pub mod mapper;
pub mod sse;
pub mod types;

// Re-export commonly used types
pub use client::{GlmClient, GlmModel};
