// HTTP server modules
pub mod config;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod sse;
pub mod state;

// Streaming relay core
pub mod gate;
pub mod guard;
pub mod prompt;
pub mod relay;

// External API clients
pub mod llm;
pub mod stripe;
pub mod supabase;
