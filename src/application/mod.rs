/// Accumulation strategies for paginated fetches
pub mod accumulator;
/// Session state and handle helpers
pub mod auth;
/// HTTP client for the XRPC API
pub mod client;
/// Application configuration module
pub mod config;
/// Paginated, rate limit aware fetch loop
pub mod fetcher;
/// Service interfaces and traits
pub mod interfaces;
/// Service implementations
pub mod services;
