//! Shared types and configuration for Sitebooks.
//!
//! This crate provides common types used across all other crates:
//! - Currency codes with validation
//! - Configuration management

pub mod config;
pub mod types;

pub use config::AppConfig;
pub use types::CurrencyCode;
