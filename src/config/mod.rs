//! Configuration module
//!
//! Backend and share-link endpoints plus display behavior, loaded from a
//! TOML file with environment overrides applied once at startup.

pub mod config;

pub use config::Config;
