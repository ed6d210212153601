//! Backend API client and models
//!
//! This module handles communication with the platform's REST backend
//! and defines the data models for API requests/responses.

pub mod client;
pub mod endpoints;
pub mod models;

pub use client::{ApiClient, ApiError};
