//! API Module
//!
//! HTTP client for the Nursing Notes REST API.

pub mod client;

pub use client::*;
