//! Error types and error handling for the frontend.
//!
//! This module defines the structured errors the parser accumulates
//! while it works through a source. It includes:
//!
//! - Error structures with source position information
//! - One variant per kind of syntax problem
//! - Message formatting that matches the fixed diagnostic templates

pub mod errors;
