//! Resource initialization.
//!
//! This module provides functions to initialize the shared HTTP client and
//! the logger.

mod client;
mod logger;

pub use client::init_client;
pub use logger::init_logger;
