// web_app/api/mod.rs - API module for server-side logic
//
// This module contains the HTTP client for the external analysis backend
// and the configuration it is built from.

#[cfg(feature = "backend")]
pub mod config;

#[cfg(feature = "backend")]
pub mod backend;
