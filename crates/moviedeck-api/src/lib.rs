//! API access layer for the moviedeck movie browser.
//!
//! Provides the TMDB API client and the asynchronous movie service facade.

/// Asynchronous movie service facade.
pub mod service;

/// TMDB API client.
pub mod tmdb;
