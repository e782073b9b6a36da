//! Heat map service library.
//!
//! Loads the temperature dataset, renders it with the `renderer` crate and
//! serves the result either as files (CLI) or over HTTP.

pub mod config;
pub mod fetch;
pub mod output;
pub mod server;
