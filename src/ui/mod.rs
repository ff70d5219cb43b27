//! # User Interface
//!
//! Colored terminal output with clickable file links.

pub mod log;

pub use log::{debug, error, format_distance, header, info, path_link, success, truncate, warn, Log};
