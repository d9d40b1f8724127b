//! CLI command implementations.
//!
//! - [`route`] - Resolve a destination and present the route
//! - [`init`] - Write the default configuration file
//! - [`format`] - Format a distance and duration like the summary card

pub mod format;
pub mod init;
pub mod route;
