//! Utility modules for common functionality
//!
//! - `logging`: Logging configuration and setup
//! - `text`: Width-aware string truncation for table output

pub mod logging;
pub mod text;
