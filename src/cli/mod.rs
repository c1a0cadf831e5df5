//! Command Line Interface module
//!
//! One submodule per subcommand:
//! - `search`: run a skill search against the catalog
//! - `featured`: list featured media entries
//! - `playlist`: print the aggregate playlist record
//! - `catalog`: catalog inspection, refresh and cache maintenance
//! - `config`: configuration inspection

pub mod catalog;
pub mod config;
pub mod featured;
pub mod playlist;
pub mod search;

pub mod output;
