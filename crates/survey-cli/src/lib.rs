//! Library components of the `survey` command-line tool.

pub mod config;
pub mod logging;
pub mod pipeline;
