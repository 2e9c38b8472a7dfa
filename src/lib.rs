//! Fetch the Deep Wedge galaxy-cluster catalog dump and convert it into a
//! typed CSV table.

pub mod config;
pub mod error;
pub mod fetch;
pub mod pipeline;
pub mod process;
