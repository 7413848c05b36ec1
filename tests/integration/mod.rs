//! Integration tests for propfiles

mod handle_release;
mod include_resolution;
mod test_utils;

pub use test_utils::*;
