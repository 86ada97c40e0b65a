// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod config;
pub mod filesystem;
pub mod output;
pub mod persistence;
