//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! This crate defines traits that abstract external concerns:
//!
//! - [`filesystem`]: Directory traversal and file reading
//! - [`sink`]: Destinations for collected records
//! - [`progress`]: Console diagnostics for skipped files and the save outcome
//!
//! These ports allow the use case layer to remain
//! independent of specific implementations.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod filesystem;
pub mod progress;
pub mod sink;
