//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! - [`orchestrator`]: walks a tree through a [`FileSource`](collect_files_ports::filesystem::FileSource),
//!   decodes each file and hands records to a [`RecordSink`](collect_files_ports::sink::RecordSink)
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod orchestrator;

pub use orchestrator::{CollectFiles, MemorySink};
