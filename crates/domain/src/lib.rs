#![allow(clippy::multiple_crate_versions)]

pub mod config;
pub mod model;

pub use config::{CollectConfig, ConfigPatch, DecodePolicy, DirExclusion, GlobPattern, NewlineMode};
pub use model::{CollectionSummary, SkippedFile};
