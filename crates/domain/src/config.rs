pub mod aggregates;
pub mod value_objects;

pub use aggregates::{CollectConfig, ConfigPatch};
pub use value_objects::{DecodePolicy, DirExclusion, GlobPattern, NewlineMode};
