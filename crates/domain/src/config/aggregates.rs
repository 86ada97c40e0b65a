pub mod config;

pub use config::{CollectConfig, ConfigPatch};
