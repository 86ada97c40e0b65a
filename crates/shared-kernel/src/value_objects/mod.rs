// crates/shared-kernel/src/value_objects/mod.rs
pub mod file_record;

pub use file_record::FileRecord;
