pub mod decode_policy;
pub mod dir_exclusion;
pub mod glob_pattern;
pub mod newline_mode;

pub use decode_policy::DecodePolicy;
pub use dir_exclusion::DirExclusion;
pub use glob_pattern::GlobPattern;
pub use newline_mode::NewlineMode;
