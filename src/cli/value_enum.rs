use clap::ValueEnum;
use collect_files_domain::{DecodePolicy, NewlineMode};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "kebab-case")]
pub enum CliDecodePolicy {
    SkipBytes,
    Replace,
    SkipFile,
    Fail,
}

impl From<CliDecodePolicy> for DecodePolicy {
    fn from(value: CliDecodePolicy) -> Self {
        match value {
            CliDecodePolicy::SkipBytes => DecodePolicy::SkipBytes,
            CliDecodePolicy::Replace => DecodePolicy::Replace,
            CliDecodePolicy::SkipFile => DecodePolicy::SkipFile,
            CliDecodePolicy::Fail => DecodePolicy::Fail,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "kebab-case")]
pub enum CliNewlineMode {
    Translate,
    Keep,
}

impl From<CliNewlineMode> for NewlineMode {
    fn from(value: CliNewlineMode) -> Self {
        match value {
            CliNewlineMode::Translate => NewlineMode::Translate,
            CliNewlineMode::Keep => NewlineMode::Keep,
        }
    }
}
