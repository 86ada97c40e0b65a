use collect_files_shared_kernel::{DomainError, DomainResult};
use serde::Deserialize;

use super::NewlineMode;

/// What to do with file bytes that are not valid UTF-8.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DecodePolicy {
    /// Drop the offending bytes and keep the rest of the text.
    #[default]
    SkipBytes,
    /// Substitute U+FFFD for each invalid sequence.
    Replace,
    /// Emit no record for the file and report it as unreadable.
    SkipFile,
    /// Abort the whole collection.
    Fail,
}

impl DecodePolicy {
    /// Decode `bytes` as UTF-8, then apply `newlines` to the text.
    pub fn decode(self, bytes: Vec<u8>, newlines: NewlineMode) -> DomainResult<String> {
        let text = match String::from_utf8(bytes) {
            Ok(text) => text,
            Err(err) => match self {
                Self::SkipBytes => drop_invalid(err.as_bytes()),
                Self::Replace => String::from_utf8_lossy(err.as_bytes()).into_owned(),
                Self::SkipFile | Self::Fail => {
                    return Err(DomainError::InvalidUtf8 { valid_up_to: err.utf8_error().valid_up_to() });
                }
            },
        };
        Ok(newlines.apply(text))
    }

    /// Whether a decode failure under this policy ends the run.
    pub fn is_fatal(self) -> bool {
        matches!(self, Self::Fail)
    }
}

fn drop_invalid(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        out.push_str(chunk.valid());
    }
    out
}
