use serde::Deserialize;

/// How line endings in decoded text are represented in the collected content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NewlineMode {
    /// `\r\n` and lone `\r` become `\n`, as a text-mode read would return them.
    #[default]
    Translate,
    /// Content is kept exactly as decoded.
    Keep,
}

impl NewlineMode {
    pub fn apply(self, text: String) -> String {
        match self {
            Self::Translate if text.contains('\r') => text.replace("\r\n", "\n").replace('\r', "\n"),
            _ => text,
        }
    }
}
