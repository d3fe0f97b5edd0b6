/// Conversion settings
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// What to do with a line whose brackets look like a link but are out of order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LinkPolicy {
    /// Stop rewriting links on that line and keep the text produced so far.
    #[default]
    Lenient,
    /// Fail the conversion with [`crate::ConvertError::MalformedLink`].
    Strict,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    pub links: LinkPolicy,
}

impl Options {
    pub fn strict() -> Self {
        Options {
            links: LinkPolicy::Strict,
        }
    }
}
