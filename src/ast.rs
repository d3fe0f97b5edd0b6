/// Line classification for converted documents
use serde::{Deserialize, Serialize};

/// One node per source line, tagged by the first rule that matched it.
///
/// Inline nodes keep the trimmed line text unchanged; markers are rewritten
/// by the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Node {
    Document(Vec<Node>),
    Heading {
        level: usize, // Length of the token before the first space, not clamped
        text: String,
    },
    Bold(String),   // Contains `**` or `__`
    Italic(String), // Contains `*` or `_`
    Link(String),   // Contains each of `[`, `]`, `(`, `)`
    Paragraph(String),
}

impl Node {
    /// Rule name, used in log records.
    pub fn kind(&self) -> &'static str {
        match self {
            Node::Document(_) => "document",
            Node::Heading { .. } => "heading",
            Node::Bold(_) => "bold",
            Node::Italic(_) => "italic",
            Node::Link(_) => "link",
            Node::Paragraph(_) => "paragraph",
        }
    }
}
