/// Line splitter and classifier
use crate::ast::Node;
use log::trace;

pub struct Parser;

impl Parser {
    pub fn new() -> Self {
        Parser
    }

    /// Classify every line of `input`. Lines never influence each other.
    pub fn parse(&self, input: &str) -> Node {
        let children = split_lines(input)
            .into_iter()
            .enumerate()
            .map(|(i, line)| {
                let node = classify_line(line);
                trace!("line {}: {}", i + 1, node.kind());
                node
            })
            .collect();
        Node::Document(children)
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r'
            | '\x0b'
            | '\x0c'
            | '\x1c'
            | '\x1d'
            | '\x1e'
            | '\u{85}'
            | '\u{2028}'
            | '\u{2029}'
    )
}

/// Split on line breaks, dropping terminators but keeping empty lines.
///
/// `\r\n` counts as a single break. A trailing terminator does not produce an
/// extra empty line, so `""` has no lines and `"\n"` has one.
pub fn split_lines(input: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = input.char_indices().peekable();

    while let Some((idx, c)) = chars.next() {
        if !is_line_break(c) {
            continue;
        }
        lines.push(&input[start..idx]);
        start = idx + c.len_utf8();
        if c == '\r' {
            if let Some(&(_, '\n')) = chars.peek() {
                chars.next();
                start += 1;
            }
        }
    }

    if start < input.len() {
        lines.push(&input[start..]);
    }
    lines
}

/// Trim `raw` and tag it with the first matching rule:
/// heading, bold, italic, link, then plain paragraph.
pub fn classify_line(raw: &str) -> Node {
    let line = raw.trim();

    if line.starts_with('#') {
        let level = line.split(' ').next().map_or(0, |token| token.chars().count());
        let text: String = line.chars().skip(level).collect();
        Node::Heading {
            level,
            text: text.trim().to_string(),
        }
    } else if line.contains("**") || line.contains("__") {
        Node::Bold(line.to_string())
    } else if line.contains('*') || line.contains('_') {
        Node::Italic(line.to_string())
    } else if has_bracket_quartet(line) {
        Node::Link(line.to_string())
    } else {
        Node::Paragraph(line.to_string())
    }
}

/// True when `line` contains each of `[`, `]`, `(` and `)`, in any order.
pub(crate) fn has_bracket_quartet(line: &str) -> bool {
    ['[', ']', '(', ')'].iter().all(|&c| line.contains(c))
}
