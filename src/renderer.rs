/// HTML renderer for classified lines
use crate::ast::Node;
use crate::error::ConvertError;
use crate::options::{LinkPolicy, Options};
use crate::parser::has_bracket_quartet;
use log::debug;

pub struct HtmlRenderer {
    options: Options,
}

impl HtmlRenderer {
    pub fn new(options: Options) -> Self {
        HtmlRenderer { options }
    }

    /// Render a document as `\n`-joined fragments, or a single line node.
    ///
    /// Line numbers in errors are 1-based positions within the document; a
    /// node rendered on its own is reported as line 1.
    pub fn render(&self, node: &Node) -> Result<String, ConvertError> {
        match node {
            Node::Document(children) => {
                let fragments = children
                    .iter()
                    .enumerate()
                    .map(|(i, child)| self.render_line(child, i + 1))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(fragments.join("\n"))
            }
            _ => self.render_line(node, 1),
        }
    }

    fn render_line(&self, node: &Node, number: usize) -> Result<String, ConvertError> {
        let fragment = match node {
            Node::Document(children) => {
                // Nested documents are flattened in place
                return children
                    .iter()
                    .map(|child| self.render_line(child, number))
                    .collect::<Result<Vec<_>, _>>()
                    .map(|fragments| fragments.join("\n"));
            }
            Node::Heading { level, text } => format!("<h{}>{}</h{}>", level, text, level),
            Node::Bold(line) => {
                let line = replace_pair(line, "**", "<b>", "</b>");
                paragraph(&replace_pair(&line, "__", "<b>", "</b>"))
            }
            Node::Italic(line) => {
                let line = replace_pair(line, "*", "<i>", "</i>");
                paragraph(&replace_pair(&line, "_", "<i>", "</i>"))
            }
            Node::Link(line) => paragraph(&self.rewrite_links(line, number)?),
            Node::Paragraph(line) => paragraph(line),
        };
        Ok(fragment)
    }

    /// Replace `[text](url)` spans until no bracket quartet is left.
    ///
    /// Every rewrite drops four bracket characters and adds none, so the loop
    /// is bounded by the bracket count of the line.
    fn rewrite_links(&self, line: &str, number: usize) -> Result<String, ConvertError> {
        let mut line = line.to_string();

        while has_bracket_quartet(&line) {
            let Some(span) = LinkSpan::find(&line) else {
                match self.options.links {
                    LinkPolicy::Strict => {
                        return Err(ConvertError::MalformedLink { line: number, text: line });
                    }
                    LinkPolicy::Lenient => {
                        debug!("line {}: brackets out of order, leaving as text", number);
                        break;
                    }
                }
            };
            line = span.replace(&line);
        }

        Ok(line)
    }
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self::new(Options::default())
    }
}

/// Byte offsets of `[`, `]`, `(` and `)` for the first well-ordered link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct LinkSpan {
    open_text: usize,
    close_text: usize,
    open_url: usize,
    close_url: usize,
}

impl LinkSpan {
    fn find(line: &str) -> Option<Self> {
        let open_text = line.find('[')?;
        let close_text = open_text + line[open_text..].find(']')?;
        let open_url = close_text + line[close_text..].find('(')?;
        let close_url = open_url + line[open_url..].find(')')?;
        Some(LinkSpan {
            open_text,
            close_text,
            open_url,
            close_url,
        })
    }

    fn replace(&self, line: &str) -> String {
        let text = &line[self.open_text + 1..self.close_text];
        let url = &line[self.open_url + 1..self.close_url];
        format!(
            "{}<a href=\"{}\">{}</a>{}",
            &line[..self.open_text],
            url,
            text,
            &line[self.close_url + 1..]
        )
    }
}

fn paragraph(content: &str) -> String {
    format!("<p>{}</p>", content)
}

/// Turn the first `marker` into `open` and the next one after it into `close`.
/// Any later markers are left alone.
fn replace_pair(line: &str, marker: &str, open: &str, close: &str) -> String {
    let Some(first) = line.find(marker) else {
        return line.to_string();
    };

    let mut out = String::with_capacity(line.len() + open.len() + close.len());
    out.push_str(&line[..first]);
    out.push_str(open);

    let rest = &line[first + marker.len()..];
    match rest.find(marker) {
        Some(second) => {
            out.push_str(&rest[..second]);
            out.push_str(close);
            out.push_str(&rest[second + marker.len()..]);
        }
        None => out.push_str(rest),
    }
    out
}
