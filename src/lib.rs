/// A line-oriented Markdown to HTML converter
pub mod ast;
pub mod cli;
pub mod error;
pub mod options;
pub mod parser;
pub mod renderer;

pub use error::ConvertError;
pub use options::{LinkPolicy, Options};

use parser::Parser;
use renderer::HtmlRenderer;

/// Convert markdown text to HTML with default options.
///
/// Malformed links are left as text, so this never fails.
pub fn markdown_to_html(markdown: &str) -> String {
    let ast = Parser::new().parse(markdown);
    let renderer = HtmlRenderer::default();
    // Only strict link handling can fail
    renderer.render(&ast).unwrap_or_default()
}

/// Convert markdown text to HTML, one fragment per input line.
pub fn markdown_to_html_with(markdown: &str, options: &Options) -> Result<String, ConvertError> {
    let ast = Parser::new().parse(markdown);
    let renderer = HtmlRenderer::new(*options);
    renderer.render(&ast)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert_eq!(markdown_to_html(""), "");
    }

    #[test]
    fn test_blank_line() {
        assert_eq!(markdown_to_html("\n"), "<p></p>");
    }

    #[test]
    fn test_basic_rules() {
        assert_eq!(markdown_to_html("# Title"), "<h1>Title</h1>");
        assert_eq!(markdown_to_html("**bold**"), "<p><b>bold</b></p>");
        assert_eq!(markdown_to_html("*italic*"), "<p><i>italic</i></p>");
        assert_eq!(
            markdown_to_html("[text](http://example.com)"),
            "<p><a href=\"http://example.com\">text</a></p>"
        );
    }

    #[test]
    fn test_strict_link_error() {
        let result = markdown_to_html_with("ok\n](x)[", &Options::strict());
        assert!(matches!(result, Err(ConvertError::MalformedLink { line: 2, .. })));
        assert_eq!(markdown_to_html("ok\n](x)["), "<p>ok</p>\n<p>](x)[</p>");
    }
}
