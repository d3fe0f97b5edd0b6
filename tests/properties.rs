use markdown2html::markdown_to_html;
use proptest::prelude::*;

/// Terminate every line so trailing blank lines are not swallowed.
fn document(lines: &[String]) -> String {
    lines.iter().map(|line| format!("{}\n", line)).collect()
}

fn convert_line(line: &str) -> String {
    markdown_to_html(&format!("{}\n", line))
}

proptest! {
    #[test]
    fn plain_lines_are_wrapped(line in "[a-zA-Z0-9 .,!?]{0,40}") {
        prop_assert_eq!(convert_line(&line), format!("<p>{}</p>", line.trim()));
    }

    #[test]
    fn one_fragment_per_line(lines in prop::collection::vec("[a-z #*_\\[\\]()]{0,20}", 1..20)) {
        let html = markdown_to_html(&document(&lines));
        prop_assert_eq!(html.split('\n').count(), lines.len());
    }

    #[test]
    fn lines_convert_independently(lines in prop::collection::vec("[a-z #*_\\[\\]()]{0,20}", 1..20)) {
        let expected: Vec<String> = lines.iter().map(|line| convert_line(line)).collect();
        let html = markdown_to_html(&document(&lines));
        prop_assert_eq!(html.split('\n').collect::<Vec<_>>(), expected.iter().map(String::as_str).collect::<Vec<_>>());

        let mut reversed = lines.clone();
        reversed.reverse();
        let mut expected_reversed = expected.clone();
        expected_reversed.reverse();
        prop_assert_eq!(markdown_to_html(&document(&reversed)), expected_reversed.join("\n"));
    }
}
