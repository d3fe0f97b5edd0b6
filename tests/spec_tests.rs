use markdown2html::{ConvertError, Options, markdown_to_html_with};
use serde::Deserialize;
use std::fs;

#[derive(Debug, Deserialize)]
struct Case {
    name: String,
    markdown: String,
    /// `None` when conversion is expected to fail
    html: Option<String>,
    #[serde(default)]
    options: Options,
}

#[test]
fn fixture_cases() {
    let data = fs::read_to_string("tests/data/cases.json").expect("Failed to read cases.json");
    let cases: Vec<Case> = serde_json::from_str(&data).expect("Failed to parse cases.json");
    assert!(!cases.is_empty());

    let mut failures = Vec::new();

    for case in &cases {
        let result = markdown_to_html_with(&case.markdown, &case.options);
        let ok = match (&case.html, &result) {
            (Some(expected), Ok(actual)) => expected == actual,
            (None, Err(ConvertError::MalformedLink { .. })) => true,
            _ => false,
        };

        if !ok {
            eprintln!("\n❌ {}", case.name);
            eprintln!("  Input: {:?}", case.markdown);
            eprintln!("  Expected: {:?}", case.html);
            eprintln!("  Got: {:?}", result);
            failures.push(case.name.as_str());
        }
    }

    assert!(failures.is_empty(), "failed cases: {:?}", failures);
}
