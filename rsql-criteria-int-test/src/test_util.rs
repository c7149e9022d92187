use percent_encoding::percent_decode_str;
use rsql_criteria::errors::RsqlResult;

/// Runs a fallible test body, failing the test with the full error chain.
pub fn run_test<T>(test: T)
where
    T: FnOnce() -> RsqlResult<()>,
{
    if let Err(e) = test() {
        panic!("Test failed: {:?}", e);
    }
}

/// Splits a rendered query into its `label=value` sections.
///
/// Only the first `=` separates label from value, since RSQL values carry
/// their own `=` signs.
pub fn sections(query: &str) -> Vec<(String, String)> {
    if query.is_empty() {
        return Vec::new();
    }
    query
        .split('&')
        .map(|section| match section.split_once('=') {
            Some((label, value)) => (label.to_string(), value.to_string()),
            None => (section.to_string(), String::new()),
        })
        .collect()
}

/// Percent-decodes a query component.
pub fn percent_decode(input: &str) -> String {
    percent_decode_str(input).decode_utf8_lossy().into_owned()
}

/// Reverses the string escaping of the value encoder.
pub fn unescape(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    let mut chars = input.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(next) = chars.next() {
                output.push(next);
            }
        } else {
            output.push(c);
        }
    }
    output
}

/// Asserts that a rendered query only holds unreserved or percent-encoded
/// ASCII, plus the RSQL punctuation written literally.
pub fn assert_url_safe(query: &str) {
    for c in query.chars() {
        assert!(c.is_ascii(), "non-ascii character {:?} in {}", c, query);
        assert!(c != ' ', "literal space in {}", query);
        assert!(c != '"', "literal quote in {}", query);
    }
}
