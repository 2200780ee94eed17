use regex::Regex;

use lazy_static::lazy_static;

lazy_static! {

    static ref RE_WHITESPACE: Regex = Regex::new(r"\s+").unwrap();

    static ref RE_SPACES: Regex = Regex::new(r" {2,}").unwrap();

    static ref RE_NEWLINES: Regex = Regex::new(r"\n{3,}").unwrap();

}

/// Paragraph break in the normalized body.
pub const DIVIDER: &str = "\n\n";

/// Trims the text and collapses every whitespace run into a single space.
pub fn collapse_whitespace(txt: &str) -> String {
    RE_WHITESPACE.replace_all(txt.trim(), " ").into_owned()
}

/// Removes the spaces and dividers left over from joining the body
/// fragments with `' '`.
///
/// The result has no runs of spaces, no space next to a divider and no more
/// than two consecutive newlines. Cleaning a cleaned body is a no-op.
pub fn clean_body(body: &str) -> String {
    let mut body = clean_once(body);
    loop {
        let next = clean_once(&body);
        if next == body {
            return body;
        }
        body = next;
    }
}

fn clean_once(body: &str) -> String {
    let body = RE_SPACES.replace_all(body, " ");
    let body = body.replace("\n\n ", DIVIDER).replace(" \n\n", DIVIDER);
    // only after the spaces around dividers are gone
    RE_NEWLINES.replace_all(&body, DIVIDER).into_owned()
}
