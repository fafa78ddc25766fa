// src/core/html.rs
//
// Just enough HTML slicing to lift an embedded <script> payload out of a
// rendered page. No DOM parser; the page structure we rely on is a single
// well-known tag.

/// Return the text between the `>` that closes the tag matched by `open_pat`
/// and the next occurrence of `close_pat`.
pub fn slice_between<'a>(s: &'a str, open_pat: &str, close_pat: &str) -> Option<&'a str> {
    let o = s.find(open_pat)?;
    let after = s[o..].find('>')? + o + 1;
    let end = s[after..].find(close_pat)?;
    Some(&s[after..after + end])
}
