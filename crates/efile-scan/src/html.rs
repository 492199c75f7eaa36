//! Naive HTML text helpers. Good enough for the search result markup, which
//! never nests cells or puts `<`/`>` inside attribute values.

/// Visible text of an HTML fragment: tags removed, common entities decoded,
/// whitespace collapsed and trimmed.
pub fn text_content(fragment: &str) -> String {
    normalize_ws(&decode_entities(&strip_tags(fragment)))
}

fn strip_tags(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;
    for ch in s.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    out
}

fn decode_entities(s: &str) -> String {
    s.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

fn normalize_ws(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
