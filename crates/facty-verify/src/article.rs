//! Article text preparation.

use std::sync::LazyLock;

use regex::Regex;

static TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<!--.*?-->|<[^>]*>").unwrap_or_else(|_| unreachable!("static pattern"))
});

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").unwrap_or_else(|_| unreachable!("static pattern")));

/// Entities decoded after tag stripping. `&amp;` goes last so `&amp;lt;`
/// stays a literal `&lt;`.
const ENTITIES: [(&str, &str); 7] = [
    ("&nbsp;", " "),
    ("&lt;", "<"),
    ("&gt;", ">"),
    ("&quot;", "\""),
    ("&#39;", "'"),
    ("&#039;", "'"),
    ("&amp;", "&"),
];

/// Build the plain-text input for a fact-check run from a title and an HTML
/// or plain-text body.
///
/// Tags and comments are stripped, common entities decoded and all runs of
/// whitespace collapsed to single spaces. Title and body are separated by a
/// blank line; an empty title is omitted.
#[must_use]
pub fn prepare_article(title: &str, body: &str) -> String {
    let title = plain_text(title);
    let body = plain_text(body);
    match (title.is_empty(), body.is_empty()) {
        (true, _) => body,
        (false, true) => title,
        (false, false) => format!("{title}\n\n{body}"),
    }
}

fn plain_text(html: &str) -> String {
    // Tags become spaces so adjacent block elements don't fuse words.
    let stripped = TAG.replace_all(html, " ");
    let mut text = stripped.into_owned();
    for (entity, replacement) in ENTITIES {
        text = text.replace(entity, replacement);
    }
    WHITESPACE.replace_all(text.trim(), " ").into_owned()
}
