//! Match highlighting
//!
//! Produces a markup-safe annotated copy of a field's text with matched
//! spans wrapped in `<mark>` markers. The source text is HTML-escaped
//! before any marker is inserted, so user-supplied text can never break
//! out of the marker tag and only the engine's own markers remain literal.

use regex::RegexBuilder;

use crate::distance::similarity_ratio;
use crate::normalize::normalize;

/// Fuzzy word highlighting uses the same similarity floor as the scorer.
const WORD_MATCH_FLOOR: f64 = 0.7;

/// Escape the HTML-significant characters `& < > " '`.
///
/// Exposed because presentation callers need the same escaping for
/// non-highlighted fields rendered next to highlighted ones.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Annotate `text` with `<mark>` markers around the parts matching `query`.
///
/// When the normalized text contains the normalized query verbatim, the
/// case-insensitive occurrence is wrapped with a single replacement in the
/// escaped text. Otherwise each whole whitespace-delimited word within
/// similarity [`WORD_MATCH_FLOOR`] of some query word is wrapped. A query
/// with no counterpart in the text yields the escaped text unchanged.
pub fn highlight(text: &str, query: &str) -> String {
    let escaped = escape_html(text);
    let query_n = normalize(query);
    if query_n.is_empty() {
        return escaped;
    }

    if normalize(text).contains(&query_n) {
        // The query is escaped the same way as the text so that matches
        // spanning escaped characters ("a&b" vs "a&amp;b") still line up.
        let pattern = regex::escape(&escape_html(query));
        if let Ok(re) = RegexBuilder::new(&pattern).case_insensitive(true).build() {
            if let std::borrow::Cow::Owned(replaced) = re.replace(&escaped, "<mark>$0</mark>") {
                return replaced;
            }
        }
        // Containment held only under accent folding; no byte-level
        // occurrence to wrap. Fall through to word-level highlighting.
    }

    highlight_words(text, &query_n)
}

/// Wrap each whole word of `text` that fuzzily matches some query word.
fn highlight_words(text: &str, query_n: &str) -> String {
    let query_words: Vec<&str> = query_n.split_whitespace().collect();

    let mut out = String::with_capacity(text.len());
    let mut cursor = 0;
    for (start, end) in word_spans(text) {
        out.push_str(&escape_html(&text[cursor..start]));
        let word = &text[start..end];
        if word_matched(word, &query_words) {
            out.push_str("<mark>");
            out.push_str(&escape_html(word));
            out.push_str("</mark>");
        } else {
            out.push_str(&escape_html(word));
        }
        cursor = end;
    }
    out.push_str(&escape_html(&text[cursor..]));
    out
}

fn word_matched(word: &str, query_words: &[&str]) -> bool {
    let word_n = normalize(word);
    query_words
        .iter()
        .any(|qw| similarity_ratio(qw, &word_n) >= WORD_MATCH_FLOOR)
}

/// Byte spans of the whitespace-delimited words of `text`.
fn word_spans(text: &str) -> Vec<(usize, usize)> {
    let mut spans = Vec::new();
    let mut start: Option<usize> = None;
    for (i, c) in text.char_indices() {
        if c.is_whitespace() {
            if let Some(s) = start.take() {
                spans.push((s, i));
            }
        } else if start.is_none() {
            start = Some(i);
        }
    }
    if let Some(s) = start {
        spans.push((s, text.len()));
    }
    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("<b>hi</b>"), "&lt;b&gt;hi&lt;/b&gt;");
        assert_eq!(escape_html("a & b"), "a &amp; b");
        assert_eq!(escape_html(r#"say "hi" 'now'"#), "say &quot;hi&quot; &#39;now&#39;");
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn test_exact_highlight() {
        assert_eq!(
            highlight("React Guide", "react"),
            "<mark>React</mark> Guide"
        );
    }

    #[test]
    fn test_exact_highlight_mid_string() {
        assert_eq!(
            highlight("Advanced React Patterns", "react"),
            "Advanced <mark>React</mark> Patterns"
        );
    }

    #[test]
    fn test_single_replace_only_first_occurrence() {
        assert_eq!(
            highlight("react and react again", "react"),
            "<mark>react</mark> and react again"
        );
    }

    #[test]
    fn test_escaping_happens_before_markers() {
        let out = highlight("<b>hi</b>", "hi");
        assert!(
            !out.contains("<b>"),
            "source markup must be escaped, got {:?}",
            out
        );
        assert!(out.contains("<mark>hi</mark>"), "got {:?}", out);
        assert_eq!(out, "&lt;b&gt;<mark>hi</mark>&lt;/b&gt;");
    }

    #[test]
    fn test_query_matching_escaped_characters() {
        // The match spans an escaped ampersand; both sides are escaped
        // before the replace so the spans line up.
        assert_eq!(
            highlight("Tom & Jerry", "tom & jerry"),
            "<mark>Tom &amp; Jerry</mark>"
        );
    }

    #[test]
    fn test_fuzzy_word_highlight() {
        // No verbatim containment; "guide" vs "guides" clears the floor
        let out = highlight("Many guides here", "guide xyzzy");
        assert_eq!(out, "Many <mark>guides</mark> here");
    }

    #[test]
    fn test_whole_word_wrapped() {
        // Word-level wrapping covers the entire word, boundary to boundary
        let out = highlight("chats noirs", "chatz");
        assert_eq!(out, "<mark>chats</mark> noirs");
    }

    #[test]
    fn test_no_match_returns_escaped_text() {
        assert_eq!(highlight("hello <world>", "zzz"), "hello &lt;world&gt;");
    }

    #[test]
    fn test_empty_query_returns_escaped_text() {
        assert_eq!(highlight("a < b", ""), "a &lt; b");
        assert_eq!(highlight("a < b", "   "), "a &lt; b");
    }

    #[test]
    fn test_accent_folded_containment_falls_back_to_words() {
        // Normalized containment holds ("cafe" in "café...") but there is
        // no byte-level occurrence; the word path still annotates.
        let out = highlight("Café du Matin", "cafe");
        assert_eq!(out, "<mark>Café</mark> du Matin");
    }

    #[test]
    fn test_preserves_surrounding_whitespace() {
        let out = highlight("  spaced   out  ", "spaced");
        assert_eq!(out, "  <mark>spaced</mark>   out  ");
    }
}
