use std::sync::LazyLock;

use regex::Regex;
use scraper::Html;

// Tag-like spans for the fallback strip when the HTML parse recovers no text.
static TAG_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").unwrap());

// Runs of whitespace, including newlines inside registry payloads.
static WHITESPACE_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Reduce a possibly markup-bearing ingredient statement to plain text.
///
/// Character references are decoded and all tag markup discarded via an
/// HTML fragment parse; the result is whitespace-collapsed and trimmed.
/// Never fails: when the parse yields no text for a non-empty input
/// (badly broken markup), a regex strip of tag-like spans is used instead.
pub fn normalize(markup: &str) -> String {
    if markup.trim().is_empty() {
        return String::new();
    }

    let fragment = Html::parse_fragment(markup);
    let text: String = fragment.root_element().text().collect();

    let text = if text.trim().is_empty() {
        TAG_PATTERN.replace_all(markup, " ").into_owned()
    } else {
        text
    };

    WHITESPACE_PATTERN.replace_all(&text, " ").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_yields_empty_string() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   \n\t "), "");
    }

    #[test]
    fn plain_text_passes_through() {
        assert_eq!(normalize("우유, 밀가루, 설탕"), "우유, 밀가루, 설탕");
    }

    #[test]
    fn strips_nested_tags() {
        assert_eq!(
            normalize("<div><p>원재료: <b>우유</b>, <i>밀가루</i></p></div>"),
            "원재료: 우유, 밀가루"
        );
    }

    #[test]
    fn decodes_character_references() {
        assert_eq!(normalize("설탕 &amp; 소금"), "설탕 & 소금");
        // Non-breaking spaces count as whitespace and collapse too.
        assert_eq!(normalize("a&nbsp;&nbsp;b"), "a b");
    }

    #[test]
    fn collapses_newlines_and_repeated_spaces() {
        assert_eq!(
            normalize("<p>우유\n\n밀가루</p>   <p>설탕    소금</p>"),
            "우유 밀가루 설탕 소금"
        );
    }

    #[test]
    fn tolerates_malformed_markup() {
        assert_eq!(normalize("<broken><foo bar>우유</foo"), "우유");
        assert_eq!(normalize("<only><tags></only>"), "");
    }

    #[test]
    fn is_idempotent_on_normalized_output() {
        let inputs = [
            "<p>원재료: <b>우유</b>,\n밀가루</p>",
            "설탕 &amp; 소금",
            "우유,  밀가루",
            "",
        ];
        for input in inputs {
            let once = normalize(input);
            assert_eq!(normalize(&once), once, "not idempotent for {input:?}");
        }
    }
}
