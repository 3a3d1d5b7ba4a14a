//! Reply formatting utilities
//!
//! Pure functions that adapt generated text to WhatsApp's markup before it
//! is sent.

use std::sync::LazyLock;

use regex::Regex;

/// `【...】` citation markers, shortest match
#[allow(clippy::expect_used)]
static BRACKETED_SEGMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"【.*?】").expect("valid regex"));

/// `**text**` emphasis, shortest match
#[allow(clippy::expect_used)]
static DOUBLE_ASTERISK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.*?)\*\*").expect("valid regex"));

/// Convert generated text to WhatsApp style
///
/// Removes every `【...】` segment, trims the result, then rewrites
/// `**bold**` as WhatsApp's `*bold*`. Both passes run once, left to right,
/// without overlap.
///
/// The trim applies to every input, so leading and trailing whitespace is
/// dropped even when no marker was present (`"  HELLO  "` becomes `"HELLO"`).
/// Text between the ends is left unchanged.
#[must_use]
pub fn to_provider_style(text: &str) -> String {
    let without_brackets = BRACKETED_SEGMENT.replace_all(text, "");
    DOUBLE_ASTERISK
        .replace_all(without_brackets.trim(), "*${1}*")
        .into_owned()
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn removes_bracketed_segments() {
        assert_eq!(
            to_provider_style("The class starts at 10【4:0†schedule.csv】."),
            "The class starts at 10."
        );
    }

    #[test]
    fn removes_every_bracketed_segment() {
        assert_eq!(to_provider_style("a【1】b【2】c"), "abc");
    }

    #[test]
    fn trims_after_removal() {
        assert_eq!(to_provider_style("  hello 【source】"), "hello");
    }

    #[test]
    fn converts_double_asterisks() {
        assert_eq!(to_provider_style("**Yoga** is open"), "*Yoga* is open");
    }

    #[test]
    fn converts_every_emphasis_pair() {
        assert_eq!(
            to_provider_style("**Yoga** and **Pilates** today"),
            "*Yoga* and *Pilates* today"
        );
    }

    #[test]
    fn single_asterisks_untouched() {
        assert_eq!(to_provider_style("*already* fine"), "*already* fine");
    }

    #[test]
    fn unmatched_markers_untouched() {
        assert_eq!(to_provider_style("**open only"), "**open only");
        assert_eq!(to_provider_style("【open only"), "【open only");
    }

    #[test]
    fn surrounding_whitespace_is_trimmed_without_markers() {
        assert_eq!(to_provider_style("  HELLO  "), "HELLO");
        assert_eq!(to_provider_style("\tHELLO  THERE\n"), "HELLO  THERE");
    }

    #[test]
    fn plain_text_unchanged() {
        assert_eq!(to_provider_style("HELLO THERE"), "HELLO THERE");
    }

    #[test]
    fn both_rules_apply_together() {
        assert_eq!(
            to_provider_style("**Note**【3:1†source】: bring a mat"),
            "*Note*: bring a mat"
        );
    }

    proptest! {
        #[test]
        fn text_without_markers_is_only_trimmed(text in "[a-zA-Z0-9 .,!?]{0,64}") {
            prop_assert_eq!(to_provider_style(&text), text.trim());
        }

        #[test]
        fn output_never_contains_brackets(
            prefix in "[a-z ]{0,10}",
            inner in "[a-z0-9:†.]{0,10}",
            suffix in "[a-z ]{0,10}",
        ) {
            let text = format!("{prefix}【{inner}】{suffix}");
            let styled = to_provider_style(&text);
            prop_assert!(!styled.contains('【'));
            prop_assert!(!styled.contains('】'));
        }

        #[test]
        fn emphasis_becomes_single_asterisk(word in "[a-zA-Z]{1,12}") {
            let styled = to_provider_style(&format!("**{word}**"));
            prop_assert_eq!(styled, format!("*{word}*"));
        }
    }
}
