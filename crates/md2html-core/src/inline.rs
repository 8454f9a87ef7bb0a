//! Inline substitutions applied to paragraph lines
//!
//! All patterns are non-greedy and match within a single line only.

use regex::{Captures, Regex};
use std::borrow::Cow;
use std::sync::LazyLock;

static DIGEST_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[\[(.+?)\]\]").expect("digest pattern is valid"));

static REDACT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(\((.+?)\)\)").expect("redact pattern is valid"));

static BOLD_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.+?)\*\*").expect("bold pattern is valid"));

static EMPHASIS_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"__(.+?)__").expect("emphasis pattern is valid"));

/// Replace every `[[text]]` with the lowercase hex MD5 digest of `text`
pub fn expand_digests(line: &str) -> Cow<'_, str> {
    DIGEST_PATTERN.replace_all(line, |caps: &Captures| {
        format!("{:x}", md5::compute(caps[1].as_bytes()))
    })
}

/// Replace every `((text))` with `text` minus all `c` and `C` characters
pub fn redact(line: &str) -> Cow<'_, str> {
    REDACT_PATTERN.replace_all(line, |caps: &Captures| caps[1].replace(['c', 'C'], ""))
}

/// Render `**text**` as `<b>text</b>` and `__text__` as `<em>text</em>`
pub fn format_emphasis(line: &str) -> Cow<'_, str> {
    let bold = BOLD_PATTERN.replace_all(line, "<b>${1}</b>");
    match bold {
        Cow::Borrowed(s) => EMPHASIS_PATTERN.replace_all(s, "<em>${1}</em>"),
        Cow::Owned(s) => Cow::Owned(
            EMPHASIS_PATTERN
                .replace_all(&s, "<em>${1}</em>")
                .into_owned(),
        ),
    }
}

/// Digest then redact; runs on every non-heading, non-list line before the
/// paragraph decision is made
pub fn substitute(line: &str) -> Cow<'_, str> {
    match expand_digests(line) {
        Cow::Borrowed(s) => redact(s),
        Cow::Owned(s) => Cow::Owned(redact(&s).into_owned()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digest() {
        assert_eq!(expand_digests("[[Hello]]"), "8b1a9953c4611296a827abf8c47804d7");
        assert_eq!(
            expand_digests("x [[abc]] y"),
            "x 900150983cd24fb0d6963f7d28e17f72 y"
        );
    }

    #[test]
    fn test_digest_is_non_greedy() {
        assert_eq!(
            expand_digests("[[abc]] and [[Hello]]"),
            "900150983cd24fb0d6963f7d28e17f72 and 8b1a9953c4611296a827abf8c47804d7"
        );
    }

    #[test]
    fn test_digest_multibyte() {
        let out = expand_digests("[[héllo]]");
        assert_eq!(out.len(), 32);
        assert!(out.chars().all(|c| c.is_ascii_hexdigit() && !c.is_uppercase()));
        assert_ne!(out, expand_digests("[[hello]]"));
    }

    #[test]
    fn test_digest_requires_content() {
        assert_eq!(expand_digests("[[]]"), "[[]]");
        assert_eq!(expand_digests("[abc]"), "[abc]");
        assert!(matches!(expand_digests("plain"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_redact() {
        assert_eq!(redact("((Crocodile))"), "rodile");
        assert_eq!(redact("((abc))"), "ab");
        assert_eq!(redact("keep c ((cCc)) here"), "keep c  here");
    }

    #[test]
    fn test_redact_leaves_unmatched() {
        assert_eq!(redact("(abc)"), "(abc)");
        assert_eq!(redact("(())"), "(())");
    }

    #[test]
    fn test_substitute_digest_before_redact() {
        // digest output is hex and may itself contain 'c'
        assert_eq!(
            substitute("(([[abc]]))"),
            "900150983d24fb0d6963f7d28e17f72"
        );
    }

    #[test]
    fn test_bold_and_emphasis() {
        assert_eq!(format_emphasis("**bold**"), "<b>bold</b>");
        assert_eq!(format_emphasis("__em__"), "<em>em</em>");
        assert_eq!(
            format_emphasis("a **b** c __d__ e **f**"),
            "a <b>b</b> c <em>d</em> e <b>f</b>"
        );
    }

    #[test]
    fn test_emphasis_unbalanced() {
        assert_eq!(format_emphasis("**open only"), "**open only");
        assert_eq!(format_emphasis("****"), "****");
        assert_eq!(format_emphasis("__x__ __y"), "<em>x</em> __y");
    }
}
