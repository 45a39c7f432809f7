//! Entity escaping for markup text.
//!
//! Text is escaped in a single left-to-right pass. Bare `&`, `<` and `>`
//! become entity references, but an `&` that already starts one of the
//! recognized entity references is left alone, so escaping text that was
//! escaped upstream does not produce `&amp;amp;`.

use std::borrow::Cow;

use memchr::memchr3;

/// Entity bodies (the part after `&`) that are passed through untouched.
const NAMED_ENTITIES: &[&str] = &["amp;", "lt;", "gt;", "quot;", "apos;"];

/// Escape `&`, `<` and `>` in text content.
///
/// An `&` that begins `&amp;`, `&lt;`, `&gt;`, `&quot;`, `&apos;` or a
/// decimal reference such as `&#160;` is kept as is; any other `&` becomes
/// `&amp;`. Returns the input unchanged (borrowed) when there is nothing to
/// escape.
///
/// # Examples
///
/// ```
/// use plot::escape;
///
/// assert_eq!(escape("Fish & <Chips>"), "Fish &amp; &lt;Chips&gt;");
/// assert_eq!(escape("Fish &amp; Chips"), "Fish &amp; Chips");
/// assert_eq!(escape("&&"), "&amp;&amp;");
/// ```
pub fn escape(text: &str) -> Cow<'_, str> {
    let bytes = text.as_bytes();
    let Some(first) = memchr3(b'&', b'<', b'>', bytes) else {
        return Cow::Borrowed(text);
    };

    let mut result = String::with_capacity(text.len() + text.len() / 8 + 4);
    let mut pos = first;
    result.push_str(&text[..pos]);

    // Every special byte is ASCII, so each `pos` lands on a char boundary.
    while pos < bytes.len() {
        match bytes[pos] {
            b'&' => {
                let entity_len = entity_body_len(&text[pos + 1..]);
                if entity_len > 0 {
                    result.push_str(&text[pos..pos + 1 + entity_len]);
                    pos += 1 + entity_len;
                } else {
                    result.push_str("&amp;");
                    pos += 1;
                }
            }
            b'<' => {
                result.push_str("&lt;");
                pos += 1;
            }
            b'>' => {
                result.push_str("&gt;");
                pos += 1;
            }
            _ => {
                let next = memchr3(b'&', b'<', b'>', &bytes[pos..])
                    .map_or(bytes.len(), |offset| pos + offset);
                result.push_str(&text[pos..next]);
                pos = next;
            }
        }
    }

    Cow::Owned(result)
}

/// Escape an attribute value for use inside double quotes.
///
/// Applies [`escape`] and additionally turns every literal `"` into `&quot;`,
/// since the renderer always quotes values with `"`.
///
/// # Examples
///
/// ```
/// use plot::escape_attribute_value;
///
/// assert_eq!(escape_attribute_value(r#"say "hi""#), "say &quot;hi&quot;");
/// assert_eq!(escape_attribute_value("a&b"), "a&amp;b");
/// ```
pub fn escape_attribute_value(value: &str) -> Cow<'_, str> {
    let escaped = escape(value);
    if !escaped.contains('"') {
        return escaped;
    }
    Cow::Owned(escaped.replace('"', "&quot;"))
}

/// Length of the recognized entity body at the start of `rest`, or 0.
fn entity_body_len(rest: &str) -> usize {
    if let Some(entity) = NAMED_ENTITIES.iter().find(|e| rest.starts_with(**e)) {
        return entity.len();
    }

    let Some(digits) = rest.strip_prefix('#') else {
        return 0;
    };
    let digit_count = digits.bytes().take_while(u8::is_ascii_digit).count();
    if digit_count > 0 && digits.as_bytes().get(digit_count) == Some(&b';') {
        // '#' + digits + ';'
        digit_count + 2
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_escape_text() {
        assert_eq!(
            escape("Hello & welcome to <Plot>!;"),
            "Hello &amp; welcome to &lt;Plot&gt;!;"
        );
    }

    #[test]
    fn test_escape_double_ampersands() {
        assert_eq!(escape("&&"), "&amp;&amp;");
    }

    #[test]
    fn test_escape_ampersand_followed_by_comparison_symbols() {
        assert_eq!(escape("&< &>"), "&amp;&lt; &amp;&gt;");
    }

    #[test]
    fn test_no_double_escaping() {
        assert_eq!(
            escape("Hello &amp; welcome&#160;to &lt;Plot&gt;!&text"),
            "Hello &amp; welcome&#160;to &lt;Plot&gt;!&amp;text"
        );
    }

    #[test]
    fn test_named_entities_pass_through() {
        assert_eq!(escape("&quot;&apos;"), "&quot;&apos;");
    }

    #[test]
    fn test_incomplete_entities_are_escaped() {
        assert_eq!(escape("&amp"), "&amp;amp");
        assert_eq!(escape("&#;"), "&amp;#;");
        assert_eq!(escape("&#12"), "&amp;#12");
        assert_eq!(escape("&#x41;"), "&amp;#x41;");
        assert_eq!(escape("&nbsp;"), "&amp;nbsp;");
    }

    #[test]
    fn test_trailing_ampersand() {
        assert_eq!(escape("a &"), "a &amp;");
    }

    #[test]
    fn test_unicode_around_specials() {
        assert_eq!(escape("ÅØ<é>&ü"), "ÅØ&lt;é&gt;&amp;ü");
    }

    #[test]
    fn test_plain_text_is_borrowed() {
        assert!(matches!(escape("nothing here"), Cow::Borrowed(_)));
        assert!(matches!(escape(""), Cow::Borrowed("")));
    }

    #[test]
    fn test_escape_attribute_value_quotes() {
        assert_eq!(
            escape_attribute_value(r#"a "quoted" <b> & c"#),
            "a &quot;quoted&quot; &lt;b&gt; &amp; c"
        );
    }

    #[test]
    fn test_escape_attribute_value_keeps_existing_quot() {
        assert_eq!(escape_attribute_value("&quot;x&quot;"), "&quot;x&quot;");
    }

    #[test]
    fn test_escape_attribute_value_plain_is_borrowed() {
        assert!(matches!(escape_attribute_value("value"), Cow::Borrowed(_)));
    }

    proptest! {
        #[test]
        fn prop_text_without_specials_is_unchanged(s in "[^&<>]*") {
            prop_assert_eq!(escape(&s), s.as_str());
        }

        #[test]
        fn prop_escaped_output_is_stable(s in "\\PC*") {
            let once = escape(&s).into_owned();
            let twice = escape(&once).into_owned();
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn prop_output_has_no_bare_angle_brackets(s in "\\PC*") {
            let escaped = escape(&s);
            prop_assert!(!escaped.contains('<'));
            prop_assert!(!escaped.contains('>'));
        }
    }
}
