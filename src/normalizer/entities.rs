/// Character references decoded in titles. Anything else is left untouched.
const ENTITIES: &[(&str, char)] = &[
    ("&#8216;", '\u{2018}'),
    ("&#8217;", '\u{2019}'),
    ("&#8220;", '\u{201C}'),
    ("&#8221;", '\u{201D}'),
    ("&#8211;", '\u{2013}'),
    ("&#8212;", '\u{2014}'),
    ("&#8230;", '\u{2026}'),
    ("&#38;", '&'),
    ("&#60;", '<'),
    ("&#62;", '>'),
    ("&#34;", '"'),
    ("&#39;", '\''),
    ("&amp;", '&'),
    ("&lt;", '<'),
    ("&gt;", '>'),
    ("&quot;", '"'),
    ("&apos;", '\''),
];

/// Decode the fixed entity table in a single left-to-right pass.
///
/// Decoded characters are never re-scanned, so `&amp;#8220;` becomes
/// `&#8220;` rather than a curly quote.
pub fn decode_entities(input: &str) -> String {
    if !input.contains('&') {
        return input.to_string();
    }

    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(pos) = rest.find('&') {
        out.push_str(&rest[..pos]);
        rest = &rest[pos..];

        match ENTITIES.iter().find(|(entity, _)| rest.starts_with(entity)) {
            Some((entity, ch)) => {
                out.push(*ch);
                rest = &rest[entity.len()..];
            }
            None => {
                out.push('&');
                rest = &rest[1..];
            }
        }
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_curly_quotes() {
        assert_eq!(decode_entities("&#8220;Hello&#8221;"), "\u{201C}Hello\u{201D}");
    }

    #[test]
    fn test_dashes_and_ellipsis() {
        assert_eq!(
            decode_entities("a &#8211; b &#8212; c&#8230;"),
            "a \u{2013} b \u{2014} c\u{2026}"
        );
    }

    #[test]
    fn test_markup_characters() {
        assert_eq!(
            decode_entities("&#60;tag&#62; &#38; &#34;q&#34; &#39;s&#39; &lt;&amp;&gt;"),
            "<tag> & \"q\" 's' <&>"
        );
    }

    #[test]
    fn test_plain_text_unchanged() {
        let plain = "Rust 1.80 released: what\u{2019}s new";
        assert_eq!(decode_entities(plain), plain);
    }

    #[test]
    fn test_decoding_is_idempotent_on_decoded_text() {
        let once = decode_entities("&#8216;quoted&#8217; &#8230;");
        assert_eq!(decode_entities(&once), once);
    }

    #[test]
    fn test_unknown_entities_left_as_is() {
        assert_eq!(decode_entities("&#9731; &nbsp; AT&T &"), "&#9731; &nbsp; AT&T &");
    }

    #[test]
    fn test_single_pass() {
        assert_eq!(decode_entities("&amp;#8220;"), "&#8220;");
    }
}
