// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Raw-markup text utilities
//!
//! Entity decoding, tag stripping, percent decoding, and redirect-wrapper
//! unwrapping shared by both parsing strategies.

use url::Url;

/// Named and numeric entities the upstream markup is known to emit.
/// Anything not in this table is left untouched.
const ENTITY_TABLE: &[(&str, &str)] = &[
    ("&amp;", "&"),
    ("&lt;", "<"),
    ("&gt;", ">"),
    ("&quot;", "\""),
    ("&#39;", "'"),
    ("&apos;", "'"),
    ("&nbsp;", " "),
    ("&#x27;", "'"),
    ("&#x2F;", "/"),
    ("&#x60;", "`"),
    ("&#x3D;", "="),
];

/// Decode known HTML entities in a single left-to-right pass
///
/// Substituted text is never re-scanned, so `&amp;lt;` decodes to `&lt;`
/// and no further.
pub fn decode_entities(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut rest = s;

    while let Some(pos) = rest.find('&') {
        out.push_str(&rest[..pos]);
        rest = &rest[pos..];

        match ENTITY_TABLE
            .iter()
            .find(|(entity, _)| rest.starts_with(entity))
        {
            Some((entity, replacement)) => {
                out.push_str(replacement);
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

/// Strip embedded tags and collapse internal whitespace
pub fn strip_tags(s: &str) -> String {
    let mut text = String::with_capacity(s.len());
    let mut in_tag = false;

    for c in s.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => {
                in_tag = false;
                // Tag boundaries separate words in the rendered text
                text.push(' ');
            }
            c if !in_tag => text.push(c),
            _ => {}
        }
    }

    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Tag-strip, whitespace-collapse, and entity-decode a markup fragment
///
/// Entities are decoded after tags are removed, so text that decodes to
/// angle brackets survives as plain text.
pub fn clean_text(fragment: &str) -> String {
    decode_entities(&strip_tags(fragment)).trim().to_string()
}

/// Percent-decode a URL component
///
/// Decodes into bytes before re-validating as UTF-8 so multi-byte
/// sequences survive. Malformed escapes are passed through literally.
pub fn percent_decode(s: &str) -> String {
    let raw = s.as_bytes();
    let mut bytes = Vec::with_capacity(raw.len());
    let mut i = 0;

    while i < raw.len() {
        if raw[i] == b'%' && i + 2 < raw.len() {
            let hex = [raw[i + 1], raw[i + 2]];
            if let Some(byte) = std::str::from_utf8(&hex)
                .ok()
                .and_then(|h| u8::from_str_radix(h, 16).ok())
            {
                bytes.push(byte);
                i += 3;
                continue;
            }
        }
        bytes.push(raw[i]);
        i += 1;
    }

    String::from_utf8_lossy(&bytes).into_owned()
}

/// Unwrap DuckDuckGo's click-tracking redirect URL
///
/// Result hrefs look like `//duckduckgo.com/l/?uddg=https%3A%2F%2F...&rut=...`;
/// the `uddg` parameter carries the percent-encoded destination. Hrefs
/// without the wrapper are returned as-is; callers decide whether the
/// resolved URL is usable (absolute, http-schemed).
pub fn unwrap_redirect(href: &str) -> String {
    if let Some(pos) = href.find("uddg=") {
        let start = pos + 5;
        let end = href[start..]
            .find('&')
            .map(|i| start + i)
            .unwrap_or(href.len());
        percent_decode(&href[start..end])
    } else {
        href.to_string()
    }
}

/// Derive a display string from a result URL's host, minus a leading `www.`
pub fn host_display(url: &str) -> String {
    Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(str::to_string))
        .map(|host| host.trim_start_matches("www.").to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_entities_common() {
        assert_eq!(
            decode_entities("Tom &amp; Jerry&#39;s &lt;show&gt;"),
            "Tom & Jerry's <show>"
        );
        assert_eq!(decode_entities("a&nbsp;b"), "a b");
        assert_eq!(decode_entities("path&#x2F;to&#x2F;x"), "path/to/x");
        assert_eq!(decode_entities("&quot;hi&quot;"), "\"hi\"");
        assert_eq!(decode_entities("&apos;x&apos;"), "'x'");
        assert_eq!(decode_entities("a &#x3D; &#x60;b&#x60;"), "a = `b`");
    }

    #[test]
    fn test_decode_entities_unknown_left_alone() {
        assert_eq!(decode_entities("&copy; 2025"), "&copy; 2025");
        assert_eq!(decode_entities("&#1234;"), "&#1234;");
        assert_eq!(decode_entities("AT&T"), "AT&T");
    }

    #[test]
    fn test_decode_entities_no_rescan() {
        // The replacement must not itself be decoded
        assert_eq!(decode_entities("&amp;lt;"), "&lt;");
    }

    #[test]
    fn test_strip_tags() {
        assert_eq!(strip_tags("<b>bold</b> text"), "bold text");
        assert_eq!(strip_tags("a<br/>b"), "a b");
        assert_eq!(strip_tags("  spaced   \n out  "), "spaced out");
        assert_eq!(strip_tags("plain"), "plain");
    }

    #[test]
    fn test_clean_text_decodes_after_stripping() {
        // &lt;show&gt; decodes to literal text, not a tag to strip
        assert_eq!(
            clean_text("<b>Tom &amp; Jerry&#39;s</b> &lt;show&gt;"),
            "Tom & Jerry's <show>"
        );
    }

    #[test]
    fn test_percent_decode() {
        assert_eq!(
            percent_decode("https%3A%2F%2Fexample.com%2Fpage"),
            "https://example.com/page"
        );
        // Multi-byte UTF-8 sequences survive
        assert_eq!(percent_decode("caf%C3%A9"), "café");
        // Malformed escapes pass through
        assert_eq!(percent_decode("50%"), "50%");
        assert_eq!(percent_decode("%zz"), "%zz");
    }

    #[test]
    fn test_unwrap_redirect() {
        let wrapped = "/l/?uddg=https%3A%2F%2Fexample.com%2Fpage&rut=abc123";
        assert_eq!(unwrap_redirect(wrapped), "https://example.com/page");

        let protocol_relative = "//duckduckgo.com/l/?uddg=https%3A%2F%2Fexample.com";
        assert_eq!(unwrap_redirect(protocol_relative), "https://example.com");

        // Wrapper parameter as the last query component
        let no_trailer = "/l/?uddg=https%3A%2F%2Fexample.com";
        assert_eq!(unwrap_redirect(no_trailer), "https://example.com");

        // Direct URLs pass through
        assert_eq!(
            unwrap_redirect("https://example.com"),
            "https://example.com"
        );
    }

    #[test]
    fn test_host_display() {
        assert_eq!(host_display("https://www.example.com/page"), "example.com");
        assert_eq!(host_display("http://docs.rs/regex"), "docs.rs");
        assert_eq!(host_display("not a url"), "");
    }
}
