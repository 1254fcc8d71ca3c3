//! Inline lexer.
//!
//! Text is lexed by a fixed sequence of passes over a list of spans: bold,
//! italic, inline code, images, then links. Each pass only re-splits `Plain`
//! spans, so content already claimed by an earlier pass is never
//! reinterpreted.

use once_cell::sync::Lazy;
use regex::Regex;

use mdsite_core::{SpanKind, TextSpan};

use crate::{MdsiteError, Result};

/// `![alt](url)` with no nested brackets or parentheses
static IMAGE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"!\[([^\[\]]*)\]\(([^\(\)]*)\)").unwrap());

/// `[text](url)`; image syntax is filtered out after matching
static LINK_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([^\[\]]*)\]\(([^\(\)]*)\)").unwrap());

/// Lex raw inline text into typed spans
pub fn lex(text: &str) -> Result<Vec<TextSpan>> {
    let spans = vec![TextSpan::plain(text)];
    let spans = split_spans_delimiter(spans, "**", SpanKind::Bold)?;
    let spans = split_spans_delimiter(spans, "_", SpanKind::Italic)?;
    let spans = split_spans_delimiter(spans, "`", SpanKind::Code)?;
    let spans = split_spans_image(spans);
    Ok(split_spans_link(spans))
}

/// Split every plain span on pairs of `delimiter`, typing the enclosed text
/// as `kind`.
///
/// An opening delimiter without a closing partner is an error.
pub fn split_spans_delimiter(
    spans: Vec<TextSpan>,
    delimiter: &str,
    kind: SpanKind,
) -> Result<Vec<TextSpan>> {
    if delimiter.is_empty() {
        return Ok(spans);
    }

    let mut result = Vec::with_capacity(spans.len());

    for span in spans {
        if !span.is_plain() {
            result.push(span);
            continue;
        }

        let mut remaining = span.text.as_str();
        while let Some(start) = remaining.find(delimiter) {
            if start > 0 {
                result.push(TextSpan::plain(&remaining[..start]));
            }

            let inner = &remaining[start + delimiter.len()..];
            let end = inner
                .find(delimiter)
                .ok_or_else(|| MdsiteError::MalformedInlineSyntax {
                    delimiter: delimiter.to_string(),
                })?;

            result.push(TextSpan::new(kind, &inner[..end]));
            remaining = &inner[end + delimiter.len()..];
        }

        if !remaining.is_empty() {
            result.push(TextSpan::plain(remaining));
        }
    }

    Ok(result)
}

/// Split every plain span on `![alt](url)` images
pub fn split_spans_image(spans: Vec<TextSpan>) -> Vec<TextSpan> {
    split_spans_markup(spans, SpanKind::Image, "!", extract_markdown_images)
}

/// Split every plain span on `[text](url)` links
pub fn split_spans_link(spans: Vec<TextSpan>) -> Vec<TextSpan> {
    split_spans_markup(spans, SpanKind::Link, "", extract_markdown_links)
}

/// `(alt, url)` pairs of all images in `text`
pub fn extract_markdown_images(text: &str) -> Vec<(String, String)> {
    IMAGE_PATTERN
        .captures_iter(text)
        .map(|caps| (caps[1].to_string(), caps[2].to_string()))
        .collect()
}

/// `(text, url)` pairs of all links in `text`, excluding images
pub fn extract_markdown_links(text: &str) -> Vec<(String, String)> {
    LINK_PATTERN
        .captures_iter(text)
        .filter(|caps| {
            let start = caps.get(0).map_or(0, |m| m.start());
            !text[..start].ends_with('!')
        })
        .map(|caps| (caps[1].to_string(), caps[2].to_string()))
        .collect()
}

fn split_spans_markup(
    spans: Vec<TextSpan>,
    kind: SpanKind,
    prefix: &str,
    extract: fn(&str) -> Vec<(String, String)>,
) -> Vec<TextSpan> {
    let mut result = Vec::with_capacity(spans.len());

    for span in spans {
        if !span.is_plain() {
            result.push(span);
            continue;
        }

        let matches = extract(&span.text);
        if matches.is_empty() {
            result.push(span);
            continue;
        }

        let mut remaining = span.text.as_str();
        for (text, url) in matches {
            let markup = format!("{prefix}[{text}]({url})");
            // Already consumed by an earlier occurrence
            let Some((before, after)) = remaining.split_once(markup.as_str()) else {
                continue;
            };

            if !before.is_empty() {
                result.push(TextSpan::plain(before));
            }
            result.push(TextSpan {
                kind,
                text,
                url: Some(url),
            });
            remaining = after;
        }

        if !remaining.is_empty() {
            result.push(TextSpan::plain(remaining));
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn test_plain_text() {
        let spans = lex("plain text").unwrap();
        assert_eq!(spans, vec![TextSpan::plain("plain text")]);
        assert_eq!(spans[0].url, None);
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(lex("").unwrap(), Vec::<TextSpan>::new());
    }

    #[test]
    fn test_bold() {
        assert_eq!(
            lex("a **b** c").unwrap(),
            vec![
                TextSpan::plain("a "),
                TextSpan::bold("b"),
                TextSpan::plain(" c"),
            ]
        );
    }

    #[test]
    fn test_multiple_code_pairs() {
        assert_eq!(
            lex("a `c` and `d`").unwrap(),
            vec![
                TextSpan::plain("a "),
                TextSpan::code("c"),
                TextSpan::plain(" and "),
                TextSpan::code("d"),
            ]
        );
    }

    #[test]
    fn test_mixed_formatting() {
        assert_eq!(
            lex("This has **bold** and _italic_ and `code`").unwrap(),
            vec![
                TextSpan::plain("This has "),
                TextSpan::bold("bold"),
                TextSpan::plain(" and "),
                TextSpan::italic("italic"),
                TextSpan::plain(" and "),
                TextSpan::code("code"),
            ]
        );
    }

    #[test]
    fn test_empty_pair() {
        assert_eq!(
            lex("x****y").unwrap(),
            vec![
                TextSpan::plain("x"),
                TextSpan::bold(""),
                TextSpan::plain("y"),
            ]
        );
    }

    #[test]
    fn test_typed_spans_are_not_rescanned() {
        // Underscores inside the bold span are never read as italics
        assert_eq!(
            lex("**a_b_c** `x`").unwrap(),
            vec![
                TextSpan::bold("a_b_c"),
                TextSpan::plain(" "),
                TextSpan::code("x"),
            ]
        );
    }

    #[rstest]
    #[case("a **b", "**")]
    #[case("an _unclosed italic", "_")]
    #[case("some `code", "`")]
    #[case("**ok** then **not", "**")]
    fn test_unclosed_delimiter(#[case] text: &str, #[case] delimiter: &str) {
        assert_eq!(
            lex(text),
            Err(MdsiteError::MalformedInlineSyntax {
                delimiter: delimiter.to_string()
            })
        );
    }

    #[test]
    fn test_split_spans_delimiter_keeps_typed_spans() {
        let spans = vec![
            TextSpan::plain("Text with `code` word"),
            TextSpan::bold("`not code`"),
        ];
        let result = split_spans_delimiter(spans, "`", SpanKind::Code).unwrap();
        assert_eq!(
            result,
            vec![
                TextSpan::plain("Text with "),
                TextSpan::code("code"),
                TextSpan::plain(" word"),
                TextSpan::bold("`not code`"),
            ]
        );
    }

    #[test]
    fn test_extract_markdown_images() {
        assert_eq!(
            extract_markdown_images("This is text with an ![image](https://i.imgur.com/zjjcJKZ.png)"),
            vec![(
                "image".to_string(),
                "https://i.imgur.com/zjjcJKZ.png".to_string()
            )]
        );
    }

    #[test]
    fn test_extract_images_and_links_separately() {
        let text = "Here's ![an image](http://example.com/img.jpg) and [a link](http://example.com) followed by ![another image](http://example.com/img2.png)";
        assert_eq!(
            extract_markdown_images(text),
            vec![
                ("an image".to_string(), "http://example.com/img.jpg".to_string()),
                ("another image".to_string(), "http://example.com/img2.png".to_string()),
            ]
        );
        assert_eq!(
            extract_markdown_links(text),
            vec![("a link".to_string(), "http://example.com".to_string())]
        );
    }

    #[test]
    fn test_extract_empty_text_and_url() {
        assert_eq!(
            extract_markdown_images("![](https://example.com/img.jpg)"),
            vec![(String::new(), "https://example.com/img.jpg".to_string())]
        );
        assert_eq!(
            extract_markdown_links("[text]()"),
            vec![("text".to_string(), String::new())]
        );
    }

    #[rstest]
    #[case("This is plain text with no images or links.")]
    #[case("This has a broken image tag: !image.jpg")]
    #[case("This has a broken link tag: [link](broken")]
    #[case("Nested [brackets [are]](not allowed)")]
    fn test_extract_no_matches(#[case] text: &str) {
        assert!(extract_markdown_images(text).is_empty());
        assert!(extract_markdown_links(text).is_empty());
    }

    #[test]
    fn test_adjacent_links() {
        assert_eq!(
            extract_markdown_links("[a](x)[b](y)"),
            vec![
                ("a".to_string(), "x".to_string()),
                ("b".to_string(), "y".to_string()),
            ]
        );
    }

    #[test]
    fn test_split_spans_image() {
        let spans = vec![TextSpan::plain(
            "This is text with an ![image](https://i.imgur.com/zjjcJKZ.png) and another ![second image](https://i.imgur.com/3elNhQu.png)",
        )];
        assert_eq!(
            split_spans_image(spans),
            vec![
                TextSpan::plain("This is text with an "),
                TextSpan::image("image", "https://i.imgur.com/zjjcJKZ.png"),
                TextSpan::plain(" and another "),
                TextSpan::image("second image", "https://i.imgur.com/3elNhQu.png"),
            ]
        );
    }

    #[test]
    fn test_split_spans_link_multiple_spans() {
        let spans = vec![
            TextSpan::plain("Text with [link1](url1)"),
            TextSpan::plain("Another text"),
            TextSpan::plain("Text with [link2](url2) and [link3](url3) done"),
        ];
        assert_eq!(
            split_spans_link(spans),
            vec![
                TextSpan::plain("Text with "),
                TextSpan::link("link1", "url1"),
                TextSpan::plain("Another text"),
                TextSpan::plain("Text with "),
                TextSpan::link("link2", "url2"),
                TextSpan::plain(" and "),
                TextSpan::link("link3", "url3"),
                TextSpan::plain(" done"),
            ]
        );
    }

    #[test]
    fn test_repeated_link_is_consumed_in_order() {
        assert_eq!(
            split_spans_link(vec![TextSpan::plain("[a](x) or [a](x)")]),
            vec![
                TextSpan::link("a", "x"),
                TextSpan::plain(" or "),
                TextSpan::link("a", "x"),
            ]
        );
    }

    #[test]
    fn test_lex_links_and_images() {
        assert_eq!(
            lex("See ![cool image](https://example.com/img.jpg) or click [here](https://boot.dev) to learn")
                .unwrap(),
            vec![
                TextSpan::plain("See "),
                TextSpan::image("cool image", "https://example.com/img.jpg"),
                TextSpan::plain(" or click "),
                TextSpan::link("here", "https://boot.dev"),
                TextSpan::plain(" to learn"),
            ]
        );
    }

    #[test]
    fn test_relexing_plain_output_is_stable() {
        let text = "Start **bold** middle _it_ and `code` end";
        let plain: String = lex(text)
            .unwrap()
            .into_iter()
            .filter(TextSpan::is_plain)
            .map(|span| span.text)
            .collect();

        assert_eq!(lex(&plain).unwrap(), vec![TextSpan::plain(plain.clone())]);
    }
}
