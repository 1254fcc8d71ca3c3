//! Typed inline text spans
//!
//! The lexer produces spans, the renderer turns each one into a leaf node.

use crate::node::HtmlNode;

/// Semantic kind of an inline span
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpanKind {
    Plain,
    Bold,
    Italic,
    Code,
    Link,
    Image,
}

/// A contiguous run of inline text with one semantic kind.
///
/// `text` is the anchor text for links and the alt text for images. `url` is
/// only set for those two kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSpan {
    pub kind: SpanKind,
    pub text: String,
    pub url: Option<String>,
}

impl TextSpan {
    pub fn new(kind: SpanKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            url: None,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(SpanKind::Plain, text)
    }

    pub fn bold(text: impl Into<String>) -> Self {
        Self::new(SpanKind::Bold, text)
    }

    pub fn italic(text: impl Into<String>) -> Self {
        Self::new(SpanKind::Italic, text)
    }

    pub fn code(text: impl Into<String>) -> Self {
        Self::new(SpanKind::Code, text)
    }

    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            kind: SpanKind::Link,
            text: text.into(),
            url: Some(url.into()),
        }
    }

    pub fn image(alt: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            kind: SpanKind::Image,
            text: alt.into(),
            url: Some(url.into()),
        }
    }

    pub fn is_plain(&self) -> bool {
        self.kind == SpanKind::Plain
    }

    /// Convert this span into the leaf node that renders it
    pub fn to_leaf(&self) -> HtmlNode {
        let url = self.url.as_deref().unwrap_or_default();
        match self.kind {
            SpanKind::Plain => HtmlNode::text(self.text.as_str()),
            SpanKind::Bold => HtmlNode::leaf("b", self.text.as_str()),
            SpanKind::Italic => HtmlNode::leaf("i", self.text.as_str()),
            SpanKind::Code => HtmlNode::leaf("code", self.text.as_str()),
            SpanKind::Link => HtmlNode::leaf("a", self.text.as_str()).with_attr("href", url),
            // Images carry no content; the alt text lives in an attribute
            SpanKind::Image => HtmlNode::leaf("img", "")
                .with_attr("src", url)
                .with_attr("alt", self.text.as_str()),
        }
    }
}

impl From<TextSpan> for HtmlNode {
    fn from(span: TextSpan) -> Self {
        span.to_leaf()
    }
}
