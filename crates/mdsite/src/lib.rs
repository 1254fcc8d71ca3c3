//! # mdsite
//!
//! Convert Markdown documents to HTML.
//!
//! Conversion runs in two stages. The document is split into blank-line
//! separated blocks, each classified as a paragraph, heading, code fence,
//! quote or list. Every block's text then goes through the inline lexer, which
//! produces typed spans that become the leaves of the block's HTML element.
//!
//! Only a small, strict subset of Markdown is understood: no nested blocks,
//! no reference links, no tables. Text is embedded without HTML escaping.
//!
//! ## Example
//!
//! ```rust
//! use mdsite::MarkdownService;
//!
//! let service = MarkdownService::new();
//! let document = "# Title\n\nSome **bold** text";
//!
//! assert_eq!(service.extract_title(document).unwrap(), "Title");
//! assert_eq!(
//!     service.to_html(document).unwrap(),
//!     "<div><h1>Title</h1><p>Some <b>bold</b> text</p></div>"
//! );
//! ```
//!
//! ## Example (page template)
//!
//! ```rust
//! use mdsite::MarkdownService;
//!
//! let service = MarkdownService::new();
//! let page = service
//!     .generate_page("# Hi", "<title>{{ Title }}</title>{{ Content }}")
//!     .unwrap();
//! assert_eq!(page, "<title>Hi</title><div><h1>Hi</h1></div>");
//! ```

pub mod block;
pub mod inline;
mod render;
mod service;

pub use block::{classify, split_blocks, BlockType};
pub use inline::{
    extract_markdown_images, extract_markdown_links, lex, split_spans_delimiter,
    split_spans_image, split_spans_link,
};
pub use mdsite_core::{Attributes, HtmlNode, NodeError, SpanKind, TextSpan};
pub use render::render_block;
pub use service::{MarkdownService, Options, OrderedListPrefix};

/// Error type for markdown conversion
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MdsiteError {
    #[error("no closing delimiter `{delimiter}` found")]
    MalformedInlineSyntax { delimiter: String },

    #[error("invalid heading block: {0}")]
    InvalidHeading(String),

    #[error("code block must start and end with ```")]
    InvalidCodeBlock,

    #[error("quote line does not start with `>`: {0}")]
    InvalidQuote(String),

    #[error("list item is missing its marker: {0}")]
    InvalidListItem(String),

    #[error("invalid block type: {0}")]
    InvalidBlockType(String),

    #[error("no level 1 heading found")]
    NoTitleFound,

    #[error(transparent)]
    Node(#[from] NodeError),
}

pub type Result<T> = std::result::Result<T, MdsiteError>;
