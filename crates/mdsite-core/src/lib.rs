//! mdsite-core - HTML node tree and inline span model
//!
//! This crate provides the data structures shared by the markdown converter:
//! the typed inline [`TextSpan`] produced by the lexer and the [`HtmlNode`]
//! tree the renderer builds and serializes.
//!
//! # Architecture
//!
//! ```text
//! Markdown ──lex──▶ ┌───────────┐        ┌──────────┐
//!                   │ TextSpans │ ──────▶│ HtmlNode │ ──▶ HTML String
//!                   └───────────┘ leaves └──────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use mdsite_core::{HtmlNode, TextSpan};
//!
//! let paragraph = HtmlNode::element(
//!     "p",
//!     vec![
//!         TextSpan::plain("Hello ").to_leaf(),
//!         TextSpan::bold("World").to_leaf(),
//!     ],
//! );
//!
//! assert_eq!(paragraph.to_html().unwrap(), "<p>Hello <b>World</b></p>");
//! ```

mod node;
mod serialize;
mod span;

pub use node::{Attributes, HtmlNode};
pub use span::{SpanKind, TextSpan};

/// Error raised when a node tree cannot be serialized
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NodeError {
    #[error("leaf node has no value")]
    MissingNodeValue,

    #[error("parent node has no tag")]
    MissingNodeTag,

    #[error("parent node `{0}` has no children")]
    MissingNodeChildren(String),
}

pub type Result<T> = std::result::Result<T, NodeError>;
