//! Block rendering.
//!
//! Each block kind strips its own syntax, lexes what is left and wraps the
//! resulting leaves in its structural element.

use mdsite_core::{HtmlNode, TextSpan};

use crate::block::{heading_level, is_code_block, ordered_marker, BlockType, FENCE};
use crate::inline::lex;
use crate::service::{Options, OrderedListPrefix};
use crate::{MdsiteError, Result};

/// Width of `"N. "`, the only marker the fixed-width strip understands
const FIXED_MARKER_WIDTH: usize = 3;

/// Render a classified block into its HTML subtree
pub fn render_block(block: &str, block_type: BlockType, options: &Options) -> Result<HtmlNode> {
    match block_type {
        BlockType::Paragraph => render_paragraph(block),
        BlockType::Heading(level) => render_heading(block, level),
        BlockType::Code => render_code(block),
        BlockType::Quote => render_quote(block),
        BlockType::UnorderedList => render_unordered_list(block),
        BlockType::OrderedList => render_ordered_list(block, options.ordered_list_prefix),
    }
}

fn text_to_children(text: &str) -> Result<Vec<HtmlNode>> {
    Ok(lex(text)?.iter().map(TextSpan::to_leaf).collect())
}

fn render_paragraph(block: &str) -> Result<HtmlNode> {
    let text = block.split('\n').collect::<Vec<_>>().join(" ");
    Ok(HtmlNode::element("p", text_to_children(&text)?))
}

fn render_heading(block: &str, level: u8) -> Result<HtmlNode> {
    if !(1..=6).contains(&level) {
        return Err(MdsiteError::InvalidBlockType(format!(
            "heading level {level}"
        )));
    }
    if heading_level(block) != Some(level) {
        return Err(MdsiteError::InvalidHeading(block.to_string()));
    }

    // Marker plus exactly one space
    let text = &block[level as usize + 1..];
    if text.is_empty() {
        return Err(MdsiteError::InvalidHeading(block.to_string()));
    }

    Ok(HtmlNode::element(
        &format!("h{level}"),
        text_to_children(text)?,
    ))
}

fn render_code(block: &str) -> Result<HtmlNode> {
    if !is_code_block(block) {
        return Err(MdsiteError::InvalidCodeBlock);
    }

    let inner = &block[FENCE.len()..block.len() - FENCE.len()];
    let inner = inner.strip_prefix('\n').unwrap_or(inner);

    // Code is raw text, no inline markdown
    let code = HtmlNode::element("code", vec![TextSpan::plain(inner).to_leaf()]);
    Ok(HtmlNode::element("pre", vec![code]))
}

fn render_quote(block: &str) -> Result<HtmlNode> {
    let mut lines = Vec::new();
    for line in block.split('\n') {
        if !line.starts_with('>') {
            return Err(MdsiteError::InvalidQuote(line.to_string()));
        }
        lines.push(line.trim_start_matches('>').trim());
    }

    Ok(HtmlNode::element(
        "blockquote",
        text_to_children(&lines.join(" "))?,
    ))
}

fn render_unordered_list(block: &str) -> Result<HtmlNode> {
    let items = block
        .split('\n')
        .map(|line| {
            line.strip_prefix("- ")
                .ok_or_else(|| MdsiteError::InvalidListItem(line.to_string()))
        })
        .collect::<Result<Vec<_>>>()?;

    render_list("ul", &items)
}

fn render_ordered_list(block: &str, prefix: OrderedListPrefix) -> Result<HtmlNode> {
    let items = block
        .split('\n')
        .enumerate()
        .map(|(i, line)| {
            let item = match prefix {
                OrderedListPrefix::Computed => line.strip_prefix(ordered_marker(i + 1).as_str()),
                OrderedListPrefix::FixedWidth => line.get(FIXED_MARKER_WIDTH..),
            };
            item.ok_or_else(|| MdsiteError::InvalidListItem(line.to_string()))
        })
        .collect::<Result<Vec<_>>>()?;

    render_list("ol", &items)
}

fn render_list(tag: &str, items: &[&str]) -> Result<HtmlNode> {
    let children = items
        .iter()
        .map(|item| -> Result<HtmlNode> { Ok(HtmlNode::element("li", text_to_children(item)?)) })
        .collect::<Result<Vec<_>>>()?;

    Ok(HtmlNode::element(tag, children))
}
