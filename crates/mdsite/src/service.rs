//! MarkdownService - the main entry point for Markdown to HTML conversion.

use tracing::{debug, trace};

use mdsite_core::HtmlNode;

use crate::block::{classify, split_blocks};
use crate::render::render_block;
use crate::{MdsiteError, Result};

/// How ordered list item markers are removed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderedListPrefix {
    /// Strip the item's actual `"{index}. "` marker
    #[default]
    Computed,
    /// Strip a fixed three characters, which only fits `"1. "` to `"9. "`
    FixedWidth,
}

/// Options for MarkdownService
#[derive(Debug, Clone)]
pub struct Options {
    /// Tag of the element wrapping all rendered blocks
    pub root_tag: String,

    /// Ordered list marker handling
    pub ordered_list_prefix: OrderedListPrefix,

    /// Template placeholder replaced by the document title
    pub title_placeholder: String,

    /// Template placeholder replaced by the rendered body
    pub content_placeholder: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            root_tag: "div".to_string(),
            ordered_list_prefix: OrderedListPrefix::Computed,
            title_placeholder: "{{ Title }}".to_string(),
            content_placeholder: "{{ Content }}".to_string(),
        }
    }
}

/// The main service for converting Markdown to HTML
#[derive(Debug, Clone, Default)]
pub struct MarkdownService {
    options: Options,
}

impl MarkdownService {
    /// Create a new MarkdownService with default options
    pub fn new() -> Self {
        Self {
            options: Options::default(),
        }
    }

    /// Create a MarkdownService with custom options
    pub fn with_options(options: Options) -> Self {
        Self { options }
    }

    /// Get the current options
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Get mutable access to options
    pub fn options_mut(&mut self) -> &mut Options {
        &mut self.options
    }

    /// Convert a document into a node tree, one child per block
    pub fn convert(&self, document: &str) -> Result<HtmlNode> {
        let blocks = split_blocks(document);
        debug!(blocks = blocks.len(), "split markdown document");

        let mut children = Vec::with_capacity(blocks.len());
        for block in blocks {
            let block_type = classify(block);
            trace!(?block_type, "classified block");
            children.push(render_block(block, block_type, &self.options)?);
        }

        Ok(HtmlNode::element(&self.options.root_tag, children))
    }

    /// Convert a document to an HTML string
    pub fn to_html(&self, document: &str) -> Result<String> {
        Ok(self.convert(document)?.to_html()?)
    }

    /// Text of the first `# ` heading line
    pub fn extract_title(&self, document: &str) -> Result<String> {
        document
            .lines()
            .find_map(|line| line.strip_prefix("# "))
            .map(|title| title.trim().to_string())
            .ok_or(MdsiteError::NoTitleFound)
    }

    /// Fill a page template with the document's title and rendered body
    pub fn generate_page(&self, document: &str, template: &str) -> Result<String> {
        let title = self.extract_title(document)?;
        let content = self.to_html(document)?;
        debug!(%title, bytes = content.len(), "generated page");

        Ok(template
            .replacen(&self.options.title_placeholder, &title, 1)
            .replacen(&self.options.content_placeholder, &content, 1))
    }
}
