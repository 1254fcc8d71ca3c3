//! HTML node tree built by the block renderer.
//!
//! A tree is write-once: it is assembled bottom-up from leaves, each parent
//! owning its children outright, and serialized a single time.

use indexmap::IndexMap;

/// Element attributes, rendered in insertion order
pub type Attributes = IndexMap<String, String>;

/// A node of the rendered HTML tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlNode {
    /// Node with direct text content and no children.
    ///
    /// Without a tag the value is emitted as raw text.
    Leaf {
        tag: Option<String>,
        value: Option<String>,
        attributes: Attributes,
    },

    /// Element whose content is the concatenation of its children
    Parent {
        tag: Option<String>,
        children: Option<Vec<HtmlNode>>,
        attributes: Attributes,
    },
}

impl HtmlNode {
    /// Create an untagged leaf that renders as raw text
    pub fn text(value: impl Into<String>) -> Self {
        HtmlNode::Leaf {
            tag: None,
            value: Some(value.into()),
            attributes: Attributes::new(),
        }
    }

    /// Create a tagged leaf
    pub fn leaf(tag: &str, value: impl Into<String>) -> Self {
        HtmlNode::Leaf {
            tag: Some(tag.to_string()),
            value: Some(value.into()),
            attributes: Attributes::new(),
        }
    }

    /// Create a parent element owning `children`
    pub fn element(tag: &str, children: Vec<HtmlNode>) -> Self {
        HtmlNode::Parent {
            tag: Some(tag.to_string()),
            children: Some(children),
            attributes: Attributes::new(),
        }
    }

    /// Set an attribute, keeping the position of an existing name
    pub fn with_attr(mut self, name: &str, value: impl Into<String>) -> Self {
        self.attributes_mut().insert(name.to_string(), value.into());
        self
    }

    /// Append a child to a parent node. Leaves are left untouched.
    pub fn push_child(&mut self, child: HtmlNode) {
        if let HtmlNode::Parent { children, .. } = self {
            children.get_or_insert_with(Vec::new).push(child);
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, HtmlNode::Leaf { .. })
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            HtmlNode::Leaf { tag, .. } | HtmlNode::Parent { tag, .. } => tag.as_deref(),
        }
    }

    /// Children of a parent node; always empty for leaves
    pub fn children(&self) -> impl Iterator<Item = &HtmlNode> {
        let children = match self {
            HtmlNode::Parent { children, .. } => children.as_deref(),
            HtmlNode::Leaf { .. } => None,
        };
        children.into_iter().flatten()
    }

    pub fn attributes(&self) -> &Attributes {
        match self {
            HtmlNode::Leaf { attributes, .. } | HtmlNode::Parent { attributes, .. } => attributes,
        }
    }

    fn attributes_mut(&mut self) -> &mut Attributes {
        match self {
            HtmlNode::Leaf { attributes, .. } | HtmlNode::Parent { attributes, .. } => attributes,
        }
    }

    /// Get an attribute value by name
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes().get(name).map(String::as_str)
    }

    /// All text content of this node and its descendants
    pub fn text_content(&self) -> String {
        match self {
            HtmlNode::Leaf { value, .. } => value.clone().unwrap_or_default(),
            HtmlNode::Parent { .. } => self.children().map(HtmlNode::text_content).collect(),
        }
    }
}
