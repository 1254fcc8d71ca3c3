//! HTML serialization
//!
//! Flattens a node tree into an HTML string by depth-first pre-order
//! traversal. Text and attribute values are emitted verbatim.

use crate::node::{Attributes, HtmlNode};
use crate::{NodeError, Result};

impl HtmlNode {
    /// Serialize this node and its descendants to HTML
    pub fn to_html(&self) -> Result<String> {
        let mut output = String::with_capacity(256);
        write_node(self, &mut output)?;
        Ok(output)
    }

    /// Attributes rendered as ` name="value"` pairs
    pub fn attributes_html(&self) -> String {
        let mut output = String::new();
        write_attributes(self.attributes(), &mut output);
        output
    }
}

fn write_node(node: &HtmlNode, out: &mut String) -> Result<()> {
    match node {
        HtmlNode::Leaf {
            tag,
            value,
            attributes,
        } => {
            let value = value.as_deref().ok_or(NodeError::MissingNodeValue)?;
            match tag {
                Some(tag) => {
                    write_open_tag(tag, attributes, out);
                    out.push_str(value);
                    write_close_tag(tag, out);
                }
                None => out.push_str(value),
            }
        }

        HtmlNode::Parent {
            tag,
            children,
            attributes,
        } => {
            let tag = tag
                .as_deref()
                .filter(|t| !t.is_empty())
                .ok_or(NodeError::MissingNodeTag)?;
            let children = children
                .as_deref()
                .ok_or_else(|| NodeError::MissingNodeChildren(tag.to_string()))?;

            write_open_tag(tag, attributes, out);
            for child in children {
                write_node(child, out)?;
            }
            write_close_tag(tag, out);
        }
    }

    Ok(())
}

fn write_open_tag(tag: &str, attributes: &Attributes, out: &mut String) {
    out.push('<');
    out.push_str(tag);
    write_attributes(attributes, out);
    out.push('>');
}

fn write_close_tag(tag: &str, out: &mut String) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

fn write_attributes(attributes: &Attributes, out: &mut String) {
    for (name, value) in attributes {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        out.push_str(value);
        out.push('"');
    }
}
