//! Block splitting and classification.

/// Code block fence
pub const FENCE: &str = "```";

/// Syntactic kind of a top-level block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockType {
    Paragraph,
    /// Heading with level (1-6)
    Heading(u8),
    Code,
    Quote,
    UnorderedList,
    OrderedList,
}

/// Split a document into trimmed, non-empty blocks separated by blank lines
pub fn split_blocks(document: &str) -> Vec<&str> {
    document
        .split("\n\n")
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .collect()
}

/// Classify a trimmed block. Anything unrecognised is a paragraph.
pub fn classify(block: &str) -> BlockType {
    if let Some(level) = heading_level(block) {
        return BlockType::Heading(level);
    }

    if is_code_block(block) {
        return BlockType::Code;
    }

    let lines: Vec<&str> = block.split('\n').collect();

    if lines.iter().all(|line| line.starts_with('>')) {
        BlockType::Quote
    } else if lines.iter().all(|line| line.starts_with("- ")) {
        BlockType::UnorderedList
    } else if lines
        .iter()
        .enumerate()
        .all(|(i, line)| line.starts_with(&ordered_marker(i + 1)))
    {
        BlockType::OrderedList
    } else {
        BlockType::Paragraph
    }
}

/// Level of a `#`-marked heading, if `block` starts with 1-6 `#` and a space
pub(crate) fn heading_level(block: &str) -> Option<u8> {
    let level = block.bytes().take_while(|&b| b == b'#').count();
    if (1..=6).contains(&level) && block[level..].starts_with(' ') {
        Some(level as u8)
    } else {
        None
    }
}

/// Opening and closing fence; a lone fence only opens a block
pub(crate) fn is_code_block(block: &str) -> bool {
    block.len() >= FENCE.len() * 2 && block.starts_with(FENCE) && block.ends_with(FENCE)
}

/// Marker of the `index`-th (1-based) ordered list item, e.g. `"3. "`
pub(crate) fn ordered_marker(index: usize) -> String {
    format!("{index}. ")
}
