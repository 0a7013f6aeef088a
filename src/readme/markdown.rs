//! Block-level markdown scanning.
//!
//! READMEs only need a shallow reading: which headings exist, and what
//! paragraphs, lists, and code blocks sit between them. This is a line
//! scanner producing a flat block sequence, not a full CommonMark parser;
//! inline markup is stripped down to its visible text.

use regex::Regex;
use std::sync::LazyLock;

/// One block of a markdown document, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// ATX (`## Title`) or setext (underlined) heading.
    Heading { level: u8, text: String },
    /// Run of plain text lines.
    Paragraph(String),
    /// Fenced or indented code block, verbatim.
    CodeBlock(String),
    /// Bullet or numbered list; one string per item.
    List(Vec<String>),
}

static LINK_OR_IMAGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!?\[([^\]]*)\]\([^)]*\)").expect("valid link pattern"));

/// Reduce inline markup to its visible text: links and images keep their
/// label, code spans and bold markers drop their delimiters.
pub fn strip_inline(text: &str) -> String {
    let text = LINK_OR_IMAGE.replace_all(text, "$1");
    text.replace("**", "").replace('`', "").trim().to_string()
}

/// Parse a markdown document into a flat block sequence.
pub fn parse_blocks(text: &str) -> Vec<Block> {
    let lines: Vec<&str> = text.lines().collect();
    let mut blocks = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        let line = lines[i];
        let trimmed = line.trim();

        if trimmed.is_empty() {
            i += 1;
            continue;
        }

        if let Some(fence) = fence_marker(trimmed) {
            i = parse_fenced_code(&lines, i, fence, &mut blocks);
            continue;
        }

        if let Some((level, text)) = atx_heading(trimmed) {
            blocks.push(Block::Heading { level, text });
            i += 1;
            continue;
        }

        if indent_width(line) >= 4 {
            i = parse_indented_code(&lines, i, &mut blocks);
            continue;
        }

        if list_item_text(trimmed).is_some() {
            i = parse_list(&lines, i, &mut blocks);
            continue;
        }

        // Thematic break, not a setext underline (no paragraph above)
        if trimmed.chars().all(|c| c == '-' || c == '*' || c == '_') && trimmed.len() >= 3 {
            i += 1;
            continue;
        }

        i = parse_paragraph(&lines, i, &mut blocks);
    }

    blocks
}

fn indent_width(line: &str) -> usize {
    let mut width = 0;
    for c in line.chars() {
        match c {
            ' ' => width += 1,
            '\t' => width += 4,
            _ => break,
        }
    }
    width
}

/// Returns the fence character if the line opens a code fence.
fn fence_marker(trimmed: &str) -> Option<char> {
    for marker in ['`', '~'] {
        if trimmed.chars().take_while(|c| *c == marker).count() >= 3 {
            return Some(marker);
        }
    }
    None
}

fn atx_heading(trimmed: &str) -> Option<(u8, String)> {
    let hashes = trimmed.chars().take_while(|c| *c == '#').count();
    if hashes == 0 || hashes > 6 {
        return None;
    }
    let rest = &trimmed[hashes..];
    if !rest.is_empty() && !rest.starts_with(' ') {
        return None;
    }
    // Closing hashes ("## Title ##") are decoration
    let text = rest.trim().trim_end_matches('#').trim();
    Some((hashes as u8, strip_inline(text)))
}

/// Returns the item text if the line starts a list item.
fn list_item_text(trimmed: &str) -> Option<&str> {
    for marker in ["- ", "* ", "+ "] {
        if let Some(rest) = trimmed.strip_prefix(marker) {
            return Some(rest);
        }
    }
    // Numbered items: "1. text" or "1) text"
    let digits = trimmed.chars().take_while(|c| c.is_ascii_digit()).count();
    if digits > 0 {
        let rest = &trimmed[digits..];
        for sep in [". ", ") "] {
            if let Some(item) = rest.strip_prefix(sep) {
                return Some(item);
            }
        }
    }
    None
}

fn setext_level(trimmed: &str) -> Option<u8> {
    if trimmed.is_empty() {
        return None;
    }
    if trimmed.chars().all(|c| c == '=') {
        Some(1)
    } else if trimmed.chars().all(|c| c == '-') {
        Some(2)
    } else {
        None
    }
}

fn parse_fenced_code(lines: &[&str], start: usize, fence: char, blocks: &mut Vec<Block>) -> usize {
    let mut i = start + 1;
    let mut content = Vec::new();
    while i < lines.len() {
        let trimmed = lines[i].trim();
        if trimmed.chars().take_while(|c| *c == fence).count() >= 3 {
            i += 1;
            break;
        }
        content.push(lines[i]);
        i += 1;
    }
    blocks.push(Block::CodeBlock(content.join("\n").trim().to_string()));
    i
}

fn parse_indented_code(lines: &[&str], start: usize, blocks: &mut Vec<Block>) -> usize {
    let mut i = start;
    let mut content = Vec::new();
    while i < lines.len() {
        let line = lines[i];
        if line.trim().is_empty() {
            // Blank lines stay inside the block only if more code follows
            match lines[i + 1..].iter().find(|l| !l.trim().is_empty()) {
                Some(next) if indent_width(next) >= 4 => {
                    content.push("");
                    i += 1;
                    continue;
                }
                _ => break,
            }
        }
        if indent_width(line) < 4 {
            break;
        }
        content.push(dedent(line, 4));
        i += 1;
    }
    blocks.push(Block::CodeBlock(content.join("\n").trim().to_string()));
    i
}

fn dedent(line: &str, mut columns: usize) -> &str {
    let mut idx = 0;
    for (byte, c) in line.char_indices() {
        if columns == 0 {
            break;
        }
        match c {
            ' ' => columns -= 1,
            '\t' => columns = columns.saturating_sub(4),
            _ => break,
        }
        idx = byte + c.len_utf8();
    }
    &line[idx..]
}

fn parse_list(lines: &[&str], start: usize, blocks: &mut Vec<Block>) -> usize {
    let mut i = start;
    let mut items: Vec<String> = Vec::new();

    while i < lines.len() {
        let trimmed = lines[i].trim();

        if trimmed.is_empty() {
            // A blank line ends the list unless another item follows
            match lines[i + 1..].iter().find(|l| !l.trim().is_empty()) {
                Some(next) if list_item_text(next.trim()).is_some() => {
                    i += 1;
                    continue;
                }
                _ => break,
            }
        }

        if let Some(item) = list_item_text(trimmed) {
            items.push(strip_inline(item));
            i += 1;
            continue;
        }

        // Indented continuation of the previous item
        if indent_width(lines[i]) >= 2 && !items.is_empty() && atx_heading(trimmed).is_none() {
            let last = items.last_mut().expect("items is non-empty");
            last.push(' ');
            last.push_str(&strip_inline(trimmed));
            i += 1;
            continue;
        }

        break;
    }

    blocks.push(Block::List(items));
    i
}

fn parse_paragraph(lines: &[&str], start: usize, blocks: &mut Vec<Block>) -> usize {
    let mut i = start;
    let mut collected: Vec<String> = Vec::new();

    while i < lines.len() {
        let trimmed = lines[i].trim();
        if trimmed.is_empty()
            || atx_heading(trimmed).is_some()
            || fence_marker(trimmed).is_some()
            || list_item_text(trimmed).is_some()
        {
            break;
        }

        // Setext underline turns the collected lines into a heading
        if !collected.is_empty() {
            if let Some(level) = setext_level(trimmed) {
                blocks.push(Block::Heading {
                    level,
                    text: strip_inline(&collected.join(" ")),
                });
                return i + 1;
            }
        }

        // Blockquote markers are visual, not structural, for our purposes
        let text = trimmed.trim_start_matches('>').trim_start();
        collected.push(strip_inline(text));
        i += 1;
    }

    blocks.push(Block::Paragraph(collected.join("\n").trim().to_string()));
    i
}
