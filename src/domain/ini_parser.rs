//! INI text parser.
//!
//! Each line is classified on its own; the only state carried between lines
//! is the current section. Lines that fit no known form are dropped without
//! error.

use crate::domain::section_table::{SectionTable, DEFAULT_SECTION};

const COMMENT_MARKERS: [char; 2] = ['#', ';'];

/// Classification of a single line of INI text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    Blank,
    Comment,
    Section(&'a str),
    Assignment { key: &'a str, value: &'a str },
    /// Not blank, not a comment or header, and no `=`.
    Malformed,
}

pub fn classify_line(raw: &str) -> Line<'_> {
    let line = raw.trim();

    if line.is_empty() {
        return Line::Blank;
    }
    if line.starts_with(COMMENT_MARKERS) {
        return Line::Comment;
    }
    if line.starts_with('[') && line.ends_with(']') {
        return Line::Section(line[1..line.len() - 1].trim());
    }

    match line.split_once('=') {
        Some((key, value)) => Line::Assignment {
            key: key.trim(),
            value: strip_inline_comment(value.trim()),
        },
        None => Line::Malformed,
    }
}

/// Cut `value` at the first `;` or `#`. Quotes are not recognised.
pub fn strip_inline_comment(value: &str) -> &str {
    match value.find(COMMENT_MARKERS) {
        Some(pos) => value[..pos].trim(),
        None => value,
    }
}

/// Split on `\r\n`, `\n` or a bare `\r`.
fn lines(content: &str) -> impl Iterator<Item = &str> {
    content
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .flat_map(|line| line.split('\r'))
}

pub fn parse(content: &str) -> SectionTable {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let mut table = SectionTable::new();
    let mut current = DEFAULT_SECTION.to_string();

    for (number, raw) in lines(content).enumerate() {
        match classify_line(raw) {
            Line::Blank | Line::Comment => {}
            Line::Section(name) => {
                table.ensure_section(name);
                current = name.to_string();
            }
            Line::Assignment { key, value } => {
                table
                    .ensure_section(&current)
                    .insert(key, value.to_string());
            }
            Line::Malformed => {
                tracing::trace!(line = number + 1, "skipping line without '='");
            }
        }
    }

    table
}
