//! Constrained markdown rendering
//!
//! Converts generated text into an ordered sequence of [`Block`]s that the
//! TUI and the batch printer both consume. The grammar is deliberately
//! small: ATX headings 1-3, blockquotes, bullets, paragraphs, blank
//! spacers, and pipe tables. Classification is line-oriented with a single
//! piece of carried state, the in-progress table buffer.
//!
//! Rendering is a deterministic pure function of its input and never
//! fails: every line maps to exactly one outcome (append to the table
//! buffer, consume a rule line, or flush-and-classify). Malformed input
//! degrades cosmetically instead of erroring.

pub mod inline;

pub use inline::{InlineSpan, bold_spans};

/// One display-ready unit of rendered output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// ATX heading, level 1-3
    Heading { level: u8, text: String },
    /// `> ` blockquote
    Quote { text: String },
    /// `- ` or `* ` list item, markers stripped
    Bullet { text: String },
    /// Plain prose; keeps the original untrimmed line text
    Paragraph { text: String },
    /// Whitespace-only line
    Blank,
    /// Pipe table: header row plus zero or more data rows
    Table(TableBlock),
}

/// A flushed pipe table. Data rows are kept exactly as parsed; rows
/// shorter than the header are tolerated and read as empty via [`cell`].
///
/// [`cell`]: TableBlock::cell
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TableBlock {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl TableBlock {
    /// Number of columns, as defined by the header row.
    pub fn columns(&self) -> usize {
        self.header.len()
    }

    /// Cell text at (row, column), empty for cells a short row lacks.
    pub fn cell(&self, row: usize, column: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|r| r.get(column))
            .map(String::as_str)
            .unwrap_or("")
    }
}

/// Render raw text into blocks, one pass, line by line.
pub fn render(text: &str) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut table: Vec<Vec<String>> = Vec::new();

    for line in text.lines() {
        let trimmed = line.trim();

        if trimmed.contains('|') && !is_rule_line(trimmed) {
            let cells = split_row(trimmed);
            if !cells.is_empty() {
                table.push(cells);
                continue;
            }
            // a pipe line with no usable cells classifies normally below
        } else if !table.is_empty() && is_rule_line(trimmed) {
            // separator between header and data rows: consumed, no block
            continue;
        }

        flush_table(&mut table, &mut blocks);
        blocks.push(classify(line, trimmed));
    }

    // end of input closes any still-open table exactly once
    flush_table(&mut table, &mut blocks);
    blocks
}

/// A table separator/rule line: only dashes, pipes and whitespace, with at
/// least one dash.
fn is_rule_line(trimmed: &str) -> bool {
    !trimmed.is_empty()
        && trimmed.contains('-')
        && trimmed.chars().all(|c| c == '-' || c == '|' || c.is_whitespace())
}

/// Split a table-row line into trimmed cells.
///
/// The split artifacts produced by a leading/trailing delimiter pipe are
/// always dropped. A line bounded by pipes on both ends keeps any
/// remaining empty cells (an intentionally empty edge or interior cell);
/// an unbounded line sheds empty boundary cells.
fn split_row(trimmed: &str) -> Vec<String> {
    let bounded = trimmed.len() > 1 && trimmed.starts_with('|') && trimmed.ends_with('|');

    let mut cells: Vec<String> = trimmed.split('|').map(|c| c.trim().to_string()).collect();
    if trimmed.starts_with('|') {
        cells.remove(0);
    }
    if trimmed.ends_with('|') && !cells.is_empty() {
        cells.pop();
    }

    if !bounded {
        while cells.first().is_some_and(|c| c.is_empty()) {
            cells.remove(0);
        }
        while cells.last().is_some_and(|c| c.is_empty()) {
            cells.pop();
        }
    }

    cells
}

/// Classify a non-table line. Prefix checks run most-specific first since
/// `#` prefixes `##` and `###`.
fn classify(line: &str, trimmed: &str) -> Block {
    if let Some(rest) = trimmed.strip_prefix("### ") {
        Block::Heading {
            level: 3,
            text: rest.to_string(),
        }
    } else if let Some(rest) = trimmed.strip_prefix("## ") {
        Block::Heading {
            level: 2,
            text: rest.to_string(),
        }
    } else if let Some(rest) = trimmed.strip_prefix("# ") {
        Block::Heading {
            level: 1,
            text: rest.to_string(),
        }
    } else if let Some(rest) = trimmed.strip_prefix("> ") {
        Block::Quote { text: rest.to_string() }
    } else if trimmed.starts_with("- ") || trimmed.starts_with("* ") {
        let text = trimmed
            .trim_start_matches(|c: char| c == '-' || c == '*' || c.is_whitespace())
            .to_string();
        Block::Bullet { text }
    } else if trimmed.is_empty() {
        Block::Blank
    } else {
        Block::Paragraph { text: line.to_string() }
    }
}

fn flush_table(buffer: &mut Vec<Vec<String>>, blocks: &mut Vec<Block>) {
    if buffer.is_empty() {
        return;
    }
    let mut rows = std::mem::take(buffer);
    let header = rows.remove(0);
    blocks.push(Block::Table(TableBlock { header, rows }));
}
