//! ANSI printer for rendered blocks
//!
//! Batch-mode counterpart of the TUI result pane: prints the same block
//! sequence to stdout with `colored` styling so `cst run` output reads the
//! way the interactive result does.

use colored::Colorize;

use crate::render::inline::visible_width;
use crate::render::{Block, TableBlock, bold_spans};

/// Print a block sequence to stdout.
pub fn print_blocks(blocks: &[Block]) {
    for block in blocks {
        match block {
            Block::Blank => println!(),
            Block::Table(table) => print!("{}", format_table(table)),
            other => println!("{}", format_block(other)),
        }
    }
}

/// Format a non-table block as one styled line.
fn format_block(block: &Block) -> String {
    match block {
        Block::Heading { level: 1, text } => format_inline(text).bold().underline().to_string(),
        Block::Heading { level: 2, text } => format_inline(text).bold().cyan().to_string(),
        Block::Heading { level: _, text } => format_inline(text).bold().to_string(),
        Block::Quote { text } => format!("{} {}", "▌".blue(), format_inline(text).italic()),
        Block::Bullet { text } => format!("  {} {}", "•".cyan(), format_inline(text)),
        Block::Paragraph { text } => format_inline(text),
        Block::Blank => String::new(),
        Block::Table(table) => format_table(table),
    }
}

/// Apply bold spans within a line.
fn format_inline(text: &str) -> String {
    bold_spans(text)
        .into_iter()
        .map(|span| {
            if span.bold {
                span.text.bold().to_string()
            } else {
                span.text
            }
        })
        .collect()
}

/// Format a table as an aligned grid. Short rows pad with empty cells.
fn format_table(table: &TableBlock) -> String {
    let widths = column_widths(table);
    let mut out = String::new();

    let header: Vec<String> = table
        .header
        .iter()
        .enumerate()
        .map(|(c, cell)| pad_cell(cell, widths[c]))
        .collect();
    out.push_str(&format!(" {}\n", header.join(" │ ").bold().cyan()));

    let rule: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
    out.push_str(&format!("{}\n", rule.join("┼").dimmed()));

    for r in 0..table.rows.len() {
        let cells: Vec<String> = (0..widths.len())
            .map(|c| pad_cell(table.cell(r, c), widths[c]))
            .collect();
        out.push_str(&format!(" {}\n", cells.join(" │ ")));
    }

    out
}

/// Widest visible cell per column; the header defines the column count.
fn column_widths(table: &TableBlock) -> Vec<usize> {
    let mut widths: Vec<usize> = table.header.iter().map(|h| visible_width(h)).collect();
    for r in 0..table.rows.len() {
        for (c, width) in widths.iter_mut().enumerate() {
            *width = (*width).max(visible_width(table.cell(r, c)));
        }
    }
    widths
}

fn pad_cell(text: &str, width: usize) -> String {
    let styled = format_inline(text);
    let pad = width.saturating_sub(visible_width(text));
    format!("{}{}", styled, " ".repeat(pad))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::render;

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn test_format_inline_keeps_all_text_when_unbalanced() {
        plain();
        assert_eq!(format_inline("**bold"), "bold");
        assert_eq!(format_inline("a **b** c"), "a b c");
    }

    #[test]
    fn test_format_table_aligns_columns() {
        plain();
        let blocks = render("| Dia | Tema |\n| --- | --- |\n| Seg | Dor |\n| Terça | Prova |");
        let Block::Table(table) = &blocks[0] else {
            panic!("expected table");
        };

        let out = format_table(table);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], " Dia   │ Tema ");
        assert!(lines[1].contains("┼"));
        assert_eq!(lines[2], " Seg   │ Dor  ");
        assert_eq!(lines[3], " Terça │ Prova");
    }

    #[test]
    fn test_format_table_pads_short_rows() {
        plain();
        let blocks = render("| A | B |\n| 1 |");
        let Block::Table(table) = &blocks[0] else {
            panic!("expected table");
        };

        let out = format_table(table);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[2], " 1 │  ");
    }

    #[test]
    fn test_format_block_kinds() {
        plain();
        assert_eq!(
            format_block(&Block::Bullet {
                text: "item um".to_string()
            }),
            "  • item um"
        );
        assert_eq!(
            format_block(&Block::Quote {
                text: "citação".to_string()
            }),
            "▌ citação"
        );
        assert_eq!(
            format_block(&Block::Paragraph {
                text: "texto".to_string()
            }),
            "texto"
        );
    }
}
