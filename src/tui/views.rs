//! TUI views and rendering

use std::time::Instant;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block as Border, Borders, Clear, List, ListItem, Paragraph, Wrap};

use super::state::{AppState, Focus, GenerationState, InteractionMode};
use crate::catalog::{field_label, guide_for};
use crate::render::inline::visible_width;
use crate::render::{Block, TableBlock, bold_spans};

/// Main render function
pub fn render(state: &AppState, frame: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Main content
            Constraint::Length(3), // Footer
        ])
        .split(frame.area());

    render_header(state, frame, chunks[0]);
    render_body(state, frame, chunks[1]);
    render_footer(state, frame, chunks[2]);

    if state.interaction_mode == InteractionMode::Help {
        render_help_overlay(frame, chunks[1]);
    }
}

/// Render the header bar: app name plus busy/copied status
fn render_header(state: &AppState, frame: &mut Frame, area: Rect) {
    let now = Instant::now();
    let mut spans = vec![
        Span::styled(
            "Content Studio ",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::raw("│ "),
    ];

    match state.generation {
        GenerationState::InFlight { started, .. } => {
            let elapsed = now.duration_since(started).as_secs();
            spans.push(Span::styled(
                format!("{} ({}s)", state.ticker_message().unwrap_or("Gerando..."), elapsed),
                Style::default().fg(Color::Yellow),
            ));
        }
        GenerationState::Idle => {
            if state.copied_visible(now) {
                spans.push(Span::styled("Copiado!", Style::default().fg(Color::Green)));
            } else if state.result.is_some() {
                spans.push(Span::styled("Resultado pronto", Style::default().fg(Color::Green)));
            } else {
                spans.push(Span::styled(
                    "Escolha uma metodologia",
                    Style::default().fg(Color::DarkGray),
                ));
            }
        }
    }

    let header = Paragraph::new(vec![Line::from(spans)])
        .block(Border::default().borders(Borders::ALL).title(" Status "));
    frame.render_widget(header, area);
}

/// Render the main body: methodology list on the left, form and result on
/// the right
fn render_body(state: &AppState, frame: &mut Frame, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(32), Constraint::Percentage(68)])
        .split(area);

    render_methodology_list(state, frame, columns[0]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(columns[1]);

    render_form_area(state, frame, right[0]);
    render_result(state, frame, right[1]);
}

fn pane_style(active: bool) -> Style {
    if active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    }
}

/// Render the methodology list
fn render_methodology_list(state: &AppState, frame: &mut Frame, area: Rect) {
    let items: Vec<ListItem> = state
        .catalog
        .all()
        .iter()
        .enumerate()
        .map(|(i, methodology)| {
            let selected = state.selected_methodology == Some(i);
            let marker = if selected { "● " } else { "  " };

            let content = Line::from(vec![
                Span::styled(marker, Style::default().fg(Color::Green)),
                Span::raw(format!("{} ", methodology.icon)),
                Span::styled(
                    methodology.title,
                    if selected {
                        Style::default().add_modifier(Modifier::BOLD)
                    } else {
                        Style::default()
                    },
                ),
            ]);

            if i == state.methodology_selection.selected_index && state.focus == Focus::Methodologies {
                ListItem::new(content).style(Style::default().bg(Color::DarkGray).fg(Color::White))
            } else {
                ListItem::new(content)
            }
        })
        .collect();

    let list = List::new(items).block(
        Border::default()
            .borders(Borders::ALL)
            .title(" Metodologias ")
            .border_style(pane_style(state.focus == Focus::Methodologies)),
    );

    frame.render_widget(list, area);
}

/// Render the variant list + field form for the selected methodology
fn render_form_area(state: &AppState, frame: &mut Frame, area: Rect) {
    let Some(methodology) = state.methodology() else {
        let placeholder = Paragraph::new("Escolha uma metodologia ao lado para iniciar a construção.")
            .style(Style::default().fg(Color::DarkGray))
            .wrap(Wrap { trim: true })
            .block(Border::default().borders(Borders::ALL).title(" Execução "));
        frame.render_widget(placeholder, area);
        return;
    };

    if methodology.multi_prompt {
        let halves = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(area);
        render_variant_list(state, frame, halves[0]);
        render_form(state, frame, halves[1]);
    } else {
        render_form(state, frame, area);
    }
}

fn render_variant_list(state: &AppState, frame: &mut Frame, area: Rect) {
    let Some(methodology) = state.methodology() else {
        return;
    };

    let items: Vec<ListItem> = methodology
        .prompts
        .iter()
        .enumerate()
        .map(|(i, prompt)| {
            let selected = state.selected_variant == Some(i);
            let marker = if selected { "● " } else { "  " };
            let content = Line::from(vec![
                Span::styled(marker, Style::default().fg(Color::Green)),
                Span::raw(prompt.label),
            ]);

            if i == state.variant_selection.selected_index && state.focus == Focus::Variants {
                ListItem::new(content).style(Style::default().bg(Color::DarkGray).fg(Color::White))
            } else {
                ListItem::new(content)
            }
        })
        .collect();

    let list = List::new(items).block(
        Border::default()
            .borders(Borders::ALL)
            .title(" Prompts ")
            .border_style(pane_style(state.focus == Focus::Variants)),
    );

    frame.render_widget(list, area);
}

/// Render the field form with guidance for the active field
fn render_form(state: &AppState, frame: &mut Frame, area: Rect) {
    let mut lines: Vec<Line> = Vec::new();

    if let Some(methodology) = state.methodology() {
        lines.push(Line::from(vec![
            Span::raw(format!("{} ", methodology.icon)),
            Span::styled(methodology.title, Style::default().add_modifier(Modifier::BOLD)),
        ]));
        lines.push(Line::from(Span::styled(
            methodology.description,
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
        )));
        lines.push(Line::from(""));
    }

    if state.fields.is_empty() {
        lines.push(Line::from(Span::styled(
            "Escolha um prompt para liberar os campos.",
            Style::default().fg(Color::DarkGray),
        )));
    }

    let editing = state.interaction_mode == InteractionMode::FieldInput;
    for (i, field) in state.fields.iter().enumerate() {
        let active = i == state.active_field && state.focus == Focus::Form;
        let label_style = if active {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        lines.push(Line::from(Span::styled(
            format!("{}:", field_label(&field.name)),
            label_style,
        )));

        let cursor = if active && editing { "█" } else { "" };
        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::raw(field.value.clone()),
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
        ]));
    }

    // guidance for the active field
    if let Some(field) = state.fields.get(state.active_field)
        && let Some(guide) = guide_for(&field.name)
        && state.focus == Focus::Form
    {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            guide.explanation,
            Style::default().fg(Color::DarkGray),
        )));
    }

    let form = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Border::default()
            .borders(Borders::ALL)
            .title(" Execução ")
            .border_style(pane_style(state.focus == Focus::Form)),
    );

    frame.render_widget(form, area);
}

/// Render the result pane: ticker while busy, blocks otherwise
fn render_result(state: &AppState, frame: &mut Frame, area: Rect) {
    let content: Vec<Line> = if state.generation.is_busy() {
        vec![
            Line::from(""),
            Line::from(Span::styled(
                state.ticker_message().unwrap_or("Gerando..."),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::ITALIC),
            )),
        ]
    } else if state.blocks.is_empty() {
        vec![Line::from(Span::styled(
            "O resultado aparecerá aqui.",
            Style::default().fg(Color::DarkGray),
        ))]
    } else {
        state.blocks.iter().flat_map(block_lines).collect()
    };

    let result = Paragraph::new(content)
        .wrap(Wrap { trim: false })
        .scroll((state.result_scroll, 0))
        .block(
            Border::default()
                .borders(Borders::ALL)
                .title(" Resultado ")
                .border_style(pane_style(state.focus == Focus::Result)),
        );

    frame.render_widget(result, area);
}

/// Convert one render block into styled terminal lines
fn block_lines(block: &Block) -> Vec<Line<'static>> {
    match block {
        Block::Heading { level: 1, text } => vec![inline_line(
            text,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )],
        Block::Heading { level: 2, text } => vec![inline_line(
            text,
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )],
        Block::Heading { level: _, text } => {
            vec![inline_line(text, Style::default().add_modifier(Modifier::BOLD))]
        }
        Block::Quote { text } => {
            let mut line = inline_line(text, Style::default().add_modifier(Modifier::ITALIC));
            line.spans.insert(0, Span::styled("▌ ", Style::default().fg(Color::Blue)));
            vec![line]
        }
        Block::Bullet { text } => {
            let mut line = inline_line(text, Style::default());
            line.spans.insert(0, Span::styled("  • ", Style::default().fg(Color::Cyan)));
            vec![line]
        }
        Block::Paragraph { text } => vec![inline_line(text, Style::default())],
        Block::Blank => vec![Line::from("")],
        Block::Table(table) => table_lines(table),
    }
}

/// Apply bold spans within a line on top of a base style
fn inline_line(text: &str, base: Style) -> Line<'static> {
    let spans: Vec<Span<'static>> = bold_spans(text)
        .into_iter()
        .map(|span| {
            let style = if span.bold { base.add_modifier(Modifier::BOLD) } else { base };
            Span::styled(span.text, style)
        })
        .collect();
    Line::from(spans)
}

/// Format a table as aligned lines; short rows pad with empty cells
fn table_lines(table: &TableBlock) -> Vec<Line<'static>> {
    let mut widths: Vec<usize> = table.header.iter().map(|h| visible_width(h)).collect();
    for r in 0..table.rows.len() {
        for (c, width) in widths.iter_mut().enumerate() {
            *width = (*width).max(visible_width(table.cell(r, c)));
        }
    }

    let mut lines = Vec::new();

    let header_cells: Vec<String> = table
        .header
        .iter()
        .enumerate()
        .map(|(c, cell)| pad_cell(cell, widths[c]))
        .collect();
    lines.push(Line::from(Span::styled(
        format!(" {}", header_cells.join(" │ ")),
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    )));

    let rule: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
    lines.push(Line::from(Span::styled(
        rule.join("┼"),
        Style::default().fg(Color::DarkGray),
    )));

    for r in 0..table.rows.len() {
        let cells: Vec<String> = (0..widths.len())
            .map(|c| pad_cell(table.cell(r, c), widths[c]))
            .collect();
        lines.push(Line::from(format!(" {}", cells.join(" │ "))));
    }

    lines
}

fn pad_cell(text: &str, width: usize) -> String {
    let visible: String = bold_spans(text).into_iter().map(|s| s.text).collect();
    let pad = width.saturating_sub(visible.chars().count());
    format!("{}{}", visible, " ".repeat(pad))
}

/// Render help overlay
fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 70, area);

    frame.render_widget(Clear, popup_area);

    let key_style = Style::default().fg(Color::Cyan);
    let help_text = vec![
        Line::from(Span::styled(
            "Atalhos de Teclado",
            Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )),
        Line::from(""),
        Line::from(vec![Span::styled("q, Ctrl+c  ", key_style), Span::raw("Sair")]),
        Line::from(vec![Span::styled("?, F1      ", key_style), Span::raw("Ajuda")]),
        Line::from(vec![
            Span::styled("Tab, ←/→   ", key_style),
            Span::raw("Alternar painel"),
        ]),
        Line::from(vec![
            Span::styled("↑/↓, j/k   ", key_style),
            Span::raw("Navegar / rolar"),
        ]),
        Line::from(vec![
            Span::styled("Enter      ", key_style),
            Span::raw("Selecionar / editar campo"),
        ]),
        Line::from(""),
        Line::from(vec![Span::styled("s          ", key_style), Span::raw("Gerar estratégia")]),
        Line::from(vec![
            Span::styled("e / E      ", key_style),
            Span::raw("Exportar .md / .json"),
        ]),
        Line::from(vec![
            Span::styled("y          ", key_style),
            Span::raw("Copiar resultado"),
        ]),
        Line::from(vec![
            Span::styled("x, Del     ", key_style),
            Span::raw("Limpar resultado"),
        ]),
    ];

    let help = Paragraph::new(help_text)
        .block(
            Border::default()
                .borders(Borders::ALL)
                .title(" Ajuda ")
                .style(Style::default().bg(Color::DarkGray)),
        )
        .wrap(Wrap { trim: true });

    frame.render_widget(help, popup_area);
}

/// Render the footer bar: errors and notices override the key hints
fn render_footer(state: &AppState, frame: &mut Frame, area: Rect) {
    let line = if let Some(error) = &state.error_message {
        Line::from(Span::styled(error.clone(), Style::default().fg(Color::Red)))
    } else if let Some(notice) = &state.notice {
        Line::from(Span::styled(notice.clone(), Style::default().fg(Color::Green)))
    } else {
        let key_style = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
        Line::from(vec![
            Span::styled(" s", key_style),
            Span::raw(" Gerar "),
            Span::styled(" e", key_style),
            Span::raw(" Exportar "),
            Span::styled(" y", key_style),
            Span::raw(" Copiar "),
            Span::styled(" x", key_style),
            Span::raw(" Limpar "),
            Span::styled(" ?", key_style),
            Span::raw(" Ajuda "),
            Span::styled(" q", key_style),
            Span::raw(" Sair "),
        ])
    };

    let footer = Paragraph::new(line).block(Border::default().borders(Borders::ALL));
    frame.render_widget(footer, area);
}

/// Helper to create a centered rect
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render;

    #[test]
    fn test_block_lines_table_alignment() {
        let blocks = render::render("| A | Bx |\n| --- | --- |\n| 1 | 2 |");
        let render::Block::Table(table) = &blocks[0] else {
            panic!("expected table");
        };

        let lines = table_lines(table);
        assert_eq!(lines.len(), 3);
        // header, rule, one data row
        assert!(lines[0].spans[0].content.contains("A"));
        assert!(lines[1].spans[0].content.contains("┼"));
    }

    #[test]
    fn test_block_lines_bullet_has_marker() {
        let lines = block_lines(&Block::Bullet {
            text: "item".to_string(),
        });
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].spans[0].content, "  • ");
    }

    #[test]
    fn test_inline_line_marks_bold_spans() {
        let line = inline_line("um **dois**", Style::default());
        assert_eq!(line.spans.len(), 2);
        assert!(line.spans[1].style.add_modifier.contains(Modifier::BOLD));
    }
}
