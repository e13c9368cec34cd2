//! Info pane: algorithm metadata, complexity notes, and the input being
//! checked.

use crate::algorithm::PALINDROME_INFO;
use crate::trace::Trace;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

fn label(text: &str) -> Span<'_> {
    Span::styled(
        text,
        Style::default()
            .fg(DEFAULT_THEME.secondary)
            .add_modifier(Modifier::BOLD),
    )
}

fn value(text: String) -> Span<'static> {
    Span::styled(text, Style::default().fg(DEFAULT_THEME.fg))
}

/// Render the info pane.
pub fn render_info_pane(
    frame: &mut Frame,
    area: Rect,
    trace: &Trace,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let info = &PALINDROME_INFO;
    let block = Block::default()
        .title(format!(" {} ", info.name))
        .borders(Borders::ALL)
        .border_style(border_style);

    let cleaned: String = trace.cleaned().iter().collect();
    let mut lines: Vec<Line> = vec![
        Line::from(vec![
            label("Category: "),
            value(info.category.to_string()),
            Span::raw("   "),
            label("Difficulty: "),
            Span::styled(info.difficulty, Style::default().fg(DEFAULT_THEME.success)),
        ]),
        Line::from(vec![
            label("Input:    "),
            Span::styled(
                format!("\"{}\"", trace.input()),
                Style::default().fg(DEFAULT_THEME.string),
            ),
        ]),
        Line::from(vec![
            label("Cleaned:  "),
            Span::styled(
                format!("\"{}\"", cleaned),
                Style::default().fg(DEFAULT_THEME.string),
            ),
            Span::raw("  "),
            Span::styled(
                format!("({} chars)", trace.cleaned().len()),
                Style::default().fg(DEFAULT_THEME.comment),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            label("Time:  "),
            Span::styled(
                info.complexity.time,
                Style::default().fg(DEFAULT_THEME.type_name),
            ),
            Span::raw("  "),
            Span::styled(
                info.complexity.time_explanation,
                Style::default().fg(DEFAULT_THEME.comment),
            ),
        ]),
        Line::from(vec![
            label("Space: "),
            Span::styled(
                info.complexity.space,
                Style::default().fg(DEFAULT_THEME.type_name),
            ),
            Span::raw("  "),
            Span::styled(
                info.complexity.space_explanation,
                Style::default().fg(DEFAULT_THEME.comment),
            ),
        ]),
        Line::from(""),
    ];

    for idea in info.key_ideas {
        lines.push(Line::from(vec![
            Span::styled("  • ", Style::default().fg(DEFAULT_THEME.primary)),
            Span::styled(*idea, Style::default().fg(DEFAULT_THEME.fg)),
        ]));
    }

    let total_lines = lines.len();
    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    if total_lines > visible_height {
        *scroll_offset = (*scroll_offset).min(total_lines - visible_height);
    } else {
        *scroll_offset = 0;
    }

    let visible_lines: Vec<Line> = lines
        .into_iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .collect();

    let paragraph = Paragraph::new(visible_lines).block(block);
    frame.render_widget(paragraph, area);
}
