//! Pseudocode pane: the algorithm's pseudocode with the line the current step
//! executes highlighted, in the style of a source view with a current-line
//! indicator.

use crate::algorithm::{pseudocode_line, PSEUDOCODE};
use crate::trace::Step;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Uppercase control words get keyword styling; everything else renders plain.
fn highlight_pseudocode(line: &str) -> Line<'_> {
    let mut spans = Vec::new();
    for (i, word) in line.split_inclusive(' ').enumerate() {
        let style = match word.trim_end_matches(&[' ', ':', '('][..]) {
            "FUNCTION" | "WHILE" | "IF" | "RETURN" => Style::default()
                .fg(DEFAULT_THEME.keyword)
                .add_modifier(Modifier::BOLD),
            "true" | "false" => Style::default().fg(DEFAULT_THEME.number),
            "isPalindrome" if i > 0 => Style::default().fg(DEFAULT_THEME.function),
            _ => Style::default().fg(DEFAULT_THEME.fg),
        };
        spans.push(Span::styled(word, style));
    }
    Line::from(spans)
}

/// Render the pseudocode pane, marking the line `step` corresponds to.
pub fn render_pseudocode_pane(
    frame: &mut Frame,
    area: Rect,
    step: Option<&Step>,
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

    let block = Block::default()
        .title(" Pseudocode ")
        .borders(Borders::ALL)
        .border_style(border_style);

    let current_line = step.map(|s| pseudocode_line(s.kind()));

    let total_lines = PSEUDOCODE.len();
    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    if total_lines > visible_height {
        *scroll_offset = (*scroll_offset).min(total_lines - visible_height);
    } else {
        *scroll_offset = 0;
    }

    let visible_lines: Vec<Line> = PSEUDOCODE
        .iter()
        .enumerate()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|(idx, text)| {
            let is_current = Some(idx) == current_line;
            let num_style = if is_current {
                Style::default()
                    .fg(DEFAULT_THEME.secondary)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(DEFAULT_THEME.comment)
            };

            let mut content_line = highlight_pseudocode(text);
            if is_current {
                for span in &mut content_line.spans {
                    span.style = span
                        .style
                        .patch(Style::default().bg(DEFAULT_THEME.current_line_bg));
                }
            }

            let marker = if is_current { "▶" } else { " " };
            let mut final_spans = vec![
                Span::styled(format!("{:3} ", idx + 1), num_style),
                Span::styled(marker, num_style),
                Span::raw(" "),
            ];
            final_spans.extend(content_line.spans);
            Line::from(final_spans)
        })
        .collect();

    let paragraph = Paragraph::new(visible_lines).block(block);
    frame.render_widget(paragraph, area);
}
