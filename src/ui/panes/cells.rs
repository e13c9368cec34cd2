//! Character cell pane: the cleaned sequence rendered as a row of boxes with
//! the two pointers marked beneath it.
//!
//! Color roles follow the web-style convention for two-pointer visualizers:
//! pointer cells blue, the active comparison yellow, a mismatch red, and the
//! whole row green once the check succeeds. Long sequences wrap onto
//! additional rows.

use crate::trace::{Step, Trace};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use rustc_hash::FxHashSet;

/// Width of one rendered cell, without the gap that follows it.
const CELL_WIDTH: usize = 3;
/// Gap between cells.
const CELL_GAP: usize = 1;

/// Style for the cell at `index` given the current step.
fn cell_style(index: usize, step: &Step, highlights: &FxHashSet<usize>) -> Style {
    let is_pointer = index == step.left || index == step.right;
    let is_highlighted = highlights.contains(&index);

    if step.result == Some(true) {
        return Style::default()
            .bg(DEFAULT_THEME.success)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD);
    }
    if step.result == Some(false) && is_highlighted {
        return Style::default()
            .bg(DEFAULT_THEME.error)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD);
    }
    if step.comparing && is_highlighted {
        return Style::default()
            .bg(DEFAULT_THEME.compare)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD);
    }
    if is_pointer {
        return Style::default()
            .bg(DEFAULT_THEME.primary)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD);
    }
    Style::default().bg(DEFAULT_THEME.cell_bg).fg(DEFAULT_THEME.fg)
}

/// Marker drawn beneath the cell at `index`, if it carries a pointer.
fn pointer_marker(index: usize, step: &Step) -> Option<Span<'static>> {
    let style = |color| Style::default().fg(color).add_modifier(Modifier::BOLD);
    if index == step.left && index == step.right {
        Some(Span::styled(" ^ ", style(DEFAULT_THEME.secondary)))
    } else if index == step.left {
        Some(Span::styled(" L ", style(DEFAULT_THEME.pointer_left)))
    } else if index == step.right {
        Some(Span::styled(" R ", style(DEFAULT_THEME.pointer_right)))
    } else {
        None
    }
}

/// Render the character cells pane for the current step.
pub fn render_cells_pane(frame: &mut Frame, area: Rect, trace: &Trace, step: &Step) {
    let block = Block::default()
        .title(" Characters ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));

    let chars = trace.cleaned();
    if chars.is_empty() {
        let paragraph = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "  (nothing left after cleaning)",
                Style::default().fg(DEFAULT_THEME.comment),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "  An empty string is trivially a palindrome.",
                Style::default().fg(DEFAULT_THEME.success),
            )),
        ])
        .block(block);
        frame.render_widget(paragraph, area);
        return;
    }

    let highlights: FxHashSet<usize> = step.highlights.iter().copied().collect();

    // Wrap the sequence into rows that fit the pane width.
    let inner_width = area.width.saturating_sub(4).max(CELL_WIDTH as u16) as usize;
    let per_row = (inner_width + CELL_GAP) / (CELL_WIDTH + CELL_GAP);
    let per_row = per_row.max(1);

    let mut lines: Vec<Line> = vec![Line::from("")];
    for (row_index, row) in chars.chunks(per_row).enumerate() {
        let row_start = row_index * per_row;

        let mut cell_spans: Vec<Span> = vec![Span::raw(" ")];
        let mut marker_spans: Vec<Span> = vec![Span::raw(" ")];
        for (offset, &c) in row.iter().enumerate() {
            let index = row_start + offset;
            cell_spans.push(Span::styled(
                format!(" {} ", c),
                cell_style(index, step, &highlights),
            ));
            cell_spans.push(Span::raw(" "));
            marker_spans.push(pointer_marker(index, step).unwrap_or_else(|| Span::raw("   ")));
            marker_spans.push(Span::raw(" "));
        }
        lines.push(Line::from(cell_spans));
        lines.push(Line::from(marker_spans));
        lines.push(Line::from(""));
    }

    // Verdict badge once the trace reaches a terminal step.
    if let Some(result) = step.result {
        let (text, color) = if result {
            ("  Is a palindrome!", DEFAULT_THEME.success)
        } else {
            ("  Not a palindrome", DEFAULT_THEME.error)
        };
        lines.push(Line::from(Span::styled(
            text,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )));
    }

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}
