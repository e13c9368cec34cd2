//! Narration pane: the step descriptions emitted so far, newest last.

use crate::trace::Trace;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph},
    Frame,
};

/// Render the narration log up to and including the current step.
///
/// The app sets `scroll_offset` to `usize::MAX` to pin the view to the
/// bottom; the pane clamps it into range.
pub fn render_narration_pane(
    frame: &mut Frame,
    area: Rect,
    trace: &Trace,
    current_index: usize,
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
        .title(" Narration ")
        .borders(Borders::ALL)
        .border_style(border_style);

    if trace.is_empty() {
        let paragraph = Paragraph::new("(no trace loaded)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let block = block.padding(Padding::new(1, 0, 0, 0));
    let all_items: Vec<ListItem> = trace
        .steps()
        .iter()
        .take(current_index + 1)
        .map(|step| {
            let is_current = step.index == current_index;
            let num_style = if is_current {
                Style::default()
                    .fg(DEFAULT_THEME.secondary)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(DEFAULT_THEME.comment)
            };
            let text_style = match step.result {
                Some(true) => Style::default().fg(DEFAULT_THEME.success),
                Some(false) => Style::default().fg(DEFAULT_THEME.error),
                None if is_current => Style::default()
                    .fg(DEFAULT_THEME.fg)
                    .add_modifier(Modifier::BOLD),
                None => Style::default().fg(DEFAULT_THEME.fg),
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:3}. ", step.index + 1), num_style),
                Span::styled(step.description.clone(), text_style),
            ]))
        })
        .collect();

    let total_items = all_items.len();
    let visible_height = area.height.saturating_sub(2).max(1) as usize;

    if total_items > visible_height {
        let max_scroll = total_items - visible_height;
        *scroll_offset = (*scroll_offset).min(max_scroll);
    } else {
        *scroll_offset = 0;
    }

    let visible_items: Vec<ListItem> = all_items
        .into_iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .collect();

    let list = List::new(visible_items).block(block);
    frame.render_widget(list, area);
}
