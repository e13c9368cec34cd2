//! Code pane: reference implementations of the algorithm in several
//! languages, with lightweight syntax highlighting.
//!
//! The highlighter is a character-by-character tokenizer, not a real lexer:
//! good enough for short reference snippets across Python, JavaScript, Java,
//! and C++.

use crate::algorithm::implementations::SAMPLES;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

fn keyword_style(word: &str, is_function: bool) -> Style {
    match word {
        // Types across the displayed languages
        "int" | "char" | "bool" | "boolean" | "void" | "str" | "String" | "string" | "const"
        | "let" | "var" | "std" => Style::default().fg(DEFAULT_THEME.type_name),
        // Control flow and declaration keywords
        "def" | "function" | "public" | "static" | "return" | "while" | "if" | "else" | "for"
        | "in" | "not" | "and" | "or" => Style::default()
            .fg(DEFAULT_THEME.keyword)
            .add_modifier(Modifier::BOLD),
        "True" | "False" | "true" | "false" | "None" | "null" => {
            Style::default().fg(DEFAULT_THEME.number)
        }
        _ => {
            if is_function {
                Style::default().fg(DEFAULT_THEME.function)
            } else if word.chars().all(|c| c.is_ascii_digit()) && !word.is_empty() {
                Style::default().fg(DEFAULT_THEME.number)
            } else {
                Style::default().fg(DEFAULT_THEME.fg)
            }
        }
    }
}

/// Highlight one line of sample code.
fn highlight_code(line: &str) -> Line<'_> {
    let mut spans = Vec::new();
    let mut current_word = String::new();

    let chars: Vec<char> = line.chars().collect();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        // Line comments: // or #
        let is_comment = c == '#' || (c == '/' && i + 1 < chars.len() && chars[i + 1] == '/');
        if is_comment {
            if !current_word.is_empty() {
                spans.push(Span::raw(current_word.clone()));
                current_word.clear();
            }
            let rest: String = chars[i..].iter().collect();
            spans.push(Span::styled(
                rest,
                Style::default().fg(DEFAULT_THEME.comment),
            ));
            break;
        }

        // String literals, single or double quoted
        if c == '"' || c == '\'' {
            if !current_word.is_empty() {
                spans.push(Span::raw(current_word.clone()));
                current_word.clear();
            }
            let quote = c;
            let mut end = i + 1;
            while end < chars.len() && chars[end] != quote {
                if chars[end] == '\\' {
                    end += 2;
                } else {
                    end += 1;
                }
            }
            if end < chars.len() {
                end += 1;
            }
            let literal: String = chars[i..end.min(chars.len())].iter().collect();
            spans.push(Span::styled(
                literal,
                Style::default().fg(DEFAULT_THEME.string),
            ));
            i = end;
            continue;
        }

        // Delimiters end the current word
        if !c.is_alphanumeric() && c != '_' {
            if !current_word.is_empty() {
                let is_func = c == '(';
                spans.push(Span::styled(
                    current_word.clone(),
                    keyword_style(&current_word, is_func),
                ));
                current_word.clear();
            }
            let style = match c {
                '{' | '}' | '(' | ')' | '[' | ']' => Style::default().fg(DEFAULT_THEME.primary),
                _ => Style::default().fg(DEFAULT_THEME.fg),
            };
            spans.push(Span::styled(c.to_string(), style));
            i += 1;
            continue;
        }

        current_word.push(c);
        i += 1;
    }

    if !current_word.is_empty() {
        let style = keyword_style(&current_word, false);
        spans.push(Span::styled(current_word, style));
    }

    Line::from(spans)
}

/// Render the code pane showing the sample for `language_index`.
pub fn render_code_pane(
    frame: &mut Frame,
    area: Rect,
    language_index: usize,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let sample = &SAMPLES[language_index % SAMPLES.len()];

    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(format!(" Code: {} ", sample.language))
        .borders(Borders::ALL)
        .border_style(border_style);

    let lines: Vec<&str> = sample.code.lines().collect();
    let total_lines = lines.len();
    let visible_height = area.height.saturating_sub(2).max(1) as usize;

    if total_lines > visible_height {
        *scroll_offset = (*scroll_offset).min(total_lines - visible_height);
    } else {
        *scroll_offset = 0;
    }

    let visible_lines: Vec<Line> = lines
        .iter()
        .enumerate()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|(idx, line)| {
            let mut final_spans = vec![Span::styled(
                format!("{:3} ", idx + 1),
                Style::default().fg(DEFAULT_THEME.comment),
            )];
            final_spans.extend(highlight_code(line).spans);
            Line::from(final_spans)
        })
        .collect();

    let paragraph = Paragraph::new(visible_lines).block(block);
    frame.render_widget(paragraph, area);
}
