//! Input dialog rendering
//!
//! The input state itself lives in the `Modal` variants on the stack; these
//! helpers only draw it. A prompt is a single line with a cursor block, a
//! form is two labelled fields with one focused.

use crate::components::centered_popup;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Draw a single-line text prompt
pub fn draw_prompt(frame: &mut Frame, area: Rect, title: &str, hint: &str, value: &str) {
    let width = (area.width.saturating_sub(8)).min(64).max(30);
    let popup_area = centered_popup(area, width, 7);

    frame.render_widget(Clear, popup_area);

    let content = vec![
        Line::from(""),
        Line::from(vec![
            Span::raw("  "),
            Span::styled(value, Style::default().fg(Color::White)),
            Span::styled("█", Style::default().fg(Color::Cyan)),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            format!("  {}", hint),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", title))
            .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .border_style(Style::default().fg(Color::Cyan)),
    );

    frame.render_widget(paragraph, popup_area);
}

/// Draw a two-field form; `focus_second` marks which field has the cursor
pub fn draw_form(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    fields: [(&str, &str); 2],
    focus_second: bool,
) {
    let width = (area.width.saturating_sub(8)).min(56).max(30);
    let popup_area = centered_popup(area, width, 9);

    frame.render_widget(Clear, popup_area);

    let field_line = |label: &str, value: &str, focused: bool| {
        let label_style = if focused {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let mut spans = vec![
            Span::styled(format!("  {:10}", label), label_style),
            Span::styled(value.to_string(), Style::default().fg(Color::White)),
        ];
        if focused {
            spans.push(Span::styled("█", Style::default().fg(Color::Cyan)));
        }
        Line::from(spans)
    };

    let content = vec![
        Line::from(""),
        field_line(fields[0].0, fields[0].1, !focus_second),
        Line::from(""),
        field_line(fields[1].0, fields[1].1, focus_second),
        Line::from(""),
        Line::from(Span::styled(
            "  Tab switch field   Enter save   Esc cancel",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", title))
            .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .border_style(Style::default().fg(Color::Cyan)),
    );

    frame.render_widget(paragraph, popup_area);
}
