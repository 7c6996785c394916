//! Step narration pane
//!
//! Explains the current step in words: its kind and source line, the
//! description, the highlighted names, and the scalar values in scope.

use crate::memory::Value;
use crate::playback::PlaybackState;
use crate::snapshot::{Step, StepKind};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Data needed to render the narration pane
pub struct NarrationRenderData<'a> {
    pub step: Option<&'a Step>,
    pub state: PlaybackState,
    pub algorithm: &'a str,
}

fn kind_color(kind: StepKind) -> Color {
    match kind {
        StepKind::Declaration => DEFAULT_THEME.type_name,
        StepKind::Assignment => DEFAULT_THEME.primary,
        StepKind::Comparison => DEFAULT_THEME.secondary,
        StepKind::Loop => DEFAULT_THEME.keyword,
        StepKind::Swap => DEFAULT_THEME.swap,
        StepKind::Completion => DEFAULT_THEME.success,
    }
}

/// Render the narration pane
pub fn render_narration_pane(frame: &mut Frame, area: Rect, data: NarrationRenderData) {
    let block = Block::default()
        .title(format!(" {} ", data.algorithm))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border));

    let Some(step) = data.step else {
        let paragraph = Paragraph::new(vec![
            Line::from(Span::styled(
                "No steps were generated for this snippet.",
                Style::default().fg(DEFAULT_THEME.comment),
            )),
            Line::raw(""),
            Line::from(Span::styled(
                "Press n / p to try another sample.",
                Style::default().fg(DEFAULT_THEME.comment),
            )),
        ])
        .block(block)
        .wrap(Wrap { trim: false });
        frame.render_widget(paragraph, area);
        return;
    };

    let label = Style::default()
        .fg(DEFAULT_THEME.comment)
        .add_modifier(Modifier::BOLD);

    let line_text = if step.line == 0 {
        "-".to_string()
    } else {
        step.line.to_string()
    };

    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                format!(" {} ", step.kind),
                Style::default()
                    .bg(kind_color(step.kind))
                    .fg(Color::Black)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("  {}", step.id), Style::default().fg(DEFAULT_THEME.comment)),
            Span::styled(format!("  line {}", line_text), Style::default().fg(DEFAULT_THEME.comment)),
        ]),
        Line::raw(""),
        Line::from(Span::styled(
            step.description.clone(),
            Style::default().fg(DEFAULT_THEME.fg),
        )),
        Line::raw(""),
    ];

    if !step.highlights.is_empty() {
        lines.push(Line::from(vec![
            Span::styled("Focus: ", label),
            Span::styled(
                step.highlights.join(", "),
                Style::default().fg(DEFAULT_THEME.highlight),
            ),
        ]));
    }

    if let Some((a, b)) = step.swap_indices {
        lines.push(Line::from(vec![
            Span::styled("Swap: ", label),
            Span::styled(
                format!("positions {} and {}", a, b),
                Style::default().fg(DEFAULT_THEME.swap),
            ),
        ]));
    }

    let scalars: Vec<Span> = step
        .variables
        .iter()
        .filter_map(|(name, value)| match value {
            Value::Int(v) => Some((name, *v)),
            Value::Array(_) => None,
        })
        .flat_map(|(name, v)| {
            let style = if step.is_highlighted(name) {
                Style::default()
                    .fg(DEFAULT_THEME.highlight)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(DEFAULT_THEME.fg)
            };
            [
                Span::styled(format!("{} = ", name), style),
                Span::styled(format!("{}  ", v), Style::default().fg(DEFAULT_THEME.number)),
            ]
        })
        .collect();

    if !scalars.is_empty() {
        lines.push(Line::raw(""));
        lines.push(Line::from(Span::styled("Variables", label)));
        lines.push(Line::from(scalars));
    }

    if data.state == PlaybackState::Completed {
        lines.push(Line::raw(""));
        lines.push(Line::from(Span::styled(
            "✓ Playback complete",
            Style::default()
                .fg(DEFAULT_THEME.success)
                .add_modifier(Modifier::BOLD),
        )));
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}
