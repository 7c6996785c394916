//! Array pane rendering
//!
//! Draws every array entity as a row of boxes, with index labels and the
//! pointer markers underneath. The array the pointers target is drawn from
//! the [`SlotLayout`], so boxes keep their identity and visibly travel when
//! two positions are swapped. Other arrays are drawn straight from their
//! values.
//!
//! # Layout
//!
//! ```text
//!   rows 0-2   lift zone for boxes in flight
//!   rows 3-5   resting boxes
//!   row  6     position labels
//!   rows 7..   one row per pointer
//! ```

use crate::playback::{ArrayEntity, PointerEntity};
use crate::snapshot::Step;
use crate::ui::slots::{InFlight, SlotLayout};
use crate::ui::theme::{entity_color, DEFAULT_THEME};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use std::time::Instant;

const BOX_WIDTH: usize = 7;
const STRIDE: usize = BOX_WIDTH + 1;
const LIFT_ROWS: usize = 3;
const LEFT_MARGIN: usize = 1;

/// Data needed to render the array pane
pub struct ArrayRenderData<'a> {
    pub arrays: &'a [ArrayEntity],
    pub pointers: &'a [PointerEntity],
    pub step: Option<&'a Step>,
    pub slots: &'a SlotLayout,
    pub now: Instant,
}

/// Render the array pane
pub fn render_array_pane(frame: &mut Frame, area: Rect, data: ArrayRenderData) {
    let block = Block::default()
        .title(" Visualization ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border));

    if data.arrays.is_empty() {
        let paragraph = Paragraph::new("(no arrays in this step)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let highlighted = data
        .step
        .map(|s| s.highlighted_indices.as_slice())
        .unwrap_or(&[]);
    let mut lines: Vec<Line> = Vec::new();

    for (k, array) in data.arrays.iter().enumerate() {
        if k > 0 {
            lines.push(Line::raw(""));
        }
        lines.push(Line::from(Span::styled(
            format!(" {} ", array.name),
            Style::default()
                .fg(entity_color(array.color))
                .add_modifier(Modifier::BOLD),
        )));

        // Pointers and box identity belong to the array the pointers target
        let is_target = k == 0;
        let mut grid = Grid::new(LEFT_MARGIN + array.values.len() * STRIDE + 24, LIFT_ROWS + 4);

        if is_target && data.slots.len() == array.values.len() {
            for (slot, flight) in data.slots.boxes(data.now) {
                let (x, lift) = match flight {
                    Some(flight) => flight_offset(flight),
                    None => (column(slot.physical_index), 0),
                };
                let style = if slot.is_animating {
                    Style::default()
                        .fg(DEFAULT_THEME.swap)
                        .add_modifier(Modifier::BOLD)
                } else {
                    box_style(array, slot.physical_index, highlighted)
                };
                grid.draw_box(x, LIFT_ROWS - lift, slot.logical_value, style);
            }
        } else {
            for (idx, &value) in array.values.iter().enumerate() {
                let style = box_style(array, idx, highlighted);
                grid.draw_box(column(idx), LIFT_ROWS, value, style);
            }
        }

        for idx in 0..array.values.len() {
            let label = format!("[{}]", idx);
            let style = if highlighted.contains(&idx) {
                Style::default().fg(DEFAULT_THEME.highlight)
            } else {
                Style::default().fg(DEFAULT_THEME.comment)
            };
            let x = column(idx) + (BOX_WIDTH.saturating_sub(label.len())) / 2;
            grid.put_str(x, LIFT_ROWS + 3, &label, style);
        }

        lines.extend(grid.into_lines());

        if is_target {
            for pointer in data.pointers {
                lines.push(pointer_line(pointer, array.values.len()));
            }
        }
    }

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}

fn column(idx: usize) -> usize {
    LEFT_MARGIN + idx * STRIDE
}

/// Horizontal position and lift of a box part way through a swap
fn flight_offset(flight: InFlight) -> (usize, usize) {
    let from = column(flight.from) as f32;
    let to = column(flight.to) as f32;
    let x = from + (to - from) * flight.progress;
    // Rise for the first half of the journey, settle during the second
    let lift = (std::f32::consts::PI * flight.progress).sin() * LIFT_ROWS as f32;
    (x.round().max(0.0) as usize, (lift.round() as usize).min(LIFT_ROWS))
}

fn box_style(array: &ArrayEntity, idx: usize, highlighted: &[usize]) -> Style {
    if highlighted.contains(&idx) {
        Style::default()
            .fg(DEFAULT_THEME.highlight)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(entity_color(array.color))
    }
}

fn pointer_line(pointer: &PointerEntity, len: usize) -> Line<'static> {
    let style = Style::default().fg(entity_color(pointer.color));
    match usize::try_from(pointer.index).ok().filter(|idx| *idx < len) {
        Some(idx) => {
            let pad = column(idx) + BOX_WIDTH / 2;
            Line::from(vec![
                Span::raw(" ".repeat(pad)),
                Span::styled(format!("▲ {} = {}", pointer.name, pointer.index), style),
            ])
        }
        None => Line::from(vec![
            Span::raw(" ".repeat(LEFT_MARGIN)),
            Span::styled(format!("· {} = {}", pointer.name, pointer.index), style),
            Span::styled(
                " (outside array)",
                Style::default().fg(DEFAULT_THEME.comment),
            ),
        ]),
    }
}

/// Fixed-size character canvas; later writes overwrite earlier ones
struct Grid {
    cells: Vec<Vec<(char, Style)>>,
}

impl Grid {
    fn new(width: usize, height: usize) -> Self {
        Grid {
            cells: vec![vec![(' ', Style::default()); width]; height],
        }
    }

    fn put_str(&mut self, x: usize, y: usize, text: &str, style: Style) {
        let Some(row) = self.cells.get_mut(y) else {
            return;
        };
        for (offset, c) in text.chars().enumerate() {
            if let Some(cell) = row.get_mut(x + offset) {
                *cell = (c, style);
            }
        }
    }

    fn draw_box(&mut self, x: usize, y: usize, value: i64, style: Style) {
        let inner = BOX_WIDTH - 2;
        let mut text = value.to_string();
        if text.chars().count() > inner {
            text = format!("{}…", &text[..inner - 1]);
        }
        self.put_str(x, y, &format!("┌{}┐", "─".repeat(inner)), style);
        self.put_str(x, y + 1, &format!("│{:^width$}│", text, width = inner), style);
        self.put_str(x, y + 2, &format!("└{}┘", "─".repeat(inner)), style);
    }

    /// Convert to lines, merging runs of equal style into spans
    fn into_lines(self) -> Vec<Line<'static>> {
        self.cells
            .into_iter()
            .map(|row| {
                let mut spans: Vec<Span<'static>> = Vec::new();
                let mut run = String::new();
                let mut run_style = Style::default();
                for (c, style) in row {
                    if style != run_style && !run.is_empty() {
                        spans.push(Span::styled(std::mem::take(&mut run), run_style));
                    }
                    run_style = style;
                    run.push(c);
                }
                if !run.is_empty() {
                    spans.push(Span::styled(run, run_style));
                }
                Line::from(spans)
            })
            .collect()
    }
}
