//! Main TUI application state and logic

use crate::parser::tokenize;
use crate::playback::{PlaybackConfig, PlaybackController, PlaybackEvent, SpeedPreset};
use crate::samples::Sample;
use crate::simulator::{self, classify};
use crate::ui::panes::{self, SourceScrollState};
use crate::ui::slots::SlotLayout;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::cell::RefCell;
use std::io;
use std::rc::Rc;
use std::time::{Duration, Instant};
use tracing::{debug, info};

const POLL_INTERVAL: Duration = Duration::from_millis(50);
const SPACE_DEBOUNCE: Duration = Duration::from_millis(200);

/// The main application state
pub struct App {
    pub controller: PlaybackController,

    /// Sample being shown, when the snippet did not come from a file
    pub sample: Option<Sample>,

    /// The snippet being visualized
    pub source_code: String,
    pub algorithm: &'static str,

    /// Box identity for the pointer-targeted array
    pub slots: SlotLayout,

    /// Filled by the controller's reset hook, drained once per frame
    pending_reset: Rc<RefCell<Option<Vec<i64>>>>,

    pub source_scroll: SourceScrollState,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Instant,
}

impl App {
    /// Create a new app showing `source_code`
    pub fn new(source_code: String, sample: Option<Sample>, config: PlaybackConfig) -> Self {
        let pending_reset = Rc::new(RefCell::new(None));
        let hook_target = Rc::clone(&pending_reset);
        let controller = PlaybackController::new(config).with_reset_hook(Box::new(
            move |values: &[i64]| {
                *hook_target.borrow_mut() = Some(values.to_vec());
            },
        ));

        let mut app = App {
            controller,
            sample,
            source_code: String::new(),
            algorithm: "",
            slots: SlotLayout::new(),
            pending_reset,
            source_scroll: SourceScrollState::default(),
            should_quit: false,
            status_message: String::from("Ready!"),
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or_else(Instant::now),
        };
        app.load(source_code);
        app
    }

    /// Generate the trace for `source_code` and start playing it
    fn load(&mut self, source_code: String) {
        self.algorithm = classify(&tokenize(&source_code)).name();
        let trace = simulator::generate(&source_code);
        info!(algorithm = self.algorithm, steps = trace.len(), "loaded snippet");

        self.source_code = source_code;
        self.controller.set_trace(trace);
        self.slots.reset(self.controller.original_array_values());
        self.source_scroll = SourceScrollState::default();

        if self.controller.trace().is_empty() {
            self.status_message = "Nothing to visualize".to_string();
        } else {
            self.controller.play();
            self.status_message = "Playing...".to_string();
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            match self.controller.tick() {
                PlaybackEvent::Completed => {
                    self.status_message = "Playback complete".to_string();
                }
                PlaybackEvent::Restarted => {
                    self.status_message = "Restarted".to_string();
                }
                PlaybackEvent::Advanced | PlaybackEvent::None => {}
            }
            self.sync_slots();

            if event::poll(POLL_INTERVAL)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                        self.sync_slots();
                    }
                }
            }
        }

        Ok(())
    }

    /// Bring the box layout in line with the controller
    fn sync_slots(&mut self) {
        if let Some(values) = self.pending_reset.borrow_mut().take() {
            self.slots.reset(&values);
        }
        let now = Instant::now();
        let values = self
            .controller
            .entities()
            .arrays
            .first()
            .map(|array| array.values.as_slice())
            .unwrap_or_default();
        self.slots
            .update(values, self.controller.swap_animation(), now);
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(main_chunks[0]);

        let right_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(columns[1]);

        let step = self.controller.current();
        let title = self.sample.map_or("Source", Sample::title);

        panes::render_source_pane(
            frame,
            columns[0],
            title,
            &self.source_code,
            step.map_or(0, |s| s.line),
            &mut self.source_scroll,
        );

        let entities = self.controller.entities();
        panes::render_array_pane(
            frame,
            right_rows[0],
            panes::ArrayRenderData {
                arrays: &entities.arrays,
                pointers: &entities.pointers,
                step,
                slots: &self.slots,
                now: Instant::now(),
            },
        );

        panes::render_narration_pane(
            frame,
            right_rows[1],
            panes::NarrationRenderData {
                step,
                state: self.controller.state(),
                algorithm: self.algorithm,
            },
        );

        let speed_label = SpeedPreset::from_interval(self.controller.speed())
            .map_or("custom", SpeedPreset::label);
        panes::render_status_bar(
            frame,
            main_chunks[1],
            panes::StatusRenderData {
                message: &self.status_message,
                current_step: self.controller.current_step(),
                total_steps: self.controller.trace().len(),
                state: self.controller.state(),
                speed_label,
                auto_play: self.controller.auto_play(),
            },
        );
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Char(' ') => {
                // Debounced so key repeat does not flicker between states
                if self.last_space_press.elapsed() >= SPACE_DEBOUNCE {
                    self.last_space_press = Instant::now();
                    self.controller.toggle_play();
                    self.status_message = if self.controller.is_playing() {
                        "Playing...".to_string()
                    } else {
                        "Paused".to_string()
                    };
                }
            }
            KeyCode::Right => {
                self.controller.pause();
                self.status_message = if self.controller.next() {
                    "Stepped forward".to_string()
                } else {
                    "Already at the last step".to_string()
                };
            }
            KeyCode::Left => {
                self.controller.pause();
                self.slots.request_resync();
                self.status_message = if self.controller.previous() {
                    "Stepped backward".to_string()
                } else {
                    "Already at the first step".to_string()
                };
            }
            KeyCode::Home => {
                self.controller.pause();
                self.controller.set_step(0);
                self.slots.request_resync();
                self.status_message = "Jumped to start".to_string();
            }
            KeyCode::End => {
                self.controller.pause();
                let last = self.controller.trace().len().saturating_sub(1);
                self.controller.set_step(last);
                self.slots.request_resync();
                self.status_message = "Jumped to end".to_string();
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                self.controller.reset();
                self.status_message = "Reset".to_string();
            }
            KeyCode::Char('l') | KeyCode::Char('L') => {
                let auto_play = !self.controller.auto_play();
                self.controller.set_auto_play(auto_play);
                self.status_message = if auto_play {
                    "Loop on".to_string()
                } else {
                    "Loop off".to_string()
                };
            }
            KeyCode::Char('+') | KeyCode::Char('=') => self.change_speed(SpeedPreset::faster),
            KeyCode::Char('-') | KeyCode::Char('_') => self.change_speed(SpeedPreset::slower),
            KeyCode::Char('n') | KeyCode::Char('N') => self.change_sample(Sample::next),
            KeyCode::Char('p') | KeyCode::Char('P') => self.change_sample(Sample::prev),
            _ => {}
        }
    }

    fn change_speed(&mut self, step: fn(SpeedPreset) -> SpeedPreset) {
        let current = SpeedPreset::from_interval(self.controller.speed())
            .unwrap_or(SpeedPreset::Normal);
        let preset = step(current);
        self.controller.set_speed(preset.interval());
        self.status_message = format!("Speed {}", preset.label());
    }

    fn change_sample(&mut self, step: fn(Sample) -> Sample) {
        let Some(current) = self.sample else {
            self.status_message = "Showing a file; samples are unavailable".to_string();
            return;
        };
        let sample = step(current);
        debug!(sample = sample.id(), "switching sample");
        self.sample = Some(sample);
        self.load(sample.source().to_string());
    }
}
