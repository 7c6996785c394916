// Playback controller: position in the trace, timed advance, swap coordination

use super::clock::{Clock, SystemClock};
use super::entities::RenderEntities;
use super::swap::{SwapAnimation, SwapCoordinator};
use crate::snapshot::{Step, StepKind, StepTrace};
use std::time::{Duration, Instant};
use tracing::debug;

/// Interval of the 1× preset
pub const BASE_INTERVAL: Duration = Duration::from_millis(1000);

/// Discrete playback speeds offered to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeedPreset {
    Half,
    Normal,
    Double,
    Quadruple,
    Ten,
}

impl SpeedPreset {
    pub const ALL: [SpeedPreset; 5] = [
        SpeedPreset::Half,
        SpeedPreset::Normal,
        SpeedPreset::Double,
        SpeedPreset::Quadruple,
        SpeedPreset::Ten,
    ];

    /// Delay between two automatic steps
    pub fn interval(self) -> Duration {
        match self {
            SpeedPreset::Half => Duration::from_millis(2000),
            SpeedPreset::Normal => BASE_INTERVAL,
            SpeedPreset::Double => Duration::from_millis(500),
            SpeedPreset::Quadruple => Duration::from_millis(250),
            SpeedPreset::Ten => Duration::from_millis(100),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SpeedPreset::Half => "0.5x",
            SpeedPreset::Normal => "1x",
            SpeedPreset::Double => "2x",
            SpeedPreset::Quadruple => "4x",
            SpeedPreset::Ten => "10x",
        }
    }

    /// Parse `0.5x`, `2x`, `10` and the like
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        let text = text.trim_end_matches(|c: char| c == 'x' || c == 'X');
        match text {
            "0.5" | ".5" => Some(SpeedPreset::Half),
            "1" => Some(SpeedPreset::Normal),
            "2" => Some(SpeedPreset::Double),
            "4" => Some(SpeedPreset::Quadruple),
            "10" => Some(SpeedPreset::Ten),
            _ => None,
        }
    }

    /// Preset whose interval is exactly `interval`
    pub fn from_interval(interval: Duration) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.interval() == interval)
    }

    fn position(self) -> usize {
        Self::ALL.iter().position(|p| *p == self).unwrap_or(1)
    }

    pub fn faster(self) -> Self {
        Self::ALL[(self.position() + 1).min(Self::ALL.len() - 1)]
    }

    pub fn slower(self) -> Self {
        Self::ALL[self.position().saturating_sub(1)]
    }
}

/// Initial playback settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackConfig {
    pub speed: Duration,
    /// Restart from the beginning after completion
    pub auto_play: bool,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        PlaybackConfig {
            speed: BASE_INTERVAL,
            auto_play: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    Idle,
    Playing,
    Completed,
}

/// What a call to [`PlaybackController::tick`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackEvent {
    None,
    Advanced,
    Completed,
    Restarted,
}

/// Called on every reset with the trace's original array values
pub type ResetHook = Box<dyn FnMut(&[i64])>;

/// Walks a step trace and keeps the render entities in sync with it
///
/// The controller is poll-driven: the host loop calls [`tick`] often and the
/// controller decides from its [`Clock`] whether a step is due.
///
/// [`tick`]: PlaybackController::tick
pub struct PlaybackController {
    trace: StepTrace,
    current_step: usize,
    state: PlaybackState,
    speed: Duration,
    auto_play: bool,
    swaps: SwapCoordinator,

    /// First array of the first step, captured once per trace
    original_array_values: Vec<i64>,

    entities: RenderEntities,
    clock: Box<dyn Clock>,

    /// Time of the last automatic advance (or of play())
    last_advance: Instant,
    completed_at: Option<Instant>,
    reset_hook: Option<ResetHook>,
}

impl PlaybackController {
    pub fn new(config: PlaybackConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }

    pub fn with_clock(config: PlaybackConfig, clock: impl Clock + 'static) -> Self {
        let now = clock.now();
        PlaybackController {
            trace: StepTrace::new(),
            current_step: 0,
            state: PlaybackState::Idle,
            speed: config.speed,
            auto_play: config.auto_play,
            swaps: SwapCoordinator::new(),
            original_array_values: Vec::new(),
            entities: RenderEntities::default(),
            clock: Box::new(clock),
            last_advance: now,
            completed_at: None,
            reset_hook: None,
        }
    }

    /// Register the renderer's resynchronization callback
    pub fn with_reset_hook(mut self, hook: ResetHook) -> Self {
        self.reset_hook = Some(hook);
        self
    }

    /// Install a new trace and rewind to its first step
    pub fn set_trace(&mut self, trace: StepTrace) {
        self.original_array_values = trace
            .first()
            .and_then(|step| step.variables.first_array())
            .map(|(_, values)| values.to_vec())
            .unwrap_or_default();
        debug!(
            steps = trace.len(),
            original = ?self.original_array_values,
            "installed step trace"
        );

        self.trace = trace;
        self.current_step = 0;
        self.state = PlaybackState::Idle;
        self.completed_at = None;
        self.swaps.clear();
        self.update_from_step();
    }

    /// Jump to step `n`; out-of-range jumps are ignored
    pub fn set_step(&mut self, n: usize) {
        if n >= self.trace.len() {
            return;
        }
        self.current_step = n;
        self.update_from_step();
    }

    /// Advance one step; returns false at the end of the trace
    pub fn next(&mut self) -> bool {
        if self.current_step + 1 >= self.trace.len() {
            return false;
        }
        let new_step = self.current_step + 1;

        if let Some(step) = self.trace.get(new_step) {
            if let (StepKind::Swap, Some((index1, index2))) = (step.kind, step.swap_indices) {
                let now = self.clock.now();
                self.swaps.trigger(index1, index2, now);
            }
        }

        self.current_step = new_step;
        self.update_from_step();
        true
    }

    /// Go back one step; returns false at the start of the trace
    pub fn previous(&mut self) -> bool {
        if self.current_step == 0 {
            return false;
        }
        self.current_step -= 1;
        self.update_from_step();
        true
    }

    /// Start automatic playback, restarting from the top once finished
    pub fn play(&mut self) {
        if self.trace.is_empty() {
            return;
        }
        if self.state == PlaybackState::Completed || self.is_at_end() {
            self.reset();
        }
        self.state = PlaybackState::Playing;
        self.last_advance = self.clock.now();
    }

    pub fn pause(&mut self) {
        if self.state == PlaybackState::Playing {
            self.state = PlaybackState::Idle;
        }
    }

    pub fn toggle_play(&mut self) {
        if self.state == PlaybackState::Playing {
            self.pause();
        } else {
            self.play();
        }
    }

    /// Rewind to step 0 and restore the original array values
    pub fn reset(&mut self) {
        debug!(original = ?self.original_array_values, "resetting playback");
        self.current_step = 0;
        self.state = PlaybackState::Idle;
        self.completed_at = None;
        self.swaps.clear();

        self.entities = self
            .trace
            .first()
            .map(RenderEntities::from_step)
            .unwrap_or_default();
        if !self.original_array_values.is_empty() {
            if let Some(array) = self.entities.arrays.first_mut() {
                array.values = self.original_array_values.clone();
            }
        }

        if let Some(hook) = self.reset_hook.as_mut() {
            hook(&self.original_array_values);
        }
    }

    /// Ignores a zero interval
    pub fn set_speed(&mut self, speed: Duration) {
        if speed.is_zero() {
            return;
        }
        self.speed = speed;
    }

    pub fn set_auto_play(&mut self, auto_play: bool) {
        self.auto_play = auto_play;
    }

    /// Recompute render entities from the current step
    ///
    /// While a swap animation is active, arrays keep their current values and
    /// only pointers are refreshed, so the renderer's motion is not overwritten.
    pub fn update_from_step(&mut self) {
        let Some(step) = self.trace.get(self.current_step) else {
            self.entities = RenderEntities::default();
            return;
        };
        let derived = RenderEntities::from_step(step);
        if self.swaps.is_active() {
            self.entities.pointers = derived.pointers;
        } else {
            self.entities = derived;
        }
    }

    /// Drive timers: expire swap records, advance, complete, auto-restart
    pub fn tick(&mut self) -> PlaybackEvent {
        let now = self.clock.now();

        if self.swaps.expire(now) {
            // The record is gone, so arrays may follow the snapshot again
            self.update_from_step();
        }

        match self.state {
            PlaybackState::Idle => PlaybackEvent::None,
            PlaybackState::Playing => {
                if now.saturating_duration_since(self.last_advance) < self.speed {
                    return PlaybackEvent::None;
                }
                self.last_advance = now;
                if self.next() {
                    PlaybackEvent::Advanced
                } else {
                    debug!(steps = self.trace.len(), "playback completed");
                    self.state = PlaybackState::Completed;
                    self.completed_at = Some(now);
                    PlaybackEvent::Completed
                }
            }
            PlaybackState::Completed => {
                let Some(completed_at) = self.completed_at else {
                    return PlaybackEvent::None;
                };
                if !self.auto_play
                    || now.saturating_duration_since(completed_at) < self.speed.mul_f32(1.5)
                {
                    return PlaybackEvent::None;
                }
                debug!("auto-restarting playback");
                self.reset();
                self.state = PlaybackState::Playing;
                self.last_advance = now;
                PlaybackEvent::Restarted
            }
        }
    }

    // ========== Getters for the renderer ==========

    pub fn trace(&self) -> &StepTrace {
        &self.trace
    }

    pub fn current_step(&self) -> usize {
        self.current_step
    }

    /// The step at the current position
    pub fn current(&self) -> Option<&Step> {
        self.trace.get(self.current_step)
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state == PlaybackState::Playing
    }

    pub fn is_at_end(&self) -> bool {
        !self.trace.is_empty() && self.current_step + 1 >= self.trace.len()
    }

    pub fn speed(&self) -> Duration {
        self.speed
    }

    pub fn auto_play(&self) -> bool {
        self.auto_play
    }

    pub fn swap_animation(&self) -> Option<&SwapAnimation> {
        self.swaps.current()
    }

    pub fn original_array_values(&self) -> &[i64] {
        &self.original_array_values
    }

    pub fn entities(&self) -> &RenderEntities {
        &self.entities
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speed_preset_parse() {
        assert_eq!(SpeedPreset::parse("0.5x"), Some(SpeedPreset::Half));
        assert_eq!(SpeedPreset::parse("2x"), Some(SpeedPreset::Double));
        assert_eq!(SpeedPreset::parse("10"), Some(SpeedPreset::Ten));
        assert_eq!(SpeedPreset::parse("3x"), None);
    }

    #[test]
    fn test_speed_preset_stepping_clamps() {
        assert_eq!(SpeedPreset::Ten.faster(), SpeedPreset::Ten);
        assert_eq!(SpeedPreset::Half.slower(), SpeedPreset::Half);
        assert_eq!(SpeedPreset::Normal.faster(), SpeedPreset::Double);
        assert_eq!(
            SpeedPreset::from_interval(Duration::from_millis(250)),
            Some(SpeedPreset::Quadruple)
        );
    }

    #[test]
    fn test_empty_trace_never_plays() {
        let mut controller = PlaybackController::new(PlaybackConfig::default());
        controller.set_trace(StepTrace::new());
        controller.play();
        assert_eq!(controller.state(), PlaybackState::Idle);
        assert!(!controller.next());
        assert!(controller.entities().arrays.is_empty());
    }
}
