use super::Mode;

/// Per-mode countdown durations in whole seconds. All values > 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub focus_secs: u32,
    pub short_break_secs: u32,
    pub long_break_secs: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            focus_secs: 25 * 60,
            short_break_secs: 5 * 60,
            long_break_secs: 15 * 60,
        }
    }
}

impl Settings {
    /// Duration for a mode in seconds
    pub fn duration_for(&self, mode: Mode) -> u32 {
        match mode {
            Mode::Focus => self.focus_secs,
            Mode::ShortBreak => self.short_break_secs,
            Mode::LongBreak => self.long_break_secs,
        }
    }
}

/// Countdown state machine: mode, remaining seconds, running flag.
///
/// Pure state transitions only — scheduling the once-per-second `tick()` and
/// reacting to the completion signal belong to the caller.
#[derive(Debug)]
pub struct Countdown {
    mode: Mode,
    remaining: u32,
    running: bool,
    settings: Settings,
}

impl Countdown {
    pub fn new(settings: Settings) -> Self {
        Self {
            mode: Mode::Focus,
            remaining: settings.duration_for(Mode::Focus),
            running: false,
            settings,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn settings(&self) -> Settings {
        self.settings
    }

    /// Begin counting down. No effect when already running or expired.
    /// Returns true when the transition actually happened, so the caller
    /// knows to arm the tick schedule.
    pub fn start(&mut self) -> bool {
        if self.running || self.remaining == 0 {
            return false;
        }
        self.running = true;
        true
    }

    /// Stop counting without losing the remaining value. Idempotent.
    pub fn pause(&mut self) {
        self.running = false;
    }

    /// One whole-second step while running. Returns true exactly once per
    /// expiry: when remaining reaches 0 the countdown auto-stops.
    pub fn tick(&mut self) -> bool {
        if !self.running || self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        if self.remaining == 0 {
            self.running = false;
            return true;
        }
        false
    }

    /// Stop and restore the full duration for the current mode.
    pub fn reset(&mut self) {
        self.running = false;
        self.remaining = self.settings.duration_for(self.mode);
    }

    /// Switch phase. Re-selecting the active mode still resets remaining.
    pub fn change_mode(&mut self, mode: Mode) {
        self.running = false;
        self.mode = mode;
        self.remaining = self.settings.duration_for(mode);
    }

    /// Replace settings wholesale. When paused the displayed time follows the
    /// new duration immediately; an in-flight countdown is not retargeted.
    pub fn save_settings(&mut self, settings: Settings) {
        self.settings = settings;
        if !self.running {
            self.remaining = self.settings.duration_for(self.mode);
        }
    }

    /// Progress through the current phase as a percentage. Derived on every
    /// call, never stored.
    pub fn progress_percent(&self) -> f64 {
        let total = self.settings.duration_for(self.mode);
        if total == 0 {
            return 0.0;
        }
        (total.saturating_sub(self.remaining) as f64 / total as f64) * 100.0
    }

    /// Remaining time as MM:SS
    pub fn format_remaining(&self) -> String {
        let mins = self.remaining / 60;
        let secs = self.remaining % 60;
        format!("{:02}:{:02}", mins, secs)
    }
}
