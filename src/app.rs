use crate::domain::{Countdown, Mode, Settings, TaskList, UiMode};
use crate::{audio, motivation, ticker};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;
use std::time::Instant;

/// Input form state for adding a task
#[derive(Debug, Clone, Default)]
pub struct TaskFormState {
    pub text: String,
}

/// Input form state for editing the per-mode durations. Fields hold minute
/// values as digit-only buffers; non-digit input never reaches them.
#[derive(Debug, Clone)]
pub struct SettingsFormState {
    pub focus_mins: String,
    pub short_break_mins: String,
    pub long_break_mins: String,
    pub editing_field: usize, // 0 = focus, 1 = short break, 2 = long break
}

impl SettingsFormState {
    fn from_settings(settings: Settings) -> Self {
        Self {
            focus_mins: (settings.focus_secs / 60).to_string(),
            short_break_mins: (settings.short_break_secs / 60).to_string(),
            long_break_mins: (settings.long_break_secs / 60).to_string(),
            editing_field: 0,
        }
    }

    fn field_mut(&mut self) -> &mut String {
        match self.editing_field {
            0 => &mut self.focus_mins,
            1 => &mut self.short_break_mins,
            _ => &mut self.long_break_mins,
        }
    }
}

/// Transient motivation quote state. Empty text means "not yet fetched".
#[derive(Debug, Default)]
pub struct QuoteState {
    pub text: String,
    pub loading: bool,
}

/// Main application state. Owns every piece of mutable state; views receive
/// a shared reference and never mutate.
pub struct AppState {
    pub countdown: Countdown,
    pub tasks: TaskList,
    pub selected_task: usize,
    pub ui_mode: UiMode,
    pub task_form: Option<TaskFormState>,
    pub settings_form: Option<SettingsFormState>,
    pub quote: QuoteState,

    // The one recurring-tick handle: armed on start, cleared on pause,
    // reset, mode change, and expiry. Dropped with the app on teardown.
    next_tick_deadline: Option<Instant>,

    quote_rx: Option<Receiver<String>>,
    audio_probed: bool,
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        Self {
            countdown: Countdown::new(settings),
            tasks: TaskList::new(),
            selected_task: 0,
            ui_mode: UiMode::Normal,
            task_form: None,
            settings_form: None,
            quote: QuoteState::default(),
            next_tick_deadline: None,
            quote_rx: None,
            audio_probed: false,
        }
    }

    // --- Timer -----------------------------------------------------------

    /// Start or pause the countdown. Starting replaces any stale tick
    /// schedule; the first start also probes the audio backend.
    pub fn toggle_timer(&mut self, now: Instant) {
        if self.countdown.is_running() {
            self.countdown.pause();
            self.next_tick_deadline = None;
        } else if self.countdown.start() {
            if !self.audio_probed {
                audio::warmup();
                self.audio_probed = true;
            }
            self.next_tick_deadline = Some(now + ticker::SECOND);
        }
    }

    pub fn reset_timer(&mut self) {
        self.countdown.reset();
        self.next_tick_deadline = None;
    }

    pub fn change_mode(&mut self, mode: Mode) {
        self.countdown.change_mode(mode);
        self.next_tick_deadline = None;
    }

    /// Fire every whole second that has elapsed since the last tick. The
    /// catch-up loop keeps the countdown honest across slow frames. Exactly
    /// one chime per expiry.
    pub fn on_tick(&mut self, now: Instant) {
        while let Some(deadline) = self.next_tick_deadline {
            if now < deadline {
                break;
            }
            if self.countdown.tick() {
                self.next_tick_deadline = None;
                audio::play_chime();
            } else {
                self.next_tick_deadline = Some(deadline + ticker::SECOND);
            }
        }
    }

    #[cfg(test)]
    pub fn tick_scheduled(&self) -> bool {
        self.next_tick_deadline.is_some()
    }

    // --- Settings form ---------------------------------------------------

    pub fn open_settings(&mut self) {
        self.settings_form = Some(SettingsFormState::from_settings(self.countdown.settings()));
        self.ui_mode = UiMode::EditingSettings;
    }

    pub fn settings_form_next_field(&mut self) {
        if let Some(form) = &mut self.settings_form {
            form.editing_field = (form.editing_field + 1) % 3;
        }
    }

    /// Accept a keystroke into the active field. Anything but a digit is
    /// silently ignored.
    pub fn settings_form_add_char(&mut self, c: char) {
        if !c.is_ascii_digit() {
            return;
        }
        if let Some(form) = &mut self.settings_form {
            form.field_mut().push(c);
        }
    }

    pub fn settings_form_backspace(&mut self) {
        if let Some(form) = &mut self.settings_form {
            form.field_mut().pop();
        }
    }

    /// Save the form: each field converts minutes to seconds; a field that
    /// does not parse to a positive number keeps the previous duration.
    pub fn submit_settings_form(&mut self) {
        if let Some(form) = self.settings_form.take() {
            let current = self.countdown.settings();
            let settings = Settings {
                focus_secs: parse_minutes(&form.focus_mins, current.focus_secs),
                short_break_secs: parse_minutes(&form.short_break_mins, current.short_break_secs),
                long_break_secs: parse_minutes(&form.long_break_mins, current.long_break_secs),
            };
            self.countdown.save_settings(settings);
            self.ui_mode = UiMode::Normal;
        }
    }

    pub fn cancel_settings_form(&mut self) {
        self.settings_form = None;
        self.ui_mode = UiMode::Normal;
    }

    // --- Task list -------------------------------------------------------

    pub fn start_add_task(&mut self) {
        self.task_form = Some(TaskFormState::default());
        self.ui_mode = UiMode::AddingTask;
    }

    pub fn task_form_add_char(&mut self, c: char) {
        if let Some(form) = &mut self.task_form {
            form.text.push(c);
        }
    }

    pub fn task_form_backspace(&mut self) {
        if let Some(form) = &mut self.task_form {
            form.text.pop();
        }
    }

    /// Submit the add-task form. Empty text falls through as a no-op.
    pub fn submit_task_form(&mut self) {
        if let Some(form) = self.task_form.take() {
            self.tasks.add(&form.text);
            self.ui_mode = UiMode::Normal;
        }
    }

    pub fn cancel_task_form(&mut self) {
        self.task_form = None;
        self.ui_mode = UiMode::Normal;
    }

    pub fn move_selection_up(&mut self) {
        if self.selected_task > 0 {
            self.selected_task -= 1;
        }
    }

    pub fn move_selection_down(&mut self) {
        if self.selected_task + 1 < self.tasks.len() {
            self.selected_task += 1;
        }
    }

    pub fn toggle_selected_task(&mut self) {
        if let Some(task) = self.tasks.get(self.selected_task) {
            let id = task.id;
            self.tasks.toggle(id);
        }
    }

    pub fn delete_selected_task(&mut self) {
        if let Some(task) = self.tasks.get(self.selected_task) {
            let id = task.id;
            self.tasks.delete(id);
            if self.selected_task >= self.tasks.len() && self.selected_task > 0 {
                self.selected_task -= 1;
            }
        }
    }

    // --- Motivation ------------------------------------------------------

    /// Kick off a background fetch. A request already in flight is simply
    /// superseded; its late result is dropped with the old receiver.
    pub fn request_motivation(&mut self) {
        let (tx, rx) = mpsc::channel();
        self.quote_rx = Some(rx);
        self.quote.loading = true;

        thread::spawn(move || {
            // The receiver may be gone by the time we finish; that's fine.
            let _ = tx.send(motivation::fetch());
        });
    }

    /// Drain the fetch channel. Called once per event-loop iteration.
    pub fn poll_motivation(&mut self) {
        let Some(rx) = &self.quote_rx else {
            return;
        };
        match rx.try_recv() {
            Ok(text) => {
                self.quote.text = text;
                self.quote.loading = false;
                self.quote_rx = None;
            }
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Disconnected) => {
                // Fetch thread died without delivering; degrade like a
                // failed request.
                self.quote.text = motivation::FALLBACK_ERROR.to_string();
                self.quote.loading = false;
                self.quote_rx = None;
            }
        }
    }
}

fn parse_minutes(buf: &str, fallback_secs: u32) -> u32 {
    match buf.trim().parse::<u32>() {
        Ok(mins) if mins > 0 => mins.saturating_mul(60),
        _ => fallback_secs,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Mode;
    use std::time::Duration;

    fn create_test_app() -> AppState {
        AppState::new(Settings::default())
    }

    #[test]
    fn test_app_state_new() {
        let app = create_test_app();
        assert_eq!(app.countdown.mode(), Mode::Focus);
        assert_eq!(app.countdown.remaining(), 1500);
        assert_eq!(app.ui_mode, UiMode::Normal);
        assert!(app.tasks.is_empty());
        assert!(app.quote.text.is_empty());
        assert!(!app.tick_scheduled());
    }

    #[test]
    fn test_toggle_timer_arms_and_clears_schedule() {
        let mut app = create_test_app();
        let t0 = Instant::now();

        app.toggle_timer(t0);
        assert!(app.countdown.is_running());
        assert!(app.tick_scheduled());

        app.toggle_timer(t0);
        assert!(!app.countdown.is_running());
        assert!(!app.tick_scheduled());
    }

    #[test]
    fn test_on_tick_catches_up_elapsed_seconds() {
        let mut app = create_test_app();
        let t0 = Instant::now();

        app.toggle_timer(t0);
        app.on_tick(t0 + Duration::from_secs(3));
        assert_eq!(app.countdown.remaining(), 1497);

        // No double-counting on a fast follow-up frame
        app.on_tick(t0 + Duration::from_millis(3200));
        assert_eq!(app.countdown.remaining(), 1497);
    }

    #[test]
    fn test_pause_preserves_remaining_across_frames() {
        let mut app = create_test_app();
        let t0 = Instant::now();

        app.toggle_timer(t0);
        app.on_tick(t0 + Duration::from_secs(2));
        app.toggle_timer(t0 + Duration::from_secs(2));

        // Time passing while paused changes nothing
        app.on_tick(t0 + Duration::from_secs(60));
        assert_eq!(app.countdown.remaining(), 1498);
    }

    #[test]
    fn test_expiry_clears_schedule() {
        let mut app = AppState::new(Settings {
            focus_secs: 2,
            ..Settings::default()
        });
        let t0 = Instant::now();

        app.toggle_timer(t0);
        app.on_tick(t0 + Duration::from_secs(2));

        assert_eq!(app.countdown.remaining(), 0);
        assert!(!app.countdown.is_running());
        assert!(!app.tick_scheduled());

        // Starting an expired countdown is a no-op
        app.toggle_timer(t0 + Duration::from_secs(3));
        assert!(!app.countdown.is_running());
        assert!(!app.tick_scheduled());
    }

    #[test]
    fn test_reset_and_mode_change_clear_schedule() {
        let mut app = create_test_app();
        let t0 = Instant::now();

        app.toggle_timer(t0);
        app.reset_timer();
        assert!(!app.tick_scheduled());
        assert_eq!(app.countdown.remaining(), 1500);

        app.toggle_timer(t0);
        app.change_mode(Mode::ShortBreak);
        assert!(!app.tick_scheduled());
        assert_eq!(app.countdown.remaining(), 300);
    }

    #[test]
    fn test_settings_form_ignores_non_digits() {
        let mut app = create_test_app();
        app.open_settings();

        app.settings_form_add_char('4');
        app.settings_form_add_char('x');
        app.settings_form_add_char('-');
        app.settings_form_add_char('5');

        let form = app.settings_form.as_ref().unwrap();
        assert_eq!(form.focus_mins, "2545");
    }

    #[test]
    fn test_settings_form_save_converts_minutes() {
        let mut app = create_test_app();
        app.open_settings();

        let form = app.settings_form.as_mut().unwrap();
        form.focus_mins = "10".to_string();
        app.submit_settings_form();

        assert_eq!(app.countdown.settings().focus_secs, 600);
        // Not running, so the displayed time follows immediately
        assert_eq!(app.countdown.remaining(), 600);
        assert_eq!(app.ui_mode, UiMode::Normal);
    }

    #[test]
    fn test_settings_form_invalid_field_keeps_previous_value() {
        let mut app = create_test_app();
        app.open_settings();

        let form = app.settings_form.as_mut().unwrap();
        form.focus_mins = String::new();
        form.short_break_mins = "0".to_string();
        form.long_break_mins = "20".to_string();
        app.submit_settings_form();

        let settings = app.countdown.settings();
        assert_eq!(settings.focus_secs, 1500);
        assert_eq!(settings.short_break_secs, 300);
        assert_eq!(settings.long_break_secs, 1200);
    }

    #[test]
    fn test_settings_save_while_running_leaves_countdown() {
        let mut app = create_test_app();
        let t0 = Instant::now();
        app.toggle_timer(t0);
        app.on_tick(t0 + Duration::from_secs(1));

        app.open_settings();
        let form = app.settings_form.as_mut().unwrap();
        form.focus_mins = "10".to_string();
        app.submit_settings_form();

        assert_eq!(app.countdown.remaining(), 1499);
        assert!(app.countdown.is_running());
    }

    #[test]
    fn test_task_form_round_trip() {
        let mut app = create_test_app();
        app.start_add_task();
        assert_eq!(app.ui_mode, UiMode::AddingTask);

        for c in "Write report".chars() {
            app.task_form_add_char(c);
        }
        app.submit_task_form();

        assert_eq!(app.tasks.len(), 1);
        assert_eq!(app.tasks.as_slice()[0].text, "Write report");
        assert_eq!(app.ui_mode, UiMode::Normal);
    }

    #[test]
    fn test_task_form_empty_submit_is_noop() {
        let mut app = create_test_app();
        app.start_add_task();
        app.task_form_add_char(' ');
        app.submit_task_form();

        assert!(app.tasks.is_empty());
        assert_eq!(app.ui_mode, UiMode::Normal);
    }

    #[test]
    fn test_selection_follows_deletion() {
        let mut app = create_test_app();
        app.tasks.add("one");
        app.tasks.add("two");
        app.move_selection_down();

        app.delete_selected_task();
        assert_eq!(app.tasks.len(), 1);
        assert_eq!(app.selected_task, 0);

        app.delete_selected_task();
        assert!(app.tasks.is_empty());
        assert_eq!(app.selected_task, 0);
    }

    #[test]
    fn test_toggle_selected_task() {
        let mut app = create_test_app();
        app.tasks.add("one");
        app.toggle_selected_task();
        assert!(app.tasks.as_slice()[0].completed);
        app.toggle_selected_task();
        assert!(!app.tasks.as_slice()[0].completed);
    }

    #[test]
    fn test_motivation_dead_fetch_degrades_to_fallback() {
        let mut app = create_test_app();

        // Simulate a fetch thread that died without delivering
        let (tx, rx) = mpsc::channel::<String>();
        drop(tx);
        app.quote_rx = Some(rx);
        app.quote.loading = true;

        app.poll_motivation();
        assert_eq!(app.quote.text, motivation::FALLBACK_ERROR);
        assert!(!app.quote.loading);
    }

    #[test]
    fn test_motivation_delivery() {
        let mut app = create_test_app();
        let (tx, rx) = mpsc::channel::<String>();
        app.quote_rx = Some(rx);
        app.quote.loading = true;

        // Nothing yet: still loading
        app.poll_motivation();
        assert!(app.quote.loading);

        tx.send("Begin now.".to_string()).unwrap();
        app.poll_motivation();
        assert_eq!(app.quote.text, "Begin now.");
        assert!(!app.quote.loading);
    }
}
