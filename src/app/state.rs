use std::time::Instant;

use crossterm::event::{Event, KeyCode, KeyEventKind};
use tokio::sync::mpsc;

use crate::app::events::{AppEvent, DEMO_PLAYLIST, ResizeDebouncer, start_demo_task, start_frame_task};
use crate::cli::{Cli, ThemeArg};
use crate::engine::{AnimationSession, RunState, viewport_for_grid};
use crate::ui::theme::{ThemeMode, detect_theme_mode};

/// Host-side state: owns the animation session and translates terminal
/// events (keys, resize, focus) into session calls.
pub struct AppState {
    pub running: bool,
    pub session: AnimationSession,
    pub condition: String,
    user_paused: bool,
    theme_arg: ThemeArg,
    theme_override: Option<ThemeMode>,
    resize_debounce: ResizeDebouncer,
    epoch: Instant,
}

impl AppState {
    #[must_use]
    pub fn new(cli: &Cli, cols: u16, rows: u16) -> Self {
        let session = AnimationSession::new(
            viewport_for_grid(cols, rows),
            cols,
            rows,
            cli.animation_config(),
        );
        Self {
            running: true,
            session,
            condition: cli.initial_condition(),
            user_paused: false,
            theme_arg: cli.theme,
            theme_override: None,
            resize_debounce: ResizeDebouncer::default(),
            epoch: Instant::now(),
        }
    }

    /// Start background tasks and the initial animation.
    pub fn bootstrap(&mut self, tx: &mpsc::Sender<AppEvent>, cli: &Cli) {
        start_frame_task(tx.clone(), cli.fps);
        if cli.demo {
            start_demo_task(tx.clone(), cli.demo_interval);
        } else {
            let now = self.now_ms();
            self.session.start(&self.condition.clone(), now);
        }
    }

    /// Theme read fresh on every render; never cached across frames.
    #[must_use]
    pub fn theme_mode(&self) -> ThemeMode {
        if let Some(mode) = self.theme_override {
            return mode;
        }
        match self.theme_arg {
            ThemeArg::Dark => ThemeMode::Dark,
            ThemeArg::Light => ThemeMode::Light,
            ThemeArg::Auto => detect_theme_mode(),
        }
    }

    fn now_ms(&self) -> u64 {
        self.epoch.elapsed().as_millis() as u64
    }

    pub fn handle_event(&mut self, event: AppEvent, tx: &mpsc::Sender<AppEvent>) {
        match event {
            AppEvent::TickFrame => {
                let now = self.now_ms();
                self.session.frame(now);
            }
            AppEvent::SetCondition(code) => self.set_condition(code),
            AppEvent::ResizeSettled { cols, rows } => {
                self.session
                    .resize(viewport_for_grid(cols, rows), cols, rows);
            }
            AppEvent::Input(event) => self.handle_input(event, tx),
        }
    }

    fn set_condition(&mut self, code: String) {
        let now = self.now_ms();
        self.session.start(&code, now);
        self.condition = code;
        self.user_paused = false;
    }

    fn handle_input(&mut self, event: Event, tx: &mpsc::Sender<AppEvent>) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.running = false,
                KeyCode::Char(' ') => self.toggle_pause(),
                KeyCode::Char('t') => self.toggle_theme(),
                KeyCode::Char(c @ '1'..='7') => {
                    let idx = (c as usize) - ('1' as usize);
                    self.set_condition(DEMO_PLAYLIST[idx].to_string());
                }
                _ => {}
            },
            Event::Resize(cols, rows) => {
                self.resize_debounce.schedule(tx.clone(), cols, rows);
            }
            // focus is the terminal's visibility signal: hidden pauses,
            // visible resumes unless the user paused deliberately
            Event::FocusLost => self.session.pause(),
            Event::FocusGained => {
                if !self.user_paused {
                    let now = self.now_ms();
                    self.session.resume(now);
                }
            }
            _ => {}
        }
    }

    fn toggle_pause(&mut self) {
        match self.session.run_state() {
            RunState::Running => {
                self.session.pause();
                self.user_paused = true;
            }
            RunState::Paused => {
                let now = self.now_ms();
                self.session.resume(now);
                self.user_paused = false;
            }
            RunState::Stopped => {}
        }
    }

    fn toggle_theme(&mut self) {
        let current = self.theme_mode();
        self.theme_override = Some(match current {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        });
    }
}
