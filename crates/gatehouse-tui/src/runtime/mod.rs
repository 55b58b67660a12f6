//! Screen runtime - owns the terminal, runs the event loop, executes effects.
//!
//! This is the "Elm runtime" boundary: all side effects happen here. The
//! reducer stays pure and produces effects; this module executes them.
//!
//! ## Inbox Pattern
//!
//! Provider calls run as spawned tokio tasks. Handlers are pure async
//! functions that return a `UiEvent`; the runtime sends each result to the
//! inbox channel and drains the inbox every frame. Only one submission cycle
//! is logically active at a time (the reducer's `loading` gate); the runtime
//! never cancels an in-flight call.

mod handlers;

use std::future::Future;
use std::io::Stdout;

use anyhow::{Context, Result};
use crossterm::event;
use gatehouse_core::auth::{AuthClient, Session};
use gatehouse_core::config::Config;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tokio::sync::mpsc;

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::state::AppState;
use crate::{render, terminal, update};

/// Tick cadence while a submission is in flight (drives the spinner).
pub const ACTIVE_POLL_DURATION: std::time::Duration = std::time::Duration::from_millis(100);

/// Poll duration when idle. Longer timeout reduces CPU usage when nothing is
/// happening.
pub const IDLE_POLL_DURATION: std::time::Duration = std::time::Duration::from_millis(250);

/// Full-screen sign-in runtime.
///
/// Owns the terminal, the state, and the provider client. Terminal state is
/// restored on drop and panic.
pub struct ScreenRuntime {
    /// Terminal instance.
    terminal: Terminal<CrosstermBackend<Stdout>>,
    /// Application state.
    pub state: AppState,
    /// Identity provider client, cloned into spawned handlers.
    client: AuthClient,
    /// Inbox sender - handlers send events here.
    inbox_tx: mpsc::UnboundedSender<UiEvent>,
    /// Inbox receiver - the runtime drains this each frame.
    inbox_rx: mpsc::UnboundedReceiver<UiEvent>,
    /// Last time a Tick event was emitted.
    last_tick: std::time::Instant,
}

impl ScreenRuntime {
    /// Creates a new screen runtime.
    ///
    /// # Errors
    /// Returns an error if terminal setup fails.
    pub fn new(config: Config) -> Result<Self> {
        // Set up panic hook BEFORE entering alternate screen
        terminal::install_panic_hook();

        let terminal = terminal::setup_terminal().context("Failed to setup terminal")?;
        let client = AuthClient::new(&config);
        let state = AppState::new(config);
        let (inbox_tx, inbox_rx) = mpsc::unbounded_channel();

        Ok(Self {
            terminal,
            state,
            client,
            inbox_tx,
            inbox_rx,
            last_tick: std::time::Instant::now(),
        })
    }

    /// Runs the event loop until the screen settles.
    ///
    /// Returns the established session, if any.
    ///
    /// # Errors
    /// Returns an error if terminal I/O fails.
    pub fn run(&mut self) -> Result<Option<Session>> {
        terminal::enable_input_features()?;

        let result = self.event_loop();

        let _ = terminal::disable_input_features();

        result.map(|()| self.state.screen.session.take())
    }

    fn event_loop(&mut self) -> Result<()> {
        let mut dirty = true; // Start dirty to ensure initial render

        while !self.state.should_quit {
            let events = self.collect_events()?;

            for event in events {
                let effects = update::update(&mut self.state, event);
                dirty = true;
                self.execute_effects(effects);
            }

            if dirty {
                self.terminal
                    .draw(|frame| render::render(&self.state, frame))?;
                dirty = false;
            }
        }

        Ok(())
    }

    // ========================================================================
    // Event Collection
    // ========================================================================

    /// Collects events from all sources (inbox, terminal, tick timer).
    fn collect_events(&mut self) -> Result<Vec<UiEvent>> {
        let mut events = Vec::new();

        // Fast ticks only while the spinner is visible.
        let tick_interval = if self.state.screen.loading {
            ACTIVE_POLL_DURATION
        } else {
            IDLE_POLL_DURATION
        };

        // Drain inbox - provider results arrive here
        while let Ok(ev) = self.inbox_rx.try_recv() {
            events.push(ev);
        }

        // Poll terminal events:
        // - If we already have events to process, do a non-blocking poll
        // - Otherwise, block until the next tick is due
        let time_until_tick = tick_interval.saturating_sub(self.last_tick.elapsed());
        let poll_duration = if events.is_empty() {
            time_until_tick
        } else {
            std::time::Duration::ZERO
        };

        if event::poll(poll_duration)? {
            events.push(UiEvent::Terminal(event::read()?));
            // Drain any remaining buffered events (non-blocking)
            while event::poll(std::time::Duration::ZERO)? {
                events.push(UiEvent::Terminal(event::read()?));
            }
        }

        if self.last_tick.elapsed() >= tick_interval {
            events.push(UiEvent::Tick);
            self.last_tick = std::time::Instant::now();
        }

        Ok(events)
    }

    // ========================================================================
    // Effect Dispatch
    // ========================================================================

    fn execute_effects(&mut self, effects: Vec<UiEffect>) {
        for effect in effects {
            self.execute_effect(effect);
        }
    }

    /// Spawns an async effect, sending the result event to the inbox.
    ///
    /// Handlers are pure async functions that return `UiEvent`; the runtime
    /// handles spawning.
    fn spawn_effect<F, Fut>(&self, f: F)
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = UiEvent> + Send + 'static,
    {
        let tx = self.inbox_tx.clone();
        tokio::spawn(async move {
            let _ = tx.send(f().await);
        });
    }

    /// Executes a single effect by dispatching to the appropriate handler.
    fn execute_effect(&mut self, effect: UiEffect) {
        match effect {
            UiEffect::Quit => {
                self.state.should_quit = true;
            }
            UiEffect::SignIn { email, password } => {
                let client = self.client.clone();
                self.spawn_effect(move || handlers::sign_in(client, email, password));
            }
            UiEffect::SignUp {
                email,
                password,
                email_redirect_to,
            } => {
                let client = self.client.clone();
                self.spawn_effect(move || {
                    handlers::sign_up(client, email, password, email_redirect_to)
                });
            }
            UiEffect::RequestPasswordReset { email, redirect_to } => {
                let client = self.client.clone();
                self.spawn_effect(move || handlers::password_reset(client, email, redirect_to));
            }
            UiEffect::StartGoogleOAuth { redirect_to } => {
                let client = self.client.clone();
                self.spawn_effect(move || handlers::google_oauth(client, redirect_to));
            }
        }
    }
}

impl Drop for ScreenRuntime {
    fn drop(&mut self) {
        let _ = terminal::restore_terminal();
    }
}
