//! TUI rendering and terminal management (impure shell)

pub mod banner;
pub mod constants;
pub mod layout;
pub mod loading_indicator;
pub mod panels;
pub mod search_input;
pub mod styles;

pub use banner::BannerStack;
pub use layout::{render_layout, ViewContext};
pub use loading_indicator::LoadingIndicator;
pub use panels::{ErrorPanel, ResultsPanel};
pub use search_input::{SearchInput, SubmitButton};
pub use styles::{ColorConfig, UiStyles};

use crate::config::{KeyBindings, ResolvedConfig};
use crate::controller::{HealthMonitor, QueryController};
use crate::model::{KeyAction, MemberId};
use crate::port::RenderPort;
use crate::service::RecommendationService;
use crate::state::{input_handler, IdentifierField, SharedUi, UiState};
use constants::TICK_INTERVAL;
use crossterm::{
    event::{
        DisableBracketedPaste, EnableBracketedPaste, Event, EventStream, KeyCode, KeyEvent,
        KeyEventKind, KeyModifiers,
    },
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use futures_util::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;
use std::time::Instant;
use thiserror::Error;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, warn};

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    ui: SharedUi,
    controller: Arc<QueryController>,
    health: Arc<HealthMonitor>,
    key_bindings: KeyBindings,
    examples: Vec<MemberId>,
    styles: UiStyles,
    spinner: LoadingIndicator,
    /// Spawned searches and health checks not yet reaped.
    in_flight: Vec<JoinHandle<()>>,
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Wire both controllers to a fresh UI state rendered on `terminal`.
    pub fn new(
        terminal: Terminal<B>,
        service: Arc<dyn RecommendationService>,
        config: &ResolvedConfig,
        colors: ColorConfig,
    ) -> Self {
        let ui = SharedUi::new(UiState::new(config.banner_timings));
        let port: Arc<dyn RenderPort> = Arc::new(ui.clone());
        let controller = Arc::new(QueryController::new(Arc::clone(&service), Arc::clone(&port)));
        let health = Arc::new(HealthMonitor::new(service, port));

        Self {
            terminal,
            ui,
            controller,
            health,
            key_bindings: KeyBindings::default(),
            examples: config.example_member_ids.clone(),
            styles: UiStyles::with_color_config(colors),
            spinner: LoadingIndicator::new(),
            in_flight: Vec::new(),
        }
    }

    /// Shared display state.
    pub fn ui(&self) -> &SharedUi {
        &self.ui
    }

    /// Underlying terminal, for inspecting the backend in tests.
    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    /// Kick off the one-shot health check and, if given, an initial lookup.
    pub fn start(&mut self, initial_member: Option<MemberId>) {
        self.spawn_health_check();
        if let Some(id) = initial_member {
            self.set_field(IdentifierField::from_text(&id.to_string()));
            self.spawn_lookup(id);
        }
    }

    /// Run the main event loop
    ///
    /// Returns when user quits (Ctrl+Q or Ctrl+C). Redraws after every
    /// terminal event and on every tick, which also drives the banner
    /// lifecycle and the spinner.
    pub async fn run(&mut self, initial_member: Option<MemberId>) -> Result<(), TuiError> {
        self.start(initial_member);

        let mut events = EventStream::new();
        let mut ticker = tokio::time::interval(TICK_INTERVAL);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        self.draw()?;
        loop {
            tokio::select! {
                maybe_event = events.next() => match maybe_event {
                    Some(Ok(event)) => {
                        if self.handle_event(event) {
                            return Ok(());
                        }
                    }
                    Some(Err(err)) => return Err(err.into()),
                    // Input closed
                    None => return Ok(()),
                },
                _ = ticker.tick() => self.on_tick(Instant::now()),
            }
            self.draw()?;
        }
    }

    /// Handle one terminal event. Returns true if app should quit.
    fn handle_event(&mut self, event: Event) -> bool {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
            Event::Paste(text) => {
                self.edit_field(|field| input_handler::handle_text_input(field, &text));
                false
            }
            // Resize needs nothing beyond the redraw that follows every event
            _ => false,
        }
    }

    /// Handle a single keyboard event
    ///
    /// Returns true if app should quit
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        // Special case: Ctrl+C should always quit, even if not in bindings
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        if let Some(action) = self.key_bindings.get(key) {
            return self.apply_action(action);
        }

        // Unbound characters are typed into the field (and sanitised there)
        if let KeyCode::Char(ch) = key.code {
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
            {
                self.edit_field(|field| input_handler::handle_char_input(field, ch));
            }
        }
        false
    }

    fn apply_action(&mut self, action: KeyAction) -> bool {
        match action {
            KeyAction::Quit => return true,
            KeyAction::SubmitSearch => {
                let raw = self.ui.lock().field.text().to_string();
                self.spawn_submit(raw);
            }
            KeyAction::RunExample(index) => match self.examples.get(index).copied() {
                Some(id) => {
                    self.set_field(IdentifierField::from_text(&id.to_string()));
                    self.spawn_lookup(id);
                }
                None => debug!(index, "No example configured for shortcut"),
            },
            KeyAction::DeleteBack => self.edit_field(input_handler::handle_backspace),
            KeyAction::DeleteForward => self.edit_field(input_handler::handle_delete),
            KeyAction::CursorLeft => self.edit_field(input_handler::handle_cursor_left),
            KeyAction::CursorRight => self.edit_field(input_handler::handle_cursor_right),
            KeyAction::CursorHome => self.edit_field(input_handler::handle_cursor_home),
            KeyAction::CursorEnd => self.edit_field(input_handler::handle_cursor_end),
            KeyAction::ClearInput => self.edit_field(input_handler::clear_input),
        }
        false
    }

    fn edit_field(&mut self, edit: impl FnOnce(IdentifierField) -> IdentifierField) {
        let mut state = self.ui.lock();
        let field = std::mem::take(&mut state.field);
        state.field = edit(field);
    }

    fn set_field(&mut self, field: IdentifierField) {
        self.ui.lock().field = field;
    }

    fn spawn_submit(&mut self, raw: String) {
        let controller = Arc::clone(&self.controller);
        self.in_flight
            .push(tokio::spawn(async move { controller.submit_search(&raw).await }));
    }

    fn spawn_lookup(&mut self, id: MemberId) {
        let controller = Arc::clone(&self.controller);
        self.in_flight
            .push(tokio::spawn(async move { controller.lookup_member(id).await }));
    }

    fn spawn_health_check(&mut self) {
        let health = Arc::clone(&self.health);
        self.in_flight.push(tokio::spawn(async move {
            health.check_health().await;
        }));
    }

    /// Advance time-driven state: spinner, banner removal, task reaping.
    fn on_tick(&mut self, now: Instant) {
        let busy = {
            let mut state = self.ui.lock();
            state.tick(now);
            state.visibility().busy
        };
        if busy {
            self.spinner.advance();
        }
        self.in_flight.retain(|task| !task.is_finished());
    }

    /// Render the current frame
    fn draw(&mut self) -> Result<(), TuiError> {
        let state = self.ui.lock();
        let ctx = ViewContext {
            examples: &self.examples,
            styles: &self.styles,
            spinner: self.spinner,
            now: Instant::now(),
        };
        self.terminal
            .draw(|frame| render_layout(frame, &state, &ctx))?;
        Ok(())
    }
}

/// Raw mode, alternate screen and bracketed paste for as long as it lives.
///
/// Dropping the guard restores the terminal, including on early return and
/// unwinding.
pub struct TerminalGuard {
    _private: (),
}

impl TerminalGuard {
    /// Enable raw mode, the alternate screen and bracketed paste.
    ///
    /// # Errors
    ///
    /// Returns an error if any terminal command fails.
    pub fn enter() -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        stdout.execute(EnableBracketedPaste)?;
        Ok(Self { _private: () })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(err) = restore_terminal() {
            warn!(error = %err, "Failed to restore terminal");
        }
    }
}

/// Restore terminal to normal state
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(DisableBracketedPaste)?;
    stdout.execute(LeaveAlternateScreen)?;
    Ok(())
}

/// Initialize and run the TUI application against `service`.
///
/// Handles terminal setup, runs the event loop, and restores the terminal
/// on exit. Logging must be initialized by the caller.
pub async fn run_tui(
    service: Arc<dyn RecommendationService>,
    config: &ResolvedConfig,
    colors: ColorConfig,
    initial_member: Option<MemberId>,
) -> Result<(), TuiError> {
    let _guard = TerminalGuard::enter()?;
    let terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    let mut app = TuiApp::new(terminal, service, config, colors);
    app.run(initial_member).await
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod tests;
