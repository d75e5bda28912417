//! TUI Runner - main loop that owns terminal and the generation task
//!
//! The TuiRunner is responsible for:
//! - Drawing frames and dispatching events to App for handling
//! - Launching the generation call on a tokio task and routing its outcome
//!   back over a channel; completion or failure always releases the busy
//!   flag
//! - Executing queued actions (submit, export, copy) outside key handlers

use std::sync::Arc;
use std::time::{Duration, Instant};

use eyre::Result;
use tokio::sync::mpsc;
use tracing::{debug, warn};

use super::Tui;
use super::app::App;
use super::events::{Event, EventHandler};
use super::state::PendingAction;
use super::views;
use crate::catalog::Catalog;
use crate::clipboard;
use crate::config::Config;
use crate::export::{self, ExportFormat};
use crate::llm::GeminiClient;

/// Result of one generation task, delivered back to the event loop
enum GenerationOutcome {
    Done(String),
    Failed(String),
}

/// TUI Runner that manages the terminal and event loop
pub struct TuiRunner {
    /// Application state and key handling
    app: App,
    /// Terminal handle
    terminal: Tui,
    /// Runtime configuration
    config: Config,
    /// Generation client, shared with the in-flight task
    client: Arc<GeminiClient>,
    /// Event handler
    event_handler: EventHandler,
    outcome_tx: mpsc::UnboundedSender<GenerationOutcome>,
    outcome_rx: mpsc::UnboundedReceiver<GenerationOutcome>,
}

impl TuiRunner {
    /// Create a new TuiRunner over the built-in catalog
    pub fn new(terminal: Tui, config: Config, client: GeminiClient) -> Self {
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();
        let tick = Duration::from_millis(config.ui.tick_ms);
        Self {
            app: App::new(Catalog::builtin()),
            terminal,
            config,
            client: Arc::new(client),
            event_handler: EventHandler::new(tick),
            outcome_tx,
            outcome_rx,
        }
    }

    /// Run the TUI main loop
    pub async fn run(&mut self) -> Result<()> {
        loop {
            self.terminal.draw(|frame| views::render(self.app.state(), frame))?;

            match self.event_handler.next().await? {
                Event::Tick => {
                    self.handle_tick();
                }
                Event::Key(key_event) => {
                    if self.app.handle_key(key_event) {
                        break;
                    }
                }
                Event::Resize(_, _) => {
                    // ratatui re-measures on the next draw
                }
            }

            if self.app.state().should_quit {
                break;
            }
        }

        Ok(())
    }

    /// Handle tick event - periodic updates
    fn handle_tick(&mut self) {
        let now = Instant::now();

        // Deliver finished generations first so the frame after completion
        // already shows the result
        while let Ok(outcome) = self.outcome_rx.try_recv() {
            match outcome {
                GenerationOutcome::Done(text) => self.app.state_mut().finish_generation(text),
                GenerationOutcome::Failed(message) => self.app.state_mut().fail_generation(message),
            }
        }

        let ticker_ms = self.config.ui.ticker_ms;
        self.app.state_mut().tick(now, ticker_ms);

        if let Some(action) = self.app.state_mut().pending_action.take() {
            self.execute_action(action, now);
        }
    }

    /// Execute a queued action
    fn execute_action(&mut self, action: PendingAction, now: Instant) {
        match action {
            PendingAction::Submit => self.start_generation(now),
            PendingAction::ExportMarkdown => self.export_result(ExportFormat::Markdown),
            PendingAction::ExportJson => self.export_result(ExportFormat::Json),
            PendingAction::Copy => self.copy_result(now),
        }
    }

    /// Launch the generation task; the busy flag blocks re-entry until the
    /// outcome lands
    fn start_generation(&mut self, now: Instant) {
        let request = match self.app.state().submit_request() {
            Ok(request) => request,
            Err(msg) => {
                self.app.state_mut().set_error(msg);
                return;
            }
        };

        debug!(label = %request.label, "start_generation: launching");
        self.app.state_mut().begin_generation(now);

        let client = Arc::clone(&self.client);
        let tx = self.outcome_tx.clone();
        tokio::spawn(async move {
            let outcome = match client.generate(&request.prompt, &request.label).await {
                Ok(text) => GenerationOutcome::Done(text),
                Err(e) => {
                    warn!(error = %e, "generation failed");
                    GenerationOutcome::Failed(e.user_message())
                }
            };
            let _ = tx.send(outcome);
        });
    }

    /// Export the current result to the configured directory
    fn export_result(&mut self, format: ExportFormat) {
        let Some(result) = self.app.state().result.clone() else {
            return;
        };
        let values = self.app.state().field_values();

        match export::export(&self.config.export.dir, format, &result, &values) {
            Ok(path) => {
                self.app.state_mut().notice = Some(format!("Exportado para {}", path.display()));
            }
            Err(e) => {
                warn!(error = %e, "export failed");
                self.app.state_mut().set_error(format!("Falha ao exportar: {}", e));
            }
        }
    }

    /// Copy the current result; the acknowledgment reverts on its own
    fn copy_result(&mut self, now: Instant) {
        let Some(result) = self.app.state().result.clone() else {
            return;
        };

        match clipboard::copy_text(&result) {
            Ok(()) => {
                let ack_ms = self.config.ui.copied_ack_ms;
                self.app.state_mut().mark_copied(now, ack_ms);
            }
            Err(e) => {
                warn!(error = %e, "clipboard copy failed");
                self.app.state_mut().set_error(format!("Falha ao copiar: {}", e));
            }
        }
    }
}
