//! TUI application state
//!
//! Pure data structures for the TUI. No rendering logic here.
//!
//! All mutable session state lives in [`AppState`] and is touched only
//! from the single event-handling loop; the one long-latency operation
//! (the generation call) runs elsewhere and reports back through the
//! runner, which flips [`GenerationState`] back to Idle on completion or
//! failure.

use std::time::Instant;

use crate::catalog::{Catalog, Methodology, PromptTemplate};
use crate::render::{Block, render};
use crate::template::{FieldValues, resolve};

/// Rotating status messages shown while a request is in flight. Cosmetic
/// only; they carry no semantic state.
pub const REASSURING_MESSAGES: [&str; 6] = [
    "Analisando tendências virais...",
    "Aplicando gatilhos psicológicos...",
    "Estruturando roteiros magnéticos...",
    "Hackeando o algoritmo...",
    "Otimizando retenção...",
    "Finalizando estratégia...",
];

/// Which pane currently receives navigation keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Methodologies,
    Variants,
    Form,
    Result,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Self::Methodologies => Self::Variants,
            Self::Variants => Self::Form,
            Self::Form => Self::Result,
            Self::Result => Self::Methodologies,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Methodologies => Self::Result,
            Self::Variants => Self::Methodologies,
            Self::Form => Self::Variants,
            Self::Result => Self::Form,
        }
    }
}

/// Interaction mode (modal)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionMode {
    /// Normal navigation mode
    #[default]
    Normal,
    /// Typing into the active form field
    FieldInput,
    /// Help overlay
    Help,
}

/// Exactly one generation request may be outstanding; submission is
/// unreachable while InFlight.
#[derive(Debug, Clone, Copy)]
pub enum GenerationState {
    Idle,
    InFlight {
        started: Instant,
        message_index: usize,
        last_rotation: Instant,
    },
}

impl GenerationState {
    pub fn is_busy(&self) -> bool {
        matches!(self, Self::InFlight { .. })
    }
}

/// Action queued for the runner to execute outside the key handler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingAction {
    Submit,
    ExportMarkdown,
    ExportJson,
    Copy,
}

/// Everything the runner needs for one generation call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitRequest {
    pub prompt: String,
    pub label: String,
    pub values: FieldValues,
}

/// One form input
#[derive(Debug, Clone)]
pub struct FieldInput {
    pub name: String,
    pub value: String,
}

/// Selection state for list panes
#[derive(Debug, Default, Clone)]
pub struct SelectionState {
    pub selected_index: usize,
}

impl SelectionState {
    pub fn select_next(&mut self, max_items: usize) {
        if max_items > 0 && self.selected_index < max_items - 1 {
            self.selected_index += 1;
        }
    }

    pub fn select_prev(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    pub fn select_first(&mut self) {
        self.selected_index = 0;
    }

    pub fn select_last(&mut self, max_items: usize) {
        if max_items > 0 {
            self.selected_index = max_items - 1;
        }
    }
}

/// Main TUI application state
pub struct AppState {
    /// The immutable methodology catalog
    pub catalog: Catalog,

    /// Current focus pane
    pub focus: Focus,
    /// Current interaction mode
    pub interaction_mode: InteractionMode,
    /// Should the app quit
    pub should_quit: bool,

    // === Selection ===
    pub methodology_selection: SelectionState,
    pub variant_selection: SelectionState,
    /// Confirmed methodology (index into catalog)
    pub selected_methodology: Option<usize>,
    /// Confirmed prompt variant (index into the methodology's prompts)
    pub selected_variant: Option<usize>,

    // === Form ===
    pub fields: Vec<FieldInput>,
    pub active_field: usize,

    // === Generation ===
    pub generation: GenerationState,
    /// The last generation result, until cleared or replaced
    pub result: Option<String>,
    /// Derived render blocks for the current result
    pub blocks: Vec<Block>,
    pub result_scroll: u16,

    // === Transient feedback ===
    pub error_message: Option<String>,
    pub notice: Option<String>,
    /// "copied" acknowledgment stays visible until this instant
    pub copied_until: Option<Instant>,

    // === Runner hand-off ===
    pub pending_action: Option<PendingAction>,
}

impl AppState {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            focus: Focus::default(),
            interaction_mode: InteractionMode::default(),
            should_quit: false,
            methodology_selection: SelectionState::default(),
            variant_selection: SelectionState::default(),
            selected_methodology: None,
            selected_variant: None,
            fields: Vec::new(),
            active_field: 0,
            generation: GenerationState::Idle,
            result: None,
            blocks: Vec::new(),
            result_scroll: 0,
            error_message: None,
            notice: None,
            copied_until: None,
            pending_action: None,
        }
    }

    /// The confirmed methodology, if any
    pub fn methodology(&self) -> Option<&Methodology> {
        self.selected_methodology.and_then(|i| self.catalog.all().get(i))
    }

    /// The confirmed prompt template, if any
    pub fn prompt(&self) -> Option<&PromptTemplate> {
        let methodology = self.methodology()?;
        methodology.prompts.get(self.selected_variant?)
    }

    /// Confirm the highlighted methodology.
    ///
    /// Resets variant selection and form, clears result and error. A
    /// single-variant methodology auto-selects its only template.
    pub fn select_methodology(&mut self, index: usize) {
        let Some(methodology) = self.catalog.all().get(index) else {
            return;
        };
        let auto_variant = !methodology.multi_prompt;

        self.selected_methodology = Some(index);
        self.variant_selection = SelectionState::default();
        self.result = None;
        self.blocks.clear();
        self.result_scroll = 0;
        self.error_message = None;

        if auto_variant {
            self.select_variant(0);
        } else {
            self.selected_variant = None;
            self.fields.clear();
            self.active_field = 0;
        }
    }

    /// Confirm a prompt variant and rebuild the form for its fields.
    pub fn select_variant(&mut self, index: usize) {
        let Some(prompt) = self.methodology().and_then(|m| m.prompts.get(index)).copied() else {
            return;
        };

        self.fields = prompt
            .fields
            .iter()
            .map(|name| FieldInput {
                name: name.to_string(),
                value: String::new(),
            })
            .collect();
        self.selected_variant = Some(index);
        self.active_field = 0;
        self.result = None;
        self.blocks.clear();
        self.result_scroll = 0;
        self.error_message = None;
    }

    /// Current field values as a map
    pub fn field_values(&self) -> FieldValues {
        self.fields
            .iter()
            .map(|f| (f.name.clone(), f.value.clone()))
            .collect()
    }

    /// Build the generation request, or explain why it cannot be built.
    pub fn submit_request(&self) -> Result<SubmitRequest, String> {
        if self.generation.is_busy() {
            return Err("Já existe uma geração em andamento.".to_string());
        }
        let (Some(methodology), Some(prompt)) = (self.methodology(), self.prompt()) else {
            return Err("Escolha uma metodologia e um prompt antes de gerar.".to_string());
        };
        if self.fields.iter().any(|f| f.value.trim().is_empty()) {
            return Err("Preencha todos os campos antes de gerar.".to_string());
        }

        let values = self.field_values();
        Ok(SubmitRequest {
            prompt: resolve(prompt.template, &values),
            label: methodology.context_label(prompt),
            values,
        })
    }

    /// Flip to InFlight; clears the previous result and error.
    pub fn begin_generation(&mut self, now: Instant) {
        self.result = None;
        self.blocks.clear();
        self.result_scroll = 0;
        self.error_message = None;
        self.generation = GenerationState::InFlight {
            started: now,
            message_index: 0,
            last_rotation: now,
        };
    }

    /// Successful completion: store and render the result, release the
    /// busy flag.
    pub fn finish_generation(&mut self, text: String) {
        self.blocks = render(&text);
        self.result = Some(text);
        self.result_scroll = 0;
        self.generation = GenerationState::Idle;
        self.focus = Focus::Result;
    }

    /// Failed completion: surface the message, release the busy flag.
    pub fn fail_generation(&mut self, message: String) {
        self.error_message = Some(message);
        self.generation = GenerationState::Idle;
    }

    /// Drop the current result
    pub fn clear_result(&mut self) {
        self.result = None;
        self.blocks.clear();
        self.result_scroll = 0;
    }

    /// Current ticker message while in flight
    pub fn ticker_message(&self) -> Option<&'static str> {
        match self.generation {
            GenerationState::InFlight { message_index, .. } => {
                Some(REASSURING_MESSAGES[message_index % REASSURING_MESSAGES.len()])
            }
            GenerationState::Idle => None,
        }
    }

    /// Advance the ticker when its rotation interval elapsed
    pub fn rotate_ticker(&mut self, now: Instant, interval_ms: u64) {
        if let GenerationState::InFlight {
            ref mut message_index,
            ref mut last_rotation,
            ..
        } = self.generation
            && now.duration_since(*last_rotation).as_millis() as u64 >= interval_ms
        {
            *message_index = (*message_index + 1) % REASSURING_MESSAGES.len();
            *last_rotation = now;
        }
    }

    /// Record a successful copy; acknowledgment shows until the deadline.
    pub fn mark_copied(&mut self, now: Instant, ack_ms: u64) {
        self.copied_until = Some(now + std::time::Duration::from_millis(ack_ms));
    }

    /// Whether the "copied" acknowledgment is currently visible
    pub fn copied_visible(&self, now: Instant) -> bool {
        self.copied_until.is_some_and(|deadline| now < deadline)
    }

    /// Per-frame housekeeping: ticker rotation and ack expiry.
    pub fn tick(&mut self, now: Instant, ticker_ms: u64) {
        self.rotate_ticker(now, ticker_ms);
        if let Some(deadline) = self.copied_until
            && now >= deadline
        {
            self.copied_until = None;
        }
    }

    /// Set an error message
    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.error_message = Some(msg.into());
    }

    /// Clear error message
    pub fn clear_error(&mut self) {
        self.error_message = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn state() -> AppState {
        AppState::new(Catalog::builtin())
    }

    fn fill_all_fields(state: &mut AppState) {
        for field in &mut state.fields {
            field.value = "valor".to_string();
        }
    }

    #[test]
    fn test_select_single_variant_methodology_builds_form() {
        let mut state = state();
        let index = state.catalog.all().iter().position(|m| m.id == "m2").unwrap();

        state.select_methodology(index);

        // single-variant methodologies auto-select their only template
        assert_eq!(state.selected_variant, Some(0));
        assert_eq!(state.fields.len(), 1);
        assert_eq!(state.fields[0].name, "nicho");
    }

    #[test]
    fn test_select_multi_variant_methodology_waits_for_variant() {
        let mut state = state();
        let index = state.catalog.all().iter().position(|m| m.id == "mReels").unwrap();

        state.select_methodology(index);
        assert_eq!(state.selected_variant, None);
        assert!(state.fields.is_empty());

        state.select_variant(0);
        assert_eq!(state.selected_variant, Some(0));
        assert!(!state.fields.is_empty());
    }

    #[test]
    fn test_switching_selection_resets_field_values() {
        let mut state = state();
        let index = state.catalog.all().iter().position(|m| m.id == "m2").unwrap();
        state.select_methodology(index);
        state.fields[0].value = "moda".to_string();

        // switching template resets values
        state.select_variant(0);
        assert_eq!(state.fields[0].value, "");

        state.fields[0].value = "moda".to_string();
        state.select_methodology(index);
        assert_eq!(state.fields[0].value, "");
    }

    #[test]
    fn test_submit_requires_selection_and_fields() {
        let mut state = state();
        assert!(state.submit_request().is_err());

        let index = state.catalog.all().iter().position(|m| m.id == "m2").unwrap();
        state.select_methodology(index);
        assert!(state.submit_request().is_err(), "empty fields must not submit");

        fill_all_fields(&mut state);
        let request = state.submit_request().unwrap();
        assert!(request.prompt.contains("valor"));
        assert!(!request.prompt.contains("[nicho]"));
        assert!(request.label.starts_with("Metodologia 02"));
    }

    #[test]
    fn test_busy_flag_blocks_second_submission() {
        let mut state = state();
        let index = state.catalog.all().iter().position(|m| m.id == "m2").unwrap();
        state.select_methodology(index);
        fill_all_fields(&mut state);

        state.begin_generation(Instant::now());
        assert!(state.generation.is_busy());
        assert!(state.submit_request().is_err());
    }

    #[test]
    fn test_generation_lifecycle_releases_busy_flag() {
        let mut state = state();
        let now = Instant::now();

        state.begin_generation(now);
        assert!(state.ticker_message().is_some());

        state.finish_generation("## Título\n- item".to_string());
        assert!(!state.generation.is_busy());
        assert_eq!(state.blocks.len(), 2);
        assert!(state.result.is_some());
    }

    #[test]
    fn test_failed_generation_surfaces_message_and_idles() {
        let mut state = state();
        state.begin_generation(Instant::now());

        state.fail_generation("Erro na geração de conteúdo.".to_string());
        assert!(!state.generation.is_busy());
        assert_eq!(state.error_message.as_deref(), Some("Erro na geração de conteúdo."));
        assert!(state.result.is_none());
    }

    #[test]
    fn test_new_submission_clears_previous_result() {
        let mut state = state();
        state.finish_generation("antigo".to_string());
        assert!(state.result.is_some());

        state.begin_generation(Instant::now());
        assert!(state.result.is_none());
        assert!(state.blocks.is_empty());
    }

    #[test]
    fn test_ticker_rotation_wraps() {
        let mut state = state();
        let start = Instant::now();
        state.begin_generation(start);
        assert_eq!(state.ticker_message(), Some(REASSURING_MESSAGES[0]));

        let mut now = start;
        for expected in [1, 2, 3, 4, 5, 0] {
            now += Duration::from_millis(2500);
            state.rotate_ticker(now, 2500);
            assert_eq!(state.ticker_message(), Some(REASSURING_MESSAGES[expected]));
        }
    }

    #[test]
    fn test_ticker_does_not_rotate_early() {
        let mut state = state();
        let start = Instant::now();
        state.begin_generation(start);

        state.rotate_ticker(start + Duration::from_millis(1000), 2500);
        assert_eq!(state.ticker_message(), Some(REASSURING_MESSAGES[0]));
    }

    #[test]
    fn test_copied_acknowledgment_expires() {
        let mut state = state();
        let now = Instant::now();

        state.mark_copied(now, 2000);
        assert!(state.copied_visible(now));
        assert!(state.copied_visible(now + Duration::from_millis(1999)));

        let later = now + Duration::from_millis(2001);
        assert!(!state.copied_visible(later));

        state.tick(later, 2500);
        assert!(state.copied_until.is_none());
    }

    #[test]
    fn test_selection_state_navigation() {
        let mut selection = SelectionState::default();

        selection.select_next(10);
        assert_eq!(selection.selected_index, 1);

        selection.select_prev();
        assert_eq!(selection.selected_index, 0);

        selection.select_prev();
        assert_eq!(selection.selected_index, 0);

        selection.select_last(10);
        assert_eq!(selection.selected_index, 9);

        selection.select_next(10);
        assert_eq!(selection.selected_index, 9);

        selection.select_first();
        assert_eq!(selection.selected_index, 0);
    }

    #[test]
    fn test_focus_cycle() {
        let mut focus = Focus::Methodologies;
        for _ in 0..4 {
            focus = focus.next();
        }
        assert_eq!(focus, Focus::Methodologies);
        assert_eq!(Focus::Methodologies.prev(), Focus::Result);
    }
}
