use smartcalc_core::{
    format_display, interpret, parse_keys, pending_line, CalcError, CalculatorState, History, HistoryItem,
    ImportAction, Key,
};
use smartcalc_llm_api::MathSolver;

use crate::messages::Locale;
use crate::voice::{VoiceError, VoiceInput};

/// State of the AI assistant panel
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AiPanel {
    pub open: bool,
    pub prompt: String,
    pub loading: bool,
    /// Last answer, or the failure message of the last solve
    pub result: Option<String>,
}

impl AiPanel {
    /// A question can be sent: nothing in flight and the prompt has text
    pub fn can_submit(&self) -> bool {
        !self.loading && !self.prompt.trim().is_empty()
    }
}

/// How a solve request ended
#[derive(Debug)]
pub enum SolveOutcome {
    /// Blank prompt or a request already in flight; nothing happened
    Skipped,
    Answered,
    /// The localized failure message is shown; the cause is kept for verbose output
    Failed(anyhow::Error),
}

/// The calculator screen: keypad state, history, AI panel and microphone
pub struct SmartCalc {
    state: CalculatorState,
    history: History,
    panel: AiPanel,
    voice: VoiceInput,
    locale: Locale,
}

impl SmartCalc {
    pub fn new(locale: Locale, voice: VoiceInput) -> Self {
        Self {
            state: CalculatorState::new(),
            history: History::new(),
            panel: AiPanel::default(),
            voice,
            locale,
        }
    }

    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn panel(&self) -> &AiPanel {
        &self.panel
    }

    pub fn voice(&self) -> &VoiceInput {
        &self.voice
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Main display text
    pub fn display(&self) -> String {
        format_display(self.state.current_input())
    }

    /// Pending `operand operator` line above the display
    pub fn pending(&self) -> String {
        pending_line(&self.state)
    }

    pub fn press(&mut self, key: Key) -> Result<(), CalcError> {
        if let Some(item) = self.state.press(key)? {
            self.history.record(item);
        }
        Ok(())
    }

    /// Press keys in order, stopping at the first rejected key
    pub fn press_all(&mut self, keys: &[Key]) -> Result<(), CalcError> {
        for key in keys {
            self.press(*key)?;
        }
        Ok(())
    }

    /// Parse a typed key sequence and press it. Nothing is pressed when
    /// the sequence contains an unknown key.
    pub fn press_str(&mut self, input: &str) -> Result<(), CalcError> {
        let keys = parse_keys(input)?;
        self.press_all(&keys)
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    pub fn open_ai(&mut self) {
        self.panel.open = true;
    }

    pub fn close_ai(&mut self) {
        self.panel.open = false;
    }

    pub fn set_prompt(&mut self, prompt: impl Into<String>) {
        self.panel.prompt = prompt.into();
    }

    /// Put example `index` into the prompt. Returns false for an unknown index.
    pub fn use_example(&mut self, index: usize) -> bool {
        match self.locale.examples().get(index) {
            Some(example) => {
                self.panel.open = true;
                self.panel.prompt = example.to_string();
                true
            }
            None => false,
        }
    }

    /// Add dictated text to the end of the prompt
    pub fn append_transcript(&mut self, transcript: &str) {
        if self.panel.prompt.is_empty() {
            self.panel.prompt = transcript.to_string();
        } else {
            self.panel.prompt = format!("{} {}", self.panel.prompt, transcript);
        }
    }

    pub fn can_submit(&self) -> bool {
        self.panel.can_submit()
    }

    /// Ask the solver about the current prompt.
    ///
    /// An answer is shown and recorded in history as `AI: <prompt>`. Any
    /// failure shows the localized message and records nothing.
    pub async fn solve(&mut self, solver: &dyn MathSolver) -> SolveOutcome {
        if !self.can_submit() {
            return SolveOutcome::Skipped;
        }

        self.panel.loading = true;
        self.panel.result = None;
        let prompt = self.panel.prompt.clone();

        let outcome = match solver.solve(&prompt).await {
            Ok(answer) => {
                self.history.record(HistoryItem::from_ai(&prompt, answer.clone()));
                self.panel.result = Some(answer);
                SolveOutcome::Answered
            }
            Err(e) => {
                self.panel.result = Some(self.locale.solve_failed().to_string());
                SolveOutcome::Failed(e)
            }
        };

        self.panel.loading = false;
        outcome
    }

    /// What importing the shown answer would do
    pub fn import_preview(&self) -> Option<ImportAction> {
        self.panel.result.as_deref().and_then(interpret)
    }

    pub fn import_available(&self) -> bool {
        self.import_preview().is_some()
    }

    /// Copy numbers from the answer into the calculator, then close the
    /// panel and clear the prompt. Returns false when there is nothing to
    /// import.
    pub fn import_result(&mut self) -> bool {
        let Some(action) = self.import_preview() else {
            return false;
        };
        action.apply(&mut self.state);
        self.panel.open = false;
        self.panel.prompt.clear();
        true
    }

    /// Start or stop dictation. Queued speech events are applied first so
    /// a session that already ended is restarted rather than stopped.
    pub fn toggle_voice(&mut self) -> Result<bool, VoiceError> {
        self.drain_speech_events();
        self.voice.toggle()
    }

    /// Apply queued speech events; transcripts are appended to the prompt.
    /// Returns the number of events handled.
    pub fn drain_speech_events(&mut self) -> usize {
        let mut handled = 0;
        while let Some(event) = self.voice.try_next_event() {
            if let Some(transcript) = self.voice.handle_event(event) {
                self.append_transcript(&transcript);
            }
            handled += 1;
        }
        handled
    }
}
