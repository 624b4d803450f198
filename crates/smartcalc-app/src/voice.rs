//! Voice input for the AI panel.
//!
//! A recognizer reports its lifecycle and transcripts as [`SpeechEvent`]s
//! on a channel; the UI loop drains them between prompts.

use std::process::Stdio;
use thiserror::Error;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::Command as AsyncCommand;
use tokio::sync::{mpsc, oneshot};

/// Environment variable carrying the speech language to the transcriber
pub const SPEECH_LANG_ENV: &str = "SMARTCALC_SPEECH_LANG";

/// Capture session number, assigned by [`VoiceInput`] on each start
pub type SessionId = u64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpeechEvent {
    Started(SessionId),
    Ended(SessionId),
    Transcript(SessionId, String),
}

impl SpeechEvent {
    pub fn session(&self) -> SessionId {
        match self {
            Self::Started(id) | Self::Ended(id) | Self::Transcript(id, _) => *id,
        }
    }
}

#[derive(Debug, Error)]
pub enum VoiceError {
    #[error("speech input is not supported")]
    Unsupported,

    #[error("failed to start speech capture: {0}")]
    Start(#[from] std::io::Error),
}

/// A speech capture session source
pub trait SpeechRecognizer: Send {
    /// Begin capturing; events tagged with `session` are delivered on
    /// `events` until the session ends or [`SpeechRecognizer::stop`] is called.
    fn start(&mut self, session: SessionId, events: mpsc::UnboundedSender<SpeechEvent>) -> Result<(), VoiceError>;

    fn stop(&mut self);
}

/// Recognizer backed by an external transcriber command.
///
/// The command is run through `sh -c`; every non-empty line it prints
/// becomes one transcript.
pub struct CommandRecognizer {
    command: String,
    lang: String,
    kill: Option<oneshot::Sender<()>>,
}

impl CommandRecognizer {
    pub fn new(command: impl Into<String>, lang: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            lang: lang.into(),
            kill: None,
        }
    }
}

impl SpeechRecognizer for CommandRecognizer {
    fn start(&mut self, session: SessionId, events: mpsc::UnboundedSender<SpeechEvent>) -> Result<(), VoiceError> {
        let mut child = AsyncCommand::new("sh")
            .arg("-c")
            .arg(&self.command)
            .env(SPEECH_LANG_ENV, &self.lang)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .spawn()?;

        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| std::io::Error::other("transcriber stdout not captured"))?;

        let (kill_tx, mut kill_rx) = oneshot::channel();
        self.kill = Some(kill_tx);

        let _ = events.send(SpeechEvent::Started(session));
        tokio::spawn(async move {
            let mut lines = BufReader::new(stdout).lines();
            loop {
                tokio::select! {
                    _ = &mut kill_rx => break,
                    line = lines.next_line() => match line {
                        Ok(Some(line)) => {
                            let transcript = line.trim();
                            if !transcript.is_empty() {
                                let _ = events.send(SpeechEvent::Transcript(session, transcript.to_string()));
                            }
                        }
                        Ok(None) | Err(_) => break,
                    },
                }
            }
            let _ = child.kill().await;
            let _ = events.send(SpeechEvent::Ended(session));
        });

        Ok(())
    }

    fn stop(&mut self) {
        if let Some(kill) = self.kill.take() {
            let _ = kill.send(());
        }
    }
}

/// Microphone toggle state for the AI panel.
///
/// At most one capture session runs at a time. `listening` is set when
/// a session starts and cleared by a stop or by the running session's
/// `Ended` event.
pub struct VoiceInput {
    recognizer: Option<Box<dyn SpeechRecognizer>>,
    listening: bool,
    session: SessionId,
    events_tx: mpsc::UnboundedSender<SpeechEvent>,
    events_rx: mpsc::UnboundedReceiver<SpeechEvent>,
}

impl VoiceInput {
    pub fn new(recognizer: Option<Box<dyn SpeechRecognizer>>) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        Self {
            recognizer,
            listening: false,
            session: 0,
            events_tx,
            events_rx,
        }
    }

    /// Voice input with no recognizer; toggling always reports unsupported
    pub fn unsupported() -> Self {
        Self::new(None)
    }

    pub fn is_supported(&self) -> bool {
        self.recognizer.is_some()
    }

    pub fn is_listening(&self) -> bool {
        self.listening
    }

    /// Stop the running session, or start a new one.
    ///
    /// Returns whether a session is now running. Queued events should be
    /// applied first so a session that ended on its own is not "stopped".
    pub fn toggle(&mut self) -> Result<bool, VoiceError> {
        if self.listening {
            if let Some(recognizer) = self.recognizer.as_mut() {
                recognizer.stop();
            }
            self.listening = false;
            return Ok(false);
        }

        let recognizer = self.recognizer.as_mut().ok_or(VoiceError::Unsupported)?;
        let session = self.session + 1;
        recognizer.start(session, self.events_tx.clone())?;
        self.session = session;
        self.listening = true;
        Ok(true)
    }

    /// Next pending event, if any, without waiting
    pub fn try_next_event(&mut self) -> Option<SpeechEvent> {
        self.events_rx.try_recv().ok()
    }

    /// Apply a lifecycle event; returns the transcript text for transcript
    /// events. Events from a stopped or superseded session are ignored.
    pub fn handle_event(&mut self, event: SpeechEvent) -> Option<String> {
        if !self.listening || event.session() != self.session {
            return None;
        }
        match event {
            SpeechEvent::Started(_) => None,
            SpeechEvent::Ended(_) => {
                self.listening = false;
                None
            }
            SpeechEvent::Transcript(_, text) => Some(text),
        }
    }
}

impl Default for VoiceInput {
    fn default() -> Self {
        Self::unsupported()
    }
}
