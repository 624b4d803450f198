#[cfg(test)]
mod voice_tests {
    use crate::voice::{
        CommandRecognizer, SessionId, SpeechEvent, SpeechRecognizer, VoiceError, VoiceInput, SPEECH_LANG_ENV,
    };
    use std::time::Duration;
    use tokio::sync::mpsc;
    use tokio::time::timeout;

    async fn collect_until_ended(rx: &mut mpsc::UnboundedReceiver<SpeechEvent>) -> Vec<SpeechEvent> {
        let mut events = Vec::new();
        while let Ok(Some(event)) = timeout(Duration::from_secs(5), rx.recv()).await {
            let ended = matches!(event, SpeechEvent::Ended(_));
            events.push(event);
            if ended {
                break;
            }
        }
        events
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_command_recognizer_emits_lines() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut recognizer = CommandRecognizer::new("printf 'hello\\n\\n  world  \\n'", "en-US");

        recognizer.start(7, tx).unwrap();
        let events = collect_until_ended(&mut rx).await;

        assert_eq!(
            events,
            vec![
                SpeechEvent::Started(7),
                SpeechEvent::Transcript(7, "hello".to_string()),
                SpeechEvent::Transcript(7, "world".to_string()),
                SpeechEvent::Ended(7),
            ]
        );
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_command_recognizer_passes_language() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let command = format!("echo \"${}\"", SPEECH_LANG_ENV);
        let mut recognizer = CommandRecognizer::new(command, "ar-SA");

        recognizer.start(7, tx).unwrap();
        let events = collect_until_ended(&mut rx).await;

        assert!(events.contains(&SpeechEvent::Transcript(7, "ar-SA".to_string())));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_command_recognizer_stop_ends_session() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut recognizer = CommandRecognizer::new("sleep 30", "en-US");

        recognizer.start(7, tx).unwrap();
        recognizer.stop();
        let events = collect_until_ended(&mut rx).await;

        assert_eq!(events, vec![SpeechEvent::Started(7), SpeechEvent::Ended(7)]);
    }

    /// Starts sessions that never produce events
    struct SilentRecognizer;

    impl SpeechRecognizer for SilentRecognizer {
        fn start(&mut self, _session: SessionId, _events: mpsc::UnboundedSender<SpeechEvent>) -> Result<(), VoiceError> {
            Ok(())
        }

        fn stop(&mut self) {}
    }

    fn silent_voice() -> VoiceInput {
        VoiceInput::new(Some(Box::new(SilentRecognizer)))
    }

    #[test]
    fn test_handle_event_tracks_listening() {
        let mut voice = silent_voice();
        assert!(voice.toggle().unwrap());

        assert_eq!(voice.handle_event(SpeechEvent::Started(1)), None);
        assert!(voice.is_listening());

        assert_eq!(
            voice.handle_event(SpeechEvent::Transcript(1, "5 + 3".to_string())),
            Some("5 + 3".to_string())
        );
        assert!(voice.is_listening());

        assert_eq!(voice.handle_event(SpeechEvent::Ended(1)), None);
        assert!(!voice.is_listening());
    }

    #[test]
    fn test_stale_session_events_are_ignored() {
        let mut voice = silent_voice();
        assert!(voice.toggle().unwrap());
        assert!(!voice.toggle().unwrap());
        assert!(voice.toggle().unwrap());

        assert_eq!(voice.handle_event(SpeechEvent::Transcript(1, "old".to_string())), None);
        assert_eq!(voice.handle_event(SpeechEvent::Ended(1)), None);
        assert!(voice.is_listening());

        assert!(!voice.toggle().unwrap());
        assert!(!voice.is_listening());
    }

    #[test]
    fn test_events_after_stop_are_ignored() {
        let mut voice = silent_voice();
        assert!(voice.toggle().unwrap());
        assert!(!voice.toggle().unwrap());

        assert_eq!(voice.handle_event(SpeechEvent::Started(1)), None);
        assert_eq!(voice.handle_event(SpeechEvent::Transcript(1, "late".to_string())), None);
        assert!(!voice.is_listening());
    }

    #[test]
    fn test_unsupported_voice() {
        let mut voice = VoiceInput::default();

        assert!(!voice.is_supported());
        assert!(voice.toggle().is_err());
        assert_eq!(voice.try_next_event(), None);
    }
}
