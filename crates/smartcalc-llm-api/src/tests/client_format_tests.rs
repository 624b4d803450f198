#[cfg(test)]
mod client_format_tests {
    use crate::client::{anthropic, gemini, openai_compat, ChatMessage};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn conversation() -> Vec<ChatMessage> {
        vec![
            ChatMessage::system("be brief"),
            ChatMessage::user("15% of 1500"),
        ]
    }

    #[test]
    fn test_openai_build_request() {
        let body = openai_compat::build_request("gpt-4o-mini", &conversation());

        assert_eq!(
            body,
            json!({
                "model": "gpt-4o-mini",
                "messages": [
                    { "role": "system", "content": "be brief" },
                    { "role": "user", "content": "15% of 1500" }
                ],
                "temperature": 0.2,
                "max_tokens": 2000
            })
        );
    }

    #[test]
    fn test_openai_parse_response() {
        let text = json!({
            "choices": [{ "message": { "role": "assistant", "content": "225" } }]
        })
        .to_string();

        assert_eq!(openai_compat::parse_response(&text).unwrap(), "225");
    }

    #[test]
    fn test_openai_parse_response_without_choices() {
        let text = json!({ "choices": [] }).to_string();
        assert!(openai_compat::parse_response(&text).is_err());
        assert!(openai_compat::parse_response("not json").is_err());
    }

    #[test]
    fn test_anthropic_build_request_lifts_system() {
        let body = anthropic::build_request("claude-3-haiku", &conversation());

        assert_eq!(body["model"], "claude-3-haiku");
        assert_eq!(body["system"], "be brief");
        assert_eq!(body["max_tokens"], 2000);
        assert_eq!(
            body["messages"],
            json!([{ "role": "user", "content": [{ "type": "text", "text": "15% of 1500" }] }])
        );
    }

    #[test]
    fn test_anthropic_build_request_without_system() {
        let body = anthropic::build_request("m", &[ChatMessage::user("hi")]);
        assert!(body.get("system").is_none());
    }

    #[test]
    fn test_anthropic_parse_response_joins_text_blocks() {
        let text = json!({
            "content": [
                { "type": "text", "text": "1500 × 0.15 = " },
                { "type": "tool_use", "id": "x", "name": "n", "input": {} },
                { "type": "text", "text": "225" }
            ]
        })
        .to_string();

        assert_eq!(anthropic::parse_response(&text).unwrap(), "1500 × 0.15 = 225");
    }

    #[test]
    fn test_anthropic_parse_response_empty() {
        let text = json!({ "content": [] }).to_string();
        assert!(anthropic::parse_response(&text).is_err());
    }

    #[test]
    fn test_gemini_build_request() {
        let messages = vec![
            ChatMessage::system("be brief"),
            ChatMessage::user("2+2?"),
            ChatMessage { role: "assistant".to_string(), content: "4".to_string() },
            ChatMessage::user("and 3+3?"),
        ];
        let body = gemini::build_request(&messages);

        assert_eq!(
            body,
            json!({
                "contents": [
                    { "role": "user", "parts": [{ "text": "2+2?" }] },
                    { "role": "model", "parts": [{ "text": "4" }] },
                    { "role": "user", "parts": [{ "text": "and 3+3?" }] }
                ],
                "generationConfig": { "temperature": 0.2 },
                "systemInstruction": { "parts": [{ "text": "be brief" }] }
            })
        );
    }

    #[test]
    fn test_gemini_parse_response() {
        let text = json!({
            "candidates": [{
                "content": { "role": "model", "parts": [{ "text": "مساحة المثلث " }, { "text": "= 25" }] }
            }]
        })
        .to_string();

        assert_eq!(gemini::parse_response(&text).unwrap(), "مساحة المثلث = 25");
    }

    #[test]
    fn test_gemini_parse_response_blocked() {
        let text = json!({ "promptFeedback": { "blockReason": "SAFETY" } }).to_string();
        let err = gemini::parse_response(&text).unwrap_err();
        assert!(err.to_string().contains("SAFETY"));
    }

    #[test]
    fn test_gemini_generate_url() {
        use smartcalc_logging::RequestLogger;

        let client = gemini::GeminiClient::new(
            "k".to_string(),
            "gemini-2.5-flash".to_string(),
            "https://generativelanguage.googleapis.com/".to_string(),
            RequestLogger::disabled(),
        );
        assert_eq!(
            client.get_generate_url(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash:generateContent"
        );

        let pinned = gemini::GeminiClient::new(
            "k".to_string(),
            "ignored".to_string(),
            "http://proxy/v1/models/x:generateContent".to_string(),
            RequestLogger::disabled(),
        );
        assert_eq!(pinned.get_generate_url(), "http://proxy/v1/models/x:generateContent");
    }
}
