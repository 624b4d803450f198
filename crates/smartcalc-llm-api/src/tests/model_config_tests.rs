#[cfg(test)]
mod model_config_tests {
    use crate::config::{
        get_default_url_for_backend, normalize_api_url, parse_model_spec, BackendType, ClientFactory,
        GEMINI_API_URL, GROQ_API_URL,
    };
    use smartcalc_logging::RequestLogger;

    #[test]
    fn test_parse_model_full_format() {
        let (model, backend, url) = parse_model_spec("claude-3-haiku@anthropic(https://api.anthropic.com)");

        assert_eq!(model, "claude-3-haiku");
        assert_eq!(backend, Some(BackendType::Anthropic));
        assert_eq!(url, Some("https://api.anthropic.com".to_string()));
    }

    #[test]
    fn test_parse_model_backend_only() {
        let (model, backend, url) = parse_model_spec("gemini-2.5-pro@gemini");

        assert_eq!(model, "gemini-2.5-pro");
        assert_eq!(backend, Some(BackendType::Gemini));
        assert_eq!(url, None);
    }

    #[test]
    fn test_parse_model_only() {
        let (model, backend, url) = parse_model_spec("gpt-4o");

        assert_eq!(model, "gpt-4o");
        assert_eq!(backend, None);
        assert_eq!(url, None);
    }

    #[test]
    fn test_parse_model_with_custom_url() {
        let (model, backend, url) = parse_model_spec("qwen@llama(http://localhost:8080/v1/chat/completions)");

        assert_eq!(model, "qwen");
        assert_eq!(backend, Some(BackendType::Llama));
        assert_eq!(url, Some("http://localhost:8080/v1/chat/completions".to_string()));
    }

    #[test]
    fn test_parse_model_unknown_backend() {
        let (model, backend, url) = parse_model_spec("some-model@mystery");

        assert_eq!(model, "some-model");
        assert_eq!(backend, None);
        assert_eq!(url, None);
    }

    #[test]
    fn test_parse_model_empty_url() {
        let (_, backend, url) = parse_model_spec("m@groq()");

        assert_eq!(backend, Some(BackendType::Groq));
        assert_eq!(url, None);
    }

    #[test]
    fn test_backend_type_from_str() {
        assert_eq!(BackendType::from_str("gemini"), Some(BackendType::Gemini));
        assert_eq!(BackendType::from_str("Google"), Some(BackendType::Gemini));
        assert_eq!(BackendType::from_str("claude"), Some(BackendType::Anthropic));
        assert_eq!(BackendType::from_str("OPENAI"), Some(BackendType::OpenAI));
        assert_eq!(BackendType::from_str("groq"), Some(BackendType::Groq));
        assert_eq!(BackendType::from_str("llama.cpp"), Some(BackendType::Llama));
        assert_eq!(BackendType::from_str("llama-cpp"), Some(BackendType::Llama));
        assert_eq!(BackendType::from_str("unknown"), None);
    }

    #[test]
    fn test_backend_type_as_str_round_trips() {
        for backend in BackendType::all() {
            assert_eq!(BackendType::from_str(backend.as_str()), Some(backend));
        }
    }

    #[test]
    fn test_default_models() {
        assert_eq!(BackendType::Gemini.default_model(), "gemini-2.5-flash");
        assert!(!BackendType::Anthropic.default_model().is_empty());
        assert!(!BackendType::Groq.default_model().is_empty());
    }

    #[test]
    fn test_get_default_url_for_backend() {
        assert_eq!(get_default_url_for_backend(&BackendType::Gemini), Some(GEMINI_API_URL.to_string()));
        assert_eq!(get_default_url_for_backend(&BackendType::Groq), Some(GROQ_API_URL.to_string()));
        assert_eq!(get_default_url_for_backend(&BackendType::Llama), None);
    }

    #[test]
    fn test_normalize_api_url() {
        assert_eq!(normalize_api_url("http://localhost:8080"), "http://localhost:8080/v1/chat/completions");
        assert_eq!(normalize_api_url("http://localhost:8080/"), "http://localhost:8080/v1/chat/completions");
        assert_eq!(
            normalize_api_url("http://localhost:8080/v1/chat/completions"),
            "http://localhost:8080/v1/chat/completions"
        );
    }

    #[test]
    fn test_requires_api_key() {
        assert!(BackendType::Gemini.requires_api_key());
        assert!(BackendType::Anthropic.requires_api_key());
        assert!(!BackendType::Llama.requires_api_key());
    }

    #[test]
    fn test_factory_uses_explicit_key_and_default_model() {
        let client = ClientFactory::create(
            BackendType::Gemini,
            Some("test-key".to_string()),
            None,
            None,
            RequestLogger::disabled(),
        )
        .unwrap();

        assert_eq!(client.model(), "gemini-2.5-flash");
        assert_eq!(client.backend(), BackendType::Gemini);
    }

    #[test]
    fn test_factory_keeps_explicit_model() {
        let client = ClientFactory::create(
            BackendType::Anthropic,
            Some("test-key".to_string()),
            Some("claude-3-haiku".to_string()),
            None,
            RequestLogger::disabled(),
        )
        .unwrap();

        assert_eq!(client.model(), "claude-3-haiku");
        assert_eq!(client.backend(), BackendType::Anthropic);
    }

    #[test]
    fn test_factory_llama_requires_url() {
        let result = ClientFactory::create(BackendType::Llama, None, None, None, RequestLogger::disabled());
        assert!(result.is_err());

        let client = ClientFactory::create(
            BackendType::Llama,
            None,
            None,
            Some("http://localhost:8080".to_string()),
            RequestLogger::disabled(),
        )
        .unwrap();
        assert_eq!(client.backend(), BackendType::Llama);
    }

    #[test]
    fn test_detect_backend() {
        assert_eq!(ClientFactory::detect_backend(GEMINI_API_URL), BackendType::Gemini);
        assert_eq!(ClientFactory::detect_backend("https://api.anthropic.com"), BackendType::Anthropic);
        assert_eq!(ClientFactory::detect_backend(GROQ_API_URL), BackendType::Groq);
        assert_eq!(ClientFactory::detect_backend("https://api.openai.com/v1"), BackendType::OpenAI);
        assert_eq!(ClientFactory::detect_backend("http://10.0.0.5:8080"), BackendType::Llama);
    }
}
