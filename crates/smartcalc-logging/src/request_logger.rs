use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::{get_logs_dir, mask_secret, safe_truncate};

/// Bodies longer than this are truncated on the console
const MAX_CONSOLE_BODY_CHARS: usize = 5000;

/// Log HTTP request details for debugging (console output)
pub fn log_request(url: &str, body: &serde_json::Value, api_key: &str, verbose: bool) {
    if !verbose {
        return;
    }

    println!("\n{}", "═".repeat(80).bright_cyan());
    println!("{}", "🔍 HTTP REQUEST DEBUG".bright_cyan().bold());
    println!("{}", "═".repeat(80).bright_cyan());

    for (label, value) in describe_url(url) {
        println!("{}: {}", label.bright_yellow(), value);
    }

    println!("\n{}", "Headers:".bright_yellow());
    println!("  Content-Type: application/json");
    println!("  Credentials: {}", mask_secret(api_key));

    println!("\n{}", "Request Body:".bright_yellow());
    match serde_json::to_string_pretty(body) {
        Ok(json) => print_truncated(&json),
        Err(e) => println!("{}", format!("Error serializing request: {}", e).red()),
    }

    println!("{}", "═".repeat(80).bright_cyan());
    println!();
}

/// Log HTTP response details for debugging (console output)
pub fn log_response(status: &reqwest::StatusCode, body: &str, verbose: bool) {
    if !verbose {
        return;
    }

    println!("\n{}", "═".repeat(80).bright_green());
    println!("{}", "📥 HTTP RESPONSE DEBUG".bright_green().bold());
    println!("{}", "═".repeat(80).bright_green());

    println!("{}: {} {}",
        "Status".bright_yellow(),
        status.as_u16(),
        status.canonical_reason().unwrap_or("Unknown")
    );

    println!("\n{}", "Response Body:".bright_yellow());
    print_truncated(&pretty_body(body));

    println!("{}", "═".repeat(80).bright_green());
    println!();
}

/// Log HTTP request to a file in `logs_dir`, returning the file written
pub fn log_request_to_file(
    logs_dir: &Path,
    url: &str,
    body: &serde_json::Value,
    model: &str,
    api_key: &str,
    timestamp: i64,
) -> Result<PathBuf> {
    let filename = format!("req-{}-{}.txt", timestamp, file_safe(model));
    let file_path = logs_dir.join(filename);

    let mut log_content = String::new();
    log_content.push_str("HTTP REQUEST LOG\n");
    log_content.push_str("================\n\n");
    log_content.push_str(&format!("Timestamp: {}\n", timestamp));
    log_content.push_str(&format!("Model: {}\n\n", model));

    for (label, value) in describe_url(url) {
        log_content.push_str(&format!("{}: {}\n", label, value));
    }

    log_content.push_str("\nHeaders:\n");
    log_content.push_str("  Content-Type: application/json\n");
    log_content.push_str(&format!("  Credentials: {}\n\n", mask_secret(api_key)));

    log_content.push_str("Request Body:\n");
    match serde_json::to_string_pretty(body) {
        Ok(json) => {
            log_content.push_str(&json);
            log_content.push('\n');
        }
        Err(e) => {
            log_content.push_str(&format!("Error serializing request: {}\n", e));
        }
    }

    fs::write(&file_path, log_content)
        .with_context(|| format!("Failed to write request log to {}", file_path.display()))?;

    Ok(file_path)
}

/// Log HTTP response to a file in `logs_dir`, named to match its request
pub fn log_response_to_file(
    logs_dir: &Path,
    status: &reqwest::StatusCode,
    body: &str,
    model: &str,
    request_timestamp: i64,
) -> Result<PathBuf> {
    let filename = format!("resp-{}-{}.txt", request_timestamp, file_safe(model));
    let file_path = logs_dir.join(filename);

    let mut log_content = String::new();
    log_content.push_str("HTTP RESPONSE LOG\n");
    log_content.push_str("=================\n\n");
    log_content.push_str(&format!("Timestamp: {}\n", request_timestamp));
    log_content.push_str(&format!("Model: {}\n\n", model));
    log_content.push_str(&format!("Status: {} {}\n\n",
        status.as_u16(),
        status.canonical_reason().unwrap_or("Unknown")
    ));

    log_content.push_str("Response Body:\n");
    log_content.push_str(&pretty_body(body));
    log_content.push('\n');

    log_content.push_str("\n---\n");
    log_content.push_str(&format!("Response Size: {} bytes\n", body.len()));

    fs::write(&file_path, log_content)
        .with_context(|| format!("Failed to write response log to {}", file_path.display()))?;

    Ok(file_path)
}

/// Per-client request logging settings.
///
/// Console output is gated on `verbose`; files are only written when
/// `to_file` is set. Failing to write a log file is reported and
/// otherwise ignored.
#[derive(Debug, Clone, Default)]
pub struct RequestLogger {
    verbose: bool,
    to_file: bool,
    logs_dir: Option<PathBuf>,
}

impl RequestLogger {
    pub fn new(verbose: bool, to_file: bool) -> Self {
        Self {
            verbose,
            to_file,
            logs_dir: None,
        }
    }

    /// Logger that prints and writes nothing
    pub fn disabled() -> Self {
        Self::default()
    }

    /// Write log files to `dir` instead of ~/.smartcalc/logs
    pub fn with_logs_dir(mut self, dir: PathBuf) -> Self {
        self.logs_dir = Some(dir);
        self
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    /// Log an outgoing request; returns the timestamp that ties the
    /// response log to it.
    pub fn request(&self, url: &str, model: &str, body: &serde_json::Value, api_key: &str) -> i64 {
        let timestamp = chrono::Utc::now().timestamp_millis();
        log_request(url, body, api_key, self.verbose);

        if self.to_file {
            let written = self
                .resolve_logs_dir()
                .and_then(|dir| log_request_to_file(&dir, url, body, model, api_key, timestamp));
            self.report_file("Request", written);
        }
        timestamp
    }

    /// Log a received response
    pub fn response(&self, status: &reqwest::StatusCode, body: &str, model: &str, request_timestamp: i64) {
        log_response(status, body, self.verbose);

        if self.to_file {
            let written = self
                .resolve_logs_dir()
                .and_then(|dir| log_response_to_file(&dir, status, body, model, request_timestamp));
            self.report_file("Response", written);
        }
    }

    fn resolve_logs_dir(&self) -> Result<PathBuf> {
        match &self.logs_dir {
            Some(dir) => {
                fs::create_dir_all(dir)
                    .with_context(|| format!("Failed to create logs directory {}", dir.display()))?;
                Ok(dir.clone())
            }
            None => get_logs_dir(),
        }
    }

    fn report_file(&self, kind: &str, written: Result<PathBuf>) {
        match written {
            Ok(path) if self.verbose => {
                println!("{}", format!("📝 {} logged to: {}", kind, path.display()).bright_blue());
            }
            Ok(_) => {}
            Err(e) => eprintln!("{} {}", "⚠️".yellow(), e),
        }
    }
}

// URL, host, port and scheme as (label, value) pairs
fn describe_url(url: &str) -> Vec<(&'static str, String)> {
    let mut lines = vec![("URL", url.to_string())];
    if let Ok(parsed_url) = reqwest::Url::parse(url) {
        lines.push(("Host", parsed_url.host_str().unwrap_or("unknown").to_string()));
        lines.push(("Port", parsed_url.port().map(|p| p.to_string()).unwrap_or_else(||
            if parsed_url.scheme() == "https" { "443 (default)".to_string() } else { "80 (default)".to_string() }
        )));
        lines.push(("Scheme", parsed_url.scheme().to_string()));
    }
    lines
}

// Pretty-print JSON, fall back to raw text
fn pretty_body(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| serde_json::to_string_pretty(&v).ok())
        .unwrap_or_else(|| body.to_string())
}

fn print_truncated(text: &str) {
    if text.chars().count() > MAX_CONSOLE_BODY_CHARS {
        println!("{}", safe_truncate(text, MAX_CONSOLE_BODY_CHARS));
        println!("\n{}", format!("... (truncated, total {} bytes)", text.len()).bright_black());
    } else {
        println!("{}", text);
    }
}

fn file_safe(model: &str) -> String {
    model.replace(['/', ':', ' '], "-")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_request_log_file_contents() {
        let dir = TempDir::new().unwrap();
        let body = serde_json::json!({ "contents": [{ "parts": [{ "text": "15% من 1500" }] }] });

        let path = log_request_to_file(
            dir.path(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash:generateContent",
            &body,
            "gemini-2.5-flash",
            "AIzaSecretKey",
            1700000000000,
        )
        .unwrap();

        assert_eq!(path.file_name().unwrap(), "req-1700000000000-gemini-2.5-flash.txt");
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("HTTP REQUEST LOG"));
        assert!(content.contains("generativelanguage.googleapis.com"));
        assert!(content.contains("15% من 1500"));
        assert!(content.contains("AIza***"));
        assert!(!content.contains("AIzaSecretKey"));
    }

    #[test]
    fn test_response_log_file_pretty_prints_json() {
        let dir = TempDir::new().unwrap();
        let path = log_response_to_file(
            dir.path(),
            &reqwest::StatusCode::OK,
            r#"{"answer":"225"}"#,
            "openai/gpt-oss-120b",
            42,
        )
        .unwrap();

        assert_eq!(path.file_name().unwrap(), "resp-42-openai-gpt-oss-120b.txt");
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("Status: 200 OK"));
        assert!(content.contains("\"answer\": \"225\""));
    }

    #[test]
    fn test_request_logger_writes_pair_to_custom_dir() {
        let dir = TempDir::new().unwrap();
        let logs = dir.path().join("logs");
        let logger = RequestLogger::new(false, true).with_logs_dir(logs.clone());

        let ts = logger.request("http://localhost:8080/v1/chat/completions", "local", &serde_json::json!({}), "");
        logger.response(&reqwest::StatusCode::BAD_GATEWAY, "upstream down", "local", ts);

        let mut names: Vec<_> = fs::read_dir(&logs)
            .unwrap()
            .map(|e| e.unwrap().file_name().into_string().unwrap())
            .collect();
        names.sort();
        assert_eq!(names, vec![format!("req-{}-local.txt", ts), format!("resp-{}-local.txt", ts)]);
    }

    #[test]
    fn test_disabled_logger_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let logger = RequestLogger::disabled().with_logs_dir(dir.path().join("logs"));
        logger.request("http://localhost", "m", &serde_json::json!({}), "");
        assert!(!dir.path().join("logs").exists());
    }
}
