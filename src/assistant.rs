//! Remote completion variant of the summarizer.
//!
//! Instead of the static table, `asref ask` sends the raw query to an
//! OpenAI-compatible chat-completions endpoint with a fixed tutor persona
//! and fixed sampling parameters, and prints the single response text.
//! There is deliberately no retry, no streaming, and no validation of the
//! response content beyond extracting the first choice — any failure is
//! caught at the CLI boundary and rendered as one generic warning line.

use anyhow::{bail, Result};
use std::time::Duration;

use crate::config::AssistantConfig;

const COMPLETIONS_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Persona carried as the system message on every request.
const SYSTEM_PROMPT: &str = "You are a tutor for CA students. Summarize ICAI Accounting \
Standards (AS) in simple language, give short practical examples where helpful, and stay \
strictly within Indian accounting standards. Keep answers concise and exam-oriented.";

/// Warning shown when the remote call fails for any reason.
pub const SERVICE_FAILURE_MESSAGE: &str =
    "Sorry, the assistant is unavailable right now. Please try again later.";

/// Ask the remote assistant to answer `query`.
///
/// Builds the fixed two-message instruction (persona + raw query) and
/// performs a single request. The outcome is the tagged result itself:
/// `Ok` carries the response text verbatim, `Err` carries the reason.
///
/// # Errors
///
/// - provider is `"disabled"` or unknown;
/// - `OPENAI_API_KEY` is not set;
/// - any network, auth, quota, or response-shape failure.
pub async fn ask(config: &AssistantConfig, query: &str) -> Result<String> {
    match config.provider.as_str() {
        "openai" => {}
        "disabled" => bail!("Assistant provider is disabled"),
        other => bail!("Unknown assistant provider: {}", other),
    }

    let api_key =
        std::env::var("OPENAI_API_KEY").map_err(|_| anyhow::anyhow!("OPENAI_API_KEY not set"))?;

    let model = config
        .model
        .as_ref()
        .ok_or_else(|| anyhow::anyhow!("assistant.model required"))?;

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.timeout_secs))
        .build()?;

    let body = request_body(config, model, query);

    let response = client
        .post(COMPLETIONS_URL)
        .header("Authorization", format!("Bearer {}", api_key))
        .header("Content-Type", "application/json")
        .json(&body)
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        let body_text = response.text().await.unwrap_or_default();
        bail!("Completions API error {}: {}", status, body_text);
    }

    let json: serde_json::Value = response.json().await?;
    parse_response(&json)
}

/// Build the JSON request body: two fixed-role messages plus the
/// configured sampling parameters.
fn request_body(config: &AssistantConfig, model: &str, query: &str) -> serde_json::Value {
    serde_json::json!({
        "model": model,
        "messages": [
            { "role": "system", "content": SYSTEM_PROMPT },
            { "role": "user", "content": query },
        ],
        "temperature": config.temperature,
        "max_tokens": config.max_tokens,
    })
}

/// Extract `choices[0].message.content` from the response JSON.
fn parse_response(json: &serde_json::Value) -> Result<String> {
    json.get("choices")
        .and_then(|c| c.as_array())
        .and_then(|c| c.first())
        .and_then(|c| c.get("message"))
        .and_then(|m| m.get("content"))
        .and_then(|t| t.as_str())
        .map(|t| t.to_string())
        .ok_or_else(|| anyhow::anyhow!("Invalid completions response: missing message content"))
}

/// CLI entry point for `asref ask`.
///
/// A failed call is a rendered outcome, not a process failure: the
/// generic warning goes to stdout and the reason to stderr, and the
/// command still exits 0.
pub async fn run_ask(config: &AssistantConfig, query: &str) -> Result<()> {
    match ask(config, query).await {
        Ok(text) => println!("{}", text),
        Err(e) => {
            eprintln!("assistant error: {}", e);
            println!("{}", SERVICE_FAILURE_MESSAGE);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn openai_config() -> AssistantConfig {
        AssistantConfig {
            provider: "openai".to_string(),
            model: Some("gpt-4o-mini".to_string()),
            temperature: 0.3,
            max_tokens: 500,
            timeout_secs: 30,
        }
    }

    #[test]
    fn test_request_body_carries_persona_and_query() {
        let config = openai_config();
        let body = request_body(&config, "gpt-4o-mini", "Summarize AS 10");

        assert_eq!(body["model"], "gpt-4o-mini");
        let messages = body["messages"].as_array().unwrap();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0]["role"], "system");
        assert_eq!(messages[0]["content"], SYSTEM_PROMPT);
        assert_eq!(messages[1]["role"], "user");
        assert_eq!(messages[1]["content"], "Summarize AS 10");
        assert_eq!(body["temperature"], 0.3);
        assert_eq!(body["max_tokens"], 500);
    }

    #[test]
    fn test_parse_response_happy_path() {
        let json = serde_json::json!({
            "choices": [
                { "message": { "role": "assistant", "content": "AS 10 covers PPE." } }
            ]
        });
        assert_eq!(parse_response(&json).unwrap(), "AS 10 covers PPE.");
    }

    #[test]
    fn test_parse_response_missing_choices() {
        let json = serde_json::json!({ "error": { "message": "quota exceeded" } });
        assert!(parse_response(&json).is_err());
    }

    #[test]
    fn test_parse_response_empty_choices() {
        let json = serde_json::json!({ "choices": [] });
        assert!(parse_response(&json).is_err());
    }

    #[tokio::test]
    async fn test_disabled_provider_errors() {
        let config = AssistantConfig::default();
        let err = ask(&config, "Summarize AS 10").await.unwrap_err();
        assert!(err.to_string().contains("disabled"));
    }

    #[tokio::test]
    async fn test_unknown_provider_errors() {
        let config = AssistantConfig {
            provider: "mystery".to_string(),
            ..openai_config()
        };
        let err = ask(&config, "Summarize AS 10").await.unwrap_err();
        assert!(err.to_string().contains("Unknown assistant provider"));
    }
}
