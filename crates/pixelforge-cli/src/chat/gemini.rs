//! Google Generative Language API transport.
//!
//! Replies are requested with `streamGenerateContent?alt=sse` and read as
//! server-sent events, one `data: {json}` line per chunk.

use std::io::{BufRead, BufReader};

use serde::Serialize;

use super::{ChatError, ChatTransport, ChatTurn, Role};

/// Public API endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com";

/// Model used when none is given.
pub const DEFAULT_MODEL: &str = "gemini-pro";

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "GOOGLE_API_KEY";

/// Key sent when the environment variable is unset. The API rejects it.
pub const PLACEHOLDER_API_KEY: &str = "YOUR_API_KEY";

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    role: Role,
    parts: [Part<'a>; 1],
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

/// JSON body for a conversation.
pub fn request_body(history: &[ChatTurn]) -> Result<String, ChatError> {
    let request = GenerateRequest {
        contents: history
            .iter()
            .map(|turn| Content {
                role: turn.role,
                parts: [Part { text: &turn.text }],
            })
            .collect(),
    };
    Ok(serde_json::to_string(&request)?)
}

/// Extracts reply text from one line of the event stream.
///
/// Lines that are not `data:` events yield `None`, as do events without
/// any text parts. Multiple parts are concatenated.
pub fn parse_sse_line(line: &str) -> Result<Option<String>, ChatError> {
    let Some(data) = line.strip_prefix("data:") else {
        return Ok(None);
    };
    let data = data.trim_start();
    if data.is_empty() || data == "[DONE]" {
        return Ok(None);
    }

    let event: serde_json::Value = serde_json::from_str(data)?;
    let Some(parts) = event["candidates"][0]["content"]["parts"].as_array() else {
        return Ok(None);
    };

    let text: String = parts.iter().filter_map(|p| p["text"].as_str()).collect();
    Ok((!text.is_empty()).then_some(text))
}

/// Blocking HTTP transport for the Gemini streaming endpoint.
pub struct GeminiTransport {
    agent: ureq::Agent,
    endpoint: String,
    model: String,
    api_key: String,
}

impl GeminiTransport {
    pub fn new(
        endpoint: impl Into<String>,
        model: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            agent: ureq::agent(),
            endpoint: endpoint.into(),
            model: model.into(),
            api_key: api_key.into(),
        }
    }

    /// Streaming URL for the configured model, including the key.
    pub fn stream_url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:streamGenerateContent?alt=sse&key={}",
            self.endpoint.trim_end_matches('/'),
            self.model,
            self.api_key
        )
    }
}

impl ChatTransport for GeminiTransport {
    fn stream_reply(
        &mut self,
        history: &[ChatTurn],
        on_chunk: &mut dyn FnMut(&str) -> Result<(), ChatError>,
    ) -> Result<(), ChatError> {
        let body = request_body(history)?;

        let response = match self
            .agent
            .post(&self.stream_url())
            .set("Content-Type", "application/json")
            .send_string(&body)
        {
            Ok(response) => response,
            Err(ureq::Error::Status(status, response)) => {
                let body = response.into_string().unwrap_or_default();
                return Err(ChatError::Status { status, body });
            }
            Err(ureq::Error::Transport(t)) => return Err(ChatError::Transport(t.to_string())),
        };

        let reader = BufReader::new(response.into_reader());
        for line in reader.lines() {
            let line = line.map_err(ChatError::Stream)?;
            if let Some(text) = parse_sse_line(&line)? {
                on_chunk(&text)?;
            }
        }
        Ok(())
    }
}

/// API key from the environment, or the placeholder when unset.
///
/// The boolean is `true` when the placeholder was used.
pub fn api_key_from_env() -> (String, bool) {
    match std::env::var(API_KEY_ENV) {
        Ok(key) if !key.is_empty() => (key, false),
        _ => (PLACEHOLDER_API_KEY.to_string(), true),
    }
}
