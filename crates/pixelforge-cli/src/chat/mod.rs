//! Interactive chat relay to a remote generative-text model.
//!
//! The loop reads prompts line by line, streams each reply chunk by chunk,
//! and keeps the whole conversation as history so the session is
//! multi-turn. The network side sits behind [`ChatTransport`] so the loop
//! can be driven offline.

pub mod gemini;

use std::io::{BufRead, Write};

use serde::Serialize;
use thiserror::Error;

pub use gemini::{GeminiTransport, DEFAULT_ENDPOINT, DEFAULT_MODEL};

/// Words that end the session, compared lowercased.
pub const QUIT_WORDS: [&str; 2] = ["quit", "exit"];

/// Who produced a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Model,
}

/// One message in the conversation history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatTurn {
    pub role: Role,
    pub text: String,
}

impl ChatTurn {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
        }
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self {
            role: Role::Model,
            text: text.into(),
        }
    }
}

/// Errors from the chat relay.
#[derive(Debug, Error)]
pub enum ChatError {
    /// The request never produced a response (DNS, TLS, connection reset).
    #[error("request failed: {0}")]
    Transport(String),

    /// The API answered with a non-success status.
    #[error("API returned status {status}: {body}")]
    Status { status: u16, body: String },

    /// Reading the event stream failed midway.
    #[error("failed to read response stream: {0}")]
    Stream(#[source] std::io::Error),

    /// An event carried JSON that could not be parsed.
    #[error("malformed response event: {0}")]
    Parse(#[from] serde_json::Error),

    /// Reading the prompt or writing the reply to the console failed.
    #[error("console I/O failed: {0}")]
    Console(#[from] std::io::Error),
}

/// Sends a conversation and streams the reply.
pub trait ChatTransport {
    /// Sends `history` (ending with the newest user turn) and calls
    /// `on_chunk` for each piece of reply text, in arrival order.
    fn stream_reply(
        &mut self,
        history: &[ChatTurn],
        on_chunk: &mut dyn FnMut(&str) -> Result<(), ChatError>,
    ) -> Result<(), ChatError>;
}

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// A quit word was entered.
    Quit,
    /// Input reached end of file.
    EndOfInput,
}

/// Runs the prompt loop until a quit word, end of input, or an error.
///
/// Returns the full history alongside how the session ended. On error the
/// user turn that triggered it is left out of the history.
pub fn run_chat_loop<R, W, T>(
    input: &mut R,
    output: &mut W,
    transport: &mut T,
) -> Result<(SessionEnd, Vec<ChatTurn>), ChatError>
where
    R: BufRead,
    W: Write,
    T: ChatTransport,
{
    let mut history: Vec<ChatTurn> = Vec::new();
    let mut line = String::new();

    loop {
        write!(output, "You: ")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            return Ok((SessionEnd::EndOfInput, history));
        }

        let prompt = line.trim_end_matches(['\r', '\n']);
        if QUIT_WORDS.contains(&prompt.to_lowercase().as_str()) {
            writeln!(output, "Goodbye!")?;
            return Ok((SessionEnd::Quit, history));
        }
        if prompt.is_empty() {
            continue;
        }

        history.push(ChatTurn::user(prompt));

        write!(output, "Model: ")?;
        output.flush()?;

        let mut reply = String::new();
        let streamed = transport.stream_reply(&history, &mut |chunk| {
            output.write_all(chunk.as_bytes())?;
            output.flush()?;
            reply.push_str(chunk);
            Ok(())
        });
        if let Err(e) = streamed {
            history.pop();
            return Err(e);
        }

        writeln!(output)?;
        history.push(ChatTurn::model(reply));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Cursor;

    /// Replies with canned chunks and records every history it was sent.
    struct FakeTransport {
        replies: Vec<Vec<&'static str>>,
        seen: Vec<Vec<ChatTurn>>,
        fail_on: Option<usize>,
    }

    impl FakeTransport {
        fn new(replies: Vec<Vec<&'static str>>) -> Self {
            Self {
                replies,
                seen: Vec::new(),
                fail_on: None,
            }
        }
    }

    impl ChatTransport for FakeTransport {
        fn stream_reply(
            &mut self,
            history: &[ChatTurn],
            on_chunk: &mut dyn FnMut(&str) -> Result<(), ChatError>,
        ) -> Result<(), ChatError> {
            let call = self.seen.len();
            self.seen.push(history.to_vec());
            if self.fail_on == Some(call) {
                return Err(ChatError::Status {
                    status: 400,
                    body: "API key not valid".into(),
                });
            }
            for chunk in &self.replies[call] {
                on_chunk(chunk)?;
            }
            Ok(())
        }
    }

    fn run(
        input: &str,
        transport: &mut FakeTransport,
    ) -> (Result<(SessionEnd, Vec<ChatTurn>), ChatError>, String) {
        let mut reader = Cursor::new(input.as_bytes().to_vec());
        let mut out = Vec::new();
        let result = run_chat_loop(&mut reader, &mut out, transport);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_quit_word_ends_session_case_insensitively() {
        let mut transport = FakeTransport::new(vec![]);
        let (result, out) = run("EXIT\nhello\n", &mut transport);
        let (end, history) = result.unwrap();
        assert_eq!(end, SessionEnd::Quit);
        assert!(history.is_empty());
        assert!(transport.seen.is_empty());
        assert!(out.ends_with("Goodbye!\n"));
    }

    #[test]
    fn test_streams_chunks_after_prefix() {
        let mut transport = FakeTransport::new(vec![vec!["Hel", "lo", "!"]]);
        let (result, out) = run("hi\nquit\n", &mut transport);
        result.unwrap();
        assert_eq!(out, "You: Model: Hello!\nYou: Goodbye!\n");
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let mut transport = FakeTransport::new(vec![vec!["ok"]]);
        let (result, _) = run("\n\nping\n", &mut transport);
        let (end, history) = result.unwrap();
        assert_eq!(end, SessionEnd::EndOfInput);
        assert_eq!(transport.seen.len(), 1);
        assert_eq!(history, vec![ChatTurn::user("ping"), ChatTurn::model("ok")]);
    }

    #[test]
    fn test_history_is_multi_turn() {
        let mut transport = FakeTransport::new(vec![vec!["one"], vec!["two"]]);
        let (result, _) = run("first\nsecond\nquit\n", &mut transport);
        result.unwrap();

        assert_eq!(transport.seen[0], vec![ChatTurn::user("first")]);
        assert_eq!(
            transport.seen[1],
            vec![
                ChatTurn::user("first"),
                ChatTurn::model("one"),
                ChatTurn::user("second"),
            ]
        );
    }

    #[test]
    fn test_transport_error_ends_loop() {
        let mut transport = FakeTransport::new(vec![vec!["one"]]);
        transport.fail_on = Some(1);
        let (result, _) = run("first\nsecond\nthird\n", &mut transport);
        let err = result.unwrap_err();
        assert!(matches!(err, ChatError::Status { status: 400, .. }));
        assert_eq!(transport.seen.len(), 2);
    }

    #[test]
    fn test_crlf_input_is_trimmed() {
        let mut transport = FakeTransport::new(vec![]);
        let (result, _) = run("Quit\r\n", &mut transport);
        assert_eq!(result.unwrap().0, SessionEnd::Quit);
    }
}
