//! Chat command implementation

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use anyhow::Result;
use colored::Colorize;

use crate::chat::gemini::{api_key_from_env, API_KEY_ENV};
use crate::chat::{run_chat_loop, ChatTransport, GeminiTransport};

use super::reporting;

/// Run the chat command
///
/// # Arguments
/// * `model` - Model name
/// * `endpoint` - API base URL
///
/// # Returns
/// Exit code: 0 when the session is ended by the user, 1 on a transport failure
pub fn run(model: &str, endpoint: &str) -> Result<ExitCode> {
    let (api_key, placeholder) = api_key_from_env();
    if placeholder {
        reporting::print_warning(format!(
            "{} is not set; requests will be rejected until it is",
            API_KEY_ENV
        ));
    }

    let mut transport = GeminiTransport::new(endpoint, model, api_key);
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(&mut stdin.lock(), &mut stdout.lock(), &mut transport, model)
}

fn run_session<R: BufRead, W: Write, T: ChatTransport>(
    input: &mut R,
    output: &mut W,
    transport: &mut T,
    model: &str,
) -> Result<ExitCode> {
    writeln!(
        output,
        "{} {}. Type 'quit' or 'exit' to end the session.",
        "Chat is ready:".cyan().bold(),
        model
    )?;
    writeln!(output, "{}", "-".repeat(30))?;

    match run_chat_loop(input, output, transport) {
        Ok(_) => Ok(ExitCode::SUCCESS),
        Err(e) => {
            writeln!(output)?;
            eprintln!("{}: {}", "error".red(), e);
            eprintln!(
                "{}",
                "This might be due to an invalid API key or network issues.".dimmed()
            );
            Ok(ExitCode::from(1))
        }
    }
}
