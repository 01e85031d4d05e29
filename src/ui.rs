// Terminal side of the CLI: logging setup, the spinner shown while a
// request is in flight, and the credential prompts used by `init`.
// Everything here writes to stderr so stdout carries only the report.

use anyhow::Result;
use dialoguer::{Input, Password};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;
use tracing::Level;

/// Install the stderr log subscriber. `verbosity` is the `-v` count.
pub fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Spinner on stderr; indicatif hides it when stderr is not a terminal.
pub fn spinner(message: impl Into<String>) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(message.into());
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

pub fn prompt_account_sid() -> Result<String> {
    let sid: String = Input::new()
        .with_prompt("EveryoneAPI Account SID")
        .interact_text()?;
    Ok(sid)
}

/// `Password` hides the token as it is typed.
pub fn prompt_auth_token() -> Result<String> {
    let token = Password::new()
        .with_prompt("EveryoneAPI Auth Token")
        .interact()?;
    Ok(token)
}
