//! Copy to the system clipboard through the terminal
//!
//! Uses the OSC 52 escape sequence, which most modern terminals (and tmux
//! with `set-clipboard on`) forward to the platform clipboard.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::io::{self, Write};

/// Build the OSC 52 sequence that places `text` on the clipboard
pub fn osc52_sequence(text: &str) -> String {
    format!("\x1b]52;c;{}\x07", STANDARD.encode(text))
}

/// Write the copy sequence to `out`
pub fn copy_to<W: Write>(out: &mut W, text: &str) -> io::Result<()> {
    out.write_all(osc52_sequence(text).as_bytes())?;
    out.flush()
}

/// Copy `text`; failures are logged, never surfaced to the session
pub fn copy(text: &str) -> bool {
    match copy_to(&mut io::stdout(), text) {
        Ok(()) => {
            tracing::debug!(chars = text.chars().count(), "Copied prompt to clipboard");
            true
        }
        Err(e) => {
            tracing::warn!(error = %e, "Could not copy text");
            false
        }
    }
}
