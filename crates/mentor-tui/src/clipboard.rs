//! Clipboard writes via the OSC 52 escape sequence.
//!
//! Works in iTerm2, kitty, WezTerm, Ghostty, and most modern terminals
//! without any helper binary. The write can still fail (stdout closed,
//! unsupported terminal muxing); callers surface that to the user rather
//! than flashing a false "Copied!".

use std::io::Write;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use mentor_core::prelude::*;

/// Some terminals truncate oversized OSC 52 payloads; cap well below that.
const MAX_PAYLOAD: usize = 64 * 1024;

fn osc52_sequence(text: &str) -> String {
    let encoded = STANDARD.encode(text.as_bytes());
    format!("\x1b]52;c;{encoded}\x07")
}

/// Write `text` to the system clipboard.
pub fn copy(text: &str) -> Result<()> {
    if text.len() > MAX_PAYLOAD {
        return Err(Error::clipboard("text too large for OSC 52 transfer"));
    }
    let mut stdout = std::io::stdout();
    stdout.write_all(osc52_sequence(text).as_bytes())?;
    stdout.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_shape() {
        let seq = osc52_sequence("hello");
        assert!(seq.starts_with("\x1b]52;c;"));
        assert!(seq.ends_with('\x07'));
        assert!(seq.contains("aGVsbG8="));
    }

    #[test]
    fn test_oversized_payload_rejected() {
        let big = "x".repeat(MAX_PAYLOAD + 1);
        assert!(copy(&big).is_err());
    }
}
