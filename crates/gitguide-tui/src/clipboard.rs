//! Clipboard writes through OSC 52 escape sequences
//!
//! The terminal owns the system clipboard, so copying works over SSH and
//! needs no platform tools. Inside tmux the sequence is wrapped in a DCS
//! passthrough (`set -g allow-passthrough on` on tmux 3.3+).

use std::io::{self, Stdout, Write};

use base64::{engine::general_purpose::STANDARD, Engine as _};
use gitguide_core::prelude::*;

/// Destination for copied commands
pub trait Clipboard {
    fn copy(&mut self, text: &str) -> Result<()>;
}

/// `ESC ] 52 ; c ; <base64> BEL`, optionally inside `ESC P tmux; ... ESC \`
pub fn osc52_sequence(text: &str, tmux: bool) -> String {
    let osc = format!("\x1b]52;c;{}\x07", STANDARD.encode(text));
    if tmux {
        // ESC bytes are doubled inside the passthrough payload
        format!("\x1bPtmux;{}\x1b\\", osc.replace('\x1b', "\x1b\x1b"))
    } else {
        osc
    }
}

/// Writes OSC 52 sequences to any writer (stdout in the app)
pub struct Osc52Clipboard<W: Write> {
    writer: W,
    tmux: bool,
}

impl<W: Write> Osc52Clipboard<W> {
    pub fn new(writer: W, tmux: bool) -> Self {
        Self { writer, tmux }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl Osc52Clipboard<Stdout> {
    /// Clipboard on the process stdout; `tmux` comes from `$TMUX`
    pub fn stdout() -> Self {
        let tmux = std::env::var_os("TMUX").is_some_and(|v| !v.is_empty());
        Self::new(io::stdout(), tmux)
    }
}

impl<W: Write> Clipboard for Osc52Clipboard<W> {
    fn copy(&mut self, text: &str) -> Result<()> {
        let sequence = osc52_sequence(text, self.tmux);
        self.writer
            .write_all(sequence.as_bytes())
            .and_then(|()| self.writer.flush())
            .map_err(|e| Error::clipboard(e.to_string()))?;
        debug!("Copied {} bytes via OSC 52", text.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_sequence() {
        let expected = format!("\x1b]52;c;{}\x07", STANDARD.encode("git status"));
        assert_eq!(osc52_sequence("git status", false), expected);
    }

    #[test]
    fn test_tmux_passthrough_doubles_escape() {
        let encoded = STANDARD.encode("git log");
        let expected = format!("\x1bPtmux;\x1b\x1b]52;c;{encoded}\x07\x1b\\");
        assert_eq!(osc52_sequence("git log", true), expected);
    }

    #[test]
    fn test_copy_writes_sequence() {
        let mut clipboard = Osc52Clipboard::new(Vec::new(), false);
        clipboard.copy("git init").unwrap();

        let written = String::from_utf8(clipboard.into_inner()).unwrap();
        assert!(written.starts_with("\x1b]52;c;"));
        assert!(written.contains(&STANDARD.encode("git init")));
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_failure_is_clipboard_error() {
        let mut clipboard = Osc52Clipboard::new(BrokenPipe, false);
        let err = clipboard.copy("git init").unwrap_err();
        assert!(matches!(err, Error::Clipboard { .. }));
    }
}
