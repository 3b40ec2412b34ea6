//! Clipboard access with a command-line fallback.
//!
//! The platform clipboard (arboard) is tried first; terminals without one
//! (headless sessions, stripped-down containers) fall back to piping the
//! text through whatever clipboard command the platform ships. Failures on
//! either path are logged, never surfaced to the user.

use std::io::Write;
use std::process::{Command, Stdio};
use stratus_core::{Error, Result};

/// A destination transcript text can be copied to
pub trait ClipboardProvider {
    /// Short name used in log lines
    fn name(&self) -> &'static str;

    /// Place the text on this clipboard
    fn set_text(&mut self, text: &str) -> Result<()>;
}

/// Platform clipboard backed by arboard
pub struct SystemClipboard;

impl ClipboardProvider for SystemClipboard {
    fn name(&self) -> &'static str {
        "system"
    }

    fn set_text(&mut self, text: &str) -> Result<()> {
        let mut clipboard = arboard::Clipboard::new().map_err(|e| Error::Clipboard(e.to_string()))?;
        clipboard
            .set_text(text.to_string())
            .map_err(|e| Error::Clipboard(e.to_string()))
    }
}

/// Fallback clipboard piping text through a platform clipboard command
pub struct CommandClipboard;

impl CommandClipboard {
    #[cfg(target_os = "macos")]
    const CANDIDATES: &[(&str, &[&str])] = &[("pbcopy", &[])];

    #[cfg(target_os = "linux")]
    const CANDIDATES: &[(&str, &[&str])] = &[
        ("wl-copy", &[]),
        ("xclip", &["-selection", "clipboard"]),
        ("xsel", &["--clipboard", "--input"]),
    ];

    #[cfg(target_os = "windows")]
    const CANDIDATES: &[(&str, &[&str])] = &[("clip", &[])];

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    const CANDIDATES: &[(&str, &[&str])] = &[];
}

impl ClipboardProvider for CommandClipboard {
    fn name(&self) -> &'static str {
        "command"
    }

    fn set_text(&mut self, text: &str) -> Result<()> {
        for (command, args) in Self::CANDIDATES {
            match pipe_to_command(command, args, text) {
                Ok(true) => return Ok(()),
                Ok(false) => continue,
                Err(e) => return Err(Error::Clipboard(format!("{}: {}", command, e))),
            }
        }

        Err(Error::Clipboard("no clipboard command available".to_string()))
    }
}

/// Pipe text into a command's stdin; `Ok(false)` means the command was not
/// found or did not succeed and the next candidate should be tried
fn pipe_to_command(command: &str, args: &[&str], text: &str) -> std::io::Result<bool> {
    let mut child = match Command::new(command)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
    {
        Ok(child) => child,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(false),
        Err(e) => return Err(e),
    };

    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(text.as_bytes())?;
    }

    let status = child.wait()?;
    Ok(status.success())
}

/// Copy text through the first provider that accepts it
///
/// Returns whether any provider succeeded. Failures are logged at debug
/// (per provider) and warn (when every provider fails); nothing is
/// surfaced to the user.
pub fn copy_with(providers: &mut [&mut dyn ClipboardProvider], text: &str) -> bool {
    for provider in providers.iter_mut() {
        match provider.set_text(text) {
            Ok(()) => {
                tracing::debug!(provider = provider.name(), "copied transcript to clipboard");
                return true;
            }
            Err(e) => {
                tracing::debug!(provider = provider.name(), error = %e, "clipboard provider failed");
            }
        }
    }

    tracing::warn!("unable to copy transcript to any clipboard");
    false
}

/// Copy text to the system clipboard, falling back to clipboard commands
pub fn copy_text(text: &str) -> bool {
    let mut system = SystemClipboard;
    let mut command = CommandClipboard;
    let mut providers: [&mut dyn ClipboardProvider; 2] = [&mut system, &mut command];
    copy_with(&mut providers, text)
}
