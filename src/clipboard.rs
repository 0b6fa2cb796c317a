use crate::error::{KvsError, Result};
use std::io::Write;
use std::process::{Command, Stdio};

/// Copies text to the system clipboard in an OS-specific way.
/// - macOS: uses pbcopy
/// - Linux: uses xclip, falling back to xsel
/// - Windows: uses clip.exe
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    #[cfg(target_os = "macos")]
    {
        pipe_to("pbcopy", &[], text)
    }

    #[cfg(target_os = "linux")]
    {
        match pipe_to("xclip", &["-selection", "clipboard"], text) {
            Ok(()) => Ok(()),
            Err(_) => pipe_to("xsel", &["--clipboard", "--input"], text).map_err(|e| {
                KvsError::Clipboard(format!("{} (install xclip or xsel)", e))
            }),
        }
    }

    #[cfg(target_os = "windows")]
    {
        pipe_to("clip", &[], text)
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        Err(KvsError::Clipboard(
            "clipboard not supported on this platform".to_string(),
        ))
    }
}

/// Spawn `program` and feed `text` to its stdin.
#[allow(dead_code)]
fn pipe_to(program: &str, args: &[&str], text: &str) -> Result<()> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .spawn()
        .map_err(|e| KvsError::Clipboard(format!("failed to spawn {}: {}", program, e)))?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(text.as_bytes())
            .map_err(|e| KvsError::Clipboard(format!("failed to write to {}: {}", program, e)))?;
    }

    let status = child
        .wait()
        .map_err(|e| KvsError::Clipboard(format!("failed to wait for {}: {}", program, e)))?;

    if status.success() {
        Ok(())
    } else {
        Err(KvsError::Clipboard(format!(
            "{} exited with {}",
            program, status
        )))
    }
}
