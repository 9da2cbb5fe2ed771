mod writer;

pub use writer::SessionWriter;

use std::io::{Read, Write};
use std::path::Path;

use portable_pty::{CommandBuilder, PtySize, native_pty_system};

use crate::charset::Charset;

#[cfg(unix)]
pub fn default_shell() -> String {
    std::env::var("SHELL").unwrap_or_else(|_| "/bin/bash".to_string())
}

#[cfg(windows)]
pub fn default_shell() -> String {
    std::env::var("COMSPEC").unwrap_or_else(|_| "cmd.exe".to_string())
}

fn pty_size(rows: u16, cols: u16) -> PtySize {
    PtySize {
        rows,
        cols,
        pixel_width: 0,
        pixel_height: 0,
    }
}

/// An interactive shell attached through a pseudo-terminal.
///
/// The session owns the child process: dropping it kills and reaps the
/// shell.
pub struct Session {
    master: Box<dyn portable_pty::MasterPty + Send>,
    child: Box<dyn portable_pty::Child + Send + Sync>,
}

impl Session {
    pub fn spawn(shell: &str, rows: u16, cols: u16) -> anyhow::Result<Self> {
        Self::spawn_in(shell, rows, cols, None)
    }

    /// Spawns the shell with an explicit working directory.
    pub fn spawn_in(
        shell: &str,
        rows: u16,
        cols: u16,
        cwd: Option<&Path>,
    ) -> anyhow::Result<Self> {
        let pair = native_pty_system().openpty(pty_size(rows, cols))?;

        let mut cmd = CommandBuilder::new(shell);
        // Login shell so macOS picks up the user's profile PATH.
        #[cfg(target_os = "macos")]
        cmd.arg("-l");
        cmd.env("TERM", "xterm-256color");
        if let Some(dir) = cwd {
            cmd.cwd(dir);
        }
        let child = pair.slave.spawn_command(cmd)?;

        // The slave handle must not outlive the spawn, or the master reader
        // never sees EOF when the shell exits.
        drop(pair.slave);

        Ok(Session {
            master: pair.master,
            child,
        })
    }

    /// Clones a reader over the session's output; clone freely.
    pub fn reader(&self) -> anyhow::Result<Box<dyn Read + Send>> {
        self.master.try_clone_reader()
    }

    /// Takes the raw input transport. The PTY hands it out once; prefer
    /// [`Session::attach_writer`] over calling this directly.
    pub fn writer(&self) -> anyhow::Result<Box<dyn Write + Send>> {
        self.master.take_writer()
    }

    /// Builds the non-blocking writer the dispatcher transmits through.
    pub fn attach_writer(&self, charset: Charset) -> anyhow::Result<SessionWriter> {
        SessionWriter::attach(self, charset)
    }

    pub fn resize(&self, rows: u16, cols: u16) -> anyhow::Result<()> {
        self.master.resize(pty_size(rows, cols))?;
        Ok(())
    }

    /// Whether the shell process is still running.
    pub fn is_running(&mut self) -> bool {
        matches!(self.child.try_wait(), Ok(None))
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        if let Err(e) = self.child.kill() {
            // InvalidInput here means the process already exited.
            if e.kind() != std::io::ErrorKind::InvalidInput {
                log::warn!("failed to kill session shell: {e}");
            }
        }
        if let Err(e) = self.child.wait() {
            log::warn!("failed to reap session shell: {e}");
        }
    }
}
