use std::io::Write;
use std::sync::mpsc;
use std::thread;

use crate::charset::Charset;
use crate::writer::{TerminalWriter, WriteRequest};

use super::Session;

/// Non-blocking `TerminalWriter` backed by a background pump thread.
///
/// `write` only enqueues; the pump drains the queue into the session
/// transport and exits once the writer is dropped or the transport fails.
pub struct SessionWriter {
    tx: mpsc::Sender<WriteRequest>,
    charset: Charset,
}

impl SessionWriter {
    /// Takes the session's transport and starts pumping queued payloads
    /// into it.
    pub fn attach(session: &Session, charset: Charset) -> anyhow::Result<Self> {
        Ok(Self::from_transport(session.writer()?, charset))
    }

    /// Starts the pump over an arbitrary transport.
    pub fn from_transport(mut transport: Box<dyn Write + Send>, charset: Charset) -> Self {
        let (tx, rx) = mpsc::channel::<WriteRequest>();

        thread::spawn(move || {
            while let Ok(request) = rx.recv() {
                if transport.write_all(request.as_bytes()).is_err() {
                    break;
                }
                if transport.flush().is_err() {
                    break;
                }
            }
        });

        Self { tx, charset }
    }

    /// Changes the charset used for subsequent conversions.
    pub fn set_charset(&mut self, charset: Charset) {
        self.charset = charset;
    }
}

impl TerminalWriter for SessionWriter {
    fn write(&mut self, request: WriteRequest) {
        let _ = self.tx.send(request);
    }

    fn charset(&self) -> Charset {
        self.charset
    }
}
