//! # Stdio Transport
//!
//! Newline-delimited JSON over stdin/stdout. Inbound lines are read on a
//! background thread so `poll` can honour its timeout.

use anyhow::Result;
use std::io::{self, BufRead, BufReader, Write};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread;
use std::time::Duration;

use super::{MessageStream, OutboundStream};
use crate::bridge::events::{OutboundMessage, TransportEvent, WireFrame};

pub struct StdioMessageStream {
    receiver: Receiver<TransportEvent>,
    pending: Option<TransportEvent>,
}

impl StdioMessageStream {
    /// Read frames from the process's stdin
    pub fn new() -> Self {
        Self::from_reader(BufReader::new(io::stdin()))
    }

    /// Read frames from any line-oriented reader
    pub fn from_reader<R: BufRead + Send + 'static>(reader: R) -> Self {
        let (sender, receiver) = mpsc::channel();
        thread::spawn(move || read_frames(reader, sender));
        Self {
            receiver,
            pending: None,
        }
    }
}

impl Default for StdioMessageStream {
    fn default() -> Self {
        Self::new()
    }
}

fn read_frames<R: BufRead>(reader: R, sender: Sender<TransportEvent>) {
    for line in reader.lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                tracing::warn!("Failed to read inbound frame: {}", e);
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }

        match serde_json::from_str::<WireFrame>(&line) {
            Ok(frame) => {
                if sender.send(frame.into()).is_err() {
                    return;
                }
            }
            Err(e) => tracing::warn!("Skipping malformed frame: {}", e),
        }
    }
    let _ = sender.send(TransportEvent::Closed);
}

impl MessageStream for StdioMessageStream {
    fn poll(&mut self, timeout: Duration) -> Result<bool> {
        if self.pending.is_some() {
            return Ok(true);
        }
        match self.receiver.recv_timeout(timeout) {
            Ok(event) => {
                self.pending = Some(event);
                Ok(true)
            }
            Err(RecvTimeoutError::Timeout) => Ok(false),
            Err(RecvTimeoutError::Disconnected) => {
                self.pending = Some(TransportEvent::Closed);
                Ok(true)
            }
        }
    }

    fn read(&mut self) -> Result<TransportEvent> {
        match self.pending.take() {
            Some(event) => Ok(event),
            None => Ok(self.receiver.recv().unwrap_or(TransportEvent::Closed)),
        }
    }
}

/// Writes one JSON object per line
pub struct JsonLinesOutboundStream<W: Write> {
    writer: W,
}

impl JsonLinesOutboundStream<io::Stdout> {
    pub fn stdout() -> Self {
        Self {
            writer: io::stdout(),
        }
    }
}

impl<W: Write> JsonLinesOutboundStream<W> {
    pub fn with_writer(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send> OutboundStream for JsonLinesOutboundStream<W> {
    fn send(&mut self, message: &OutboundMessage) -> Result<()> {
        serde_json::to_writer(&mut self.writer, message)?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
