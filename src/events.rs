//! Form events as delivered by the UI event source.
//!
//! The binary reads one JSON object per line, e.g.
//! `{"event":"input","field":"email","value":"a@b.co"}`.

use crate::error::EventError;
use crate::form::Field;
use crate::models::FileEntry;
use serde::Deserialize;
use std::io;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

/// A user interaction with the booking modal.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "event", rename_all = "camelCase")]
pub enum FormEvent {
    Open,
    Close,
    Input { field: Field, value: String },
    Blur {
        field: Field,
        #[serde(default)]
        value: Option<String>,
    },
    Files { files: Vec<FileEntry> },
    Submit,
}

impl FormEvent {
    /// Parse a single event line.
    pub fn parse_line(line: &str) -> Result<Self, EventError> {
        Ok(serde_json::from_str(line.trim())?)
    }

    /// Decode one raw input line.
    pub fn from_bytes(line: Vec<u8>) -> Result<Self, EventError> {
        Self::parse_line(&String::from_utf8(line)?)
    }
}

/// Newline-delimited event source.
///
/// A line that fails to decode is handed back as an error and the reader
/// moves on to the next one. Bytes of a partially read line stay buffered
/// across a cancelled [`next_event`](Self::next_event), so the call can sit
/// in a `tokio::select!` loop.
pub struct EventReader<R> {
    reader: R,
    buf: Vec<u8>,
}

impl<R: AsyncBufRead + Unpin> EventReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
        }
    }

    /// Next non-blank line as an event, or `None` at end of input.
    pub async fn next_event(&mut self) -> io::Result<Option<Result<FormEvent, EventError>>> {
        loop {
            let read = self.reader.read_until(b'\n', &mut self.buf).await?;
            if read == 0 && self.buf.is_empty() {
                return Ok(None);
            }

            let line = std::mem::take(&mut self.buf);
            if line.iter().all(u8::is_ascii_whitespace) {
                continue;
            }
            return Ok(Some(FormEvent::from_bytes(line)));
        }
    }
}
