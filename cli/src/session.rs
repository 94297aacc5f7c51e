use std::io::{BufRead, Write};

use cmdack_host::{OwnedReply, StatusCode, encode_reply, respond_with_capacity};
use color_eyre::{
    Result,
    eyre::{WrapErr, eyre},
};
use serde::Serialize;
use tracing::debug;

use crate::{cli::OutputFormat, config::Messages};

#[derive(Debug, Serialize)]
struct Record<'a> {
    command: Option<&'a str>,
    capacity: usize,
    status: i32,
    outcome: &'static str,
    description: &'a str,
    response: &'a str,
}

/// Sends commands through the responder with a fixed buffer capacity and
/// prints each outcome to `out`.
pub struct Session<W> {
    capacity: usize,
    format: OutputFormat,
    messages: Messages,
    out: W,
    calls: usize,
    failures: usize,
}

impl<W: Write> Session<W> {
    pub fn new(capacity: usize, format: OutputFormat, messages: Messages, out: W) -> Self {
        Self {
            capacity,
            format,
            messages,
            out,
            calls: 0,
            failures: 0,
        }
    }

    pub fn send(&mut self, command: Option<&[u8]>) -> Result<StatusCode> {
        let reply = respond_with_capacity(command, self.capacity).wrap_err_with(|| {
            format!("cannot allocate a {}-byte response buffer", self.capacity)
        })?;
        let shown = command.map(String::from_utf8_lossy);
        debug!(
            command = ?shown,
            capacity = self.capacity,
            status = reply.status.code(),
            "responded"
        );

        self.calls += 1;
        if reply.status.is_error() {
            self.failures += 1;
        }
        self.write_reply(shown.as_deref(), &reply)?;
        Ok(reply.status)
    }

    /// Sends every line of `input` as a command. The line ending (`\n` or
    /// `\r\n`) is stripped; nothing else is trimmed.
    pub fn feed(&mut self, input: impl BufRead) -> Result<()> {
        for line in input.split(b'\n') {
            let mut line = line?;
            if line.last() == Some(&b'\r') {
                line.pop();
            }
            self.send(Some(line.as_slice()))?;
        }
        Ok(())
    }

    pub fn calls(&self) -> usize {
        self.calls
    }

    /// Calls whose outcome left no response in the buffer.
    pub fn failures(&self) -> usize {
        self.failures
    }

    pub fn finish(mut self) -> Result<W> {
        self.out.flush()?;
        Ok(self.out)
    }

    fn write_reply(&mut self, command: Option<&str>, reply: &OwnedReply) -> Result<()> {
        match self.format {
            OutputFormat::Text => writeln!(
                self.out,
                "{}\t{}\t{}",
                reply.status.code(),
                self.messages.describe(reply.status),
                reply.text
            )?,
            OutputFormat::Json => {
                let record = Record {
                    command,
                    capacity: self.capacity,
                    status: reply.status.code(),
                    outcome: reply.status.name(),
                    description: self.messages.describe(reply.status),
                    response: &reply.text,
                };
                serde_json::to_writer(&mut self.out, &record)?;
                writeln!(self.out)?;
            }
            OutputFormat::Frame => {
                let frame = encode_reply(reply)
                    .map_err(|err| eyre!("failed to encode reply: {err:?}"))?;
                self.out.write_all(&frame)?;
            }
        }
        Ok(())
    }
}
