//! Per-character diagnostic sinks.
//!
//! A sink sees every emitted character together with the input character
//! that started its match. Sinks never influence the translation result.

use std::io::Write;

use tracing::debug;

pub trait Trace {
    fn step(&mut self, input: char, output: char);
}

/// Discards every event.
pub struct NoTrace;

impl Trace for NoTrace {
    fn step(&mut self, _input: char, _output: char) {}
}

impl<F: FnMut(char, char)> Trace for F {
    fn step(&mut self, input: char, output: char) {
        self(input, output)
    }
}

/// Writes one `<input> -> <output>` line per event.
///
/// The first write error disables the sink; the translation carries on.
pub struct WriterTrace<W: Write> {
    writer: W,
    failed: bool,
}

impl<W: Write> WriterTrace<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            failed: false,
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Trace for WriterTrace<W> {
    fn step(&mut self, input: char, output: char) {
        if self.failed {
            return;
        }
        if let Err(e) = writeln!(self.writer, "{input} -> {output}") {
            debug!("trace sink write failed, disabling: {e}");
            self.failed = true;
        }
    }
}
