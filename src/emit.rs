// Output seam.
//
// A Sink receives output fragments in order. The Emitter sits between the
// flush engine and the sink: it knows whether the output currently ends
// mid-line (an `<li>` whose inline content is still being written) and starts
// a fresh line before block-level tags so nested markup stays readable.

use std::convert::Infallible;
use std::io;

/// Destination for converted output.
pub trait Sink {
    type Error;

    /// Append a fragment of output. Fragments may or may not end in `\n`.
    fn emit(&mut self, fragment: &str) -> Result<(), Self::Error>;
}

impl Sink for String {
    type Error = Infallible;

    fn emit(&mut self, fragment: &str) -> Result<(), Infallible> {
        self.push_str(fragment);
        Ok(())
    }
}

/// Adapts any [`io::Write`] into a [`Sink`].
#[derive(Debug)]
pub struct IoSink<W> {
    writer: W,
}

impl<W: io::Write> IoSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: io::Write> Sink for IoSink<W> {
    type Error = io::Error;

    fn emit(&mut self, fragment: &str) -> io::Result<()> {
        self.writer.write_all(fragment.as_bytes())
    }
}

/// Line-aware writer over a sink.
pub(crate) struct Emitter<'s, S: Sink + ?Sized> {
    sink: &'s mut S,
    mid_line: bool,
}

impl<'s, S: Sink + ?Sized> Emitter<'s, S> {
    pub fn new(sink: &'s mut S) -> Self {
        Self { sink, mid_line: false }
    }

    /// A complete line: `indent`, `text`, newline.
    pub fn line(&mut self, indent: &str, text: &str) -> Result<(), S::Error> {
        self.break_line()?;
        self.sink.emit(indent)?;
        self.sink.emit(text)?;
        self.sink.emit("\n")
    }

    /// Start a line with `tag` and leave it open for inline content.
    pub fn open(&mut self, indent: &str, tag: &str) -> Result<(), S::Error> {
        self.break_line()?;
        self.sink.emit(indent)?;
        self.sink.emit(tag)?;
        self.mid_line = true;
        Ok(())
    }

    /// Inline content continuing the current line.
    pub fn text(&mut self, text: &str) -> Result<(), S::Error> {
        self.sink.emit(text)?;
        self.mid_line = true;
        Ok(())
    }

    /// Finish the current line with `tag`, or write it on its own indented
    /// line when nothing is pending.
    pub fn close(&mut self, indent: &str, tag: &str) -> Result<(), S::Error> {
        if !self.mid_line {
            self.sink.emit(indent)?;
        }
        self.sink.emit(tag)?;
        self.mid_line = false;
        self.sink.emit("\n")
    }

    fn break_line(&mut self) -> Result<(), S::Error> {
        if self.mid_line {
            self.mid_line = false;
            self.sink.emit("\n")?;
        }
        Ok(())
    }
}
