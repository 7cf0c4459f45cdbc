use std::fmt::Display;
use std::io::{self, BufRead, BufReader, Lines, Read, Write};
use tracing::instrument;

/// A line oriented io interface.
#[derive(Debug)]
pub struct Io<W: Write, R: Read> {
    writer: W,
    reader: Lines<BufReader<R>>,
}

impl<W: Write, R: Read> Io<W, R> {
    pub fn new(writer: W, reader: R) -> Self {
        Io {
            writer,
            reader: BufReader::new(reader).lines(),
        }
    }

    /// Receive the next line stripped of surrounding whitespace, or `None` at the end of input.
    #[instrument(level = "trace", skip(self), ret, err)]
    pub fn recv(&mut self) -> io::Result<Option<String>> {
        match self.reader.next() {
            None => Ok(None),
            Some(line) => Ok(Some(line?.trim().into())),
        }
    }

    /// Send a line.
    #[instrument(level = "trace", skip(self, msg), err, fields(%msg))]
    pub fn send<T: Display>(&mut self, msg: T) -> io::Result<()> {
        writeln!(&mut self.writer, "{}", msg)
    }

    /// Flush the internal buffers.
    #[instrument(level = "trace", skip(self), err)]
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{collections::VecDeque, io::empty, str};
    use test_strategy::proptest;

    #[proptest]
    fn recv_strips_surrounding_whitespace(#[strategy("[a-h][1-8][a-h][1-8]")] s: String) {
        let mut buf = VecDeque::new();
        writeln!(&mut buf, "  {}\t", s)?;
        let mut io = Io::new(empty(), &mut buf);
        assert_eq!(io.recv()?, Some(s));
    }

    #[test]
    fn recv_returns_none_at_end_of_input() {
        let mut io = Io::new(empty(), empty());
        assert_eq!(io.recv().unwrap(), None);
    }

    #[proptest]
    fn send_appends_line_break(s: String) {
        let mut buf = Vec::new();
        let mut io = Io::new(&mut buf, empty());
        io.send(&s)?;
        io.flush()?;
        drop(io);
        assert_eq!(str::from_utf8(&buf)?, format!("{s}\n"));
    }
}
