use crate::core::board::Board;
use crate::core::{Move, MoveSink, Puzzle, TextSink};
use crate::utils::error::{HanoiError, Result};
use std::io::Write;

/// Writes the print primitives straight to an `io::Write` (stdout in the CLI).
#[derive(Debug)]
pub struct ConsoleSink<W: Write> {
    writer: W,
}

impl<W: Write> ConsoleSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> TextSink for ConsoleSink<W> {
    fn emit_str(&mut self, s: &str) -> Result<()> {
        self.writer.write_all(s.as_bytes())?;
        Ok(())
    }

    fn emit_char(&mut self, c: char) -> Result<()> {
        let mut buf = [0u8; 4];
        self.writer.write_all(c.encode_utf8(&mut buf).as_bytes())?;
        Ok(())
    }

    fn emit_int(&mut self, i: u64) -> Result<()> {
        write!(self.writer, "{}", i)?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

/// In-memory text sink.
#[derive(Debug, Default, Clone)]
pub struct BufferSink {
    buffer: String,
}

impl BufferSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    pub fn into_string(self) -> String {
        self.buffer
    }
}

impl TextSink for BufferSink {
    fn emit_str(&mut self, s: &str) -> Result<()> {
        self.buffer.push_str(s);
        Ok(())
    }

    fn emit_char(&mut self, c: char) -> Result<()> {
        self.buffer.push(c);
        Ok(())
    }

    fn emit_int(&mut self, i: u64) -> Result<()> {
        self.buffer.push_str(&i.to_string());
        Ok(())
    }
}

/// Renders each move as one `Move disk <k> from rod <X> to rod <Y>` line
/// using only the three print primitives.
#[derive(Debug, Default)]
pub struct TextRenderer<T: TextSink> {
    out: T,
}

impl<T: TextSink> TextRenderer<T> {
    pub fn new(out: T) -> Self {
        Self { out }
    }

    pub fn get_ref(&self) -> &T {
        &self.out
    }

    pub fn into_inner(self) -> T {
        self.out
    }
}

impl<T: TextSink> MoveSink for TextRenderer<T> {
    fn emit_move(&mut self, mv: &Move) -> Result<()> {
        self.out.emit_str("Move disk ")?;
        self.out.emit_int(u64::from(mv.disk))?;
        self.out.emit_str(" from rod ")?;
        self.out.emit_char(mv.from.label())?;
        self.out.emit_str(" to rod ")?;
        self.out.emit_char(mv.to.label())?;
        self.out.emit_char('\n')
    }

    fn finish(&mut self) -> Result<()> {
        self.out.flush()
    }
}

/// One JSON object per line, e.g. `{"disk":1,"from":"A","to":"C"}`.
#[derive(Debug)]
pub struct JsonLinesSink<W: Write> {
    writer: W,
}

impl<W: Write> JsonLinesSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> MoveSink for JsonLinesSink<W> {
    fn emit_move(&mut self, mv: &Move) -> Result<()> {
        serde_json::to_writer(&mut self.writer, mv)?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

/// CSV with a `disk,from,to` header.
pub struct CsvSink<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> CsvSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(writer),
        }
    }

    pub fn into_inner(self) -> Result<W> {
        self.writer
            .into_inner()
            .map_err(|e| HanoiError::IoError(e.into_error()))
    }
}

impl<W: Write> MoveSink for CsvSink<W> {
    fn emit_move(&mut self, mv: &Move) -> Result<()> {
        self.writer.serialize(mv)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

/// Replays every move on a [`Board`] before forwarding it, so an illegal or
/// incomplete sequence surfaces as an error instead of as output.
#[derive(Debug)]
pub struct VerifyingSink<S: MoveSink> {
    board: Board,
    inner: S,
}

impl<S: MoveSink> VerifyingSink<S> {
    pub fn new(puzzle: &Puzzle, inner: S) -> Self {
        Self {
            board: Board::new(puzzle.disks, puzzle.rods),
            inner,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: MoveSink> MoveSink for VerifyingSink<S> {
    fn emit_move(&mut self, mv: &Move) -> Result<()> {
        self.board.apply(mv)?;
        self.inner.emit_move(mv)
    }

    fn finish(&mut self) -> Result<()> {
        self.board.ensure_solved()?;
        tracing::debug!(
            "Verified {} moves, tower complete",
            self.board.moves_applied()
        );
        self.inner.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Peg;

    #[test]
    fn test_text_renderer_line_format() {
        let mut sink = TextRenderer::new(BufferSink::new());
        sink.emit_move(&Move::new(2, Peg::A, Peg::C)).unwrap();
        assert_eq!(sink.get_ref().as_str(), "Move disk 2 from rod A to rod C\n");
    }

    #[test]
    fn test_console_sink_writes_bytes() {
        let mut sink = TextRenderer::new(ConsoleSink::new(Vec::<u8>::new()));
        sink.emit_move(&Move::new(1, Peg::B, Peg::A)).unwrap();
        sink.finish().unwrap();
        let bytes = sink.into_inner().into_inner();
        assert_eq!(String::from_utf8(bytes).unwrap(), "Move disk 1 from rod B to rod A\n");
    }

    #[test]
    fn test_verifying_sink_rejects_unfinished_tower() {
        let puzzle = Puzzle::new(2, Peg::A, Peg::C, Peg::B).unwrap();
        let mut sink = VerifyingSink::new(&puzzle, Vec::<Move>::new());
        sink.emit_move(&Move::new(1, Peg::A, Peg::B)).unwrap();
        assert!(sink.finish().is_err());
    }
}
