use crate::domain::model::Move;
use crate::utils::error::Result;

/// The three print primitives the move generator's text output is built from.
pub trait TextSink {
    fn emit_str(&mut self, s: &str) -> Result<()>;
    fn emit_char(&mut self, c: char) -> Result<()>;
    fn emit_int(&mut self, i: u64) -> Result<()>;

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Consumer of move events, in emission order.
pub trait MoveSink {
    fn emit_move(&mut self, mv: &Move) -> Result<()>;

    /// Called once after the last move.
    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}

impl<S: MoveSink + ?Sized> MoveSink for &mut S {
    fn emit_move(&mut self, mv: &Move) -> Result<()> {
        (**self).emit_move(mv)
    }

    fn finish(&mut self) -> Result<()> {
        (**self).finish()
    }
}

impl<S: MoveSink + ?Sized> MoveSink for Box<S> {
    fn emit_move(&mut self, mv: &Move) -> Result<()> {
        (**self).emit_move(mv)
    }

    fn finish(&mut self) -> Result<()> {
        (**self).finish()
    }
}

impl MoveSink for Vec<Move> {
    fn emit_move(&mut self, mv: &Move) -> Result<()> {
        self.push(*mv);
        Ok(())
    }
}
