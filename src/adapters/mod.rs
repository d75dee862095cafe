// Adapters layer: concrete sinks the solver writes moves to.

pub mod sink;

pub use sink::{BufferSink, ConsoleSink, CsvSink, JsonLinesSink, TextRenderer, VerifyingSink};
