pub mod printer;

pub use crate::domain::ports::OutputSink;
